//! Share link and calendar download endpoints.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Serialize;

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ShareLink {
    pub url: String,
}

/// GET /api/events/:id/share - Link to the event on the public page.
pub async fn share_event(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<ShareLink> {
    let mut session = state.session.lock().await;
    let url = session.share_link(&id, Utc::now())?;
    success(ShareLink { url })
}

/// GET /api/events/:id/calendar - Download the event as an `.ics` file.
pub async fn download_calendar(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let file = state.session.lock().await.calendar(&id)?;
    let disposition = format!("attachment; filename=\"{}\"", file.file_name);

    Ok((
        [
            (header::CONTENT_TYPE, "text/calendar; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.body,
    )
        .into_response())
}
