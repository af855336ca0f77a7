//! Session API endpoints.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;

use super::{success, ApiResult};
use crate::models::SetViewerRequest;
use crate::notice::Notice;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct SessionInfo {
    pub viewer: String,
    pub notice: Option<Notice>,
}

/// GET /api/session - Current viewer and any live notice.
pub async fn get_session(State(state): State<AppState>) -> ApiResult<SessionInfo> {
    let session = state.session.lock().await;
    success(SessionInfo {
        viewer: session.viewer().to_string(),
        notice: session.notice(Utc::now()).cloned(),
    })
}

/// PUT /api/session/viewer - Change the viewer's display name.
pub async fn set_viewer(
    State(state): State<AppState>,
    Json(request): Json<SetViewerRequest>,
) -> ApiResult<String> {
    let mut session = state.session.lock().await;
    let name = session.set_viewer(&request.name).await?.to_string();
    success(name)
}

/// POST /api/reset - Restore the sample roster.
pub async fn reset_roster(State(state): State<AppState>) -> ApiResult<usize> {
    let mut session = state.session.lock().await;
    session.reset(Utc::now()).await?;
    success(session.roster().len())
}
