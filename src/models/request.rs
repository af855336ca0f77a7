//! Request bodies accepted by the API.

use serde::Deserialize;

/// Request body for creating a new run. Missing required fields arrive as
/// empty strings and are rejected during validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub pace_band: String,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub capacity: Option<f64>,
    #[serde(default)]
    pub note: Option<String>,
}

/// Request body for changing the viewer's display name.
#[derive(Debug, Clone, Deserialize)]
pub struct SetViewerRequest {
    pub name: String,
}
