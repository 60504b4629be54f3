use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

// GET /api/health
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        version: Some(state.config.version.clone()),
    })
}

// HEAD /api/health
pub async fn health_head() -> StatusCode {
    StatusCode::OK
}
