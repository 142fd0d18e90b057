//! Health Routes
//!
//! - GET / - Service description and status
//! - GET /health/live - Liveness check (process is alive)

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::{EndpointInfo, HealthResponse};
use crate::api::state::AppState;

/// GET /
///
/// Health check listing the available endpoints.
pub async fn service_info(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let endpoints = [
        ("POST /api/profile", "Extract SkillRack profile data"),
        ("POST /api/validate-url", "Validate SkillRack profile URL format"),
        ("GET /", "Health check"),
    ]
    .into_iter()
    .map(|(route, description)| EndpointInfo {
        route: route.to_string(),
        description: description.to_string(),
    })
    .collect();

    Json(HealthResponse {
        message: "SkillBoard API is running!".to_string(),
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        endpoints,
    })
}

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}
