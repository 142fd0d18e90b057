//! Profile Route
//!
//! - POST /api/profile - Extract profile data for a URL

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{ProfileResponse, UrlRequest};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::scraper::extract_profile;

/// POST /api/profile
///
/// Extract the profile behind the URL from the configured source.
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UrlRequest>, JsonRejection>,
) -> ApiResult<Json<ProfileResponse>> {
    let url = required_url(payload)?;
    tracing::info!(url = %url, "Received profile request");

    let profile = extract_profile(state.source.as_ref(), &url).await?;

    Ok(Json(ProfileResponse::extracted(profile)))
}

/// Trimmed, non-empty `url` from a request body
pub(crate) fn required_url(
    payload: Result<Json<UrlRequest>, JsonRejection>,
) -> ApiResult<String> {
    let Json(request) = payload.map_err(|e| {
        tracing::debug!(error = %e, "Rejected request body");
        ApiError::Validation("No JSON data provided".to_string())
    })?;

    let url = request.url.trim();
    if url.is_empty() {
        return Err(ApiError::Validation("Profile URL is required".to_string()));
    }

    Ok(url.to_string())
}
