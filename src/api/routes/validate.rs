//! URL Validation Route
//!
//! - POST /api/validate-url - Check profile URL format

use axum::{extract::rejection::JsonRejection, Json};

use crate::api::dto::{UrlRequest, ValidateResponse};
use crate::api::error::ApiResult;
use crate::api::routes::profile::required_url;
use crate::scraper::is_profile_url;

/// POST /api/validate-url
///
/// Answers whether the URL has the profile URL format. No page is fetched.
pub async fn validate_url(
    payload: Result<Json<UrlRequest>, JsonRejection>,
) -> ApiResult<Json<ValidateResponse>> {
    let url = required_url(payload)?;
    let valid = is_profile_url(&url);

    tracing::debug!(url = %url, valid, "Validated profile URL");

    let message = if valid {
        "Valid SkillRack profile URL"
    } else {
        "Invalid URL format"
    };

    Ok(Json(ValidateResponse {
        valid,
        message: Some(message.to_string()),
    }))
}
