//! Handler for destination URL lookup.

use axum::{Extension, Json, extract::State};
use serde_json::json;

use crate::api::dto::mapping::LookupResponse;
use crate::domain::entities::Resolution;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the existing short key for a destination URL.
///
/// # Endpoint
///
/// `GET /api/v1/url?q=<destination url>`
///
/// Always answered from storage; the cache is keyed by short key only.
/// Callers use this to avoid creating a second mapping for the same URL.
///
/// # Response
///
/// ```json
/// {
///   "key": "abc123",
///   "short_url": "https://s.example.com/abc123",
///   "destination_url": "https://example.com/page"
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request when `q` is missing
/// - 404 Not Found when no mapping exists for the URL
pub async fn lookup_handler(
    State(state): State<AppState>,
    Extension(resolution): Extension<Resolution>,
) -> Result<Json<LookupResponse>, AppError> {
    match resolution {
        Resolution::Found(mapping) => Ok(Json(LookupResponse {
            short_url: state.short_url(&mapping.key),
            key: mapping.key,
            destination_url: mapping.destination_url,
        })),
        Resolution::Absent => Err(AppError::not_found(
            "No mapping exists for this URL",
            json!({}),
        )),
        Resolution::NotAttempted => Err(AppError::bad_request(
            "Missing query parameter",
            json!({ "parameter": "q" }),
        )),
    }
}
