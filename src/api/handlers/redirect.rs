//! Handler for short key redirect.

use axum::{
    Extension,
    extract::Path,
    response::{IntoResponse, Redirect},
};
use serde_json::json;

use crate::domain::entities::Resolution;
use crate::error::AppError;

/// Redirects a short key to its destination URL.
///
/// # Endpoint
///
/// `GET /{key}`
///
/// The mapping is resolved by [`crate::api::middleware::mapping::by_key`]
/// before this handler runs (cache first, then storage).
///
/// # Errors
///
/// Returns 404 Not Found when the key has no mapping. Storage or cache
/// outages look the same as a missing key to the client.
pub async fn redirect_handler(
    Path(key): Path<String>,
    Extension(resolution): Extension<Resolution>,
) -> Result<impl IntoResponse, AppError> {
    match resolution {
        Resolution::Found(mapping) => Ok(Redirect::temporary(&mapping.destination_url)),
        Resolution::Absent | Resolution::NotAttempted => Err(AppError::not_found(
            "Short link not found",
            json!({ "key": key }),
        )),
    }
}
