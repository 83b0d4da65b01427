//! DTOs for mapping lookups.

use serde::{Deserialize, Serialize};

/// Query string of `GET /api/v1/url`.
#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    /// Destination URL to look up.
    pub q: Option<String>,
}

/// Existing mapping for a destination URL.
#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub key: String,
    pub short_url: String,
    pub destination_url: String,
}
