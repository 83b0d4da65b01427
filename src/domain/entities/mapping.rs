//! Mapping entity associating a short key with its destination URL.

use serde::Serialize;

/// A short key and the destination URL it points to.
///
/// Mappings are created elsewhere and never mutated by this service; the
/// storage layer guarantees a key maps to exactly one destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mapping {
    pub key: String,
    pub destination_url: String,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(key: impl Into<String>, destination_url: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            destination_url: destination_url.into(),
        }
    }
}
