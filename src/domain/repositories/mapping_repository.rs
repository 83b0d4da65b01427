//! Repository trait for durable mapping storage.

use crate::domain::entities::Mapping;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to the durable mapping store.
///
/// The store maintains two lookup paths: by short key (primary) and by
/// destination URL (secondary index). Both may fail on transport or
/// availability problems; the resolver downgrades such failures to an absent
/// mapping.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Finds the mapping stored under a short key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_key(&self, key: &str) -> Result<Option<Mapping>, AppError>;

    /// Finds the mapping whose destination equals `destination_url`.
    ///
    /// Used by callers to check whether a long URL already has a key before
    /// creating a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_destination_url(
        &self,
        destination_url: &str,
    ) -> Result<Option<Mapping>, AppError>;

    /// Checks if the storage backend is reachable.
    async fn health_check(&self) -> bool;
}
