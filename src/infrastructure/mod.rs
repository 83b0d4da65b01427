//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of the contracts the resolver consumes.
//!
//! # Modules
//!
//! - [`cache`] - Cache gateway and backends (Redis and no-op)
//! - [`persistence`] - PostgreSQL repository implementations

pub mod cache;
pub mod persistence;
