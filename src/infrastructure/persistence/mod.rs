//! PostgreSQL repository implementations.
//!
//! - [`PgMappingRepository`] - Mapping lookups by short key and destination URL

pub mod pg_mapping_repository;

pub use pg_mapping_repository::PgMappingRepository;
