//! Domain layer containing business entities and storage contracts.
//!
//! - [`entities`] - [`entities::Mapping`] and the tri-state [`entities::Resolution`]
//! - [`repositories`] - Durable storage trait consumed by the resolver
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.

pub mod entities;
pub mod repositories;
