//! Core domain entities.
//!
//! - [`Mapping`] - A short key and its destination URL
//! - [`Resolution`] - Tri-state outcome of a lookup (not attempted, found, absent)

pub mod mapping;
pub mod resolution;

pub use mapping::Mapping;
pub use resolution::Resolution;
