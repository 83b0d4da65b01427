//! HTTP middleware for request processing.
//!
//! Provides request-scoped mapping resolution and observability middleware.

pub mod mapping;
pub mod tracing;
