//! Application layer services.
//!
//! Services orchestrate repository and cache calls and provide a clean API for
//! HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::mapping_resolver::MappingResolver`] - Cache-aside mapping resolution

pub mod services;
