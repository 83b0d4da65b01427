//! Business logic services for the application layer.

pub mod mapping_resolver;

pub use mapping_resolver::{Lookup, MappingResolver, ResolverSettings};
