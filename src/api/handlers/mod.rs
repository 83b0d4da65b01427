//! HTTP request handlers.
//!
//! Mapping handlers read the [`crate::domain::entities::Resolution`] left in
//! the request extensions by [`crate::api::middleware::mapping`].

pub mod health;
pub mod lookup;
pub mod redirect;

pub use health::health_handler;
pub use lookup::lookup_handler;
pub use redirect::redirect_handler;
