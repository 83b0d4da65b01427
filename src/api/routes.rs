//! API route configuration.

use crate::api::handlers::{health_handler, lookup_handler, redirect_handler};
use crate::api::middleware::mapping;
use crate::state::AppState;
use axum::{Router, middleware, routing::get};

/// Public routes.
///
/// # Endpoints
///
/// - `GET /{key}`            - Redirect to the destination of a short key
/// - `GET /api/v1/url?q=...` - Existing mapping for a destination URL
/// - `GET /health`           - Storage and cache health
///
/// The mapping routes carry a route layer that resolves the request's mapping
/// before the handler runs.
pub fn public_routes(state: AppState) -> Router<AppState> {
    let by_key = Router::new()
        .route("/{key}", get(redirect_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            mapping::by_key,
        ));

    let by_destination = Router::new()
        .route("/api/v1/url", get(lookup_handler))
        .route_layer(middleware::from_fn_with_state(
            state,
            mapping::by_destination,
        ));

    Router::new()
        .merge(by_key)
        .merge(by_destination)
        .route("/health", get(health_handler))
}
