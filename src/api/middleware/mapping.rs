//! Request-scoped mapping resolution.
//!
//! These layers resolve the request's mapping once and store the
//! [`Resolution`] in the request extensions. A request that already carries a
//! `Found` or `Absent` resolution from an earlier stage is passed through
//! untouched. Handlers read the outcome with `Extension<Resolution>`.

use axum::{
    extract::{Path, Query, Request, State},
    middleware::Next,
    response::Response,
};

use crate::api::dto::mapping::LookupQuery;
use crate::application::services::Lookup;
use crate::domain::entities::Resolution;
use crate::state::AppState;

fn take_memo(req: &Request) -> Resolution {
    req.extensions()
        .get::<Resolution>()
        .cloned()
        .unwrap_or_default()
}

/// Resolves the `{key}` path parameter.
///
/// # Example
///
/// ```rust,ignore
/// Router::new()
///     .route("/{key}", get(redirect_handler))
///     .route_layer(middleware::from_fn_with_state(state, mapping::by_key));
/// ```
pub async fn by_key(
    State(state): State<AppState>,
    Path(key): Path<String>,
    mut req: Request,
    next: Next,
) -> Response {
    let memo = take_memo(&req);
    let resolution = state
        .resolver
        .resolve_memoized(memo, Lookup::Key(&key))
        .await;

    req.extensions_mut().insert(resolution);
    next.run(req).await
}

/// Resolves the `q` query parameter as a destination URL.
///
/// Without `q` the request keeps whatever memo it had, normally
/// [`Resolution::NotAttempted`].
pub async fn by_destination(
    State(state): State<AppState>,
    Query(query): Query<LookupQuery>,
    mut req: Request,
    next: Next,
) -> Response {
    let memo = take_memo(&req);
    let resolution = match query.q.as_deref() {
        Some(url) => {
            state
                .resolver
                .resolve_memoized(memo, Lookup::DestinationUrl(url))
                .await
        }
        None => memo,
    };

    req.extensions_mut().insert(resolution);
    next.run(req).await
}
