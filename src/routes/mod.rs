pub mod common;
pub mod lookup;

pub use common::{common_routes, common_routes_with_ready};
pub use lookup::lookup_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Lookup and health routes with request tracing.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(lookup_routes(state))
        .layer(TraceLayer::new_for_http())
}
