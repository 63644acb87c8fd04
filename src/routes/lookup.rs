//! Lookup routes: states, counties by state, index records and localities by county.

use crate::handlers::lookup::{list_counties, list_index_records, list_localities, list_states};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn lookup_routes(state: AppState) -> Router {
    Router::new()
        .route("/states", get(list_states))
        .route("/states/:state_name", get(list_counties))
        .route("/states/:state_name/:county_name", get(list_index_records))
        .route(
            "/states/:state_name/:county_name/localities",
            get(list_localities),
        )
        .with_state(state)
}
