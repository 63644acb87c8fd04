//! Lookup handlers: one repository call each, wrapped in an envelope.

use crate::error::AppError;
use crate::model::{County, IndexRecord, Locality, State as StateRecord};
use crate::response::Envelope;
use crate::service::LookupRepository;
use crate::state::AppState;
use axum::extract::{Path, State};

/// GET /states
pub async fn list_states(
    State(state): State<AppState>,
) -> Result<Envelope<Vec<StateRecord>>, AppError> {
    let states = LookupRepository::list_states(&state.provider).await?;
    Ok(Envelope::ok(states))
}

/// GET /states/:state_name: 404 when the state has no counties.
pub async fn list_counties(
    State(state): State<AppState>,
    Path(state_name): Path<String>,
) -> Result<Envelope<Vec<County>>, AppError> {
    let counties = LookupRepository::list_counties(&state.provider, &state_name).await?;
    if counties.is_empty() {
        return Err(AppError::NotFound(format!("no counties for state '{}'", state_name)));
    }
    Ok(Envelope::ok(counties))
}

/// GET /states/:state_name/:county_name: 404 when the county has no index records.
pub async fn list_index_records(
    State(state): State<AppState>,
    Path((state_name, county_name)): Path<(String, String)>,
) -> Result<Envelope<Vec<IndexRecord>>, AppError> {
    let records =
        LookupRepository::list_index_records(&state.provider, &state_name, &county_name).await?;
    if records.is_empty() {
        return Err(AppError::NotFound(format!(
            "no index records for county '{}' in state '{}'",
            county_name, state_name
        )));
    }
    let records = if state.expose_credentials {
        records
    } else {
        records.into_iter().map(IndexRecord::redacted).collect()
    };
    Ok(Envelope::ok(records))
}

/// GET /states/:state_name/:county_name/localities: empty result is still 200.
pub async fn list_localities(
    State(state): State<AppState>,
    Path((state_name, county_name)): Path<(String, String)>,
) -> Result<Envelope<Vec<Locality>>, AppError> {
    let localities =
        LookupRepository::list_localities(&state.provider, &state_name, &county_name).await?;
    Ok(Envelope::ok(localities))
}
