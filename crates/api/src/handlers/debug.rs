use crate::{
    dto::{RecursiveDomainsResponse, RecursiveRecordsResponse},
    state::AppState,
};
use axum::{extract::State, Json};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_recursive_domains")]
pub async fn get_recursive_domains(State(state): State<AppState>) -> Json<RecursiveDomainsResponse> {
    let response = RecursiveDomainsResponse::from(state.cache.recursive_domains.snapshot());
    debug!(count = response.count, "Recursive domains dumped");
    Json(response)
}

#[instrument(skip(state), name = "api_get_recursive_records")]
pub async fn get_recursive_records(State(state): State<AppState>) -> Json<RecursiveRecordsResponse> {
    let response = RecursiveRecordsResponse::from(state.cache.recursive_records.snapshot());
    debug!(count = response.count, "Recursive records dumped");
    Json(response)
}
