//! Medal tally endpoints.

use std::sync::Arc;

use analytics::{Query, View};
use axum::Json;
use axum::extract::{Query as Params, State};
use serde::Deserialize;

use super::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct TallyParams {
    pub year: Option<String>,
    pub country: Option<String>,
}

/// GET /medals/tally?year=&country=: tally narrowed by year and country.
///
/// Missing parameters mean `Overall`.
#[tracing::instrument(skip(state))]
pub async fn tally(
    State(state): State<Arc<AppState>>,
    Params(params): Params<TallyParams>,
) -> Result<Json<View>, ApiError> {
    let query = Query::filtered_medal_tally(params.year.as_deref(), params.country.as_deref())?;
    Ok(Json(state.run(query).await?))
}

/// GET /medals/tally/noc: tally per NOC over the whole dataset.
#[tracing::instrument(skip(state))]
pub async fn tally_by_noc(State(state): State<Arc<AppState>>) -> Result<Json<View>, ApiError> {
    Ok(Json(state.run(Query::MedalTally).await?))
}

/// GET /medals/events: the canonical table reduced to distinct medal events.
#[tracing::instrument(skip(state))]
pub async fn distinct_events(State(state): State<Arc<AppState>>) -> Result<Json<View>, ApiError> {
    Ok(Json(state.run(Query::DistinctMedalEvents).await?))
}
