//! Dataset-wide overview endpoints.

use std::sync::Arc;

use analytics::{Query, View};
use axum::Json;
use axum::extract::{Path, State};

use super::AppState;
use crate::error::ApiError;

/// GET /overview: headline counts.
#[tracing::instrument(skip(state))]
pub async fn stats(State(state): State<Arc<AppState>>) -> Result<Json<View>, ApiError> {
    Ok(Json(state.run(Query::OverviewStats).await?))
}

/// GET /overview/options: filter choices, each list led by `Overall`.
#[tracing::instrument(skip(state))]
pub async fn options(State(state): State<Arc<AppState>>) -> Result<Json<View>, ApiError> {
    Ok(Json(state.run(Query::SelectionOptions).await?))
}

/// GET /overview/trends/{dimension}: distinct values of a column per year.
#[tracing::instrument(skip(state))]
pub async fn trend(
    State(state): State<Arc<AppState>>,
    Path(dimension): Path<String>,
) -> Result<Json<View>, ApiError> {
    let query = Query::count_over_time(&dimension)?;
    Ok(Json(state.run(query).await?))
}

/// GET /overview/events-heatmap: distinct events per sport and year.
#[tracing::instrument(skip(state))]
pub async fn events_heatmap(State(state): State<Arc<AppState>>) -> Result<Json<View>, ApiError> {
    Ok(Json(state.run(Query::SportEventHeatmap).await?))
}
