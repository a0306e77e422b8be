//! Country-wise endpoints.
//!
//! A country without rows yields empty tables, not an error.

use std::sync::Arc;

use analytics::{Query, View};
use axum::Json;
use axum::extract::{Path, State};

use super::AppState;
use crate::error::ApiError;

/// GET /countries/{country}/medals-by-year
#[tracing::instrument(skip(state))]
pub async fn medals_by_year(
    State(state): State<Arc<AppState>>,
    Path(country): Path<String>,
) -> Result<Json<View>, ApiError> {
    Ok(Json(state.run(Query::YearwiseMedalCount { country }).await?))
}

/// GET /countries/{country}/sport-heatmap
#[tracing::instrument(skip(state))]
pub async fn sport_heatmap(
    State(state): State<Arc<AppState>>,
    Path(country): Path<String>,
) -> Result<Json<View>, ApiError> {
    Ok(Json(state.run(Query::CountrySportHeatmap { country }).await?))
}

/// GET /countries/{country}/top-athletes
#[tracing::instrument(skip(state))]
pub async fn top_athletes(
    State(state): State<Arc<AppState>>,
    Path(country): Path<String>,
) -> Result<Json<View>, ApiError> {
    Ok(Json(
        state
            .run(Query::MostSuccessfulForCountry { country })
            .await?,
    ))
}
