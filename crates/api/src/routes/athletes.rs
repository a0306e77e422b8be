//! Athlete-wise endpoints.

use std::sync::Arc;

use analytics::views::FEATURED_SPORTS;
use analytics::{Query, View};
use axum::Json;
use axum::extract::{Query as Params, State};
use serde::Deserialize;

use super::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct SportParams {
    pub sport: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SportsParams {
    /// Comma-separated sport names.
    pub sports: Option<String>,
}

/// GET /athletes/top?sport=: most decorated athletes.
#[tracing::instrument(skip(state))]
pub async fn top(
    State(state): State<Arc<AppState>>,
    Params(params): Params<SportParams>,
) -> Result<Json<View>, ApiError> {
    let query = Query::most_successful(params.sport.as_deref())?;
    Ok(Json(state.run(query).await?))
}

/// GET /athletes/profiles?sport=: height, weight and medal per athlete.
#[tracing::instrument(skip(state))]
pub async fn profiles(
    State(state): State<Arc<AppState>>,
    Params(params): Params<SportParams>,
) -> Result<Json<View>, ApiError> {
    let query = Query::athlete_profiles(params.sport.as_deref())?;
    Ok(Json(state.run(query).await?))
}

/// GET /athletes/ages: age distributions overall and per medal.
#[tracing::instrument(skip(state))]
pub async fn ages(State(state): State<Arc<AppState>>) -> Result<Json<View>, ApiError> {
    Ok(Json(state.run(Query::AgeDistributions).await?))
}

/// GET /athletes/ages/gold-by-sport?sports=: gold-medalist ages per sport.
///
/// Without `sports`, the featured sports are used.
#[tracing::instrument(skip(state))]
pub async fn gold_ages_by_sport(
    State(state): State<Arc<AppState>>,
    Params(params): Params<SportsParams>,
) -> Result<Json<View>, ApiError> {
    let sports = match params.sports {
        Some(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
        None => FEATURED_SPORTS.iter().map(|s| s.to_string()).collect(),
    };
    Ok(Json(
        state.run(Query::GoldMedalistAgesBySport { sports }).await?,
    ))
}

/// GET /athletes/participation-by-sex: male and female athletes per year.
#[tracing::instrument(skip(state))]
pub async fn participation_by_sex(
    State(state): State<Arc<AppState>>,
) -> Result<Json<View>, ApiError> {
    Ok(Json(state.run(Query::SexParticipation).await?))
}
