//! HTTP JSON API serving Olympic analytics views.
//!
//! Each endpoint runs one aggregation over the shared canonical table and
//! returns the derived table as JSON, with structured logging (tracing) and
//! Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use analytics::AnalyticsEngine;
use axum::Router;
use axum::routing::get;
use dataset::CanonicalTable;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::system::metrics))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/medals/tally", get(routes::medals::tally))
        .route("/medals/tally/noc", get(routes::medals::tally_by_noc))
        .route("/medals/events", get(routes::medals::distinct_events))
        .route("/overview", get(routes::overview::stats))
        .route("/overview/options", get(routes::overview::options))
        .route("/overview/trends/{dimension}", get(routes::overview::trend))
        .route("/overview/events-heatmap", get(routes::overview::events_heatmap))
        .route("/athletes/top", get(routes::athletes::top))
        .route("/athletes/profiles", get(routes::athletes::profiles))
        .route("/athletes/ages", get(routes::athletes::ages))
        .route(
            "/athletes/ages/gold-by-sport",
            get(routes::athletes::gold_ages_by_sport),
        )
        .route(
            "/athletes/participation-by-sex",
            get(routes::athletes::participation_by_sex),
        )
        .route(
            "/countries/{country}/medals-by-year",
            get(routes::countries::medals_by_year),
        )
        .route(
            "/countries/{country}/sport-heatmap",
            get(routes::countries::sport_heatmap),
        )
        .route(
            "/countries/{country}/top-athletes",
            get(routes::countries::top_athletes),
        )
        .with_state(state)
        .merge(metrics_router)
        .fallback(routes::not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state over a loaded canonical table.
pub fn create_state(table: CanonicalTable) -> Arc<AppState> {
    Arc::new(AppState::new(AnalyticsEngine::new(table)))
}
