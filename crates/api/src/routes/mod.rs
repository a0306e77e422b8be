//! HTTP route handlers.

pub mod athletes;
pub mod countries;
pub mod medals;
pub mod overview;
pub mod system;

use analytics::{AnalyticsEngine, Query, View};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub engine: AnalyticsEngine,
}

impl AppState {
    pub fn new(engine: AnalyticsEngine) -> Self {
        Self { engine }
    }

    /// Computes a view off the async runtime.
    pub async fn run(&self, query: Query) -> Result<View, ApiError> {
        let engine = self.engine.clone();
        tokio::task::spawn_blocking(move || engine.run(&query))
            .await
            .map_err(|e| ApiError::Internal(format!("view computation failed: {e}")))
    }
}

/// Fallback for unknown routes.
pub async fn not_found(uri: axum::http::Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {uri}"))
}
