//! Aggregation views over the canonical Olympic events table.
//!
//! This crate turns the immutable [`dataset::CanonicalTable`] into the small
//! derived tables a dashboard renders:
//! - [`DerivedTable`] trait shared by every result
//! - [`views`] with one function per aggregation
//! - [`Query`] and [`View`] to request views by value
//! - [`AnalyticsEngine`] for dispatch with tracing and metrics

pub mod derived;
pub mod engine;
pub mod error;
pub mod heatmap;
pub mod query;
pub mod views;

pub use derived::DerivedTable;
pub use engine::AnalyticsEngine;
pub use error::{AnalyticsError, Result};
pub use heatmap::Heatmap;
pub use query::{Query, View, parse_selection};
pub use views::Dimension;
