//! The canonical Olympic events table.
//!
//! This crate holds the cleaned dataset every analytics query reads:
//! - [`EventRecord`] rows with a builder for tests and fixtures
//! - [`CanonicalTable`], an immutable, cheaply cloned handle over the rows
//! - [`RecordQuery`] filters and [`distinct_by`] first-occurrence dedup
//! - [`snapshot`] loading from the preprocessing step's JSON output

pub mod error;
pub mod query;
pub mod record;
pub mod snapshot;
pub mod table;

pub use common::{Medal, MedalStatus, Selection, Sex, Year};
pub use error::{DatasetError, Result};
pub use query::RecordQuery;
pub use record::{AthleteKey, EventRecord, EventRecordBuilder, MedalEventKey};
pub use table::{CanonicalTable, distinct_by};
