//! Shared value types for the Olympics analytics system.

pub mod types;

pub use types::{Medal, MedalStatus, OVERALL_ALIASES, ParseYearError, Selection, Sex, Year};
