use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Year of an Olympic Games edition.
///
/// Years are discrete ordinal keys: they are compared and grouped, never
/// used in arithmetic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Year(i32);

impl Year {
    /// Creates a year from a raw value.
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw year value.
    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for Year {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Year {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        year.0
    }
}

/// Error returned when text is not a valid year.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid year: {0:?}")]
pub struct ParseYearError(pub String);

impl FromStr for Year {
    type Err = ParseYearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .map(Self)
            .map_err(|_| ParseYearError(s.to_string()))
    }
}

/// A medal awarded in an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl std::fmt::Display for Medal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Medal::Gold => write!(f, "Gold"),
            Medal::Silver => write!(f, "Silver"),
            Medal::Bronze => write!(f, "Bronze"),
        }
    }
}

/// Medal outcome of a participation, with an explicit "No Medal" value for
/// tables handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MedalStatus {
    Gold,
    Silver,
    Bronze,
    #[serde(rename = "No Medal")]
    NoMedal,
}

impl From<Option<Medal>> for MedalStatus {
    fn from(medal: Option<Medal>) -> Self {
        match medal {
            Some(Medal::Gold) => MedalStatus::Gold,
            Some(Medal::Silver) => MedalStatus::Silver,
            Some(Medal::Bronze) => MedalStatus::Bronze,
            None => MedalStatus::NoMedal,
        }
    }
}

impl std::fmt::Display for MedalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MedalStatus::Gold => write!(f, "Gold"),
            MedalStatus::Silver => write!(f, "Silver"),
            MedalStatus::Bronze => write!(f, "Bronze"),
            MedalStatus::NoMedal => write!(f, "No Medal"),
        }
    }
}

/// Sex of an athlete as recorded in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

/// A filter choice that is either the `Overall` sentinel or one concrete value.
///
/// `Overall` means "do not filter on this dimension". It is never a real
/// value of the underlying column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Selection<T> {
    #[default]
    Overall,
    Only(T),
}

impl<T> Selection<T> {
    /// Returns true if this is the `Overall` sentinel.
    pub fn is_overall(&self) -> bool {
        matches!(self, Selection::Overall)
    }

    /// Returns the concrete value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Selection::Overall => None,
            Selection::Only(value) => Some(value),
        }
    }

    /// Returns true if `candidate` passes this selection.
    pub fn admits<U>(&self, candidate: &U) -> bool
    where
        T: PartialEq<U>,
        U: ?Sized,
    {
        match self {
            Selection::Overall => true,
            Selection::Only(value) => value == candidate,
        }
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Selection::Overall, Selection::Only)
    }
}

impl Selection<String> {
    /// Creates a selection of one concrete string value.
    pub fn only(value: impl Into<String>) -> Self {
        Selection::Only(value.into())
    }

    /// Borrows the concrete value as a string slice.
    pub fn as_deref(&self) -> Selection<&str> {
        match self {
            Selection::Overall => Selection::Overall,
            Selection::Only(value) => Selection::Only(value.as_str()),
        }
    }
}

/// Text accepted as the `Overall` sentinel, compared case-insensitively.
pub const OVERALL_ALIASES: [&str; 2] = ["Overall", "all"];

impl<T: FromStr> FromStr for Selection<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if OVERALL_ALIASES
            .iter()
            .any(|alias| alias.eq_ignore_ascii_case(trimmed))
        {
            return Ok(Selection::Overall);
        }
        trimmed.parse().map(Selection::Only)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::Overall => write!(f, "Overall"),
            Selection::Only(value) => write!(f, "{value}"),
        }
    }
}

impl<T: Serialize> Serialize for Selection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Selection::Overall => serializer.serialize_str("Overall"),
            Selection::Only(value) => value.serialize(serializer),
        }
    }
}
