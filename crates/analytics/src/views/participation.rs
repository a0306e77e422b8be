//! Participation trends over the years.

use std::collections::BTreeMap;
use std::str::FromStr;

use dataset::{CanonicalTable, EventRecord, Sex, Year, distinct_by};
use serde::Serialize;

use crate::derived::DerivedTable;
use crate::error::AnalyticsError;

/// Column whose distinct values are counted per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Participating countries (rows without a region are not counted).
    Region,
    Event,
    /// Athletes, identified by name.
    Athlete,
    Sport,
}

impl Dimension {
    /// Returns the value of this dimension for a record.
    pub fn value_of(self, record: &EventRecord) -> Option<&str> {
        match self {
            Dimension::Region => record.region.as_deref(),
            Dimension::Event => Some(&record.event),
            Dimension::Athlete => Some(&record.name),
            Dimension::Sport => Some(&record.sport),
        }
    }

    /// Dataset column name of this dimension.
    pub fn column(self) -> &'static str {
        match self {
            Dimension::Region => "region",
            Dimension::Event => "Event",
            Dimension::Athlete => "Name",
            Dimension::Sport => "Sport",
        }
    }
}

impl FromStr for Dimension {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "region" | "country" | "nation" => Ok(Dimension::Region),
            "event" => Ok(Dimension::Event),
            "athlete" | "name" => Ok(Dimension::Athlete),
            "sport" => Ok(Dimension::Sport),
            _ => Err(AnalyticsError::UnknownDimension(s.to_string())),
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.column())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    #[serde(rename = "Year")]
    pub year: Year,
    #[serde(rename = "Count")]
    pub count: u32,
}

/// Number of distinct dimension values per year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountOverTime {
    pub dimension: Dimension,
    pub rows: Vec<YearCount>,
}

impl CountOverTime {
    pub fn count_for(&self, year: Year) -> Option<u32> {
        self.rows.iter().find(|r| r.year == year).map(|r| r.count)
    }
}

impl DerivedTable for CountOverTime {
    fn name(&self) -> &'static str {
        "count_over_time"
    }

    fn columns(&self) -> Vec<&'static str> {
        vec!["Year", "Count"]
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Counts each distinct value of `dimension` once per year it appears in.
///
/// Every year of the table gets a row, ascending, even when no row of that
/// year carries a value for the dimension.
pub fn count_over_time(table: &CanonicalTable, dimension: Dimension) -> CountOverTime {
    let mut counts: BTreeMap<Year, u32> = table.years().into_iter().map(|y| (y, 0)).collect();

    let with_value = table.iter().filter(|r| dimension.value_of(r).is_some());
    for record in distinct_by(with_value, |r| (r.year, dimension.value_of(r))) {
        *counts.entry(record.year).or_default() += 1;
    }

    CountOverTime {
        dimension,
        rows: counts
            .into_iter()
            .map(|(year, count)| YearCount { year, count })
            .collect(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SexParticipationRow {
    #[serde(rename = "Year")]
    pub year: Year,
    #[serde(rename = "Male")]
    pub male: u32,
    #[serde(rename = "Female")]
    pub female: u32,
}

/// Male and female athlete counts per year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SexParticipation {
    pub rows: Vec<SexParticipationRow>,
}

impl DerivedTable for SexParticipation {
    fn name(&self) -> &'static str {
        "sex_participation"
    }

    fn columns(&self) -> Vec<&'static str> {
        vec!["Year", "Male", "Female"]
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Counts distinct athletes of each sex per year.
///
/// Athletes are first reduced to one row per (Name, Region), so an athlete
/// is counted only in the year of their first appearance. Years present for
/// either sex appear with a 0 for the other.
pub fn sex_participation(table: &CanonicalTable) -> SexParticipation {
    let mut per_year: BTreeMap<Year, SexParticipationRow> = BTreeMap::new();
    for athlete in distinct_by(table, EventRecord::athlete_key) {
        let row = per_year
            .entry(athlete.year)
            .or_insert(SexParticipationRow {
                year: athlete.year,
                male: 0,
                female: 0,
            });
        match athlete.sex {
            Sex::Male => row.male += 1,
            Sex::Female => row.female += 1,
        }
    }

    SexParticipation {
        rows: per_year.into_values().collect(),
    }
}
