//! Medal tallies over distinct medal events.

use std::collections::BTreeMap;

use dataset::{CanonicalTable, EventRecord, Medal, RecordQuery, Selection, Year, distinct_by};
use serde::Serialize;

use crate::derived::DerivedTable;

/// Collapses rows that describe the same medal award.
///
/// Team members share one (Team, NOC, Games, Year, City, Sport, Event, Medal)
/// tuple; only the first row of each tuple is kept.
pub fn distinct_medal_events(table: &CanonicalTable) -> CanonicalTable {
    CanonicalTable::from_rows(medal_events(table))
}

pub(crate) fn medal_events(table: &CanonicalTable) -> Vec<&EventRecord> {
    distinct_by(table, EventRecord::medal_event_key)
}

/// Column a tally is grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TallyGrouping {
    Noc,
    Region,
    Year,
}

impl TallyGrouping {
    fn key_of(self, record: &EventRecord) -> Option<TallyKey> {
        match self {
            TallyGrouping::Noc => Some(TallyKey::Noc(record.noc.clone())),
            TallyGrouping::Region => record.region.clone().map(TallyKey::Region),
            TallyGrouping::Year => Some(TallyKey::Year(record.year)),
        }
    }

    fn column(self) -> &'static str {
        match self {
            TallyGrouping::Noc => "NOC",
            TallyGrouping::Region => "region",
            TallyGrouping::Year => "Year",
        }
    }
}

/// Group key of one tally row. All rows of one tally use the same variant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum TallyKey {
    #[serde(rename = "NOC")]
    Noc(String),
    #[serde(rename = "region")]
    Region(String),
    Year(Year),
}

/// Gold, silver and bronze counts of one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MedalCounts {
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
}

impl MedalCounts {
    /// Counts one row; rows without a medal add nothing.
    pub fn record(&mut self, medal: Option<Medal>) {
        match medal {
            Some(Medal::Gold) => self.gold += 1,
            Some(Medal::Silver) => self.silver += 1,
            Some(Medal::Bronze) => self.bronze += 1,
            None => {}
        }
    }

    pub fn total(&self) -> u32 {
        self.gold + self.silver + self.bronze
    }
}

/// One row of a medal tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TallyRow {
    #[serde(flatten)]
    pub key: TallyKey,
    #[serde(rename = "Gold")]
    pub gold: u32,
    #[serde(rename = "Silver")]
    pub silver: u32,
    #[serde(rename = "Bronze")]
    pub bronze: u32,
    #[serde(rename = "Total")]
    pub total: u32,
}

impl TallyRow {
    fn new(key: TallyKey, counts: MedalCounts) -> Self {
        Self {
            key,
            gold: counts.gold,
            silver: counts.silver,
            bronze: counts.bronze,
            total: counts.total(),
        }
    }
}

/// A medal tally table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedalTally {
    pub grouping: TallyGrouping,
    pub rows: Vec<TallyRow>,
}

impl DerivedTable for MedalTally {
    fn name(&self) -> &'static str {
        "medal_tally"
    }

    fn columns(&self) -> Vec<&'static str> {
        vec![self.grouping.column(), "Gold", "Silver", "Bronze", "Total"]
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Tally of distinct medal events per NOC, most golds first.
pub fn medal_tally(table: &CanonicalTable) -> MedalTally {
    tally(medal_events(table), TallyGrouping::Noc)
}

/// Tally narrowed by year and country selections.
///
/// With a fixed country and an `Overall` year the tally is grouped by year,
/// ascending, to show the country's progression. Every other combination is
/// grouped by country with the most golds first. A year or country that does
/// not occur in the table yields an empty tally.
pub fn filtered_medal_tally(
    table: &CanonicalTable,
    year: &Selection<Year>,
    country: &Selection<String>,
) -> MedalTally {
    let query = RecordQuery::from_selections(year, country);
    let grouping = if year.is_overall() && !country.is_overall() {
        TallyGrouping::Year
    } else {
        TallyGrouping::Region
    };
    let rows = medal_events(table).into_iter().filter(|r| query.matches(r));
    tally(rows, grouping)
}

fn tally<'a>(
    rows: impl IntoIterator<Item = &'a EventRecord>,
    grouping: TallyGrouping,
) -> MedalTally {
    // Every participating group gets a row, including groups with no medals.
    let mut groups: BTreeMap<TallyKey, MedalCounts> = BTreeMap::new();
    for record in rows {
        let Some(key) = grouping.key_of(record) else {
            continue;
        };
        groups.entry(key).or_default().record(record.medal);
    }

    let mut rows: Vec<TallyRow> = groups
        .into_iter()
        .map(|(key, counts)| TallyRow::new(key, counts))
        .collect();

    // Stable: equal gold counts stay in ascending key order.
    if grouping != TallyGrouping::Year {
        rows.sort_by(|a, b| b.gold.cmp(&a.gold));
    }

    MedalTally { grouping, rows }
}
