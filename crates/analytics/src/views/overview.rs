//! Dataset-wide summaries: headline counts, filter choices, events heatmap.

use std::collections::HashSet;

use dataset::{CanonicalTable, Selection, Year, distinct_by};
use serde::Serialize;

use crate::derived::DerivedTable;
use crate::heatmap::Heatmap;

/// Headline counts of the whole dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct OverviewStats {
    /// Distinct Games years.
    pub editions: usize,
    /// Distinct host cities.
    pub hosts: usize,
    pub sports: usize,
    pub events: usize,
    /// Distinct athlete names.
    pub athletes: usize,
    /// Distinct resolved countries.
    pub nations: usize,
}

impl DerivedTable for OverviewStats {
    fn name(&self) -> &'static str {
        "overview_stats"
    }

    fn columns(&self) -> Vec<&'static str> {
        vec!["editions", "hosts", "sports", "events", "athletes", "nations"]
    }

    fn row_count(&self) -> usize {
        1
    }
}

pub fn overview_stats(table: &CanonicalTable) -> OverviewStats {
    fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> usize {
        values.collect::<HashSet<_>>().len()
    }

    OverviewStats {
        editions: table.years().len(),
        hosts: distinct(table.iter().map(|r| r.city.as_str())),
        sports: table.sports().len(),
        events: distinct(table.iter().map(|r| r.event.as_str())),
        athletes: distinct(table.iter().map(|r| r.name.as_str())),
        nations: table.regions().len(),
    }
}

/// Choices offered by the dashboard filters, `Overall` first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SelectionOptions {
    pub years: Vec<Selection<Year>>,
    pub countries: Vec<Selection<String>>,
    pub sports: Vec<Selection<String>>,
}

impl SelectionOptions {
    /// Concrete countries, without the `Overall` sentinel.
    pub fn country_names(&self) -> impl Iterator<Item = &str> {
        self.countries
            .iter()
            .filter_map(|c| c.value().map(String::as_str))
    }
}

impl DerivedTable for SelectionOptions {
    fn name(&self) -> &'static str {
        "selection_options"
    }

    fn columns(&self) -> Vec<&'static str> {
        vec!["years", "countries", "sports"]
    }

    fn row_count(&self) -> usize {
        self.years.len().max(self.countries.len()).max(self.sports.len())
    }
}

/// Sorted distinct years, countries and sports, each list led by `Overall`.
pub fn selection_options(table: &CanonicalTable) -> SelectionOptions {
    fn with_overall<T>(values: impl IntoIterator<Item = T>) -> Vec<Selection<T>> {
        std::iter::once(Selection::Overall)
            .chain(values.into_iter().map(Selection::Only))
            .collect()
    }

    SelectionOptions {
        years: with_overall(table.years()),
        countries: with_overall(table.regions().into_iter().map(String::from)),
        sports: with_overall(table.sports().into_iter().map(String::from)),
    }
}

/// Number of distinct events per sport (rows) and year (columns).
pub fn sport_event_heatmap(table: &CanonicalTable) -> Heatmap {
    let events = distinct_by(table, |r| (r.year, r.sport.as_str(), r.event.as_str()));
    Heatmap::count(
        "sport_event_heatmap",
        events.into_iter().map(|r| (r.sport.as_str(), r.year)),
    )
}
