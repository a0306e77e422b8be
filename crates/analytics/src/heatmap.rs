//! Sport × Year count matrices.

use std::collections::{BTreeMap, BTreeSet};

use dataset::Year;
use serde::Serialize;

use crate::derived::DerivedTable;

/// A count matrix with one row per sport and one column per year.
///
/// Rows and columns are sorted ascending. Only years that occur in the
/// counted rows become columns; absent (sport, year) cells hold 0.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Heatmap {
    #[serde(skip)]
    name: &'static str,
    #[serde(rename = "index")]
    sports: Vec<String>,
    columns: Vec<Year>,
    #[serde(rename = "data")]
    cells: Vec<Vec<u32>>,
}

impl Heatmap {
    /// Counts occurrences of each (sport, year) pair.
    pub fn count<'a>(name: &'static str, pairs: impl IntoIterator<Item = (&'a str, Year)>) -> Self {
        let mut counts: BTreeMap<(&str, Year), u32> = BTreeMap::new();
        let mut years = BTreeSet::new();
        for (sport, year) in pairs {
            *counts.entry((sport, year)).or_default() += 1;
            years.insert(year);
        }

        let columns: Vec<Year> = years.into_iter().collect();
        let sports: Vec<String> = counts
            .keys()
            .map(|(sport, _)| *sport)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(String::from)
            .collect();
        let cells = sports
            .iter()
            .map(|sport| {
                columns
                    .iter()
                    .map(|year| {
                        counts
                            .get(&(sport.as_str(), *year))
                            .copied()
                            .unwrap_or(0)
                    })
                    .collect()
            })
            .collect();

        Self {
            name,
            sports,
            columns,
            cells,
        }
    }

    /// Row labels (sports), ascending.
    pub fn sports(&self) -> &[String] {
        &self.sports
    }

    /// Column labels (years), ascending.
    pub fn years(&self) -> &[Year] {
        &self.columns
    }

    /// Returns the cell for a sport and year, or None if either is not a label.
    pub fn get(&self, sport: &str, year: Year) -> Option<u32> {
        let row = self.sports.iter().position(|s| s == sport)?;
        let col = self.columns.binary_search(&year).ok()?;
        Some(self.cells[row][col])
    }

    /// Sum of every cell.
    pub fn total(&self) -> u32 {
        self.cells.iter().flatten().sum()
    }
}

impl DerivedTable for Heatmap {
    fn name(&self) -> &'static str {
        self.name
    }

    fn columns(&self) -> Vec<&'static str> {
        vec!["Sport", "Year", "Count"]
    }

    fn row_count(&self) -> usize {
        self.sports.len()
    }
}
