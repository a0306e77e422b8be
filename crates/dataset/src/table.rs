use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::{EventRecord, RecordQuery, Year};

/// Read-only handle to the canonical events table.
///
/// The table is built once and never mutated. Cloning the handle is cheap,
/// so one table can be shared by any number of concurrent queries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalTable {
    records: Arc<[EventRecord]>,
}

impl CanonicalTable {
    /// Creates a table from cleaned records, preserving their order.
    pub fn new(records: Vec<EventRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns all rows in table order.
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EventRecord> {
        self.records.iter()
    }

    /// Returns the rows matching a query, in table order.
    pub fn query(&self, query: &RecordQuery) -> Vec<&EventRecord> {
        self.records.iter().filter(|r| query.matches(r)).collect()
    }

    /// Returns the distinct years present, ascending.
    pub fn years(&self) -> BTreeSet<Year> {
        self.records.iter().map(|r| r.year).collect()
    }

    /// Returns the distinct non-missing regions, sorted.
    pub fn regions(&self) -> BTreeSet<&str> {
        self.records
            .iter()
            .filter_map(|r| r.region.as_deref())
            .collect()
    }

    /// Returns the distinct sports, sorted.
    pub fn sports(&self) -> BTreeSet<&str> {
        self.records.iter().map(|r| r.sport.as_str()).collect()
    }

    /// Returns a new table containing copies of the given rows.
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a EventRecord>) -> Self {
        Self::new(rows.into_iter().cloned().collect())
    }
}

impl From<Vec<EventRecord>> for CanonicalTable {
    fn from(records: Vec<EventRecord>) -> Self {
        Self::new(records)
    }
}

impl Serialize for CanonicalTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.records().serialize(serializer)
    }
}

impl<'a> IntoIterator for &'a CanonicalTable {
    type Item = &'a EventRecord;
    type IntoIter = std::slice::Iter<'a, EventRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Keeps the first row of every group of rows sharing the same key.
///
/// Row order is preserved, so "first" always means first in input order.
pub fn distinct_by<'a, K, F>(
    rows: impl IntoIterator<Item = &'a EventRecord>,
    key: F,
) -> Vec<&'a EventRecord>
where
    K: Hash + Eq,
    F: Fn(&'a EventRecord) -> K,
{
    let mut seen = HashSet::new();
    rows.into_iter().filter(|r| seen.insert(key(*r))).collect()
}
