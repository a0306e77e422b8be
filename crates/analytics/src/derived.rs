//! Common interface of the tables produced by analytics views.

/// A derived table handed to the presentation layer.
///
/// Derived tables are plain values: computed once from the canonical table,
/// never updated afterwards.
pub trait DerivedTable {
    /// Returns the name of the view that produced this table.
    fn name(&self) -> &'static str;

    /// Returns the column names, in serialization order.
    fn columns(&self) -> Vec<&'static str>;

    /// Returns the number of rows.
    fn row_count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.row_count() == 0
    }
}

impl DerivedTable for dataset::CanonicalTable {
    fn name(&self) -> &'static str {
        "canonical_table"
    }

    fn columns(&self) -> Vec<&'static str> {
        vec![
            "Name", "Sex", "Age", "Height", "Weight", "Team", "NOC", "Games", "Year", "City",
            "Sport", "Event", "Medal", "region",
        ]
    }

    fn row_count(&self) -> usize {
        self.len()
    }
}
