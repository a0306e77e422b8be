//! Loading the canonical table from the preprocessing step's JSON output.
//!
//! A snapshot is a JSON array of records using the dataset's column names
//! (`Name`, `Sex`, `Age`, ..., `Medal`, `region`). Cleaning and region
//! resolution happen upstream; this module only deserializes.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::{CanonicalTable, DatasetError, EventRecord, Result};

/// Loads a snapshot file into a canonical table.
#[tracing::instrument]
pub fn load(path: &Path) -> Result<CanonicalTable> {
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let table = from_reader(BufReader::new(file))?;
    tracing::info!(rows = table.len(), path = %path.display(), "canonical table loaded");
    Ok(table)
}

/// Reads a snapshot from any reader.
pub fn from_reader(reader: impl Read) -> Result<CanonicalTable> {
    let records: Vec<EventRecord> = serde_json::from_reader(reader)?;
    into_table(records)
}

/// Parses a snapshot held in memory.
pub fn from_json_str(json: &str) -> Result<CanonicalTable> {
    let records: Vec<EventRecord> = serde_json::from_str(json)?;
    into_table(records)
}

fn into_table(records: Vec<EventRecord>) -> Result<CanonicalTable> {
    if records.is_empty() {
        return Err(DatasetError::EmptySnapshot);
    }
    Ok(CanonicalTable::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Medal, Year};

    const TWO_ROWS: &str = r#"[
        {"Name": "Paavo Nurmi", "Sex": "M", "Age": 27, "Height": 174.0, "Weight": 65.0,
         "Team": "Finland", "NOC": "FIN", "Games": "1924 Summer", "Year": 1924,
         "City": "Paris", "Sport": "Athletics", "Event": "Athletics Men's 1,500 metres",
         "Medal": "Gold", "region": "Finland"},
        {"Name": "Unknown Rower", "Sex": "M", "Team": "Bohemia", "NOC": "BOH",
         "Games": "1912 Summer", "Year": 1912, "City": "Stockholm", "Sport": "Rowing",
         "Event": "Rowing Men's Coxed Eights"}
    ]"#;

    #[test]
    fn parses_records_with_missing_optional_columns() {
        let table = from_json_str(TWO_ROWS).unwrap();
        assert_eq!(table.len(), 2);

        let nurmi = &table.records()[0];
        assert_eq!(nurmi.medal, Some(Medal::Gold));
        assert_eq!(nurmi.year, Year::new(1924));

        let rower = &table.records()[1];
        assert!(rower.region.is_none());
        assert!(rower.age.is_none());
        assert!(rower.medal.is_none());
    }

    #[test]
    fn accepts_float_ages() {
        let json = r#"[
            {"Name": "A Dijiang", "Sex": "M", "Age": 24.0, "Height": 180.0, "Weight": 80.0,
             "Team": "China", "NOC": "CHN", "Games": "1992 Summer", "Year": 1992,
             "City": "Barcelona", "Sport": "Basketball",
             "Event": "Basketball Men's Basketball", "Medal": null, "region": "China"},
            {"Name": "Lamusi", "Sex": "M", "Age": null, "Height": null, "Weight": null,
             "Team": "China", "NOC": "CHN", "Games": "2012 Summer", "Year": 2012,
             "City": "London", "Sport": "Judo",
             "Event": "Judo Men's Extra-Lightweight", "Medal": null, "region": "China"}
        ]"#;

        let table = from_json_str(json).unwrap();
        assert_eq!(table.records()[0].age, Some(24));
        assert!(table.records()[1].age.is_none());
    }

    #[test]
    fn rejects_fractional_age() {
        let json = r#"[{"Name": "X", "Sex": "F", "Age": 24.5, "Team": "T", "NOC": "TTT",
            "Games": "2000 Summer", "Year": 2000, "City": "Sydney", "Sport": "Judo",
            "Event": "E"}]"#;
        let err = from_json_str(json).unwrap_err();
        assert!(matches!(err, DatasetError::Serialization(_)));
    }

    #[test]
    fn rejects_empty_snapshot() {
        let err = from_json_str("[]").unwrap_err();
        assert!(matches!(err, DatasetError::EmptySnapshot));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = from_json_str("{not json").unwrap_err();
        assert!(matches!(err, DatasetError::Serialization(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load(Path::new("/nonexistent/athlete_events.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/athlete_events.json"));
    }
}
