//! Integration tests: snapshot file on disk → canonical table → queries.

use std::io::Write;

use dataset::{DatasetError, EventRecord, Medal, RecordQuery, Sex, Year, distinct_by, snapshot};

fn write_snapshot(records: &[EventRecord]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let json = serde_json::to_string(records).unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn relay_team(year: i32, medal: Medal) -> Vec<EventRecord> {
    ["Swimmer A", "Swimmer B", "Swimmer C", "Swimmer D"]
        .into_iter()
        .map(|name| {
            EventRecord::builder()
                .name(name)
                .sex(Sex::Female)
                .noc("AUS")
                .region("Australia")
                .team("Australia")
                .year(year)
                .city("Sydney")
                .sport("Swimming")
                .event("Swimming Women's 4 x 100 metres Freestyle Relay")
                .medal(medal)
                .build()
        })
        .collect()
}

#[test]
fn test_snapshot_round_trip_through_disk() {
    let records = relay_team(2000, Medal::Silver);
    let file = write_snapshot(&records);

    let table = snapshot::load(file.path()).unwrap();

    assert_eq!(table.len(), 4);
    assert_eq!(table.records(), records.as_slice());
}

#[test]
fn test_team_members_collapse_to_one_medal_event() {
    let mut records = relay_team(2000, Medal::Silver);
    records.extend(relay_team(2004, Medal::Gold));
    let file = write_snapshot(&records);
    let table = snapshot::load(file.path()).unwrap();

    let awards = distinct_by(&table, EventRecord::medal_event_key);
    assert_eq!(awards.len(), 2);

    let athletes = distinct_by(&table, EventRecord::athlete_key);
    assert_eq!(athletes.len(), 4);
}

#[test]
fn test_queries_over_loaded_table() {
    let mut records = relay_team(2000, Medal::Silver);
    records.push(
        EventRecord::builder()
            .name("Ian Thorpe")
            .sex(Sex::Male)
            .noc("AUS")
            .region("Australia")
            .year(2000)
            .sport("Swimming")
            .event("Swimming Men's 400 metres Freestyle")
            .build(),
    );
    let file = write_snapshot(&records);
    let table = snapshot::load(file.path()).unwrap();

    let women = table.query(&RecordQuery::new().sex(Sex::Female));
    assert_eq!(women.len(), 4);

    let medalled = table.query(&RecordQuery::for_region("Australia").with_medal());
    assert_eq!(medalled.len(), 4);

    assert!(table.query(&RecordQuery::new().year(Year::new(1996))).is_empty());
}

#[test]
fn test_empty_snapshot_file_is_rejected() {
    let file = write_snapshot(&[]);
    let err = snapshot::load(file.path()).unwrap_err();
    assert!(matches!(err, DatasetError::EmptySnapshot));
}
