//! Country-wise views: medal timeline, sport heatmap, top athletes.

use std::collections::BTreeMap;

use dataset::{CanonicalTable, EventRecord, RecordQuery, Year};
use serde::Serialize;

use crate::derived::DerivedTable;
use crate::heatmap::Heatmap;
use crate::views::athletes::{TopAthletes, rank_athletes};
use crate::views::medal_tally::medal_events;

/// Distinct medal-winning events of one country.
fn country_medal_events<'a>(table: &'a CanonicalTable, country: &str) -> Vec<&'a EventRecord> {
    let query = RecordQuery::for_region(country).with_medal();
    medal_events(table)
        .into_iter()
        .filter(|r| query.matches(r))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearMedals {
    #[serde(rename = "Year")]
    pub year: Year,
    #[serde(rename = "Medal")]
    pub medals: u32,
}

/// Medals won by one country in each year it won any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedalTimeline {
    pub country: String,
    pub rows: Vec<YearMedals>,
}

impl DerivedTable for MedalTimeline {
    fn name(&self) -> &'static str {
        "medal_timeline"
    }

    fn columns(&self) -> Vec<&'static str> {
        vec!["Year", "Medal"]
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Counts a country's distinct medal events per year, ascending.
pub fn yearwise_medal_count(table: &CanonicalTable, country: &str) -> MedalTimeline {
    let mut per_year: BTreeMap<Year, u32> = BTreeMap::new();
    for record in country_medal_events(table, country) {
        *per_year.entry(record.year).or_default() += 1;
    }

    MedalTimeline {
        country: country.to_string(),
        rows: per_year
            .into_iter()
            .map(|(year, medals)| YearMedals { year, medals })
            .collect(),
    }
}

/// Medals of one country per sport (rows) and year (columns).
pub fn country_sport_heatmap(table: &CanonicalTable, country: &str) -> Heatmap {
    Heatmap::count(
        "country_sport_heatmap",
        country_medal_events(table, country)
            .into_iter()
            .map(|r| (r.sport.as_str(), r.year)),
    )
}

/// Ranks a country's athletes by medal rows.
///
/// Counting only looks at the country's rows; sport and region are still
/// taken from each athlete's first row anywhere in the table.
pub fn most_successful_for_country(table: &CanonicalTable, country: &str) -> TopAthletes {
    let query = RecordQuery::for_region(country).with_medal();
    rank_athletes(table, table.query(&query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset::{Medal, Sex};

    fn row(
        name: &str,
        region: &str,
        year: i32,
        sport: &str,
        event: &str,
        medal: Option<Medal>,
    ) -> EventRecord {
        let mut builder = EventRecord::builder()
            .name(name)
            .sex(Sex::Female)
            .noc(&region[..3])
            .team(region)
            .region(region)
            .year(year)
            .sport(sport)
            .event(event);
        if let Some(medal) = medal {
            builder = builder.medal(medal);
        }
        builder.build()
    }

    fn sample() -> CanonicalTable {
        CanonicalTable::new(vec![
            // Two members of one hockey team: one medal.
            row("Ana", "Netherlands", 2008, "Hockey", "Women", Some(Medal::Gold)),
            row("Bo", "Netherlands", 2008, "Hockey", "Women", Some(Medal::Gold)),
            row("Cy", "Netherlands", 2008, "Cycling", "Road Race", Some(Medal::Silver)),
            row("Cy", "Netherlands", 2012, "Cycling", "Road Race", Some(Medal::Gold)),
            row("Di", "Netherlands", 2012, "Swimming", "50m", None),
            row("Ed", "Belgium", 2012, "Cycling", "Road Race", Some(Medal::Bronze)),
        ])
    }

    #[test]
    fn timeline_counts_distinct_medals_per_year() {
        let timeline = yearwise_medal_count(&sample(), "Netherlands");
        assert_eq!(
            timeline.rows,
            vec![
                YearMedals {
                    year: Year::new(2008),
                    medals: 2
                },
                YearMedals {
                    year: Year::new(2012),
                    medals: 1
                },
            ]
        );
    }

    #[test]
    fn unknown_country_gives_empty_tables() {
        let table = sample();
        assert!(yearwise_medal_count(&table, "Atlantis").is_empty());
        assert!(country_sport_heatmap(&table, "Atlantis").is_empty());
        assert!(most_successful_for_country(&table, "Atlantis").is_empty());
    }

    #[test]
    fn heatmap_pivots_sport_by_year() {
        let map = country_sport_heatmap(&sample(), "Netherlands");
        assert_eq!(map.sports(), ["Cycling".to_string(), "Hockey".to_string()]);
        assert_eq!(map.years(), [Year::new(2008), Year::new(2012)]);
        assert_eq!(map.get("Hockey", Year::new(2008)), Some(1));
        assert_eq!(map.get("Hockey", Year::new(2012)), Some(0));
        assert_eq!(map.get("Cycling", Year::new(2012)), Some(1));
        // Swimming had no medals.
        assert_eq!(map.get("Swimming", Year::new(2012)), None);
    }

    #[test]
    fn country_ranking_attaches_first_row_anywhere() {
        let mut records = vec![row("Cy", "Belgium", 2004, "Track Cycling", "Sprint", None)];
        records.extend(sample().records().iter().cloned());
        let table = CanonicalTable::new(records);

        let top = most_successful_for_country(&table, "Netherlands");
        assert_eq!(top.rows[0].name, "Cy");
        assert_eq!(top.rows[0].medals, 2);
        assert_eq!(top.rows[0].sport, "Track Cycling");
        assert_eq!(top.rows[0].region.as_deref(), Some("Belgium"));
        assert_eq!(top.rows.len(), 3);
    }
}
