//! Athlete rankings and per-athlete demographic tables.

use std::collections::{HashMap, HashSet};

use dataset::{
    CanonicalTable, EventRecord, Medal, MedalStatus, RecordQuery, Selection, Sex, distinct_by,
};
use serde::Serialize;

use crate::derived::DerivedTable;

/// Number of athletes kept by the "most successful" rankings.
pub const TOP_ATHLETES_LIMIT: usize = 15;

/// Sports shown in the gold-medalist age comparison.
pub const FEATURED_SPORTS: [&str; 38] = [
    "Basketball",
    "Judo",
    "Football",
    "Tug-of-War",
    "Athletics",
    "Swimming",
    "Badminton",
    "Sailing",
    "Gymnastics",
    "Art Competitions",
    "Handball",
    "Weightlifting",
    "Wrestling",
    "Water Polo",
    "Hockey",
    "Rowing",
    "Fencing",
    "Shooting",
    "Boxing",
    "Taekwondo",
    "Cycling",
    "Diving",
    "Canoeing",
    "Tennis",
    "Golf",
    "Softball",
    "Archery",
    "Volleyball",
    "Synchronized Swimming",
    "Table Tennis",
    "Baseball",
    "Rhythmic Gymnastics",
    "Rugby Sevens",
    "Beach Volleyball",
    "Triathlon",
    "Rugby",
    "Polo",
    "Ice Hockey",
];

/// One ranked athlete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AthleteMedals {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Medals")]
    pub medals: u32,
    /// Sport of the athlete's first row in the canonical table.
    #[serde(rename = "Sport")]
    pub sport: String,
    /// Region of the athlete's first row in the canonical table.
    #[serde(rename = "region")]
    pub region: Option<String>,
}

/// Athletes with the most medal rows, best first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopAthletes {
    pub rows: Vec<AthleteMedals>,
}

impl DerivedTable for TopAthletes {
    fn name(&self) -> &'static str {
        "top_athletes"
    }

    fn columns(&self) -> Vec<&'static str> {
        vec!["Name", "Medals", "Sport", "region"]
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Ranks athletes by medal rows, optionally within one sport.
///
/// Medal rows are counted per athlete name without collapsing team awards.
/// Ties are broken by name so the ranking is reproducible.
pub fn most_successful(table: &CanonicalTable, sport: &Selection<String>) -> TopAthletes {
    let query = RecordQuery::medalled().sport_selection(sport);
    rank_athletes(table, table.query(&query))
}

/// Counts medal rows per name, keeps the best [`TOP_ATHLETES_LIMIT`] and
/// attaches sport and region from each athlete's first row in `table`.
pub(crate) fn rank_athletes<'a>(
    table: &'a CanonicalTable,
    medal_rows: impl IntoIterator<Item = &'a EventRecord>,
) -> TopAthletes {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for record in medal_rows {
        *counts.entry(record.name.as_str()).or_default() += 1;
    }

    let mut ranked: Vec<(&str, u32)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(TOP_ATHLETES_LIMIT);

    let wanted: HashSet<&str> = ranked.iter().map(|(name, _)| *name).collect();
    let mut first_rows: HashMap<&str, &EventRecord> = HashMap::with_capacity(wanted.len());
    for record in table {
        if wanted.contains(record.name.as_str()) {
            first_rows.entry(record.name.as_str()).or_insert(record);
        }
    }

    let rows = ranked
        .into_iter()
        .filter_map(|(name, medals)| {
            let first = first_rows.get(name)?;
            Some(AthleteMedals {
                name: name.to_string(),
                medals,
                sport: first.sport.clone(),
                region: first.region.clone(),
            })
        })
        .collect();

    TopAthletes { rows }
}

/// One athlete's physical attributes and first recorded outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AthleteProfile {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "region")]
    pub region: Option<String>,
    #[serde(rename = "Sex")]
    pub sex: Sex,
    #[serde(rename = "Sport")]
    pub sport: String,
    #[serde(rename = "Age")]
    pub age: Option<u32>,
    #[serde(rename = "Height")]
    pub height: Option<f64>,
    #[serde(rename = "Weight")]
    pub weight: Option<f64>,
    #[serde(rename = "Medal")]
    pub medal: MedalStatus,
}

impl From<&EventRecord> for AthleteProfile {
    fn from(record: &EventRecord) -> Self {
        Self {
            name: record.name.clone(),
            region: record.region.clone(),
            sex: record.sex,
            sport: record.sport.clone(),
            age: record.age,
            height: record.height,
            weight: record.weight,
            medal: record.medal.into(),
        }
    }
}

/// Per-athlete rows for height/weight plots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AthleteProfiles {
    pub rows: Vec<AthleteProfile>,
}

impl DerivedTable for AthleteProfiles {
    fn name(&self) -> &'static str {
        "athlete_profiles"
    }

    fn columns(&self) -> Vec<&'static str> {
        vec![
            "Name", "region", "Sex", "Sport", "Age", "Height", "Weight", "Medal",
        ]
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// One row per (Name, Region) athlete, optionally limited to a sport.
///
/// Deduplication happens before the sport filter, so an athlete whose first
/// row is in another sport is not listed under this one. Missing medals are
/// reported as "No Medal".
pub fn athlete_profiles(table: &CanonicalTable, sport: &Selection<String>) -> AthleteProfiles {
    let rows = distinct_by(table, EventRecord::athlete_key)
        .into_iter()
        .filter(|r| sport.admits(&r.sport))
        .map(AthleteProfile::from)
        .collect();
    AthleteProfiles { rows }
}

/// Ages of athletes, overall and by the medal of their first row.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AgeDistributions {
    #[serde(rename = "Overall Age")]
    pub overall: Vec<u32>,
    #[serde(rename = "Gold Medalist")]
    pub gold: Vec<u32>,
    #[serde(rename = "Silver Medalist")]
    pub silver: Vec<u32>,
    #[serde(rename = "Bronze Medalist")]
    pub bronze: Vec<u32>,
}

impl DerivedTable for AgeDistributions {
    fn name(&self) -> &'static str {
        "age_distributions"
    }

    fn columns(&self) -> Vec<&'static str> {
        vec!["Overall Age", "Gold Medalist", "Silver Medalist", "Bronze Medalist"]
    }

    fn row_count(&self) -> usize {
        self.overall.len()
    }
}

/// Collects known ages of (Name, Region) athletes.
pub fn age_distributions(table: &CanonicalTable) -> AgeDistributions {
    let mut ages = AgeDistributions::default();
    for athlete in distinct_by(table, EventRecord::athlete_key) {
        let Some(age) = athlete.age else {
            continue;
        };
        ages.overall.push(age);
        match athlete.medal {
            Some(Medal::Gold) => ages.gold.push(age),
            Some(Medal::Silver) => ages.silver.push(age),
            Some(Medal::Bronze) => ages.bronze.push(age),
            None => {}
        }
    }
    ages
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SportAges {
    #[serde(rename = "Sport")]
    pub sport: String,
    #[serde(rename = "Ages")]
    pub ages: Vec<u32>,
}

/// Gold-medalist ages per sport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoldMedalistAges {
    pub rows: Vec<SportAges>,
}

impl DerivedTable for GoldMedalistAges {
    fn name(&self) -> &'static str {
        "gold_medalist_ages"
    }

    fn columns(&self) -> Vec<&'static str> {
        vec!["Sport", "Ages"]
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Known ages of gold medalists among (Name, Region) athletes, per sport.
///
/// Sports keep the order given; sports without any such age are omitted.
pub fn gold_medalist_ages_by_sport<S: AsRef<str>>(
    table: &CanonicalTable,
    sports: &[S],
) -> GoldMedalistAges {
    let mut by_sport: HashMap<&str, Vec<u32>> = HashMap::new();
    for athlete in distinct_by(table, EventRecord::athlete_key) {
        if athlete.medal == Some(Medal::Gold)
            && let Some(age) = athlete.age
        {
            by_sport.entry(athlete.sport.as_str()).or_default().push(age);
        }
    }

    let rows = sports
        .iter()
        .filter_map(|sport| {
            let sport = sport.as_ref();
            let ages = by_sport.remove(sport)?;
            Some(SportAges {
                sport: sport.to_string(),
                ages,
            })
        })
        .collect();

    GoldMedalistAges { rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row<'a> {
        name: &'a str,
        region: Option<&'a str>,
        sport: &'a str,
        event: &'a str,
        medal: Option<Medal>,
        age: Option<u32>,
    }

    fn build(row: Row<'_>) -> EventRecord {
        let mut builder = EventRecord::builder()
            .name(row.name)
            .sex(Sex::Male)
            .noc("XXX")
            .year(2000)
            .sport(row.sport)
            .event(row.event);
        if let Some(region) = row.region {
            builder = builder.region(region);
        }
        if let Some(medal) = row.medal {
            builder = builder.medal(medal);
        }
        if let Some(age) = row.age {
            builder = builder.age(age);
        }
        builder.build()
    }

    fn medalist(name: &str, sport: &str, event: &str, medal: Medal) -> EventRecord {
        build(Row {
            name,
            region: Some("Hungary"),
            sport,
            event,
            medal: Some(medal),
            age: None,
        })
    }

    #[test]
    fn ranks_by_medal_rows_then_name() {
        let table = CanonicalTable::new(vec![
            medalist("Zed", "Fencing", "Sabre", Medal::Gold),
            medalist("Zed", "Fencing", "Foil", Medal::Silver),
            medalist("Amy", "Fencing", "Sabre", Medal::Gold),
            medalist("Amy", "Fencing", "Epee", Medal::Bronze),
            medalist("Kim", "Fencing", "Foil", Medal::Gold),
        ]);

        let top = most_successful(&table, &Selection::Overall);
        let names: Vec<_> = top.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Amy", "Zed", "Kim"]);
        assert_eq!(top.rows[0].medals, 2);
        assert_eq!(top.rows[0].region.as_deref(), Some("Hungary"));
    }

    #[test]
    fn keeps_at_most_fifteen_distinct_names() {
        let records = (0..40)
            .map(|i| medalist(&format!("Athlete {i:02}"), "Rowing", "Eights", Medal::Gold))
            .collect();
        let table = CanonicalTable::new(records);

        let top = most_successful(&table, &Selection::Overall);
        assert_eq!(top.row_count(), TOP_ATHLETES_LIMIT);
        let names: HashSet<_> = top.rows.iter().map(|r| r.name.clone()).collect();
        assert_eq!(names.len(), TOP_ATHLETES_LIMIT);
        assert!(top.rows.windows(2).all(|w| w[0].medals >= w[1].medals));
    }

    #[test]
    fn sport_filter_counts_only_that_sport_but_reports_first_row() {
        let table = CanonicalTable::new(vec![
            build(Row {
                name: "Ole",
                region: Some("Norway"),
                sport: "Biathlon",
                event: "Sprint",
                medal: None,
                age: None,
            }),
            build(Row {
                name: "Ole",
                region: Some("Norway"),
                sport: "Cross Country Skiing",
                event: "Relay",
                medal: Some(Medal::Gold),
                age: None,
            }),
        ]);

        let top = most_successful(&table, &Selection::only("Cross Country Skiing"));
        assert_eq!(top.rows.len(), 1);
        assert_eq!(top.rows[0].medals, 1);
        assert_eq!(top.rows[0].sport, "Biathlon");

        assert!(most_successful(&table, &Selection::only("Curling")).is_empty());
    }

    #[test]
    fn profiles_one_row_per_athlete_with_no_medal_fill() {
        let table = CanonicalTable::new(vec![
            medalist("Ann", "Judo", "-52kg", Medal::Gold),
            medalist("Ann", "Judo", "Open", Medal::Silver),
            build(Row {
                name: "Ann",
                region: Some("Cuba"),
                sport: "Judo",
                event: "-52kg",
                medal: None,
                age: Some(22),
            }),
            build(Row {
                name: "Bea",
                region: None,
                sport: "Rowing",
                event: "Single Sculls",
                medal: None,
                age: None,
            }),
        ]);

        let all = athlete_profiles(&table, &Selection::Overall);
        assert_eq!(all.rows.len(), 3);
        assert_eq!(all.rows[0].medal, MedalStatus::Gold);
        assert_eq!(all.rows[1].medal, MedalStatus::NoMedal);

        let judo = athlete_profiles(&table, &Selection::only("Judo"));
        assert_eq!(judo.rows.len(), 2);
    }

    #[test]
    fn age_distributions_split_by_medal() {
        let ages = [
            (Some(Medal::Gold), Some(24)),
            (Some(Medal::Bronze), Some(31)),
            (None, Some(19)),
            (None, None),
        ];
        let records = ages
            .iter()
            .enumerate()
            .map(|(i, (medal, age))| {
                build(Row {
                    name: &format!("P{i}"),
                    region: Some("Kenya"),
                    sport: "Athletics",
                    event: "Marathon",
                    medal: *medal,
                    age: *age,
                })
            })
            .collect();
        let table = CanonicalTable::new(records);

        let dist = age_distributions(&table);
        assert_eq!(dist.overall, vec![24, 31, 19]);
        assert_eq!(dist.gold, vec![24]);
        assert!(dist.silver.is_empty());
        assert_eq!(dist.bronze, vec![31]);
    }

    #[test]
    fn gold_ages_by_sport_skips_empty_sports() {
        let table = CanonicalTable::new(vec![
            build(Row {
                name: "Gus",
                region: Some("Fiji"),
                sport: "Rugby Sevens",
                event: "Men",
                medal: Some(Medal::Gold),
                age: Some(27),
            }),
            build(Row {
                name: "Hal",
                region: Some("Fiji"),
                sport: "Rugby Sevens",
                event: "Men",
                medal: Some(Medal::Gold),
                age: None,
            }),
        ]);

        let result = gold_medalist_ages_by_sport(&table, FEATURED_SPORTS.as_slice());
        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.rows[0].sport, "Rugby Sevens");
        assert_eq!(result.rows[0].ages, vec![27]);
    }
}
