use serde::{Deserialize, Deserializer, Serialize};

use crate::{Medal, Sex, Year};

/// One athlete's participation in one event of one Games edition.
///
/// Records come from the external preprocessing step already cleaned:
/// `region` is resolved from the NOC code (and may be missing for defunct
/// committees), `year` is an integer and `medal` is one of Gold, Silver,
/// Bronze or absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Athlete name.
    #[serde(rename = "Name")]
    pub name: String,

    /// Sex of the athlete.
    #[serde(rename = "Sex")]
    pub sex: Sex,

    /// Age in whole years. Exports with missing ages write it as a float.
    #[serde(rename = "Age", default, deserialize_with = "whole_years")]
    pub age: Option<u32>,

    /// Height in centimetres.
    #[serde(rename = "Height", default)]
    pub height: Option<f64>,

    /// Weight in kilograms.
    #[serde(rename = "Weight", default)]
    pub weight: Option<f64>,

    /// Team name, which may be sub-national (e.g. a club or a crew).
    #[serde(rename = "Team")]
    pub team: String,

    /// National Olympic Committee code.
    #[serde(rename = "NOC")]
    pub noc: String,

    /// Games identifier (e.g. "2016 Summer").
    #[serde(rename = "Games")]
    pub games: String,

    #[serde(rename = "Year")]
    pub year: Year,

    /// Host city.
    #[serde(rename = "City")]
    pub city: String,

    #[serde(rename = "Sport")]
    pub sport: String,

    #[serde(rename = "Event")]
    pub event: String,

    #[serde(rename = "Medal", default)]
    pub medal: Option<Medal>,

    /// Country name resolved from the NOC code.
    #[serde(rename = "region", default)]
    pub region: Option<String>,
}

/// Reads an age written either as an integer or as a whole float (`24.0`).
fn whole_years<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(age) = Option::<f64>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if age.fract() != 0.0 || !(0.0..=u32::MAX as f64).contains(&age) {
        return Err(serde::de::Error::custom(format!(
            "invalid age {age}: expected a whole, non-negative number"
        )));
    }
    Ok(Some(age as u32))
}

/// Identity of one medal award: team members of the same award share it.
pub type MedalEventKey<'a> = (
    &'a str,
    &'a str,
    &'a str,
    Year,
    &'a str,
    &'a str,
    &'a str,
    Option<Medal>,
);

/// Identity of one athlete representing one country.
pub type AthleteKey<'a> = (&'a str, Option<&'a str>);

impl EventRecord {
    /// Creates a new record builder.
    pub fn builder() -> EventRecordBuilder {
        EventRecordBuilder::default()
    }

    /// Returns the (Team, NOC, Games, Year, City, Sport, Event, Medal) tuple.
    pub fn medal_event_key(&self) -> MedalEventKey<'_> {
        (
            &self.team,
            &self.noc,
            &self.games,
            self.year,
            &self.city,
            &self.sport,
            &self.event,
            self.medal,
        )
    }

    /// Returns the (Name, Region) pair.
    pub fn athlete_key(&self) -> AthleteKey<'_> {
        (&self.name, self.region.as_deref())
    }

    /// Returns true if this participation won a medal.
    pub fn has_medal(&self) -> bool {
        self.medal.is_some()
    }

    /// Returns true if the record belongs to the given resolved country.
    pub fn is_from(&self, region: &str) -> bool {
        self.region.as_deref() == Some(region)
    }
}

/// Builder for constructing event records.
///
/// `team` defaults to the NOC code, `games` to the year followed by
/// " Summer", and `city` to an empty string.
#[derive(Debug, Default)]
pub struct EventRecordBuilder {
    name: Option<String>,
    sex: Option<Sex>,
    age: Option<u32>,
    height: Option<f64>,
    weight: Option<f64>,
    team: Option<String>,
    noc: Option<String>,
    games: Option<String>,
    year: Option<Year>,
    city: Option<String>,
    sport: Option<String>,
    event: Option<String>,
    medal: Option<Medal>,
    region: Option<String>,
}

impl EventRecordBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn sex(mut self, sex: Sex) -> Self {
        self.sex = Some(sex);
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn noc(mut self, noc: impl Into<String>) -> Self {
        self.noc = Some(noc.into());
        self
    }

    pub fn games(mut self, games: impl Into<String>) -> Self {
        self.games = Some(games.into());
        self
    }

    pub fn year(mut self, year: impl Into<Year>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn sport(mut self, sport: impl Into<String>) -> Self {
        self.sport = Some(sport.into());
        self
    }

    pub fn event(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }

    pub fn medal(mut self, medal: Medal) -> Self {
        self.medal = Some(medal);
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Builds the record.
    ///
    /// # Panics
    ///
    /// Panics if required fields (name, sex, noc, year, sport, event) are not set.
    pub fn build(self) -> EventRecord {
        self.try_build()
            .expect("name, sex, noc, year, sport and event are required")
    }

    /// Tries to build the record, returning None if required fields are missing.
    pub fn try_build(self) -> Option<EventRecord> {
        let noc = self.noc?;
        let year = self.year?;
        Some(EventRecord {
            name: self.name?,
            sex: self.sex?,
            age: self.age,
            height: self.height,
            weight: self.weight,
            team: self.team.unwrap_or_else(|| noc.clone()),
            noc,
            games: self.games.unwrap_or_else(|| format!("{year} Summer")),
            year,
            city: self.city.unwrap_or_default(),
            sport: self.sport?,
            event: self.event?,
            medal: self.medal,
            region: self.region,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swimmer() -> EventRecordBuilder {
        EventRecord::builder()
            .name("Michael Phelps")
            .sex(Sex::Male)
            .noc("USA")
            .region("USA")
            .year(2008)
            .city("Beijing")
            .sport("Swimming")
            .event("Swimming Men's 200 metres Butterfly")
    }

    #[test]
    fn builder_fills_defaults() {
        let record = swimmer().build();
        assert_eq!(record.team, "USA");
        assert_eq!(record.games, "2008 Summer");
        assert_eq!(record.year, Year::new(2008));
        assert!(record.medal.is_none());
        assert!(!record.has_medal());
    }

    #[test]
    fn builder_try_build_returns_none_on_missing_fields() {
        assert!(EventRecord::builder().name("Nobody").try_build().is_none());
    }

    #[test]
    fn medal_event_key_ignores_athlete() {
        let a = swimmer().medal(Medal::Gold).build();
        let mut b = a.clone();
        b.name = "Ryan Lochte".to_string();
        b.age = Some(24);
        assert_eq!(a.medal_event_key(), b.medal_event_key());
    }

    #[test]
    fn athlete_key_tracks_region() {
        let record = swimmer().build();
        assert_eq!(record.athlete_key(), ("Michael Phelps", Some("USA")));
        assert!(record.is_from("USA"));
        assert!(!record.is_from("Australia"));
    }

    #[test]
    fn deserializes_dataset_columns() {
        let json = serde_json::json!({
            "Name": "A Dijiang",
            "Sex": "M",
            "Age": 24,
            "Height": 180.0,
            "Weight": 80.0,
            "Team": "China",
            "NOC": "CHN",
            "Games": "1992 Summer",
            "Year": 1992,
            "City": "Barcelona",
            "Sport": "Basketball",
            "Event": "Basketball Men's Basketball",
            "Medal": null,
            "region": "China"
        });
        let record: EventRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.year, Year::new(1992));
        assert_eq!(record.region.as_deref(), Some("China"));
        assert!(record.medal.is_none());
    }
}
