//! Typed view requests and their results.

use std::fmt::Display;
use std::str::FromStr;

use dataset::{CanonicalTable, Selection, Year};
use serde::Serialize;

use crate::derived::DerivedTable;
use crate::error::{AnalyticsError, Result};
use crate::heatmap::Heatmap;
use crate::views::{
    AgeDistributions, AthleteProfiles, CountOverTime, Dimension, GoldMedalistAges, MedalTally,
    MedalTimeline, OverviewStats, SelectionOptions, SexParticipation, TopAthletes,
};

/// A request for one derived table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    DistinctMedalEvents,
    /// Tally per NOC over the whole dataset.
    MedalTally,
    FilteredMedalTally {
        year: Selection<Year>,
        country: Selection<String>,
    },
    CountOverTime {
        dimension: Dimension,
    },
    MostSuccessful {
        sport: Selection<String>,
    },
    YearwiseMedalCount {
        country: String,
    },
    CountrySportHeatmap {
        country: String,
    },
    MostSuccessfulForCountry {
        country: String,
    },
    AthleteProfiles {
        sport: Selection<String>,
    },
    SexParticipation,
    OverviewStats,
    SelectionOptions,
    SportEventHeatmap,
    AgeDistributions,
    /// Gold-medalist ages for the given sports, in the given order.
    GoldMedalistAgesBySport {
        sports: Vec<String>,
    },
}

impl Query {
    /// Returns the view name used in logs and metric labels.
    pub fn name(&self) -> &'static str {
        match self {
            Query::DistinctMedalEvents => "distinct_medal_events",
            Query::MedalTally => "medal_tally",
            Query::FilteredMedalTally { .. } => "filtered_medal_tally",
            Query::CountOverTime { .. } => "count_over_time",
            Query::MostSuccessful { .. } => "most_successful",
            Query::YearwiseMedalCount { .. } => "yearwise_medal_count",
            Query::CountrySportHeatmap { .. } => "country_sport_heatmap",
            Query::MostSuccessfulForCountry { .. } => "most_successful_for_country",
            Query::AthleteProfiles { .. } => "athlete_profiles",
            Query::SexParticipation => "sex_participation",
            Query::OverviewStats => "overview_stats",
            Query::SelectionOptions => "selection_options",
            Query::SportEventHeatmap => "sport_event_heatmap",
            Query::AgeDistributions => "age_distributions",
            Query::GoldMedalistAgesBySport { .. } => "gold_medalist_ages_by_sport",
        }
    }

    /// Builds a filtered tally request from raw `year` and `country` values.
    ///
    /// Missing values mean `Overall`.
    pub fn filtered_medal_tally(year: Option<&str>, country: Option<&str>) -> Result<Self> {
        Ok(Query::FilteredMedalTally {
            year: parse_selection("year", year)?,
            country: parse_selection("country", country)?,
        })
    }

    pub fn count_over_time(dimension: &str) -> Result<Self> {
        Ok(Query::CountOverTime {
            dimension: dimension.parse()?,
        })
    }

    pub fn most_successful(sport: Option<&str>) -> Result<Self> {
        Ok(Query::MostSuccessful {
            sport: parse_selection("sport", sport)?,
        })
    }

    pub fn athlete_profiles(sport: Option<&str>) -> Result<Self> {
        Ok(Query::AthleteProfiles {
            sport: parse_selection("sport", sport)?,
        })
    }
}

/// Parses an optional raw parameter into a [`Selection`].
///
/// `None`, `"Overall"` and `"all"` select everything.
pub fn parse_selection<T>(name: &'static str, raw: Option<&str>) -> Result<Selection<T>>
where
    T: FromStr,
    T::Err: Display,
{
    let Some(raw) = raw else {
        return Ok(Selection::Overall);
    };
    raw.parse()
        .map_err(|e: T::Err| AnalyticsError::InvalidParameter {
            name,
            value: raw.to_string(),
            reason: e.to_string(),
        })
}

/// The derived table produced by a [`Query`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum View {
    Table(CanonicalTable),
    MedalTally(MedalTally),
    CountOverTime(CountOverTime),
    TopAthletes(TopAthletes),
    MedalTimeline(MedalTimeline),
    Heatmap(Heatmap),
    AthleteProfiles(AthleteProfiles),
    SexParticipation(SexParticipation),
    OverviewStats(OverviewStats),
    SelectionOptions(SelectionOptions),
    AgeDistributions(AgeDistributions),
    GoldMedalistAges(GoldMedalistAges),
}

impl View {
    fn as_derived(&self) -> &dyn DerivedTable {
        match self {
            View::Table(v) => v,
            View::MedalTally(v) => v,
            View::CountOverTime(v) => v,
            View::TopAthletes(v) => v,
            View::MedalTimeline(v) => v,
            View::Heatmap(v) => v,
            View::AthleteProfiles(v) => v,
            View::SexParticipation(v) => v,
            View::OverviewStats(v) => v,
            View::SelectionOptions(v) => v,
            View::AgeDistributions(v) => v,
            View::GoldMedalistAges(v) => v,
        }
    }
}

impl DerivedTable for View {
    fn name(&self) -> &'static str {
        self.as_derived().name()
    }

    fn columns(&self) -> Vec<&'static str> {
        self.as_derived().columns()
    }

    fn row_count(&self) -> usize {
        self.as_derived().row_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameters_select_overall() {
        let query = Query::filtered_medal_tally(None, None).unwrap();
        assert_eq!(
            query,
            Query::FilteredMedalTally {
                year: Selection::Overall,
                country: Selection::Overall,
            }
        );
    }

    #[test]
    fn parses_concrete_parameters() {
        let query = Query::filtered_medal_tally(Some("2000"), Some("USA")).unwrap();
        assert_eq!(
            query,
            Query::FilteredMedalTally {
                year: Selection::Only(Year::new(2000)),
                country: Selection::only("USA"),
            }
        );

        let query = Query::most_successful(Some("all")).unwrap();
        assert_eq!(query, Query::MostSuccessful { sport: Selection::Overall });
    }

    #[test]
    fn rejects_malformed_year() {
        let err = Query::filtered_medal_tally(Some("MMXX"), None).unwrap_err();
        match err {
            AnalyticsError::InvalidParameter { name, value, .. } => {
                assert_eq!(name, "year");
                assert_eq!(value, "MMXX");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_unknown_dimension() {
        assert!(matches!(
            Query::count_over_time("medals"),
            Err(AnalyticsError::UnknownDimension(_))
        ));
        assert_eq!(
            Query::count_over_time("Event").unwrap(),
            Query::CountOverTime {
                dimension: Dimension::Event
            }
        );
    }

    #[test]
    fn names_are_unique() {
        let queries = [
            Query::DistinctMedalEvents,
            Query::MedalTally,
            Query::FilteredMedalTally {
                year: Selection::Overall,
                country: Selection::Overall,
            },
            Query::CountOverTime {
                dimension: Dimension::Region,
            },
            Query::MostSuccessful {
                sport: Selection::Overall,
            },
            Query::YearwiseMedalCount {
                country: "USA".into(),
            },
            Query::CountrySportHeatmap {
                country: "USA".into(),
            },
            Query::MostSuccessfulForCountry {
                country: "USA".into(),
            },
            Query::AthleteProfiles {
                sport: Selection::Overall,
            },
            Query::SexParticipation,
            Query::OverviewStats,
            Query::SelectionOptions,
            Query::SportEventHeatmap,
            Query::AgeDistributions,
            Query::GoldMedalistAgesBySport { sports: vec![] },
        ];
        let names: std::collections::HashSet<_> = queries.iter().map(Query::name).collect();
        assert_eq!(names.len(), queries.len());
    }
}
