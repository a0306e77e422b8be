//! Dispatches view requests against one canonical table.

use std::time::Instant;

use dataset::CanonicalTable;

use crate::derived::DerivedTable;
use crate::query::{Query, View};
use crate::views;

/// Answers [`Query`] requests from a shared canonical table.
///
/// The engine holds no mutable state, so clones can serve requests from any
/// number of tasks at once.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsEngine {
    table: CanonicalTable,
}

impl AnalyticsEngine {
    pub fn new(table: CanonicalTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &CanonicalTable {
        &self.table
    }

    /// Computes the view requested by `query`.
    #[tracing::instrument(skip(self), fields(view = query.name()))]
    pub fn run(&self, query: &Query) -> View {
        let started = Instant::now();
        let table = &self.table;

        let view = match query {
            Query::DistinctMedalEvents => View::Table(views::distinct_medal_events(table)),
            Query::MedalTally => View::MedalTally(views::medal_tally(table)),
            Query::FilteredMedalTally { year, country } => {
                View::MedalTally(views::filtered_medal_tally(table, year, country))
            }
            Query::CountOverTime { dimension } => {
                View::CountOverTime(views::count_over_time(table, *dimension))
            }
            Query::MostSuccessful { sport } => {
                View::TopAthletes(views::most_successful(table, sport))
            }
            Query::YearwiseMedalCount { country } => {
                View::MedalTimeline(views::yearwise_medal_count(table, country))
            }
            Query::CountrySportHeatmap { country } => {
                View::Heatmap(views::country_sport_heatmap(table, country))
            }
            Query::MostSuccessfulForCountry { country } => {
                View::TopAthletes(views::most_successful_for_country(table, country))
            }
            Query::AthleteProfiles { sport } => {
                View::AthleteProfiles(views::athlete_profiles(table, sport))
            }
            Query::SexParticipation => View::SexParticipation(views::sex_participation(table)),
            Query::OverviewStats => View::OverviewStats(views::overview_stats(table)),
            Query::SelectionOptions => View::SelectionOptions(views::selection_options(table)),
            Query::SportEventHeatmap => View::Heatmap(views::sport_event_heatmap(table)),
            Query::AgeDistributions => View::AgeDistributions(views::age_distributions(table)),
            Query::GoldMedalistAgesBySport { sports } => {
                View::GoldMedalistAges(views::gold_medalist_ages_by_sport(table, sports))
            }
        };

        metrics::counter!("analytics_queries_total", "view" => query.name()).increment(1);
        metrics::histogram!("analytics_query_duration_seconds", "view" => query.name())
            .record(started.elapsed().as_secs_f64());
        tracing::debug!(rows = view.row_count(), "view computed");

        view
    }
}
