//! Aggregation views over the canonical table.

pub mod athletes;
pub mod country;
pub mod medal_tally;
pub mod overview;
pub mod participation;

pub use athletes::{
    AgeDistributions, AthleteMedals, AthleteProfile, AthleteProfiles, FEATURED_SPORTS,
    GoldMedalistAges, SportAges, TOP_ATHLETES_LIMIT, TopAthletes, age_distributions,
    athlete_profiles, gold_medalist_ages_by_sport, most_successful,
};
pub use country::{
    MedalTimeline, YearMedals, country_sport_heatmap, most_successful_for_country,
    yearwise_medal_count,
};
pub use medal_tally::{
    MedalCounts, MedalTally, TallyGrouping, TallyKey, TallyRow, distinct_medal_events,
    filtered_medal_tally, medal_tally,
};
pub use overview::{
    OverviewStats, SelectionOptions, overview_stats, selection_options, sport_event_heatmap,
};
pub use participation::{
    CountOverTime, Dimension, SexParticipation, SexParticipationRow, YearCount, count_over_time,
    sex_participation,
};
