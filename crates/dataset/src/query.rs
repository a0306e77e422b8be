use crate::{EventRecord, Selection, Sex, Year};

/// Builder for row filters over the canonical table.
///
/// Every criterion is optional; an empty query matches every record.
/// Criteria that name a country never match records whose region is missing.
#[derive(Debug, Clone, Default)]
pub struct RecordQuery {
    /// Filter by edition year.
    pub year: Option<Year>,

    /// Filter by resolved country name.
    pub region: Option<String>,

    /// Filter by sport.
    pub sport: Option<String>,

    /// Filter by sex.
    pub sex: Option<Sex>,

    /// Keep only medal-winning participations.
    pub medalled_only: bool,
}

impl RecordQuery {
    /// Creates a new empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a query for one country.
    pub fn for_region(region: impl Into<String>) -> Self {
        Self {
            region: Some(region.into()),
            ..Default::default()
        }
    }

    /// Creates a query for medal-winning rows only.
    pub fn medalled() -> Self {
        Self {
            medalled_only: true,
            ..Default::default()
        }
    }

    /// Creates a query from year and country selections.
    pub fn from_selections(year: &Selection<Year>, region: &Selection<String>) -> Self {
        Self {
            year: year.value().copied(),
            region: region.value().cloned(),
            ..Default::default()
        }
    }

    pub fn year(mut self, year: impl Into<Year>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Filters by sport unless the selection is `Overall`.
    pub fn sport_selection(mut self, sport: &Selection<String>) -> Self {
        self.sport = sport.value().cloned();
        self
    }

    pub fn sex(mut self, sex: Sex) -> Self {
        self.sex = Some(sex);
        self
    }

    /// Keeps only rows that carry a medal.
    pub fn with_medal(mut self) -> Self {
        self.medalled_only = true;
        self
    }

    /// Returns true if the record satisfies every criterion of this query.
    pub fn matches(&self, record: &EventRecord) -> bool {
        if let Some(year) = self.year
            && record.year != year
        {
            return false;
        }
        if let Some(ref region) = self.region
            && !record.is_from(region)
        {
            return false;
        }
        if let Some(ref sport) = self.sport
            && &record.sport != sport
        {
            return false;
        }
        if let Some(sex) = self.sex
            && record.sex != sex
        {
            return false;
        }
        if self.medalled_only && !record.has_medal() {
            return false;
        }
        true
    }
}
