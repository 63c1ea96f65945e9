use crate::region::regions::{Region, RegionTable};
use crate::store::records::{RecordStore, Role};
use itertools::Itertools;
use serde::Serialize;
use thiserror::Error;

/// Sentinel region selection that skips region filtering entirely.
pub const ALL_REGIONS: &str = "ALL";

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("invalid role filter '{0}': expected Mentor or Mentee")]
    InvalidRole(String),
    #[error("invalid region filter '{0}': expected ALL or a region label")]
    InvalidRegionFilter(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionSelection {
    All,
    Region(Region),
}

impl RegionSelection {
    pub fn from_label(label: &str) -> Option<Self> {
        if label == ALL_REGIONS {
            return Some(Self::All);
        }

        Region::from_label(label).map(Self::Region)
    }
}

/// Per-query aggregation output. `country_counts` is ordered by count
/// descending, country name ascending on ties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    pub country_counts: Vec<(String, u64)>,
    pub total_people: u64,
    pub total_countries: u64,
}

/// Stateless query facade over an immutable store and a static region table.
/// Recomputes from the record set on every call; identical arguments against
/// an unmodified store yield identical results.
pub struct QueryEngine<'a> {
    store: &'a RecordStore,
    table: &'a RegionTable,
}

impl<'a> QueryEngine<'a> {
    pub fn new(store: &'a RecordStore, table: &'a RegionTable) -> Self {
        Self { store, table }
    }

    /// Filters by role (mandatory), then by classified region unless the
    /// selection is `ALL`, and counts survivors per exact country string.
    /// Unrecognized role or region strings are rejected outright; a filter
    /// matching zero records is a valid empty result, not an error.
    pub fn query(&self, role: &str, region: &str) -> Result<QueryResult, QueryError> {
        let role =
            Role::from_label(role).ok_or_else(|| QueryError::InvalidRole(role.to_string()))?;
        let selection = RegionSelection::from_label(region)
            .ok_or_else(|| QueryError::InvalidRegionFilter(region.to_string()))?;

        let mut country_counts: Vec<(String, u64)> = self
            .store
            .records()
            .iter()
            .filter(|record| record.role == role)
            .filter(|record| match selection {
                RegionSelection::All => true,
                RegionSelection::Region(region) => self.table.classify(&record.country) == region,
            })
            .counts_by(|record| record.country.as_str())
            .into_iter()
            .map(|(country, count)| (country.to_string(), count as u64))
            .collect();
        country_counts.sort_by(|(country_a, count_a), (country_b, count_b)| {
            count_b.cmp(count_a).then_with(|| country_a.cmp(country_b))
        });

        let total_people = country_counts.iter().map(|(_, count)| count).sum();
        let total_countries = country_counts.len() as u64;

        Ok(QueryResult {
            country_counts,
            total_people,
            total_countries,
        })
    }
}
