//! Country and region record types shared by the extract and store crates.

use serde::Serialize;

/// Marker rendered in place of an absent value at the presentation boundary.
pub const ABSENT: &str = "N/A";

/// Largest population the store can hold (its BIGINT column).
pub const MAX_POPULATION: u64 = i64::MAX as u64;

/// One normalized row of the population table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryRecord {
    /// Country name, trimmed, without a trailing footnote marker
    pub name: String,
    /// Grouping key for aggregation
    pub region: String,
    /// `None` when the source cell was empty or "N/A"
    pub population: Option<u64>,
}

impl CountryRecord {
    pub fn new(name: impl Into<String>, region: impl Into<String>, population: Option<u64>) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            population,
        }
    }
}

/// A country holding an extremal population within its region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryPopulation {
    pub name: String,
    pub population: u64,
}

/// Aggregate statistics for one region.
///
/// `largest` and `smallest` are `None` together, when no country in the
/// region has a known population.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionSummary {
    pub region: String,
    pub total_population: u64,
    pub largest: Option<CountryPopulation>,
    pub smallest: Option<CountryPopulation>,
}

impl RegionSummary {
    /// Summary for a region with no known populations yet.
    pub fn empty(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            total_population: 0,
            largest: None,
            smallest: None,
        }
    }

    pub fn largest_country(&self) -> &str {
        self.largest.as_ref().map_or(ABSENT, |c| c.name.as_str())
    }

    pub fn smallest_country(&self) -> &str {
        self.smallest.as_ref().map_or(ABSENT, |c| c.name.as_str())
    }

    /// Largest population as display text, or [`ABSENT`].
    pub fn largest_population(&self) -> String {
        self.largest
            .as_ref()
            .map_or_else(|| ABSENT.to_string(), |c| c.population.to_string())
    }

    /// Smallest population as display text, or [`ABSENT`].
    pub fn smallest_population(&self) -> String {
        self.smallest
            .as_ref()
            .map_or_else(|| ABSENT.to_string(), |c| c.population.to_string())
    }
}
