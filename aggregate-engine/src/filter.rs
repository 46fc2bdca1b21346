//! FILENAME: aggregate-engine/src/filter.rs
//! Filter definition - the serializable query configuration.
//!
//! These structures are immutable snapshots of user intent: which state,
//! which year interval, and which carbon types participate in one
//! aggregation pass. A filter is a value object constructed fresh per
//! query; it never holds shared mutable state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Inclusive year interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    pub fn new(min: i32, max: i32) -> Self {
        YearRange { min, max }
    }

    pub fn contains(&self, year: i32) -> bool {
        self.min <= year && year <= self.max
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

/// The complete filter for one aggregation query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionFilter {
    /// Must name a state present in the store.
    pub state: String,

    /// Inclusive bounds on the observation year.
    pub year_range: YearRange,

    /// Carbon types to include. May be empty, which matches no rows;
    /// a type unknown to the store also simply matches no rows.
    pub carbon_types: BTreeSet<String>,
}

impl EmissionFilter {
    pub fn new(state: String, year_range: YearRange, carbon_types: BTreeSet<String>) -> Self {
        EmissionFilter {
            state,
            year_range,
            carbon_types,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_range_is_inclusive() {
        let range = YearRange::new(2018, 2020);

        assert!(range.contains(2018));
        assert!(range.contains(2020));
        assert!(!range.contains(2017));
        assert!(!range.contains(2021));
        assert!(!range.is_inverted());
    }

    #[test]
    fn inverted_range_is_detected() {
        assert!(YearRange::new(2021, 2020).is_inverted());
    }

    #[test]
    fn filter_serializes_round_trip() {
        let filter = EmissionFilter::new(
            "California".to_string(),
            YearRange::new(2019, 2021),
            ["CO2", "CH4"].iter().map(|s| s.to_string()).collect(),
        );

        let json = serde_json::to_string(&filter).unwrap();
        let back: EmissionFilter = serde_json::from_str(&json).unwrap();
        assert_eq!(filter, back);
    }
}
