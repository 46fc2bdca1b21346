//! FILENAME: tests/common/mod.rs
//! Fixtures for aggregation integration tests.

use std::collections::BTreeSet;

use aggregate_engine::{EmissionFilter, YearRange};
use store::{EmissionRecord, RecordStore};

/// Canned observation table spanning three states, three years, three
/// sectors, and three carbon types. Totals are simple enough to check by
/// hand.
pub struct EmissionsFixture;

impl EmissionsFixture {
    /// (state, year, sector, carbon_type, emission_metric_tons)
    pub fn data() -> Vec<(&'static str, i32, &'static str, &'static str, f64)> {
        vec![
            ("California", 2019, "Energy", "CO2", 100.0),
            ("California", 2019, "Transport", "CO2", 40.0),
            ("California", 2019, "Agriculture", "CH4", 25.0),
            ("California", 2020, "Energy", "CO2", 90.0),
            ("California", 2020, "Transport", "CO2", 45.0),
            ("California", 2020, "Agriculture", "CH4", 30.0),
            ("California", 2020, "Agriculture", "N2O", 5.0),
            ("California", 2021, "Energy", "CO2", 80.0),
            ("California", 2021, "Transport", "CO2", 50.0),
            ("California", 2021, "Agriculture", "CH4", 20.0),
            ("Texas", 2019, "Energy", "CO2", 400.0),
            ("Texas", 2020, "Energy", "CO2", 420.0),
            ("Texas", 2020, "Industry", "CH4", 60.0),
            ("Texas", 2021, "Energy", "CO2", 410.0),
            ("Wyoming", 2021, "Agriculture", "N2O", 2.5),
        ]
    }

    pub fn records() -> Vec<EmissionRecord> {
        Self::data()
            .into_iter()
            .map(|(state, year, sector, carbon_type, tons)| {
                EmissionRecord::new(
                    state.to_string(),
                    year,
                    sector.to_string(),
                    carbon_type.to_string(),
                    tons,
                )
            })
            .collect()
    }

    pub fn store() -> RecordStore {
        RecordStore::from_records(Self::records())
    }

    /// The fixture rendered as a CSV source, for end-to-end load tests.
    pub fn csv() -> String {
        let mut out = String::from("state,year,sector,carbon_type,emission_metric_tons\n");
        for (state, year, sector, carbon_type, tons) in Self::data() {
            out.push_str(&format!(
                "{},{},{},{},{}\n",
                state, year, sector, carbon_type, tons
            ));
        }
        out
    }
}

/// Builds a filter from literals.
pub fn filter(state: &str, min_year: i32, max_year: i32, carbon_types: &[&str]) -> EmissionFilter {
    let carbon_types: BTreeSet<String> = carbon_types.iter().map(|s| s.to_string()).collect();
    EmissionFilter::new(
        state.to_string(),
        YearRange::new(min_year, max_year),
        carbon_types,
    )
}
