//! FILENAME: store/src/record.rs
//! The validated, owned form of a single emissions observation.
//!
//! Type coercion happens at load time, never at aggregation time: once an
//! `EmissionRecord` exists, every field is already the right type.

use serde::{Deserialize, Serialize};

/// One emissions observation from the source dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionRecord {
    pub state: String,
    pub year: i32,
    pub sector: String,
    pub carbon_type: String,
    pub emission_metric_tons: f64,
}

impl EmissionRecord {
    pub fn new(
        state: String,
        year: i32,
        sector: String,
        carbon_type: String,
        emission_metric_tons: f64,
    ) -> Self {
        EmissionRecord {
            state,
            year,
            sector,
            carbon_type,
            emission_metric_tons,
        }
    }
}
