//! FILENAME: store/src/store.rs
//! The columnar record table and its domain queries.
//!
//! The store owns all records exclusively for the process lifetime:
//! load-once, read-many, no mutation API. Domain queries reflect only
//! values actually present in the loaded data, which is what the
//! presentation layer uses to populate its filter controls.

use serde::{Deserialize, Serialize};

use crate::column::{StringColumn, ValueId};
use crate::record::EmissionRecord;

/// A single observation stored as interned value IDs plus numeric fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoredRow {
    pub state: ValueId,
    pub year: i32,
    pub sector: ValueId,
    pub carbon_type: ValueId,
    pub emission_metric_tons: f64,
}

/// Immutable, in-memory columnar table of emission observations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordStore {
    states: StringColumn,
    sectors: StringColumn,
    carbon_types: StringColumn,
    rows: Vec<StoredRow>,
}

impl RecordStore {
    /// Builds a store by interning a set of validated records.
    /// An empty record set is permitted here; the CSV load path rejects it.
    pub fn from_records(records: Vec<EmissionRecord>) -> Self {
        let mut states = StringColumn::new();
        let mut sectors = StringColumn::new();
        let mut carbon_types = StringColumn::new();
        let mut rows = Vec::with_capacity(records.len());

        for record in &records {
            rows.push(StoredRow {
                state: states.intern(&record.state),
                year: record.year,
                sector: sectors.intern(&record.sector),
                carbon_type: carbon_types.intern(&record.carbon_type),
                emission_metric_tons: record.emission_metric_tons,
            });
        }

        log::debug!(
            "record store built: {} rows, {} states, {} sectors, {} carbon types",
            rows.len(),
            states.unique_count(),
            sectors.unique_count(),
            carbon_types.unique_count()
        );

        RecordStore {
            states,
            sectors,
            carbon_types,
            rows,
        }
    }

    /// Returns the record count.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All stored rows, in source order.
    pub fn rows(&self) -> &[StoredRow] {
        &self.rows
    }

    /// The interned state column.
    pub fn states(&self) -> &StringColumn {
        &self.states
    }

    /// The interned sector column.
    pub fn sectors(&self) -> &StringColumn {
        &self.sectors
    }

    /// The interned carbon-type column.
    pub fn carbon_types(&self) -> &StringColumn {
        &self.carbon_types
    }

    /// Distinct states present in the data, sorted.
    pub fn distinct_states(&self) -> Vec<String> {
        self.states.sorted_values()
    }

    /// Distinct sectors present in the data, sorted.
    pub fn distinct_sectors(&self) -> Vec<String> {
        self.sectors.sorted_values()
    }

    /// Distinct carbon types present in the data, sorted.
    pub fn distinct_carbon_types(&self) -> Vec<String> {
        self.carbon_types.sorted_values()
    }

    /// Smallest and largest observed year, or None for an empty store.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let mut bounds: Option<(i32, i32)> = None;
        for row in &self.rows {
            bounds = Some(match bounds {
                None => (row.year, row.year),
                Some((min, max)) => (min.min(row.year), max.max(row.year)),
            });
        }
        bounds
    }

    /// Reconstructs the owned record at a row index (drill-down access).
    pub fn resolve(&self, index: usize) -> Option<EmissionRecord> {
        let row = self.rows.get(index)?;
        Some(EmissionRecord {
            state: self.states.value_of(row.state)?.to_string(),
            year: row.year,
            sector: self.sectors.value_of(row.sector)?.to_string(),
            carbon_type: self.carbon_types.value_of(row.carbon_type)?.to_string(),
            emission_metric_tons: row.emission_metric_tons,
        })
    }
}
