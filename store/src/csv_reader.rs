//! FILENAME: store/src/csv_reader.rs
//! CSV input boundary for the record store.
//!
//! Columns are located by header name, so source column order does not
//! matter. Every value is coerced at parse time; the first bad row aborts
//! the whole load rather than producing a partially loaded store.

use std::io::Read;
use std::path::Path;

use crate::error::StoreError;
use crate::record::EmissionRecord;
use crate::store::RecordStore;

/// Required logical column names.
pub const COL_STATE: &str = "state";
pub const COL_YEAR: &str = "year";
pub const COL_SECTOR: &str = "sector";
pub const COL_CARBON_TYPE: &str = "carbon_type";
pub const COL_EMISSIONS: &str = "emission_metric_tons";

/// Header variant used by the cleaned dataset export.
const COL_EMISSIONS_ALIAS: &str = "emission_(metric_tons)";

/// Loads a record store from a CSV file.
/// Fails on schema or coercion errors and on a source with no data rows.
pub fn load_csv(path: &Path) -> Result<RecordStore, StoreError> {
    let file = std::fs::File::open(path)?;
    let records = read_records(file)?;

    if records.is_empty() {
        return Err(StoreError::NoRecords);
    }

    let store = RecordStore::from_records(records);
    log::info!(
        "loaded {} emission records from {}",
        store.len(),
        path.display()
    );
    Ok(store)
}

/// Parses emission records from any CSV reader.
/// An empty (header-only) source yields an empty vector; `load_csv` is the
/// layer that rejects that.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<EmissionRecord>, StoreError> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers()?.clone();

    let state_col = find_column(&headers, &[COL_STATE])?;
    let year_col = find_column(&headers, &[COL_YEAR])?;
    let sector_col = find_column(&headers, &[COL_SECTOR])?;
    let carbon_type_col = find_column(&headers, &[COL_CARBON_TYPE])?;
    let emissions_col = find_column(&headers, &[COL_EMISSIONS, COL_EMISSIONS_ALIAS])?;

    let mut records = Vec::new();

    for (index, result) in reader.records().enumerate() {
        // 1-based source line, counting the header row
        let row = index + 2;
        let record = result?;

        let year_raw = record.get(year_col).unwrap_or("").trim();
        let year: i32 = year_raw.parse().map_err(|_| StoreError::InvalidYear {
            row,
            value: year_raw.to_string(),
        })?;

        let tons_raw = record.get(emissions_col).unwrap_or("").trim();
        let emission_metric_tons: f64 =
            tons_raw.parse().map_err(|_| StoreError::InvalidQuantity {
                row,
                value: tons_raw.to_string(),
            })?;

        if emission_metric_tons.is_nan() {
            return Err(StoreError::InvalidQuantity {
                row,
                value: tons_raw.to_string(),
            });
        }
        if emission_metric_tons < 0.0 {
            return Err(StoreError::NegativeQuantity {
                row,
                value: emission_metric_tons,
            });
        }

        records.push(EmissionRecord {
            state: record.get(state_col).unwrap_or("").trim().to_string(),
            year,
            sector: record.get(sector_col).unwrap_or("").trim().to_string(),
            carbon_type: record
                .get(carbon_type_col)
                .unwrap_or("")
                .trim()
                .to_string(),
            emission_metric_tons,
        });
    }

    Ok(records)
}

/// Locates a column by any of its accepted header names.
fn find_column(headers: &csv::StringRecord, names: &[&str]) -> Result<usize, StoreError> {
    for (i, header) in headers.iter().enumerate() {
        if names.iter().any(|name| header.trim() == *name) {
            return Ok(i);
        }
    }
    Err(StoreError::MissingColumn(names[0].to_string()))
}
