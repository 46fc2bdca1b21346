//! FILENAME: store/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Row {row}: invalid year '{value}'")]
    InvalidYear { row: usize, value: String },

    #[error("Row {row}: invalid emission quantity '{value}'")]
    InvalidQuantity { row: usize, value: String },

    #[error("Row {row}: negative emission quantity {value}")]
    NegativeQuantity { row: usize, value: f64 },

    #[error("Source contains no data rows")]
    NoRecords,
}
