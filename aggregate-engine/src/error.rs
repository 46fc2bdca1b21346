//! FILENAME: aggregate-engine/src/error.rs

use thiserror::Error;

/// Recoverable query-boundary failures. The caller should reject the
/// filter and re-prompt; nothing about the store is invalidated.
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Unknown state: {0}")]
    UnknownState(String),

    #[error("Inverted year range: {min} > {max}")]
    InvertedYearRange { min: i32, max: i32 },
}
