//! FILENAME: aggregate-engine/src/lib.rs
//! Aggregation engine for the emissions dashboard core.
//!
//! This crate turns (record store, filter) into the derived tables and
//! summary statistics the presentation layer renders. It depends on
//! `store` for the loaded observation table and carries no notion of
//! widgets, callbacks, or charts: callers invoke [`aggregate`] whenever
//! their filter state changes and consume the returned value.
//!
//! Layers:
//! - `filter`: Serializable query configuration (WHAT to select)
//! - `engine`: Calculation core (HOW we aggregate)
//! - `result`: Structured output for the presentation layer (WHAT we return)

pub mod engine;
pub mod error;
pub mod filter;
pub mod result;

pub use engine::aggregate;
pub use error::FilterError;
pub use filter::{EmissionFilter, YearRange};
pub use result::{
    AggregationResult, HeatMatrix, SectorSlice, TrendPoint, TypeSlice, YearTotal, YoyChange,
};
