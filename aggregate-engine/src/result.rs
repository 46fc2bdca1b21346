//! FILENAME: aggregate-engine/src/result.rs
//! Aggregation Result - structured output for the presentation layer.
//!
//! Everything here is derived, recomputed on every query, and never
//! persisted. Ordering of the tables (years ascending, labels
//! lexicographic) is a presentation contract: consumers may render the
//! vectors as-is and tests may compare them deterministically.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// TABLE ENTRIES
// ============================================================================

/// Summed emissions for one (year, carbon type) group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub year: i32,
    pub carbon_type: String,
    pub total: f64,
}

/// Summed emissions for one (sector, carbon type) group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorSlice {
    pub sector: String,
    pub carbon_type: String,
    pub total: f64,
}

/// Summed emissions for one carbon type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSlice {
    pub carbon_type: String,
    pub total: f64,
}

/// Summed emissions for one year, across all carbon types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearTotal {
    pub year: i32,
    pub total: f64,
}

// ============================================================================
// HEAT MATRIX
// ============================================================================

/// Year x carbon-type matrix of summed emissions.
///
/// Rows are the distinct years present in the filtered set (ascending),
/// columns the distinct carbon types present (lexicographic). Combinations
/// absent from the data hold 0.0, never a gap: every row has exactly
/// `carbon_types.len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeatMatrix {
    pub years: Vec<i32>,
    pub carbon_types: Vec<String>,

    /// Row-major: `values[i][j]` is the sum for (`years[i]`, `carbon_types[j]`).
    pub values: Vec<Vec<f64>>,
}

impl HeatMatrix {
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Cell lookup by axis labels. None when either label is off-axis.
    pub fn value_at(&self, year: i32, carbon_type: &str) -> Option<f64> {
        let row = self.years.iter().position(|&y| y == year)?;
        let col = self.carbon_types.iter().position(|c| c == carbon_type)?;
        Some(self.values[row][col])
    }
}

// ============================================================================
// YEAR-OVER-YEAR CHANGE
// ============================================================================

/// Percentage change between the two most recent distinct years present in
/// the filtered set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum YoyChange {
    /// `(sum(latest) - sum(previous)) / sum(previous) * 100`.
    Change(f64),

    /// Fewer than two distinct years, or a zero previous-year total.
    NotApplicable,
}

impl YoyChange {
    pub fn is_applicable(&self) -> bool {
        matches!(self, YoyChange::Change(_))
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            YoyChange::Change(pct) => Some(*pct),
            YoyChange::NotApplicable => None,
        }
    }
}

impl Default for YoyChange {
    fn default() -> Self {
        YoyChange::NotApplicable
    }
}

impl fmt::Display for YoyChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YoyChange::Change(pct) => write!(f, "{:+.2}%", pct),
            YoyChange::NotApplicable => write!(f, "N/A"),
        }
    }
}

// ============================================================================
// MAIN RESULT STRUCT
// ============================================================================

/// The full output of one aggregation query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregationResult {
    /// (year, carbon type) sums, year ascending then carbon type.
    pub trend: Vec<TrendPoint>,

    /// (sector, carbon type) sums, sector then carbon type.
    pub sector_breakdown: Vec<SectorSlice>,

    /// Per-carbon-type sums, covering only types present in the data.
    pub type_distribution: Vec<TypeSlice>,

    /// Zero-filled year x carbon-type pivot of the trend sums.
    pub heat_matrix: HeatMatrix,

    /// Per-year sums across all carbon types, year ascending.
    pub yearly_totals: Vec<YearTotal>,

    /// Sum of emissions over the filtered set.
    pub total: f64,

    /// Arithmetic mean over the filtered set; 0.0 when the set is empty.
    pub mean: f64,

    /// Number of records in the filtered set.
    pub record_count: usize,

    /// Change between the two most recent distinct years.
    pub yoy_change_pct: YoyChange,

    /// Carbon types actually present in the filtered set, sorted. May be
    /// smaller than the filter's selection when some types matched no rows.
    pub observed_carbon_types: Vec<String>,
}

impl AggregationResult {
    /// The "no data" outcome: all tables empty, zeroed scalars, YoY not
    /// applicable. A first-class result, not an error; callers render an
    /// empty state from it.
    pub fn empty() -> Self {
        AggregationResult {
            trend: Vec::new(),
            sector_breakdown: Vec::new(),
            type_distribution: Vec::new(),
            heat_matrix: HeatMatrix::default(),
            yearly_totals: Vec::new(),
            total: 0.0,
            mean: 0.0,
            record_count: 0,
            yoy_change_pct: YoyChange::NotApplicable,
            observed_carbon_types: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}
