//! FILENAME: aggregate-engine/src/engine.rs
//! Aggregation Engine - the calculation core that transforms the record
//! store into chartable tables and summary statistics.
//!
//! Algorithm:
//! 1. Validate the filter against the store's domain
//! 2. Select matching rows in a single pass
//! 3. Group-by-sum along each output dimension
//! 4. Resolve interned ids to labels and apply the presentation ordering
//! 5. Pivot the (year, carbon type) sums into the zero-filled heat matrix
//! 6. Compute scalar stats and the year-over-year delta

use rustc_hash::{FxHashMap, FxHashSet};
use store::{RecordStore, StoredRow, ValueId};

use crate::error::FilterError;
use crate::filter::EmissionFilter;
use crate::result::{
    AggregationResult, HeatMatrix, SectorSlice, TrendPoint, TypeSlice, YearTotal, YoyChange,
};

// ============================================================================
// AGGREGATOR
// ============================================================================

/// One aggregation pass. Holds the store and filter for the duration of a
/// single query; every method is a pure read.
struct Aggregator<'a> {
    store: &'a RecordStore,
    filter: &'a EmissionFilter,
}

impl<'a> Aggregator<'a> {
    fn new(store: &'a RecordStore, filter: &'a EmissionFilter) -> Self {
        Aggregator { store, filter }
    }

    fn run(&self) -> Result<AggregationResult, FilterError> {
        let state_id = self.validate()?;
        let selected = self.select(state_id);

        log::debug!(
            "filter state={} years={}..={} matched {} of {} rows",
            self.filter.state,
            self.filter.year_range.min,
            self.filter.year_range.max,
            selected.len(),
            self.store.len()
        );

        if selected.is_empty() {
            return Ok(AggregationResult::empty());
        }

        Ok(self.summarize(&selected))
    }

    /// Checks the two conditions that make a filter unanswerable: a state
    /// outside the store's domain and an inverted year range. Returns the
    /// interned id of the filter's state.
    fn validate(&self) -> Result<ValueId, FilterError> {
        let range = self.filter.year_range;
        if range.is_inverted() {
            return Err(FilterError::InvertedYearRange {
                min: range.min,
                max: range.max,
            });
        }

        self.store
            .states()
            .id_of(&self.filter.state)
            .ok_or_else(|| FilterError::UnknownState(self.filter.state.clone()))
    }

    /// Builds the filtered set. The filter's strings are resolved to
    /// interned ids once, so the scan itself is integer comparisons.
    fn select(&self, state_id: ValueId) -> Vec<&'a StoredRow> {
        let wanted_types: FxHashSet<ValueId> = self
            .filter
            .carbon_types
            .iter()
            .filter_map(|t| self.store.carbon_types().id_of(t))
            .collect();

        self.store
            .rows()
            .iter()
            .filter(|row| {
                row.state == state_id
                    && self.filter.year_range.contains(row.year)
                    && wanted_types.contains(&row.carbon_type)
            })
            .collect()
    }

    /// Groups, pivots, and computes scalars for a non-empty filtered set.
    fn summarize(&self, selected: &[&StoredRow]) -> AggregationResult {
        let mut trend_sums: FxHashMap<(i32, ValueId), f64> = FxHashMap::default();
        let mut sector_sums: FxHashMap<(ValueId, ValueId), f64> = FxHashMap::default();
        let mut type_sums: FxHashMap<ValueId, f64> = FxHashMap::default();
        let mut year_sums: FxHashMap<i32, f64> = FxHashMap::default();
        let mut total = 0.0;

        for row in selected {
            let tons = row.emission_metric_tons;
            *trend_sums.entry((row.year, row.carbon_type)).or_insert(0.0) += tons;
            *sector_sums
                .entry((row.sector, row.carbon_type))
                .or_insert(0.0) += tons;
            *type_sums.entry(row.carbon_type).or_insert(0.0) += tons;
            *year_sums.entry(row.year).or_insert(0.0) += tons;
            total += tons;
        }

        let record_count = selected.len();
        let mean = total / record_count as f64;

        // Axes: years ascending, carbon-type labels lexicographic.
        let mut years: Vec<i32> = year_sums.keys().copied().collect();
        years.sort_unstable();

        let mut type_axis: Vec<(ValueId, String)> = type_sums
            .keys()
            .map(|&id| (id, self.carbon_type_label(id)))
            .collect();
        type_axis.sort_by(|a, b| a.1.cmp(&b.1));

        let observed_carbon_types: Vec<String> =
            type_axis.iter().map(|(_, label)| label.clone()).collect();

        let mut trend: Vec<TrendPoint> = trend_sums
            .iter()
            .map(|(&(year, type_id), &sum)| TrendPoint {
                year,
                carbon_type: self.carbon_type_label(type_id),
                total: sum,
            })
            .collect();
        trend.sort_by(|a, b| {
            a.year
                .cmp(&b.year)
                .then_with(|| a.carbon_type.cmp(&b.carbon_type))
        });

        let mut sector_breakdown: Vec<SectorSlice> = sector_sums
            .iter()
            .map(|(&(sector_id, type_id), &sum)| SectorSlice {
                sector: self.sector_label(sector_id),
                carbon_type: self.carbon_type_label(type_id),
                total: sum,
            })
            .collect();
        sector_breakdown.sort_by(|a, b| {
            a.sector
                .cmp(&b.sector)
                .then_with(|| a.carbon_type.cmp(&b.carbon_type))
        });

        let type_distribution: Vec<TypeSlice> = type_axis
            .iter()
            .map(|(id, label)| TypeSlice {
                carbon_type: label.clone(),
                total: type_sums.get(id).copied().unwrap_or(0.0),
            })
            .collect();

        // Pivot: same sums as the trend table, zero-filled per cell.
        let values: Vec<Vec<f64>> = years
            .iter()
            .map(|&year| {
                type_axis
                    .iter()
                    .map(|&(type_id, _)| {
                        trend_sums.get(&(year, type_id)).copied().unwrap_or(0.0)
                    })
                    .collect()
            })
            .collect();

        let heat_matrix = HeatMatrix {
            years: years.clone(),
            carbon_types: observed_carbon_types.clone(),
            values,
        };

        let yearly_totals: Vec<YearTotal> = years
            .iter()
            .map(|&year| YearTotal {
                year,
                total: year_sums.get(&year).copied().unwrap_or(0.0),
            })
            .collect();

        let yoy_change_pct = yoy_change(&yearly_totals);

        AggregationResult {
            trend,
            sector_breakdown,
            type_distribution,
            heat_matrix,
            yearly_totals,
            total,
            mean,
            record_count,
            yoy_change_pct,
            observed_carbon_types,
        }
    }

    fn carbon_type_label(&self, id: ValueId) -> String {
        self.store
            .carbon_types()
            .value_of(id)
            .unwrap_or("(unknown)")
            .to_string()
    }

    fn sector_label(&self, id: ValueId) -> String {
        self.store
            .sectors()
            .value_of(id)
            .unwrap_or("(unknown)")
            .to_string()
    }
}

/// Percentage change between the two most recent distinct years.
/// A zero previous-year total yields the NotApplicable sentinel rather
/// than a division; so does a single-year set.
fn yoy_change(yearly_totals: &[YearTotal]) -> YoyChange {
    if yearly_totals.len() < 2 {
        return YoyChange::NotApplicable;
    }

    let latest = &yearly_totals[yearly_totals.len() - 1];
    let previous = &yearly_totals[yearly_totals.len() - 2];

    if previous.total == 0.0 {
        return YoyChange::NotApplicable;
    }

    YoyChange::Change((latest.total - previous.total) / previous.total * 100.0)
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Runs one aggregation query against the store.
///
/// This is the sole entry point of the engine. Each call is independent,
/// idempotent, and side-effect-free; callers holding shared references to
/// the store may invoke it concurrently without coordination. An empty
/// filtered set is a normal outcome ([`AggregationResult::empty`]), not an
/// error: only an unknown state or an inverted year range fails.
pub fn aggregate(
    store: &RecordStore,
    filter: &EmissionFilter,
) -> Result<AggregationResult, FilterError> {
    Aggregator::new(store, filter).run()
}
