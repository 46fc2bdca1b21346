//! FILENAME: store/src/column.rs
//! Value interning for the store's text columns.
//!
//! Each unique string is stored once and referenced by index. Row data
//! then shrinks to vectors of ids, which keeps repeated values (a state
//! name appearing in thousands of rows) cheap and makes row comparisons
//! integer comparisons.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A reference to an interned value within a column's unique value store.
/// Using u32 to save memory (supports up to 4B unique values per column).
pub type ValueId = u32;

/// An interned string column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StringColumn {
    /// Map from value to its unique ID (for deduplication during build).
    value_to_id: FxHashMap<String, ValueId>,

    /// Ordered list of unique values (indexed by ValueId).
    /// This allows O(1) lookup from ID to value.
    id_to_value: Vec<String>,
}

impl StringColumn {
    pub fn new() -> Self {
        StringColumn {
            value_to_id: FxHashMap::default(),
            id_to_value: Vec::new(),
        }
    }

    /// Interns a value and returns its ValueId.
    /// If the value already exists, returns the existing ID.
    pub fn intern(&mut self, value: &str) -> ValueId {
        if let Some(&id) = self.value_to_id.get(value) {
            return id;
        }

        let id = self.id_to_value.len() as ValueId;
        self.id_to_value.push(value.to_string());
        self.value_to_id.insert(value.to_string(), id);
        id
    }

    /// Looks up the ID of an already-interned value.
    pub fn id_of(&self, value: &str) -> Option<ValueId> {
        self.value_to_id.get(value).copied()
    }

    /// Gets the value for a given ID.
    pub fn value_of(&self, id: ValueId) -> Option<&str> {
        self.id_to_value.get(id as usize).map(String::as_str)
    }

    /// Returns the number of unique values.
    pub fn unique_count(&self) -> usize {
        self.id_to_value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_value.is_empty()
    }

    /// Iterates over unique values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.id_to_value.iter().map(String::as_str)
    }

    /// Returns all unique values sorted lexicographically.
    pub fn sorted_values(&self) -> Vec<String> {
        let mut values = self.id_to_value.clone();
        values.sort();
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_deduplicates() {
        let mut col = StringColumn::new();
        let a = col.intern("CO2");
        let b = col.intern("CH4");
        let c = col.intern("CO2");

        assert_eq!(a, c);
        assert_ne!(a, b);
        assert_eq!(col.unique_count(), 2);
    }

    #[test]
    fn round_trips_ids_and_values() {
        let mut col = StringColumn::new();
        let id = col.intern("Texas");

        assert_eq!(col.value_of(id), Some("Texas"));
        assert_eq!(col.id_of("Texas"), Some(id));
        assert_eq!(col.id_of("Nowhere"), None);
        assert_eq!(col.value_of(99), None);
    }

    #[test]
    fn sorted_values_are_lexicographic() {
        let mut col = StringColumn::new();
        col.intern("N2O");
        col.intern("CH4");
        col.intern("CO2");

        assert_eq!(col.sorted_values(), vec!["CH4", "CO2", "N2O"]);
    }
}
