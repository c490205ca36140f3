//! One placement table: placement key → turns → default adjustment.
//!
//! # Shape
//!
//! ```text
//! "pro"                    → { 0 → (-10, 40), 0.5 → (-5, 45), … }
//! "pro_to_layer1_alpha"    → { 0 → (-15, 35), 1 → (-15, 35), … }
//! "pro_to_layer1_alpha_A"  → { 0 → (-20, 30), … }
//! ```
//!
//! Keys are the canonical strings produced by the placement-key resolver.
//! Turns are matched exactly; there is no interpolation between rows.

use std::collections::BTreeMap;

use ap_core::{AdjustmentVector, Turns};

#[cfg(feature = "fx-hash")]
pub(crate) type KeyMap<V> = rustc_hash::FxHashMap<String, V>;
#[cfg(not(feature = "fx-hash"))]
pub(crate) type KeyMap<V> = std::collections::HashMap<String, V>;

/// The per-key row: at most one vector per legal turns value.
pub type TurnsRow = BTreeMap<Turns, AdjustmentVector>;

/// A lookup table for one (topology, motion family) pair.
///
/// Built once by a loader and treated as read-only afterwards; the
/// repository only ever hands out shared references.
#[derive(Clone, Debug, Default)]
pub struct PlacementTable {
    rows: KeyMap<TurnsRow>,
}

impl PlacementTable {
    /// An empty table.  Every lookup against it misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite one entry.  Used while building a table.
    pub fn insert(&mut self, key: impl Into<String>, turns: Turns, vector: AdjustmentVector) {
        self.rows.entry(key.into()).or_default().insert(turns, vector);
    }

    /// Builder-style [`insert`][Self::insert].
    pub fn with(mut self, key: &str, turns: Turns, vector: impl Into<AdjustmentVector>) -> Self {
        self.insert(key, turns, vector.into());
        self
    }

    /// The vector stored for `key` at exactly `turns`, if any.
    #[inline]
    pub fn get(&self, key: &str, turns: Turns) -> Option<AdjustmentVector> {
        self.rows.get(key).and_then(|row| row.get(&turns)).copied()
    }

    /// `true` if the table has a row for `key` (at any turns value).
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.rows.contains_key(key)
    }

    /// The whole row for `key`.
    pub fn row(&self, key: &str) -> Option<&TurnsRow> {
        self.rows.get(key)
    }

    /// Number of placement keys.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of (key, turns) entries.
    pub fn entry_count(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    /// Placement keys in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.rows.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl PartialEq for PlacementTable {
    fn eq(&self, other: &Self) -> bool {
        self.rows.len() == other.rows.len()
            && self
                .rows
                .iter()
                .all(|(key, row)| other.rows.get(key) == Some(row))
    }
}
