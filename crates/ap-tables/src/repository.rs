//! The full set of placement tables and the [`TableSource`] seam.
//!
//! # Layout
//!
//! Ten tables, one per (topology, family) pair, stored in a flat array:
//!
//! ```text
//! slot = topology * 5 + family
//!        diamond: pro anti float dash static   → 0..5
//!        box:     pro anti float dash static   → 5..10
//! ```
//!
//! The repository is built once at start-up and never mutated.  It is
//! `Send + Sync` with no interior mutability, so any number of threads may
//! share one `&PlacementTableRepository` without locking.

use ap_core::{AdjustmentVector, GridTopology, MotionFamily, Turns};

use crate::table::PlacementTable;

const FAMILY_COUNT: usize = 5;
const SLOT_COUNT: usize = 2 * FAMILY_COUNT;

#[inline]
fn slot(topology: GridTopology, family: MotionFamily) -> usize {
    topology as usize * FAMILY_COUNT + family as usize
}

// ── TableSource trait ─────────────────────────────────────────────────────────

/// Read access to default placement vectors.
///
/// The calculator only ever talks to tables through this trait, so tests
/// and tools can supply hand-built sources.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one source can serve parallel
/// batch resolution.
pub trait TableSource: Send + Sync {
    /// The vector stored under `key` at exactly `turns` in the table for
    /// (`topology`, `family`), or `None` on any miss.
    fn lookup(
        &self,
        topology: GridTopology,
        family:   MotionFamily,
        key:      &str,
        turns:    Turns,
    ) -> Option<AdjustmentVector>;
}

// ── PlacementTableRepository ──────────────────────────────────────────────────

/// All ten default placement tables.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlacementTableRepository {
    tables: [PlacementTable; SLOT_COUNT],
}

impl PlacementTableRepository {
    /// A repository where every table is empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Replace the table for (`topology`, `family`).
    pub fn with_table(
        mut self,
        topology: GridTopology,
        family:   MotionFamily,
        table:    PlacementTable,
    ) -> Self {
        self.tables[slot(topology, family)] = table;
        self
    }

    /// The table for (`topology`, `family`).  Absent tables are empty.
    #[inline]
    pub fn table(&self, topology: GridTopology, family: MotionFamily) -> &PlacementTable {
        &self.tables[slot(topology, family)]
    }

    /// Number of tables with at least one key.
    pub fn loaded_table_count(&self) -> usize {
        self.tables.iter().filter(|t| !t.is_empty()).count()
    }

    /// Total (key, turns) entries across all tables.
    pub fn entry_count(&self) -> usize {
        self.tables.iter().map(PlacementTable::entry_count).sum()
    }

    /// Iterate over every (topology, family, table) triple.
    pub fn iter(&self) -> impl Iterator<Item = (GridTopology, MotionFamily, &PlacementTable)> {
        GridTopology::ALL.iter().flat_map(move |&topology| {
            MotionFamily::ALL
                .iter()
                .map(move |&family| (topology, family, self.table(topology, family)))
        })
    }
}

impl TableSource for PlacementTableRepository {
    #[inline]
    fn lookup(
        &self,
        topology: GridTopology,
        family:   MotionFamily,
        key:      &str,
        turns:    Turns,
    ) -> Option<AdjustmentVector> {
        self.table(topology, family).get(key, turns)
    }
}

impl<S: TableSource + ?Sized> TableSource for &S {
    #[inline]
    fn lookup(
        &self,
        topology: GridTopology,
        family:   MotionFamily,
        key:      &str,
        turns:    Turns,
    ) -> Option<AdjustmentVector> {
        (**self).lookup(topology, family, key, turns)
    }
}
