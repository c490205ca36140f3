//! Default adjustment lookup through the key fallback chain.

use tracing::debug;

use ap_core::{AdjustmentVector, GridTopology, Turns};
use ap_tables::TableSource;

use crate::PlacementKey;

/// The base vector for `key` at exactly `turns`.
///
/// Tries the preferred key, then the key without its letter suffix, then
/// the bare family.  A turns miss falls through to the next key, never to a
/// neighbouring turns value.  Ends at the zero vector when every tier
/// misses.
pub fn default_adjustment<S: TableSource + ?Sized>(
    source:   &S,
    topology: GridTopology,
    key:      &PlacementKey,
    turns:    Turns,
) -> AdjustmentVector {
    let chain = key.fallback_chain();
    let preferred = key.preferred();

    for (tier, candidate) in chain.iter().enumerate() {
        if let Some(vector) = source.lookup(topology, key.family, candidate, turns) {
            if tier > 0 {
                debug!(%topology, %preferred, used = %candidate, %turns, "placement key fell back");
            }
            return vector;
        }
    }

    debug!(%topology, family = %key.family, %preferred, %turns, "no placement entry; using zero vector");
    AdjustmentVector::ZERO
}
