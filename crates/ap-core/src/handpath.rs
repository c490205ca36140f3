//! Handpath classification from a motion's start and end locations.
//!
//! The hand's rotational direction is inferred purely from where it starts
//! and ends, independent of the prop's stated spin.  Adjacent moves around
//! the grid are clockwise or counter-clockwise; moves to the opposite point
//! are dashes; staying put is static.
//!
//! ```text
//!            N                 NW     NE
//!        W   ·   E                ·
//!            S                 SW     SE
//!   cw:  S→W→N→E→S        cw:  NE→SE→SW→NW→NE
//! ```
//!
//! The table is a dense 8×8 array built at compile time, so a lookup is two
//! indexing operations.  Pairs outside the table (e.g. `N → NE`, which mixes
//! the two grids) resolve to `Unknown`.

use crate::CompassLocation::{self, E, N, NE, NW, S, SE, SW, W};

token_enum! {
    /// Rotational handedness of a hand's path.
    pub enum Handedness ("handedness") {
        ClockwiseHandpath        => "cw_shift",
        CounterClockwiseHandpath => "ccw_shift",
        Dash                     => "dash",
        Static                   => "static",
        Unknown                  => "unknown",
    }
}

const CLOCKWISE_PAIRS: [(CompassLocation, CompassLocation); 8] = [
    (S, W), (W, N), (N, E), (E, S),
    (NE, SE), (SE, SW), (SW, NW), (NW, NE),
];

const COUNTER_CLOCKWISE_PAIRS: [(CompassLocation, CompassLocation); 8] = [
    (W, S), (N, W), (E, N), (S, E),
    (NE, NW), (NW, SW), (SW, SE), (SE, NE),
];

const DASH_PAIRS: [(CompassLocation, CompassLocation); 8] = [
    (S, N), (W, E), (N, S), (E, W),
    (NE, SW), (SE, NW), (SW, NE), (NW, SE),
];

const STATIC_PAIRS: [(CompassLocation, CompassLocation); 8] = [
    (N, N), (E, E), (S, S), (W, W),
    (NE, NE), (SE, SE), (SW, SW), (NW, NW),
];

const TABLE: [[Handedness; 8]; 8] = build_table();

const fn build_table() -> [[Handedness; 8]; 8] {
    let mut table = [[Handedness::Unknown; 8]; 8];
    let mut i = 0;
    while i < 8 {
        let (a, b) = CLOCKWISE_PAIRS[i];
        table[a.index()][b.index()] = Handedness::ClockwiseHandpath;
        let (a, b) = COUNTER_CLOCKWISE_PAIRS[i];
        table[a.index()][b.index()] = Handedness::CounterClockwiseHandpath;
        let (a, b) = DASH_PAIRS[i];
        table[a.index()][b.index()] = Handedness::Dash;
        let (a, b) = STATIC_PAIRS[i];
        table[a.index()][b.index()] = Handedness::Static;
        i += 1;
    }
    table
}

/// Classify the hand's path from `start` to `end`.
#[inline]
pub fn resolve(start: CompassLocation, end: CompassLocation) -> Handedness {
    TABLE[start.index()][end.index()]
}

impl Handedness {
    /// `true` for the two rotational classifications.
    #[inline]
    pub fn is_shift(self) -> bool {
        matches!(
            self,
            Handedness::ClockwiseHandpath | Handedness::CounterClockwiseHandpath
        )
    }
}
