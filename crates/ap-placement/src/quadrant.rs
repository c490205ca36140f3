//! Quadrant index selection from the arrow's anchor location.
//!
//! ```text
//!                 shift (pro/anti/float)     dash / static
//!   diamond       NE 0  SE 1  SW 2  NW 3     N 0  E 1  S 2  W 3
//!   box           N 0   E 1   S 2   W 3      NE 0 SE 1 SW 2 NW 3
//! ```
//!
//! A location outside the applicable map selects quadrant 0.

use ap_core::{CompassLocation, GridTopology, MotionFamily};

/// Quadrant (`0..=3`) of the tuple to use for an arrow at `location`.
pub fn resolve(topology: GridTopology, family: MotionFamily, location: CompassLocation) -> usize {
    let diagonal_map = match topology {
        GridTopology::Diamond => family.is_shift(),
        GridTopology::Box     => !family.is_shift(),
    };
    let index = if diagonal_map { diagonal(location) } else { cardinal(location) };
    index.unwrap_or(0)
}

#[inline]
fn cardinal(location: CompassLocation) -> Option<usize> {
    match location {
        CompassLocation::N => Some(0),
        CompassLocation::E => Some(1),
        CompassLocation::S => Some(2),
        CompassLocation::W => Some(3),
        _                  => None,
    }
}

#[inline]
fn diagonal(location: CompassLocation) -> Option<usize> {
    match location {
        CompassLocation::NE => Some(0),
        CompassLocation::SE => Some(1),
        CompassLocation::SW => Some(2),
        CompassLocation::NW => Some(3),
        _                   => None,
    }
}
