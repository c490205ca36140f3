//! Directional tuple generation.
//!
//! A generator turns one base vector into four variants, one per grid
//! quadrant.  Each branch is a literal sign/swap pattern taken from the
//! placement data as authored; several are deliberately asymmetric, so none
//! of them are derived from a rotation matrix.
//!
//! | Family             | Branches on                                      |
//! |--------------------|--------------------------------------------------|
//! | `pro`, `anti`      | topology, rotation direction                     |
//! | `float`            | topology, handpath (start → end)                 |
//! | `dash`             | topology, rotation direction, paired motion      |
//! | `static`           | nothing                                          |
//!
//! `None` means the motion has no directional variants (e.g. a pro motion
//! with `no_rot`); the calculator then uses the base vector as is.

use ap_core::{
    AdjustmentVector, Color, CompassLocation, GridTopology, Handedness, Motion, MotionFamily,
    RotationDirection,
};

use crate::PictographContext;

/// Four quadrant variants of one base vector.
pub type DirectionalTuple = [AdjustmentVector; 4];

#[inline]
fn v(x: f64, y: f64) -> AdjustmentVector {
    AdjustmentVector::new(x, y)
}

/// Generate the tuple for `motion` in `ctx`, dispatching on its family.
pub fn generate(
    base:   AdjustmentVector,
    motion: &Motion,
    ctx:    &PictographContext<'_>,
) -> Option<DirectionalTuple> {
    match motion.family {
        MotionFamily::Pro | MotionFamily::Anti | MotionFamily::Float => {
            shift(base, ctx.topology, motion)
        }
        MotionFamily::Dash   => dash(base, ctx.topology, motion, ctx.paired_motion(motion.color)),
        MotionFamily::Static => Some(static_tuple(base, ctx.topology)),
    }
}

// ── Shift (pro / anti / float) ────────────────────────────────────────────────

/// Tuples for the shift group.
pub fn shift(base: AdjustmentVector, topology: GridTopology, motion: &Motion) -> Option<DirectionalTuple> {
    use MotionFamily::{Anti, Float, Pro};
    use RotationDirection::{Clockwise as Cw, CounterClockwise as Ccw};

    let AdjustmentVector { x, y } = base;
    let rotation = motion.rotation_direction;

    match topology {
        GridTopology::Diamond => match (motion.family, rotation) {
            (Pro, Cw)   => Some([v(x, y),   v(-y, x),  v(-x, -y), v(y, -x)]),
            (Pro, Ccw)  => Some([v(-y, -x), v(x, -y),  v(y, x),   v(-x, y)]),
            (Anti, Cw)  => Some([v(-y, -x), v(x, -y),  v(y, x),   v(-x, y)]),
            (Anti, Ccw) => Some([v(x, y),   v(-y, x),  v(-x, -y), v(y, -x)]),
            (Float, _)  => match motion.handedness() {
                Handedness::ClockwiseHandpath        => Some([v(x, y),   v(-y, x), v(-x, -y), v(y, -x)]),
                Handedness::CounterClockwiseHandpath => Some([v(-y, -x), v(x, -y), v(y, x),   v(-x, y)]),
                _                                    => None,
            },
            _ => None,
        },
        GridTopology::Box => match (motion.family, rotation) {
            (Pro | Anti, Cw)  => Some([v(-x, y), v(-y, -x), v(x, -y),  v(y, x)]),
            (Pro | Anti, Ccw) => Some([v(x, y),  v(-y, x),  v(-x, -y), v(y, -x)]),
            // Both handpaths share one pattern on the box grid.
            (Float, _) => match motion.handedness() {
                Handedness::ClockwiseHandpath        => Some([v(-y, -x), v(x, -y), v(y, x), v(-x, y)]),
                Handedness::CounterClockwiseHandpath => Some([v(-y, -x), v(x, -y), v(y, x), v(-x, y)]),
                _                                    => None,
            },
            _ => None,
        },
    }
}

// ── Dash ──────────────────────────────────────────────────────────────────────

/// Tuples for dash motions.
///
/// `paired` is the other prop's motion in the same beat; it only matters
/// when this dash has no rotation.
pub fn dash(
    base:     AdjustmentVector,
    topology: GridTopology,
    motion:   &Motion,
    paired:   Option<&Motion>,
) -> Option<DirectionalTuple> {
    if is_dual_dash_zero_turns(motion) {
        return dual_dash_zero_turns(base, topology, motion);
    }

    let AdjustmentVector { x, y } = base;
    match (topology, motion.rotation_direction) {
        (_, RotationDirection::NoRotation) => Some(unrotated_dash(base, paired)),

        (GridTopology::Diamond, RotationDirection::Clockwise)        => Some([v(x, -y), v(y, x),   v(-x, y), v(-y, -x)]),
        (GridTopology::Diamond, RotationDirection::CounterClockwise) => Some([v(-x, -y), v(y, -x), v(x, y),  v(-y, x)]),
        (GridTopology::Box,     RotationDirection::Clockwise)        => Some([v(-y, x), v(-x, -y), v(y, -x), v(x, y)]),
        (GridTopology::Box,     RotationDirection::CounterClockwise) => Some([v(-x, y), v(-y, -x), v(x, -y), v(y, x)]),
    }
}

/// A dash without rotation takes its pattern from a paired pro motion's
/// rotation; anything else gets the default pattern.
fn unrotated_dash(base: AdjustmentVector, paired: Option<&Motion>) -> DirectionalTuple {
    let AdjustmentVector { x, y } = base;
    match paired {
        Some(other) if other.family == MotionFamily::Pro => {
            if other.rotation_direction == RotationDirection::Clockwise {
                [v(x, y), v(-y, x), v(-x, -y), v(y, -x)]
            } else {
                [v(-x, y), v(-y, -x), v(x, -y), v(y, x)]
            }
        }
        _ => default_pattern(base),
    }
}

/// Dual-dash beats with zero turns get per-path overrides.  No letter in
/// the current notation selects them.
#[inline]
pub(crate) fn is_dual_dash_zero_turns(_motion: &Motion) -> bool {
    false
}

/// Override patterns keyed by (color, start, end).
pub(crate) fn dual_dash_zero_turns(
    base:     AdjustmentVector,
    topology: GridTopology,
    motion:   &Motion,
) -> Option<DirectionalTuple> {
    use CompassLocation::{N, NE, S, SW};

    let AdjustmentVector { x, y } = base;
    match (topology, motion.color, motion.start_loc, motion.end_loc) {
        (GridTopology::Diamond, Color::Blue, N, S) => Some([v(x, y), v(-y, x), v(-x, -y), v(y, -x)]),
        (GridTopology::Box,     Color::Red, NE, SW) => Some([v(x, y), v(y, x), v(-x, -y), v(y, x)]),
        _ => None,
    }
}

// ── Static ────────────────────────────────────────────────────────────────────

/// Tuple for static motions.  Currently the same on both grids and equal to
/// the unrotated dash default; kept separate so the two can diverge.
pub fn static_tuple(base: AdjustmentVector, _topology: GridTopology) -> DirectionalTuple {
    default_pattern(base)
}

#[inline]
fn default_pattern(AdjustmentVector { x, y }: AdjustmentVector) -> DirectionalTuple {
    [v(x, -y), v(y, x), v(-x, y), v(-y, -x)]
}
