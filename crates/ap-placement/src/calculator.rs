//! The arrow adjustment calculator.

use tracing::{debug, trace};

use ap_core::{AdjustmentVector, Arrow, Motion};
use ap_tables::TableSource;

use crate::lookup::default_adjustment;
use crate::{quadrant, tuples, PictographContext, PlacementKey};

/// Computes the pixel offset for an arrow glyph.
///
/// Holds the table source it reads from; construct once and share.  Every
/// call is a pure function of its inputs and the source, so the same
/// calculator may serve any number of threads.
///
/// # Example
///
/// ```rust,ignore
/// let tables = PlacementTableRepository::builtin()?;
/// let calc = ArrowAdjustmentCalculator::new(&tables);
/// let ctx = PictographContext::from_motions(Some(Letter::A), GridTopology::Diamond, Some(&red), Some(&blue));
/// let offset = calc.get_adjustment(&Arrow::for_motion(&red, CompassLocation::NE), &red, &ctx);
/// ```
#[derive(Clone, Debug)]
pub struct ArrowAdjustmentCalculator<S: TableSource> {
    source: S,
}

impl<S: TableSource> ArrowAdjustmentCalculator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The table source this calculator reads from.
    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The offset for `arrow`, drawn for `motion`, within `ctx`.
    ///
    /// 1. No letter → zero vector.
    /// 2. Base vector from the key fallback chain.
    /// 3. Directional tuple for the motion; none → the base vector.
    /// 4. Tuple entry picked by the arrow's own location.
    pub fn get_adjustment(
        &self,
        arrow:  &Arrow,
        motion: &Motion,
        ctx:    &PictographContext<'_>,
    ) -> AdjustmentVector {
        if ctx.letter.is_none() {
            return AdjustmentVector::ZERO;
        }

        let key = PlacementKey::resolve(motion, ctx);
        trace!(%key, topology = %ctx.topology, turns = %motion.turns, "resolved placement key");

        let base = default_adjustment(&self.source, ctx.topology, &key, motion.turns);

        let Some(tuple) = tuples::generate(base, motion, ctx) else {
            debug!(
                family = %motion.family,
                rotation = %motion.rotation_direction,
                handedness = %motion.handedness(),
                "no directional tuple; using base vector"
            );
            return base;
        };

        let index = quadrant::resolve(ctx.topology, motion.family, arrow.location);
        tuple.get(index).copied().unwrap_or(AdjustmentVector::ZERO)
    }
}
