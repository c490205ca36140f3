//! Resolving many arrows at once.

use ap_core::{AdjustmentVector, Arrow, Motion};
use ap_tables::TableSource;

use crate::{ArrowAdjustmentCalculator, PictographContext};

/// One arrow to place: the arrow, the motion it is drawn for, and its
/// pictograph.
#[derive(Clone, Copy, Debug)]
pub struct BatchJob<'a> {
    pub arrow:   Arrow,
    pub motion:  &'a Motion,
    pub context: PictographContext<'a>,
}

impl<'a> BatchJob<'a> {
    #[inline]
    pub fn new(arrow: Arrow, motion: &'a Motion, context: PictographContext<'a>) -> Self {
        Self { arrow, motion, context }
    }
}

/// Resolve every job, returning offsets in input order.
///
/// With the `parallel` Cargo feature the jobs run on Rayon's thread pool
/// (size it with `rayon::ThreadPoolBuilder` before the first call).  The
/// output is identical either way.
pub fn resolve_batch<S: TableSource>(
    calculator: &ArrowAdjustmentCalculator<S>,
    jobs:       &[BatchJob<'_>],
) -> Vec<AdjustmentVector> {
    #[cfg(not(feature = "parallel"))]
    {
        jobs.iter()
            .map(|job| calculator.get_adjustment(&job.arrow, job.motion, &job.context))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        jobs.par_iter()
            .map(|job| calculator.get_adjustment(&job.arrow, job.motion, &job.context))
            .collect()
    }
}
