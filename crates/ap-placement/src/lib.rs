//! `ap-placement` — arrow adjustment calculation.
//!
//! Given an arrow, the motion it depicts and the pictograph around it, the
//! calculator returns the pixel offset the renderer applies to the glyph.
//!
//! # Pipeline
//!
//! ```text
//! PictographContext ─┐
//! Motion ────────────┼─▶ PlacementKey ─▶ default_adjustment ─▶ base
//!                    │                      (fallback chain)
//!                    └─▶ tuples::generate(base) ─▶ [v0 v1 v2 v3]
//! Arrow.location ──────▶ quadrant::resolve ─────────▶ index ─▶ offset
//! ```
//!
//! # Crate layout
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`context`]    | `PictographContext` — per-pictograph read-only snapshot |
//! | [`key`]        | `PlacementKey`, `OrientationTag`                        |
//! | [`lookup`]     | `default_adjustment` — fallback-chain table lookup      |
//! | [`tuples`]     | Directional tuple generators per motion family          |
//! | [`quadrant`]   | Quadrant index from the arrow's location                |
//! | [`calculator`] | `ArrowAdjustmentCalculator`                             |
//! | [`batch`]      | `BatchJob`, `resolve_batch`                             |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                            |
//! |------------|---------------------------------------------------|
//! | `parallel` | Runs `resolve_batch` on Rayon's thread pool.      |

pub mod batch;
pub mod calculator;
pub mod context;
pub mod key;
pub mod lookup;
pub mod quadrant;
pub mod tuples;

#[cfg(test)]
mod tests;

pub use batch::{resolve_batch, BatchJob};
pub use calculator::ArrowAdjustmentCalculator;
pub use context::PictographContext;
pub use key::{OrientationTag, PlacementKey};
pub use lookup::default_adjustment;
pub use tuples::DirectionalTuple;
