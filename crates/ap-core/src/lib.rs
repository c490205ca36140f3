//! `ap-core` — foundational types for the arrow placement engine.
//!
//! This crate is a dependency of every other `ap-*` crate.  It intentionally
//! has no `ap-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`grid`]     | `GridTopology`, `CompassLocation`                               |
//! | [`motion`]   | `MotionFamily`, `RotationDirection`, `Orientation`, `Color`, `OrientationLayer`, `Turns`, `Motion`, `Arrow` |
//! | [`handpath`] | `Handedness`, `resolve(start, end)`                             |
//! | [`letter`]   | `Letter`, `LetterType`, `PropConfigurationClass`                |
//! | [`vector`]   | `AdjustmentVector`                                              |
//! | [`config`]   | `EngineConfig`, `TableFormat`                                   |
//! | [`error`]    | `ApError`, `ApResult`                                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

#[macro_use]
mod token;

pub mod config;
pub mod error;
pub mod grid;
pub mod handpath;
pub mod letter;
pub mod motion;
pub mod vector;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{EngineConfig, TableFormat};
pub use error::{ApError, ApResult};
pub use grid::{CompassLocation, GridTopology};
pub use handpath::Handedness;
pub use letter::{Letter, LetterType, PropConfigurationClass};
pub use motion::{
    Arrow, Color, Motion, MotionFamily, Orientation, OrientationLayer, RotationDirection, Turns,
};
pub use vector::AdjustmentVector;
