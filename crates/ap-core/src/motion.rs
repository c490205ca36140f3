//! Motion and arrow input types.
//!
//! # Families
//!
//! | Family   | Group  | Directional variants keyed by          |
//! |----------|--------|----------------------------------------|
//! | `pro`    | shift  | prop rotation direction                |
//! | `anti`   | shift  | prop rotation direction                |
//! | `float`  | shift  | handpath (derived from start/end)      |
//! | `dash`   | —      | rotation direction, then paired motion |
//! | `static` | —      | nothing (one pattern per topology)     |
//!
//! Motions are produced by external collaborators (sequence data, the
//! pictograph editor).  The engine never mutates them.

use std::fmt;
use std::str::FromStr;

use crate::handpath::{self, Handedness};
use crate::{ApError, CompassLocation};

// ── Enumerations ──────────────────────────────────────────────────────────────

token_enum! {
    /// The kind of path a prop takes within one beat.
    pub enum MotionFamily ("motion family") {
        Pro    => "pro",
        Anti   => "anti",
        Float  => "float",
        Dash   => "dash",
        Static => "static",
    }
}

impl MotionFamily {
    /// `true` for the shift group (pro, anti, float): props travel between
    /// adjacent hand points.
    #[inline]
    pub fn is_shift(self) -> bool {
        matches!(self, MotionFamily::Pro | MotionFamily::Anti | MotionFamily::Float)
    }
}

token_enum! {
    /// The prop's spin direction as stated by the motion.
    pub enum RotationDirection ("rotation direction") {
        Clockwise        => "cw",
        CounterClockwise => "ccw",
        NoRotation       => "no_rot",
    }
}

token_enum! {
    /// Prop orientation at the start or end of a motion.
    pub enum Orientation ("orientation") {
        RadialIn           => "in",
        RadialOut          => "out",
        NonRadialClockwise => "clock",
        NonRadialCounter   => "counter",
    }
}

impl Orientation {
    /// `true` for `in` and `out`.
    #[inline]
    pub fn is_radial(self) -> bool {
        matches!(self, Orientation::RadialIn | Orientation::RadialOut)
    }
}

token_enum! {
    /// Which hand (and prop) a motion or arrow belongs to.
    pub enum Color ("color") {
        Red  => "red",
        Blue => "blue",
    }
}

impl Color {
    /// The other hand.
    #[inline]
    pub fn other(self) -> Color {
        match self {
            Color::Red  => Color::Blue,
            Color::Blue => Color::Red,
        }
    }
}

token_enum! {
    /// How the two props' end orientations relate across the pictograph.
    ///
    /// Selects the `layer1`/`layer2`/`layer3` tag of a placement key.
    pub enum OrientationLayer ("orientation layer") {
        /// Both props end radial (`in`/`out`).
        Radial    => "layer1",
        /// Both props end non-radial (`clock`/`counter`).
        NonRadial => "layer2",
        /// One radial, one non-radial.
        Hybrid    => "layer3",
    }
}

impl OrientationLayer {
    /// Classify a pictograph from its two end orientations.
    pub fn classify(first: Orientation, second: Orientation) -> Self {
        match (first.is_radial(), second.is_radial()) {
            (true, true)   => OrientationLayer::Radial,
            (false, false) => OrientationLayer::NonRadial,
            _              => OrientationLayer::Hybrid,
        }
    }
}

// ── Turns ─────────────────────────────────────────────────────────────────────

/// Number of prop turns in a motion, stored exactly as a half-turn count.
///
/// Legal values are 0, 0.5, 1, … 3 and the `FLOAT` sentinel used by float
/// motions.  Equality is integer equality, so a table entry for `1.5` is only
/// ever matched by `1.5`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Turns(u8);

impl Turns {
    /// Highest legal half-turn count (3 full turns).
    pub const MAX_HALF_TURNS: u8 = 6;

    pub const ZERO:       Turns = Turns(0);
    pub const HALF:       Turns = Turns(1);
    pub const ONE:        Turns = Turns(2);
    pub const ONE_HALF:   Turns = Turns(3);
    pub const TWO:        Turns = Turns(4);
    pub const TWO_HALF:   Turns = Turns(5);
    pub const THREE:      Turns = Turns(6);

    /// Sentinel for float motions (`u8::MAX`).
    pub const FLOAT: Turns = Turns(u8::MAX);

    const KEYS: [&'static str; 7] = ["0", "0.5", "1", "1.5", "2", "2.5", "3"];
    const FLOAT_KEY: &'static str = "fl";

    /// Build from a half-turn count (`0..=6`).
    pub fn from_half_turns(half: u8) -> Result<Self, ApError> {
        if half <= Self::MAX_HALF_TURNS {
            Ok(Turns(half))
        } else {
            Err(ApError::InvalidTurns(format!("{}", half as f64 / 2.0)))
        }
    }

    /// Build from a numeric value; only exact multiples of 0.5 in `0..=3`
    /// are accepted.
    pub fn from_f64(value: f64) -> Result<Self, ApError> {
        let doubled = value * 2.0;
        if value.is_finite() && doubled.fract() == 0.0 && (0.0..=6.0).contains(&doubled) {
            Ok(Turns(doubled as u8))
        } else {
            Err(ApError::InvalidTurns(value.to_string()))
        }
    }

    #[inline]
    pub fn is_float(self) -> bool {
        self == Turns::FLOAT
    }

    /// Half-turn count, or `None` for the float sentinel.
    #[inline]
    pub fn half_turns(self) -> Option<u8> {
        (!self.is_float()).then_some(self.0)
    }

    /// Numeric value, or `None` for the float sentinel.
    #[inline]
    pub fn as_f64(self) -> Option<f64> {
        self.half_turns().map(|h| h as f64 / 2.0)
    }

    /// The token used as a turns key in placement tables: `"0"`, `"0.5"`, …
    /// `"3"`, or `"fl"`.
    pub fn as_key(self) -> &'static str {
        match self.half_turns() {
            Some(h) => Self::KEYS[h as usize],
            None    => Self::FLOAT_KEY,
        }
    }
}

impl fmt::Display for Turns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_key())
    }
}

impl FromStr for Turns {
    type Err = ApError;

    /// Accepts `"fl"` and any numeric spelling of a legal value (`"1"`,
    /// `"1.0"`, `"1.50"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(Self::FLOAT_KEY) {
            return Ok(Turns::FLOAT);
        }
        let value: f64 = s
            .parse()
            .map_err(|_| ApError::InvalidTurns(s.to_owned()))?;
        Turns::from_f64(value)
    }
}

impl TryFrom<String> for Turns {
    type Error = ApError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Turns> for String {
    fn from(t: Turns) -> String {
        t.as_key().to_owned()
    }
}

// ── Motion ────────────────────────────────────────────────────────────────────

/// A prop's kinematic path between two grid locations within one beat.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Motion {
    pub family:             MotionFamily,
    pub start_loc:          CompassLocation,
    pub end_loc:            CompassLocation,
    pub start_orientation:  Orientation,
    pub end_orientation:    Orientation,
    pub rotation_direction: RotationDirection,
    pub turns:              Turns,
    pub color:              Color,
}

impl Motion {
    /// Handpath direction implied by the start and end locations.
    #[inline]
    pub fn handedness(&self) -> Handedness {
        handpath::resolve(self.start_loc, self.end_loc)
    }
}

// ── Arrow ─────────────────────────────────────────────────────────────────────

/// The glyph drawn for one motion.
///
/// `location` is where the arrow is anchored on the grid; it is computed by
/// the arrow-location collaborator and need not equal either endpoint of the
/// motion.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arrow {
    pub color:         Color,
    pub motion_family: MotionFamily,
    pub turns:         Turns,
    pub location:      CompassLocation,
}

impl Arrow {
    /// The arrow for `motion`, anchored at `location`.
    pub fn for_motion(motion: &Motion, location: CompassLocation) -> Self {
        Self {
            color:         motion.color,
            motion_family: motion.family,
            turns:         motion.turns,
            location,
        }
    }
}
