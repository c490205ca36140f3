//! Read-only pictograph state passed to every adjustment calculation.

use ap_core::{Color, GridTopology, Letter, Motion, OrientationLayer, PropConfigurationClass};

/// A read-only snapshot of one pictograph, borrowed by every
/// [`ArrowAdjustmentCalculator`][crate::ArrowAdjustmentCalculator] call.
///
/// The context is built by the caller once per pictograph and shared by the
/// calculations for both of its arrows.  Everything the engine needs beyond
/// the arrow and its own motion lives here.
///
/// # Lifetimes
///
/// The motions are borrowed from the caller's pictograph data and must
/// outlive the context.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PictographContext<'a> {
    /// The pictograph's letter.  `None` short-circuits every calculation to
    /// the zero vector.
    pub letter: Option<Letter>,

    /// Which grid the pictograph is drawn on.
    pub topology: GridTopology,

    /// How the two props end relative to each other.
    pub prop_config: PropConfigurationClass,

    /// Orientation layer of the two end orientations, if known.
    pub layer: Option<OrientationLayer>,

    pub red_motion:  Option<&'a Motion>,
    pub blue_motion: Option<&'a Motion>,
}

impl<'a> PictographContext<'a> {
    /// A context with only a letter and a topology: no layer, no prop
    /// configuration, no motions.
    #[inline]
    pub fn new(letter: Option<Letter>, topology: GridTopology) -> Self {
        Self {
            letter,
            topology,
            prop_config: PropConfigurationClass::None,
            layer:       None,
            red_motion:  None,
            blue_motion: None,
        }
    }

    /// Build a context from the pictograph's two motions.
    ///
    /// The layer is classified from the two end orientations, and the prop
    /// configuration is the letter's ending configuration.  Either is left
    /// unset when its inputs are missing.
    pub fn from_motions(
        letter:   Option<Letter>,
        topology: GridTopology,
        red:      Option<&'a Motion>,
        blue:     Option<&'a Motion>,
    ) -> Self {
        let layer = match (red, blue) {
            (Some(r), Some(b)) => Some(OrientationLayer::classify(r.end_orientation, b.end_orientation)),
            _                  => None,
        };
        let prop_config = letter
            .map(Letter::ending_configuration)
            .unwrap_or_default();

        Self { letter, topology, prop_config, layer, red_motion: red, blue_motion: blue }
    }

    /// Override the prop configuration (e.g. with one computed from prop
    /// positions rather than the letter).
    #[inline]
    pub fn with_prop_config(mut self, prop_config: PropConfigurationClass) -> Self {
        self.prop_config = prop_config;
        self
    }

    /// Override the orientation layer.
    #[inline]
    pub fn with_layer(mut self, layer: Option<OrientationLayer>) -> Self {
        self.layer = layer;
        self
    }

    /// The motion belonging to `color`, if present.
    #[inline]
    pub fn motion(&self, color: Color) -> Option<&'a Motion> {
        match color {
            Color::Red  => self.red_motion,
            Color::Blue => self.blue_motion,
        }
    }

    /// The other prop's motion in the same beat.
    #[inline]
    pub fn paired_motion(&self, color: Color) -> Option<&'a Motion> {
        self.motion(color.other())
    }

    /// `true` when the pictograph ends in mixed radial/non-radial
    /// orientations.
    #[inline]
    pub fn is_hybrid(&self) -> bool {
        self.layer == Some(OrientationLayer::Hybrid)
    }
}
