//! Structured placement keys and their canonical table strings.
//!
//! A key is built from the motion and the pictograph context, and only
//! turned into strings when the tables are consulted:
//!
//! ```text
//! pro                              bare family (catch-all row)
//! pro_to_layer1_alpha              family + tags
//! pro_to_layer1_alpha_A            family + tags + letter suffix
//! anti_to_radial_layer3_gamma_M    hybrid layer: orientation tag first
//! dash_W_dash                      dash-suffixed letter, no tags
//! ```

use std::fmt;

use ap_core::{Letter, Motion, MotionFamily, Orientation, OrientationLayer, PropConfigurationClass};

use crate::PictographContext;

const TAG_SEPARATOR: &str = "_to_";

// ── OrientationTag ────────────────────────────────────────────────────────────

/// Radial/non-radial tag that leads the key of a hybrid-layer pictograph.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum OrientationTag {
    Radial,
    NonRadial,
}

impl OrientationTag {
    /// Tag for a motion ending in `orientation`.
    #[inline]
    pub fn of(orientation: Orientation) -> Self {
        if orientation.is_radial() { OrientationTag::Radial } else { OrientationTag::NonRadial }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrientationTag::Radial    => "radial",
            OrientationTag::NonRadial => "nonradial",
        }
    }
}

// ── PlacementKey ──────────────────────────────────────────────────────────────

/// The composite key selecting a row of a placement table.
///
/// Never stored; recomputed for every calculation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct PlacementKey {
    pub family:          MotionFamily,
    pub orientation_tag: Option<OrientationTag>,
    pub layer:           Option<OrientationLayer>,
    pub prop_config:     PropConfigurationClass,
    pub letter:          Option<Letter>,
}

impl PlacementKey {
    /// The bare family key with no tags and no letter.
    #[inline]
    pub fn bare(family: MotionFamily) -> Self {
        Self {
            family,
            orientation_tag: None,
            layer:           None,
            prop_config:     PropConfigurationClass::None,
            letter:          None,
        }
    }

    /// Resolve the key for `motion` within `ctx`.
    ///
    /// The orientation tag is only set for hybrid-layer pictographs, and is
    /// chosen from this motion's end orientation.
    pub fn resolve(motion: &Motion, ctx: &PictographContext<'_>) -> Self {
        let orientation_tag = ctx
            .is_hybrid()
            .then(|| OrientationTag::of(motion.end_orientation));

        Self {
            family: motion.family,
            orientation_tag,
            layer: ctx.layer,
            prop_config: ctx.prop_config,
            letter: ctx.letter,
        }
    }

    /// Key middle tags in order: orientation, layer, prop configuration.
    fn tags(&self) -> impl Iterator<Item = &'static str> {
        self.orientation_tag
            .map(OrientationTag::as_str)
            .into_iter()
            .chain(self.layer.map(OrientationLayer::as_str))
            .chain(self.prop_config.tag())
    }

    /// The letter suffix: `_W`, or `_W_dash` for dash-suffixed letter types.
    pub fn letter_suffix(&self) -> Option<String> {
        let letter = self.letter?;
        Some(if letter.letter_type().is_dash_suffixed() {
            format!("_{}_dash", letter.truncated())
        } else {
            format!("_{letter}")
        })
    }

    /// Canonical string without the letter suffix.
    pub fn without_letter_suffix(&self) -> String {
        let mut key = String::from(self.family.as_str());
        let mut tags = self.tags().peekable();
        if tags.peek().is_some() {
            key.push_str(TAG_SEPARATOR);
            key.push_str(&tags.collect::<Vec<_>>().join("_"));
        }
        key
    }

    /// Canonical string of the most specific key.
    pub fn preferred(&self) -> String {
        let mut key = self.without_letter_suffix();
        if let Some(suffix) = self.letter_suffix() {
            key.push_str(&suffix);
        }
        key
    }

    /// Keys to try in order: preferred, without letter suffix, bare family.
    /// Duplicates are collapsed.
    pub fn fallback_chain(&self) -> Vec<String> {
        let mut chain = Vec::with_capacity(3);
        for key in [self.preferred(), self.without_letter_suffix(), self.family.as_str().to_owned()] {
            if !chain.contains(&key) {
                chain.push(key);
            }
        }
        chain
    }
}

impl fmt::Display for PlacementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.preferred())
    }
}
