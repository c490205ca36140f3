//! Unit tests for ap-placement.

use ap_core::{
    AdjustmentVector, Arrow, Color, CompassLocation, GridTopology, Letter, Motion, MotionFamily,
    Orientation, RotationDirection, Turns,
};
use ap_tables::{PlacementTable, PlacementTableRepository};

use crate::{ArrowAdjustmentCalculator, PictographContext, PlacementKey};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn v(x: f64, y: f64) -> AdjustmentVector {
    AdjustmentVector::new(x, y)
}

/// A motion ending radial-in, with everything else given.
fn motion(
    family:   MotionFamily,
    start:    CompassLocation,
    end:      CompassLocation,
    rotation: RotationDirection,
    turns:    Turns,
    color:    Color,
) -> Motion {
    Motion {
        family,
        start_loc:          start,
        end_loc:            end,
        start_orientation:  Orientation::RadialIn,
        end_orientation:    Orientation::RadialIn,
        rotation_direction: rotation,
        turns,
        color,
    }
}

fn pro_cw(turns: Turns) -> Motion {
    use ap_core::CompassLocation::{E, N};
    motion(MotionFamily::Pro, N, E, RotationDirection::Clockwise, turns, Color::Red)
}

fn ending(mut m: Motion, orientation: Orientation) -> Motion {
    m.end_orientation = orientation;
    m
}

fn builtin() -> PlacementTableRepository {
    PlacementTableRepository::builtin().unwrap()
}

// ── PlacementKey ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod key {
    use super::*;

    #[test]
    fn bare_family_without_signals() {
        let m = motion(
            MotionFamily::Dash,
            CompassLocation::N,
            CompassLocation::S,
            RotationDirection::NoRotation,
            Turns::ZERO,
            Color::Blue,
        );
        let key = PlacementKey::resolve(&m, &PictographContext::new(None, GridTopology::Diamond));
        assert_eq!(key.preferred(), "dash");
        assert_eq!(key.fallback_chain(), vec!["dash"]);
    }

    #[test]
    fn dash_suffixed_letter_drops_hyphen() {
        let m = motion(
            MotionFamily::Dash,
            CompassLocation::N,
            CompassLocation::S,
            RotationDirection::NoRotation,
            Turns::ZERO,
            Color::Blue,
        );
        let ctx = PictographContext::new(Some(Letter::WDash), GridTopology::Diamond);
        let key = PlacementKey::resolve(&m, &ctx);
        assert_eq!(key.letter_suffix().as_deref(), Some("_W_dash"));
        assert_eq!(key.preferred(), "dash_W_dash");
        assert_eq!(key.fallback_chain(), vec!["dash_W_dash", "dash"]);
    }

    #[test]
    fn greek_dash_letters_truncate_by_char() {
        let mut key = PlacementKey::bare(MotionFamily::Dash);
        key.letter = Some(Letter::PhiDash);
        assert_eq!(key.letter_suffix().as_deref(), Some("_Φ_dash"));
        key.letter = Some(Letter::SigmaDash);
        assert_eq!(key.letter_suffix().as_deref(), Some("_Σ_dash"));
        // Type 4 keeps the glyph as is.
        key.letter = Some(Letter::Psi);
        assert_eq!(key.letter_suffix().as_deref(), Some("_Ψ"));
    }

    #[test]
    fn layered_key_and_chain() {
        let red = pro_cw(Turns::ZERO);
        let blue = ending(red.clone(), Orientation::RadialOut);
        let ctx = PictographContext::from_motions(Some(Letter::A), GridTopology::Diamond, Some(&red), Some(&blue));

        let key = PlacementKey::resolve(&red, &ctx);
        assert_eq!(key.to_string(), "pro_to_layer1_alpha_A");
        assert_eq!(
            key.fallback_chain(),
            vec!["pro_to_layer1_alpha_A", "pro_to_layer1_alpha", "pro"]
        );
    }

    #[test]
    fn hybrid_layer_tags_by_own_end_orientation() {
        let red = ending(pro_cw(Turns::ZERO), Orientation::RadialIn);
        let mut blue = ending(pro_cw(Turns::ZERO), Orientation::NonRadialClockwise);
        blue.family = MotionFamily::Anti;
        blue.color = Color::Blue;
        let ctx = PictographContext::from_motions(Some(Letter::M), GridTopology::Diamond, Some(&red), Some(&blue));

        assert!(ctx.is_hybrid());
        assert_eq!(PlacementKey::resolve(&red, &ctx).preferred(), "pro_to_radial_layer3_gamma_M");
        assert_eq!(PlacementKey::resolve(&blue, &ctx).preferred(), "anti_to_nonradial_layer3_gamma_M");
    }

    #[test]
    fn non_hybrid_has_no_orientation_tag() {
        let red = ending(pro_cw(Turns::ZERO), Orientation::NonRadialCounter);
        let blue = ending(pro_cw(Turns::ZERO), Orientation::NonRadialClockwise);
        let ctx = PictographContext::from_motions(Some(Letter::G), GridTopology::Box, Some(&red), Some(&blue));
        assert_eq!(PlacementKey::resolve(&red, &ctx).preferred(), "pro_to_layer2_beta_G");
    }
}

// ── Default lookup ────────────────────────────────────────────────────────────

#[cfg(test)]
mod lookup {
    use super::*;
    use crate::default_adjustment;

    fn layered_key() -> PlacementKey {
        let red = pro_cw(Turns::ZERO);
        let ctx = PictographContext::from_motions(Some(Letter::A), GridTopology::Diamond, Some(&red), Some(&red));
        PlacementKey::resolve(&red, &ctx)
    }

    #[test]
    fn each_tier_is_reachable() {
        let repo = builtin();
        let key = layered_key();
        let lookup = |turns| default_adjustment(&repo, GridTopology::Diamond, &key, turns);

        assert_eq!(lookup(Turns::ZERO), v(-20.0, 30.0));     // pro_to_layer1_alpha_A
        assert_eq!(lookup(Turns::TWO), v(-15.0, 35.0));      // pro_to_layer1_alpha
        assert_eq!(lookup(Turns::ONE_HALF), v(-5.0, 45.0));  // pro
    }

    #[test]
    fn missing_turns_do_not_interpolate() {
        let table = PlacementTable::new()
            .with("pro", Turns::ONE, (1.0, 1.0))
            .with("pro", Turns::TWO, (2.0, 2.0))
            .with("pro_to_layer1_alpha", Turns::ONE, (3.0, 3.0))
            .with("pro_to_layer1_alpha_A", Turns::TWO, (4.0, 4.0));
        let repo = PlacementTableRepository::empty()
            .with_table(GridTopology::Diamond, MotionFamily::Pro, table);

        let got = default_adjustment(&repo, GridTopology::Diamond, &layered_key(), Turns::ONE_HALF);
        assert!(got.bit_eq(AdjustmentVector::ZERO));
    }

    #[test]
    fn float_token_matches_only_float_entries() {
        let table = PlacementTable::new().with("float", Turns::ZERO, (9.0, 9.0));
        let repo = PlacementTableRepository::empty()
            .with_table(GridTopology::Diamond, MotionFamily::Float, table);
        let key = PlacementKey::bare(MotionFamily::Float);

        assert_eq!(default_adjustment(&repo, GridTopology::Diamond, &key, Turns::FLOAT), AdjustmentVector::ZERO);
        assert_eq!(
            default_adjustment(&builtin(), GridTopology::Diamond, &key, Turns::FLOAT),
            v(-15.0, 30.0)
        );
    }

    #[test]
    fn tables_are_per_topology() {
        let key = PlacementKey::bare(MotionFamily::Static);
        let repo = builtin();
        assert_eq!(default_adjustment(&repo, GridTopology::Diamond, &key, Turns::ZERO), v(35.0, -35.0));
        assert_eq!(default_adjustment(&repo, GridTopology::Box, &key, Turns::ZERO), v(50.0, 0.0));
    }

    #[test]
    fn empty_source_totality() {
        let repo = PlacementTableRepository::empty();
        for &family in MotionFamily::ALL {
            for &topology in GridTopology::ALL {
                let got = default_adjustment(&repo, topology, &PlacementKey::bare(family), Turns::THREE);
                assert!(got.bit_eq(AdjustmentVector::ZERO), "{topology}/{family}");
            }
        }
    }
}

// ── Directional tuples ────────────────────────────────────────────────────────

#[cfg(test)]
mod tuples {
    use super::*;
    use crate::tuples::{dash, dual_dash_zero_turns, is_dual_dash_zero_turns, shift, static_tuple};

    const X: f64 = 3.0;
    const Y: f64 = 7.0;

    fn base() -> AdjustmentVector {
        v(X, Y)
    }

    fn float(start: CompassLocation, end: CompassLocation) -> Motion {
        motion(MotionFamily::Float, start, end, RotationDirection::NoRotation, Turns::FLOAT, Color::Red)
    }

    fn dash_motion(rotation: RotationDirection) -> Motion {
        use ap_core::CompassLocation::{N, S};
        motion(MotionFamily::Dash, N, S, rotation, Turns::ZERO, Color::Blue)
    }

    #[test]
    fn diamond_pro_clockwise_rotates_quarter_turns() {
        let got = shift(base(), GridTopology::Diamond, &pro_cw(Turns::ZERO)).unwrap();
        assert_eq!(got, [v(X, Y), v(-Y, X), v(-X, -Y), v(Y, -X)]);
    }

    #[test]
    fn diamond_anti_mirrors_pro() {
        let mut m = pro_cw(Turns::ZERO);
        m.family = MotionFamily::Anti;
        let anti_cw = shift(base(), GridTopology::Diamond, &m).unwrap();
        m.family = MotionFamily::Pro;
        m.rotation_direction = RotationDirection::CounterClockwise;
        let pro_ccw = shift(base(), GridTopology::Diamond, &m).unwrap();
        assert_eq!(anti_cw, pro_ccw);
        assert_eq!(anti_cw, [v(-Y, -X), v(X, -Y), v(Y, X), v(-X, Y)]);
    }

    #[test]
    fn box_pro_and_anti_share_patterns() {
        let mut m = pro_cw(Turns::ZERO);
        let pro = shift(base(), GridTopology::Box, &m).unwrap();
        m.family = MotionFamily::Anti;
        let anti = shift(base(), GridTopology::Box, &m).unwrap();
        assert_eq!(pro, anti);
        assert_eq!(pro, [v(-X, Y), v(-Y, -X), v(X, -Y), v(Y, X)]);
    }

    #[test]
    fn shift_without_rotation_has_no_tuple() {
        let mut m = pro_cw(Turns::ZERO);
        m.rotation_direction = RotationDirection::NoRotation;
        assert_eq!(shift(base(), GridTopology::Diamond, &m), None);
        assert_eq!(shift(base(), GridTopology::Box, &m), None);
    }

    #[test]
    fn diamond_float_follows_handpath() {
        use ap_core::CompassLocation::{E, N, S};
        let cw = shift(base(), GridTopology::Diamond, &float(N, E)).unwrap();
        let ccw = shift(base(), GridTopology::Diamond, &float(E, N)).unwrap();
        assert_eq!(cw, [v(X, Y), v(-Y, X), v(-X, -Y), v(Y, -X)]);
        assert_eq!(ccw, [v(-Y, -X), v(X, -Y), v(Y, X), v(-X, Y)]);
        assert_eq!(shift(base(), GridTopology::Diamond, &float(N, S)), None);
    }

    /// Known quirk: the box grid uses one pattern for both handpaths.
    #[test]
    fn box_float_branches_are_identical() {
        use ap_core::CompassLocation::{NE, SE};
        let cw = shift(base(), GridTopology::Box, &float(NE, SE)).unwrap();
        let ccw = shift(base(), GridTopology::Box, &float(SE, NE)).unwrap();
        assert_eq!(cw, ccw);
        assert_eq!(cw, [v(-Y, -X), v(X, -Y), v(Y, X), v(-X, Y)]);
    }

    #[test]
    fn dash_rotation_patterns() {
        let cw = dash_motion(RotationDirection::Clockwise);
        let ccw = dash_motion(RotationDirection::CounterClockwise);
        assert_eq!(dash(base(), GridTopology::Diamond, &cw, None).unwrap(), [v(X, -Y), v(Y, X), v(-X, Y), v(-Y, -X)]);
        assert_eq!(dash(base(), GridTopology::Diamond, &ccw, None).unwrap(), [v(-X, -Y), v(Y, -X), v(X, Y), v(-Y, X)]);
        assert_eq!(dash(base(), GridTopology::Box, &cw, None).unwrap(), [v(-Y, X), v(-X, -Y), v(Y, -X), v(X, Y)]);
        assert_eq!(dash(base(), GridTopology::Box, &ccw, None).unwrap(), [v(-X, Y), v(-Y, -X), v(X, -Y), v(Y, X)]);
    }

    #[test]
    fn unrotated_dash_follows_paired_pro() {
        let m = dash_motion(RotationDirection::NoRotation);
        let default = [v(X, -Y), v(Y, X), v(-X, Y), v(-Y, -X)];

        let mut paired = pro_cw(Turns::ONE);
        assert_eq!(
            dash(base(), GridTopology::Diamond, &m, Some(&paired)).unwrap(),
            [v(X, Y), v(-Y, X), v(-X, -Y), v(Y, -X)]
        );

        paired.rotation_direction = RotationDirection::CounterClockwise;
        assert_eq!(
            dash(base(), GridTopology::Box, &m, Some(&paired)).unwrap(),
            [v(-X, Y), v(-Y, -X), v(X, -Y), v(Y, X)]
        );

        paired.family = MotionFamily::Anti;
        assert_eq!(dash(base(), GridTopology::Diamond, &m, Some(&paired)).unwrap(), default);
        assert_eq!(dash(base(), GridTopology::Box, &m, None).unwrap(), default);
    }

    #[test]
    fn dual_dash_overrides_are_keyed_by_path() {
        use ap_core::CompassLocation::{N, NE, S, SW};
        let blue_ns = motion(MotionFamily::Dash, N, S, RotationDirection::NoRotation, Turns::ZERO, Color::Blue);
        let red_nesw = motion(MotionFamily::Dash, NE, SW, RotationDirection::NoRotation, Turns::ZERO, Color::Red);

        assert!(!is_dual_dash_zero_turns(&blue_ns));
        assert_eq!(
            dual_dash_zero_turns(base(), GridTopology::Diamond, &blue_ns),
            Some([v(X, Y), v(-Y, X), v(-X, -Y), v(Y, -X)])
        );
        assert_eq!(
            dual_dash_zero_turns(base(), GridTopology::Box, &red_nesw),
            Some([v(X, Y), v(Y, X), v(-X, -Y), v(Y, X)])
        );
        assert_eq!(dual_dash_zero_turns(base(), GridTopology::Box, &blue_ns), None);
    }

    #[test]
    fn static_matches_dash_default_on_both_grids() {
        let expected = [v(X, -Y), v(Y, X), v(-X, Y), v(-Y, -X)];
        assert_eq!(static_tuple(base(), GridTopology::Diamond), expected);
        assert_eq!(static_tuple(base(), GridTopology::Box), expected);
    }
}

// ── Quadrant index ────────────────────────────────────────────────────────────

#[cfg(test)]
mod quadrant {
    use super::*;
    use crate::quadrant::resolve;
    use ap_core::CompassLocation::*;

    #[test]
    fn always_in_range() {
        for &topology in GridTopology::ALL {
            for &family in MotionFamily::ALL {
                for &location in CompassLocation::ALL {
                    assert!(resolve(topology, family, location) <= 3);
                }
            }
        }
    }

    #[test]
    fn static_north_diamond_and_box() {
        assert_eq!(resolve(GridTopology::Diamond, MotionFamily::Static, N), 0);
        // N is not in the box static map; falls back to 0.
        assert_eq!(resolve(GridTopology::Box, MotionFamily::Static, N), 0);
        assert_eq!(resolve(GridTopology::Box, MotionFamily::Static, NW), 3);
    }

    #[test]
    fn shift_maps() {
        let diamond: Vec<_> = [NE, SE, SW, NW].iter().map(|&l| resolve(GridTopology::Diamond, MotionFamily::Pro, l)).collect();
        let boxed: Vec<_> = [N, E, S, W].iter().map(|&l| resolve(GridTopology::Box, MotionFamily::Float, l)).collect();
        assert_eq!(diamond, vec![0, 1, 2, 3]);
        assert_eq!(boxed, vec![0, 1, 2, 3]);
        assert_eq!(resolve(GridTopology::Diamond, MotionFamily::Anti, W), 0);
    }

    #[test]
    fn dash_maps() {
        let diamond: Vec<_> = [N, E, S, W].iter().map(|&l| resolve(GridTopology::Diamond, MotionFamily::Dash, l)).collect();
        let boxed: Vec<_> = [NE, SE, SW, NW].iter().map(|&l| resolve(GridTopology::Box, MotionFamily::Dash, l)).collect();
        assert_eq!(diamond, vec![0, 1, 2, 3]);
        assert_eq!(boxed, vec![0, 1, 2, 3]);
        assert_eq!(resolve(GridTopology::Diamond, MotionFamily::Dash, SW), 0);
    }
}

// ── Calculator ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod calculator {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn alpha_context<'a>(red: &'a Motion, blue: &'a Motion) -> PictographContext<'a> {
        PictographContext::from_motions(Some(Letter::A), GridTopology::Diamond, Some(red), Some(blue))
    }

    #[test]
    fn no_letter_is_zero() {
        let repo = builtin();
        let calc = ArrowAdjustmentCalculator::new(&repo);
        let red = pro_cw(Turns::ZERO);
        let ctx = PictographContext::from_motions(None, GridTopology::Diamond, Some(&red), Some(&red));

        for &location in CompassLocation::ALL {
            let arrow = Arrow::for_motion(&red, location);
            assert!(calc.get_adjustment(&arrow, &red, &ctx).bit_eq(AdjustmentVector::ZERO));
        }
    }

    #[test]
    fn full_path_through_bundled_tables() {
        let repo = builtin();
        let calc = ArrowAdjustmentCalculator::new(&repo);
        let red = pro_cw(Turns::ZERO);
        let blue = ending(red.clone(), Orientation::RadialOut);
        let ctx = alpha_context(&red, &blue);

        // pro_to_layer1_alpha_A @ 0 = (-20, 30); SE selects (-y, x).
        let arrow = Arrow::for_motion(&red, CompassLocation::SE);
        assert_eq!(calc.get_adjustment(&arrow, &red, &ctx), v(-30.0, -20.0));
    }

    #[test]
    fn quadrant_comes_from_arrow_location() {
        let repo = builtin();
        let calc = ArrowAdjustmentCalculator::new(&repo);
        let red = pro_cw(Turns::ZERO);
        let ctx = alpha_context(&red, &red);

        let ne = calc.get_adjustment(&Arrow::for_motion(&red, CompassLocation::NE), &red, &ctx);
        let sw = calc.get_adjustment(&Arrow::for_motion(&red, CompassLocation::SW), &red, &ctx);
        assert_eq!(ne, v(-20.0, 30.0));
        assert_eq!(sw, v(20.0, -30.0));
    }

    #[test]
    fn missing_tuple_returns_base() {
        let repo = builtin();
        let calc = ArrowAdjustmentCalculator::new(&repo);
        let mut red = pro_cw(Turns::ZERO);
        red.rotation_direction = RotationDirection::NoRotation;
        let ctx = alpha_context(&red, &red);

        for &location in CompassLocation::ALL {
            let arrow = Arrow::for_motion(&red, location);
            assert_eq!(calc.get_adjustment(&arrow, &red, &ctx), v(-20.0, 30.0));
        }
    }

    #[test]
    fn dash_letter_key_on_bundled_tables() {
        let repo = builtin();
        let calc = ArrowAdjustmentCalculator::new(&repo);
        let blue = motion(
            MotionFamily::Dash,
            CompassLocation::N,
            CompassLocation::S,
            RotationDirection::NoRotation,
            Turns::ZERO,
            Color::Blue,
        );
        let ctx = PictographContext::new(Some(Letter::WDash), GridTopology::Diamond);

        // dash_W_dash @ 0 = (20, -40); default pattern, N selects (x, -y).
        let arrow = Arrow::for_motion(&blue, CompassLocation::N);
        assert_eq!(calc.get_adjustment(&arrow, &blue, &ctx), v(20.0, 40.0));
    }

    #[test]
    fn box_float_quirk_end_to_end() {
        use ap_core::CompassLocation::{NE, SE};
        let repo = builtin();
        let calc = ArrowAdjustmentCalculator::new(&repo);
        let cw = motion(MotionFamily::Float, NE, SE, RotationDirection::NoRotation, Turns::FLOAT, Color::Red);
        let ccw = motion(MotionFamily::Float, SE, NE, RotationDirection::NoRotation, Turns::FLOAT, Color::Red);
        let ctx = PictographContext::new(Some(Letter::Sigma), GridTopology::Box);

        for &location in CompassLocation::ALL {
            assert_eq!(
                calc.get_adjustment(&Arrow::for_motion(&cw, location), &cw, &ctx),
                calc.get_adjustment(&Arrow::for_motion(&ccw, location), &ccw, &ctx),
            );
        }
    }

    #[test]
    fn empty_source_yields_zero() {
        let repo = PlacementTableRepository::empty();
        let calc = ArrowAdjustmentCalculator::new(repo);
        let red = pro_cw(Turns::ONE);
        let ctx = alpha_context(&red, &red);
        let arrow = Arrow::for_motion(&red, CompassLocation::NW);
        assert_eq!(calc.get_adjustment(&arrow, &red, &ctx), AdjustmentVector::ZERO);
    }

    fn pick<T: Copy>(rng: &mut SmallRng, all: &[T]) -> T {
        all[rng.gen_range(0..all.len())]
    }

    fn random_motion(rng: &mut SmallRng, color: Color) -> Motion {
        let family = pick(rng, MotionFamily::ALL);
        let turns = if family == MotionFamily::Float {
            Turns::FLOAT
        } else {
            Turns::from_half_turns(rng.gen_range(0..=Turns::MAX_HALF_TURNS)).unwrap()
        };
        Motion {
            family,
            start_loc:          pick(rng, CompassLocation::ALL),
            end_loc:            pick(rng, CompassLocation::ALL),
            start_orientation:  pick(rng, Orientation::ALL),
            end_orientation:    pick(rng, Orientation::ALL),
            rotation_direction: pick(rng, RotationDirection::ALL),
            turns,
            color,
        }
    }

    /// Random sweep: results are finite and bit-identical across calls.
    #[test]
    fn deterministic_and_total() {
        let repo = builtin();
        let calc = ArrowAdjustmentCalculator::new(&repo);
        let mut rng = SmallRng::seed_from_u64(0x5EED);

        for _ in 0..2_000 {
            let red = random_motion(&mut rng, Color::Red);
            let blue = random_motion(&mut rng, Color::Blue);
            let letter = if rng.gen_bool(0.9) { Some(pick(&mut rng, Letter::ALL)) } else { None };
            let topology = pick(&mut rng, GridTopology::ALL);
            let ctx = PictographContext::from_motions(letter, topology, Some(&red), Some(&blue));
            let arrow = Arrow::for_motion(&red, pick(&mut rng, CompassLocation::ALL));

            let first = calc.get_adjustment(&arrow, &red, &ctx);
            let second = calc.get_adjustment(&arrow, &red, &ctx);
            assert!(first.x.is_finite() && first.y.is_finite());
            assert!(first.bit_eq(second), "{first} vs {second}");
            if letter.is_none() {
                assert!(first.bit_eq(AdjustmentVector::ZERO));
            }
        }
    }
}

// ── Batch ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod batch {
    use super::*;
    use crate::{resolve_batch, BatchJob};

    #[test]
    fn batch_matches_single_calls_in_order() {
        let repo = builtin();
        let calc = ArrowAdjustmentCalculator::new(&repo);
        let red = pro_cw(Turns::ZERO);
        let blue = motion(
            MotionFamily::Static,
            CompassLocation::S,
            CompassLocation::S,
            RotationDirection::NoRotation,
            Turns::ONE,
            Color::Blue,
        );
        let ctx = PictographContext::from_motions(Some(Letter::B), GridTopology::Diamond, Some(&red), Some(&blue));

        let jobs: Vec<BatchJob<'_>> = CompassLocation::ALL
            .iter()
            .flat_map(|&location| {
                [
                    BatchJob::new(Arrow::for_motion(&red, location), &red, ctx),
                    BatchJob::new(Arrow::for_motion(&blue, location), &blue, ctx),
                ]
            })
            .collect();

        let batch = resolve_batch(&calc, &jobs);
        assert_eq!(batch.len(), jobs.len());
        for (job, got) in jobs.iter().zip(&batch) {
            let single = calc.get_adjustment(&job.arrow, job.motion, &job.context);
            assert!(got.bit_eq(single));
        }
    }

    #[test]
    fn empty_batch() {
        let calc = ArrowAdjustmentCalculator::new(PlacementTableRepository::empty());
        assert!(resolve_batch(&calc, &[]).is_empty());
    }
}
