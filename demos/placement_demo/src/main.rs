//! placement_demo — resolves arrow offsets for a handful of pictographs.
//!
//! Usage: `placement_demo [config.json]`
//!
//! The optional config is an `EngineConfig` in JSON, e.g.
//! `{"tables_dir": "tables", "table_format": "csv", "num_threads": 2}`.
//! Without one the bundled tables are used.  Set `RUST_LOG=debug` to see
//! which placement keys fall back.

use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use tracing::info;

use ap_core::{Arrow, Color, EngineConfig, GridTopology, Letter, Motion};
use ap_placement::{resolve_batch, ArrowAdjustmentCalculator, BatchJob, PictographContext};
use ap_tables::PlacementTableRepository;

// ── Sample pictographs ────────────────────────────────────────────────────────

/// One motion as collaborators hand it over: plain tokens.
struct MotionTokens {
    family:   &'static str,
    start:    &'static str,
    end:      &'static str,
    rotation: &'static str,
    turns:    &'static str,
    end_ori:  &'static str,
    /// Where the arrow is anchored (computed upstream).
    arrow_at: &'static str,
}

struct Sample {
    letter: &'static str,
    /// Empty means "grid mode not set"; the configured default applies.
    grid:   &'static str,
    red:    MotionTokens,
    blue:   MotionTokens,
}

const SAMPLES: &[Sample] = &[
    Sample {
        letter: "A",
        grid:   "diamond",
        red:  MotionTokens { family: "pro", start: "n", end: "e", rotation: "cw", turns: "0", end_ori: "in", arrow_at: "ne" },
        blue: MotionTokens { family: "pro", start: "s", end: "w", rotation: "cw", turns: "0", end_ori: "in", arrow_at: "sw" },
    },
    Sample {
        letter: "W-",
        grid:   "diamond",
        red:  MotionTokens { family: "pro",  start: "e", end: "s", rotation: "cw",     turns: "1", end_ori: "out", arrow_at: "se" },
        blue: MotionTokens { family: "dash", start: "n", end: "s", rotation: "no_rot", turns: "0", end_ori: "in",  arrow_at: "n" },
    },
    Sample {
        letter: "Φ",
        grid:   "box",
        red:  MotionTokens { family: "dash",   start: "ne", end: "sw", rotation: "cw",     turns: "0", end_ori: "in", arrow_at: "ne" },
        blue: MotionTokens { family: "static", start: "se", end: "se", rotation: "no_rot", turns: "0", end_ori: "in", arrow_at: "se" },
    },
    Sample {
        letter: "Σ",
        grid:   "box",
        red:  MotionTokens { family: "float", start: "ne", end: "se", rotation: "no_rot", turns: "fl", end_ori: "clock", arrow_at: "e" },
        blue: MotionTokens { family: "anti",  start: "sw", end: "nw", rotation: "ccw",    turns: "1",  end_ori: "in",    arrow_at: "w" },
    },
    Sample {
        letter: "Γ",
        grid:   "",
        red:  MotionTokens { family: "static", start: "n", end: "n", rotation: "no_rot", turns: "0", end_ori: "in", arrow_at: "n" },
        blue: MotionTokens { family: "static", start: "e", end: "e", rotation: "no_rot", turns: "0", end_ori: "in", arrow_at: "e" },
    },
];

fn parse_motion(tokens: &MotionTokens, color: Color) -> Result<(Motion, Arrow)> {
    let motion = Motion {
        family:             tokens.family.parse()?,
        start_loc:          tokens.start.parse()?,
        end_loc:            tokens.end.parse()?,
        start_orientation:  tokens.end_ori.parse()?,
        end_orientation:    tokens.end_ori.parse()?,
        rotation_direction: tokens.rotation.parse()?,
        turns:              tokens.turns.parse()?,
        color,
    };
    let arrow = Arrow::for_motion(&motion, tokens.arrow_at.parse()?);
    Ok((motion, arrow))
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // 1. Configuration.
    let config: EngineConfig = match std::env::args().nth(1) {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("opening config {path}"))?;
            serde_json::from_reader(BufReader::new(file)).with_context(|| format!("parsing config {path}"))?
        }
        None => EngineConfig::default(),
    };
    config.validate()?;

    if let Some(n) = config.num_threads {
        rayon::ThreadPoolBuilder::new().num_threads(n).build_global()?;
    }

    // 2. Tables.
    let tables = PlacementTableRepository::from_config(&config)?;
    let source = if config.uses_table_dir() { "directory" } else { "bundled" };
    info!(
        source,
        tables = tables.loaded_table_count(),
        entries = tables.entry_count(),
        "placement tables ready"
    );

    // 3. Parse the samples.
    let mut parsed = Vec::with_capacity(SAMPLES.len());
    for sample in SAMPLES {
        let letter: Letter = sample.letter.parse()?;
        let topology = if sample.grid.is_empty() {
            config.default_topology
        } else {
            GridTopology::parse_or_default(sample.grid)
        };
        let red = parse_motion(&sample.red, Color::Red)?;
        let blue = parse_motion(&sample.blue, Color::Blue)?;
        parsed.push((letter, topology, red, blue));
    }

    // 4. Build one job per arrow and resolve them together.
    let mut jobs = Vec::with_capacity(parsed.len() * 2);
    for (letter, topology, (red, red_arrow), (blue, blue_arrow)) in &parsed {
        let ctx = PictographContext::from_motions(Some(*letter), *topology, Some(red), Some(blue));
        jobs.push(BatchJob::new(*red_arrow, red, ctx));
        jobs.push(BatchJob::new(*blue_arrow, blue, ctx));
    }

    let calculator = ArrowAdjustmentCalculator::new(&tables);
    let offsets = resolve_batch(&calculator, &jobs);

    // 5. Report.
    println!(
        "{:<7} {:<8} {:<5} {:<7} {:<6} {:<4} {:>16}",
        "Letter", "Grid", "Color", "Family", "Turns", "At", "Offset"
    );
    println!("{}", "-".repeat(59));
    for (job, offset) in jobs.iter().zip(&offsets) {
        println!(
            "{:<7} {:<8} {:<5} {:<7} {:<6} {:<4} {:>16}",
            job.context.letter.map(Letter::as_str).unwrap_or("-"),
            job.context.topology,
            job.arrow.color,
            job.motion.family,
            job.motion.turns,
            job.arrow.location,
            offset.to_string(),
        );
    }

    Ok(())
}
