//! JSON and CSV table loaders, single-file and whole-directory.
//!
//! # JSON format
//!
//! The format the tables are authored in.  One object per placement key,
//! each mapping a turns token to an `[x, y]` pair:
//!
//! ```json
//! {
//!   "pro":                   {"0": [-10, 40], "0.5": [-5, 45]},
//!   "pro_to_layer1_alpha_A": {"0": [-20, 30]}
//! }
//! ```
//!
//! # CSV format
//!
//! One row per entry.  Equivalent content produces an identical table.
//!
//! ```csv
//! key,turns,x,y
//! pro,0,-10,40
//! pro,0.5,-5,45
//! pro_to_layer1_alpha_A,0,-20,30
//! ```
//!
//! Turns tokens accept any numeric spelling of a legal value (`1`, `1.0`)
//! plus `fl`; they are normalized on load so lookups compare exactly.
//!
//! # Directory layout
//!
//! ```text
//! <root>/diamond/default_diamond_pro_placements.json
//! <root>/diamond/default_diamond_anti_placements.json
//! …
//! <root>/box/default_box_static_placements.json
//! ```
//!
//! A missing file is logged and yields an empty table, so a partial table
//! set still serves lookups (falling through to the zero vector).  A file
//! that exists but does not parse is a hard error.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, warn};

use ap_core::{AdjustmentVector, EngineConfig, GridTopology, MotionFamily, TableFormat, Turns};

use crate::{PlacementTable, PlacementTableRepository, TableError, TableResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PlacementRecord {
    key:   String,
    turns: String,
    x:     f64,
    y:     f64,
}

// ── Single-table loaders ──────────────────────────────────────────────────────

/// Load one table from a JSON file.
pub fn load_table_json(path: &Path) -> TableResult<PlacementTable> {
    let file = std::fs::File::open(path).map_err(|e| TableError::Io(e).in_file(path))?;
    load_table_json_reader(file).map_err(|e| e.in_file(path))
}

/// Like [`load_table_json`] but accepts any `Read` source.
pub fn load_table_json_reader<R: Read>(reader: R) -> TableResult<PlacementTable> {
    let raw: BTreeMap<String, BTreeMap<String, [f64; 2]>> = serde_json::from_reader(reader)?;
    let mut table = PlacementTable::new();

    for (key, row) in raw {
        for (turns, xy) in row {
            let turns = parse_turns(&key, &turns)?;
            table.insert(key.as_str(), turns, checked_vector(&key, xy)?);
        }
    }
    Ok(table)
}

/// Load one table from a CSV file.
pub fn load_table_csv(path: &Path) -> TableResult<PlacementTable> {
    let file = std::fs::File::open(path).map_err(|e| TableError::Io(e).in_file(path))?;
    load_table_csv_reader(file).map_err(|e| e.in_file(path))
}

/// Like [`load_table_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedding tables in a
/// binary.
pub fn load_table_csv_reader<R: Read>(reader: R) -> TableResult<PlacementTable> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut table = PlacementTable::new();

    for result in csv_reader.deserialize::<PlacementRecord>() {
        let row = result?;
        let turns = parse_turns(&row.key, &row.turns)?;
        let vector = checked_vector(&row.key, [row.x, row.y])?;
        table.insert(row.key, turns, vector);
    }
    Ok(table)
}

// ── Directory loader ──────────────────────────────────────────────────────────

/// File name of the table for (`topology`, `family`) in `format`.
pub fn table_file_name(topology: GridTopology, family: MotionFamily, format: TableFormat) -> String {
    format!("default_{topology}_{family}_placements.{}", format.extension())
}

/// Path of the table for (`topology`, `family`) under `root`.
pub fn table_path(
    root:     &Path,
    topology: GridTopology,
    family:   MotionFamily,
    format:   TableFormat,
) -> PathBuf {
    root.join(topology.as_str())
        .join(table_file_name(topology, family, format))
}

impl PlacementTableRepository {
    /// Load all ten tables from a directory laid out as described in the
    /// [module docs][crate::loader].
    pub fn load_dir(root: &Path, format: TableFormat) -> TableResult<Self> {
        let mut repo = PlacementTableRepository::empty();

        for &topology in GridTopology::ALL {
            for &family in MotionFamily::ALL {
                let path = table_path(root, topology, family, format);
                if !path.is_file() {
                    warn!(path = %path.display(), %topology, %family, "placement table missing; using empty table");
                    continue;
                }
                let table = match format {
                    TableFormat::Json => load_table_json(&path)?,
                    TableFormat::Csv  => load_table_csv(&path)?,
                };
                debug!(path = %path.display(), keys = table.len(), "loaded placement table");
                repo = repo.with_table(topology, family, table);
            }
        }

        info!(
            root = %root.display(),
            %format,
            tables = repo.loaded_table_count(),
            entries = repo.entry_count(),
            "placement tables loaded"
        );
        Ok(repo)
    }

    /// Build the repository `config` asks for: a table directory if one is
    /// set, otherwise the bundled tables.
    pub fn from_config(config: &EngineConfig) -> TableResult<Self> {
        match &config.tables_dir {
            Some(dir) => Self::load_dir(dir, config.table_format),
            None      => Self::builtin(),
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_turns(key: &str, turns: &str) -> TableResult<Turns> {
    turns.parse::<Turns>().map_err(|source| TableError::Turns {
        key:   key.to_owned(),
        turns: turns.to_owned(),
        source,
    })
}

fn checked_vector(key: &str, [x, y]: [f64; 2]) -> TableResult<AdjustmentVector> {
    if x.is_finite() && y.is_finite() {
        Ok(AdjustmentVector::new(x, y))
    } else {
        Err(TableError::Parse(format!(
            "non-finite adjustment ({x}, {y}) under placement key {key:?}"
        )))
    }
}
