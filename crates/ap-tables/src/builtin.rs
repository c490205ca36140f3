//! The table set bundled with the crate.
//!
//! The JSON assets under `data/` are compiled into the binary, so an
//! application can resolve placements without shipping a table directory.

use std::io::Cursor;

use ap_core::{GridTopology, MotionFamily};

use crate::loader::load_table_json_reader;
use crate::{PlacementTableRepository, TableResult};

/// (topology, family, JSON source) for every bundled table.
const BUNDLED: [(GridTopology, MotionFamily, &str); 10] = [
    (GridTopology::Diamond, MotionFamily::Pro,    include_str!("../data/diamond/default_diamond_pro_placements.json")),
    (GridTopology::Diamond, MotionFamily::Anti,   include_str!("../data/diamond/default_diamond_anti_placements.json")),
    (GridTopology::Diamond, MotionFamily::Float,  include_str!("../data/diamond/default_diamond_float_placements.json")),
    (GridTopology::Diamond, MotionFamily::Dash,   include_str!("../data/diamond/default_diamond_dash_placements.json")),
    (GridTopology::Diamond, MotionFamily::Static, include_str!("../data/diamond/default_diamond_static_placements.json")),
    (GridTopology::Box,     MotionFamily::Pro,    include_str!("../data/box/default_box_pro_placements.json")),
    (GridTopology::Box,     MotionFamily::Anti,   include_str!("../data/box/default_box_anti_placements.json")),
    (GridTopology::Box,     MotionFamily::Float,  include_str!("../data/box/default_box_float_placements.json")),
    (GridTopology::Box,     MotionFamily::Dash,   include_str!("../data/box/default_box_dash_placements.json")),
    (GridTopology::Box,     MotionFamily::Static, include_str!("../data/box/default_box_static_placements.json")),
];

impl PlacementTableRepository {
    /// Parse the bundled tables.
    ///
    /// Only fails if an asset is malformed, which the crate's tests rule
    /// out; callers may still propagate the error rather than unwrap.
    pub fn builtin() -> TableResult<Self> {
        BUNDLED
            .iter()
            .try_fold(PlacementTableRepository::empty(), |repo, &(topology, family, json)| {
                let table = load_table_json_reader(Cursor::new(json))?;
                Ok(repo.with_table(topology, family, table))
            })
    }
}
