//! Engine configuration.

use std::path::PathBuf;

use crate::{ApError, ApResult, GridTopology};

token_enum! {
    /// On-disk format of a placement-table directory.
    pub enum TableFormat ("table format") {
        /// `{"<key>": {"<turns>": [x, y]}}`, the format the tables are authored in.
        Json => "json",
        /// `key,turns,x,y` rows.
        Csv  => "csv",
    }
}

impl Default for TableFormat {
    fn default() -> Self {
        TableFormat::Json
    }
}

impl TableFormat {
    /// File extension used by the directory loader.
    pub fn extension(self) -> &'static str {
        self.as_str()
    }
}

/// Top-level engine configuration.
///
/// Typically loaded from a JSON file by the application and used to build
/// the table repository once at start-up.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Root of a placement-table directory.  `None` uses the tables bundled
    /// with `ap-tables`.
    pub tables_dir: Option<PathBuf>,

    /// Format of the files under `tables_dir`.  Ignored for bundled tables.
    pub table_format: TableFormat,

    /// Topology assumed for pictographs whose grid mode is missing or
    /// unrecognized.
    pub default_topology: GridTopology,

    /// Worker thread count for batch resolution.  `None` uses all logical
    /// cores.
    pub num_threads: Option<usize>,
}

impl EngineConfig {
    /// `true` if tables come from disk rather than the bundled set.
    #[inline]
    pub fn uses_table_dir(&self) -> bool {
        self.tables_dir.is_some()
    }

    /// Reject settings no engine can run with.
    pub fn validate(&self) -> ApResult<()> {
        if self.num_threads == Some(0) {
            return Err(ApError::Config("num_threads must be at least 1".into()));
        }
        if let Some(dir) = &self.tables_dir {
            if dir.as_os_str().is_empty() {
                return Err(ApError::Config("tables_dir is empty".into()));
            }
        }
        Ok(())
    }
}
