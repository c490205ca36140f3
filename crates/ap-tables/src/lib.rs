//! `ap-tables` — default arrow-placement tables.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`table`]      | `PlacementTable` (key → turns → vector), `TurnsRow`          |
//! | [`repository`] | `PlacementTableRepository` (10 tables), `TableSource` trait  |
//! | [`loader`]     | JSON/CSV file and reader loaders, `load_dir`, `from_config`  |
//! | [`builtin`]    | `PlacementTableRepository::builtin()` — compiled-in tables   |
//! | [`error`]      | `TableError`, `TableResult<T>`                               |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                  |
//! |-----------|---------------------------------------------------------|
//! | `fx-hash` | Uses `FxHashMap` for placement-key maps.                |

pub mod builtin;
pub mod error;
pub mod loader;
pub mod repository;
pub mod table;


pub use error::{TableError, TableResult};
pub use loader::{
    load_table_csv, load_table_csv_reader, load_table_json, load_table_json_reader,
    table_file_name, table_path,
};
pub use repository::{PlacementTableRepository, TableSource};
pub use table::{PlacementTable, TurnsRow};
