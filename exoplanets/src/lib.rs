//! Retrieval and local caching of NASA Exoplanet Archive tables.
//!
//! A request names a table, the columns to pull (optionally renaming them) and
//! a filter. Missing columns/filter fall back to per-table defaults. When a
//! cache file is given the result is written there on first use and read back
//! verbatim on every later call with the same path.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use exoplanets::{ArchiveClient, DefaultParams, KeplerReader};
//!
//! let client = ArchiveClient::from_env().expect("Failed to build archive client");
//! let reader = KeplerReader::new(client, DefaultParams::builtin());
//! let stars = reader
//!     .read_or_fetch("q1_q17_dr25_stellar", None, None, Some(Path::new("data/stellar.csv")))
//!     .expect("Failed to read stellar table");
//! println!("{} stars", stars.num_rows());
//! ```

pub mod archive;
pub mod cache;
pub mod columns;
pub mod config;
pub mod defaults;
pub mod error;
pub mod reader;
pub mod table;

pub use archive::{fetch, ArchiveClient, CatalogSource};
pub use cache::{load, persist};
pub use columns::{rename, ColumnSpec};
pub use config::ArchiveConfig;
pub use defaults::{resolve_defaults, DefaultParams, TableDefaults};
pub use error::{Error, Result};
pub use reader::{read_or_fetch, KeplerReader};
pub use table::DataTable;
