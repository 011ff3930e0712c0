//! Per-table default columns and filters.
//!
//! When a request leaves out its columns or its filter, the defaults for the
//! requested table are used instead. Tables without an entry pass the request
//! through untouched; nothing here ever fails for an unknown table.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::columns::ColumnSpec;
use crate::error::Result;

/// Default column spec and filter for one archive table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TableDefaults {
    pub columns: ColumnSpec,
    /// Default filter; None means the table is queried unfiltered
    #[serde(rename = "where", default)]
    pub filter: Option<String>,
}

impl TableDefaults {
    pub fn new(columns: ColumnSpec, filter: Option<&str>) -> Self {
        Self {
            columns,
            filter: filter.map(str::to_string),
        }
    }
}

/// Read-only lookup from table name to its defaults.
///
/// Built once and handed to the reader; never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct DefaultParams {
    tables: HashMap<String, TableDefaults>,
}

impl DefaultParams {
    /// A table with no entries: every request passes through unchanged.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Defaults for the Kepler DR25 tables.
    pub fn builtin() -> Self {
        Self::empty()
            .with_table(
                "q1_q17_dr25_stellar",
                TableDefaults::new(
                    ColumnSpec::rename_map([
                        ("kepid", "Kepler ID"),
                        ("teff", "Effective Temperature"),
                        ("logg", "Surface Gravity"),
                        ("feh", "Metallicity"),
                        ("radius", "Stellar Radius"),
                        ("mass", "Stellar Mass"),
                        ("kepmag", "Kepler Magnitude"),
                    ]),
                    Some("st_quarters like '%1%'"),
                ),
            )
            .with_table(
                "q1_q17_dr25_koi",
                TableDefaults::new(
                    ColumnSpec::rename_map([
                        ("kepid", "Kepler ID"),
                        ("kepoi_name", "KOI Name"),
                        ("koi_disposition", "Disposition"),
                        ("koi_period", "Orbital Period"),
                        ("koi_prad", "Planet Radius"),
                    ]),
                    None,
                ),
            )
    }

    /// Add or replace the defaults for one table.
    pub fn with_table(mut self, table: &str, defaults: TableDefaults) -> Self {
        self.tables.insert(table.to_string(), defaults);
        self
    }

    /// Parse defaults from JSON of the form
    /// `{"table": {"columns": [...] | {...}, "where": "..." | null}}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load defaults from a JSON file (see [`DefaultParams::from_json_str`]).
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn get(&self, table: &str) -> Option<&TableDefaults> {
        self.tables.get(table)
    }

    /// Names of the tables that have defaults, sorted.
    pub fn tables(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Fill in whichever of `columns`/`filter` the caller left empty.
    ///
    /// Empty column specs and empty filter strings count as not given.
    pub fn resolve(
        &self,
        table: &str,
        columns: Option<ColumnSpec>,
        filter: Option<String>,
    ) -> (Option<ColumnSpec>, Option<String>) {
        let Some(defaults) = self.get(table) else {
            return (columns, filter);
        };

        let columns = match columns {
            Some(columns) if !columns.is_empty() => Some(columns),
            _ => Some(defaults.columns.clone()),
        };
        let filter = match filter {
            Some(filter) if !filter.is_empty() => Some(filter),
            _ => defaults.filter.clone(),
        };
        (columns, filter)
    }
}

/// Free-function form of [`DefaultParams::resolve`].
pub fn resolve_defaults(
    defaults: &DefaultParams,
    table: &str,
    columns: Option<ColumnSpec>,
    filter: Option<String>,
) -> (Option<ColumnSpec>, Option<String>) {
    defaults.resolve(table, columns, filter)
}
