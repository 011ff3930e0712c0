//! Cache-or-fetch entry point.

use std::path::Path;

use log::info;

use crate::archive::{fetch, CatalogSource};
use crate::cache;
use crate::columns::{rename, ColumnSpec};
use crate::defaults::DefaultParams;
use crate::error::Result;
use crate::table::DataTable;

/// Reads archive tables through an optional CSV cache.
///
/// Owns the catalog source and the defaults table it was built with.
#[derive(Debug, Clone)]
pub struct KeplerReader<S> {
    source: S,
    defaults: DefaultParams,
}

impl<S: CatalogSource> KeplerReader<S> {
    pub fn new(source: S, defaults: DefaultParams) -> Self {
        Self { source, defaults }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn defaults(&self) -> &DefaultParams {
        &self.defaults
    }

    /// See [`read_or_fetch`].
    pub fn read_or_fetch(
        &self,
        table: &str,
        columns: Option<ColumnSpec>,
        filter: Option<String>,
        filename: Option<&Path>,
    ) -> Result<DataTable> {
        read_or_fetch(
            &self.source,
            &self.defaults,
            table,
            columns,
            filter,
            filename,
        )
    }
}

/// Return `table` from the cache file when it exists, otherwise from the archive.
///
/// On a miss the missing columns/filter are taken from `defaults`, the result
/// is renamed per the column spec and, when `filename` is given, written there.
/// On a hit the file is returned as stored: no defaults, no rename, no query,
/// even if `columns` or `filter` differ from the request that produced it.
pub fn read_or_fetch<S: CatalogSource + ?Sized>(
    source: &S,
    defaults: &DefaultParams,
    table: &str,
    columns: Option<ColumnSpec>,
    filter: Option<String>,
    filename: Option<&Path>,
) -> Result<DataTable> {
    match filename {
        Some(path) if cache::is_cached(path) => {
            info!("Reading Kepler data from {}", path.display());
            cache::load(path)
        }
        _ => {
            info!("Reading Kepler data from table {}", table);
            let (columns, filter) = defaults.resolve(table, columns, filter);
            let data = fetch(source, table, columns.as_ref(), filter.as_deref())?;
            let data = match &columns {
                Some(columns) => rename(data, columns),
                None => data,
            };
            cache::persist(&data, filename)?;
            Ok(data)
        }
    }
}
