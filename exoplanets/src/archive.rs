//! Remote table queries against the NASA Exoplanet Archive.
//!
//! [`CatalogSource`] is the seam between the cache logic and the network:
//! [`ArchiveClient`] talks to the archive over HTTP, tests substitute an
//! in-memory source.

use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use url::Url;

use crate::columns::ColumnSpec;
use crate::config::ArchiveConfig;
use crate::error::{Error, Result};
use crate::table::DataTable;

/// Something that can answer a single table query.
pub trait CatalogSource {
    /// Select `select` from `table`, filtered by `filter` when given.
    ///
    /// The filter is passed through untouched; it is never parsed locally.
    fn query(&self, table: &str, select: &[String], filter: Option<&str>) -> Result<DataTable>;
}

/// Blocking HTTP client for the archive's table API.
///
/// Results are requested as CSV and parsed into a [`DataTable`] without any
/// type coercion.
#[derive(Debug, Clone)]
pub struct ArchiveClient {
    config: ArchiveConfig,
    client: Client,
}

impl ArchiveClient {
    /// Build a client for `config`.
    ///
    /// Requests never time out: large tables can take minutes to come back.
    pub fn new(config: ArchiveConfig) -> Result<Self> {
        let client = Client::builder().timeout(None::<Duration>).build()?;
        Ok(Self { config, client })
    }

    /// Client for the endpoint named by `EXOPLANET_ARCHIVE_URL`, or the public archive.
    pub fn from_env() -> Result<Self> {
        Self::new(ArchiveConfig::from_env())
    }

    pub fn config(&self) -> &ArchiveConfig {
        &self.config
    }

    /// Full query URL for one request. An empty filter is left out.
    pub fn query_url(&self, table: &str, select: &[String], filter: Option<&str>) -> Result<Url> {
        let mut params = vec![("table", table.to_string()), ("select", select.join(","))];
        if let Some(filter) = filter.filter(|f| !f.is_empty()) {
            params.push(("where", filter.to_string()));
        }
        params.push(("format", "csv".to_string()));

        Ok(Url::parse_with_params(self.config.base_url(), &params)?)
    }
}

impl CatalogSource for ArchiveClient {
    fn query(&self, table: &str, select: &[String], filter: Option<&str>) -> Result<DataTable> {
        let url = self.query_url(table, select, filter)?;
        debug!("Querying archive: {}", url);

        let response = self.client.get(url).send()?;
        let status = response.status();
        let body = response.text()?;

        // The archive reports bad tables/columns/filters in a 200 body starting with ERROR
        if !status.is_success() || body.trim_start().starts_with("ERROR") {
            return Err(Error::Archive {
                status: status.as_u16(),
                message: body.trim().to_string(),
            });
        }

        DataTable::from_csv_reader(body.as_bytes())
    }
}

/// Issue one query for `columns` of `table`.
///
/// A rename mapping selects only its keys. With no columns at all every
/// column of the table is requested.
pub fn fetch<S: CatalogSource + ?Sized>(
    source: &S,
    table: &str,
    columns: Option<&ColumnSpec>,
    filter: Option<&str>,
) -> Result<DataTable> {
    let select = match columns {
        Some(columns) if !columns.is_empty() => columns.remote_names(),
        _ => vec!["*".to_string()],
    };
    source.query(table, &select, filter)
}
