//! Fetch a NASA Exoplanet Archive table, optionally through a CSV cache file
//!
//! Prints the resulting table as CSV on stdout. Set `RUST_LOG=info` to see
//! whether the data came from the cache or the archive.
//!
//! Usage:
//!   exoplanet_fetch q1_q17_dr25_stellar --output data/stellar.csv
//!   exoplanet_fetch q1_q17_dr25_koi --rename kepid=Kepler\ ID,koi_period=Period --limit 10
//!   exoplanet_fetch ps --columns pl_name,hostname --where "default_flag=1"

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use exoplanets::{ArchiveClient, ArchiveConfig, ColumnSpec, DefaultParams, KeplerReader};

#[derive(Parser, Debug)]
#[command(
    name = "exoplanet_fetch",
    about = "Fetch an archive table, reading from or writing to a CSV cache file",
    long_about = None
)]
struct Args {
    /// Archive table name (e.g. q1_q17_dr25_stellar)
    #[arg(required_unless_present = "list_defaults")]
    table: Option<String>,

    /// Comma-separated columns to select (use * for all columns)
    #[arg(long, value_delimiter = ',', conflicts_with = "rename")]
    columns: Vec<String>,

    /// Comma-separated archive=display pairs; selects the archive names and renames them
    #[arg(long, value_delimiter = ',', value_parser = parse_rename_pair)]
    rename: Vec<(String, String)>,

    /// Filter passed to the archive unchanged (e.g. "kepid=8113154")
    #[arg(long = "where")]
    filter: Option<String>,

    /// Cache file: read when it exists, written after a fetch otherwise
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON file replacing the built-in per-table defaults
    #[arg(long)]
    defaults: Option<PathBuf>,

    /// Archive endpoint (overrides EXOPLANET_ARCHIVE_URL)
    #[arg(long)]
    archive_url: Option<String>,

    /// Only print the first N rows
    #[arg(long)]
    limit: Option<usize>,

    /// List the tables that have built-in or loaded defaults and exit
    #[arg(long)]
    list_defaults: bool,
}

/// Parse "archive=display" into a rename pair
fn parse_rename_pair(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((from, to)) if !from.trim().is_empty() && !to.trim().is_empty() => {
            Ok((from.trim().to_string(), to.trim().to_string()))
        }
        _ => Err(format!("Rename must be in format 'archive=display', got '{s}'")),
    }
}

impl Args {
    fn column_spec(&self) -> Option<ColumnSpec> {
        if !self.rename.is_empty() {
            Some(ColumnSpec::Rename(self.rename.clone()))
        } else if !self.columns.is_empty() {
            Some(ColumnSpec::select(self.columns.iter().map(|c| c.trim())))
        } else {
            None
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let defaults = match &args.defaults {
        Some(path) => DefaultParams::from_json_file(path)
            .with_context(|| format!("Failed to load defaults from {}", path.display()))?,
        None => DefaultParams::builtin(),
    };

    if args.list_defaults {
        for table in defaults.tables() {
            println!("{table}");
        }
        return Ok(());
    }

    let config = match &args.archive_url {
        Some(url) => ArchiveConfig::default().with_base_url(url),
        None => ArchiveConfig::from_env(),
    };

    let Some(table_name) = args.table.as_deref() else {
        bail!("A table name is required");
    };

    let client = ArchiveClient::new(config).context("Failed to build archive client")?;
    let reader = KeplerReader::new(client, defaults);
    let mut table = reader
        .read_or_fetch(
            table_name,
            args.column_spec(),
            args.filter.clone(),
            args.output.as_deref(),
        )
        .with_context(|| format!("Failed to read table {table_name}"))?;

    if let Some(limit) = args.limit {
        table.truncate(limit);
    }
    table.write_csv(io::stdout().lock())?;

    Ok(())
}
