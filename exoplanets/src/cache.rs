//! CSV cache files.
//!
//! A cache file is plain UTF-8 CSV: the header row holds the column names and
//! every following line is one row. No index column is written. Writes are not
//! atomic; a crash mid-write leaves a partial file behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::table::DataTable;

/// True when a regular file exists at `path`.
pub fn is_cached(path: &Path) -> bool {
    path.is_file()
}

/// Write `table` to `filename`, creating missing parent directories.
///
/// Does nothing when no filename is given. An existing file is overwritten.
pub fn persist(table: &DataTable, filename: Option<&Path>) -> Result<()> {
    let Some(path) = filename else {
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let writer = BufWriter::new(File::create(path)?);
    table.write_csv(writer)?;
    debug!(
        "Wrote {} rows to cache file {}",
        table.num_rows(),
        path.display()
    );
    Ok(())
}

/// Read a cache file back exactly as it was written.
pub fn load(path: &Path) -> Result<DataTable> {
    let reader = BufReader::new(File::open(path)?);
    DataTable::from_csv_reader(reader)
}
