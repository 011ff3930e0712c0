//! Column specifications and the post-fetch rename pass.

use serde::Deserialize;

use crate::table::DataTable;

/// Which archive columns to pull, and what to call them afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawColumns")]
pub enum ColumnSpec {
    /// Columns selected and kept under their archive names (`"*"` selects all)
    Select(Vec<String>),
    /// Ordered archive name -> display name pairs
    Rename(Vec<(String, String)>),
}

impl ColumnSpec {
    /// Selection of archive columns kept under their own names.
    pub fn select<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ColumnSpec::Select(names.into_iter().map(Into::into).collect())
    }

    /// Selection of archive columns renamed after the fetch.
    pub fn rename_map<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        ColumnSpec::Rename(
            pairs
                .into_iter()
                .map(|(from, to)| (from.into(), to.into()))
                .collect(),
        )
    }

    /// True when nothing is selected; an empty spec counts as "not given".
    pub fn is_empty(&self) -> bool {
        match self {
            ColumnSpec::Select(names) => names.is_empty(),
            ColumnSpec::Rename(pairs) => pairs.is_empty(),
        }
    }

    /// Names to request from the archive, in order.
    ///
    /// For a rename mapping these are the mapping's keys.
    pub fn remote_names(&self) -> Vec<String> {
        match self {
            ColumnSpec::Select(names) => names.clone(),
            ColumnSpec::Rename(pairs) => pairs.iter().map(|(from, _)| from.clone()).collect(),
        }
    }

    /// Display name for an archive column, if this spec renames it.
    pub fn display_name(&self, remote: &str) -> Option<&str> {
        match self {
            ColumnSpec::Select(_) => None,
            ColumnSpec::Rename(pairs) => pairs
                .iter()
                .find(|(from, _)| from == remote)
                .map(|(_, to)| to.as_str()),
        }
    }
}

/// Shape of a column spec in a JSON defaults file: a list or an object.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawColumns {
    Select(Vec<String>),
    Rename(serde_json::Map<String, serde_json::Value>),
}

impl TryFrom<RawColumns> for ColumnSpec {
    type Error = String;

    fn try_from(raw: RawColumns) -> Result<Self, Self::Error> {
        match raw {
            RawColumns::Select(names) => Ok(ColumnSpec::Select(names)),
            RawColumns::Rename(map) => map
                .into_iter()
                .map(|(from, to)| match to {
                    serde_json::Value::String(to) => Ok((from, to)),
                    other => Err(format!(
                        "display name for '{from}' must be a string, got {other}"
                    )),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(ColumnSpec::Rename),
        }
    }
}

/// Rename result columns according to a rename mapping.
///
/// Columns matching a key take the mapped value, the rest keep their names.
/// A plain selection leaves the table untouched.
pub fn rename(mut table: DataTable, columns: &ColumnSpec) -> DataTable {
    if let ColumnSpec::Rename(_) = columns {
        for name in table.columns_mut() {
            if let Some(display) = columns.display_name(name) {
                *name = display.to_string();
            }
        }
    }
    table
}
