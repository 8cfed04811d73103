//! Flat exports of query rows.
//!
//! Both writers take any sequence of [`Row`]s, derive the column order from
//! the first row's keys and look later rows up by column name.

pub mod csv_format;
pub mod xlsx_format;

use std::path::Path;

use serde_json::Value;

use crate::db::Row;
use crate::errors::SectrackError;

pub use csv_format::export_rows_to_csv;
pub use xlsx_format::export_rows_to_xlsx;

fn ensure_parent_dir(out_path: &Path) -> Result<(), SectrackError> {
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn header_of(rows: &[Row]) -> Option<Vec<String>> {
    rows.first().map(|first| first.keys().cloned().collect())
}

/// Text form of a cell. Missing keys and NULLs become empty cells.
fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
