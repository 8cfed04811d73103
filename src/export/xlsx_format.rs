//! Single-sheet workbook output.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;
use serde_json::Value;
use tracing::info;

use crate::db::Row;
use crate::errors::SectrackError;
use super::{cell_text, ensure_parent_dir, header_of};

/// Write `rows` into a workbook with one sheet named `sheet_name`.
///
/// Numbers are stored as numeric cells, NULLs are left blank. With no rows
/// the workbook still contains the (empty) named sheet.
pub fn export_rows_to_xlsx<I>(rows: I, out_path: &Path, sheet_name: &str) -> Result<PathBuf, SectrackError>
where
    I: IntoIterator<Item = Row>,
{
    ensure_parent_dir(out_path)?;
    let rows: Vec<Row> = rows.into_iter().collect();

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    if let Some(header) = header_of(&rows) {
        for (col, column) in header.iter().enumerate() {
            worksheet.write_string(0, col as u16, column)?;
        }

        for (idx, row) in rows.iter().enumerate() {
            let row_num = (idx + 1) as u32;
            for (col, column) in header.iter().enumerate() {
                let col = col as u16;
                match row.get(column) {
                    None | Some(Value::Null) => {}
                    Some(Value::Number(n)) => match n.as_f64() {
                        Some(f) => {
                            worksheet.write_number(row_num, col, f)?;
                        }
                        None => {
                            worksheet.write_string(row_num, col, n.to_string())?;
                        }
                    },
                    Some(Value::Bool(b)) => {
                        worksheet.write_boolean(row_num, col, *b)?;
                    }
                    other => {
                        worksheet.write_string(row_num, col, cell_text(other))?;
                    }
                }
            }
        }
    }

    workbook.save(out_path)?;
    info!(path = %out_path.display(), rows = rows.len(), sheet = sheet_name, "Wrote workbook export");
    Ok(out_path.to_path_buf())
}
