//! CSV output formatting.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::db::Row;
use crate::errors::SectrackError;
use super::{cell_text, ensure_parent_dir, header_of};

/// Write `rows` to `out_path` as UTF-8 CSV, replacing any existing file.
///
/// No rows produces a zero-byte file, not a header-only one.
pub fn export_rows_to_csv<I>(rows: I, out_path: &Path) -> Result<PathBuf, SectrackError>
where
    I: IntoIterator<Item = Row>,
{
    ensure_parent_dir(out_path)?;
    let rows: Vec<Row> = rows.into_iter().collect();

    let Some(header) = header_of(&rows) else {
        std::fs::write(out_path, "")?;
        info!(path = %out_path.display(), rows = 0, "Wrote empty CSV export");
        return Ok(out_path.to_path_buf());
    };

    let mut wtr = csv::Writer::from_path(out_path)?;
    wtr.write_record(&header)?;
    for row in &rows {
        wtr.write_record(header.iter().map(|column| cell_text(row.get(column))))?;
    }
    wtr.flush()?;

    info!(path = %out_path.display(), rows = rows.len(), "Wrote CSV export");
    Ok(out_path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn row(value: serde_json::Value) -> Row {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_csv_empty_rows_zero_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("exports").join("hosts.csv");
        export_rows_to_csv(Vec::new(), &path).unwrap();
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn test_csv_header_follows_first_row_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let rows = vec![
            row(json!({"id": 1, "hostname": "webserver01", "ip": "192.168.1.10"})),
            row(json!({"ip": null, "hostname": "nas01", "id": 2})),
        ];
        export_rows_to_csv(rows, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec!["id,hostname,ip", "1,webserver01,192.168.1.10", "2,nas01,"]);
    }

    #[test]
    fn test_csv_quotes_embedded_commas() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let rows = vec![row(json!({"hostname": "webserver01", "notes": "nginx, exposed to LAN"}))];
        export_rows_to_csv(rows, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"nginx, exposed to LAN\""));
    }

    #[test]
    fn test_csv_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale content that is longer than the export\n").unwrap();

        export_rows_to_csv(vec![row(json!({"id": 1}))], &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap().lines().collect::<Vec<_>>(), vec!["id", "1"]);

        export_rows_to_csv(Vec::new(), &path).unwrap();
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn test_csv_accepts_lazy_iterator() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lazy.csv");
        let rows = (1..=3).map(|i| row(json!({"n": i})));
        export_rows_to_csv(rows, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 4);
    }
}
