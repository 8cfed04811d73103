use std::path::{Path, PathBuf};

use rusqlite::types::ValueRef;
use rusqlite::{Connection, Params};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::errors::SectrackError;

/// A result row addressable by column name, in select-list order.
pub type Row = Map<String, Value>;

/// Gateway to the single-file ledger database.
///
/// Every operation opens its own connection and drops it before returning,
/// so no connection state is shared between calls.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn connect(&self) -> Result<Connection, SectrackError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(&self.path).map_err(|e| {
            SectrackError::Database(format!("Failed to open database {}: {}", self.path.display(), e))
        })?;

        conn.execute_batch("PRAGMA foreign_keys=ON;")
            .map_err(|e| SectrackError::Database(format!("Failed to set pragmas: {}", e)))?;

        trace!(path = %self.path.display(), "Opened connection");
        Ok(conn)
    }

    pub fn init_schema(&self) -> Result<(), SectrackError> {
        let conn = self.connect()?;
        conn.execute_batch(super::schema::CREATE_TABLES)
            .map_err(|e| SectrackError::Database(format!("Failed to create tables: {}", e)))?;
        debug!(path = %self.path.display(), "Schema initialized");
        Ok(())
    }

    /// Run one parameterized mutating statement and return the affected row count.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> Result<usize, SectrackError> {
        let conn = self.connect()?;
        debug!(sql = %sql.trim(), "Executing statement");
        let affected = conn.execute(sql, params)?;
        Ok(affected)
    }

    /// Like [`Database::execute`], but returns the rowid of the inserted row.
    pub fn insert<P: Params>(&self, sql: &str, params: P) -> Result<i64, SectrackError> {
        let conn = self.connect()?;
        debug!(sql = %sql.trim(), "Executing insert");
        conn.execute(sql, params)?;
        Ok(conn.last_insert_rowid())
    }

    /// Run one parameterized read and collect every row.
    pub fn query<P: Params>(&self, sql: &str, params: P) -> Result<Vec<Row>, SectrackError> {
        let conn = self.connect()?;
        debug!(sql = %sql.trim(), "Running query");

        let mut stmt = conn.prepare(sql)?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

        let rows = stmt.query_map(params, |row: &rusqlite::Row| {
            let mut record = Row::new();
            for (idx, name) in columns.iter().enumerate() {
                record.insert(name.clone(), to_json(row.get_ref(idx)?));
            }
            Ok(record)
        })?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }
}

fn to_json(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::from(i),
        ValueRef::Real(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Value::String(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::temp_database;

    #[test]
    fn test_connect_creates_parent_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("ledger.db");
        let db = Database::new(&path);
        db.init_schema().unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_init_schema_is_idempotent() {
        let (_dir, db) = temp_database();
        db.init_schema().unwrap();
        db.init_schema().unwrap();

        let tables = db
            .query(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('hosts', 'findings') ORDER BY name",
                [],
            )
            .unwrap();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0]["name"], "findings");
        assert_eq!(tables[1]["name"], "hosts");
    }

    #[test]
    fn test_foreign_keys_enabled_per_connection() {
        let (_dir, db) = temp_database();
        let rows = db.query("PRAGMA foreign_keys", []).unwrap();
        assert_eq!(rows[0]["foreign_keys"], 1);
    }

    #[test]
    fn test_query_preserves_column_order_and_types() {
        let (_dir, db) = temp_database();
        let rows = db
            .query("SELECT 3 AS zeta, 'x' AS alpha, NULL AS mid, 1.5 AS real_val", [])
            .unwrap();
        let keys: Vec<&str> = rows[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid", "real_val"]);
        assert_eq!(rows[0]["zeta"], 3);
        assert_eq!(rows[0]["alpha"], "x");
        assert!(rows[0]["mid"].is_null());
        assert_eq!(rows[0]["real_val"], 1.5);
    }

    #[test]
    fn test_execute_binds_parameters_literally() {
        let (_dir, db) = temp_database();
        let hostile = "x'); DROP TABLE hosts; --";
        db.execute("INSERT INTO hosts(hostname) VALUES (?1)", rusqlite::params![hostile])
            .unwrap();

        let rows = db.query("SELECT hostname FROM hosts", []).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["hostname"], hostile);
    }

    #[test]
    fn test_execute_returns_affected_rows() {
        let (_dir, db) = temp_database();
        db.execute("INSERT INTO hosts(hostname) VALUES ('a')", []).unwrap();
        db.execute("INSERT INTO hosts(hostname) VALUES ('b')", []).unwrap();
        let affected = db.execute("DELETE FROM hosts", []).unwrap();
        assert_eq!(affected, 2);
    }

    #[test]
    fn test_invalid_sql_is_database_error() {
        let (_dir, db) = temp_database();
        let err = db.query("SELECT * FROM no_such_table", []).unwrap_err();
        assert!(matches!(err, SectrackError::Database(_)));
    }
}
