use serde_json::Value;
use tracing::debug;

use crate::errors::SectrackError;
use crate::models::host::Host;
use super::{Database, Row};

impl Database {
    pub fn insert_host(&self, host: &Host) -> Result<i64, SectrackError> {
        if host.hostname.trim().is_empty() {
            return Err(SectrackError::Validation("hostname is required".into()));
        }

        let id = self.insert(
            "INSERT INTO hosts(hostname, ip, owner, notes) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![host.hostname, host.ip, host.owner, host.notes],
        )?;
        debug!(host_id = id, hostname = %host.hostname, "Inserted host");
        Ok(id)
    }

    /// All hosts, most recently inserted first.
    pub fn list_hosts(&self) -> Result<Vec<Host>, SectrackError> {
        let rows = self.query(
            "SELECT id, hostname, ip, owner, notes FROM hosts ORDER BY id DESC",
            [],
        )?;
        rows_to_hosts(rows)
    }

    /// Substring match against hostname, ip, owner or notes.
    pub fn search_hosts(&self, term: &str) -> Result<Vec<Host>, SectrackError> {
        let pattern = format!("%{}%", term);
        let rows = self.query(
            "SELECT id, hostname, ip, owner, notes
             FROM hosts
             WHERE hostname LIKE ?1 OR ip LIKE ?1 OR owner LIKE ?1 OR notes LIKE ?1
             ORDER BY id DESC",
            rusqlite::params![pattern],
        )?;
        rows_to_hosts(rows)
    }

    /// Hosts projection used by the exporters, in id order.
    pub fn host_export_rows(&self) -> Result<Vec<Row>, SectrackError> {
        self.query(
            "SELECT id, hostname, ip, owner, notes FROM hosts ORDER BY id ASC",
            [],
        )
    }
}

fn rows_to_hosts(rows: Vec<Row>) -> Result<Vec<Host>, SectrackError> {
    rows.into_iter()
        .map(|row| serde_json::from_value(Value::Object(row)).map_err(SectrackError::from))
        .collect()
}
