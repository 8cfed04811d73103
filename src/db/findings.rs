use serde_json::Value;
use tracing::debug;

use crate::errors::SectrackError;
use crate::models::finding::{Finding, FindingSummary};
use super::{Database, Row};

impl Database {
    /// Insert a finding; `created_at` is stamped with the database's current date.
    pub fn insert_finding(&self, finding: &Finding) -> Result<i64, SectrackError> {
        if finding.title.trim().is_empty() {
            return Err(SectrackError::Validation("title is required".into()));
        }

        let id = self.insert(
            "INSERT INTO findings(host_id, title, severity, status, created_at)
             VALUES (?1, ?2, ?3, ?4, date('now'))",
            rusqlite::params![
                finding.host_id,
                finding.title,
                finding.severity.as_str(),
                finding.status.as_str(),
            ],
        )?;
        debug!(finding_id = id, host_id = finding.host_id, severity = %finding.severity, "Inserted finding");
        Ok(id)
    }

    /// All findings with their host's name, most recently inserted first.
    pub fn list_findings(&self) -> Result<Vec<FindingSummary>, SectrackError> {
        let rows = self.query(
            "SELECT f.id AS id, h.hostname AS hostname, f.title AS title,
                    f.severity AS severity, f.status AS status, f.created_at AS created_at
             FROM findings f
             JOIN hosts h ON f.host_id = h.id
             ORDER BY f.id DESC",
            [],
        )?;

        rows.into_iter()
            .map(|row| serde_json::from_value(Value::Object(row)).map_err(SectrackError::from))
            .collect()
    }

    /// Findings projection used by the exporters, in id order.
    pub fn finding_export_rows(&self) -> Result<Vec<Row>, SectrackError> {
        self.query(
            "SELECT f.id AS id, f.host_id AS host_id, h.hostname AS hostname, f.title AS title,
                    f.severity AS severity, f.status AS status, f.created_at AS created_at
             FROM findings f
             JOIN hosts h ON f.host_id = h.id
             ORDER BY f.id ASC",
            [],
        )
    }
}
