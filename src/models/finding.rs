use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::SectrackError;

/// Severity level for a finding, from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = SectrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            "critical" => Ok(Severity::Critical),
            _ => Err(SectrackError::Validation("Invalid severity".into())),
        }
    }
}

/// Lifecycle state of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Open,
    Fixed,
    Wontfix,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "open",
            Status::Fixed => "fixed",
            Status::Wontfix => "wontfix",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = SectrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(Status::Open),
            "fixed" => Ok(Status::Fixed),
            "wontfix" => Ok(Status::Wontfix),
            _ => Err(SectrackError::Validation("Invalid status".into())),
        }
    }
}

/// A security issue attributed to one host.
///
/// `created_at` is only an in-memory default; the stored value is stamped by
/// the database clock at insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub id: Option<i64>,
    pub host_id: i64,
    pub title: String,
    pub severity: Severity,
    pub status: Status,
    pub created_at: NaiveDate,
}

impl Finding {
    pub fn new(host_id: i64, title: impl Into<String>, severity: Severity) -> Self {
        Self {
            id: None,
            host_id,
            title: title.into(),
            severity,
            status: Status::default(),
            created_at: Local::now().date_naive(),
        }
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }
}

/// A finding joined with its host's name, as shown by `list-findings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingSummary {
    pub id: i64,
    pub hostname: String,
    pub title: String,
    pub severity: Severity,
    pub status: Status,
    pub created_at: String,
}
