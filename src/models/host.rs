use serde::{Deserialize, Serialize};

/// A tracked network endpoint. `id` is `None` until the row is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Host {
    pub id: Option<i64>,
    pub hostname: String,
    pub ip: Option<String>,
    pub owner: Option<String>,
    pub notes: Option<String>,
}

impl Host {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            id: None,
            hostname: hostname.into(),
            ip: None,
            owner: None,
            notes: None,
        }
    }

    pub fn with_ip(mut self, ip: Option<String>) -> Self {
        self.ip = ip;
        self
    }

    pub fn with_owner(mut self, owner: Option<String>) -> Self {
        self.owner = owner;
        self
    }

    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }
}
