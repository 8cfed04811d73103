use std::collections::HashMap;

use tracing::info;

use crate::errors::SectrackError;
use crate::models::finding::{Finding, Severity, Status};
use crate::models::host::Host;
use super::Database;

/// hostname, ip, owner, notes
const SAMPLE_HOSTS: [(&str, &str, &str, &str); 3] = [
    ("webserver01", "192.168.1.10", "home-lab", "nginx, exposed to LAN"),
    ("nas01", "192.168.1.20", "storage", "SMB enabled, check guest access"),
    ("router", "192.168.1.1", "network", "admin panel, firmware version?"),
];

/// hostname, title, severity, status
const SAMPLE_FINDINGS: [(&str, &str, Severity, Status); 4] = [
    ("webserver01", "Open SSH port (22) to LAN", Severity::Medium, Status::Open),
    ("webserver01", "Outdated nginx version", Severity::High, Status::Open),
    ("nas01", "SMB guest access enabled", Severity::Critical, Status::Open),
    ("router", "Default admin username suspected", Severity::High, Status::Wontfix),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub hosts: usize,
    pub findings: usize,
}

impl Database {
    /// Replace all hosts and findings with the fixed sample set.
    ///
    /// Host ids come from AUTOINCREMENT and keep growing across reseeds.
    pub fn seed_sample_data(&self) -> Result<SeedReport, SectrackError> {
        self.init_schema()?;

        self.execute("DELETE FROM findings", [])?;
        self.execute("DELETE FROM hosts", [])?;

        for (hostname, ip, owner, notes) in SAMPLE_HOSTS {
            let host = Host::new(hostname)
                .with_ip(Some(ip.to_string()))
                .with_owner(Some(owner.to_string()))
                .with_notes(Some(notes.to_string()));
            self.insert_host(&host)?;
        }

        let ids: HashMap<String, i64> = self
            .list_hosts()?
            .into_iter()
            .filter_map(|h| h.id.map(|id| (h.hostname, id)))
            .collect();

        for (hostname, title, severity, status) in SAMPLE_FINDINGS {
            let host_id = *ids.get(hostname).ok_or_else(|| {
                SectrackError::Database(format!("Seeded host {} not found", hostname))
            })?;
            self.insert_finding(&Finding::new(host_id, title, severity).with_status(status))?;
        }

        let report = SeedReport {
            hosts: SAMPLE_HOSTS.len(),
            findings: SAMPLE_FINDINGS.len(),
        };
        info!(hosts = report.hosts, findings = report.findings, "Seeded sample data");
        Ok(report)
    }
}
