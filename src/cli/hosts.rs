use std::io::Write;

use tracing::info;

use crate::cli::prompt::Prompter;
use crate::db::Database;
use crate::errors::SectrackError;
use crate::models::host::Host;

pub fn handle_add_host(
    db: &Database,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> Result<(), SectrackError> {
    writeln!(out, "Add host (leave blank to skip optional fields)")?;

    let hostname = prompter.prompt("Hostname*: ")?.trim().to_string();
    if hostname.is_empty() {
        return Err(SectrackError::Validation("hostname is required.".into()));
    }

    let ip = optional(prompter.prompt("IP: ")?);
    let owner = optional(prompter.prompt("Owner: ")?);
    let notes = optional(prompter.prompt("Notes: ")?);

    let host = Host::new(hostname).with_ip(ip).with_owner(owner).with_notes(notes);
    let id = db.insert_host(&host)?;

    info!(host_id = id, hostname = %host.hostname, "Host added");
    writeln!(out, "OK: host added (id {}).", id)?;
    Ok(())
}

pub fn handle_list_hosts(db: &Database, out: &mut dyn Write) -> Result<(), SectrackError> {
    let hosts = db.list_hosts()?;
    if hosts.is_empty() {
        writeln!(out, "No hosts found.")?;
        return Ok(());
    }

    for host in &hosts {
        write_host_line(out, host)?;
    }
    Ok(())
}

pub fn handle_search_host(db: &Database, term: &str, out: &mut dyn Write) -> Result<(), SectrackError> {
    let hosts = db.search_hosts(term)?;
    info!(term = %term, matches = hosts.len(), "Host search");
    if hosts.is_empty() {
        writeln!(out, "No matches.")?;
        return Ok(());
    }

    for host in &hosts {
        write_host_line(out, host)?;
    }
    Ok(())
}

fn write_host_line(out: &mut dyn Write, host: &Host) -> std::io::Result<()> {
    writeln!(
        out,
        "[{}] {}  ip={}  owner={}",
        host.id.unwrap_or_default(),
        host.hostname,
        host.ip.as_deref().unwrap_or("-"),
        host.owner.as_deref().unwrap_or("-"),
    )
}

/// Blank answers become NULL columns.
fn optional(answer: String) -> Option<String> {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
