use std::io::Write;

use tracing::info;

use crate::cli::prompt::Prompter;
use crate::db::Database;
use crate::errors::SectrackError;
use crate::models::finding::{Finding, Severity, Status};

pub fn handle_add_finding(
    db: &Database,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> Result<(), SectrackError> {
    writeln!(out, "Add finding")?;

    let host_id = parse_host_id(&prompter.prompt("Host ID*: ")?)?;

    let title = prompter.prompt("Title*: ")?.trim().to_string();
    if title.is_empty() {
        return Err(SectrackError::Validation("title is required.".into()));
    }

    let severity: Severity = prompter.prompt("Severity (low/medium/high/critical)*: ")?.parse()?;

    let status_answer = prompter.prompt("Status (open/fixed/wontfix) [open]: ")?;
    let status = if status_answer.trim().is_empty() {
        Status::default()
    } else {
        status_answer.parse::<Status>()?
    };

    let finding = Finding::new(host_id, title, severity).with_status(status);
    let id = db.insert_finding(&finding).map_err(|e| match e {
        SectrackError::Constraint(_) => {
            SectrackError::Constraint(format!("host {} does not exist", host_id))
        }
        other => other,
    })?;

    info!(finding_id = id, host_id, severity = %severity, status = %status, "Finding added");
    writeln!(out, "OK: finding added (id {}).", id)?;
    Ok(())
}

pub fn handle_list_findings(db: &Database, out: &mut dyn Write) -> Result<(), SectrackError> {
    let findings = db.list_findings()?;
    if findings.is_empty() {
        writeln!(out, "No findings found.")?;
        return Ok(());
    }

    for f in &findings {
        writeln!(
            out,
            "[{}] {} | {} | {} | {} | {}",
            f.id, f.hostname, f.title, f.severity, f.status, f.created_at
        )?;
    }
    Ok(())
}

/// Host ids are plain positive decimal integers.
fn parse_host_id(answer: &str) -> Result<i64, SectrackError> {
    let trimmed = answer.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SectrackError::Validation("Invalid host ID".into()));
    }
    match trimmed.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(SectrackError::Validation("Invalid host ID".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::prompt::LinePrompter;
    use crate::db::temp_database;
    use crate::models::host::Host;
    use std::io::Cursor;

    fn add_finding(db: &Database, answers: &str) -> Result<(), SectrackError> {
        let mut prompter = LinePrompter::new(Cursor::new(answers.to_string()), std::io::sink());
        handle_add_finding(db, &mut prompter, &mut std::io::sink())
    }

    #[test]
    fn test_parse_host_id() {
        assert_eq!(parse_host_id(" 12 ").unwrap(), 12);
        assert!(parse_host_id("").is_err());
        assert!(parse_host_id("0").is_err());
        assert!(parse_host_id("-3").is_err());
        assert!(parse_host_id("+3").is_err());
        assert!(parse_host_id("abc").is_err());
        assert!(parse_host_id("99999999999999999999").is_err());
    }

    #[test]
    fn test_add_finding_defaults_status_to_open() {
        let (_dir, db) = temp_database();
        let host_id = db.insert_host(&Host::new("webserver01")).unwrap();

        add_finding(&db, &format!("{}\nOutdated nginx version\nHIGH\n\n", host_id)).unwrap();

        let findings = db.list_findings().unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::High);
        assert_eq!(findings[0].status, Status::Open);
    }

    #[test]
    fn test_add_finding_explicit_status() {
        let (_dir, db) = temp_database();
        let host_id = db.insert_host(&Host::new("router")).unwrap();

        add_finding(&db, &format!("{}\nDefault admin\nhigh\nwontfix\n", host_id)).unwrap();
        assert_eq!(db.list_findings().unwrap()[0].status, Status::Wontfix);
    }

    #[test]
    fn test_add_finding_invalid_host_id() {
        let (_dir, db) = temp_database();
        let err = add_finding(&db, "abc\n").unwrap_err();
        assert_eq!(err.to_string(), "Invalid host ID");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_add_finding_invalid_severity() {
        let (_dir, db) = temp_database();
        let host_id = db.insert_host(&Host::new("router")).unwrap();
        let err = add_finding(&db, &format!("{}\nTitle\nsevere\n", host_id)).unwrap_err();
        assert_eq!(err.to_string(), "Invalid severity");
        assert!(db.list_findings().unwrap().is_empty());
    }

    #[test]
    fn test_add_finding_invalid_status() {
        let (_dir, db) = temp_database();
        let host_id = db.insert_host(&Host::new("router")).unwrap();
        let err = add_finding(&db, &format!("{}\nTitle\nlow\nclosed\n", host_id)).unwrap_err();
        assert!(matches!(err, SectrackError::Validation(_)));
    }

    #[test]
    fn test_add_finding_blank_title() {
        let (_dir, db) = temp_database();
        let host_id = db.insert_host(&Host::new("router")).unwrap();
        let err = add_finding(&db, &format!("{}\n \nlow\n", host_id)).unwrap_err();
        assert!(matches!(err, SectrackError::Validation(_)));
    }

    #[test]
    fn test_add_finding_unknown_host_is_storage_error() {
        let (_dir, db) = temp_database();
        let err = add_finding(&db, "42\nOrphan\nlow\n\n").unwrap_err();
        assert!(matches!(err, SectrackError::Constraint(_)));
        assert!(err.to_string().contains("host 42 does not exist"));
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn test_list_findings_empty_message() {
        let (_dir, db) = temp_database();
        let mut out = Vec::new();
        handle_list_findings(&db, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No findings found.\n");
    }
}
