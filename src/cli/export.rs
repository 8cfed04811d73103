use std::io::Write;
use std::path::Path;

use crate::cli::commands::ExportArgs;
use crate::config::AppConfig;
use crate::db::{Database, Row};
use crate::errors::SectrackError;
use crate::export::{export_rows_to_csv, export_rows_to_xlsx};

const NOTHING_TO_DO: &str = "Nothing to do. Use --csv or --xlsx.";

pub fn handle_export_hosts(
    db: &Database,
    config: &AppConfig,
    args: &ExportArgs,
    out: &mut dyn Write,
) -> Result<(), SectrackError> {
    ensure_format_selected(args)?;
    let rows = db.host_export_rows()?;
    write_exports(rows, &config.export_dir, "hosts", "Hosts", args, out)
}

pub fn handle_export_findings(
    db: &Database,
    config: &AppConfig,
    args: &ExportArgs,
    out: &mut dyn Write,
) -> Result<(), SectrackError> {
    ensure_format_selected(args)?;
    let rows = db.finding_export_rows()?;
    write_exports(rows, &config.export_dir, "findings", "Findings", args, out)
}

fn ensure_format_selected(args: &ExportArgs) -> Result<(), SectrackError> {
    if args.csv || args.xlsx {
        Ok(())
    } else {
        Err(SectrackError::Usage(NOTHING_TO_DO.into()))
    }
}

fn write_exports(
    rows: Vec<Row>,
    export_dir: &Path,
    stem: &str,
    sheet_name: &str,
    args: &ExportArgs,
    out: &mut dyn Write,
) -> Result<(), SectrackError> {
    if args.csv {
        let path = export_rows_to_csv(rows.iter().cloned(), &export_dir.join(format!("{}.csv", stem)))?;
        writeln!(out, "OK: exported to {}", path.display())?;
    }
    if args.xlsx {
        let path = export_rows_to_xlsx(rows, &export_dir.join(format!("{}.xlsx", stem)), sheet_name)?;
        writeln!(out, "OK: exported to {}", path.display())?;
    }
    Ok(())
}
