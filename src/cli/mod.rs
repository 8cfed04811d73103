pub mod commands;
pub mod export;
pub mod findings;
pub mod hosts;
pub mod prompt;
pub mod setup;

use std::ffi::OsString;
use std::io::Write;
use std::path::Path;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::{debug, info};

use crate::config::{load_config, AppConfig};
use crate::db::Database;
use crate::errors::{SectrackError, EXIT_OK, EXIT_USAGE};

pub use commands::{Cli, Commands, ExportArgs, SearchArgs};
pub use prompt::{LinePrompter, Prompter, TerminalPrompter};

/// Parse command-line arguments.
///
/// On failure the message goes to `out` (help, version, unknown command) or
/// `err` (other usage errors) and the exit status is returned.
pub fn parse_args<I, T>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> Result<Cli, u8>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let e = match Cli::try_parse_from(args) {
        Ok(cli) => return Ok(cli),
        Err(e) => e,
    };

    let code = u8::try_from(e.exit_code()).unwrap_or(EXIT_USAGE);
    let reported = if e.kind() == ErrorKind::InvalidSubcommand {
        writeln!(out, "Unknown command").map(|_| EXIT_USAGE)
    } else if e.use_stderr() {
        write!(err, "{}", e.render()).map(|_| code)
    } else {
        write!(out, "{}", e.render()).map(|_| code)
    };
    Err(reported.unwrap_or(code))
}

/// Load settings from `settings`, open the ledger and run the parsed command.
pub fn launch(
    cli: &Cli,
    settings: &Path,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> u8 {
    let config = match load_config(settings) {
        Ok(config) => config,
        Err(e) => {
            if let Err(io_err) = writeln!(err, "Error: {}", e) {
                debug!(error = %io_err, "Failed to report settings error");
            }
            return e.exit_code();
        }
    };
    let db = Database::new(&config.db_path);
    execute(&cli.command, &db, &config, prompter, out, err)
}

/// Run one command against the ledger.
pub fn run(
    command: &Commands,
    db: &Database,
    config: &AppConfig,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> Result<(), SectrackError> {
    info!(command = command.name(), db = %db.path().display(), "Running command");

    match command {
        Commands::InitDb => setup::handle_init_db(db, out),
        Commands::Seed => setup::handle_seed(db, out),
        Commands::AddHost => hosts::handle_add_host(db, prompter, out),
        Commands::ListHosts => hosts::handle_list_hosts(db, out),
        Commands::SearchHost(args) => hosts::handle_search_host(db, &args.term, out),
        Commands::AddFinding => findings::handle_add_finding(db, prompter, out),
        Commands::ListFindings => findings::handle_list_findings(db, out),
        Commands::ExportHosts(args) => export::handle_export_hosts(db, config, args, out),
        Commands::ExportFindings(args) => export::handle_export_findings(db, config, args, out),
    }
}

/// Run one command and turn its outcome into a process exit status,
/// reporting any error on `err`.
pub fn execute(
    command: &Commands,
    db: &Database,
    config: &AppConfig,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> u8 {
    match run(command, db, config, prompter, out) {
        Ok(()) => EXIT_OK,
        Err(e) => {
            let class = e.classify();
            debug!(command = command.name(), error_type = class.error_type, "Command failed");
            let reported = match &e {
                SectrackError::Usage(hint) => writeln!(err, "{}", hint),
                other => writeln!(err, "Error: {}", other),
            };
            if let Err(io_err) = reported {
                debug!(error = %io_err, "Failed to report command error");
            }
            class.exit_code
        }
    }
}
