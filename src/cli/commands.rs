use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_TIMESTAMP"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "sectrack", version = VERSION, about = "Personal security ledger for hosts and findings")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file with an [app] section [default: settings.ini next to the executable]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored log output
    #[arg(long, global = true)]
    pub no_color: bool,
}

impl Cli {
    /// Default tracing filter when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create tables if missing
    InitDb,
    /// Add a host
    AddHost,
    /// List hosts
    ListHosts,
    /// Search hosts by term
    SearchHost(SearchArgs),
    /// Add a finding to a host
    AddFinding,
    /// List findings
    ListFindings,
    /// Export hosts
    ExportHosts(ExportArgs),
    /// Export findings
    ExportFindings(ExportArgs),
    /// Replace all data with the sample hosts and findings
    Seed,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::InitDb => "init-db",
            Commands::AddHost => "add-host",
            Commands::ListHosts => "list-hosts",
            Commands::SearchHost(_) => "search-host",
            Commands::AddFinding => "add-finding",
            Commands::ListFindings => "list-findings",
            Commands::ExportHosts(_) => "export-hosts",
            Commands::ExportFindings(_) => "export-findings",
            Commands::Seed => "seed",
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Substring matched against hostname, ip, owner and notes
    pub term: String,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ExportArgs {
    /// Write <export_dir>/<table>.csv
    #[arg(long)]
    pub csv: bool,

    /// Write <export_dir>/<table>.xlsx
    #[arg(long)]
    pub xlsx: bool,
}
