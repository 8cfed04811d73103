use std::env;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use sectrack::cli::{self, LinePrompter, Prompter, TerminalPrompter};
use sectrack::config::resolve_settings_path;

fn main() -> ExitCode {
    let cli = match cli::parse_args(env::args_os(), &mut io::stdout(), &mut io::stderr()) {
        Ok(cli) => cli,
        Err(code) => return ExitCode::from(code),
    };

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(io::stderr)
        .init();

    let exe = env::current_exe().ok();
    let settings = resolve_settings_path(cli.config.as_deref(), exe.as_deref());

    let mut prompter: Box<dyn Prompter> = if io::stdin().is_terminal() {
        match TerminalPrompter::new() {
            Ok(p) => Box::new(p),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(e.exit_code());
            }
        }
    } else {
        Box::new(LinePrompter::new(io::stdin().lock(), io::stdout()))
    };

    let code = cli::launch(
        &cli,
        &settings,
        prompter.as_mut(),
        &mut io::stdout(),
        &mut io::stderr(),
    );
    ExitCode::from(code)
}
