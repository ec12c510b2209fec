mod cli;

use std::io;
use std::process::ExitCode;

use tracing::error;
use vk_core::Result;

use crate::cli::{Cli, LogLevel};
use visitkit::Session;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level);

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "visitkit failed");
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing subscriber.
fn init_tracing(level: LogLevel) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_tracing_level().to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Run every configured visitor over every collection and print the reports.
///
/// Rejected elements abort only their own batch and show up in the report;
/// only bad arguments make this fail.
fn execute(cli: &Cli) -> Result<()> {
    for line in report_lines(cli)? {
        println!("{line}");
    }
    Ok(())
}

fn report_lines(cli: &Cli) -> Result<Vec<String>> {
    let collections = cli.collections()?;
    let mut session = Session::new(cli.session_config()?);
    let reports = session.run_all(&collections);
    Ok(session.render(&reports))
}
