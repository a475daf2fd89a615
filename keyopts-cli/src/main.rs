//! CLI entrypoint for `keyopts`.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use keyopts::process_envp;
use keyopts_cli::{Args, CliError, resolve, write_report};
use tracing_subscriber::EnvFilter;

/// Exit status for failures outside resolution.
const CLI_FAILURE: u8 = 3;

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.debug);
    match run(&args) {
        Ok(status) => ExitCode::from(status),
        Err(err) => {
            tracing::error!(error = %err, "keyopts failed");
            ExitCode::from(CLI_FAILURE)
        }
    }
}

fn run(args: &Args) -> Result<u8, CliError> {
    let report = resolve(args, &process_envp())?;
    write_report(
        &report,
        args.format,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;
    Ok(report.status())
}

/// `--debug` wins over `KEYOPTS_LOG`; the default level is `warn`.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("KEYOPTS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
