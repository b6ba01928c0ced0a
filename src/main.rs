// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up diagnostics (tracing to stderr, controlled by RUST_LOG)
// 2. Parse the command line: exactly one username
// 3. Fetch the user's public events from GitHub
// 4. Print the report (or a single error line) to stdout
// 5. Exit with proper code (0 = report printed, 1 = fetch failed, 2 = usage/internal error)
//
// Rust concepts used:
// - async/await: reqwest is async, so main runs on a tokio runtime
// - Result<T, E>: For error handling (T = success type, E = error type)
// - Generics: the report is written to any `impl Write`, stdout in practice
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod config;        // src/config.rs - API base URL and user agent
mod github;        // src/github/ - talking to the GitHub API
mod report;        // src/report/ - turning events into text

use std::io::{self, Write};

use anyhow::Result;
use tracing::warn;
use tracing_subscriber::{prelude::*, EnvFilter};

use config::Config;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    if let Err(e) = init_tracing() {
        eprintln!("Warning: could not set up logging: {:#}", e);
    }

    // A usage error prints clap's message and exits with code 2
    let cli = match cli::parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    let exit_code = match run(&cli.username).await {
        Ok(code) => code,
        Err(e) => {
            // Something outside the normal failure modes (bad config, stdout closed...)
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Sends tracing output to stderr so it never mixes with the report
//
// Quiet by default; RUST_LOG=gh_activity=debug shows the request details.
// Without RUST_LOG only our own warnings show up, not hyper's or reqwest's.
fn init_tracing() -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let filter = log_filter(&rust_log)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init()?;

    Ok(())
}

// Builds the log filter from a RUST_LOG-style string, falling back to
// warnings from this crate only when it's empty
fn log_filter(directives: &str) -> Result<EnvFilter> {
    Ok(EnvFilter::builder()
        .with_default_directive("gh_activity=warn".parse()?)
        .parse_lossy(directives))
}

// Returns:
//   Ok(0) = report printed (possibly "no activity")
//   Ok(1) = the fetch failed and the reason was printed
//   Err = unexpected error
async fn run(username: &str) -> Result<i32> {
    let config = Config::from_env()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let code = report_activity(&config, username, &mut out).await?;
    out.flush()?;

    Ok(code)
}

// Fetches the feed for `username` and writes either the report or the
// error line to `out`. Nothing is printed for the events unless the whole
// fetch and decode succeeded.
async fn report_activity<W: Write>(config: &Config, username: &str, out: &mut W) -> Result<i32> {
    let client = github::build_client(config)?;

    match github::fetch_events(&client, config, username).await {
        Ok(events) => {
            report::write_report(out, username, &events)?;
            Ok(0)
        }
        Err(e) => {
            warn!(username, error = ?e, "could not fetch activity");
            report::write_failure(out, &e)?;
            Ok(1)
        }
    }
}
