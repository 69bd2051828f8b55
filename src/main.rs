// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr, quiet unless -v is given)
// 3. Fetch the user's public events from GitHub
// 4. Print a summary of the first 10, or the error on stderr
//
// Failures are reported on stderr and the process still exits with code 0.
//
// Rust concepts used:
// - async/await: The HTTP request is asynchronous
// - Result<T, E>: For error handling (T = success type, E = error type)
// - Generic writers: So tests can capture what would go to stdout/stderr
// =============================================================================

// Module declarations - tells Rust about our other source files
mod activity; // src/activity/ - turning events into text
mod cli; // src/cli.rs - command-line parsing
mod github; // src/github/ - fetching and decoding the event feed

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use github::EventFetcher;
use tracing_subscriber::FmtSubscriber;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version and usage errors
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
    }
}

// Sets up logging and the fetcher, then prints the report
async fn run(cli: Cli) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level())
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let fetcher = EventFetcher::new(cli.api_url)?;

    report_activity(&fetcher, &cli.username, &mut io::stdout(), &mut io::stderr()).await
}

// Fetches the feed and writes either the summary or the error message
//
// Parameters:
//   fetcher: where to get the events from
//   username: whose events to fetch
//   out: receives the summary lines (stdout in the real program)
//   err: receives the error message (stderr in the real program)
//
// Returns: Err only if writing to `out`/`err` fails
async fn report_activity<W: Write, E: Write>(
    fetcher: &EventFetcher,
    username: &str,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    match fetcher.fetch_user_events(username).await {
        Ok(events) => {
            for line in activity::summarize(username, &events) {
                writeln!(out, "{}", line)?;
            }
        }
        Err(e) => {
            tracing::debug!(error = ?e, "fetching event feed failed");
            writeln!(err, "Error fetching GitHub activity: {}", e)?;
        }
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why do we print errors instead of returning a non-zero exit code?
//    - The tool mirrors the behaviour of the original github-activity CLI:
//      the message is printed and the process ends normally
//
// 2. Why are `out` and `err` generic (W: Write)?
//    - In main they are stdout/stderr
//    - In tests they are Vec<u8> buffers we can inspect afterwards
//
// 3. What does {:#} do with an anyhow::Error?
//    - It prints the error together with its causes on one line
// -----------------------------------------------------------------------------
