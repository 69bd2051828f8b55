// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The whole CLI is one required positional argument (the GitHub username)
// plus two optional flags:
// - --api-url: which GitHub REST API to talk to (GitHub Enterprise, mocks)
// - -v/--verbose: how much diagnostic logging to print on stderr
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - Value parsers: Let clap validate arguments before we ever see them
// =============================================================================

use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use tracing::Level;
use url::Url;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "github-activity",
    version,
    about = "CLI to fetch GitHub user activity",
    long_about = "github-activity prints a short summary of the ten most recent public \
                  events of a GitHub user: pushes, new branches, issues, pull requests, stars and more."
)]
pub struct Cli {
    /// GitHub username whose recent activity should be fetched
    ///
    /// Example: github-activity octocat
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub username: String,

    /// Base URL of the GitHub REST API
    #[arg(long, value_name = "URL", default_value = "https://api.github.com")]
    pub api_url: Url,

    /// Print diagnostic logs to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Maps the number of -v flags to the most verbose level we should log
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does NonEmptyStringValueParser do?
//    - clap runs it while parsing, so `github-activity ""` is rejected with a
//      normal usage error instead of reaching the network code
//
// 2. Why is api_url a Url and not a String?
//    - Url implements FromStr, so clap parses it for us
//    - A malformed --api-url fails at the command line, not mid-request
//
// 3. What is ArgAction::Count?
//    - Each occurrence of the flag adds one: -vv gives verbose == 2
// -----------------------------------------------------------------------------
