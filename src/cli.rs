// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The interface is deliberately tiny: one positional argument, the GitHub
// username whose activity we want to print. No flags besides the --help and
// --version that clap gives us for free.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - Result: Parsing returns an error value instead of killing the process
// =============================================================================

use clap::Parser;
use std::ffi::OsString;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(
    name = "gh-activity",
    version,
    about = "Print a summary of a GitHub user's recent public activity",
    long_about = "gh-activity fetches the public event feed of a GitHub user and prints \
                  one human-readable line per event, in the order GitHub returns them."
)]
pub struct Cli {
    /// GitHub username (e.g., torvalds)
    ///
    /// This is a positional argument (required, no flag needed)
    pub username: String,
}

// Parses an argument list into a Cli
//
// Parameters:
//   args: the full argument list, including the program name at index 0
//
// Returns: Ok(Cli) on success, or a clap::Error describing the usage problem.
// The caller decides whether to print it and exit; nothing here terminates
// the process.
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args)
}
