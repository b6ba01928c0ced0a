// src/report/mod.rs
// =============================================================================
// This module prints the activity report.
//
// Output shape:
//
//   Recent Activity for octocat:
//
//   - Pushed 3 commit(s) to octocat/hello
//   - Started watching rust-lang/rust
//
// Everything is written to a generic `impl Write` so tests can capture the
// output in a Vec<u8> instead of stdout.
// =============================================================================

mod line;

use std::io::{self, Write};

use crate::github::{Event, FetchError};

pub use line::describe;

// Writes the header and one "- ..." line per event, in feed order
pub fn write_report<W: Write>(out: &mut W, username: &str, events: &[Event]) -> io::Result<()> {
    writeln!(out, "Recent Activity for {}:", username)?;
    writeln!(out)?;

    if events.is_empty() {
        writeln!(out, "No recent public activity found.")?;
        return Ok(());
    }

    for event in events {
        writeln!(out, "- {}", describe(event))?;
    }

    Ok(())
}

// Writes the single line shown when fetching or decoding failed
pub fn write_failure<W: Write>(out: &mut W, error: &FetchError) -> io::Result<()> {
    writeln!(out, "Error: {}", error)
}
