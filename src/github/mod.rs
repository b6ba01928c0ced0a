// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Currently implements:
// - Building the /users/{username}/events URL
// - Fetching it once and classifying the HTTP outcome
// - Decoding the JSON feed into typed events
//
// Not handled on purpose: pagination, authentication, retries.
// =============================================================================

mod event;
mod fetch;

// Re-export the public API so callers can write `github::fetch_events()`
pub use event::{Event, EventKind};
pub use fetch::{build_client, fetch_events, FetchError};
