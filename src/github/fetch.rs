// src/github/fetch.rs
// =============================================================================
// This module fetches a user's public events from the GitHub REST API.
//
// Strategy:
// - Build https://api.github.com/users/{username}/events
// - One GET request, no auth, default page size
// - Sort the outcome into the handful of failures we report to the user
// - Decode the body into typed events (see event.rs)
//
// Rust concepts:
// - async functions: For network I/O
// - Custom error enums with thiserror: each failure mode is its own variant
// - match on status codes
// =============================================================================

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;
use url::Url;

use super::event::{parse_events, Event};
use crate::config::Config;

// Everything that can go wrong between sending the request and holding a
// list of events. The Display text is what the user sees after "Error: ".
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS, connection refused, timeout, TLS...
    #[error("Could not reach GitHub API. Reason: {0}")]
    Connectivity(#[source] reqwest::Error),

    /// HTTP 404: the user doesn't exist
    #[error("Could not find GitHub user '{0}'.")]
    NotFound(String),

    /// Any other non-200 status
    #[error("Received status code {0} from GitHub API.")]
    UnexpectedStatus(u16),

    /// The connection broke while we were reading the body
    #[error("Failed to read response body. Reason: {0}")]
    ResponseRead(#[source] reqwest::Error),

    /// Body is not a JSON array of events
    #[error("Failed to parse the response from the GitHub API. Reason: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid GitHub API URL: {0}")]
    InvalidBaseUrl(Url),
}

// Creates the HTTP client used for the request
//
// GitHub answers 403 to requests without a User-Agent, so we always set one.
pub fn build_client(config: &Config) -> reqwest::Result<Client> {
    Client::builder().user_agent(config.user_agent.as_str()).build()
}

// Builds the events URL for a user
//
// The username is pushed as a single path segment, so anything odd in it
// (slashes, spaces, ...) gets percent-encoded instead of changing the path.
//
// "." and ".." are the exception: URL parsing folds them (and their %2E
// spellings) away, which would turn the request into GET /users/events.
// GitHub logins only use letters, digits and hyphens, so no such user can
// exist and we answer with the same NotFound a 404 would give.
//
// Example:
//   ("https://api.github.com", "octocat") -> https://api.github.com/users/octocat/events
pub fn events_url(api_base: &Url, username: &str) -> Result<Url, FetchError> {
    if matches!(username, "." | "..") {
        return Err(FetchError::NotFound(username.to_string()));
    }

    let mut url = api_base.clone();
    url.path_segments_mut()
        .map_err(|_| FetchError::InvalidBaseUrl(api_base.clone()))?
        .pop_if_empty()
        .extend(["users", username, "events"]);
    Ok(url)
}

// Fetches and decodes the public events of `username`
//
// Returns: the events in the order the API sent them
pub async fn fetch_events(
    client: &Client,
    config: &Config,
    username: &str,
) -> Result<Vec<Event>, FetchError> {
    let url = events_url(&config.api_base, username)?;
    debug!("GET {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(FetchError::Connectivity)?;

    let status = response.status();
    debug!("GitHub API answered {}", status);

    match status {
        StatusCode::OK => {}
        StatusCode::NOT_FOUND => return Err(FetchError::NotFound(username.to_string())),
        other => return Err(FetchError::UnexpectedStatus(other.as_u16())),
    }

    // Reading the body consumes the response, so it's released on every path
    let body = response.bytes().await.map_err(FetchError::ResponseRead)?;
    let events = parse_events(&body)?;

    debug!("Decoded {} event(s)", events.len());
    Ok(events)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why an error enum instead of anyhow here?
//    - The caller needs to know WHICH failure happened (404 vs 500 vs no network)
//    - An enum lets tests match on the exact variant
//    - #[error("...")] from thiserror generates the Display text for each case
//
// 2. What does .map_err(FetchError::Connectivity) do?
//    - Enum variants with one field are also functions: reqwest::Error -> FetchError
//    - map_err applies it to the error side of the Result only
//
// 3. What is #[from]?
//    - It generates `impl From<serde_json::Error> for FetchError`
//    - That's what lets `parse_events(&body)?` convert the error automatically
// -----------------------------------------------------------------------------
