// src/config.rs
// =============================================================================
// Runtime configuration for talking to the GitHub API.
//
// There is very little to configure:
// - api_base: where the REST API lives (https://api.github.com by default,
//   overridable with GITHUB_API_URL for GitHub Enterprise or local testing)
// - user_agent: GitHub rejects API requests that don't send one
// =============================================================================

use anyhow::{anyhow, Context, Result};
use url::Url;

/// Public GitHub REST API endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Environment variable that overrides [`DEFAULT_API_BASE`].
pub const API_BASE_ENV: &str = "GITHUB_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base: Url,
    pub user_agent: String,
}

impl Config {
    /// Builds a config pointing at the given API base URL.
    pub fn new(api_base: &str) -> Result<Self> {
        let api_base = Url::parse(api_base)
            .with_context(|| format!("Invalid GitHub API URL: {}", api_base))?;

        // We append path segments to the base later on, so it must be a
        // hierarchical URL like https://host/..., not mailto: or data:
        if api_base.cannot_be_a_base() {
            return Err(anyhow!("GitHub API URL cannot carry a path: {}", api_base));
        }

        Ok(Self {
            api_base,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        })
    }

    /// Reads the config from the environment, falling back to the public API.
    pub fn from_env() -> Result<Self> {
        match std::env::var(API_BASE_ENV) {
            Ok(base) if !base.trim().is_empty() => {
                tracing::debug!("Using API base from {}: {}", API_BASE_ENV, base);
                Self::new(base.trim())
            }
            _ => Self::new(DEFAULT_API_BASE),
        }
    }
}
