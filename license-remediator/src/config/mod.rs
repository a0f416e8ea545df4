//! Configuration loading.
//!
//! Remediation settings come from an optional TOML file; anything it leaves
//! out falls back to the stock MIT remediation.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{
    default_commit_message, default_license, default_pull_request_body,
    default_pull_request_title, RemediationSettings, FALLBACK_BASE_BRANCH,
};

use std::path::Path;

/// Loads settings from `path`, or returns the defaults when no path is given.
///
/// # Errors
///
/// Returns [`ConfigError`] if a path is given and the file cannot be loaded.
pub fn load_settings(path: Option<&Path>) -> Result<RemediationSettings, ConfigError> {
    match path {
        Some(path) => RemediationSettings::load(path),
        None => Ok(RemediationSettings::default()),
    }
}
