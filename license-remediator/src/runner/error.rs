//! Runner error types.

use crate::gateway::GatewayError;
use crate::repositories::RepositoryError;

/// Errors that abort a whole remediation run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// A required input was empty.
    #[error("The {field} is required")]
    InvalidInput { field: &'static str },

    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// The pull request title or body does not render.
    #[error("Invalid pull request template: {0}")]
    Template(#[from] crate::templates::TemplateError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// Listing the organization's repositories failed.
    #[error("Error getting the list of repositories for '{organization}': {source}")]
    Listing {
        organization: String,
        #[source]
        source: RepositoryError,
    },
}
