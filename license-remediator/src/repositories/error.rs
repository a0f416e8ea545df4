//! Repository listing error types.

use crate::gateway::GatewayError;
use thiserror::Error;

/// Errors that can occur while listing an organization's repositories.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// GitHub API error.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// The listing response did not have the expected shape.
    #[error("Unexpected repository listing for '{organization}': {source}")]
    Decode {
        organization: String,
        #[source]
        source: serde_json::Error,
    },
}
