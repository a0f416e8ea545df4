//! Remediation pipeline error types.

use crate::gateway::GatewayError;
use crate::templates::TemplateError;
use thiserror::Error;

/// Errors that end a single repository's pipeline.
#[derive(Debug, Error)]
pub enum RemediationError {
    /// Reading the branch heads failed.
    #[error("Error getting head info about the repository: {0}")]
    ResolveHead(#[source] GatewayError),

    /// Creating the license branch failed.
    #[error("Error creating the branch: {0}")]
    CreateBranch(#[source] GatewayError),

    /// Fetching the license template failed.
    #[error("Error getting the license template: {0}")]
    FetchTemplate(#[source] GatewayError),

    /// Writing the license file failed.
    #[error("Error creating the license file: {0}")]
    CommitLicense(#[source] GatewayError),

    /// Opening the pull request failed.
    #[error("Error creating the pull request: {0}")]
    OpenPullRequest(#[source] GatewayError),

    /// Rendering the pull request text failed.
    #[error("Error rendering the pull request text: {0}")]
    Template(#[from] TemplateError),

    /// A response did not have the expected shape.
    #[error("Unexpected response from {route}: {source}")]
    UnexpectedResponse {
        route: String,
        #[source]
        source: serde_json::Error,
    },
}

impl RemediationError {
    /// Returns the HTTP status when GitHub rejected the failed call.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ResolveHead(e)
            | Self::CreateBranch(e)
            | Self::FetchTemplate(e)
            | Self::CommitLicense(e)
            | Self::OpenPullRequest(e) => e.status(),
            Self::Template(_) | Self::UnexpectedResponse { .. } => None,
        }
    }
}
