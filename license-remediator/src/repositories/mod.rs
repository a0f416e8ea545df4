//! Repository listing for an organization.
//!
//! The listing is fetched once per run and never re-fetched.

mod error;
mod repository;

pub use error::RepositoryError;
pub use repository::{LicenseDescriptor, Repository};

use crate::gateway::GitHubGateway;
use tracing::{debug, info};

/// Lists the repositories of `organization` with a single API call.
///
/// # Errors
///
/// Returns [`RepositoryError`] if the call fails or the response is not a
/// list of repositories.
pub async fn list_repositories<G: GitHubGateway>(
    gateway: &G,
    organization: &str,
) -> Result<Vec<Repository>, RepositoryError> {
    info!(organization, "Getting the list of repositories in the organization");

    let response = gateway.list_repositories(organization).await?;
    let repositories = parse_repositories(organization, response)?;

    debug!(organization, count = repositories.len(), "Listed repositories");
    Ok(repositories)
}

fn parse_repositories(
    organization: &str,
    response: serde_json::Value,
) -> Result<Vec<Repository>, RepositoryError> {
    serde_json::from_value(response).map_err(|source| RepositoryError::Decode {
        organization: organization.to_string(),
        source,
    })
}
