#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod gateway;
pub mod remediation;
pub mod repositories;
pub mod runner;
pub mod summary;
pub mod templates;

pub use config::{load_settings, ConfigError, RemediationSettings};
pub use gateway::{routes, GatewayError, GitHubGateway, Method, OctocrabGateway};
pub use remediation::{
    commit_license, create_branch, open_pull_request, resolve_head, LicensePipeline,
    PipelineContext, PipelineOutcome, PipelineStage, RemediationError,
};
pub use repositories::{list_repositories, LicenseDescriptor, Repository, RepositoryError};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use summary::RunSummary;
pub use templates::{
    encode_content, generate_branch_name, render_license, PullRequestText, TemplateError,
    TemplateRenderer,
};

/// Proposes a license to every unlicensed repository of `organization`.
///
/// Shorthand for building a [`Runner`] with default settings and running it.
///
/// # Errors
///
/// Returns [`RunnerError::InvalidInput`] before any network call when either
/// argument is empty, and [`RunnerError::Listing`] when the repositories
/// cannot be listed.
pub async fn remediate(organization: &str, token: &str) -> Result<RunSummary, RunnerError> {
    Runner::new(RunnerConfig::new(organization, token))?
        .run()
        .await
}
