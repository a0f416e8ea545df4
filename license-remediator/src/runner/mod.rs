//! Orchestrates a license remediation run across an organization.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::gateway::{GitHubGateway, OctocrabGateway};
use crate::remediation::{LicensePipeline, PipelineContext};
use crate::repositories::list_repositories;
use crate::summary::RunSummary;
use crate::templates::{generate_branch_name, TemplateRenderer};
use futures::future::join_all;
use tracing::{error, info};

/// Orchestrates a full remediation run.
pub struct Runner<G = OctocrabGateway> {
    config: RunnerConfig,
    gateway: G,
    renderer: TemplateRenderer,
}

impl Runner<OctocrabGateway> {
    /// Builds a runner that talks to GitHub through octocrab.
    ///
    /// Inputs are validated before the client is built.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::InvalidInput`] for an empty organization or
    /// token, or [`RunnerError::Gateway`] if the client cannot be built.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        config.validate()?;
        let gateway =
            OctocrabGateway::new(config.token(), config.settings().api_base_uri.as_deref())?;
        Self::with_gateway(config, gateway)
    }
}

impl<G: GitHubGateway> Runner<G> {
    /// Builds a runner on top of an existing gateway.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::InvalidInput`] for an empty organization or
    /// token, or [`RunnerError::Template`] if the pull request title or body
    /// cannot be rendered.
    pub fn with_gateway(config: RunnerConfig, gateway: G) -> Result<Self, RunnerError> {
        config.validate()?;
        let renderer = TemplateRenderer::new();

        // Catch broken pull request templates before any repository is written to.
        let settings = config.settings();
        let sample = PipelineContext::new(config.organization(), "repository", "base")
            .with_branch(&generate_branch_name(0));
        renderer.render_pull_request(
            &settings.pull_request_title,
            &settings.pull_request_body,
            &sample,
        )?;

        Ok(Self {
            config,
            gateway,
            renderer,
        })
    }

    /// Returns the gateway the runner talks to GitHub through.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Executes the full remediation flow.
    ///
    /// Every repository without a license gets its own pipeline. Pipelines
    /// run concurrently and the run returns once all of them have settled.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Listing`] if the repositories cannot be listed;
    /// no repository is touched in that case. Pipeline failures never surface
    /// here, they are counted in the returned [`RunSummary`].
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let organization = self.config.organization();
        let settings = self.config.settings();

        let repositories = match list_repositories(&self.gateway, organization).await {
            Ok(repositories) => repositories,
            Err(e) => {
                error!(
                    organization,
                    error = %e,
                    "There was an error getting the list of repositories for the organization"
                );
                return Err(RunnerError::Listing {
                    organization: organization.to_string(),
                    source: e,
                });
            }
        };

        let mut summary = RunSummary::new();
        summary.repositories_listed = repositories.len();

        let mut pipelines = Vec::new();
        for repo in &repositories {
            info!(repo = %repo.name, visibility = repo.visibility(), "Inspecting repository");

            if !repo.needs_license() {
                info!(repo = %repo.name, "Repository already has a license");
                summary.already_licensed += 1;
                continue;
            }

            info!(repo = %repo.name, "Repository does not yet have a license. It will be added");
            let base = settings.base_branch_for(repo.default_branch.as_deref());
            let context = PipelineContext::new(organization, repo.name.as_str(), base);
            pipelines.push(
                LicensePipeline::new(&self.gateway, settings, &self.renderer, context).run(),
            );
        }

        for outcome in join_all(pipelines).await {
            summary.record_outcome(&outcome);
        }

        info!(
            organization,
            opened = summary.pull_requests_opened,
            failed = summary.failed,
            "Remediation run complete"
        );
        Ok(summary)
    }
}
