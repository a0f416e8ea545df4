//! The per-repository license pipeline.
//!
//! For one repository lacking a license this module:
//! 1. Resolves the head sha of the repository's first branch
//! 2. Creates a `license-branch-<epoch-millis>` branch at that sha
//! 3. Commits the rendered license template as `LICENSE` on the new branch
//! 4. Opens a pull request from the new branch into the base branch
//!
//! Each step needs the previous step's result, so a failed step ends the
//! pipeline. Side effects already made on GitHub are left in place.

mod context;
mod error;
mod outcome;

pub use context::PipelineContext;
pub use error::RemediationError;
pub use outcome::{PipelineOutcome, PipelineStage};

use crate::config::RemediationSettings;
use crate::gateway::{routes, GitHubGateway};
use crate::templates::{
    branch_ref, encode_content, generate_branch_name, render_license, PullRequestText,
    TemplateRenderer,
};
use chrono::{Datelike, Local, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, info, info_span, warn, Instrument};

/// File the license is written to.
pub const LICENSE_PATH: &str = "LICENSE";

/// One entry of `/git/refs/heads`.
#[derive(Debug, Deserialize)]
struct HeadRef {
    #[serde(default)]
    object: Option<RefObject>,
}

#[derive(Debug, Deserialize)]
struct RefObject {
    #[serde(default)]
    sha: Option<String>,
}

/// License template as returned by `/licenses/{key}`.
#[derive(Debug, Deserialize)]
struct LicenseTemplate {
    body: String,
}

/// Drives one repository through the remediation steps.
pub struct LicensePipeline<'a, G> {
    gateway: &'a G,
    settings: &'a RemediationSettings,
    renderer: &'a TemplateRenderer,
    context: PipelineContext,
    stage: PipelineStage,
}

impl<'a, G: GitHubGateway> LicensePipeline<'a, G> {
    /// Creates a pipeline in the [`PipelineStage::Start`] stage.
    pub fn new(
        gateway: &'a G,
        settings: &'a RemediationSettings,
        renderer: &'a TemplateRenderer,
        context: PipelineContext,
    ) -> Self {
        Self {
            gateway,
            settings,
            renderer,
            context,
            stage: PipelineStage::Start,
        }
    }

    /// Runs the pipeline to completion. Never fails: errors are logged and
    /// reported through the returned [`PipelineOutcome`].
    pub async fn run(mut self) -> PipelineOutcome {
        let span = info_span!("remediate", repo = %self.context.repository);

        async move {
            let sha = match resolve_head(self.gateway, &self.context).await {
                Ok(Some(sha)) => sha,
                Ok(None) => {
                    warn!("Repository has no branch head to branch from, skipping");
                    return PipelineOutcome::Skipped {
                        repository: self.context.repository.clone(),
                        reason: "no branch head with a commit sha".to_string(),
                    };
                }
                Err(e) => return self.fail(e),
            };
            self.stage = PipelineStage::HeadResolved;

            let branch = generate_branch_name(Utc::now().timestamp_millis());
            let text = match self.renderer.render_pull_request(
                &self.settings.pull_request_title,
                &self.settings.pull_request_body,
                &self.context.with_branch(&branch),
            ) {
                Ok(text) => text,
                Err(e) => return self.fail(e.into()),
            };

            if let Err(e) = create_branch(self.gateway, &self.context, &branch, &sha).await {
                return self.fail(e);
            }
            info!(branch = %branch, "Created branch successfully");
            self.context.branch = Some(branch.clone());
            self.stage = PipelineStage::BranchCreated;

            let year = Local::now().year();
            if let Err(e) =
                commit_license(self.gateway, &self.context, self.settings, &branch, year).await
            {
                return self.fail(e);
            }
            info!("Created the license file");
            self.stage = PipelineStage::LicenseCommitted;

            if let Err(e) = open_pull_request(self.gateway, &self.context, &text).await {
                return self.fail(e);
            }
            info!("Successfully created the pull request");
            self.stage = PipelineStage::PullRequestOpened;

            PipelineOutcome::Opened {
                repository: self.context.repository.clone(),
                branch,
            }
        }
        .instrument(span)
        .await
    }

    fn fail(&self, e: RemediationError) -> PipelineOutcome {
        error!(
            stage = %self.stage,
            status = ?e.status(),
            error = %e,
            "Remediation stopped"
        );
        PipelineOutcome::Failed {
            repository: self.context.repository.clone(),
            stage: self.stage,
            error: e.to_string(),
        }
    }
}

/// Reads the repository's branch heads and returns the sha of the first one.
///
/// Returns `Ok(None)` when there is no head, or the first head carries no sha.
///
/// # Errors
///
/// Returns [`RemediationError::ResolveHead`] if the call fails.
pub async fn resolve_head<G: GitHubGateway>(
    gateway: &G,
    context: &PipelineContext,
) -> Result<Option<String>, RemediationError> {
    let route = routes::branch_heads(&context.organization, &context.repository);
    let response = gateway
        .get(&route)
        .await
        .map_err(RemediationError::ResolveHead)?;
    let heads: Vec<HeadRef> = decode(&route, response)?;

    Ok(heads
        .into_iter()
        .next()
        .and_then(|head| head.object)
        .and_then(|object| object.sha)
        .filter(|sha| !sha.is_empty()))
}

/// Creates `branch` pointing at `sha`.
///
/// # Errors
///
/// Returns [`RemediationError::CreateBranch`] if the call fails.
pub async fn create_branch<G: GitHubGateway>(
    gateway: &G,
    context: &PipelineContext,
    branch: &str,
    sha: &str,
) -> Result<(), RemediationError> {
    let route = routes::git_refs(&context.organization, &context.repository);
    let body = json!({
        "ref": branch_ref(branch),
        "sha": sha,
    });

    gateway
        .post(&route, &body)
        .await
        .map_err(RemediationError::CreateBranch)?;
    Ok(())
}

/// Fetches the license template, renders it for `year` and the organization,
/// and writes it as [`LICENSE_PATH`] on `branch`.
///
/// # Errors
///
/// Returns [`RemediationError::FetchTemplate`] or
/// [`RemediationError::CommitLicense`] depending on which call fails.
pub async fn commit_license<G: GitHubGateway>(
    gateway: &G,
    context: &PipelineContext,
    settings: &RemediationSettings,
    branch: &str,
    year: i32,
) -> Result<(), RemediationError> {
    let response = gateway
        .get_license_template(&settings.license)
        .await
        .map_err(RemediationError::FetchTemplate)?;
    let template: LicenseTemplate = decode(&routes::license(&settings.license), response)?;

    let text = render_license(&template.body, year, &context.organization);
    let route = routes::contents(&context.organization, &context.repository, LICENSE_PATH);
    let body = json!({
        "branch": branch,
        "message": settings.commit_message,
        "content": encode_content(&text),
    });

    gateway
        .put(&route, &body)
        .await
        .map_err(RemediationError::CommitLicense)?;
    Ok(())
}

/// Opens a pull request with `text` from the context's branch into its base.
///
/// # Errors
///
/// Returns [`RemediationError::OpenPullRequest`] if the call fails.
pub async fn open_pull_request<G: GitHubGateway>(
    gateway: &G,
    context: &PipelineContext,
    text: &PullRequestText,
) -> Result<(), RemediationError> {
    let route = routes::pulls(&context.organization, &context.repository);
    let body = json!({
        "title": text.title,
        "body": text.body,
        "head": context.branch,
        "base": context.base,
    });

    gateway
        .post(&route, &body)
        .await
        .map_err(RemediationError::OpenPullRequest)?;
    Ok(())
}

fn decode<T: DeserializeOwned>(route: &str, response: Value) -> Result<T, RemediationError> {
    serde_json::from_value(response).map_err(|source| RemediationError::UnexpectedResponse {
        route: route.to_string(),
        source,
    })
}
