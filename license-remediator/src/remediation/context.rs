//! Per-pipeline context.

use serde::Serialize;

/// Everything one repository's pipeline needs to know about where it works.
///
/// Built once per repository and threaded through every step. The branch is
/// filled in after the branch has been created.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineContext {
    /// Organization owning the repository.
    pub organization: String,

    /// Repository name.
    pub repository: String,

    /// Branch the pull request targets.
    pub base: String,

    /// Branch carrying the license commit, once created.
    pub branch: Option<String>,
}

impl PipelineContext {
    /// Creates a context for a pipeline that has not created its branch yet.
    pub fn new(
        organization: impl Into<String>,
        repository: impl Into<String>,
        base: impl Into<String>,
    ) -> Self {
        Self {
            organization: organization.into(),
            repository: repository.into(),
            base: base.into(),
            branch: None,
        }
    }

    /// Returns a copy of this context working on `branch`.
    #[must_use]
    pub fn with_branch(&self, branch: &str) -> Self {
        Self {
            branch: Some(branch.to_string()),
            ..self.clone()
        }
    }
}
