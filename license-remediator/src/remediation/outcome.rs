//! Pipeline progress and outcome types.

use std::fmt;

/// Furthest step a pipeline has completed.
///
/// Stages only ever advance; a failed step leaves the stage where it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PipelineStage {
    Start,
    HeadResolved,
    BranchCreated,
    LicenseCommitted,
    PullRequestOpened,
}

impl PipelineStage {
    /// Returns the stage as a string for logging.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::HeadResolved => "head_resolved",
            Self::BranchCreated => "branch_created",
            Self::LicenseCommitted => "license_committed",
            Self::PullRequestOpened => "pull_request_opened",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a repository's pipeline ended.
#[derive(Debug, Clone)]
pub enum PipelineOutcome {
    /// The pull request was opened.
    Opened {
        /// Repository name.
        repository: String,
        /// Branch proposed for merging.
        branch: String,
    },

    /// The pipeline stopped before any write because there was nothing to
    /// branch from.
    Skipped {
        /// Repository name.
        repository: String,
        /// Reason for skipping.
        reason: String,
    },

    /// A step failed; `stage` is the last step that completed.
    Failed {
        /// Repository name.
        repository: String,
        /// Last completed stage.
        stage: PipelineStage,
        /// Error message.
        error: String,
    },
}
