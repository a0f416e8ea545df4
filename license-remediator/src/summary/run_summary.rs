//! Run summary types.

use crate::remediation::PipelineOutcome;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of repositories returned by the listing.
    pub repositories_listed: usize,

    /// Number of repositories that already had a license.
    pub already_licensed: usize,

    /// Number of pull requests opened.
    pub pull_requests_opened: usize,

    /// Number of pipelines that stopped without writing anything.
    pub skipped: usize,

    /// Number of pipelines that failed at some step.
    pub failed: usize,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the summary with a pipeline outcome.
    pub fn record_outcome(&mut self, outcome: &PipelineOutcome) {
        match outcome {
            PipelineOutcome::Opened { .. } => self.pull_requests_opened += 1,
            PipelineOutcome::Skipped { .. } => self.skipped += 1,
            PipelineOutcome::Failed { .. } => self.failed += 1,
        }
    }

    /// Returns the number of pipelines that were launched.
    #[must_use]
    pub fn pipelines_launched(&self) -> usize {
        self.pull_requests_opened + self.skipped + self.failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remediation::PipelineStage;

    #[test]
    fn can_record_outcomes() {
        let mut summary = RunSummary::new();

        summary.record_outcome(&PipelineOutcome::Opened {
            repository: "web".to_string(),
            branch: "license-branch-1".to_string(),
        });
        summary.record_outcome(&PipelineOutcome::Skipped {
            repository: "empty".to_string(),
            reason: "no branch head".to_string(),
        });
        summary.record_outcome(&PipelineOutcome::Failed {
            repository: "infra".to_string(),
            stage: PipelineStage::HeadResolved,
            error: "422".to_string(),
        });

        assert_eq!(summary.pull_requests_opened, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.pipelines_launched(), 3);
    }
}
