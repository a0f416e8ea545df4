//! Runner configuration.

use super::RunnerError;
use crate::config::RemediationSettings;

/// Configuration for a remediation run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Organization whose repositories are remediated.
    organization: String,
    /// GitHub token used for every API call.
    token: String,
    /// Workflow settings.
    settings: RemediationSettings,
}

impl RunnerConfig {
    /// Creates a configuration with default settings.
    pub fn new(organization: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            token: token.into(),
            settings: RemediationSettings::default(),
        }
    }

    /// Replaces the workflow settings.
    #[must_use]
    pub fn with_settings(mut self, settings: RemediationSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Checks that the organization and token are present.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::InvalidInput`] naming the first missing field.
    pub fn validate(&self) -> Result<(), RunnerError> {
        if self.organization.trim().is_empty() {
            return Err(RunnerError::InvalidInput {
                field: "organization name",
            });
        }
        if self.token.trim().is_empty() {
            return Err(RunnerError::InvalidInput {
                field: "authorization token",
            });
        }
        Ok(())
    }

    /// Returns the organization name.
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the workflow settings.
    pub fn settings(&self) -> &RemediationSettings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_organization() {
        let result = RunnerConfig::new("", "token").validate();
        assert!(matches!(
            result,
            Err(RunnerError::InvalidInput { field: "organization name" })
        ));
    }

    #[test]
    fn rejects_missing_token() {
        let result = RunnerConfig::new("acme", " ").validate();
        assert!(matches!(
            result,
            Err(RunnerError::InvalidInput { field: "authorization token" })
        ));
    }

    #[test]
    fn accepts_complete_config() {
        assert!(RunnerConfig::new("acme", "token").validate().is_ok());
    }
}
