//! Remediation settings loaded from an optional TOML file.

use crate::config::ConfigError;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Tunable parts of the remediation workflow.
///
/// Every field has a default, so an empty file (or no file at all) yields the
/// stock MIT remediation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RemediationSettings {
    /// License template key requested from `/licenses/{key}`.
    #[serde(default = "default_license")]
    pub license: String,

    /// Commit message used when writing the `LICENSE` file.
    #[serde(default = "default_commit_message")]
    pub commit_message: String,

    /// Handlebars format for pull request titles.
    #[serde(default = "default_pull_request_title")]
    pub pull_request_title: String,

    /// Handlebars format for pull request bodies.
    #[serde(default = "default_pull_request_body")]
    pub pull_request_body: String,

    /// Base branch for every pull request. When unset, each repository's
    /// default branch is used, falling back to [`FALLBACK_BASE_BRANCH`].
    #[serde(default)]
    pub base_branch: Option<String>,

    /// GitHub API base URI. When unset, the public API is used.
    #[serde(default)]
    pub api_base_uri: Option<String>,
}

/// Base branch used when neither the settings nor the listing name one.
pub const FALLBACK_BASE_BRANCH: &str = "master";

/// Returns the default license key.
#[must_use]
pub fn default_license() -> String {
    "mit".to_string()
}

/// Returns the default commit message.
#[must_use]
pub fn default_commit_message() -> String {
    "Adding the MIT license to this repository since it did not have a license yet.".to_string()
}

/// Returns the default pull request title format.
#[must_use]
pub fn default_pull_request_title() -> String {
    "Suggesting the MIT License for this repository".to_string()
}

/// Returns the default pull request body format.
#[must_use]
pub fn default_pull_request_body() -> String {
    "This repository really should have a license. Please pull this in.".to_string()
}

impl Default for RemediationSettings {
    fn default() -> Self {
        Self {
            license: default_license(),
            commit_message: default_commit_message(),
            pull_request_title: default_pull_request_title(),
            pull_request_body: default_pull_request_body(),
            base_branch: None,
            api_base_uri: None,
        }
    }
}

impl RemediationSettings {
    /// Loads and validates settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, unreadable, malformed,
    /// or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading remediation settings");

        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::from_io(path, e))?;

        let settings: Self = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            source: e,
        })?;

        settings.validate(path)?;
        Ok(settings)
    }

    /// Validates the settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending key.
    pub fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let required = [
            ("license", &self.license),
            ("commit-message", &self.commit_message),
            ("pull-request-title", &self.pull_request_title),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    path: path.display().to_string(),
                    message: format!("{key} must not be empty"),
                });
            }
        }

        if matches!(&self.base_branch, Some(branch) if branch.trim().is_empty()) {
            return Err(ConfigError::Invalid {
                path: path.display().to_string(),
                message: "base-branch must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Resolves the pull request base for a repository whose default branch
    /// is `default_branch`.
    #[must_use]
    pub fn base_branch_for<'a>(&'a self, default_branch: Option<&'a str>) -> &'a str {
        self.base_branch
            .as_deref()
            .or(default_branch)
            .unwrap_or(FALLBACK_BASE_BRANCH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_settings(content: &str) -> (TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn empty_file_yields_defaults() {
        let (_dir, path) = write_settings("");
        let settings = RemediationSettings::load(&path).unwrap();

        assert_eq!(settings.license, "mit");
        assert_eq!(settings.commit_message, default_commit_message());
        assert_eq!(settings.pull_request_title, default_pull_request_title());
        assert_eq!(settings.pull_request_body, default_pull_request_body());
        assert!(settings.base_branch.is_none());
        assert!(settings.api_base_uri.is_none());
    }

    #[test]
    fn loads_overrides() {
        let (_dir, path) = write_settings(
            r#"
license = "apache-2.0"
commit-message = "Add license"
pull-request-title = "License for {{repository}}"
base-branch = "main"
api-base-uri = "https://github.example.com"
"#,
        );
        let settings = RemediationSettings::load(&path).unwrap();

        assert_eq!(settings.license, "apache-2.0");
        assert_eq!(settings.commit_message, "Add license");
        assert_eq!(settings.pull_request_title, "License for {{repository}}");
        assert_eq!(settings.base_branch.as_deref(), Some("main"));
        assert_eq!(
            settings.api_base_uri.as_deref(),
            Some("https://github.example.com")
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        let (_dir, path) = write_settings("licence = \"mit\"\n");
        let result = RemediationSettings::load(&path);

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn rejects_empty_license() {
        let (_dir, path) = write_settings("license = \"  \"\n");
        let result = RemediationSettings::load(&path);

        assert!(matches!(
            result,
            Err(ConfigError::Invalid { message, .. }) if message.contains("license")
        ));
    }

    #[test]
    fn reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = RemediationSettings::load(&dir.path().join("absent.toml"));

        assert!(matches!(result, Err(ConfigError::NotFound { .. })));
    }

    #[test]
    fn reports_directory_as_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = RemediationSettings::load(dir.path());

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn resolves_base_branch() {
        let mut settings = RemediationSettings::default();
        assert_eq!(settings.base_branch_for(None), "master");
        assert_eq!(settings.base_branch_for(Some("main")), "main");

        settings.base_branch = Some("develop".to_string());
        assert_eq!(settings.base_branch_for(Some("main")), "develop");
    }
}
