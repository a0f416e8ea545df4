//! Settings error types.

use thiserror::Error;

/// Errors that can occur while loading remediation settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file does not exist.
    #[error("Settings file not found: {path}")]
    NotFound { path: String },

    /// The settings file exists but could not be read.
    #[error("Failed to read settings file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML or has unknown keys.
    #[error("Failed to parse settings in '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// A setting has an unusable value.
    #[error("Invalid setting in '{path}': {message}")]
    Invalid { path: String, message: String },
}

impl ConfigError {
    /// Classifies an I/O error raised while reading `path`.
    pub(crate) fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        let path = path.display().to_string();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Read { path, source }
        }
    }
}
