//! Gateway error types.

use super::Method;
use thiserror::Error;

/// Errors returned by a single GitHub API call.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// GitHub answered with a non-success status.
    #[error("GitHub API {method} {route} returned {status}: {message}")]
    Api {
        method: Method,
        route: String,
        status: u16,
        message: String,
    },

    /// The request could not be completed (connection, TLS, decoding).
    #[error("GitHub API {method} {route} failed: {source}")]
    Transport {
        method: Method,
        route: String,
        #[source]
        source: octocrab::Error,
    },

    /// GitHub API client initialization errors.
    #[error("Failed to build GitHub client: {0}")]
    Client(#[source] octocrab::Error),
}

impl GatewayError {
    /// Classifies an octocrab error raised while calling `route`.
    pub(crate) fn from_octocrab(method: Method, route: &str, error: octocrab::Error) -> Self {
        match error {
            octocrab::Error::GitHub { source, .. } => Self::Api {
                method,
                route: route.to_string(),
                status: source.status_code.as_u16(),
                message: source.message.clone(),
            },
            other => Self::Transport {
                method,
                route: route.to_string(),
                source: other,
            },
        }
    }

    /// Returns the HTTP status when GitHub rejected the call.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
