//! Octocrab-backed gateway.

use super::{GatewayError, GitHubGateway, Method};
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use serde_json::Value;
use tracing::debug;

/// Public GitHub API endpoint.
pub const DEFAULT_API_BASE_URI: &str = "https://api.github.com";

/// [`GitHubGateway`] that issues real requests through octocrab.
///
/// The token is sent as a bearer credential on every call, and octocrab's
/// fixed `User-Agent` identifies the client. Octocrab's built-in retry
/// middleware is disabled so each call maps to exactly one request.
#[derive(Clone)]
pub struct OctocrabGateway {
    octocrab: Octocrab,
}

impl OctocrabGateway {
    /// Builds a gateway authenticated with `token` against `base_uri`, or
    /// [`DEFAULT_API_BASE_URI`] when none is given.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Client`] if the base URI is invalid or the
    /// client cannot be built.
    pub fn new(token: &str, base_uri: Option<&str>) -> Result<Self, GatewayError> {
        let octocrab = Octocrab::builder()
            .personal_token(token.to_string())
            .add_retry_config(RetryConfig::None)
            .base_uri(base_uri.unwrap_or(DEFAULT_API_BASE_URI))
            .map_err(GatewayError::Client)?
            .build()
            .map_err(GatewayError::Client)?;
        Ok(Self { octocrab })
    }
}

impl GitHubGateway for OctocrabGateway {
    async fn get(&self, route: &str) -> Result<Value, GatewayError> {
        debug!(method = %Method::Get, route, "Calling GitHub API");
        self.octocrab
            .get(route, None::<&()>)
            .await
            .map_err(|e| GatewayError::from_octocrab(Method::Get, route, e))
    }

    async fn post(&self, route: &str, body: &Value) -> Result<Value, GatewayError> {
        debug!(method = %Method::Post, route, "Calling GitHub API");
        self.octocrab
            .post(route, Some(body))
            .await
            .map_err(|e| GatewayError::from_octocrab(Method::Post, route, e))
    }

    async fn put(&self, route: &str, body: &Value) -> Result<Value, GatewayError> {
        debug!(method = %Method::Put, route, "Calling GitHub API");
        self.octocrab
            .put(route, Some(body))
            .await
            .map_err(|e| GatewayError::from_octocrab(Method::Put, route, e))
    }
}
