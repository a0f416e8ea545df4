//! Authenticated access to the GitHub REST API.
//!
//! The workflow never talks to octocrab directly. It goes through
//! [`GitHubGateway`], which performs exactly one call per invocation and hands
//! back the parsed JSON body. No retries, no rate-limit handling: every
//! failure is returned to the caller as-is.

mod client;
mod error;
pub mod routes;

pub use client::{OctocrabGateway, DEFAULT_API_BASE_URI};
pub use error::GatewayError;

use serde_json::Value;
use std::fmt;
use std::future::Future;

/// HTTP method of a gateway call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        })
    }
}

/// One-call-in, one-response-out access to the GitHub API.
///
/// Implementations own the credential and attach it, along with a fixed
/// client identifier, to every request.
pub trait GitHubGateway: Sync {
    /// Performs an authenticated `GET` of `route`.
    fn get(&self, route: &str) -> impl Future<Output = Result<Value, GatewayError>> + Send;

    /// Performs an authenticated `POST` of `body` to `route`.
    fn post(
        &self,
        route: &str,
        body: &Value,
    ) -> impl Future<Output = Result<Value, GatewayError>> + Send;

    /// Performs an authenticated `PUT` of `body` to `route`.
    fn put(
        &self,
        route: &str,
        body: &Value,
    ) -> impl Future<Output = Result<Value, GatewayError>> + Send;

    /// Lists the repositories of `organization`.
    fn list_repositories(
        &self,
        organization: &str,
    ) -> impl Future<Output = Result<Value, GatewayError>> + Send {
        let route = routes::organization_repositories(organization);
        async move { self.get(&route).await }
    }

    /// Fetches the license template identified by `key`.
    fn get_license_template(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Value, GatewayError>> + Send {
        let route = routes::license(key);
        async move { self.get(&route).await }
    }
}
