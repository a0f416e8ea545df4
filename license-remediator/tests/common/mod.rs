//! Recording gateway used by the integration tests.

#![allow(dead_code)]

use license_remediator::{routes, GatewayError, GitHubGateway, Method};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

pub const ORG: &str = "acme";
pub const TOKEN: &str = "ghp_test";
pub const HEAD_SHA: &str = "aa218f56b14c9653891f9e74264a383fa43fefbd";
pub const LICENSE_TEMPLATE: &str = "MIT License\n\nCopyright (c) [year] [fullname]\n";

/// A call the workflow made through the gateway.
#[derive(Debug, Clone)]
pub struct Call {
    pub method: Method,
    pub route: String,
    pub body: Option<Value>,
}

impl Call {
    pub fn is_write(&self) -> bool {
        matches!(self.method, Method::Post | Method::Put)
    }
}

enum Reply {
    Ok(Value),
    Status(u16),
}

/// Gateway that answers from canned replies and records every call.
///
/// Unconfigured `GET`s answer 404; unconfigured writes succeed with `{}`.
#[derive(Default)]
pub struct MockGateway {
    replies: HashMap<(Method, String), Reply>,
    calls: Mutex<Vec<Call>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gateway with the organization listing and the MIT template in place.
    pub fn with_listing(repositories: Value) -> Self {
        Self::new()
            .respond(Method::Get, routes::organization_repositories(ORG), repositories)
            .respond(
                Method::Get,
                routes::license("mit"),
                json!({ "key": "mit", "body": LICENSE_TEMPLATE }),
            )
    }

    pub fn respond(mut self, method: Method, route: String, body: Value) -> Self {
        self.replies.insert((method, route), Reply::Ok(body));
        self
    }

    pub fn fail(mut self, method: Method, route: String, status: u16) -> Self {
        self.replies.insert((method, route), Reply::Status(status));
        self
    }

    /// Gives `repo` a single branch head at [`HEAD_SHA`].
    pub fn with_head(self, repo: &str) -> Self {
        self.respond(
            Method::Get,
            routes::branch_heads(ORG, repo),
            json!([{
                "ref": "refs/heads/master",
                "object": { "type": "commit", "sha": HEAD_SHA }
            }]),
        )
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls whose route belongs to `repo`.
    pub fn calls_for(&self, repo: &str) -> Vec<Call> {
        let prefix = format!("/repos/{ORG}/{repo}/");
        self.calls()
            .into_iter()
            .filter(|call| call.route.starts_with(&prefix))
            .collect()
    }

    pub fn writes_for(&self, repo: &str) -> Vec<Call> {
        self.calls_for(repo)
            .into_iter()
            .filter(Call::is_write)
            .collect()
    }

    pub fn find(&self, method: Method, route: &str) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| call.method == method && call.route == route)
            .collect()
    }

    fn answer(
        &self,
        method: Method,
        route: &str,
        body: Option<&Value>,
    ) -> Result<Value, GatewayError> {
        self.calls.lock().unwrap().push(Call {
            method,
            route: route.to_string(),
            body: body.cloned(),
        });

        match self.replies.get(&(method, route.to_string())) {
            Some(Reply::Ok(value)) => Ok(value.clone()),
            Some(Reply::Status(status)) => Err(api_error(method, route, *status)),
            None if method == Method::Get => Err(api_error(method, route, 404)),
            None => Ok(json!({})),
        }
    }
}

fn api_error(method: Method, route: &str, status: u16) -> GatewayError {
    GatewayError::Api {
        method,
        route: route.to_string(),
        status,
        message: "mock failure".to_string(),
    }
}

impl GitHubGateway for MockGateway {
    async fn get(&self, route: &str) -> Result<Value, GatewayError> {
        self.answer(Method::Get, route, None)
    }

    async fn post(&self, route: &str, body: &Value) -> Result<Value, GatewayError> {
        self.answer(Method::Post, route, Some(body))
    }

    async fn put(&self, route: &str, body: &Value) -> Result<Value, GatewayError> {
        self.answer(Method::Put, route, Some(body))
    }
}

/// Listing entry for a repository.
pub fn repository(name: &str, licensed: bool) -> Value {
    let license = if licensed {
        json!({ "key": "mit", "name": "MIT License", "spdx_id": "MIT" })
    } else {
        Value::Null
    };
    json!({
        "name": name,
        "private": false,
        "license": license,
        "default_branch": "master"
    })
}
