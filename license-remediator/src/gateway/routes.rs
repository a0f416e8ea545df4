//! GitHub REST routes used by the remediation workflow.
//!
//! Routes are relative to the API base URI and always start with `/`.

/// `GET` the repositories of an organization.
#[must_use]
pub fn organization_repositories(organization: &str) -> String {
    format!("/orgs/{organization}/repos")
}

/// `GET` a license template by key (e.g. `mit`).
#[must_use]
pub fn license(key: &str) -> String {
    format!("/licenses/{key}")
}

/// `GET` the branch heads of a repository.
#[must_use]
pub fn branch_heads(owner: &str, repo: &str) -> String {
    format!("/repos/{owner}/{repo}/git/refs/heads")
}

/// `POST` a new git reference.
#[must_use]
pub fn git_refs(owner: &str, repo: &str) -> String {
    format!("/repos/{owner}/{repo}/git/refs")
}

/// `PUT` the contents of a file.
#[must_use]
pub fn contents(owner: &str, repo: &str, path: &str) -> String {
    format!("/repos/{owner}/{repo}/contents/{path}")
}

/// `POST` a new pull request.
#[must_use]
pub fn pulls(owner: &str, repo: &str) -> String {
    format!("/repos/{owner}/{repo}/pulls")
}
