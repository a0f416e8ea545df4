//! Text generation for the remediation: branch names, license files and
//! pull request text.

mod error;
mod license;
mod renderer;

pub use error::TemplateError;
pub use license::{encode_content, render_license, FULLNAME_TOKEN, YEAR_TOKEN};
pub use renderer::{create_handlebars_registry, PullRequestText, TemplateRenderer};

/// Prefix of every branch created by the remediation.
pub const BRANCH_PREFIX: &str = "license-branch-";

/// Generates the branch name for a remediation started at `epoch_millis`.
///
/// Format: "license-branch-{epoch_millis}"
#[must_use]
pub fn generate_branch_name(epoch_millis: i64) -> String {
    format!("{BRANCH_PREFIX}{epoch_millis}")
}

/// Returns the fully qualified ref for a branch name.
#[must_use]
pub fn branch_ref(branch_name: &str) -> String {
    format!("refs/heads/{branch_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_branch_name() {
        assert_eq!(
            generate_branch_name(1_700_000_000_123),
            "license-branch-1700000000123"
        );
    }

    #[test]
    fn test_branch_ref() {
        assert_eq!(
            branch_ref("license-branch-42"),
            "refs/heads/license-branch-42"
        );
    }
}
