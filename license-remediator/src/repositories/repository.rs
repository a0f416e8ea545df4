//! Repository descriptor as returned by the organization listing.

use serde::Deserialize;

/// License metadata GitHub attaches to a repository it recognised a license in.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LicenseDescriptor {
    /// License key (e.g. "mit").
    #[serde(default)]
    pub key: Option<String>,

    /// Human-readable license name.
    #[serde(default)]
    pub name: Option<String>,

    /// SPDX identifier.
    #[serde(default)]
    pub spdx_id: Option<String>,
}

/// A repository belonging to the organization being remediated.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    /// Repository name.
    pub name: String,

    /// Whether the repository is private.
    #[serde(default)]
    pub private: bool,

    /// Detected license, if any.
    #[serde(default)]
    pub license: Option<LicenseDescriptor>,

    /// Default branch name (e.g., "main").
    #[serde(default)]
    pub default_branch: Option<String>,
}

impl Repository {
    /// Returns true when GitHub has not detected a license.
    #[must_use]
    pub fn needs_license(&self) -> bool {
        self.license.is_none()
    }

    /// Returns "private" or "public".
    #[must_use]
    pub fn visibility(&self) -> &'static str {
        if self.private {
            "private"
        } else {
            "public"
        }
    }
}
