//! License file rendering.

use base64::prelude::{Engine as _, BASE64_STANDARD};

/// Placeholder replaced with the current calendar year.
pub const YEAR_TOKEN: &str = "[year]";

/// Placeholder replaced with the copyright holder.
pub const FULLNAME_TOKEN: &str = "[fullname]";

/// Substitutes the year and copyright holder into a license template body.
///
/// Only the first occurrence of each placeholder is replaced; GitHub's
/// templates carry each one once, in the copyright line.
#[must_use]
pub fn render_license(template: &str, year: i32, fullname: &str) -> String {
    template
        .replacen(YEAR_TOKEN, &year.to_string(), 1)
        .replacen(FULLNAME_TOKEN, fullname, 1)
}

/// Encodes file content the way the contents API expects it.
#[must_use]
pub fn encode_content(content: &str) -> String {
    BASE64_STANDARD.encode(content.as_bytes())
}
