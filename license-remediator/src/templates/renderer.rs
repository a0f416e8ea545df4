//! Template renderer.

use crate::remediation::PipelineContext;
use handlebars::{no_escape, Context, Handlebars, Helper, HelperResult, Output, RenderContext};

/// Creates a configured Handlebars registry with custom helpers.
///
/// The registry is configured with:
/// - No HTML escaping (for markdown output)
/// - Strict mode (catches missing variables)
/// - `eq` helper for equality comparisons
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);
    hbs.register_helper("eq", Box::new(eq_helper));

    hbs
}

/// Helper function for equality comparison in templates.
///
/// Usage: `{{#if (eq base "main")}}...{{/if}}`
fn eq_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let param1 = h.param(0).and_then(|v| v.value().as_str());
    let param2 = h.param(1).and_then(|v| v.value().as_str());

    let result = match (param1, param2) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    };

    out.write(if result { "true" } else { "" })?;
    Ok(())
}

/// Rendered pull request title and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestText {
    pub title: String,
    pub body: String,
}

/// Template renderer for pull request text.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Creates a new template renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders the pull request title and body for a pipeline.
    ///
    /// Both formats may reference `organization`, `repository`, `branch`
    /// and `base`.
    ///
    /// # Errors
    ///
    /// Returns an error if either template fails to render.
    pub fn render_pull_request(
        &self,
        title_format: &str,
        body_format: &str,
        context: &PipelineContext,
    ) -> Result<PullRequestText, super::TemplateError> {
        Ok(PullRequestText {
            title: self.handlebars.render_template(title_format, context)?,
            body: self.handlebars.render_template(body_format, context)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_context() -> PipelineContext {
        let mut context = PipelineContext::new("acme", "web", "main");
        context.branch = Some("license-branch-1".to_string());
        context
    }

    #[test]
    fn test_render_fixed_text() {
        let renderer = TemplateRenderer::new();
        let text = renderer
            .render_pull_request("Add a license", "Please merge.", &sample_context())
            .unwrap();

        assert_eq!(text.title, "Add a license");
        assert_eq!(text.body, "Please merge.");
    }

    #[test]
    fn test_render_variables() {
        let renderer = TemplateRenderer::new();
        let text = renderer
            .render_pull_request(
                "License for {{organization}}/{{repository}}",
                "Merge {{branch}} into {{base}}",
                &sample_context(),
            )
            .unwrap();

        assert_eq!(text.title, "License for acme/web");
        assert_eq!(text.body, "Merge license-branch-1 into main");
    }

    #[test]
    fn test_render_conditional_eq() {
        let renderer = TemplateRenderer::new();
        let text = renderer
            .render_pull_request(
                "t",
                r#"{{#if (eq base "main")}}default{{else}}other{{/if}}"#,
                &sample_context(),
            )
            .unwrap();

        assert_eq!(text.body, "default");
    }

    #[test]
    fn test_strict_mode_rejects_unknown_variable() {
        let renderer = TemplateRenderer::new();
        let result = renderer.render_pull_request("{{owner}}", "", &sample_context());

        assert!(result.is_err());
    }

    #[test]
    fn test_no_html_escaping() {
        let renderer = TemplateRenderer::new();
        let context = PipelineContext::new("<acme>", "web", "main");
        let text = renderer
            .render_pull_request("{{organization}}", "", &context)
            .unwrap();

        assert_eq!(text.title, "<acme>");
    }
}
