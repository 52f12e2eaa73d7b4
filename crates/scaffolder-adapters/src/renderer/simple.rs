//! Simple variable substitution renderer.

use scaffolder_core::{
    application::ports::TemplateRenderer,
    domain::{RenderContext, Template, entities::template::unresolved_placeholders},
    error::ScaffolderResult,
};
use tracing::{instrument, warn};

/// Simple renderer using basic `{{VARIABLE}}` substitution.
///
/// Placeholders without a value are left in the output and logged.
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(template = %template.id))]
    fn render(&self, template: &Template, context: &RenderContext) -> ScaffolderResult<String> {
        let rendered = context.render(template.content());

        let unresolved = unresolved_placeholders(&rendered);
        if !unresolved.is_empty() {
            warn!(placeholders = ?unresolved, "Template has unresolved placeholders");
        }

        Ok(rendered)
    }
}
