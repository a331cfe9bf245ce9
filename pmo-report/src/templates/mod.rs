//! Email body templates rendered with Handlebars.
//!
//! Two registries are kept: the plain-text one disables escaping, the HTML
//! one keeps Handlebars' default HTML escaping so issue summaries can't
//! inject markup.

mod error;

pub use error::TemplateError;

use handlebars::{no_escape, Handlebars};
use serde::Serialize;

const PLAIN_TEMPLATE: &str = "email-plain";
const HTML_TEMPLATE: &str = "email-html";

const PLAIN_SOURCE: &str = include_str!("../../templates/email.txt.hbs");
const HTML_SOURCE: &str = include_str!("../../templates/email.html.hbs");

/// Creates a Handlebars registry in strict mode.
///
/// With `escape_html` unset the output is left verbatim, which is what a
/// plain-text body needs.
#[must_use]
pub fn create_handlebars_registry(escape_html: bool) -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    if !escape_html {
        hbs.register_escape_fn(no_escape);
    }
    // Catch templates referring to fields the report doesn't provide
    hbs.set_strict_mode(true);
    hbs
}

/// Renders the plain-text and HTML email bodies.
pub struct TemplateRenderer {
    plain: Handlebars<'static>,
    html: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Creates a renderer with the built-in email templates registered.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in template fails to compile.
    pub fn new() -> Result<Self, TemplateError> {
        let mut plain = create_handlebars_registry(false);
        plain.register_template_string(PLAIN_TEMPLATE, PLAIN_SOURCE)?;

        let mut html = create_handlebars_registry(true);
        html.register_template_string(HTML_TEMPLATE, HTML_SOURCE)?;

        Ok(Self { plain, html })
    }

    /// Renders the plain-text body.
    ///
    /// # Errors
    ///
    /// Returns an error if `data` lacks a field the template uses.
    pub fn render_plain<T: Serialize>(&self, data: &T) -> Result<String, TemplateError> {
        Ok(self.plain.render(PLAIN_TEMPLATE, data)?)
    }

    /// Renders the HTML body.
    ///
    /// # Errors
    ///
    /// Returns an error if `data` lacks a field the template uses.
    pub fn render_html<T: Serialize>(&self, data: &T) -> Result<String, TemplateError> {
        Ok(self.html.render(HTML_TEMPLATE, data)?)
    }
}
