//! Template rendering collaborator.

use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior};
use serde_json::Value;

use crate::{Error, Result};

/// Renders a text template against a JSON context.
///
/// The renderer only sees template text and data, so the engine can be
/// swapped (or stubbed in tests) without touching the artifact list.
pub trait TemplateRenderer {
    /// Render `template` with `context`. `name` identifies the template in
    /// errors.
    fn render(&self, name: &str, template: &str, context: &Value) -> Result<String>;
}

/// [`TemplateRenderer`] backed by minijinja.
///
/// Undefined variables are errors, block tags swallow their own line and
/// the trailing newline of a template is kept.
#[derive(Debug, Default, Clone, Copy)]
pub struct MiniJinjaRenderer;

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn environment() -> &'static Environment<'static> {
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.add_filter("yaml_scalar", yaml_scalar);
        env
    })
}

/// Write a string as a YAML scalar, single-quoting it when the plain form
/// would not read back as the same string.
fn yaml_scalar(value: String) -> String {
    if is_plain_scalar(&value) {
        value
    } else {
        format!("'{}'", value.replace('\'', "''"))
    }
}

fn is_plain_scalar(value: &str) -> bool {
    let Some(first) = value.chars().next() else {
        return false;
    };
    !"-?:,[]{}#&*!|>'\"%@`".contains(first)
        && !first.is_whitespace()
        && !value.ends_with(char::is_whitespace)
        && !value.ends_with(':')
        && !value.contains(": ")
        && !value.contains(" #")
        && !value.chars().any(char::is_control)
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, name: &str, template: &str, context: &Value) -> Result<String> {
        environment()
            .render_str(template, context)
            .map_err(|err| Error::template(name, err))
    }
}
