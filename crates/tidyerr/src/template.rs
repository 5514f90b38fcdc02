//! Message templates: literal text with placeholders, or computed closures.

use crate::params::Params;
use std::fmt;
use std::sync::Arc;

/// The closure type behind [`Template::Computed`].
pub type ComputeFn = dyn Fn(&Params) -> String + Send + Sync;

/// One line (or block) of eventual output, resolved against a [`Params`] map.
///
/// A literal template substitutes `{name}` placeholders from the data at
/// resolution time. A computed template is a closure invoked with the data;
/// its return value is used verbatim, with no further substitution pass.
#[derive(Clone)]
pub enum Template {
    /// Text with `{name}` placeholders. `{{` and `}}` are brace escapes.
    Literal(String),
    /// A closure producing the text directly from the data.
    Computed(Arc<ComputeFn>),
}

impl Template {
    /// Creates a literal template. Placeholder syntax is checked lazily,
    /// at resolution time; use [`parse`](Self::parse) to check eagerly.
    pub fn lit(text: impl Into<String>) -> Self {
        Template::Literal(text.into())
    }

    /// Creates a computed template from a closure.
    pub fn from_fn(f: impl Fn(&Params) -> String + Send + Sync + 'static) -> Self {
        Template::Computed(Arc::new(f))
    }

    /// Creates a literal template, rejecting malformed placeholder syntax
    /// immediately instead of deferring to resolution time.
    pub fn parse(text: impl Into<String>) -> Result<Self, TemplateError> {
        let text = text.into();
        substitute(&text, None)?;
        Ok(Template::Literal(text))
    }

    /// Resolves this template against the given data.
    ///
    /// Resolution is all-or-nothing: a literal referencing a parameter
    /// absent from `data` fails with [`TemplateError::MissingParam`] rather
    /// than emitting the placeholder literally.
    pub fn resolve(&self, data: &Params) -> Result<String, TemplateError> {
        match self {
            Template::Literal(text) => substitute(text, Some(data)),
            Template::Computed(f) => Ok(f(data)),
        }
    }
}

impl From<&str> for Template {
    fn from(text: &str) -> Self {
        Template::lit(text)
    }
}

impl From<String> for Template {
    fn from(text: String) -> Self {
        Template::Literal(text)
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Template::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Template::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// A failure while parsing or resolving a template.
///
/// Both variants carry the full template text so the author of the message
/// can find and fix it at the source.
#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub enum TemplateError {
    /// A `{name}` placeholder names a parameter absent from the data.
    #[error("template {template:?} references missing parameter {key:?}")]
    MissingParam {
        /// The parameter name the template asked for.
        key: String,
        /// The full text of the offending template.
        template: String,
    },
    /// The placeholder syntax itself is invalid.
    #[error("malformed template {template:?}: {detail}")]
    Malformed {
        /// The full text of the offending template.
        template: String,
        /// What is wrong with it.
        detail: String,
    },
}

fn malformed(template: &str, detail: impl Into<String>) -> TemplateError {
    TemplateError::Malformed {
        template: template.to_string(),
        detail: detail.into(),
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Substitutes `{name}` placeholders from `data`. With `data` absent, only
/// validates the syntax and echoes placeholders back unchanged.
fn substitute(template: &str, data: Option<&Params>) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut key = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    key.push(c);
                }
                if !closed {
                    return Err(malformed(template, "unterminated '{' placeholder"));
                }
                if !is_identifier(&key) {
                    return Err(malformed(
                        template,
                        format!("invalid parameter name {key:?}"),
                    ));
                }
                match data {
                    Some(params) => match params.get(&key) {
                        Some(value) => out.push_str(value),
                        None => {
                            return Err(TemplateError::MissingParam {
                                key,
                                template: template.to_string(),
                            })
                        }
                    },
                    None => {
                        out.push('{');
                        out.push_str(&key);
                        out.push('}');
                    }
                }
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(malformed(template, "unmatched '}'"));
                }
            }
            _ => out.push(c),
        }
    }
    Ok(out)
}
