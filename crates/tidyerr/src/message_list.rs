//! Ordered template lists that accumulate through `+=`.

use crate::params::Params;
use crate::template::{Template, TemplateError};
use std::ops::AddAssign;

/// An ordered sequence of [`Template`]s for one message category.
///
/// Templates are appended with `+=`, which accepts either a single template
/// (a `&str`, `String`, or [`Template`]) or a sequence of templates. A
/// sequence flattens: `list += [a, b]` leaves the list identical to
/// `list += a; list += b`.
#[derive(Clone, Debug, Default)]
pub struct MessageList {
    templates: Vec<Template>,
}

impl MessageList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one template.
    pub fn push(&mut self, template: impl Into<Template>) {
        self.templates.push(template.into());
    }

    /// Returns the number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns `true` if the list holds no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Iterates over the templates in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Template> {
        self.templates.iter()
    }

    /// Resolves every template against `data`, in insertion order.
    ///
    /// Fails on the first template that cannot be resolved.
    pub fn resolve(&self, data: &Params) -> Result<Vec<String>, TemplateError> {
        self.templates.iter().map(|t| t.resolve(data)).collect()
    }
}

impl<'a> IntoIterator for &'a MessageList {
    type Item = &'a Template;
    type IntoIter = std::slice::Iter<'a, Template>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}

impl Extend<Template> for MessageList {
    fn extend<I: IntoIterator<Item = Template>>(&mut self, iter: I) {
        self.templates.extend(iter);
    }
}

impl AddAssign<Template> for MessageList {
    fn add_assign(&mut self, template: Template) {
        self.templates.push(template);
    }
}

impl AddAssign<&str> for MessageList {
    fn add_assign(&mut self, template: &str) {
        self.push(template);
    }
}

impl AddAssign<String> for MessageList {
    fn add_assign(&mut self, template: String) {
        self.push(template);
    }
}

impl AddAssign<Vec<Template>> for MessageList {
    fn add_assign(&mut self, templates: Vec<Template>) {
        self.templates.extend(templates);
    }
}

impl AddAssign<Vec<&str>> for MessageList {
    fn add_assign(&mut self, templates: Vec<&str>) {
        self.templates.extend(templates.into_iter().map(Template::from));
    }
}

impl<const N: usize> AddAssign<[Template; N]> for MessageList {
    fn add_assign(&mut self, templates: [Template; N]) {
        self.templates.extend(templates);
    }
}

impl<const N: usize> AddAssign<[&str; N]> for MessageList {
    fn add_assign(&mut self, templates: [&str; N]) {
        self.templates.extend(templates.into_iter().map(Template::from));
    }
}
