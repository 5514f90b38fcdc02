//! The error builder: diagnostic parameters plus brief/info/blame/hints.

use crate::context;
use crate::message_list::MessageList;
use crate::params::Params;
use crate::render::TextRenderer;
use crate::template::{Template, TemplateError};
use std::fmt;

/// The headline used when no `brief` template has been set.
pub const DEFAULT_BRIEF: &str = "unspecified error";

/// A structured error that accumulates parameters and message templates,
/// then renders them into one human-friendly multi-line message.
///
/// The four template slots play fixed roles in the rendered output:
/// - `brief`: the single headline statement of the problem
/// - `info`: contextual statements explaining the circumstances
/// - `blame`: statements identifying the specific cause
/// - `hints`: suggested remedies
///
/// `brief` is overwrite-only; the three lists accumulate with `+=`. All
/// fields stay mutable after construction, and [`render`](Self::render) is
/// a pure projection that can be repeated, reflecting any changes since the
/// last call.
#[derive(Clone, Debug)]
pub struct Error {
    /// The headline template. Assignment replaces; `None` renders as
    /// [`DEFAULT_BRIEF`].
    pub brief: Option<Template>,
    /// Contextual statements, bulleted with `• `.
    pub info: MessageList,
    /// Root-cause statements, bulleted with `✖ `.
    pub blame: MessageList,
    /// Suggested remedies, bulleted with `• ` after the blame lines.
    pub hints: MessageList,
    /// Parameters interpolated into the templates.
    pub data: Params,
}

impl Error {
    /// Creates an empty builder.
    ///
    /// Context frames currently live on this thread (see
    /// [`add_info`](crate::add_info)) are folded in: their templates seed
    /// `info`, their params seed `data` as defaults that the builder's own
    /// params override.
    pub fn new() -> Self {
        let (templates, data) = context::snapshot();
        let mut info = MessageList::new();
        info.extend(templates);
        Self {
            brief: None,
            info,
            blame: MessageList::new(),
            hints: MessageList::new(),
            data,
        }
    }

    /// Sets the headline template, replacing any previous one.
    pub fn with_brief(mut self, template: impl Into<Template>) -> Self {
        self.brief = Some(template.into());
        self
    }

    /// Appends one contextual statement.
    pub fn with_info(mut self, template: impl Into<Template>) -> Self {
        self.info.push(template);
        self
    }

    /// Appends one root-cause statement.
    pub fn with_blame(mut self, template: impl Into<Template>) -> Self {
        self.blame.push(template);
        self
    }

    /// Appends one suggested remedy.
    pub fn with_hint(mut self, template: impl Into<Template>) -> Self {
        self.hints.push(template);
        self
    }

    /// Sets one diagnostic parameter, capturing the value as its display
    /// string.
    pub fn with_param(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.data.set(key, value);
        self
    }

    /// Resolves the headline, falling back to [`DEFAULT_BRIEF`] when unset.
    pub fn brief_text(&self) -> Result<String, TemplateError> {
        match &self.brief {
            Some(template) => template.resolve(&self.data),
            None => Ok(DEFAULT_BRIEF.to_string()),
        }
    }

    /// Resolves every `info` template, in insertion order and un-bulleted.
    pub fn info_texts(&self) -> Result<Vec<String>, TemplateError> {
        self.info.resolve(&self.data)
    }

    /// Resolves every `blame` template, in insertion order and un-bulleted.
    pub fn blame_texts(&self) -> Result<Vec<String>, TemplateError> {
        self.blame.resolve(&self.data)
    }

    /// Resolves every `hints` template, in insertion order and un-bulleted.
    pub fn hint_texts(&self) -> Result<Vec<String>, TemplateError> {
        self.hints.resolve(&self.data)
    }

    /// Renders the full message with the default markers.
    ///
    /// The output is the brief line followed by all info lines, all blame
    /// lines, and all hint lines, each on its own line, in that fixed order.
    /// Rendering is all-or-nothing: any template that fails to resolve
    /// fails the whole render, never partial output.
    pub fn render(&self) -> Result<String, TemplateError> {
        TextRenderer::default().render(self)
    }
}

impl Default for Error {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.render() {
            Ok(message) => f.write_str(&message),
            // Display has no error channel of its own, so a resolution
            // failure surfaces as its own description, which still names
            // the offending key and template.
            Err(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params;

    #[test]
    fn insufficient_inventory_scenario() {
        let mut err = Error::new()
            .with_brief("insufficient inventory to process request")
            .with_param("product_name", "Red Leicester")
            .with_param("num_requested", 1)
            .with_param("num_available", 0);
        err.info += "{num_requested} {product_name} requested";
        err.blame += "{num_available} available";

        assert_eq!(
            err.render().unwrap(),
            "insufficient inventory to process request\n\
             • 1 Red Leicester requested\n\
             ✖ 0 available"
        );
    }

    #[test]
    fn brief_fallback_is_never_empty() {
        let err = Error::new();
        assert_eq!(err.brief_text().unwrap(), DEFAULT_BRIEF);
        assert_eq!(err.render().unwrap(), DEFAULT_BRIEF);
    }

    #[test]
    fn brief_is_overwrite_only() {
        let err = Error::new().with_brief("first").with_brief("second");
        assert_eq!(err.render().unwrap(), "second");
    }

    #[test]
    fn category_order_is_fixed() {
        // Populate in the reverse of the rendered order.
        let mut err = Error::new();
        err.hints += "try again";
        err.blame += "it broke";
        err.info += "while doing the thing";
        err.brief = Some("whoops".into());

        assert_eq!(
            err.render().unwrap(),
            "whoops\n\
             • while doing the thing\n\
             ✖ it broke\n\
             • try again"
        );
    }

    #[test]
    fn insertion_order_within_category() {
        let mut err = Error::new().with_brief("b");
        err.info += "one";
        err.info += ["two", "three"];
        assert_eq!(err.info_texts().unwrap(), vec!["one", "two", "three"]);
    }

    #[test]
    fn missing_param_fails_the_whole_render() {
        let mut err = Error::new().with_brief("b");
        err.info += "{missing}";
        let failure = err.render().unwrap_err();
        assert_eq!(
            failure,
            TemplateError::MissingParam {
                key: "missing".to_string(),
                template: "{missing}".to_string(),
            }
        );
    }

    #[test]
    fn computed_template_sees_the_data() {
        let err = Error::new()
            .with_param("attr", "value")
            .with_brief(Template::from_fn(|data| {
                format!("Callable: {}", data.get("attr").unwrap_or("?"))
            }));
        assert_eq!(err.render().unwrap(), "Callable: value");
    }

    #[test]
    fn render_is_idempotent() {
        let mut err = Error::new().with_brief("b").with_param("a", 1);
        err.info += "x={a}";
        assert_eq!(err.render().unwrap(), err.render().unwrap());
    }

    #[test]
    fn data_stays_mutable_after_rendering() {
        let mut err = Error::new().with_brief("count: {n}").with_param("n", 1);
        assert_eq!(err.render().unwrap(), "count: 1");
        err.data.set("n", 2);
        assert_eq!(err.render().unwrap(), "count: 2");
    }

    #[test]
    fn display_matches_render() {
        let mut err = Error::new().with_brief("b");
        err.info += "context";
        assert_eq!(err.to_string(), "b\n• context");
    }

    #[test]
    fn display_surfaces_resolution_failures() {
        let err = Error::new().with_brief("{missing}");
        let shown = err.to_string();
        assert!(shown.contains("missing"));
        assert!(shown.contains("{missing}"));
    }

    #[test]
    fn usable_as_std_error() {
        fn fails() -> Result<(), Box<dyn std::error::Error>> {
            Err(Box::new(Error::new().with_brief("boom")))
        }
        let err = fails().unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn context_frames_seed_new_errors() {
        let _outer = crate::add_info("outer a={a} b={b} c={c}", params! { a: 1, b: 1, c: 1 });

        let mut first = Error::new().with_param("a", 2).with_param("b", 2);
        first.info += "local a={a} b={b} c={c}";

        let second;
        {
            let _inner = crate::add_info("inner a={a} b={b}", params! { a: 2, b: 2 });
            second = Error::new().with_param("a", 3);
        }

        assert_eq!(
            first.info_texts().unwrap(),
            vec!["outer a=2 b=2 c=1", "local a=2 b=2 c=1"]
        );
        assert_eq!(
            second.info_texts().unwrap(),
            vec!["outer a=3 b=2 c=1", "inner a=3 b=2"]
        );
    }

    #[test]
    fn frames_pushed_later_do_not_affect_existing_errors() {
        let err = Error::new().with_brief("b");
        let _late = crate::add_info("too late", params! {});
        assert_eq!(err.render().unwrap(), "b");
    }
}
