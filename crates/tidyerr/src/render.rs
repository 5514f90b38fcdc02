//! Text assembly for rendered error messages.

use crate::error::Error;
use crate::message_list::MessageList;
use crate::params::Params;
use crate::template::TemplateError;

/// Renders an [`Error`] into its multi-line text form.
///
/// Produces output like:
/// ```text
/// insufficient inventory to process request
/// • 1 Red Leicester requested
/// ✖ 0 available
/// • try reducing the requested quantity
/// ```
///
/// The brief line comes first, then every info line, every blame line, and
/// every hint line, in that fixed order. A template that resolves to
/// multi-line text contributes one output line per line of text, each
/// carrying the category's marker; line breaks inside templates are
/// preserved verbatim, with no re-wrapping to any column width. A template
/// resolving to empty text contributes no lines.
#[derive(Clone, Debug)]
pub struct TextRenderer {
    /// Marker prefixed to each info line.
    pub info_bullet: String,
    /// Marker prefixed to each blame line.
    pub blame_bullet: String,
    /// Marker prefixed to each hint line.
    pub hint_bullet: String,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            info_bullet: "• ".to_string(),
            blame_bullet: "✖ ".to_string(),
            hint_bullet: "• ".to_string(),
        }
    }
}

impl TextRenderer {
    /// Renders the full message, joining the lines with `\n`.
    ///
    /// Fails on the first template that cannot be resolved; no partially
    /// substituted output is ever returned.
    pub fn render(&self, err: &Error) -> Result<String, TemplateError> {
        let mut lines = Vec::new();

        for line in err.brief_text()?.lines() {
            lines.push(line.to_string());
        }
        self.section(&mut lines, &err.info, &err.data, &self.info_bullet)?;
        self.section(&mut lines, &err.blame, &err.data, &self.blame_bullet)?;
        self.section(&mut lines, &err.hints, &err.data, &self.hint_bullet)?;

        Ok(lines.join("\n"))
    }

    fn section(
        &self,
        lines: &mut Vec<String>,
        list: &MessageList,
        data: &Params,
        bullet: &str,
    ) -> Result<(), TemplateError> {
        for template in list {
            let text = template.resolve(data)?;
            for line in text.lines() {
                lines.push(format!("{bullet}{line}"));
            }
        }
        Ok(())
    }
}
