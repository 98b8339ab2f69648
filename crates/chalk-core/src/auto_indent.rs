//! Enter-key indentation carry.
//!
//! Pressing Enter on an indented line opens the new line with the same leading whitespace
//! (spaces and tabs) the current line has up to the caret. When there is nothing to carry the
//! engine answers [`AutoIndent::NotHandled`] and the host inserts its plain newline.

use crate::indent::IndentEdit;
use crate::selection::SelectionRange;
use crate::text::{char_len, last_line_feed_before, slice, splice};

/// Outcome of an Enter-key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoIndent {
    /// A newline plus the carried indentation was inserted.
    Handled(IndentEdit),
    /// Nothing to carry; fall back to the default newline insertion.
    NotHandled,
}

impl AutoIndent {
    /// Returns `true` for [`AutoIndent::Handled`].
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled(_))
    }
}

/// Compute the effect of pressing Enter on `buffer`.
///
/// `selection.start` is the insertion point; the text up to `selection.end` is replaced.
pub fn auto_indent(buffer: &str, selection: SelectionRange) -> AutoIndent {
    let selection = selection.clamp_to(char_len(buffer));
    let start = selection.start;
    if start == 0 {
        return AutoIndent::NotHandled;
    }

    let line_start = last_line_feed_before(buffer, start).unwrap_or(0);
    let indent = leading_indent(slice(buffer, line_start, start));
    if indent.is_empty() {
        return AutoIndent::NotHandled;
    }

    let mut inserted = String::with_capacity(indent.len() + 1);
    inserted.push('\n');
    inserted.push_str(indent);

    tracing::debug!(target: "chalk::indent", start, carried = indent.len(), "auto indent");

    let caret = start + char_len(&inserted);
    AutoIndent::Handled(IndentEdit {
        text: splice(buffer, start, selection.end, &inserted),
        selection: SelectionRange::caret(caret),
    })
}

/// The spaces/tabs opening `line`, which may still carry the line feed that ended the
/// previous line.
fn leading_indent(line: &str) -> &str {
    let line = line.strip_prefix('\n').unwrap_or(line);
    let end = line
        .find(|ch: char| ch != ' ' && ch != '\t')
        .unwrap_or(line.len());
    &line[..end]
}
