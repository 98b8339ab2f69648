//! Tab-key indentation.
//!
//! A selection without a line feed behaves like typing: the selected text is replaced by one
//! indent unit and the caret lands after it. A selection spanning lines turns into a **block**
//! operation that indents (or, with the outdent modifier, outdents) every line the selection
//! touches, and then selects the whole rebuilt block so the key can be pressed again.
//!
//! # Block boundaries
//!
//! - The block starts at the line feed that opens the line holding `selection.start`, or at
//!   offset 0 when that line is the first one. Mid-document blocks therefore begin with a
//!   line feed, and the join below is what puts the unit in front of their first line.
//! - If the selection ends right on a line feed, that line feed stays outside the block.
//!
//! ```rust
//! use chalk_core::{IndentDirection, SelectionRange, indent};
//!
//! let edit = indent("one\ntwo", SelectionRange::new(0, 7), "\t", IndentDirection::Indent);
//! assert_eq!(edit.text, "\tone\n\ttwo");
//! assert_eq!(edit.selection, SelectionRange::new(0, 9));
//! ```

use crate::selection::SelectionRange;
use crate::text::{char_at, char_len, last_line_feed_before, slice, splice};

/// Direction of a tab-key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentDirection {
    /// Add one indent unit.
    Indent,
    /// Remove one indent unit (Shift held).
    Outdent,
}

impl IndentDirection {
    /// Map the outdent modifier (Shift) to a direction.
    pub fn from_outdent_modifier(held: bool) -> Self {
        if held { Self::Outdent } else { Self::Indent }
    }
}

/// New buffer contents plus the selection to apply with them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentEdit {
    /// The complete new buffer.
    pub text: String,
    /// Selection valid for `text`.
    pub selection: SelectionRange,
}

/// Compute the effect of pressing Tab (or Shift+Tab) on `buffer`.
///
/// Out-of-range selections are clamped to the buffer first.
pub fn indent(
    buffer: &str,
    selection: SelectionRange,
    unit: &str,
    direction: IndentDirection,
) -> IndentEdit {
    let len = char_len(buffer);
    let selection = selection.clamp_to(len);

    if !slice(buffer, selection.start, selection.end).contains('\n') {
        // Outdent has nothing to anchor to on a single line; the unit is inserted regardless.
        return insert_unit(buffer, selection, unit);
    }

    let (start, end) = block_bounds(buffer, selection);
    let old_block = slice(buffer, start, end);
    let new_block = match direction {
        IndentDirection::Indent => indent_block(old_block, unit, start == 0),
        IndentDirection::Outdent => outdent_block(old_block, unit),
    };

    tracing::debug!(
        target: "chalk::indent",
        ?direction,
        start,
        end,
        lines = old_block.split('\n').count(),
        "block indent"
    );

    IndentEdit {
        text: splice(buffer, start, end, &new_block),
        selection: SelectionRange::new(start, start + char_len(&new_block)),
    }
}

fn insert_unit(buffer: &str, selection: SelectionRange, unit: &str) -> IndentEdit {
    let caret = selection.start + char_len(unit);
    IndentEdit {
        text: splice(buffer, selection.start, selection.end, unit),
        selection: SelectionRange::caret(caret),
    }
}

fn block_bounds(buffer: &str, selection: SelectionRange) -> (usize, usize) {
    // A line feed sitting exactly at `start` opens the block.
    let start = last_line_feed_before(buffer, selection.start + 1).unwrap_or(0);
    let mut end = selection.end;
    if end > start && char_at(buffer, end) == Some('\n') {
        end -= 1;
    }
    (start, end)
}

fn indent_block(block: &str, unit: &str, at_buffer_start: bool) -> String {
    let separator = format!("\n{unit}");
    let joined = block.split('\n').collect::<Vec<_>>().join(&separator);
    if at_buffer_start {
        format!("{unit}{joined}")
    } else {
        joined
    }
}

fn outdent_block(block: &str, unit: &str) -> String {
    block
        .split('\n')
        .map(|line| line.strip_prefix(unit).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn press(buffer: &str, start: usize, end: usize, unit: &str, shift: bool) -> IndentEdit {
        indent(
            buffer,
            SelectionRange::new(start, end),
            unit,
            IndentDirection::from_outdent_modifier(shift),
        )
    }

    #[test]
    fn test_caret_inserts_unit() {
        let edit = press("abc", 1, 1, "  ", false);
        assert_eq!(edit.text, "a  bc");
        assert_eq!(edit.selection, SelectionRange::caret(3));
    }

    #[test]
    fn test_single_line_selection_is_replaced() {
        let edit = press("let x = 1;", 4, 5, "\t", false);
        assert_eq!(edit.text, "let \t = 1;");
        assert_eq!(edit.selection, SelectionRange::caret(5));
    }

    #[test]
    fn test_single_line_outdent_still_inserts() {
        let edit = press("    x", 4, 4, "    ", true);
        assert_eq!(edit.text, "        x");
        assert_eq!(edit.selection, SelectionRange::caret(8));
    }

    #[test]
    fn test_block_from_buffer_start() {
        let edit = press("one\ntwo\nthree", 0, 13, "\t", false);
        assert_eq!(edit.text, "\tone\n\ttwo\n\tthree");
        assert_eq!(edit.selection, SelectionRange::new(0, 16));
    }

    #[test]
    fn test_block_mid_document_starts_at_line_feed() {
        // Selection "b\nc" inside "a\nb\nc\nd"; the block runs from the line feed before `b`.
        let edit = press("a\nb\nc\nd", 2, 5, "  ", false);
        assert_eq!(edit.text, "a\n  b\n  c\nd");
        assert_eq!(edit.selection, SelectionRange::new(1, 8));
    }

    #[test]
    fn test_repeated_press_keeps_the_block() {
        let first = press("a\nb\nc\nd", 2, 5, "  ", false);
        let second = indent(&first.text, first.selection, "  ", IndentDirection::Indent);
        assert_eq!(second.text, "a\n    b\n    c\nd");
        assert_eq!(second.selection.start, first.selection.start);
    }

    #[test]
    fn test_leading_line_feed_block_gets_unit_in_front() {
        // The block opens on the line feed at offset 0, so it also counts as starting the
        // buffer: the unit lands before that line feed as well as after each one.
        let edit = press("\nab\ncd", 1, 6, "\t", false);
        assert_eq!(edit.text, "\t\n\tab\n\tcd");
        assert_eq!(edit.selection, SelectionRange::new(0, 9));

        let back = indent(&edit.text, edit.selection, "\t", IndentDirection::Outdent);
        assert_eq!(back.text, "\nab\ncd");
        assert_eq!(back.selection, SelectionRange::new(0, 6));
    }

    #[test]
    fn test_selection_starting_mid_line_indents_whole_line() {
        let edit = press("alpha\nbeta\ngamma", 3, 8, "\t", false);
        assert_eq!(edit.text, "\talpha\n\tbeta\ngamma");
        assert_eq!(edit.selection, SelectionRange::new(0, 10));
    }

    #[test]
    fn test_outdent_block() {
        let edit = press("\tone\n\ttwo\nthree", 0, 9, "\t", true);
        assert_eq!(edit.text, "one\ntwo\nthree");
        assert_eq!(edit.selection, SelectionRange::new(0, 6));
    }

    #[test]
    fn test_outdent_leaves_lines_without_exact_unit() {
        let edit = press("  a\n    b\n\tc", 0, 11, "    ", true);
        assert_eq!(edit.text, "  a\nb\n\tc");
    }

    #[test]
    fn test_outdent_removes_single_unit_per_line() {
        let edit = press("x\n\t\ty\n\tz", 2, 8, "\t", true);
        assert_eq!(edit.text, "x\n\ty\nz");
        assert_eq!(edit.selection, SelectionRange::new(1, 6));
    }

    #[test]
    fn test_end_on_line_feed_is_excluded() {
        // Selection ends right on the line feed that closes `b`; `c` is left alone.
        let edit = press("a\nb\nc", 0, 3, "-", false);
        assert_eq!(edit.text, "-a\n-b\nc");
        assert_eq!(edit.selection, SelectionRange::new(0, 4));
    }

    #[test]
    fn test_empty_unit_is_a_noop_with_consistent_selection() {
        let edit = press("a\nb", 0, 3, "", false);
        assert_eq!(edit.text, "a\nb");
        assert_eq!(edit.selection, SelectionRange::new(0, 3));

        let edit = press("abc", 1, 2, "", false);
        assert_eq!(edit.text, "ac");
        assert_eq!(edit.selection, SelectionRange::caret(1));
    }

    #[test]
    fn test_empty_buffer_and_out_of_range_selection() {
        let edit = press("", 0, 0, "    ", false);
        assert_eq!(edit.text, "    ");
        assert_eq!(edit.selection, SelectionRange::caret(4));

        let edit = press("ab", 10, 12, "\t", false);
        assert_eq!(edit.text, "ab\t");
        assert_eq!(edit.selection, SelectionRange::caret(3));
    }

    #[test]
    fn test_wide_characters_use_char_offsets() {
        let edit = press("中文\n字符", 0, 5, "  ", false);
        assert_eq!(edit.text, "  中文\n  字符");
        assert_eq!(edit.selection, SelectionRange::new(0, 9));
    }
}
