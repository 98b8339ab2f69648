//! The two editable surfaces a widget keeps in sync.
//!
//! Hosts implement [`PlainTextSurface`] for their text control and [`RenderedSurface`] for the
//! formatted view. [`TextBuffer`] is a rope-backed plain-text surface for hosts that do not
//! own a native text control (terminals, tests, headless tooling).

use crate::error::SurfaceError;
use crate::selection::SelectionRange;
use ropey::Rope;
use std::fmt;
use std::str::FromStr;

/// The editable control presenting the buffer as plain text. It owns the buffer.
pub trait PlainTextSurface {
    /// The full buffer.
    fn text(&self) -> String;

    /// Replace the full buffer.
    fn set_text(&mut self, text: &str);

    /// Current selection in character offsets.
    fn selection(&self) -> SelectionRange;

    /// Move the selection.
    fn set_selection(&mut self, selection: SelectionRange);
}

/// The editable control presenting the buffer in formatted form.
///
/// The surface only ever holds a copy of the buffer: every push replaces its whole document.
pub trait RenderedSurface {
    /// Replace the whole document with `content` (open → write → close).
    fn replace_document(&mut self, content: &str) -> Result<(), SurfaceError>;

    /// The materialized content of the document body, without the body element itself.
    fn body_content(&self) -> Result<String, SurfaceError>;

    /// The whole materialized document source.
    ///
    /// Surfaces without a distinct document wrapper may keep the default, which is the body.
    fn document_content(&self) -> Result<String, SurfaceError> {
        self.body_content()
    }

    /// Switch in-place editing (`designMode`) on or off.
    fn set_editable(&mut self, editable: bool) -> Result<(), SurfaceError>;

    /// Apply a formatting command to the surface's current selection. Completes synchronously.
    fn exec_command(&mut self, command: FormatCommand) -> Result<(), SurfaceError>;
}

/// Formatting commands understood by rendered surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatCommand {
    /// `bold`
    Bold,
    /// `italic`
    Italic,
    /// `underline`
    Underline,
    /// `strikeThrough`
    StrikeThrough,
}

impl FormatCommand {
    /// All commands, in toolbar order.
    pub const ALL: [FormatCommand; 4] = [
        FormatCommand::Bold,
        FormatCommand::Italic,
        FormatCommand::Underline,
        FormatCommand::StrikeThrough,
    ];

    /// The command name as passed to the rendered surface.
    pub fn name(self) -> &'static str {
        match self {
            FormatCommand::Bold => "bold",
            FormatCommand::Italic => "italic",
            FormatCommand::Underline => "underline",
            FormatCommand::StrikeThrough => "strikeThrough",
        }
    }
}

impl fmt::Display for FormatCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormatCommand {
    type Err = SurfaceError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|command| command.name() == name)
            .ok_or_else(|| SurfaceError::UnsupportedCommand(name.to_string()))
    }
}

/// A plain-text surface backed by a [`Rope`].
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    rope: Rope,
    selection: SelectionRange,
}

impl TextBuffer {
    /// Create a buffer with the caret at offset 0.
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            selection: SelectionRange::caret(0),
        }
    }

    /// Total character count.
    pub fn char_len(&self) -> usize {
        self.rope.len_chars()
    }

    /// Line count (`N` line feeds make `N + 1` lines).
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Zero-based `(line, column)` of the selection's end, columns in characters.
    pub fn caret_line_column(&self) -> (usize, usize) {
        let offset = self.selection.end.min(self.char_len());
        let line = self.rope.char_to_line(offset);
        (line, offset - self.rope.line_to_char(line))
    }

    /// Replace the selection with `text` and leave a caret after it.
    ///
    /// This is the host's default insertion path, e.g. the plain newline used when Enter is
    /// not handled by auto-indent.
    pub fn replace_selection(&mut self, text: &str) {
        let selection = self.selection.clamp_to(self.char_len());
        self.rope.remove(selection.range());
        self.rope.insert(selection.start, text);
        self.selection = SelectionRange::caret(selection.start + text.chars().count());
    }
}

impl PlainTextSurface for TextBuffer {
    fn text(&self) -> String {
        self.rope.to_string()
    }

    fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.selection = self.selection.clamp_to(self.char_len());
    }

    fn selection(&self) -> SelectionRange {
        self.selection
    }

    fn set_selection(&mut self, selection: SelectionRange) {
        self.selection = selection.clamp_to(self.char_len());
    }
}
