//! `chalk-html` - an in-memory HTML document surface for `chalk-core`.
//!
//! [`HtmlFrame`] behaves like the document of an editable frame: content arrives through an
//! `open` → `write` → `close` stream, the body can be edited in place once design mode is on,
//! and formatting commands wrap the current body selection in inline tags. It is meant for
//! headless hosts and tests that need a real [`RenderedSurface`] without a browser.

mod document;

pub use document::Document;

use chalk_core::{FormatCommand, RenderedSurface, SurfaceError};
use std::ops::Range;

/// An editable HTML document held in memory.
#[derive(Debug, Clone)]
pub struct HtmlFrame {
    parser: document::DocumentParser,
    document: Document,
    stream: Option<String>,
    attached: bool,
    design_mode: bool,
    selection: Option<Range<usize>>,
    writes: usize,
}

impl HtmlFrame {
    /// Create an attached frame holding an empty document.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            parser: document::DocumentParser::new()?,
            document: Document::default(),
            stream: None,
            attached: true,
            design_mode: false,
            selection: None,
            writes: 0,
        })
    }

    /// Start a new document stream, discarding the current document.
    pub fn open(&mut self) -> Result<(), SurfaceError> {
        self.ensure_attached()?;
        self.stream = Some(String::new());
        self.document = Document::default();
        self.selection = None;
        Ok(())
    }

    /// Append markup to the open stream.
    pub fn write(&mut self, markup: &str) -> Result<(), SurfaceError> {
        self.ensure_attached()?;
        self.stream
            .as_mut()
            .ok_or(SurfaceError::NotOpen)?
            .push_str(markup);
        Ok(())
    }

    /// Finish the stream and materialize the document.
    pub fn close(&mut self) -> Result<(), SurfaceError> {
        self.ensure_attached()?;
        let source = self.stream.take().ok_or(SurfaceError::NotOpen)?;
        self.document = self.parser.parse(&source);
        self.writes += 1;
        tracing::trace!(
            target: "chalk_html::frame",
            body_len = self.document.body.len(),
            "document closed"
        );
        Ok(())
    }

    /// The materialized document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Whether design mode (in-place editing) is on.
    pub fn design_mode(&self) -> bool {
        self.design_mode
    }

    /// Whether the frame is attached to its host.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Number of completed document writes.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Simulate the host removing the frame. Every operation fails until [`attach`](Self::attach).
    pub fn detach(&mut self) {
        self.attached = false;
        self.stream = None;
    }

    /// Re-attach a detached frame. The document it held is kept.
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Select a range of the body (character offsets, clamped to the body).
    pub fn select(&mut self, range: Range<usize>) {
        let len = self.document.body.chars().count();
        let start = range.start.min(len);
        let end = range.end.min(len).max(start);
        self.selection = Some(start..end);
    }

    /// The current body selection.
    pub fn selection(&self) -> Option<Range<usize>> {
        self.selection.clone()
    }

    /// Simulate the user typing into the body: the selection (or the end of the body when
    /// nothing is selected) is replaced by `text`.
    pub fn type_text(&mut self, text: &str) -> Result<(), SurfaceError> {
        self.ensure_editable()?;
        let len = self.document.body.chars().count();
        let range = self.selection.clone().unwrap_or(len..len);
        let body = &mut self.document.body;
        let start = char_to_byte(body, range.start);
        let end = char_to_byte(body, range.end);
        body.replace_range(start..end, text);
        let caret = range.start + text.chars().count();
        self.selection = Some(caret..caret);
        Ok(())
    }

    fn ensure_attached(&self) -> Result<(), SurfaceError> {
        if self.attached {
            Ok(())
        } else {
            Err(SurfaceError::Unavailable)
        }
    }

    fn ensure_editable(&self) -> Result<(), SurfaceError> {
        self.ensure_attached()?;
        if self.design_mode {
            Ok(())
        } else {
            Err(SurfaceError::NotEditable)
        }
    }
}

impl RenderedSurface for HtmlFrame {
    fn replace_document(&mut self, content: &str) -> Result<(), SurfaceError> {
        self.open()?;
        self.write(content)?;
        self.close()
    }

    fn body_content(&self) -> Result<String, SurfaceError> {
        self.ensure_attached()?;
        Ok(self.document.body.clone())
    }

    fn document_content(&self) -> Result<String, SurfaceError> {
        self.ensure_attached()?;
        Ok(self.document.source())
    }

    fn set_editable(&mut self, editable: bool) -> Result<(), SurfaceError> {
        self.ensure_attached()?;
        self.design_mode = editable;
        Ok(())
    }

    /// Wrap the selected body text in the command's inline tag. A collapsed or missing
    /// selection leaves the document unchanged.
    fn exec_command(&mut self, command: FormatCommand) -> Result<(), SurfaceError> {
        self.ensure_editable()?;
        let Some(range) = self.selection.clone().filter(|range| !range.is_empty()) else {
            return Ok(());
        };

        let tag = inline_tag(command);
        let open = format!("<{tag}>");
        let close = format!("</{tag}>");
        let body = &mut self.document.body;
        let start = char_to_byte(body, range.start);
        let end = char_to_byte(body, range.end);
        body.insert_str(end, &close);
        body.insert_str(start, &open);

        let inner_start = range.start + open.chars().count();
        self.selection = Some(inner_start..inner_start + range.len());
        tracing::debug!(target: "chalk_html::frame", %command, ?range, "format applied");
        Ok(())
    }
}

fn inline_tag(command: FormatCommand) -> &'static str {
    match command {
        FormatCommand::Bold => "b",
        FormatCommand::Italic => "i",
        FormatCommand::Underline => "u",
        FormatCommand::StrikeThrough => "strike",
    }
}

/// Body selections are character offsets; `chalk-core` keeps its own offset helpers private.
fn char_to_byte(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}
