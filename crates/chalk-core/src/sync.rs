//! Plain-text ⇄ rendered synchronization.
//!
//! # Overview
//!
//! [`SyncBridge`] owns both surfaces and is driven by the host's events:
//!
//! | host event                           | bridge call                                     |
//! |--------------------------------------|-------------------------------------------------|
//! | key-down in the plain-text surface   | [`SyncBridge::handle_key_down`]                 |
//! | key-up in the plain-text surface     | [`SyncBridge::push_plain_text_to_rendered`]     |
//! | key-up in the rendered surface       | [`SyncBridge::pull_rendered_into_plain_text`]   |
//! | toolbar formatting button            | [`SyncBridge::apply_format`]                    |
//!
//! Each direction is a separate function that only writes to the *other* surface, so one edit
//! can never bounce back to where it came from. Both directions overwrite the target
//! completely; nothing is diffed or merged.
//!
//! # Known limitation
//!
//! A push from the plain-text side re-renders the whole document, so the caret inside the
//! rendered surface is not preserved across it.
//!
//! # Example
//!
//! ```rust
//! use chalk_core::{
//!     ChalkConfig, FormatCommand, Key, KeyDisposition, KeyInput, PlainTextSurface,
//!     RenderedSurface, SelectionRange, SurfaceError, SyncBridge, TextBuffer,
//! };
//!
//! #[derive(Default)]
//! struct Preview(String);
//!
//! impl RenderedSurface for Preview {
//!     fn replace_document(&mut self, content: &str) -> Result<(), SurfaceError> {
//!         self.0 = content.to_string();
//!         Ok(())
//!     }
//!     fn body_content(&self) -> Result<String, SurfaceError> {
//!         Ok(self.0.clone())
//!     }
//!     fn set_editable(&mut self, _editable: bool) -> Result<(), SurfaceError> {
//!         Ok(())
//!     }
//!     fn exec_command(&mut self, command: FormatCommand) -> Result<(), SurfaceError> {
//!         Err(SurfaceError::UnsupportedCommand(command.to_string()))
//!     }
//! }
//!
//! let mut bridge = SyncBridge::attach(
//!     TextBuffer::new(""),
//!     Preview::default(),
//!     ChalkConfig::spaces(2),
//!     "  item",
//! )
//! .unwrap();
//!
//! bridge.plain_mut().set_selection(SelectionRange::caret(6));
//! assert_eq!(bridge.handle_key_down(KeyInput::new(Key::Enter)), KeyDisposition::Handled);
//! assert!(bridge.push_plain_text_to_rendered().is_applied());
//!
//! assert_eq!(bridge.rendered().0, "  item\n  ");
//! ```

use crate::auto_indent::{AutoIndent, auto_indent};
use crate::config::{CaptureMode, ChalkConfig};
use crate::error::ChalkError;
use crate::indent::{IndentDirection, IndentEdit, indent};
use crate::selection::SelectionRange;
use crate::surface::{FormatCommand, PlainTextSurface, RenderedSurface};
use crate::text::char_len;

/// Which surface an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncDirection {
    /// The plain-text surface changed; the rendered surface is the target.
    FromPlainText,
    /// The rendered surface changed; the plain-text buffer is the target.
    FromRendered,
}

/// Result of one propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum SyncOutcome {
    /// The target surface now mirrors the source.
    Applied,
    /// The target (or source) surface was unavailable; the event was dropped and the buffer
    /// left as it was.
    Dropped,
}

impl SyncOutcome {
    /// Returns `true` for [`SyncOutcome::Applied`].
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Keys the bridge may intercept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Tab
    Tab,
    /// Enter / Return
    Enter,
    /// Any key the bridge leaves to the host.
    Other,
}

/// A key-down event on the plain-text surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    /// The pressed key.
    pub key: Key,
    /// Whether Shift (the outdent modifier) is held.
    pub shift: bool,
}

impl KeyInput {
    /// A key press without modifiers.
    pub fn new(key: Key) -> Self {
        Self { key, shift: false }
    }

    /// A key press with Shift held.
    pub fn shifted(key: Key) -> Self {
        Self { key, shift: true }
    }
}

/// What the host should do with a key-down event after the bridge saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// The bridge edited the buffer; suppress the host's default action.
    Handled,
    /// Let the host perform its default action (e.g. insert a plain newline).
    Default,
}

/// Keeps a plain-text surface and a rendered surface consistent.
pub struct SyncBridge<P, R> {
    plain: P,
    rendered: R,
    config: ChalkConfig,
}

impl<P, R> SyncBridge<P, R>
where
    P: PlainTextSurface,
    R: RenderedSurface,
{
    /// Wrap two surfaces without touching either of them.
    pub fn new(plain: P, rendered: R, config: ChalkConfig) -> Self {
        Self {
            plain,
            rendered,
            config,
        }
    }

    /// Validate `config`, load `content` into both surfaces and make the rendered surface
    /// editable.
    ///
    /// On failure both surfaces are dropped. Hosts that need them back should call
    /// [`new`](Self::new) and [`load`](Self::load) instead.
    pub fn attach(
        plain: P,
        rendered: R,
        config: ChalkConfig,
        content: &str,
    ) -> Result<Self, ChalkError> {
        let mut bridge = Self::new(plain, rendered, config);
        bridge.load(content)?;
        Ok(bridge)
    }

    /// Validate the configuration and load `content` into both surfaces.
    ///
    /// The rendered steps run first: if any of them fails, the plain-text surface is left
    /// untouched.
    pub fn load(&mut self, content: &str) -> Result<(), ChalkError> {
        self.config.validate()?;
        self.rendered.replace_document(content)?;
        self.rendered.set_editable(true)?;
        self.plain.set_text(content);
        tracing::debug!(target: "chalk::sync", chars = char_len(content), "attached");
        Ok(())
    }

    /// The plain-text surface.
    pub fn plain(&self) -> &P {
        &self.plain
    }

    /// Mutable access to the plain-text surface, for delivering the host's native edits.
    pub fn plain_mut(&mut self) -> &mut P {
        &mut self.plain
    }

    /// The rendered surface.
    pub fn rendered(&self) -> &R {
        &self.rendered
    }

    /// Mutable access to the rendered surface, for delivering the host's native edits.
    pub fn rendered_mut(&mut self) -> &mut R {
        &mut self.rendered
    }

    /// The active configuration.
    pub fn config(&self) -> &ChalkConfig {
        &self.config
    }

    /// Release both surfaces.
    pub fn into_parts(self) -> (P, R) {
        (self.plain, self.rendered)
    }

    /// Handle a key-down event on the plain-text surface.
    ///
    /// Tab indents (Shift+Tab outdents) the selection; Enter carries the line's indentation.
    /// The buffer is updated in place; the rendered surface is untouched until the matching
    /// key-up is delivered through [`push_plain_text_to_rendered`](Self::push_plain_text_to_rendered).
    pub fn handle_key_down(&mut self, input: KeyInput) -> KeyDisposition {
        match input.key {
            Key::Tab => {
                let (text, selection) = self.plain_state();
                let direction = IndentDirection::from_outdent_modifier(input.shift);
                let edit = indent(&text, selection, &self.config.indent_unit, direction);
                self.apply_edit(edit);
                KeyDisposition::Handled
            }
            Key::Enter => {
                let (text, selection) = self.plain_state();
                match auto_indent(&text, selection) {
                    AutoIndent::Handled(edit) => {
                        self.apply_edit(edit);
                        KeyDisposition::Handled
                    }
                    AutoIndent::NotHandled => KeyDisposition::Default,
                }
            }
            Key::Other => KeyDisposition::Default,
        }
    }

    /// Run the propagation for a change that originated on the surface named by `direction`.
    pub fn handle_change(&mut self, direction: SyncDirection) -> SyncOutcome {
        match direction {
            SyncDirection::FromPlainText => self.push_plain_text_to_rendered(),
            SyncDirection::FromRendered => self.pull_rendered_into_plain_text(),
        }
    }

    /// Replace the rendered document with the full buffer. Never reads the rendered surface.
    pub fn push_plain_text_to_rendered(&mut self) -> SyncOutcome {
        let text = self.plain.text();
        match self.rendered.replace_document(&text) {
            Ok(()) => {
                tracing::debug!(
                    target: "chalk::sync",
                    chars = char_len(&text),
                    "plain text -> rendered"
                );
                SyncOutcome::Applied
            }
            Err(err) => {
                tracing::warn!(target: "chalk::sync", %err, "dropped plain text -> rendered");
                SyncOutcome::Dropped
            }
        }
    }

    /// Copy the rendered surface's content verbatim into the buffer. Never writes the rendered
    /// surface.
    pub fn pull_rendered_into_plain_text(&mut self) -> SyncOutcome {
        let content = match self.config.capture {
            CaptureMode::Body => self.rendered.body_content(),
            CaptureMode::Document => self.rendered.document_content(),
        };
        match content {
            Ok(content) => {
                tracing::debug!(
                    target: "chalk::sync",
                    chars = char_len(&content),
                    "rendered -> plain text"
                );
                self.plain.set_text(&content);
                SyncOutcome::Applied
            }
            Err(err) => {
                tracing::warn!(target: "chalk::sync", %err, "dropped rendered -> plain text");
                SyncOutcome::Dropped
            }
        }
    }

    /// Issue `command` to the rendered surface, then refresh the buffer from it.
    pub fn apply_format(&mut self, command: FormatCommand) -> SyncOutcome {
        if let Err(err) = self.rendered.exec_command(command) {
            tracing::warn!(target: "chalk::sync", %command, %err, "format command rejected");
            return SyncOutcome::Dropped;
        }
        self.pull_rendered_into_plain_text()
    }

    fn plain_state(&self) -> (String, SelectionRange) {
        let text = self.plain.text();
        let selection = self.plain.selection().clamp_to(char_len(&text));
        (text, selection)
    }

    fn apply_edit(&mut self, edit: IndentEdit) {
        self.plain.set_text(&edit.text);
        self.plain.set_selection(edit.selection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SurfaceError;
    use crate::surface::TextBuffer;

    #[derive(Default)]
    struct Recorder {
        document: String,
        writes: usize,
        reads: std::cell::Cell<usize>,
        editable: bool,
        offline: bool,
    }

    impl RenderedSurface for Recorder {
        fn replace_document(&mut self, content: &str) -> Result<(), SurfaceError> {
            if self.offline {
                return Err(SurfaceError::Unavailable);
            }
            self.document = content.to_string();
            self.writes += 1;
            Ok(())
        }

        fn body_content(&self) -> Result<String, SurfaceError> {
            if self.offline {
                return Err(SurfaceError::Unavailable);
            }
            self.reads.set(self.reads.get() + 1);
            Ok(self.document.clone())
        }

        fn set_editable(&mut self, editable: bool) -> Result<(), SurfaceError> {
            self.editable = editable;
            Ok(())
        }

        fn exec_command(&mut self, command: FormatCommand) -> Result<(), SurfaceError> {
            if !self.editable {
                return Err(SurfaceError::NotEditable);
            }
            self.document = format!("<{command}>{}</{command}>", self.document);
            Ok(())
        }
    }

    fn bridge(content: &str) -> SyncBridge<TextBuffer, Recorder> {
        SyncBridge::attach(
            TextBuffer::new(""),
            Recorder::default(),
            ChalkConfig::tabs(),
            content,
        )
        .unwrap()
    }

    #[test]
    fn test_attach_loads_both_surfaces() {
        let bridge = bridge("<p>hi</p>");
        assert_eq!(bridge.plain().text(), "<p>hi</p>");
        assert_eq!(bridge.rendered().document, "<p>hi</p>");
        assert_eq!(bridge.rendered().writes, 1);
        assert!(bridge.rendered().editable);
    }

    #[test]
    fn test_attach_rejects_invalid_config() {
        let result = SyncBridge::attach(
            TextBuffer::new(""),
            Recorder::default(),
            ChalkConfig::default().with_indent_unit(""),
            "x",
        );
        assert!(matches!(result, Err(ChalkError::Config(_))));
    }

    #[test]
    fn test_failed_load_keeps_plain_surface() {
        let offline = Recorder {
            offline: true,
            ..Recorder::default()
        };
        let mut bridge =
            SyncBridge::new(TextBuffer::new("unsaved"), offline, ChalkConfig::tabs());
        assert!(matches!(
            bridge.load("<p>new</p>"),
            Err(ChalkError::Surface(SurfaceError::Unavailable))
        ));

        let (plain, mut rendered) = bridge.into_parts();
        assert_eq!(plain.text(), "unsaved");
        assert!(!rendered.editable);

        rendered.offline = false;
        let bridge =
            SyncBridge::attach(plain, rendered, ChalkConfig::tabs(), "<p>new</p>").unwrap();
        assert_eq!(bridge.plain().text(), "<p>new</p>");
        assert!(bridge.rendered().editable);
    }

    #[test]
    fn test_push_does_not_read_back() {
        let mut bridge = bridge("a");
        bridge.plain_mut().set_text("ab");
        assert_eq!(bridge.push_plain_text_to_rendered(), SyncOutcome::Applied);
        assert_eq!(bridge.rendered().document, "ab");
        assert_eq!(bridge.rendered().reads.get(), 0);
    }

    #[test]
    fn test_pull_does_not_write_back() {
        let mut bridge = bridge("a");
        bridge.rendered_mut().document = "a<i>b</i>".to_string();
        assert_eq!(
            bridge.handle_change(SyncDirection::FromRendered),
            SyncOutcome::Applied
        );
        assert_eq!(bridge.plain().text(), "a<i>b</i>");
        assert_eq!(bridge.rendered().writes, 1);
    }

    #[test]
    fn test_tab_and_enter_edit_only_the_buffer() {
        let mut bridge = bridge("\tx");
        bridge.plain_mut().set_selection(SelectionRange::caret(2));

        assert_eq!(
            bridge.handle_key_down(KeyInput::new(Key::Enter)),
            KeyDisposition::Handled
        );
        assert_eq!(
            bridge.handle_key_down(KeyInput::new(Key::Tab)),
            KeyDisposition::Handled
        );
        assert_eq!(bridge.plain().text(), "\tx\n\t\t");
        assert_eq!(bridge.plain().selection(), SelectionRange::caret(5));
        assert_eq!(bridge.rendered().document, "\tx");
    }

    #[test]
    fn test_unhandled_keys_fall_back_to_host() {
        let mut bridge = bridge("x");
        bridge.plain_mut().set_selection(SelectionRange::caret(1));
        assert_eq!(
            bridge.handle_key_down(KeyInput::new(Key::Enter)),
            KeyDisposition::Default
        );
        assert_eq!(
            bridge.handle_key_down(KeyInput::shifted(Key::Other)),
            KeyDisposition::Default
        );
        assert_eq!(bridge.plain().text(), "x");
    }

    #[test]
    fn test_dropped_push_keeps_buffer() {
        let mut bridge = bridge("keep");
        bridge.rendered_mut().offline = true;
        bridge.plain_mut().set_text("keep me");

        assert_eq!(bridge.push_plain_text_to_rendered(), SyncOutcome::Dropped);
        assert_eq!(bridge.pull_rendered_into_plain_text(), SyncOutcome::Dropped);
        assert_eq!(bridge.plain().text(), "keep me");
    }

    #[test]
    fn test_format_command_refreshes_buffer() {
        let mut bridge = bridge("x");
        assert!(bridge.apply_format(FormatCommand::Bold).is_applied());
        assert_eq!(bridge.plain().text(), "<bold>x</bold>");

        bridge.rendered_mut().editable = false;
        assert_eq!(
            bridge.apply_format(FormatCommand::Italic),
            SyncOutcome::Dropped
        );
        assert_eq!(bridge.plain().text(), "<bold>x</bold>");
    }
}
