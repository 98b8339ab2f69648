#![warn(missing_docs)]
//! Chalk Core - Headless Dual-Surface Editing Kernel
//!
//! # Overview
//!
//! `chalk-core` keeps a plain-text buffer and an editable rendered view of the same content in
//! sync. It does not draw anything: the host supplies both surfaces (a text control and a
//! formatted view such as a `designMode` document) and forwards their events to the core.
//!
//! # Core Features
//!
//! - **Block Indentation**: Tab / Shift+Tab indent and outdent every line a selection touches
//! - **Auto Indent**: Enter carries the current line's leading whitespace onto the new line
//! - **One-Way Propagation**: each edit overwrites the opposite surface wholesale, never echoes
//! - **Failure Isolation**: an unavailable rendered surface drops the event, never the buffer
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Widget (host element + layout + toolbar)   │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  SyncBridge (key + change events)           │  ← Event Wiring
//! ├─────────────────────────────────────────────┤
//! │  IndentEngine / AutoIndentEngine            │  ← Pure Text Edits
//! ├─────────────────────────────────────────────┤
//! │  SelectionRange (char offsets)              │  ← Shared Contract
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use chalk_core::{AutoIndent, IndentDirection, SelectionRange, auto_indent, indent};
//!
//! let edit = indent("abc", SelectionRange::caret(1), "  ", IndentDirection::Indent);
//! assert_eq!(edit.text, "a  bc");
//! assert_eq!(edit.selection, SelectionRange::caret(3));
//!
//! match auto_indent("  foo", SelectionRange::caret(5)) {
//!     AutoIndent::Handled(edit) => assert_eq!(edit.text, "  foo\n  "),
//!     AutoIndent::NotHandled => unreachable!(),
//! }
//! ```
//!
//! # Module Description
//!
//! - [`selection`] - Character-offset selection ranges
//! - [`indent`] - Tab-key indentation (single caret and line blocks)
//! - [`auto_indent`] - Enter-key indentation carry
//! - [`surface`] - Surface traits, formatting commands and a rope-backed text buffer
//! - [`sync`] - The synchronization bridge
//! - [`config`] - Configuration
//! - [`view`] - Host elements and view modes
//! - [`widget`] - Widget assembly and toolbar actions
//!
//! # Logging
//!
//! Decisions are reported through `tracing` under the `chalk::indent`, `chalk::sync` and
//! `chalk::widget` targets. The crate never installs a subscriber.

pub mod auto_indent;
pub mod config;
pub mod error;
pub mod indent;
pub mod selection;
pub mod surface;
pub mod sync;
mod text;
pub mod view;
pub mod widget;

pub use auto_indent::{AutoIndent, auto_indent};
pub use config::{CaptureMode, ChalkConfig, DEFAULT_INDENT_UNIT};
pub use error::{ChalkError, ConfigError, SurfaceError};
pub use indent::{IndentDirection, IndentEdit, indent};
pub use selection::SelectionRange;
pub use surface::{FormatCommand, PlainTextSurface, RenderedSurface, TextBuffer};
pub use sync::{Key, KeyDisposition, KeyInput, SyncBridge, SyncDirection, SyncOutcome};
pub use view::{HostElement, HostKind, Layout, ROOT_CLASS, ViewMode};
pub use widget::{ToolbarAction, Widget};
