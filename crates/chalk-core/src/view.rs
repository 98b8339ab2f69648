//! Host elements and view-mode layout state.
//!
//! The widget does not render chrome itself; it tracks which layout the container is in so the
//! host can apply the matching CSS classes.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Class every widget container carries.
pub const ROOT_CLASS: &str = "chalk-root";

/// How the two surfaces are arranged inside the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewMode {
    /// Plain text only; the rendered surface is hidden.
    TextOnly,
    /// Plain text on the left, rendered view on the right.
    TextLeft,
    /// Plain text above the rendered view.
    TextTop,
    /// Plain text on the right, rendered view on the left.
    TextRight,
    /// Rendered view only; the plain text is hidden.
    TextHide,
}

impl ViewMode {
    /// All modes, in toolbar order.
    pub const ALL: [ViewMode; 5] = [
        ViewMode::TextOnly,
        ViewMode::TextLeft,
        ViewMode::TextTop,
        ViewMode::TextRight,
        ViewMode::TextHide,
    ];

    /// Short name, e.g. `text-left`.
    pub fn name(self) -> &'static str {
        match self {
            ViewMode::TextOnly => "text-only",
            ViewMode::TextLeft => "text-left",
            ViewMode::TextTop => "text-top",
            ViewMode::TextRight => "text-right",
            ViewMode::TextHide => "text-hide",
        }
    }

    /// Container class, e.g. `chalk-text-left`.
    pub fn css_class(self) -> &'static str {
        match self {
            ViewMode::TextOnly => "chalk-text-only",
            ViewMode::TextLeft => "chalk-text-left",
            ViewMode::TextTop => "chalk-text-top",
            ViewMode::TextRight => "chalk-text-right",
            ViewMode::TextHide => "chalk-text-hide",
        }
    }

    /// Whether the plain-text surface is visible.
    pub fn shows_plain_text(self) -> bool {
        self != ViewMode::TextHide
    }

    /// Whether the rendered surface is visible.
    pub fn shows_rendered(self) -> bool {
        self != ViewMode::TextOnly
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ViewMode {
    type Err = ConfigError;

    /// Accepts both the short name (`text-top`) and the class (`chalk-text-top`).
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let name = value.trim();
        let name = name.strip_prefix("chalk-").unwrap_or(name);
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == name)
            .ok_or_else(|| ConfigError::UnknownViewMode(value.to_string()))
    }
}

/// What kind of element the widget was built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKind {
    /// A text area: its value becomes the buffer.
    TextArea,
    /// A block container: its markup becomes the buffer.
    Container,
}

/// Everything host discovery hands to the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostElement {
    /// Element kind.
    pub kind: HostKind,
    /// Initial content.
    pub content: String,
    /// Initial width in pixels.
    pub width: u32,
    /// Initial height in pixels.
    pub height: u32,
    /// Optional initial view-mode class.
    pub view_class: Option<String>,
}

impl HostElement {
    /// A text-area host with the given value.
    pub fn text_area(content: impl Into<String>) -> Self {
        Self {
            kind: HostKind::TextArea,
            content: content.into(),
            width: 0,
            height: 0,
            view_class: None,
        }
    }

    /// A container host with the given markup.
    pub fn container(content: impl Into<String>) -> Self {
        Self {
            kind: HostKind::Container,
            ..Self::text_area(content)
        }
    }

    /// Set the initial size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the initial view-mode class.
    pub fn with_view_class(mut self, class: impl Into<String>) -> Self {
        self.view_class = Some(class.into());
        self
    }
}

/// Size and view mode of a widget container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    view_mode: Option<ViewMode>,
}

impl Layout {
    /// Derive the initial layout from a host element.
    ///
    /// Text areas without an explicit class start in [`ViewMode::TextHide`]; containers start
    /// without a mode class.
    pub fn from_host(host: &HostElement) -> Result<Self, ConfigError> {
        let view_mode = match (&host.view_class, host.kind) {
            (Some(class), _) => Some(class.parse()?),
            (None, HostKind::TextArea) => Some(ViewMode::TextHide),
            (None, HostKind::Container) => None,
        };
        Ok(Self {
            width: host.width,
            height: host.height,
            view_mode,
        })
    }

    /// Current view mode, if one has been selected.
    pub fn view_mode(&self) -> Option<ViewMode> {
        self.view_mode
    }

    /// Switch to `mode`, replacing whichever mode was active.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = Some(mode);
    }

    /// Classes the container should carry right now.
    pub fn css_classes(&self) -> Vec<&'static str> {
        let mut classes = vec![ROOT_CLASS];
        classes.extend(self.view_mode.map(ViewMode::css_class));
        classes
    }
}
