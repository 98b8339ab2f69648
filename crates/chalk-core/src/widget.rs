//! Widget assembly: a [`SyncBridge`] plus the container's layout state.

use crate::config::ChalkConfig;
use crate::error::ChalkError;
use crate::surface::{FormatCommand, PlainTextSurface, RenderedSurface};
use crate::sync::{SyncBridge, SyncOutcome};
use crate::view::{HostElement, Layout, ViewMode};

/// A toolbar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    /// Switch the container's view mode.
    SetViewMode(ViewMode),
    /// Apply a formatting command to the rendered surface.
    Format(FormatCommand),
}

impl ToolbarAction {
    /// The standard toolbar: the view modes followed by the formatting commands.
    pub fn toolbar() -> Vec<ToolbarAction> {
        ViewMode::ALL
            .into_iter()
            .map(ToolbarAction::SetViewMode)
            .chain(FormatCommand::ALL.into_iter().map(ToolbarAction::Format))
            .collect()
    }

    /// Text label shown when no icon set is available.
    pub fn label(self) -> &'static str {
        match self {
            ToolbarAction::SetViewMode(mode) => mode.name(),
            ToolbarAction::Format(command) => command.name(),
        }
    }
}

/// An assembled dual-surface editing widget.
pub struct Widget<P, R> {
    bridge: SyncBridge<P, R>,
    layout: Layout,
}

impl<P, R> Widget<P, R>
where
    P: PlainTextSurface,
    R: RenderedSurface,
{
    /// Build a widget from a discovered host element and two fresh surfaces.
    pub fn assemble(
        host: HostElement,
        plain: P,
        rendered: R,
        config: ChalkConfig,
    ) -> Result<Self, ChalkError> {
        let layout = Layout::from_host(&host)?;
        let bridge = SyncBridge::attach(plain, rendered, config, &host.content)?;
        tracing::info!(
            target: "chalk::widget",
            kind = ?host.kind,
            view_mode = ?layout.view_mode(),
            "widget assembled"
        );
        Ok(Self { bridge, layout })
    }

    /// The synchronization bridge.
    pub fn bridge(&self) -> &SyncBridge<P, R> {
        &self.bridge
    }

    /// Mutable access to the bridge, for delivering key and change events.
    pub fn bridge_mut(&mut self) -> &mut SyncBridge<P, R> {
        &mut self.bridge
    }

    /// Current layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Run a toolbar action. Formatting actions report the refresh of the buffer.
    pub fn toolbar_action(&mut self, action: ToolbarAction) -> Option<SyncOutcome> {
        match action {
            ToolbarAction::SetViewMode(mode) => {
                self.layout.set_view_mode(mode);
                None
            }
            ToolbarAction::Format(command) => Some(self.bridge.apply_format(command)),
        }
    }

    /// Tear the widget down into its bridge.
    pub fn into_bridge(self) -> SyncBridge<P, R> {
        self.bridge
    }
}
