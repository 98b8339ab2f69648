//! Error types.
//!
//! Per-event synchronization never fails with an error (a rejected propagation is reported as
//! [`SyncOutcome::Dropped`](crate::SyncOutcome::Dropped)); these types cover setup and the
//! surface contracts.

use thiserror::Error;

#[derive(Debug, Error)]
/// Invalid widget configuration.
pub enum ConfigError {
    #[error("indent unit must not be empty")]
    /// The indent unit is the empty string.
    EmptyIndentUnit,

    #[error("indent unit must not contain a line feed: {0:?}")]
    /// The indent unit spans lines, which would break block outdent.
    IndentUnitLineFeed(String),

    #[error("invalid configuration JSON: {0}")]
    /// The configuration document could not be parsed.
    Json(#[from] serde_json::Error),

    #[error("unknown view mode '{0}'")]
    /// A view-mode class that is not one of the known layouts.
    UnknownViewMode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// A surface refused an operation.
pub enum SurfaceError {
    #[error("rendered surface is unavailable")]
    /// The host surface is gone (detached, not yet loaded, ...).
    Unavailable,

    #[error("document is not open for writing")]
    /// `write`/`close` was called without a preceding `open`.
    NotOpen,

    #[error("rendered surface is not editable")]
    /// A formatting command was issued while editing is switched off.
    NotEditable,

    #[error("unsupported command '{0}'")]
    /// A formatting command name that the surface does not know.
    UnsupportedCommand(String),
}

#[derive(Debug, Error)]
/// Errors returned while assembling a widget.
pub enum ChalkError {
    #[error(transparent)]
    /// Configuration failed validation.
    Config(#[from] ConfigError),

    #[error(transparent)]
    /// The rendered surface rejected the initial assembly.
    Surface(#[from] SurfaceError),
}
