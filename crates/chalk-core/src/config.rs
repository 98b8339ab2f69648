//! Widget configuration.
//!
//! ```rust
//! use chalk_core::{CaptureMode, ChalkConfig};
//!
//! let config = ChalkConfig::from_json_str(r#"{ "indent_unit": "\t" }"#).unwrap();
//! assert_eq!(config.indent_unit, "\t");
//! assert_eq!(config.capture, CaptureMode::Body);
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Indent unit used when none is configured: four spaces.
pub const DEFAULT_INDENT_UNIT: &str = "    ";

/// Which part of the rendered document flows back into the plain-text buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureMode {
    /// Only the body's content, without the body element itself.
    #[default]
    Body,
    /// The whole document source, head included.
    Document,
}

/// Configuration recognized by the editing core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChalkConfig {
    /// String inserted per indent level.
    #[serde(alias = "tab")]
    pub indent_unit: String,
    /// Rendered → plain-text capture mode.
    pub capture: CaptureMode,
}

impl Default for ChalkConfig {
    fn default() -> Self {
        Self {
            indent_unit: DEFAULT_INDENT_UNIT.to_string(),
            capture: CaptureMode::Body,
        }
    }
}

impl ChalkConfig {
    /// Indent with `width` spaces.
    pub fn spaces(width: usize) -> Self {
        Self::default().with_indent_unit(" ".repeat(width))
    }

    /// Indent with a literal tab character.
    pub fn tabs() -> Self {
        Self::default().with_indent_unit("\t")
    }

    /// Replace the indent unit.
    pub fn with_indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = unit.into();
        self
    }

    /// Replace the capture mode.
    pub fn with_capture(mut self, capture: CaptureMode) -> Self {
        self.capture = capture;
        self
    }

    /// Parse and validate a JSON configuration. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the indent engine cannot use meaningfully.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent_unit.is_empty() {
            return Err(ConfigError::EmptyIndentUnit);
        }
        if self.indent_unit.contains('\n') {
            return Err(ConfigError::IndentUnitLineFeed(self.indent_unit.clone()));
        }
        Ok(())
    }
}
