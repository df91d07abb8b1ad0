//! Configuration schema definitions.
//!
//! Every field is optional so that partial files and environment overrides
//! can be layered; the `effective_*` accessors fill in the defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::platform::{Platform, Shortcuts};
use crate::fs::ConflictMode;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use pathclerk::config::Config;
/// use pathclerk::fs::ConflictMode;
///
/// let config = Config {
///     conflict_mode: Some(ConflictMode::Append),
///     ..Default::default()
/// };
/// assert_eq!(config.effective_conflict_mode(), ConflictMode::Append);
/// assert!(config.effective_include_hidden());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Characters that make a path segment illegal, replacing the platform
    /// table.
    pub forbidden_chars: Option<Vec<char>>,

    /// How placements settle an existing target.
    pub conflict_mode: Option<ConflictMode>,

    /// Whether listings and walks include hidden entries.
    pub include_hidden: Option<bool>,

    /// Where `move_to_trash` puts items.
    pub trash_dir: Option<PathBuf>,

    /// Output format for structured command output.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Forbidden characters in effect: configured, or the current platform's.
    #[must_use]
    pub fn effective_forbidden_chars(&self) -> Vec<char> {
        self.forbidden_chars
            .clone()
            .unwrap_or_else(|| Platform::current().forbidden_chars().to_vec())
    }

    /// Conflict mode in effect; exclusive unless configured.
    #[must_use]
    pub fn effective_conflict_mode(&self) -> ConflictMode {
        self.conflict_mode.unwrap_or_default()
    }

    /// Whether hidden entries are included; true unless configured.
    #[must_use]
    pub fn effective_include_hidden(&self) -> bool {
        self.include_hidden.unwrap_or(true)
    }

    /// Trash directory in effect: configured, or the platform trash.
    ///
    /// Returns `None` when neither is available.
    #[must_use]
    pub fn effective_trash_dir(&self) -> Option<PathBuf> {
        self.trash_dir
            .clone()
            .or_else(|| Shortcuts::resolve().ok().and_then(|s| s.trash))
    }

    /// Output format in effect; text unless configured.
    #[must_use]
    pub fn effective_output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

/// Output format for structured command output.
///
/// # Examples
///
/// ```
/// use pathclerk::config::OutputFormat;
///
/// assert_eq!(OutputFormat::Json.to_string(), "json");
/// assert_eq!(OutputFormat::default(), OutputFormat::Text);
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One value per line.
    #[default]
    Text,
    /// JSON document.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}
