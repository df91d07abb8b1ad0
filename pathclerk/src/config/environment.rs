//! Environment variable overrides.
//!
//! Every `PATHCLERK_*` variable that is set replaces the corresponding
//! configuration field, whatever the configuration file says.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::fs::ConflictMode;
use std::env;
use std::path::PathBuf;

/// Characters that make a path segment illegal.
pub const FORBIDDEN_CHARS_VAR: &str = "PATHCLERK_FORBIDDEN_CHARS";
/// Default conflict mode (`o`, `a`, `x` or the full names).
pub const CONFLICT_MODE_VAR: &str = "PATHCLERK_CONFLICT_MODE";
/// Whether hidden entries are listed.
pub const INCLUDE_HIDDEN_VAR: &str = "PATHCLERK_INCLUDE_HIDDEN";
/// Trash directory.
pub const TRASH_DIR_VAR: &str = "PATHCLERK_TRASH_DIR";
/// Output format (`text` or `json`).
pub const OUTPUT_FORMAT_VAR: &str = "PATHCLERK_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathclerk::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to `config`.
    ///
    /// # Errors
    ///
    /// Returns `Validation` naming the variable if any value is invalid.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(chars) = env::var(FORBIDDEN_CHARS_VAR) {
            config.forbidden_chars = Some(Self::parse_chars(&chars));
        }

        if let Ok(mode) = env::var(CONFLICT_MODE_VAR) {
            config.conflict_mode = Some(Self::parse_conflict_mode(&mode)?);
        }

        if let Ok(val) = env::var(INCLUDE_HIDDEN_VAR) {
            config.include_hidden = Some(Self::parse_bool(INCLUDE_HIDDEN_VAR, &val)?);
        }

        if let Ok(dir) = env::var(TRASH_DIR_VAR) {
            if dir.trim().is_empty() {
                return Err(Error::Validation {
                    field: TRASH_DIR_VAR.into(),
                    message: "Must not be empty".into(),
                });
            }
            config.trash_dir = Some(PathBuf::from(dir));
        }

        if let Ok(format) = env::var(OUTPUT_FORMAT_VAR) {
            config.output_format = Some(Self::parse_output_format(&format)?);
        }

        Ok(())
    }

    /// Each character of `s`, ignoring commas and whitespace so that both
    /// `:?*` and `:, ?, *` work.
    fn parse_chars(s: &str) -> Vec<char> {
        let mut chars: Vec<char> = Vec::new();
        for c in s.chars().filter(|c| *c != ',' && !c.is_whitespace()) {
            if !chars.contains(&c) {
                chars.push(c);
            }
        }
        chars
    }

    fn parse_conflict_mode(s: &str) -> Result<ConflictMode> {
        s.trim().parse().map_err(|_| Error::Validation {
            field: CONFLICT_MODE_VAR.into(),
            message: format!("Invalid conflict mode: '{s}' (expected o/a/x)"),
        })
    }

    fn parse_output_format(s: &str) -> Result<OutputFormat> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(Error::Validation {
                field: OUTPUT_FORMAT_VAR.into(),
                message: format!("Invalid output format: '{s}' (expected text/json)"),
            }),
        }
    }

    /// Parse boolean from string.
    ///
    /// Accepts: true/false, 1/0, yes/no, on/off (case-insensitive)
    pub(crate) fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
