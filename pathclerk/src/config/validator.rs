//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::path::SEPARATOR;
use std::path::Path;

/// Validates a configuration after all layers are merged.
///
/// # Examples
///
/// ```
/// use pathclerk::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { forbidden_chars: Some(vec!['/']), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns `Validation` naming the offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref chars) = config.forbidden_chars {
            Self::validate_forbidden_chars(chars)?;
        }

        if let Some(ref dir) = config.trash_dir {
            Self::validate_trash_dir(dir)?;
        }

        Ok(())
    }

    /// The separator and the hidden/extension dot are structural, and
    /// whitespace is always legal in a segment.
    fn validate_forbidden_chars(chars: &[char]) -> Result<()> {
        for &c in chars {
            let message = if c == SEPARATOR {
                "The separator '/' cannot be forbidden"
            } else if c == '.' {
                "'.' cannot be forbidden"
            } else if c.is_whitespace() {
                "Whitespace cannot be forbidden"
            } else if c == '\0' {
                "NUL is always illegal and need not be listed"
            } else {
                continue;
            };
            return Err(Error::Validation {
                field: "forbidden_chars".into(),
                message: message.into(),
            });
        }
        Ok(())
    }

    fn validate_trash_dir(dir: &Path) -> Result<()> {
        let text = dir.to_string_lossy();
        if text.trim().is_empty() {
            return Err(Error::Validation {
                field: "trash_dir".into(),
                message: "Trash directory cannot be empty".into(),
            });
        }
        if text.contains('\0') {
            return Err(Error::Validation {
                field: "trash_dir".into(),
                message: "Trash directory cannot contain null bytes".into(),
            });
        }
        Ok(())
    }
}
