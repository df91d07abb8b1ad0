//! Error types for the pathclerk library.
//!
//! This module provides the error hierarchy for both the path algebra and the
//! filesystem layer, using `thiserror` for ergonomic error handling.
//!
//! The algebra only ever produces the four structural kinds
//! ([`Error::IllegalArgument`], [`Error::NotFound`],
//! [`Error::AmbiguousSubpath`] and [`Error::IllegalOperation`]) so callers can
//! tell "not found" apart from "ambiguous" apart from "structurally illegal".

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathclerk error.
///
/// # Examples
///
/// ```
/// use pathclerk::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathclerk library.
#[derive(Debug, Error)]
pub enum Error {
    /// The caller supplied a structurally invalid combination of arguments.
    #[error("illegal argument: {reason}")]
    IllegalArgument {
        /// Why the arguments were rejected.
        reason: String,
    },

    /// A named segment was requested but does not occur in the path.
    #[error("segment '{segment}' not found in '{path}'")]
    NotFound {
        /// The segment that was looked up.
        segment: String,
        /// The path that was searched.
        path: String,
    },

    /// A single segment was required but a multi-segment string was given.
    #[error("ambiguous subpath '{subpath}': expected a single segment")]
    AmbiguousSubpath {
        /// The offending multi-segment string.
        subpath: String,
    },

    /// The requested mutation is undefined for the shape of the path.
    #[error("cannot {operation} '{path}'")]
    IllegalOperation {
        /// The operation that was attempted.
        operation: &'static str,
        /// The path it was attempted on.
        path: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// A path already exists and the conflict mode forbids replacing it.
    #[error("path already exists: {}", path.display())]
    PathExists {
        /// The existing path.
        path: PathBuf,
    },

    /// A directory was required.
    #[error("not a directory: {}", path.display())]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// A regular file was required.
    #[error("not a file: {}", path.display())]
    NotAFile {
        /// The offending path.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },
}

impl Error {
    pub(crate) fn illegal_argument(reason: impl Into<String>) -> Self {
        Self::IllegalArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn illegal_operation(operation: &'static str, path: &str) -> Self {
        Self::IllegalOperation {
            operation,
            path: path.to_string(),
        }
    }

    /// Check if error indicates a missing segment or path.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathclerk::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::PathNotFound { .. })
    }

    /// Check if error is an ambiguous-subpath lookup.
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::AmbiguousSubpath { .. })
    }

    /// Check if error is an illegal argument.
    #[must_use]
    pub fn is_illegal_argument(&self) -> bool {
        matches!(self, Self::IllegalArgument { .. })
    }

    /// Check if error is an illegal operation.
    #[must_use]
    pub fn is_illegal_operation(&self) -> bool {
        matches!(self, Self::IllegalOperation { .. })
    }

    /// Check if error came out of the path algebra rather than the filesystem.
    #[must_use]
    pub fn is_algebra_error(&self) -> bool {
        matches!(
            self,
            Self::IllegalArgument { .. }
                | Self::NotFound { .. }
                | Self::AmbiguousSubpath { .. }
                | Self::IllegalOperation { .. }
        )
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathclerk::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PermissionDenied { path: PathBuf::from("/restricted") };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}
