//! Core types for the path algebra.
//!
//! This module defines the position selector shared by the navigation and
//! mutation operations, and the decomposition returned by
//! [`deconstruct`](super::mutate::deconstruct).

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Result;

use super::navigate::index;

/// Selects a segment of a path, either by position or by name.
///
/// Negative indices count from the end of the path. Names are resolved to
/// the position of the first segment that matches exactly.
///
/// # Examples
///
/// ```
/// use pathclerk::path::Position;
///
/// let by_index = Position::from(1);
/// let from_end = Position::from(-1);
/// let by_name = Position::from("B");
///
/// assert_eq!(by_index, Position::Index(1));
/// assert_eq!(from_end, Position::Index(-1));
/// assert_eq!(by_name, Position::Name("B".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Position {
    /// A segment index; negative values count from the end.
    Index(isize),

    /// The first segment whose text equals this name.
    Name(String),
}

impl Position {
    /// Resolve this position against a path, returning a signed index.
    ///
    /// Names are looked up with [`index`]; indices are returned unchanged so
    /// that each operation can apply its own bounds policy.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` or `AmbiguousSubpath` when a name cannot be
    /// resolved.
    pub fn resolve(&self, path: &str) -> Result<isize> {
        match self {
            Self::Index(i) => Ok(*i),
            Self::Name(name) => {
                let found = index(name, path)?;
                Ok(isize::try_from(found).unwrap_or(isize::MAX))
            }
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Name(name) => write!(f, "'{name}'"),
        }
    }
}

impl From<isize> for Position {
    fn from(value: isize) -> Self {
        Self::Index(value)
    }
}

impl From<i32> for Position {
    fn from(value: i32) -> Self {
        let saturated = if value < 0 { isize::MIN } else { isize::MAX };
        Self::Index(isize::try_from(value).unwrap_or(saturated))
    }
}

impl From<usize> for Position {
    fn from(value: usize) -> Self {
        Self::Index(isize::try_from(value).unwrap_or(isize::MAX))
    }
}

/// Text that reads as an integer is an index; anything else is a name.
///
/// ```
/// use pathclerk::path::Position;
///
/// assert_eq!("-2".parse::<Position>().unwrap(), Position::Index(-2));
/// assert_eq!("src".parse::<Position>().unwrap(), Position::Name("src".to_string()));
/// ```
impl FromStr for Position {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(s.parse::<isize>()
            .map_or_else(|_| Self::Name(s.to_string()), Self::Index))
    }
}

impl From<&str> for Position {
    fn from(value: &str) -> Self {
        Self::Name(value.to_string())
    }
}

impl From<String> for Position {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

/// A path broken into trail, basename and extension.
///
/// Each part is absent independently: the empty path has no parts at all,
/// and a path whose base carries no extension has no `ext`.
///
/// # Examples
///
/// ```
/// use pathclerk::path::mutate::deconstruct;
///
/// let parts = deconstruct("/A/B.EXT");
/// assert_eq!(parts.trail.as_deref(), Some("/A"));
/// assert_eq!(parts.basename.as_deref(), Some("B"));
/// assert_eq!(parts.ext.as_deref(), Some(".EXT"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct PathParts {
    /// Everything but the final segment.
    pub trail: Option<String>,
    /// The final segment without its extension.
    pub basename: Option<String>,
    /// The extension of the final segment, including the leading dot.
    pub ext: Option<String>,
}

impl PathParts {
    /// Convert into a `(trail, basename, ext)` tuple.
    #[must_use]
    pub fn into_tuple(self) -> (Option<String>, Option<String>, Option<String>) {
        (self.trail, self.basename, self.ext)
    }
}
