//! Predicates over paths and the relationship between two paths.
//!
//! All checks are structural: containment compares whole segments after
//! splitting, so `/A` is never considered to contain `/AB`.

use crate::config::Platform;

use super::access::{base, ext, shared_subpath, shared_trail, split_extension};
use super::normalize::{normalize, ROOT, SEPARATOR};
use super::segment::{find_run, split};

/// Whether a path starts at the root.
///
/// # Examples
///
/// ```
/// use pathclerk::path::relationship::is_absolute;
///
/// assert!(is_absolute("/A"));
/// assert!(!is_absolute("A"));
/// assert!(!is_absolute(""));
/// ```
#[must_use]
pub fn is_absolute(path: &str) -> bool {
    normalize(path).starts_with(SEPARATOR)
}

/// Whether a non-empty path does not start at the root.
#[must_use]
pub fn is_relative(path: &str) -> bool {
    let normalized = normalize(path);
    !normalized.is_empty() && !normalized.starts_with(SEPARATOR)
}

/// Whether the base of a path starts with a `.`.
///
/// # Examples
///
/// ```
/// use pathclerk::path::relationship::is_hidden;
///
/// assert!(is_hidden("/A/.B"));
/// assert!(!is_hidden("/.A/B"));
/// assert!(!is_hidden("/"));
/// ```
#[must_use]
pub fn is_hidden(path: &str) -> bool {
    base(path).is_some_and(|b| b != ROOT && b.starts_with('.'))
}

/// Whether the base of a path has an extension.
#[must_use]
pub fn has_ext(path: &str) -> bool {
    ext(path).is_some()
}

/// Whether `subpath` occurs as a contiguous run of whole segments of `path`.
///
/// # Examples
///
/// ```
/// use pathclerk::path::relationship::is_in_path;
///
/// assert!(is_in_path("B", "/A/B/C"));
/// assert!(is_in_path("B/C", "/A/B/C/"));
/// assert!(!is_in_path("B", "/A/BC"));
/// assert!(!is_in_path("/", "A/B"));
/// ```
#[must_use]
pub fn is_in_path(subpath: &str, path: &str) -> bool {
    find_run(&split(subpath), &split(path)).is_some()
}

/// Whether the segments of `candidate` are a leading prefix of `of_path`.
///
/// # Examples
///
/// ```
/// use pathclerk::path::relationship::is_subpath;
///
/// assert!(is_subpath("/A/B", "/A/B/C"));
/// assert!(is_subpath("/", "/A/B/C"));
/// assert!(!is_subpath("/A/C", "/A/B/C"));
/// assert!(!is_subpath("A/B", "/A/B/C"));
/// assert!(!is_subpath("", "/A/B/C"));
/// ```
#[must_use]
pub fn is_subpath(candidate: &str, of_path: &str) -> bool {
    let candidate = split(candidate);
    !candidate.is_empty() && split(of_path).starts_with(&candidate)
}

/// Whether a path is legal on the current platform.
///
/// See [`is_legal_with`] for the rules.
///
/// # Examples
///
/// ```
/// use pathclerk::path::relationship::is_legal;
///
/// assert!(is_legal("/A/B.ext"));
/// assert!(!is_legal("/A.ext/B.ext"));
/// ```
#[must_use]
pub fn is_legal(path: &str) -> bool {
    is_legal_with(path, Platform::current().forbidden_chars())
}

/// Whether a path is legal given an explicit set of forbidden characters.
///
/// A legal path is non-empty, none of its ancestor segments (the root
/// excluded) carries an extension, and no segment contains a forbidden
/// character.
///
/// # Examples
///
/// ```
/// use pathclerk::path::relationship::is_legal_with;
///
/// assert!(is_legal_with("/A/B:C", &[]));
/// assert!(!is_legal_with("/A/B:C", &[':']));
/// ```
#[must_use]
pub fn is_legal_with(path: &str, forbidden: &[char]) -> bool {
    let segments = split(path);
    let Some((_, ancestors)) = segments.split_last() else {
        return false;
    };

    let ancestors_plain = ancestors
        .iter()
        .filter(|s| s.as_str() != ROOT)
        .all(|s| split_extension(s).1.is_none());

    let characters_allowed = segments
        .iter()
        .filter(|s| s.as_str() != ROOT)
        .all(|s| !s.contains(forbidden));

    ancestors_plain && characters_allowed
}

/// Whether all paths share a non-empty leading character sequence.
pub fn have_shared_trail<I, S>(paths: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    shared_trail(paths).is_some()
}

/// Whether all paths share at least their first segment.
pub fn have_shared_subpath<I, S>(paths: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    shared_subpath(paths).is_some()
}

/// Relationship between two paths.
///
/// This enum describes how two paths relate to each other in the segment
/// hierarchy.
///
/// # Examples
///
/// ```
/// use pathclerk::path::PathRelationship;
///
/// assert_eq!(
///     PathRelationship::between("/home/user", "/home/user/project"),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths are the same after normalization.
    Same,

    /// Neither path is a prefix of the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// Both paths are split into segments, so trailing and repeated
    /// separators do not matter and `/a` is unrelated to `/ab`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathclerk::path::PathRelationship;
    ///
    /// assert_eq!(PathRelationship::between("/a", "/a/b"), PathRelationship::Ancestor);
    /// assert_eq!(PathRelationship::between("/a/b", "/a"), PathRelationship::Descendant);
    /// assert_eq!(PathRelationship::between("/a/", "/a"), PathRelationship::Same);
    /// assert_eq!(PathRelationship::between("/a", "/ab"), PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(path1: &str, path2: &str) -> Self {
        let p1 = split(path1);
        let p2 = split(path2);

        if p1 == p2 {
            return Self::Same;
        }

        if is_subpath(path1, path2) {
            return Self::Ancestor;
        }

        if is_subpath(path2, path1) {
            return Self::Descendant;
        }

        Self::Unrelated
    }

    /// Returns `true` for everything but `Unrelated`.
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Check if a path is within a directory (descendant or same).
    ///
    /// # Examples
    ///
    /// ```
    /// use pathclerk::path::PathRelationship;
    ///
    /// assert!(PathRelationship::is_within("/home/user/file.txt", "/home/user"));
    /// assert!(PathRelationship::is_within("/home/user", "/home/user"));
    /// ```
    #[must_use]
    pub fn is_within(path: &str, directory: &str) -> bool {
        matches!(
            Self::between(path, directory),
            Self::Descendant | Self::Same
        )
    }

    /// Check if a path contains another path (ancestor or same).
    #[must_use]
    pub fn contains(path: &str, other: &str) -> bool {
        matches!(Self::between(path, other), Self::Ancestor | Self::Same)
    }

    /// Get a human-readable description of the relationship.
    #[must_use]
    pub fn description(&self, path1: &str, path2: &str) -> String {
        let (p1, p2) = (normalize(path1), normalize(path2));
        match self {
            Self::Ancestor => format!("{p1} is an ancestor of {p2}"),
            Self::Descendant => format!("{p1} is a descendant of {p2}"),
            Self::Same => format!("{p1} and {p2} are the same path"),
            Self::Unrelated => format!("{p1} and {p2} are unrelated paths"),
        }
    }
}
