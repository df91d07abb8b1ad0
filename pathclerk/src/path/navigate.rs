//! Index- and name-addressed navigation over path segments.
//!
//! Positions are given as [`Position`] values, so every operation here
//! accepts either a signed index or a segment name. Named positions resolve
//! to the first exactly matching segment.

use crate::error::{Error, Result};

use super::segment::{join, split};
use super::types::Position;

/// Clamp a signed slice bound into `0..=len`, counting negatives from the end.
fn clamp_bound(bound: isize, len: usize) -> usize {
    if bound < 0 {
        len.saturating_sub(bound.unsigned_abs())
    } else {
        bound.unsigned_abs().min(len)
    }
}

/// Position of the first segment exactly equal to `segment`.
///
/// # Errors
///
/// Returns `AmbiguousSubpath` if `segment` spans more than one segment and
/// `NotFound` if it does not occur in `path`.
///
/// # Examples
///
/// ```
/// use pathclerk::path::navigate::index;
///
/// assert_eq!(index("/", "/A/B/C").unwrap(), 0);
/// assert_eq!(index("C", "/A/B/C").unwrap(), 3);
/// assert!(index("A/B", "/A/B/C").unwrap_err().is_ambiguous());
/// assert!(index("D", "/A/B/C").unwrap_err().is_not_found());
/// ```
pub fn index(segment: &str, path: &str) -> Result<usize> {
    let wanted = split(segment);
    if wanted.len() > 1 {
        return Err(Error::AmbiguousSubpath {
            subpath: segment.to_string(),
        });
    }

    let not_found = || Error::NotFound {
        segment: segment.to_string(),
        path: path.to_string(),
    };
    let wanted = wanted.first().ok_or_else(not_found)?;

    split(path)
        .iter()
        .position(|s| s == wanted)
        .ok_or_else(not_found)
}

/// The segments in `[start, end)`, rejoined.
///
/// Omitted bounds default to the whole path. Bounds are clamped like slice
/// indices and an empty or inverted range yields the empty path.
///
/// # Errors
///
/// Returns an error if a named bound cannot be resolved.
///
/// # Examples
///
/// ```
/// use pathclerk::path::{navigate::subpath, Position};
///
/// assert_eq!(subpath("/A/B/C/", None, None).unwrap(), "/A/B/C");
/// assert_eq!(subpath("/A/B/C/", Some(0.into()), Some(2.into())).unwrap(), "/A");
/// assert_eq!(subpath("/A/B/C/", None, Some((-1).into())).unwrap(), "/A/B");
/// assert_eq!(subpath("A/B/C", Some("A".into()), Some("C".into())).unwrap(), "A/B");
/// ```
pub fn subpath(path: &str, start: Option<Position>, end: Option<Position>) -> Result<String> {
    let segments = split(path);
    let len = segments.len();

    let start = match start {
        Some(position) => clamp_bound(position.resolve(path)?, len),
        None => 0,
    };
    let end = match end {
        Some(position) => clamp_bound(position.resolve(path)?, len),
        None => len,
    };

    if start >= end {
        return Ok(String::new());
    }
    Ok(join(&segments[start..end]))
}

/// Split a path into `(head, tail)`.
///
/// A non-negative or named position is inclusive: the selected segment ends
/// the head. A negative position `-n` moves the last `n` segments into the
/// tail.
///
/// # Errors
///
/// Returns `IllegalArgument` if the position falls outside the path (a
/// non-negative index must be below the depth, a negative one must leave at
/// least one segment in the head), or a lookup error for an unresolvable
/// name.
///
/// # Examples
///
/// ```
/// use pathclerk::path::navigate::bisect;
///
/// assert_eq!(
///     bisect("/A/B/F.EXT", 1).unwrap(),
///     ("/A".to_string(), "B/F.EXT".to_string())
/// );
/// assert_eq!(
///     bisect("/A/B/F.EXT", -1).unwrap(),
///     ("/A/B".to_string(), "F.EXT".to_string())
/// );
/// ```
pub fn bisect(path: &str, at: impl Into<Position>) -> Result<(String, String)> {
    let at = at.into();
    let segments = split(path);
    let len = segments.len();

    let cut = match &at {
        Position::Name(name) => index(name, path)? + 1,
        Position::Index(i) if *i >= 0 && i.unsigned_abs() < len => i.unsigned_abs() + 1,
        Position::Index(i) if *i < 0 && i.unsigned_abs() < len => len - i.unsigned_abs(),
        Position::Index(i) => {
            return Err(Error::illegal_argument(format!(
                "cannot bisect '{path}' (depth {len}) at {i}"
            )));
        }
    };

    Ok((join(&segments[..cut]), join(&segments[cut..])))
}

/// Drop `n` leading segments.
///
/// Dropping at least as many segments as the path has yields the empty path.
///
/// # Errors
///
/// Returns `IllegalArgument` if `n` is negative.
///
/// # Examples
///
/// ```
/// use pathclerk::path::navigate::ltrim;
///
/// assert_eq!(ltrim("/A/B", 1).unwrap(), "A/B");
/// assert_eq!(ltrim("/A/B", 10).unwrap(), "");
/// assert!(ltrim("/A/B", -1).is_err());
/// ```
pub fn ltrim(path: &str, n: isize) -> Result<String> {
    let n = trim_count(n)?;
    let segments = split(path);
    Ok(segments.get(n..).map(join).unwrap_or_default())
}

/// Drop `n` trailing segments.
///
/// # Errors
///
/// Returns `IllegalArgument` if `n` is negative.
///
/// # Examples
///
/// ```
/// use pathclerk::path::navigate::rtrim;
///
/// assert_eq!(rtrim("/A/B", 1).unwrap(), "/A");
/// assert_eq!(rtrim("/A/B", 2).unwrap(), "/");
/// assert_eq!(rtrim("/A/B", 3).unwrap(), "");
/// ```
pub fn rtrim(path: &str, n: isize) -> Result<String> {
    let n = trim_count(n)?;
    let segments = split(path);
    let keep = segments.len().saturating_sub(n);
    Ok(join(&segments[..keep]))
}

fn trim_count(n: isize) -> Result<usize> {
    usize::try_from(n)
        .map_err(|_| Error::illegal_argument(format!("trim count must not be negative, got {n}")))
}

/// The segment at a position.
///
/// The path itself is left untouched; use
/// [`remove`](super::mutate::remove) to obtain the path without the segment.
///
/// # Errors
///
/// Returns `IllegalArgument` if the index is out of range, or a lookup error
/// for an unresolvable name.
///
/// # Examples
///
/// ```
/// use pathclerk::path::navigate::pop;
///
/// assert_eq!(pop("/A/B", 0).unwrap(), "/");
/// assert_eq!(pop("/A/B", -1).unwrap(), "B");
/// assert!(pop("/A/B", 3).is_err());
/// ```
pub fn pop(path: &str, at: impl Into<Position>) -> Result<String> {
    let at = at.into();
    let mut segments = split(path);
    let len = segments.len();

    let position = match &at {
        Position::Name(name) => index(name, path)?,
        Position::Index(i) if *i >= 0 && i.unsigned_abs() < len => i.unsigned_abs(),
        Position::Index(i) if *i < 0 && i.unsigned_abs() <= len => len - i.unsigned_abs(),
        Position::Index(i) => {
            return Err(Error::illegal_argument(format!(
                "index {i} is out of range for '{path}' (depth {len})"
            )));
        }
    };

    Ok(segments.swap_remove(position))
}
