//! Conversion between path strings and segment sequences.
//!
//! A segment is one component between separators. Absolute paths carry the
//! root marker `/` as their first segment, so `split("/A/B")` yields
//! `["/", "A", "B"]` and `split("A/B")` yields `["A", "B"]`.

use super::normalize::{normalize, ROOT, SEPARATOR};

/// Split a path into its segments.
///
/// The path is normalized first; empty segments are dropped and the root
/// marker is prepended for absolute paths.
///
/// # Examples
///
/// ```
/// use pathclerk::path::segment::split;
///
/// assert_eq!(split("/A/B/F.EXT"), vec!["/", "A", "B", "F.EXT"]);
/// assert_eq!(split("A//B/"), vec!["A", "B"]);
/// assert_eq!(split("/"), vec!["/"]);
/// assert!(split("").is_empty());
/// ```
#[must_use]
pub fn split(path: &str) -> Vec<String> {
    let normalized = normalize(path);
    let mut segments = Vec::new();

    if normalized.starts_with(SEPARATOR) {
        segments.push(ROOT.to_string());
    }

    segments.extend(
        normalized
            .split(SEPARATOR)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    );

    segments
}

/// Join segments back into a normalized path.
///
/// This is the inverse of [`split`]. The result is absolute iff the first
/// non-empty element starts with the separator; a root marker anywhere else
/// is dropped.
///
/// # Examples
///
/// ```
/// use pathclerk::path::segment::join;
///
/// assert_eq!(join(["/", "A", "B"]), "/A/B");
/// assert_eq!(join(["", "A/B"]), "A/B");
/// assert_eq!(join(["/", "/A/B/"]), "/A/B");
/// assert_eq!(join(["A", "/", "B"]), "A/B");
/// assert_eq!(join(Vec::<String>::new()), "");
/// ```
pub fn join<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let segments: Vec<S> = segments
        .into_iter()
        .filter(|s| !s.as_ref().is_empty())
        .collect();

    match segments.as_slice() {
        [] => String::new(),
        [single] => normalize(single.as_ref()),
        [first, ..] => {
            let absolute = first.as_ref().starts_with(SEPARATOR);
            assemble(absolute, segments.iter().map(|s| s.as_ref()))
        }
    }
}

/// Concatenate raw paths with separators.
///
/// Empty arguments are skipped, surrounding whitespace of each argument is
/// ignored, and absoluteness follows the first non-empty argument.
///
/// # Examples
///
/// ```
/// use pathclerk::path::segment::concat;
///
/// assert_eq!(concat(["/A", "B"]), "/A/B");
/// assert_eq!(concat(["/A", "/B/"]), "/A/B");
/// assert_eq!(concat(["", "/"]), "/");
/// assert_eq!(concat(["A", "/B", "C/D/"]), "A/B/C/D");
/// ```
pub fn concat<I, S>(paths: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let paths: Vec<String> = paths
        .into_iter()
        .map(|p| p.as_ref().trim().to_string())
        .filter(|p| !p.is_empty())
        .collect();

    let Some(first) = paths.first() else {
        return String::new();
    };
    let absolute = first.starts_with(SEPARATOR);
    assemble(absolute, paths.iter().map(String::as_str))
}

/// Position of the first contiguous occurrence of `needle` in `haystack`.
///
/// An empty needle is never found.
pub(crate) fn find_run(needle: &[String], haystack: &[String]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Glue pieces together with single separators, then normalize.
fn assemble<'a>(absolute: bool, pieces: impl Iterator<Item = &'a str>) -> String {
    let body = pieces
        .map(|piece| piece.trim_matches(SEPARATOR))
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(ROOT);

    if absolute {
        normalize(&format!("{ROOT}{body}"))
    } else {
        normalize(&body)
    }
}
