//! Accessors that derive components from a path.
//!
//! Every accessor answers `None` for the empty path instead of failing. The
//! `strip_*` family returns the remainder after removing one component and
//! yields the empty path when nothing remains.

use super::normalize::{normalize, ROOT};
use super::segment::{join, split};

/// Split a single segment into its stem and extension suffix.
///
/// A segment has an extension when it contains a `.` that is neither its
/// first nor its last character; `.bashrc` and `name.` have none, and the
/// root marker never has one.
pub(crate) fn split_extension(segment: &str) -> (&str, Option<&str>) {
    if segment == ROOT {
        return (segment, None);
    }
    match segment.rfind('.') {
        Some(i) if i > 0 && i + 1 < segment.len() => (&segment[..i], Some(&segment[i..])),
        _ => (segment, None),
    }
}

/// The root of a path: `/` for absolute paths, otherwise the first segment.
///
/// # Examples
///
/// ```
/// use pathclerk::path::access::root;
///
/// assert_eq!(root("/A/B").as_deref(), Some("/"));
/// assert_eq!(root("A/B/").as_deref(), Some("A"));
/// assert_eq!(root(""), None);
/// ```
#[must_use]
pub fn root(path: &str) -> Option<String> {
    split(path).into_iter().next()
}

/// Everything but the final segment.
///
/// The trail of the root is the root itself; the trail of a single relative
/// segment is the empty path.
///
/// # Examples
///
/// ```
/// use pathclerk::path::access::trail;
///
/// assert_eq!(trail("/A/B/C/").as_deref(), Some("/A/B"));
/// assert_eq!(trail("/A").as_deref(), Some("/"));
/// assert_eq!(trail("/").as_deref(), Some("/"));
/// assert_eq!(trail(""), None);
/// ```
#[must_use]
pub fn trail(path: &str) -> Option<String> {
    let segments = split(path);
    match segments.as_slice() {
        [] => None,
        [only] if only == ROOT => Some(ROOT.to_string()),
        [init @ .., _] => Some(join(init)),
    }
}

/// The final segment of a path.
///
/// # Examples
///
/// ```
/// use pathclerk::path::access::base;
///
/// assert_eq!(base("A/B/F.EXT/").as_deref(), Some("F.EXT"));
/// assert_eq!(base("/").as_deref(), Some("/"));
/// assert_eq!(base(""), None);
/// ```
#[must_use]
pub fn base(path: &str) -> Option<String> {
    split(path).pop()
}

/// The final segment without its extension.
///
/// # Examples
///
/// ```
/// use pathclerk::path::access::basename;
///
/// assert_eq!(basename("/A/F.EXT").as_deref(), Some("F"));
/// assert_eq!(basename("/A/B/").as_deref(), Some("B"));
/// ```
#[must_use]
pub fn basename(path: &str) -> Option<String> {
    base(path).map(|b| split_extension(&b).0.to_string())
}

/// The extension of the final segment, including the dot.
///
/// # Examples
///
/// ```
/// use pathclerk::path::access::ext;
///
/// assert_eq!(ext("/A/F.EXT").as_deref(), Some(".EXT"));
/// assert_eq!(ext("/A/"), None);
/// assert_eq!(ext("/"), None);
/// ```
#[must_use]
pub fn ext(path: &str) -> Option<String> {
    base(path).and_then(|b| split_extension(&b).1.map(str::to_string))
}

/// Longest common leading character sequence of the normalized inputs.
///
/// This is a textual prefix: `shared_trail(["/AB", "/AC"])` is `"/A"`. Use
/// [`shared_subpath`] for a segment-wise answer.
///
/// # Examples
///
/// ```
/// use pathclerk::path::access::shared_trail;
///
/// assert_eq!(shared_trail(["/A/BC", "/A/BD/"]).as_deref(), Some("/A/B"));
/// assert_eq!(shared_trail(["A", "B"]), None);
/// ```
pub fn shared_trail<I, S>(paths: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut paths = paths.into_iter().map(|p| normalize(p.as_ref()));
    let mut prefix = paths.next()?;

    for path in paths {
        let common: usize = prefix
            .chars()
            .zip(path.chars())
            .take_while(|(a, b)| a == b)
            .map(|(a, _)| a.len_utf8())
            .sum();
        prefix.truncate(common);
    }

    (!prefix.is_empty()).then_some(prefix)
}

/// Longest common leading segment sequence of the inputs.
///
/// # Examples
///
/// ```
/// use pathclerk::path::access::shared_subpath;
///
/// assert_eq!(shared_subpath(["/A/BC", "/A/BD/"]).as_deref(), Some("/A"));
/// assert_eq!(shared_subpath(["/A", "A"]), None);
/// ```
pub fn shared_subpath<I, S>(paths: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut paths = paths.into_iter().map(|p| split(p.as_ref()));
    let mut common = paths.next()?;

    for segments in paths {
        let shared = common
            .iter()
            .zip(&segments)
            .take_while(|(a, b)| a == b)
            .count();
        common.truncate(shared);
    }

    (!common.is_empty()).then(|| join(&common))
}

/// Number of segments in a path; the root counts as one.
///
/// # Examples
///
/// ```
/// use pathclerk::path::access::depth;
///
/// assert_eq!(depth(""), 0);
/// assert_eq!(depth("/"), 1);
/// assert_eq!(depth("/A/B/C"), 4);
/// ```
#[must_use]
pub fn depth(path: &str) -> usize {
    split(path).len()
}

/// Remove the first segment.
///
/// # Examples
///
/// ```
/// use pathclerk::path::access::strip_root;
///
/// assert_eq!(strip_root("/A"), "A");
/// assert_eq!(strip_root("A/B"), "B");
/// assert_eq!(strip_root("/"), "");
/// ```
#[must_use]
pub fn strip_root(path: &str) -> String {
    split(path).get(1..).map(join).unwrap_or_default()
}

/// Remove everything but the final segment.
///
/// # Examples
///
/// ```
/// use pathclerk::path::access::strip_trail;
///
/// assert_eq!(strip_trail("/A/B/"), "B");
/// assert_eq!(strip_trail("/"), "");
/// ```
#[must_use]
pub fn strip_trail(path: &str) -> String {
    match split(path).pop() {
        Some(last) if last != ROOT => last,
        _ => String::new(),
    }
}

/// Remove the final segment.
///
/// # Examples
///
/// ```
/// use pathclerk::path::access::strip_base;
///
/// assert_eq!(strip_base("/A/B/"), "/A");
/// assert_eq!(strip_base("/A"), "/");
/// assert_eq!(strip_base("/"), "");
/// ```
#[must_use]
pub fn strip_base(path: &str) -> String {
    let segments = split(path);
    match segments.as_slice() {
        [] | [_] => String::new(),
        [init @ .., _] => join(init),
    }
}

/// Remove the extension of the final segment, if any.
///
/// # Examples
///
/// ```
/// use pathclerk::path::access::strip_ext;
///
/// assert_eq!(strip_ext("/A/F.EXT"), "/A/F");
/// assert_eq!(strip_ext("/A/"), "/A");
/// ```
#[must_use]
pub fn strip_ext(path: &str) -> String {
    let mut segments = split(path);
    if let Some(last) = segments.last_mut() {
        let stem_len = split_extension(last).0.len();
        last.truncate(stem_len);
    }
    join(segments)
}
