//! Path normalization functions.
//!
//! Normalization brings raw path text into canonical form:
//! - Surrounding whitespace is trimmed
//! - Runs of separators collapse to a single `/`
//! - A trailing separator is removed unless the path is the root
//!
//! Normalization never consults the filesystem and never fails.

/// The canonical path separator.
pub const SEPARATOR: char = '/';

/// The separator used by foreign (Windows-style) paths.
pub const FOREIGN_SEPARATOR: char = '\\';

/// The root marker, the first segment of every absolute path.
pub const ROOT: &str = "/";

/// Normalize a path to canonical form.
///
/// # Examples
///
/// ```
/// use pathclerk::path::normalize::normalize;
///
/// assert_eq!(normalize("///A//B/C//"), "/A/B/C");
/// assert_eq!(normalize("//"), "/");
/// assert_eq!(normalize("  A/B/  "), "A/B");
/// assert_eq!(normalize(""), "");
/// ```
#[must_use]
pub fn normalize(path: &str) -> String {
    let trimmed = path.trim();
    let mut result = String::with_capacity(trimmed.len());
    let mut previous_was_separator = false;

    for c in trimmed.chars() {
        if c == SEPARATOR {
            if !previous_was_separator {
                result.push(c);
            }
            previous_was_separator = true;
        } else {
            result.push(c);
            previous_was_separator = false;
        }
    }

    // Trailing separators and whitespace are removed together so that
    // "A / " cannot leave a new trailing separator behind.
    let kept = result
        .trim_end_matches(|c: char| c == SEPARATOR || c.is_whitespace())
        .len();
    if kept == 0 {
        return if result.starts_with(SEPARATOR) {
            ROOT.to_string()
        } else {
            String::new()
        };
    }
    result.truncate(kept);

    result
}

/// Normalize every path in a sequence.
///
/// # Examples
///
/// ```
/// use pathclerk::path::normalize::normalize_all;
///
/// let normalized = normalize_all(["", "//", "///A//B/C//"]);
/// assert_eq!(normalized, vec!["", "/", "/A/B/C"]);
/// ```
pub fn normalize_all<I, S>(paths: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    paths.into_iter().map(|p| normalize(p.as_ref())).collect()
}

/// Map foreign separators to the canonical `/`.
///
/// This does not otherwise normalize the path.
///
/// # Examples
///
/// ```
/// use pathclerk::path::normalize::reorient;
///
/// assert_eq!(reorient(r"\A\B\C\F.EXT"), "/A/B/C/F.EXT");
/// assert_eq!(reorient("/A/B/C"), "/A/B/C");
/// ```
#[must_use]
pub fn reorient(path: &str) -> String {
    path.replace(FOREIGN_SEPARATOR, ROOT)
}
