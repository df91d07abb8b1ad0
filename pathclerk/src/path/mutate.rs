//! Pure structural edits that produce new paths.
//!
//! Every function here returns a fresh normalized path and leaves its input
//! untouched. All edits work on segment vectors, so segments other than
//! the edited ones keep their exact text.

use crate::error::{Error, Result};

use super::access::{base, basename, ext, split_extension, trail};
use super::navigate::index;
use super::normalize::{normalize, ROOT, SEPARATOR};
use super::relationship::is_hidden;
use super::segment::{concat, find_run, join, split};
use super::types::{PathParts, Position};

const HIDDEN_PREFIX: char = '.';
const EXT_PREFIX: char = '.';

/// Replace the final segment of `path` with what `edit` makes of it.
///
/// Only the last element of the segment vector changes, so the other
/// segments keep their exact text.
fn edit_base(
    operation: &'static str,
    path: &str,
    edit: impl FnOnce(&str) -> Result<String>,
) -> Result<String> {
    let mut segments = split(path);
    match segments.last_mut() {
        Some(last) if last.as_str() != ROOT => {
            *last = edit(last.as_str())?;
            Ok(join(segments))
        }
        _ => Err(Error::illegal_operation(operation, path)),
    }
}

/// Substitute the first occurrence of `subpath` in `in_path`.
///
/// # Errors
///
/// Returns `IllegalArgument` if `subpath` is not a contiguous run of
/// segments in `in_path`.
///
/// # Examples
///
/// ```
/// use pathclerk::path::mutate::replace;
///
/// assert_eq!(replace("/B", "/D", "/B/C/").unwrap(), "/D/C");
/// assert_eq!(replace("C", "/A/A", "B/C/D").unwrap(), "B/A/A/D");
/// assert!(replace("E", "F", "B/C/D").is_err());
/// ```
pub fn replace(subpath: &str, with_path: &str, in_path: &str) -> Result<String> {
    let needle = split(subpath);
    let mut segments = split(in_path);

    let start = find_run(&needle, &segments).ok_or_else(|| {
        Error::illegal_argument(format!("'{subpath}' is not in '{in_path}'"))
    })?;

    segments.splice(start..start + needle.len(), split(with_path));
    Ok(join(segments))
}

/// Insert the segments of `subpath` before a position of `in_path`.
///
/// Indices clamp to the path: a negative index counts from the end and
/// saturates at the front, a large index appends.
///
/// # Errors
///
/// Returns a lookup error when `at` names a segment that cannot be resolved.
///
/// # Examples
///
/// ```
/// use pathclerk::path::mutate::insert;
///
/// assert_eq!(insert("/A/", 0, "/B/C/").unwrap(), "/A/B/C");
/// assert_eq!(insert("A/", -2, "/B/C/").unwrap(), "/A/B/C");
/// assert_eq!(insert("X", "C", "/B/C").unwrap(), "/B/X/C");
/// ```
pub fn insert(subpath: &str, at: impl Into<Position>, in_path: &str) -> Result<String> {
    let mut segments = split(in_path);
    let len = segments.len();

    let position = match at.into() {
        Position::Name(name) => index(&name, in_path)?,
        Position::Index(i) if i < 0 => len.saturating_sub(i.unsigned_abs()),
        Position::Index(i) => i.unsigned_abs().min(len),
    };

    segments.splice(position..position, split(subpath));
    Ok(join(segments))
}

/// Add `subpath` to the end of `to_path`.
///
/// # Examples
///
/// ```
/// use pathclerk::path::mutate::append;
///
/// assert_eq!(append("C/D", "/A/B/"), "/A/B/C/D");
/// assert_eq!(append("/C", ""), "/C");
/// ```
#[must_use]
pub fn append(subpath: &str, to_path: &str) -> String {
    concat([to_path, subpath])
}

/// Remove the first occurrence of `subpath` from `from_path`.
///
/// # Errors
///
/// Returns `IllegalArgument` if `subpath` does not occur.
///
/// # Examples
///
/// ```
/// use pathclerk::path::mutate::remove;
///
/// assert_eq!(remove("B", "/A/B/C").unwrap(), "/A/C");
/// assert_eq!(remove("/A", "/A/B").unwrap(), "B");
/// ```
pub fn remove(subpath: &str, from_path: &str) -> Result<String> {
    replace(subpath, "", from_path)
}

/// Give `path` the base of `to`, keeping its trail.
///
/// # Errors
///
/// Returns `IllegalOperation` for the empty path or the root, and
/// `IllegalArgument` if `to` has no usable base.
///
/// # Examples
///
/// ```
/// use pathclerk::path::mutate::rename;
///
/// assert_eq!(rename("/A/B.txt", "C.md").unwrap(), "/A/C.md");
/// assert_eq!(rename("/A/B", "/X/Y/Z").unwrap(), "/A/Z");
/// ```
pub fn rename(path: &str, to: &str) -> Result<String> {
    edit_base("rename", path, |_| {
        base(to)
            .filter(|b| b != ROOT)
            .ok_or_else(|| Error::illegal_argument(format!("'{to}' has no base to rename to")))
    })
}

/// Replace the base of `path` with the segments of `new_value`.
///
/// # Errors
///
/// Returns `IllegalOperation` for the empty path or the root, and
/// `IllegalArgument` if `new_value` is empty.
///
/// # Examples
///
/// ```
/// use pathclerk::path::mutate::change_base;
///
/// assert_eq!(change_base("/A/B", "C").unwrap(), "/A/C");
/// assert_eq!(change_base("/A/B", "C/D").unwrap(), "/A/C/D");
/// ```
pub fn change_base(path: &str, new_value: &str) -> Result<String> {
    let mut segments = split(path);
    if segments.last().map_or(true, |last| last == ROOT) {
        return Err(Error::illegal_operation("change the base of", path));
    }
    let replacement = split(new_value);
    if replacement.is_empty() {
        return Err(Error::illegal_argument("new base must not be empty"));
    }
    segments.pop();
    segments.extend(replacement);
    Ok(join(segments))
}

/// Replace the basename of `path`, keeping its extension.
///
/// # Errors
///
/// Returns `IllegalOperation` for the empty path or the root, and
/// `IllegalArgument` if `new_value` is empty, contains a separator, or has
/// an extension of its own.
///
/// # Examples
///
/// ```
/// use pathclerk::path::mutate::change_basename;
///
/// assert_eq!(change_basename("/A/B.txt", "C").unwrap(), "/A/C.txt");
/// assert!(change_basename("/A/B.txt", "C.md").is_err());
/// ```
pub fn change_basename(path: &str, new_value: &str) -> Result<String> {
    let new_value = new_value.trim();

    if new_value.is_empty() || new_value.contains(SEPARATOR) {
        return Err(Error::illegal_argument(format!(
            "'{new_value}' is not a valid basename"
        )));
    }
    if split_extension(new_value).1.is_some() {
        return Err(Error::illegal_argument(format!(
            "new basename '{new_value}' must not carry an extension"
        )));
    }

    edit_base("change the basename of", path, |old_base| {
        let ext = split_extension(old_base).1.unwrap_or_default();
        Ok(format!("{new_value}{ext}"))
    })
}

/// Replace, add, or strip the extension of `path`.
///
/// A missing leading dot is added. An empty extension, or a lone `.`,
/// strips the existing one.
///
/// # Errors
///
/// Returns `IllegalOperation` for the empty path or the root, and
/// `IllegalArgument` if `new_ext` contains a separator.
///
/// # Examples
///
/// ```
/// use pathclerk::path::mutate::change_ext;
///
/// assert_eq!(change_ext("/A/B.txt", "md").unwrap(), "/A/B.md");
/// assert_eq!(change_ext("/A/B", ".md").unwrap(), "/A/B.md");
/// assert_eq!(change_ext("/A/B.txt", "").unwrap(), "/A/B");
/// ```
pub fn change_ext(path: &str, new_ext: &str) -> Result<String> {
    let new_ext = new_ext.trim();

    if new_ext.contains(SEPARATOR) {
        return Err(Error::illegal_argument(format!(
            "'{new_ext}' is not a valid extension"
        )));
    }

    let suffix = match new_ext {
        "" | "." => String::new(),
        dotted if dotted.starts_with(EXT_PREFIX) => dotted.to_string(),
        bare => format!("{EXT_PREFIX}{bare}"),
    };
    edit_base("change the extension of", path, |old_base| {
        Ok(format!("{}{suffix}", split_extension(old_base).0))
    })
}

/// Bump the copy counter of the basename.
///
/// A basename ending in a space followed by digits has those digits
/// incremented; any other basename gains a ` 1` suffix. The extension and
/// trail are kept.
///
/// # Errors
///
/// Returns `IllegalOperation` for the empty path or the root.
///
/// # Examples
///
/// ```
/// use pathclerk::path::mutate::increment_base;
///
/// assert_eq!(increment_base("/A").unwrap(), "/A 1");
/// assert_eq!(increment_base("/A 1").unwrap(), "/A 2");
/// assert_eq!(increment_base("/A/F 9.txt").unwrap(), "/A/F 10.txt");
/// ```
pub fn increment_base(path: &str) -> Result<String> {
    edit_base("increment", path, |old_base| {
        let (stem, ext) = split_extension(old_base);
        let ext = ext.unwrap_or_default();

        let new_stem = match stem.rsplit_once(' ') {
            Some((head, digits))
                if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) =>
            {
                format!("{head} {}", increment_decimal(digits))
            }
            _ => format!("{stem} 1"),
        };
        Ok(format!("{new_stem}{ext}"))
    })
}

/// Add one to a string of decimal digits of any length.
fn increment_decimal(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    let mut carry = true;

    for b in bytes.iter_mut().rev() {
        if !carry {
            break;
        }
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            carry = false;
        }
    }
    if carry {
        bytes.insert(0, b'1');
    }

    let text: String = bytes.into_iter().map(char::from).collect();
    match text.trim_start_matches('0') {
        "" => "0".to_string(),
        trimmed => trimmed.to_string(),
    }
}

/// Prefix the base with a `.`.
///
/// # Errors
///
/// Returns `IllegalOperation` for the empty path or the root.
///
/// # Examples
///
/// ```
/// use pathclerk::path::mutate::hide;
///
/// assert_eq!(hide("/A/B").unwrap(), "/A/.B");
/// assert_eq!(hide("/A/.B").unwrap(), "/A/.B");
/// assert!(hide("/").is_err());
/// ```
pub fn hide(path: &str) -> Result<String> {
    let hidden = is_hidden(path);
    edit_base("hide", path, |old_base| {
        Ok(if hidden {
            old_base.to_string()
        } else {
            format!("{HIDDEN_PREFIX}{old_base}")
        })
    })
}

/// Drop a single leading `.` from the base.
///
/// The root, the empty path and already visible paths come back normalized.
///
/// # Examples
///
/// ```
/// use pathclerk::path::mutate::reveal;
///
/// assert_eq!(reveal("/A/.B"), "/A/B");
/// assert_eq!(reveal("/A/B"), "/A/B");
/// assert_eq!(reveal("/"), "/");
/// ```
#[must_use]
pub fn reveal(path: &str) -> String {
    if !is_hidden(path) {
        return normalize(path);
    }
    edit_base("reveal", path, |old_base| {
        Ok(old_base
            .strip_prefix(HIDDEN_PREFIX)
            .unwrap_or(old_base)
            .to_string())
    })
    .unwrap_or_else(|_| normalize(path))
}

/// Break a path into trail, basename and extension.
///
/// # Examples
///
/// ```
/// use pathclerk::path::mutate::deconstruct;
///
/// let (trail, basename, ext) = deconstruct("A/B/F.EXT").into_tuple();
/// assert_eq!(trail.as_deref(), Some("A/B"));
/// assert_eq!(basename.as_deref(), Some("F"));
/// assert_eq!(ext.as_deref(), Some(".EXT"));
/// ```
#[must_use]
pub fn deconstruct(path: &str) -> PathParts {
    PathParts {
        trail: trail(path),
        basename: basename(path),
        ext: ext(path),
    }
}
