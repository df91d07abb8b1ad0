//! Deciding where an item lands when its target is already taken.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::path;

use super::{io_error, occupied, path_text, require_dir, to_path};

/// What to do when the destination of a placement already exists.
///
/// # Examples
///
/// ```
/// use pathclerk::fs::ConflictMode;
///
/// assert_eq!("a".parse::<ConflictMode>().unwrap(), ConflictMode::Append);
/// assert_eq!(ConflictMode::default(), ConflictMode::Exclusive);
/// assert_eq!(ConflictMode::Overwrite.to_string(), "o");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictMode {
    /// Delete whatever is in the way.
    Overwrite,
    /// Bump the copy counter of the base until the name is free.
    Append,
    /// Refuse with `PathExists`.
    #[default]
    Exclusive,
}

impl fmt::Display for ConflictMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overwrite => write!(f, "o"),
            Self::Append => write!(f, "a"),
            Self::Exclusive => write!(f, "x"),
        }
    }
}

impl FromStr for ConflictMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "o" | "overwrite" => Ok(Self::Overwrite),
            "a" | "append" => Ok(Self::Append),
            "x" | "exclusive" => Ok(Self::Exclusive),
            _ => Err(Error::illegal_argument(format!(
                "invalid conflict mode '{s}' (expected o, a or x)"
            ))),
        }
    }
}

/// Make `target` available according to `mode`.
///
/// Returns the path that should actually be written: `target` itself when
/// it is free or was cleared, or an incremented sibling in append mode.
///
/// # Errors
///
/// Returns `PathExists` in exclusive mode, or an I/O error if clearing the
/// target fails.
pub fn resolve_conflict(target: &Path, mode: ConflictMode) -> Result<PathBuf> {
    if !occupied(target) {
        return Ok(target.to_path_buf());
    }

    match mode {
        ConflictMode::Exclusive => Err(Error::PathExists {
            path: target.to_path_buf(),
        }),
        ConflictMode::Overwrite => {
            log::debug!("overwriting {}", target.display());
            super::ops::delete(target)?;
            Ok(target.to_path_buf())
        }
        ConflictMode::Append => {
            let mut candidate = path::increment_base(path_text(target)?)?;
            while occupied(Path::new(&candidate)) {
                candidate = path::increment_base(&candidate)?;
            }
            log::debug!("{} is taken, using {candidate}", target.display());
            Ok(to_path(candidate))
        }
    }
}

/// Destination for placing `item` into the directory `destination`.
///
/// The target keeps the base of `item` (hidden first when `make_hidden` is
/// set) and conflicts are settled with [`resolve_conflict`].
///
/// # Errors
///
/// Returns `NotADirectory` if `destination` is not an existing directory,
/// `IllegalOperation` if `item` has no base, and the errors of
/// [`resolve_conflict`].
///
/// # Examples
///
/// ```no_run
/// use pathclerk::fs::{resolve_target, ConflictMode};
/// use std::path::Path;
///
/// let target = resolve_target(
///     Path::new("/tmp/report.txt"),
///     Path::new("/tmp/archive"),
///     ConflictMode::Append,
///     false,
/// )
/// .unwrap();
/// println!("{}", target.display());
/// ```
pub fn resolve_target(
    item: &Path,
    destination: &Path,
    mode: ConflictMode,
    make_hidden: bool,
) -> Result<PathBuf> {
    let target = placement(item, destination, make_hidden)?;
    resolve_conflict(&target, mode)
}

/// Where `item` would land inside `destination`, before any conflict is
/// settled. The destination part is canonical.
pub(crate) fn placement(item: &Path, destination: &Path, make_hidden: bool) -> Result<PathBuf> {
    require_dir(destination)?;
    let destination = destination
        .canonicalize()
        .map_err(|e| io_error(destination, e))?;

    let item_text = path_text(item)?;
    let base = path::base(item_text)
        .filter(|b| b != path::ROOT)
        .ok_or_else(|| Error::illegal_operation("place", item_text))?;

    let mut target = path::append(&base, path_text(&destination)?);
    if make_hidden {
        target = path::hide(&target)?;
    }
    Ok(to_path(target))
}
