//! Filesystem operations built on the path algebra.
//!
//! Target paths are always computed with [`crate::path`] first and only then
//! handed to `std::fs`. Every operation is synchronous.
//!
//! # Examples
//!
//! ```no_run
//! use pathclerk::fs::{copy, new_file, ConflictMode};
//! use std::path::Path;
//!
//! let file = new_file(Path::new("/tmp"), "notes.txt", ConflictMode::Append, false).unwrap();
//! let backup = copy(&file, Path::new("/tmp/backups"), ConflictMode::Append).unwrap();
//! println!("backed up to {}", backup.display());
//! ```

pub mod conflict;
pub mod contents;
pub mod ops;
#[cfg(unix)]
pub mod permissions;

pub use conflict::{resolve_conflict, resolve_target, ConflictMode};
pub use contents::{
    find, find_all, get_contents, get_kind, get_size, get_subdirs, get_subfiles, is_empty, search,
    traverse, DirEntryGroup, ItemKind, SearchMatch, Size, SizeUnit, TraverseOptions,
};
pub use ops::{
    change_basename, change_ext, copy, copy_contents, delete, delete_contents, duplicate, hide,
    move_contents, move_item, move_to_trash, new_dir, new_file, rename, reveal,
};
#[cfg(unix)]
pub use permissions::{change_perms, check_all_perms, check_perms, Party, Permission};

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Borrow a filesystem path as algebra text.
pub(crate) fn path_text(path: &Path) -> Result<&str> {
    path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "path is not valid UTF-8".into(),
    })
}

/// Fail with `PathNotFound` unless `path` exists (symlinks are not followed).
pub(crate) fn require_exists(path: &Path) -> Result<()> {
    if path.symlink_metadata().is_err() {
        return Err(Error::PathNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Fail with `NotADirectory` unless `path` is an existing directory.
pub(crate) fn require_dir(path: &Path) -> Result<()> {
    require_exists(path)?;
    if !path.is_dir() {
        return Err(Error::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Whether anything, including a dangling symlink, occupies `path`.
pub(crate) fn occupied(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}

/// Map an I/O failure on `path` to the crate error, keeping permission
/// problems distinguishable.
pub(crate) fn io_error(path: &Path, err: std::io::Error) -> Error {
    match err.kind() {
        std::io::ErrorKind::PermissionDenied => Error::PermissionDenied {
            path: path.to_path_buf(),
        },
        std::io::ErrorKind::NotFound => Error::PathNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(err),
    }
}

pub(crate) fn to_path(text: String) -> PathBuf {
    PathBuf::from(text)
}
