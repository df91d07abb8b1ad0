//! Creating, renaming, copying, moving and deleting items.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path;

use super::conflict::{placement, resolve_conflict, resolve_target, ConflictMode};
use super::contents::get_contents;
use super::{io_error, occupied, path_text, require_dir, require_exists, to_path};

/// Rename `item` to the path computed by `compute` from its text.
fn rename_with(item: &Path, compute: impl FnOnce(&str) -> Result<String>) -> Result<PathBuf> {
    require_exists(item)?;
    let new_path = to_path(compute(path_text(item)?)?);

    if new_path == item {
        return Ok(new_path);
    }
    if occupied(&new_path) {
        return Err(Error::PathExists { path: new_path });
    }

    log::debug!("renaming {} to {}", item.display(), new_path.display());
    fs::rename(item, &new_path).map_err(|e| io_error(item, e))?;
    Ok(new_path)
}

/// Give `item` a new base, keeping it in the same directory.
///
/// # Errors
///
/// Returns `PathNotFound` if `item` is missing, `PathExists` if the new name
/// is taken, or the algebra error for an unusable `to`.
pub fn rename(item: &Path, to: &str) -> Result<PathBuf> {
    rename_with(item, |text| path::rename(text, to))
}

/// Prefix the name of `item` with a `.`.
///
/// # Errors
///
/// See [`rename`].
pub fn hide(item: &Path) -> Result<PathBuf> {
    rename_with(item, path::hide)
}

/// Drop a leading `.` from the name of `item`.
///
/// # Errors
///
/// See [`rename`].
pub fn reveal(item: &Path) -> Result<PathBuf> {
    rename_with(item, |text| Ok(path::reveal(text)))
}

/// Replace the basename of `item`, keeping its extension.
///
/// # Errors
///
/// See [`rename`].
pub fn change_basename(item: &Path, to: &str) -> Result<PathBuf> {
    rename_with(item, |text| path::change_basename(text, to))
}

/// Replace the extension of a file.
///
/// # Errors
///
/// Returns `NotAFile` if `file` is a directory, otherwise see [`rename`].
pub fn change_ext(file: &Path, new_ext: &str) -> Result<PathBuf> {
    require_exists(file)?;
    if file.is_dir() {
        return Err(Error::NotAFile {
            path: file.to_path_buf(),
        });
    }
    rename_with(file, |text| path::change_ext(text, new_ext))
}

/// Create a directory called `name` inside `parent`.
///
/// # Errors
///
/// Returns `NotADirectory` if `parent` is not a directory and `PathExists`
/// in exclusive mode when the name is taken.
pub fn new_dir(parent: &Path, name: &str, mode: ConflictMode, hidden: bool) -> Result<PathBuf> {
    let target = resolve_target(Path::new(name), parent, mode, hidden)?;
    fs::create_dir(&target).map_err(|e| io_error(&target, e))?;
    log::debug!("created directory {}", target.display());
    Ok(target)
}

/// Create an empty file called `name` inside `parent`.
///
/// # Errors
///
/// See [`new_dir`].
pub fn new_file(parent: &Path, name: &str, mode: ConflictMode, hidden: bool) -> Result<PathBuf> {
    let target = resolve_target(Path::new(name), parent, mode, hidden)?;
    fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&target)
        .map_err(|e| io_error(&target, e))?;
    log::debug!("created file {}", target.display());
    Ok(target)
}

/// Copy `item` into the directory `destination`, recursing into directories.
///
/// Symbolic links are copied as links and never followed.
///
/// # Errors
///
/// Returns `PathNotFound` if `item` is missing, `IllegalOperation` when
/// copying a directory into itself or overwriting `item` (or a directory
/// holding it), or the errors of [`resolve_target`].
pub fn copy(item: &Path, destination: &Path, mode: ConflictMode) -> Result<PathBuf> {
    let target = place("copy", item, destination, mode)?;
    log::debug!("copying {} to {}", item.display(), target.display());
    copy_recursive(item, &target)?;
    Ok(target)
}

fn copy_recursive(from: &Path, to: &Path) -> Result<()> {
    let file_type = from
        .symlink_metadata()
        .map_err(|e| io_error(from, e))?
        .file_type();

    if file_type.is_symlink() {
        copy_link(from, to)
    } else if file_type.is_dir() {
        fs::create_dir(to).map_err(|e| io_error(to, e))?;
        for entry in fs::read_dir(from).map_err(|e| io_error(from, e))? {
            let entry = entry?;
            copy_recursive(&entry.path(), &to.join(entry.file_name()))?;
        }
        Ok(())
    } else {
        fs::copy(from, to).map_err(|e| io_error(from, e))?;
        Ok(())
    }
}

#[cfg(unix)]
fn copy_link(from: &Path, to: &Path) -> Result<()> {
    let link = fs::read_link(from).map_err(|e| io_error(from, e))?;
    std::os::unix::fs::symlink(link, to).map_err(|e| io_error(to, e))
}

#[cfg(windows)]
fn copy_link(from: &Path, to: &Path) -> Result<()> {
    let link = fs::read_link(from).map_err(|e| io_error(from, e))?;
    let made = if from.is_dir() {
        std::os::windows::fs::symlink_dir(link, to)
    } else {
        std::os::windows::fs::symlink_file(link, to)
    };
    made.map_err(|e| io_error(to, e))
}

#[cfg(not(any(unix, windows)))]
fn copy_link(from: &Path, _to: &Path) -> Result<()> {
    Err(Error::illegal_operation("copy a link", path_text(from)?))
}

/// Settle where `item` lands in `destination`.
///
/// Never clears `item` itself, or a directory holding it, to make room.
fn place(
    operation: &'static str,
    item: &Path,
    destination: &Path,
    mode: ConflictMode,
) -> Result<PathBuf> {
    require_exists(item)?;
    refuse_self_nesting(operation, item, destination)?;

    let target = placement(item, destination, false)?;
    if mode == ConflictMode::Overwrite && occupied(&target) {
        let item_abs = absolute_entry(item)?;
        let (item_text, target_text) = (path_text(&item_abs)?, path_text(&target)?);
        if path::PathRelationship::contains(target_text, item_text) {
            return Err(Error::illegal_operation(operation, item_text));
        }
    }
    resolve_conflict(&target, mode)
}

/// Absolute form of `item` with its parent resolved but its own link, if
/// any, left alone.
fn absolute_entry(item: &Path) -> Result<PathBuf> {
    let Some(name) = item.file_name() else {
        return item.canonicalize().map_err(|e| io_error(item, e));
    };
    let parent = match item.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let parent = parent.canonicalize().map_err(|e| io_error(parent, e))?;
    Ok(parent.join(name))
}

/// Refuse to place a directory inside itself.
fn refuse_self_nesting(operation: &'static str, item: &Path, destination: &Path) -> Result<()> {
    let is_real_dir = item.symlink_metadata().is_ok_and(|m| m.is_dir());
    if !is_real_dir {
        return Ok(());
    }
    let (Ok(item_abs), Ok(dest_abs)) = (absolute_entry(item), destination.canonicalize()) else {
        return Ok(());
    };
    let (item_text, dest_text) = (path_text(&item_abs)?, path_text(&dest_abs)?);
    if path::PathRelationship::contains(item_text, dest_text) {
        return Err(Error::illegal_operation(operation, item_text));
    }
    Ok(())
}

/// Move `item` into the directory `destination`.
///
/// Falls back to copy-and-delete only when `item` and `destination` are on
/// different filesystems.
///
/// # Errors
///
/// Same as [`copy`], plus the I/O error of a failed rename.
pub fn move_item(item: &Path, destination: &Path, mode: ConflictMode) -> Result<PathBuf> {
    let target = place("move", item, destination, mode)?;
    log::debug!("moving {} to {}", item.display(), target.display());

    match fs::rename(item, &target) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::CrossesDevices => {
            log::debug!("{} is on another device, copying instead", item.display());
            copy_recursive(item, &target)?;
            delete(item)?;
        }
        Err(e) => return Err(io_error(item, e)),
    }
    Ok(target)
}

/// Copy every entry of `dir` into `destination`.
///
/// Returns where each entry landed, in listing order. When `destination`
/// lies inside `dir` it is left out of the copy.
///
/// # Errors
///
/// Returns `NotADirectory` if `dir` is not a directory, otherwise the
/// errors of [`copy`] for the first entry that fails.
pub fn copy_contents(dir: &Path, destination: &Path, mode: ConflictMode) -> Result<Vec<PathBuf>> {
    entries_to_place(dir, destination)?
        .iter()
        .map(|entry| copy(entry, destination, mode))
        .collect()
}

/// Move every entry of `dir` into `destination`, leaving `dir` empty.
///
/// # Errors
///
/// Same as [`copy_contents`].
pub fn move_contents(dir: &Path, destination: &Path, mode: ConflictMode) -> Result<Vec<PathBuf>> {
    entries_to_place(dir, destination)?
        .iter()
        .map(|entry| move_item(entry, destination, mode))
        .collect()
}

fn entries_to_place(dir: &Path, destination: &Path) -> Result<Vec<PathBuf>> {
    require_dir(destination)?;
    let destination = destination
        .canonicalize()
        .map_err(|e| io_error(destination, e))?;

    let mut entries = Vec::new();
    for name in get_contents(dir, true)? {
        let entry = dir.join(name);
        if absolute_entry(&entry)? != destination {
            entries.push(entry);
        }
    }
    Ok(entries)
}

/// Copy `item` next to itself under an incremented name.
///
/// # Errors
///
/// Same as [`copy`].
///
/// # Examples
///
/// ```no_run
/// use pathclerk::fs::duplicate;
/// use std::path::Path;
///
/// // "/tmp/report.txt" -> "/tmp/report 1.txt"
/// let copy = duplicate(Path::new("/tmp/report.txt")).unwrap();
/// ```
pub fn duplicate(item: &Path) -> Result<PathBuf> {
    require_exists(item)?;
    let parent = match path::trail(path_text(item)?) {
        Some(trail) if !trail.is_empty() => to_path(trail),
        _ => PathBuf::from("."),
    };
    copy(item, &parent, ConflictMode::Append)
}

/// Delete a file, symlink or directory tree.
///
/// # Errors
///
/// Returns `PathNotFound` if nothing is at `item`.
pub fn delete(item: &Path) -> Result<()> {
    let metadata = item.symlink_metadata().map_err(|e| io_error(item, e))?;
    log::debug!("deleting {}", item.display());

    if metadata.is_dir() {
        fs::remove_dir_all(item).map_err(|e| io_error(item, e))
    } else {
        fs::remove_file(item).map_err(|e| io_error(item, e))
    }
}

/// Delete everything inside `dir`, keeping `dir` itself.
///
/// # Errors
///
/// Returns `NotADirectory` if `dir` is not a directory.
pub fn delete_contents(dir: &Path) -> Result<()> {
    require_dir(dir)?;
    for entry in fs::read_dir(dir).map_err(|e| io_error(dir, e))? {
        delete(&entry?.path())?;
    }
    Ok(())
}

/// Move `item` into `trash_dir`, never overwriting earlier trash.
///
/// # Errors
///
/// Same as [`move_item`].
pub fn move_to_trash(item: &Path, trash_dir: &Path) -> Result<PathBuf> {
    move_item(item, trash_dir, ConflictMode::Append)
}
