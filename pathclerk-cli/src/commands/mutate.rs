//! Commands that compute a changed path.
//!
//! The renaming commands only print the new path unless `--apply` is given,
//! in which case the item is renamed on disk and the path it ended up at is
//! printed instead.

use crate::error::CliError;
use crate::utils::{emit_fs_path, emit_path, GlobalOptions};
use clap::Args;
use pathclerk::path::{self, Position};
use pathclerk::{fs, Result as LibResult};
use std::path::{Path, PathBuf};

/// Print the computed path, or perform the rename and print where it landed.
fn compute_or_apply(
    global: &GlobalOptions,
    target: &str,
    apply: bool,
    compute: impl FnOnce(&str) -> LibResult<String>,
    on_disk: impl FnOnce(&Path) -> LibResult<PathBuf>,
) -> Result<(), CliError> {
    if apply {
        let landed = on_disk(Path::new(target))?;
        log::info!("renamed {target} to {}", landed.display());
        emit_fs_path(global, &landed)
    } else {
        emit_path(global, &compute(target)?)
    }
}

/// Replace the unique occurrence of a subpath.
#[derive(Args)]
pub struct ReplaceCommand {
    /// Run of segments to replace
    pub subpath: String,

    /// Replacement; may be empty to drop the subpath
    pub with: String,

    /// Path to change
    pub path: String,
}

impl ReplaceCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        emit_path(global, &path::replace(&self.subpath, &self.with, &self.path)?)
    }
}

/// Insert a subpath before a position.
#[derive(Args)]
pub struct InsertCommand {
    /// Segments to insert
    pub subpath: String,

    /// Index (negative counts from the end) or segment name
    #[arg(allow_negative_numbers = true)]
    pub at: Position,

    /// Path to change
    pub path: String,
}

impl InsertCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        emit_path(global, &path::insert(&self.subpath, self.at, &self.path)?)
    }
}

/// Append a subpath to the end of a path.
#[derive(Args)]
pub struct AppendCommand {
    /// Segments to append
    pub subpath: String,

    /// Path to extend
    pub to: String,
}

impl AppendCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        emit_path(global, &path::append(&self.subpath, &self.to))
    }
}

/// Remove the unique occurrence of a subpath.
#[derive(Args)]
pub struct RemoveCommand {
    /// Run of segments to remove
    pub subpath: String,

    /// Path to change
    pub from: String,
}

impl RemoveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        emit_path(global, &path::remove(&self.subpath, &self.from)?)
    }
}

/// Replace the last segment.
#[derive(Args)]
pub struct ChangeBaseCommand {
    /// Path to change
    pub path: String,

    /// New last segment
    pub base: String,
}

impl ChangeBaseCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        emit_path(global, &path::change_base(&self.path, &self.base)?)
    }
}

/// Bump the copy counter of the last segment.
#[derive(Args)]
pub struct IncrementCommand {
    /// Path whose base is incremented
    pub path: String,
}

impl IncrementCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        emit_path(global, &path::increment_base(&self.path)?)
    }
}

/// Give a path a new base in the same directory.
#[derive(Args)]
pub struct RenameCommand {
    /// Path to rename
    pub path: String,

    /// New name, a single segment
    pub to: String,

    /// Rename the item on disk
    #[arg(long)]
    pub apply: bool,
}

impl RenameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let to = self.to.as_str();
        compute_or_apply(
            global,
            &self.path,
            self.apply,
            |p| path::rename(p, to),
            |item| fs::rename(item, to),
        )
    }
}

/// Replace the basename, keeping the extension.
#[derive(Args)]
pub struct ChangeBasenameCommand {
    /// Path to change
    pub path: String,

    /// New basename, without an extension
    pub basename: String,

    /// Rename the item on disk
    #[arg(long)]
    pub apply: bool,
}

impl ChangeBasenameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let to = self.basename.as_str();
        compute_or_apply(
            global,
            &self.path,
            self.apply,
            |p| path::change_basename(p, to),
            |item| fs::change_basename(item, to),
        )
    }
}

/// Replace, add or drop the extension.
#[derive(Args)]
pub struct ChangeExtCommand {
    /// Path to change
    pub path: String,

    /// New extension; an empty string drops it
    pub ext: String,

    /// Rename the item on disk
    #[arg(long)]
    pub apply: bool,
}

impl ChangeExtCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ext = self.ext.as_str();
        compute_or_apply(
            global,
            &self.path,
            self.apply,
            |p| path::change_ext(p, ext),
            |item| fs::change_ext(item, ext),
        )
    }
}

/// Prefix the base with a dot.
#[derive(Args)]
pub struct HideCommand {
    /// Path to hide
    pub path: String,

    /// Rename the item on disk
    #[arg(long)]
    pub apply: bool,
}

impl HideCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        compute_or_apply(global, &self.path, self.apply, path::hide, fs::hide)
    }
}

/// Drop the leading dot from the base.
#[derive(Args)]
pub struct RevealCommand {
    /// Path to reveal
    pub path: String,

    /// Rename the item on disk
    #[arg(long)]
    pub apply: bool,
}

impl RevealCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        compute_or_apply(
            global,
            &self.path,
            self.apply,
            |p| Ok(path::reveal(p)),
            fs::reveal,
        )
    }
}
