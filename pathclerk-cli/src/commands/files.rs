//! Filesystem commands.
//!
//! Listing, searching, measuring, creating, copying, moving and deleting
//! items. Target paths are computed by the library; these commands only
//! pick defaults from the configuration and print results.

use crate::error::CliError;
use crate::utils::{emit, emit_fs_path, emit_list, load_configuration, path_arg, GlobalOptions};
use clap::Args;
use pathclerk::fs::{self, ConflictMode, SizeUnit, TraverseOptions};
use pathclerk::path;
use std::path::{Path, PathBuf};

/// List the contents of a directory.
#[derive(Args)]
pub struct LsCommand {
    /// Directory to list
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Include hidden entries
    #[arg(short, long, conflicts_with = "no_hidden")]
    pub all: bool,

    /// Leave out hidden entries
    #[arg(long)]
    pub no_hidden: bool,

    /// Only list subdirectories
    #[arg(long, conflicts_with = "files")]
    pub dirs: bool,

    /// Only list files
    #[arg(long)]
    pub files: bool,

    /// Walk the whole tree
    #[arg(short, long)]
    pub recursive: bool,

    /// Levels to descend when walking (0 is the directory itself)
    #[arg(long, value_name = "N", requires = "recursive")]
    pub max_depth: Option<usize>,

    /// Leave out empty directories when walking
    #[arg(long, requires = "recursive")]
    pub skip_empty: bool,

    /// Skip unreadable directories when walking
    #[arg(long, requires = "recursive")]
    pub ignore_errors: bool,
}

impl LsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let include_hidden = if self.all {
            true
        } else if self.no_hidden {
            false
        } else {
            load_configuration(global)?.effective_include_hidden()
        };

        if !self.recursive {
            let names = if self.dirs {
                fs::get_subdirs(&self.dir, include_hidden)?
            } else if self.files {
                fs::get_subfiles(&self.dir, include_hidden)?
            } else {
                fs::get_contents(&self.dir, include_hidden)?
            };
            return emit_list(global, &names);
        }

        let options = TraverseOptions {
            max_depth: self.max_depth,
            include_hidden,
            skip_empty: self.skip_empty,
            ignore_errors: self.ignore_errors,
        };
        let mut groups = fs::traverse(&self.dir, options)?;
        for group in &mut groups {
            if self.dirs {
                group.files.clear();
            } else if self.files {
                group.subdirs.clear();
            }
        }

        let mut text = Vec::new();
        for group in &groups {
            text.push(format!("{}:", group.directory));
            text.extend(group.entries().map(|name| format!("  {name}")));
        }
        emit(global.output_format()?, &groups, &text.join("\n"))
    }
}

/// Search a tree for entries by name, ignoring case.
#[derive(Args)]
pub struct FindCommand {
    /// Name to look for
    pub name: String,

    /// Directory to search
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Levels to descend (0 is the directory itself)
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Report every match instead of the first
    #[arg(long)]
    pub all: bool,
}

impl FindCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let found = if self.all {
            fs::find_all(&self.name, &self.dir, self.max_depth)?
        } else {
            fs::find(&self.name, &self.dir, self.max_depth)?
                .into_iter()
                .collect()
        };

        if found.is_empty() {
            return Err(CliError::SemanticFailure(format!(
                "nothing named '{}' under {}",
                self.name,
                self.dir.display()
            )));
        }

        let names: Vec<String> = found
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
        emit_list(global, &names)
    }
}

/// Search a tree for entries with similar names.
#[derive(Args)]
pub struct SearchCommand {
    /// Name to compare against
    pub name: String,

    /// Directory to search
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Levels to descend (0 is the directory itself)
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Lowest similarity to report, from 0 to 1
    #[arg(long, default_value_t = 0.5)]
    pub similarity: f64,
}

impl SearchCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let found = fs::search(&self.name, &self.dir, self.max_depth, self.similarity)?;
        if found.is_empty() {
            return Err(CliError::SemanticFailure(format!(
                "nothing like '{}' under {}",
                self.name,
                self.dir.display()
            )));
        }

        let text = found
            .iter()
            .map(|m| m.path.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("\n");
        emit(global.output_format()?, &found, &text)
    }
}

/// Show what kind of item something is.
#[derive(Args)]
pub struct KindCommand {
    /// Item to classify
    pub item: PathBuf,
}

impl KindCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let kind = fs::get_kind(&self.item)?.to_string();
        emit(global.output_format()?, &kind, &kind)
    }
}

/// Show the size of a file or directory tree.
#[derive(Args)]
pub struct SizeCommand {
    /// File or directory to measure
    #[arg(default_value = ".")]
    pub item: PathBuf,

    /// Unit: auto, b, kb, mb, gb or tb
    #[arg(long, default_value = "auto")]
    pub unit: SizeUnit,

    /// Decimal places to keep
    #[arg(long, default_value_t = 1)]
    pub precision: u8,
}

impl SizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let size = fs::get_size(&self.item, self.unit, self.precision)?;
        emit(global.output_format()?, &size, &size.to_string())
    }
}

fn conflict_mode(global: &GlobalOptions, flag: Option<ConflictMode>) -> Result<ConflictMode, CliError> {
    match flag {
        Some(mode) => Ok(mode),
        None => Ok(load_configuration(global)?.effective_conflict_mode()),
    }
}

fn emit_landed(global: &GlobalOptions, landed: &[PathBuf]) -> Result<(), CliError> {
    for target in landed {
        log::info!("placed {}", target.display());
    }
    let names: Vec<String> = landed
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect();
    emit_list(global, &names)
}

/// Copy an item into a directory.
#[derive(Args)]
pub struct CopyCommand {
    /// File or directory to copy
    pub item: PathBuf,

    /// Directory to copy into
    pub destination: PathBuf,

    /// What to do when the target exists: o(verwrite), a(ppend) or x (exclusive)
    #[arg(long, value_name = "MODE")]
    pub mode: Option<ConflictMode>,

    /// Copy the entries of ITEM rather than ITEM itself
    #[arg(long)]
    pub contents: bool,
}

impl CopyCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mode = conflict_mode(global, self.mode)?;
        if self.contents {
            let landed = fs::copy_contents(&self.item, &self.destination, mode)?;
            return emit_landed(global, &landed);
        }
        let target = fs::copy(&self.item, &self.destination, mode)?;
        log::info!("copied {} to {}", self.item.display(), target.display());
        emit_fs_path(global, &target)
    }
}

/// Move an item into a directory.
#[derive(Args)]
pub struct MoveCommand {
    /// File or directory to move
    pub item: PathBuf,

    /// Directory to move into
    pub destination: PathBuf,

    /// What to do when the target exists: o(verwrite), a(ppend) or x (exclusive)
    #[arg(long, value_name = "MODE")]
    pub mode: Option<ConflictMode>,

    /// Move the entries of ITEM rather than ITEM itself
    #[arg(long)]
    pub contents: bool,
}

impl MoveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mode = conflict_mode(global, self.mode)?;
        if self.contents {
            let landed = fs::move_contents(&self.item, &self.destination, mode)?;
            return emit_landed(global, &landed);
        }
        let target = fs::move_item(&self.item, &self.destination, mode)?;
        log::info!("moved {} to {}", self.item.display(), target.display());
        emit_fs_path(global, &target)
    }
}

/// Delete items, or move them to the trash.
#[derive(Args)]
pub struct DeleteCommand {
    /// Items to delete
    #[arg(required = true)]
    pub items: Vec<PathBuf>,

    /// Move to the configured trash directory instead
    #[arg(long, conflicts_with = "contents")]
    pub trash: bool,

    /// Empty the directories but keep them
    #[arg(long)]
    pub contents: bool,
}

impl DeleteCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.trash {
            let trash_dir = load_configuration(global)?
                .effective_trash_dir()
                .ok_or_else(|| CliError::Config("no trash_dir is configured".into()))?;
            std::fs::create_dir_all(&trash_dir)?;

            let mut trashed = Vec::new();
            for item in &self.items {
                let landed = fs::move_to_trash(item, &trash_dir)?;
                log::info!("trashed {} as {}", item.display(), landed.display());
                trashed.push(landed.to_string_lossy().into_owned());
            }
            return emit_list(global, &trashed);
        }

        for item in &self.items {
            if self.contents {
                fs::delete_contents(item)?;
            } else {
                fs::delete(item)?;
            }
            log::info!("deleted {}", item.display());
        }
        Ok(())
    }
}

/// Split a new item's path into its parent directory and name.
fn parent_and_name(target: &Path) -> Result<(PathBuf, String), CliError> {
    let text = path_arg(target)?;
    let name = path::base(text)
        .filter(|base| base != path::ROOT)
        .ok_or_else(|| CliError::InvalidArguments(format!("no name to create in '{text}'")))?;
    let parent = match path::trail(text) {
        Some(trail) if !trail.is_empty() => PathBuf::from(trail),
        _ => PathBuf::from("."),
    };
    Ok((parent, name))
}

/// Options shared by `mkdir` and `touch`.
#[derive(Args)]
pub struct CreateArgs {
    /// Path of the new item
    pub path: PathBuf,

    /// What to do when the target exists: o(verwrite), a(ppend) or x (exclusive)
    #[arg(long, value_name = "MODE")]
    pub mode: Option<ConflictMode>,

    /// Create the item hidden
    #[arg(long)]
    pub hidden: bool,
}

/// Create a directory.
#[derive(Args)]
pub struct MkdirCommand {
    #[command(flatten)]
    pub args: CreateArgs,
}

impl MkdirCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (parent, name) = parent_and_name(&self.args.path)?;
        let mode = conflict_mode(global, self.args.mode)?;
        let created = fs::new_dir(&parent, &name, mode, self.args.hidden)?;
        emit_fs_path(global, &created)
    }
}

/// Create an empty file.
#[derive(Args)]
pub struct TouchCommand {
    #[command(flatten)]
    pub args: CreateArgs,
}

impl TouchCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (parent, name) = parent_and_name(&self.args.path)?;
        let mode = conflict_mode(global, self.args.mode)?;
        let created = fs::new_file(&parent, &name, mode, self.args.hidden)?;
        emit_fs_path(global, &created)
    }
}

/// Copy an item next to itself under the next free name.
#[derive(Args)]
pub struct DuplicateCommand {
    /// File or directory to duplicate
    pub item: PathBuf,
}

impl DuplicateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        emit_fs_path(global, &fs::duplicate(&self.item)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_and_name() {
        let (parent, name) = parent_and_name(Path::new("/tmp/work/notes.txt")).unwrap();
        assert_eq!(parent, PathBuf::from("/tmp/work"));
        assert_eq!(name, "notes.txt");
    }

    #[test]
    fn test_parent_and_name_defaults_to_current_dir() {
        let (parent, name) = parent_and_name(Path::new("notes")).unwrap();
        assert_eq!(parent, PathBuf::from("."));
        assert_eq!(name, "notes");
    }

    #[test]
    fn test_parent_and_name_rejects_root() {
        let err = parent_and_name(Path::new("/")).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_flag_mode_wins_over_configuration() {
        let global = GlobalOptions {
            data_dir: Some(PathBuf::from("/nonexistent/data/dir")),
            ..Default::default()
        };
        let mode = conflict_mode(&global, Some(ConflictMode::Overwrite)).unwrap();
        assert_eq!(mode, ConflictMode::Overwrite);
    }
}
