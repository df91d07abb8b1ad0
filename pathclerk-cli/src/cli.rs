//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AccessCommand, AppendCommand, BisectCommand, ChangeBaseCommand, ChangeBasenameCommand,
    ChangeExtCommand, CheckCommand, CompletionsCommand, ConcatCommand, CopyCommand,
    DeconstructCommand, DeleteCommand, DuplicateCommand, FindCommand, HideCommand,
    IncrementCommand, IndexCommand, InsertCommand, JoinCommand, KindCommand, LsCommand,
    MkdirCommand, MoveCommand, NormalizeCommand, PopCommand, RemoveCommand, RenameCommand,
    ReplaceCommand, RevealCommand, SearchCommand, SharedCommand, SizeCommand, SplitCommand,
    SubpathCommand, TouchCommand, TrimCommand, ValidateCommand,
};
#[cfg(unix)]
use crate::commands::PermsCommand;
use clap::{Parser, Subcommand, ValueEnum};
use pathclerk::config::OutputFormat;
use std::path::PathBuf;

/// Slash-delimited path manipulation and file housekeeping.
#[derive(Parser)]
#[command(name = "pathclerk")]
#[command(version, about = "Manipulate slash-delimited paths and tidy files", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "PATHCLERK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output format for results
    #[arg(long, value_enum, global = true)]
    pub format: Option<FormatArg>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format accepted by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// One value per line
    Text,
    /// JSON document
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Normalize paths
    Normalize(NormalizeCommand),

    /// Split a path into segments
    Split(SplitCommand),

    /// Join segments into a path
    Join(JoinCommand),

    /// Concatenate paths
    Concat(ConcatCommand),

    /// Show the root of a path
    Root(AccessCommand),

    /// Show everything but the last segment
    Trail(AccessCommand),

    /// Show the last segment
    Base(AccessCommand),

    /// Show the last segment without its extension
    Basename(AccessCommand),

    /// Show the extension of the last segment
    Ext(AccessCommand),

    /// Count the segments of a path
    Depth(AccessCommand),

    /// Break a path into trail, basename and extension
    Deconstruct(DeconstructCommand),

    /// Split a path in two at a segment
    Bisect(BisectCommand),

    /// Extract a run of segments
    Subpath(SubpathCommand),

    /// Find the index of a segment
    Index(IndexCommand),

    /// Show the segment at a position
    Pop(PopCommand),

    /// Drop segments from either end
    Trim(TrimCommand),

    /// Longest common prefix of several paths
    Shared(SharedCommand),

    /// Replace a subpath
    Replace(ReplaceCommand),

    /// Insert a subpath
    Insert(InsertCommand),

    /// Append a subpath
    Append(AppendCommand),

    /// Remove a subpath
    Remove(RemoveCommand),

    /// Replace the last segment
    ChangeBase(ChangeBaseCommand),

    /// Bump the copy counter of the last segment
    Increment(IncrementCommand),

    /// Give a path a new name
    Rename(RenameCommand),

    /// Replace the basename, keeping the extension
    ChangeBasename(ChangeBasenameCommand),

    /// Replace the extension
    ChangeExt(ChangeExtCommand),

    /// Prefix the last segment with a dot
    Hide(HideCommand),

    /// Drop the leading dot from the last segment
    Reveal(RevealCommand),

    /// Answer a question about paths; exits 1 for false
    Check(CheckCommand),

    /// List a directory
    Ls(LsCommand),

    /// Search a tree by name
    Find(FindCommand),

    /// Search a tree for similar names
    Search(SearchCommand),

    /// Show what kind of item something is
    Kind(KindCommand),

    /// Show the size of an item
    Size(SizeCommand),

    /// Copy an item into a directory
    Copy(CopyCommand),

    /// Move an item into a directory
    Move(MoveCommand),

    /// Delete items or send them to the trash
    Delete(DeleteCommand),

    /// Create a directory
    Mkdir(MkdirCommand),

    /// Create an empty file
    Touch(TouchCommand),

    /// Copy an item next to itself
    Duplicate(DuplicateCommand),

    /// Show or change permissions
    #[cfg(unix)]
    Perms(PermsCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
