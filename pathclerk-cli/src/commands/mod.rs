//! CLI command implementations.
//!
//! - `query`: read-only path algebra (`normalize`, `split`, `bisect`, ...)
//! - `mutate`: computed path changes, optionally applied on disk
//! - `check`: predicates that exit 1 when false
//! - `files`: listing, searching, measuring, creating, copying, moving and
//!   deleting
//! - `perms`: Unix permissions per party
//! - `completions`: shell completion scripts
//! - `validate`: configuration file check

pub mod check;
pub mod completions;
pub mod files;
pub mod mutate;
#[cfg(unix)]
pub mod perms;
pub mod query;
pub mod validate;

pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use files::{
    CopyCommand, DeleteCommand, DuplicateCommand, FindCommand, KindCommand, LsCommand,
    MkdirCommand, MoveCommand, SearchCommand, SizeCommand, TouchCommand,
};
pub use mutate::{
    AppendCommand, ChangeBaseCommand, ChangeBasenameCommand, ChangeExtCommand, HideCommand,
    IncrementCommand, InsertCommand, RemoveCommand, RenameCommand, ReplaceCommand, RevealCommand,
};
#[cfg(unix)]
pub use perms::PermsCommand;
pub use query::{
    AccessCommand, Accessor, BisectCommand, ConcatCommand, DeconstructCommand, IndexCommand,
    JoinCommand, NormalizeCommand, PopCommand, SharedCommand, SplitCommand, SubpathCommand,
    TrimCommand,
};
pub use validate::ValidateCommand;
