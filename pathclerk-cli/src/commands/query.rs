//! Read-only path algebra commands.
//!
//! None of these touch the filesystem: every argument is path text.

use crate::error::CliError;
use crate::utils::{emit, emit_list, emit_optional, emit_path, GlobalOptions};
use clap::Args;
use pathclerk::path::{self, Position};
use serde::Serialize;

/// Normalize one or more paths.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Paths to normalize
    #[arg(required = true, allow_hyphen_values = true)]
    pub paths: Vec<String>,

    /// Convert backslashes to slashes first
    #[arg(long)]
    pub reorient: bool,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let paths: Vec<String> = if self.reorient {
            self.paths.iter().map(|p| path::reorient(p)).collect()
        } else {
            self.paths
        };
        emit_list(global, &path::normalize_all(&paths))
    }
}

/// Split a path into its segments.
#[derive(Args)]
pub struct SplitCommand {
    /// Path to split
    pub path: String,
}

impl SplitCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        emit_list(global, &path::split(&self.path))
    }
}

/// Join segments into a path.
#[derive(Args)]
pub struct JoinCommand {
    /// Segments to join; "/" starts an absolute path
    #[arg(required = true)]
    pub segments: Vec<String>,
}

impl JoinCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        emit_path(global, &path::join(&self.segments))
    }
}

/// Concatenate paths into one.
#[derive(Args)]
pub struct ConcatCommand {
    /// Paths to concatenate, in order
    #[arg(required = true)]
    pub paths: Vec<String>,
}

impl ConcatCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        emit_path(global, &path::concat(&self.paths))
    }
}

/// The single-path accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessor {
    Root,
    Trail,
    Base,
    Basename,
    Ext,
    Depth,
}

/// A path for one of the accessor commands.
#[derive(Args)]
pub struct AccessCommand {
    /// Path to inspect
    pub path: String,
}

impl AccessCommand {
    pub fn execute(self, accessor: Accessor, global: &GlobalOptions) -> Result<(), CliError> {
        let p = self.path.as_str();
        let value = match accessor {
            Accessor::Root => path::root(p),
            Accessor::Trail => path::trail(p),
            Accessor::Base => path::base(p),
            Accessor::Basename => path::basename(p),
            Accessor::Ext => path::ext(p),
            Accessor::Depth => {
                let depth = path::depth(p);
                return emit(global.output_format()?, &depth, &depth.to_string());
            }
        };
        emit_optional(global, value.as_deref())
    }
}

/// Break a path into trail, basename and extension.
#[derive(Args)]
pub struct DeconstructCommand {
    /// Path to break apart
    pub path: String,
}

impl DeconstructCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let parts = path::deconstruct(&self.path);
        let text = [&parts.trail, &parts.basename, &parts.ext]
            .iter()
            .map(|part| part.as_deref().unwrap_or_default())
            .collect::<Vec<_>>()
            .join("\n");
        emit(global.output_format()?, &parts, &text)
    }
}

#[derive(Serialize)]
struct Halves {
    head: String,
    tail: String,
}

/// Split a path in two at a segment.
#[derive(Args)]
pub struct BisectCommand {
    /// Path to split
    pub path: String,

    /// Index (negative counts from the end) or segment name
    #[arg(allow_negative_numbers = true)]
    pub at: Position,
}

impl BisectCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (head, tail) = path::bisect(&self.path, self.at)?;
        let text = format!("{head}\n{tail}");
        emit(global.output_format()?, &Halves { head, tail }, &text)
    }
}

/// Extract a run of segments.
#[derive(Args)]
pub struct SubpathCommand {
    /// Path to slice
    pub path: String,

    /// First segment to keep (index or name)
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<Position>,

    /// Segment to stop before (index or name)
    #[arg(long, allow_negative_numbers = true)]
    pub end: Option<Position>,
}

impl SubpathCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let sub = path::subpath(&self.path, self.start, self.end)?;
        emit_path(global, &sub)
    }
}

/// Find the index of a segment.
#[derive(Args)]
pub struct IndexCommand {
    /// A single segment
    pub segment: String,

    /// Path to search
    pub path: String,
}

impl IndexCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let index = path::index(&self.segment, &self.path)?;
        emit(global.output_format()?, &index, &index.to_string())
    }
}

/// Show the segment at a position.
#[derive(Args)]
pub struct PopCommand {
    /// Path to read
    pub path: String,

    /// Index (negative counts from the end) or segment name
    #[arg(allow_negative_numbers = true)]
    pub at: Position,
}

impl PopCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let segment = path::pop(&self.path, self.at)?;
        emit_path(global, &segment)
    }
}

/// Drop segments from either end.
#[derive(Args)]
pub struct TrimCommand {
    /// Path to trim
    pub path: String,

    /// Segments to drop from the start
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub left: Option<isize>,

    /// Segments to drop from the end
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub right: Option<isize>,
}

impl TrimCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.left.is_none() && self.right.is_none() {
            return Err(CliError::InvalidArguments(
                "trim needs --left, --right or both".into(),
            ));
        }

        let mut trimmed = path::normalize(&self.path);
        if let Some(n) = self.left {
            trimmed = path::ltrim(&trimmed, n)?;
        }
        if let Some(n) = self.right {
            trimmed = path::rtrim(&trimmed, n)?;
        }
        emit_path(global, &trimmed)
    }
}

/// Longest common prefix of several paths.
#[derive(Args)]
pub struct SharedCommand {
    /// Paths to compare
    #[arg(required = true, num_args = 2..)]
    pub paths: Vec<String>,

    /// Compare whole segments rather than characters
    #[arg(long)]
    pub subpath: bool,
}

impl SharedCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let shared = if self.subpath {
            path::shared_subpath(&self.paths)
        } else {
            path::shared_trail(&self.paths)
        };
        emit_optional(global, shared.as_deref())
    }
}
