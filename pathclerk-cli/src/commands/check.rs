//! Predicate commands.
//!
//! Each check prints its answer and exits 0 for true, 1 for false, so they
//! compose with shell conditionals.

use crate::error::CliError;
use crate::utils::{emit, load_configuration, GlobalOptions};
use clap::{Args, Subcommand};
use pathclerk::path::{self, PathRelationship};
use serde::Serialize;

/// Answer a yes/no question about one or two paths.
#[derive(Args)]
pub struct CheckCommand {
    #[command(subcommand)]
    pub check: Check,
}

/// The available checks.
#[derive(Subcommand)]
pub enum Check {
    /// Path starts with the root
    IsAbsolute {
        /// Path to check
        path: String,
    },

    /// Path does not start with the root
    IsRelative {
        /// Path to check
        path: String,
    },

    /// Last segment starts with a dot
    IsHidden {
        /// Path to check
        path: String,
    },

    /// Last segment has an extension
    HasExt {
        /// Path to check
        path: String,
    },

    /// Subpath occurs as a run of whole segments
    IsInPath {
        /// Run of segments to look for
        subpath: String,
        /// Path to search
        path: String,
    },

    /// Candidate is a leading run of segments of the path
    IsSubpath {
        /// Candidate prefix
        candidate: String,
        /// Path it should lead
        of_path: String,
    },

    /// Path contains none of the configured forbidden characters
    IsLegal {
        /// Path to check
        path: String,
    },

    /// How two paths relate; false only when unrelated
    Relationship {
        /// First path
        path1: String,
        /// Second path
        path2: String,
    },
}

#[derive(Serialize)]
struct RelationshipReport {
    relationship: &'static str,
    description: String,
}

fn relationship_name(relationship: PathRelationship) -> &'static str {
    match relationship {
        PathRelationship::Ancestor => "ancestor",
        PathRelationship::Descendant => "descendant",
        PathRelationship::Same => "same",
        PathRelationship::Unrelated => "unrelated",
    }
}

impl CheckCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let format = global.output_format()?;

        let answer = match &self.check {
            Check::IsAbsolute { path } => path::is_absolute(path),
            Check::IsRelative { path } => path::is_relative(path),
            Check::IsHidden { path } => path::is_hidden(path),
            Check::HasExt { path } => path::has_ext(path),
            Check::IsInPath { subpath, path } => path::is_in_path(subpath, path),
            Check::IsSubpath { candidate, of_path } => path::is_subpath(candidate, of_path),
            Check::IsLegal { path } => {
                let forbidden = load_configuration(global)?.effective_forbidden_chars();
                path::is_legal_with(path, &forbidden)
            }
            Check::Relationship { path1, path2 } => {
                let relationship = PathRelationship::between(path1, path2);
                let name = relationship_name(relationship);
                let report = RelationshipReport {
                    relationship: name,
                    description: relationship.description(path1, path2),
                };
                emit(format, &report, name)?;
                return if relationship.is_hierarchical() {
                    Ok(())
                } else {
                    Err(CliError::SemanticFailure(report.description))
                };
            }
        };

        emit(format, &answer, &answer.to_string())?;
        if answer {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(String::new()))
        }
    }
}
