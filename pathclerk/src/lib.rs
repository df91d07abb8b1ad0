#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathclerk
//!
//! Slash-delimited path algebra and the filesystem helpers built on it.
//!
//! Paths are plain strings split on `/`. The algebra never touches the
//! disk: it normalizes, splits, queries and rewrites path text, reporting
//! structural misuse through four distinct error kinds. The filesystem
//! layer computes every target with the algebra and then performs the
//! operation with `std::fs`.
//!
//! ## Modules
//!
//! - [`path`]: normalization, segments, accessors, navigation, mutators and
//!   relational predicates
//! - [`fs`]: renames, copies, moves, deletion, listings, walks and Unix
//!   permissions, with [`fs::ConflictMode`] deciding what happens when a
//!   target exists
//! - [`config`]: layered configuration (file, `PATHCLERK_*` variables,
//!   programmatic) and platform tables
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathclerk::path;
//!
//! assert_eq!(path::normalize("a//b/"), "a/b");
//! assert_eq!(path::trail("/usr/local/bin"), Some("/usr/local".to_string()));
//! assert_eq!(path::change_ext("/docs/report.txt", "md").unwrap(), "/docs/report.md");
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod path;

pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{PathParts, PathRelationship, Position};
