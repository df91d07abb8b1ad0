//! A pure algebra over slash-separated path strings.
//!
//! Paths here are plain text. Nothing in this module touches the
//! filesystem, resolves `.`/`..`, or expands `~`; the operations only
//! rearrange segments.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Every operation normalizes its inputs: surrounding whitespace is trimmed,
//! runs of `/` collapse, and trailing separators are dropped except for the
//! root `/` itself. The empty string is a valid, empty path.
//!
//! ## Segments
//!
//! A path splits into segments. An absolute path carries the root marker
//! `/` as its first segment, so `/A/B` has depth 3 and `A/B` depth 2.
//!
//! ## Base, basename and extension
//!
//! The base is the final segment. Its extension starts at the last `.` that
//! is neither the first nor the last character; the basename is the base
//! without it.
//!
//! # Examples
//!
//! ```
//! use pathclerk::path::{bisect, change_ext, increment_base, split, PathRelationship};
//!
//! assert_eq!(split("/A/B/F.EXT"), vec!["/", "A", "B", "F.EXT"]);
//! assert_eq!(
//!     bisect("/A/B/F.EXT", 1).unwrap(),
//!     ("/A".to_string(), "B/F.EXT".to_string())
//! );
//! assert_eq!(change_ext("/A/F.EXT", "md").unwrap(), "/A/F.md");
//! assert_eq!(increment_base("/A 1").unwrap(), "/A 2");
//!
//! let rel = PathRelationship::between("/A", "/A/B");
//! assert_eq!(rel, PathRelationship::Ancestor);
//! ```

pub mod access;
pub mod mutate;
pub mod navigate;
pub mod normalize;
pub mod relationship;
pub mod segment;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use access::{
    base, basename, depth, ext, root, shared_subpath, shared_trail, strip_base, strip_ext,
    strip_root, strip_trail, trail,
};
pub use mutate::{
    append, change_base, change_basename, change_ext, deconstruct, hide, increment_base, insert,
    remove, rename, replace, reveal,
};
pub use navigate::{bisect, index, ltrim, pop, rtrim, subpath};
pub use normalize::{normalize, normalize_all, reorient, ROOT, SEPARATOR};
pub use relationship::{
    has_ext, have_shared_subpath, have_shared_trail, is_absolute, is_hidden, is_in_path,
    is_legal, is_legal_with, is_relative, is_subpath, PathRelationship,
};
pub use segment::{concat, join, split};
pub use types::{PathParts, Position};
