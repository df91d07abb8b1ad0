//! Listing, walking and searching directory contents.
//!
//! Listings return entry names sorted in byte order so that results are
//! stable across platforms and runs.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::path;

use super::{io_error, path_text, require_dir};

/// Names of the entries of `dir`.
///
/// # Errors
///
/// Returns `NotADirectory` if `dir` is not a directory.
pub fn get_contents(dir: &Path, include_hidden: bool) -> Result<Vec<String>> {
    Ok(list(dir, include_hidden)?
        .into_iter()
        .map(|entry| entry.name)
        .collect())
}

/// Names of the subdirectories of `dir`, links to directories included.
///
/// # Errors
///
/// Returns `NotADirectory` if `dir` is not a directory.
pub fn get_subdirs(dir: &Path, include_hidden: bool) -> Result<Vec<String>> {
    Ok(list(dir, include_hidden)?
        .into_iter()
        .filter_map(|entry| entry.is_dir.then_some(entry.name))
        .collect())
}

/// Names of the non-directory entries of `dir`.
///
/// # Errors
///
/// Returns `NotADirectory` if `dir` is not a directory.
pub fn get_subfiles(dir: &Path, include_hidden: bool) -> Result<Vec<String>> {
    Ok(list(dir, include_hidden)?
        .into_iter()
        .filter_map(|entry| (!entry.is_dir).then_some(entry.name))
        .collect())
}

/// Whether `dir` has no entries at all.
///
/// # Errors
///
/// Returns `NotADirectory` if `dir` is not a directory.
pub fn is_empty(dir: &Path) -> Result<bool> {
    require_dir(dir)?;
    let mut entries = fs::read_dir(dir).map_err(|e| io_error(dir, e))?;
    Ok(entries.next().is_none())
}

/// One listed entry. `is_dir` follows links, `is_link` does not.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Listed {
    name: String,
    is_dir: bool,
    is_link: bool,
}

/// Entries of `dir` sorted by name.
fn list(dir: &Path, include_hidden: bool) -> Result<Vec<Listed>> {
    require_dir(dir)?;
    let mut entries = Vec::new();

    for entry in fs::read_dir(dir).map_err(|e| io_error(dir, e))? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !include_hidden && path::is_hidden(&name) {
            continue;
        }
        let file_type = entry.file_type()?;
        let is_link = file_type.is_symlink();
        let is_dir = if is_link {
            entry.path().is_dir()
        } else {
            file_type.is_dir()
        };
        entries.push(Listed {
            name,
            is_dir,
            is_link,
        });
    }

    entries.sort();
    Ok(entries)
}

/// What an item is.
///
/// # Examples
///
/// ```
/// use pathclerk::fs::ItemKind;
///
/// assert_eq!(ItemKind::File { ext: Some("txt".into()) }.to_string(), "txt");
/// assert_eq!(ItemKind::File { ext: None }.to_string(), "file");
/// assert_eq!(ItemKind::Directory.to_string(), "directory");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// A directory.
    Directory,
    /// A symbolic link, whatever it points at.
    Link,
    /// Anything else, with its extension minus the dot.
    File {
        /// The extension, if the name has one.
        ext: Option<String>,
    },
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory => write!(f, "directory"),
            Self::Link => write!(f, "link"),
            Self::File { ext: Some(ext) } => write!(f, "{ext}"),
            Self::File { ext: None } => write!(f, "file"),
        }
    }
}

/// Classify `item` without following a link at its own path.
///
/// # Errors
///
/// Returns `PathNotFound` if `item` is missing.
pub fn get_kind(item: &Path) -> Result<ItemKind> {
    let file_type = item
        .symlink_metadata()
        .map_err(|e| io_error(item, e))?
        .file_type();

    if file_type.is_symlink() {
        return Ok(ItemKind::Link);
    }
    if file_type.is_dir() {
        return Ok(ItemKind::Directory);
    }
    let ext = path::ext(path_text(item)?).map(|e| e.trim_start_matches('.').to_string());
    Ok(ItemKind::File { ext })
}

/// Unit for [`get_size`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum SizeUnit {
    /// The largest unit that keeps the value at or above one.
    #[default]
    #[serde(rename = "auto")]
    Auto,
    /// Bytes.
    #[serde(rename = "B")]
    Bytes,
    /// 1024 bytes.
    #[serde(rename = "KB")]
    Kilobytes,
    /// 1024 kilobytes.
    #[serde(rename = "MB")]
    Megabytes,
    /// 1024 megabytes.
    #[serde(rename = "GB")]
    Gigabytes,
    /// 1024 gigabytes.
    #[serde(rename = "TB")]
    Terabytes,
}

impl SizeUnit {
    const SCALE: [Self; 5] = [
        Self::Bytes,
        Self::Kilobytes,
        Self::Megabytes,
        Self::Gigabytes,
        Self::Terabytes,
    ];

    /// Power of 1024 this unit stands for; `None` for `Auto`.
    fn exponent(self) -> Option<usize> {
        Self::SCALE.iter().position(|unit| *unit == self)
    }

    /// The fixed unit `Auto` settles on for `bytes`.
    fn settle(self, bytes: u64) -> Self {
        if self != Self::Auto {
            return self;
        }
        let mut exponent = 0;
        let mut rest = bytes;
        while rest >= 1024 && exponent < Self::SCALE.len() - 1 {
            rest /= 1024;
            exponent += 1;
        }
        Self::SCALE[exponent]
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::Bytes => "B",
            Self::Kilobytes => "KB",
            Self::Megabytes => "MB",
            Self::Gigabytes => "GB",
            Self::Terabytes => "TB",
        };
        write!(f, "{name}")
    }
}

impl FromStr for SizeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "b" | "by" | "bytes" => Ok(Self::Bytes),
            "kb" => Ok(Self::Kilobytes),
            "mb" => Ok(Self::Megabytes),
            "gb" => Ok(Self::Gigabytes),
            "tb" => Ok(Self::Terabytes),
            _ => Err(Error::illegal_argument(format!(
                "invalid size unit '{s}' (expected auto, b, kb, mb, gb or tb)"
            ))),
        }
    }
}

/// A measured size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Size {
    /// Exact size in bytes.
    pub bytes: u64,
    /// `bytes` in `unit`, rounded.
    pub value: f64,
    /// The unit of `value`, never `Auto`.
    pub unit: SizeUnit,
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Size of a file, or of every non-directory entry below a directory.
///
/// Links are measured as links. Entries that vanish during the walk are
/// skipped.
///
/// # Errors
///
/// Returns `PathNotFound` if `item` is missing, or an I/O error for an
/// unreadable directory.
///
/// # Examples
///
/// ```no_run
/// use pathclerk::fs::{get_size, SizeUnit};
/// use std::path::Path;
///
/// let size = get_size(Path::new("/tmp/project"), SizeUnit::Auto, 1).unwrap();
/// println!("{size}");
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn get_size(item: &Path, unit: SizeUnit, precision: u8) -> Result<Size> {
    let bytes = tree_bytes(item)?;
    let unit = unit.settle(bytes);
    let exponent = i32::try_from(unit.exponent().unwrap_or(0)).unwrap_or(0);

    let scale = 10f64.powi(i32::from(precision));
    let value = (bytes as f64 / 1024f64.powi(exponent) * scale).round() / scale;
    Ok(Size { bytes, value, unit })
}

fn tree_bytes(item: &Path) -> Result<u64> {
    let metadata = item.symlink_metadata().map_err(|e| io_error(item, e))?;
    if !metadata.is_dir() {
        return Ok(metadata.len());
    }

    let mut total = 0;
    for entry in fs::read_dir(item).map_err(|e| io_error(item, e))? {
        match tree_bytes(&entry?.path()) {
            Ok(bytes) => total += bytes,
            Err(Error::PathNotFound { path }) => {
                log::debug!("{} vanished while measuring", path.display());
            }
            Err(err) => return Err(err),
        }
    }
    Ok(total)
}

/// Options for [`traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraverseOptions {
    /// How many levels below the starting directory to visit; `None` for
    /// no limit and `Some(0)` for the starting directory only.
    pub max_depth: Option<usize>,
    /// Whether hidden entries are listed and hidden directories entered.
    pub include_hidden: bool,
    /// Whether directories without any entries are left out.
    pub skip_empty: bool,
    /// Whether unreadable directories are skipped instead of failing the
    /// walk.
    pub ignore_errors: bool,
}

impl Default for TraverseOptions {
    fn default() -> Self {
        Self {
            max_depth: None,
            include_hidden: true,
            skip_empty: false,
            ignore_errors: false,
        }
    }
}

/// One visited directory and its direct entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirEntryGroup {
    /// The directory, relative to the parent of the starting directory.
    pub directory: String,
    /// The directory on disk.
    pub path: PathBuf,
    /// Names of its subdirectories.
    pub subdirs: Vec<String>,
    /// Names of its other entries.
    pub files: Vec<String>,
}

impl DirEntryGroup {
    /// Subdirectories followed by files.
    #[must_use]
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.subdirs
            .iter()
            .chain(self.files.iter())
            .map(String::as_str)
    }
}

/// Walk `dir` top-down, one group per visited directory.
///
/// Directories are visited depth-first in sorted order, each before its
/// children. Links to directories are listed under `subdirs` but never
/// entered. Group names are relative to the starting directory's trail,
/// so walking `/a/b` yields `b`, `b/c`, and so on.
///
/// # Errors
///
/// Returns `NotADirectory` if `dir` is not a directory, or an I/O error for
/// an unreadable directory unless `ignore_errors` is set.
///
/// # Examples
///
/// ```no_run
/// use pathclerk::fs::{traverse, TraverseOptions};
/// use std::path::Path;
///
/// let options = TraverseOptions { max_depth: Some(1), ..Default::default() };
/// for group in traverse(Path::new("/tmp/project"), options).unwrap() {
///     println!("{}: {} entries", group.directory, group.entries().count());
/// }
/// ```
pub fn traverse(dir: &Path, options: TraverseOptions) -> Result<Vec<DirEntryGroup>> {
    require_dir(dir)?;
    let start_name = path::base(path_text(dir)?).unwrap_or_else(|| ".".to_string());

    let mut groups = Vec::new();
    let mut pending = vec![(dir.to_path_buf(), start_name, 0usize)];

    while let Some((current, relative, depth)) = pending.pop() {
        let entries = match list(&current, options.include_hidden) {
            Ok(entries) => entries,
            Err(err) if options.ignore_errors => {
                log::debug!("skipping {}: {err}", current.display());
                continue;
            }
            Err(err) => return Err(err),
        };

        let mut subdirs = Vec::new();
        let mut files = Vec::new();
        let mut descend = Vec::new();
        for entry in entries {
            if !entry.is_dir {
                files.push(entry.name);
                continue;
            }
            if !entry.is_link {
                descend.push(entry.name.clone());
            }
            subdirs.push(entry.name);
        }

        if options.max_depth.map_or(true, |max| depth < max) {
            for name in descend.iter().rev() {
                pending.push((
                    current.join(name),
                    path::join([relative.as_str(), name.as_str()]),
                    depth + 1,
                ));
            }
        }

        if options.skip_empty && subdirs.is_empty() && files.is_empty() {
            continue;
        }
        groups.push(DirEntryGroup {
            directory: relative,
            path: current,
            subdirs,
            files,
        });
    }

    Ok(groups)
}

/// First entry under `dir` whose name matches `name`, ignoring case.
///
/// # Errors
///
/// Same as [`traverse`].
pub fn find(name: &str, dir: &Path, max_depth: Option<usize>) -> Result<Option<PathBuf>> {
    Ok(find_all(name, dir, max_depth)?.into_iter().next())
}

/// Every entry under `dir` whose name matches `name`, ignoring case.
///
/// # Errors
///
/// Same as [`traverse`].
pub fn find_all(name: &str, dir: &Path, max_depth: Option<usize>) -> Result<Vec<PathBuf>> {
    let wanted = name.to_lowercase();
    let options = TraverseOptions {
        max_depth,
        include_hidden: true,
        skip_empty: true,
        ignore_errors: false,
    };

    let mut matches = Vec::new();
    for group in traverse(dir, options)? {
        for entry in group.entries() {
            if entry.to_lowercase() == wanted {
                matches.push(group.path.join(entry));
            }
        }
    }
    Ok(matches)
}

/// An entry found by [`search`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchMatch {
    /// Full path of the entry.
    pub path: PathBuf,
    /// The entry's name.
    pub name: String,
    /// How close the name is to the query, from 0 to 1.
    pub similarity: f64,
}

/// Entries under `dir` whose names resemble `name`.
///
/// Similarity is twice the number of matching characters over the total
/// length of both names, where matches are found by repeatedly taking the
/// longest common run and recursing on either side of it. Entries scoring
/// at least `threshold` are returned in walk order.
///
/// # Errors
///
/// Returns `IllegalArgument` if `threshold` is outside `0..=1`, otherwise
/// the errors of [`traverse`].
///
/// # Examples
///
/// ```no_run
/// use pathclerk::fs::search;
/// use std::path::Path;
///
/// for found in search("reprot.txt", Path::new("/tmp/docs"), None, 0.8).unwrap() {
///     println!("{} ({:.2})", found.path.display(), found.similarity);
/// }
/// ```
pub fn search(
    name: &str,
    dir: &Path,
    max_depth: Option<usize>,
    threshold: f64,
) -> Result<Vec<SearchMatch>> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(Error::illegal_argument(format!(
            "similarity must be between 0 and 1, got {threshold}"
        )));
    }

    let options = TraverseOptions {
        max_depth,
        include_hidden: true,
        skip_empty: true,
        ignore_errors: false,
    };
    let query: Vec<char> = name.chars().collect();

    let mut matches = Vec::new();
    for group in traverse(dir, options)? {
        for entry in group.entries() {
            let score = similarity(&query, &entry.chars().collect::<Vec<_>>());
            if score >= threshold {
                matches.push(SearchMatch {
                    path: group.path.join(entry),
                    name: entry.to_string(),
                    similarity: score,
                });
            }
        }
    }
    Ok(matches)
}

#[allow(clippy::cast_precision_loss)]
fn similarity(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    (2 * matching_chars(a, b)) as f64 / total as f64
}

/// Characters covered by the longest common run and, recursively, the
/// matches on either side of it.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let (start_a, start_b, len) = longest_common_run(a, b);
    if len == 0 {
        return 0;
    }
    len + matching_chars(&a[..start_a], &b[..start_b])
        + matching_chars(&a[start_a + len..], &b[start_b + len..])
}

/// Earliest longest run shared by `a` and `b`, as `(start_a, start_b, len)`.
fn longest_common_run(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut previous = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        let mut current = vec![0usize; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            if ca == cb {
                let run = previous[j] + 1;
                current[j + 1] = run;
                if run > best.2 {
                    best = (i + 1 - run, j + 1 - run, run);
                }
            }
        }
        previous = current;
    }
    best
}
