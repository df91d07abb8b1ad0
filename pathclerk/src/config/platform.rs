//! Per-platform constants and well-known directories.
//!
//! The forbidden-character tables are fixed at compile time. Home-relative
//! shortcuts are resolved at runtime through the `home` crate.

use crate::error::{Error, Result};
use std::fmt;
use std::path::PathBuf;

/// Characters that may not appear in a Windows path segment.
pub const WINDOWS_FORBIDDEN: &[char] = &['/', ':', '*', '?', '"', '<', '>', '|', '\\'];

/// Characters that may not appear in a macOS path segment.
pub const MACOS_FORBIDDEN: &[char] = &[':'];

/// Linux and every other platform forbid nothing beyond the separator.
pub const DEFAULT_FORBIDDEN: &[char] = &[];

/// Operating system family, as far as path legality is concerned.
///
/// # Examples
///
/// ```
/// use pathclerk::config::Platform;
///
/// assert_eq!(Platform::Windows.forbidden_chars().len(), 9);
/// assert_eq!(Platform::MacOs.forbidden_chars(), &[':']);
/// assert!(Platform::Linux.forbidden_chars().is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Microsoft Windows.
    Windows,
    /// Apple macOS.
    MacOs,
    /// Linux distributions.
    Linux,
    /// Anything else.
    Other,
}

impl Platform {
    /// The platform this crate was compiled for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else {
            Self::Other
        }
    }

    /// Characters that make a path segment illegal on this platform.
    #[must_use]
    pub const fn forbidden_chars(self) -> &'static [char] {
        match self {
            Self::Windows => WINDOWS_FORBIDDEN,
            Self::MacOs => MACOS_FORBIDDEN,
            Self::Linux | Self::Other => DEFAULT_FORBIDDEN,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Windows => "windows",
            Self::MacOs => "macos",
            Self::Linux => "linux",
            Self::Other => "other",
        };
        write!(f, "{name}")
    }
}

/// Well-known directories of the current user.
///
/// # Examples
///
/// ```no_run
/// use pathclerk::config::Shortcuts;
///
/// let shortcuts = Shortcuts::resolve().unwrap();
/// println!("home: {}", shortcuts.home.display());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcuts {
    /// The user's home directory.
    pub home: PathBuf,
    /// The platform trash directory, where one is known.
    pub trash: Option<PathBuf>,
}

impl Shortcuts {
    /// Resolve shortcuts for the current user and platform.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn resolve() -> Result<Self> {
        let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
            path: PathBuf::from("~"),
            reason: "Cannot determine home directory".into(),
        })?;
        Ok(Self::for_home(home, Platform::current()))
    }

    /// Shortcuts rooted at an explicit home directory.
    #[must_use]
    pub fn for_home(home: PathBuf, platform: Platform) -> Self {
        let trash = match platform {
            Platform::MacOs => Some(home.join(".Trash")),
            Platform::Linux => Some(home.join(".local/share/Trash/files")),
            Platform::Windows | Platform::Other => None,
        };
        Self { home, trash }
    }

    /// `~/Desktop`.
    #[must_use]
    pub fn desktop(&self) -> PathBuf {
        self.home.join("Desktop")
    }

    /// `~/Documents`.
    #[must_use]
    pub fn documents(&self) -> PathBuf {
        self.home.join("Documents")
    }

    /// `~/Downloads`.
    #[must_use]
    pub fn downloads(&self) -> PathBuf {
        self.home.join("Downloads")
    }
}
