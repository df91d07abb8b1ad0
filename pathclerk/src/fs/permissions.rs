//! Unix permission checks and changes per party.

use std::fmt;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};

use super::{io_error, require_exists};

/// Read, write and execute bits for the owning user.
pub const USER_BITS: [u32; 3] = [0o400, 0o200, 0o100];
/// Read, write and execute bits for the owning group.
pub const GROUP_BITS: [u32; 3] = [0o040, 0o020, 0o010];
/// Read, write and execute bits for everyone else.
pub const OTHERS_BITS: [u32; 3] = [0o004, 0o002, 0o001];

const READ: usize = 0;
const WRITE: usize = 1;
const EXECUTE: usize = 2;

/// Who a permission applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Party {
    /// The owning user.
    User,
    /// The owning group.
    Group,
    /// Everyone else.
    Others,
    /// User, group and others together.
    All,
}

impl Party {
    /// The three individual parties.
    pub const MEMBERS: [Self; 3] = [Self::User, Self::Group, Self::Others];

    fn bits(self) -> [u32; 3] {
        match self {
            Self::User => USER_BITS,
            Self::Group => GROUP_BITS,
            Self::Others => OTHERS_BITS,
            Self::All => [
                USER_BITS[READ] | GROUP_BITS[READ] | OTHERS_BITS[READ],
                USER_BITS[WRITE] | GROUP_BITS[WRITE] | OTHERS_BITS[WRITE],
                USER_BITS[EXECUTE] | GROUP_BITS[EXECUTE] | OTHERS_BITS[EXECUTE],
            ],
        }
    }

    /// Every permission bit belonging to this party.
    #[must_use]
    pub fn mask(self) -> u32 {
        self.bits().iter().fold(0, |acc, bit| acc | bit)
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Group => write!(f, "group"),
            Self::Others => write!(f, "others"),
            Self::All => write!(f, "all"),
        }
    }
}

impl FromStr for Party {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "u" | "user" => Ok(Self::User),
            "g" | "group" => Ok(Self::Group),
            "o" | "others" => Ok(Self::Others),
            "a" | "all" => Ok(Self::All),
            _ => Err(Error::illegal_argument(format!(
                "invalid party '{s}' (expected user, group, others or all)"
            ))),
        }
    }
}

/// The access a party has to an item.
///
/// Read access takes precedence over execute: a party with `r-x` reports
/// `ReadOnly`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Permission {
    /// No bits set.
    NoAccess,
    /// Read without write.
    ReadOnly,
    /// Write without read.
    WriteOnly,
    /// Read and write.
    ReadAndWrite,
    /// Execute only.
    Execute,
    /// The parties of `Party::All` disagree. Never a valid target.
    Mixed,
}

impl Permission {
    fn from_bits(mode: u32, bits: [u32; 3]) -> Self {
        let can = |i: usize| mode & bits[i] != 0;
        match (can(READ), can(WRITE), can(EXECUTE)) {
            (true, true, _) => Self::ReadAndWrite,
            (true, false, _) => Self::ReadOnly,
            (false, true, _) => Self::WriteOnly,
            (false, false, true) => Self::Execute,
            (false, false, false) => Self::NoAccess,
        }
    }

    fn to_bits(self, bits: [u32; 3]) -> Result<u32> {
        match self {
            Self::NoAccess => Ok(0),
            Self::ReadOnly => Ok(bits[READ]),
            Self::WriteOnly => Ok(bits[WRITE]),
            Self::ReadAndWrite => Ok(bits[READ] | bits[WRITE]),
            Self::Execute => Ok(bits[EXECUTE]),
            Self::Mixed => Err(Error::illegal_argument(
                "mixed is not a permission that can be applied",
            )),
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NoAccess => "no-access",
            Self::ReadOnly => "read-only",
            Self::WriteOnly => "write-only",
            Self::ReadAndWrite => "read-and-write",
            Self::Execute => "execute",
            Self::Mixed => "mixed",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Permission {
    type Err = Error;

    /// Accepts the display names and the short forms `-`, `r`, `w`, `rw`
    /// and `x`. `mixed` is never accepted.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "-" | "none" | "no-access" => Ok(Self::NoAccess),
            "r" | "read-only" => Ok(Self::ReadOnly),
            "w" | "write-only" => Ok(Self::WriteOnly),
            "rw" | "read-and-write" => Ok(Self::ReadAndWrite),
            "x" | "execute" => Ok(Self::Execute),
            _ => Err(Error::illegal_argument(format!("invalid permission '{s}'"))),
        }
    }
}

fn mode_of(item: &Path) -> Result<u32> {
    require_exists(item)?;
    let metadata = fs::metadata(item).map_err(|e| io_error(item, e))?;
    Ok(metadata.permissions().mode() & 0o777)
}

/// The access `party` has to `item`.
///
/// For `Party::All` the common permission is returned, or `Mixed` when the
/// individual parties differ.
///
/// # Errors
///
/// Returns `PathNotFound` if `item` is missing.
pub fn check_perms(item: &Path, party: Party) -> Result<Permission> {
    let mode = mode_of(item)?;
    if party != Party::All {
        return Ok(Permission::from_bits(mode, party.bits()));
    }

    let perms: Vec<_> = Party::MEMBERS
        .iter()
        .map(|p| Permission::from_bits(mode, p.bits()))
        .collect();
    if perms.windows(2).all(|pair| pair[0] == pair[1]) {
        Ok(perms[0])
    } else {
        Ok(Permission::Mixed)
    }
}

/// The access of user, group and others to `item`, in that order.
///
/// # Errors
///
/// Returns `PathNotFound` if `item` is missing.
pub fn check_all_perms(item: &Path) -> Result<Vec<(Party, Permission)>> {
    let mode = mode_of(item)?;
    Ok(Party::MEMBERS
        .iter()
        .map(|p| (*p, Permission::from_bits(mode, p.bits())))
        .collect())
}

/// Give `party` exactly `permission` on `item`, leaving other parties alone.
///
/// With `recursive`, every entry below a directory is changed too. Symbolic
/// links inside the tree are skipped.
///
/// # Errors
///
/// Returns `IllegalArgument` for `Permission::Mixed`, `PathNotFound` if
/// `item` is missing, or `PermissionDenied` if the mode cannot be changed.
///
/// # Examples
///
/// ```no_run
/// use pathclerk::fs::{change_perms, check_perms, Party, Permission};
/// use std::path::Path;
///
/// let file = Path::new("/tmp/notes.txt");
/// change_perms(file, Permission::ReadOnly, Party::All, false).unwrap();
/// assert_eq!(check_perms(file, Party::All).unwrap(), Permission::ReadOnly);
/// ```
pub fn change_perms(item: &Path, permission: Permission, party: Party, recursive: bool) -> Result<()> {
    let new_bits = permission.to_bits(party.bits())?;
    let is_real_dir = item
        .symlink_metadata()
        .map_err(|e| io_error(item, e))?
        .is_dir();

    if recursive && is_real_dir {
        change_dir(item, new_bits, party.mask())
    } else {
        apply(item, new_bits, party.mask())
    }
}

/// Owner bits needed to list a directory and reach its entries.
const OWNER_SEARCH: u32 = USER_BITS[READ] | USER_BITS[EXECUTE];

fn apply(item: &Path, bits: u32, mask: u32) -> Result<()> {
    let current = mode_of(item)?;
    let mode = (current & !mask) | bits;
    log::debug!("chmod {:o} {}", mode, item.display());
    fs::set_permissions(item, fs::Permissions::from_mode(mode)).map_err(|e| io_error(item, e))
}

/// Change `dir` and everything below it.
///
/// The directory is changed before its entries while it stays searchable
/// by its owner, and after them when the change takes that away.
fn change_dir(dir: &Path, bits: u32, mask: u32) -> Result<()> {
    let current = mode_of(dir)?;
    let stays_searchable = ((current & !mask) | bits) & OWNER_SEARCH == OWNER_SEARCH;
    let was_searchable = current & OWNER_SEARCH == OWNER_SEARCH;

    if stays_searchable || !was_searchable {
        apply(dir, bits, mask)?;
        change_entries(dir, bits, mask)
    } else {
        change_entries(dir, bits, mask)?;
        apply(dir, bits, mask)
    }
}

fn change_entries(dir: &Path, bits: u32, mask: u32) -> Result<()> {
    for entry in fs::read_dir(dir).map_err(|e| io_error(dir, e))? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        if file_type.is_symlink() {
            continue;
        }
        if file_type.is_dir() {
            change_dir(&entry.path(), bits, mask)?;
        } else {
            apply(&entry.path(), bits, mask)?;
        }
    }
    Ok(())
}
