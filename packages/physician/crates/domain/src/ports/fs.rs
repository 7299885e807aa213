use crate::error::ProbeError;
use std::path::Path;

/// Read-only filesystem lookups. Symlinks are not followed: a dangling
/// link is an entry like any other.
pub trait PathProbe: Send + Sync {
    /// Whether any entry is present at `path`, dangling links included.
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` names a directory. Fails when the entry cannot
    /// be stat'd, including when it does not exist.
    fn is_directory(&self, path: &Path) -> Result<bool, ProbeError>;

    fn read_to_string(&self, path: &Path) -> Result<String, ProbeError>;
}
