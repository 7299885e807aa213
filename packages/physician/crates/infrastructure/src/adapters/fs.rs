use domain::error::ProbeError;
use domain::ports::fs::PathProbe;
use std::path::Path;

/// Host-filesystem probe. Uses `symlink_metadata` so a dangling link
/// still counts as present.
pub struct SystemPathProbe;

impl SystemPathProbe {
    pub fn new() -> Self {
        Self
    }
}

impl PathProbe for SystemPathProbe {
    fn exists(&self, path: &Path) -> bool {
        std::fs::symlink_metadata(path).is_ok()
    }

    fn is_directory(&self, path: &Path) -> Result<bool, ProbeError> {
        let meta = std::fs::symlink_metadata(path).map_err(|source| ProbeError::Stat {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(meta.file_type().is_dir())
    }

    fn read_to_string(&self, path: &Path) -> Result<String, ProbeError> {
        std::fs::read_to_string(path).map_err(|source| ProbeError::Read {
            path: path.to_path_buf(),
            source,
        })
    }
}
