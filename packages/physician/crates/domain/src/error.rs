use std::path::PathBuf;
use thiserror::Error;

/// Failure running an external command.
#[derive(Error, Debug)]
pub enum ExecError {
    #[error("Failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with a non-zero status: {stderr}")]
    Failed { command: String, stderr: String },
}

/// Failure inspecting the filesystem.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Could not stat '{path}': {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a fix did not complete. A declined confirmation is its own kind
/// so callers can tell it apart from a repair that broke.
#[derive(Error, Debug)]
pub enum FixError {
    #[error("Fix skipped at the user's request")]
    Skipped,

    #[error(transparent)]
    Exec(#[from] ExecError),
}

impl FixError {
    pub fn is_skipped(&self) -> bool {
        matches!(self, FixError::Skipped)
    }
}
