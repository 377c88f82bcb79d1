//! Error types for nexuscorelib

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during file operations.
///
/// Formatting and platform detection never fail; only the `files` module
/// returns these.
#[derive(Error, Debug)]
pub enum NexusError {
    /// Path does not exist
    #[error("path does not exist: {0}")]
    NotFound(PathBuf),

    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File content is not valid UTF-8
    #[error("file '{path}' is not valid UTF-8: {source}")]
    InvalidUtf8 {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },

    /// Failed to create or write a file
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create a directory chain
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Path exists but could not be removed
    #[error("failed to delete '{path}': {source}")]
    Delete {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl NexusError {
    /// Wrap a read failure, promoting `ErrorKind::NotFound` to [`NexusError::NotFound`].
    pub(crate) fn read(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            NexusError::NotFound(path.to_path_buf())
        } else {
            NexusError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// True when the error means the path was missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, NexusError::NotFound(_))
    }

    /// The path the failed operation was working on.
    pub fn path(&self) -> &Path {
        match self {
            NexusError::NotFound(path) => path,
            NexusError::FileRead { path, .. }
            | NexusError::InvalidUtf8 { path, .. }
            | NexusError::FileWrite { path, .. }
            | NexusError::CreateDir { path, .. }
            | NexusError::Delete { path, .. } => path,
        }
    }
}
