use std::{
    io,
    path::{Path, PathBuf},
    result,
};

use thiserror::Error;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for filemap operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] io::Error),

    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Access denied: {}", path.display())]
    AccessDenied { path: PathBuf },

    #[error("Cannot map {}: {source}", path.display())]
    MappingFailed { path: PathBuf, source: io::Error },

    #[error("File too large to map: {} ({len} bytes)", path.display())]
    TooLarge { path: PathBuf, len: u64 },
}

impl Error {
    /// Classifies a failed open/create by its `io::ErrorKind`.
    pub(crate) fn from_open(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound {
                path: path.to_owned(),
            },
            io::ErrorKind::PermissionDenied => Self::AccessDenied {
                path: path.to_owned(),
            },
            _ => Self::IO(source),
        }
    }
}
