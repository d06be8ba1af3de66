//! Filesystem probes.
//!
//! _Requires Cargo feature `std`._

use std::{
    io::{self, ErrorKind},
    path::Path,
};

use thiserror::Error;

/// Errors occurring while probing the filesystem.
#[derive(Debug, Error)]
pub enum FileError {
    /// The filesystem refused to say whether the file exists.
    #[error("Cannot know if the file exists: {0}")]
    Unknowable(#[from] io::Error),
}

/// Whether a file exists at `path`.
///
/// Only a "not found" answer from the filesystem is taken to mean the file is
/// absent. Any other failure (such as a permission error on a parent
/// directory) leaves the question open, and is returned as an error.
pub fn file_exists(path: impl AsRef<Path>) -> Result<bool, FileError> {
    match path.as_ref().metadata() {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(err) => Err(FileError::Unknowable(err)),
    }
}
