//! Trait definitions for external interactions
//!
//! These traits define the boundary between the sweep logic and the
//! filesystem. Implementations live in other crates.

use crate::Timestamp;
use std::path::{Path, PathBuf};

/// Filesystem primitives a sweep relies on
///
/// Implemented by the infrastructure layer (`autodelete-sweeper::LocalFileSystem`)
/// and by in-memory fakes in tests.
pub trait FileSystem {
    /// Error type for filesystem operations
    type Error;

    /// Resolve symlinks and relative segments.
    ///
    /// Returns `Ok(None)` when the path does not exist.
    fn canonicalize(&self, path: &Path) -> Result<Option<PathBuf>, Self::Error>;

    /// List the immediate files of a directory (non-recursive), in a stable order.
    ///
    /// Returns an empty list when `dir` is not a directory.
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, Self::Error>;

    /// Last modification time of a file
    fn modified_at(&self, path: &Path) -> Result<Timestamp, Self::Error>;

    /// Delete a single file
    fn remove_file(&mut self, path: &Path) -> Result<(), Self::Error>;
}
