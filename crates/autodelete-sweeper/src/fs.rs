//! Filesystem capability backed by `std::fs`

use autodelete_domain::traits::FileSystem;
use autodelete_domain::Timestamp;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

/// Names the folder listing never returns
const EXCLUDED_NAMES: [&str; 4] = [".svn", "CVS", ".DS_Store", "__MACOSX"];

/// Local disk implementation of [`FileSystem`]
///
/// Listing skips hidden files (leading `.`), editor backups (trailing `~`)
/// and VCS/OS metadata entries, the same defaults the CMS folder listing applies.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    /// Create a new local filesystem handle
    pub fn new() -> Self {
        Self
    }

    fn is_excluded(name: &str) -> bool {
        name.starts_with('.') || name.ends_with('~') || EXCLUDED_NAMES.contains(&name)
    }
}

impl FileSystem for LocalFileSystem {
    type Error = io::Error;

    fn canonicalize(&self, path: &Path) -> Result<Option<PathBuf>, Self::Error> {
        match fs::canonicalize(path) {
            Ok(resolved) => Ok(Some(resolved)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, Self::Error> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name();
            if Self::is_excluded(&name.to_string_lossy()) {
                continue;
            }
            // Follows symlinks, so a link to a regular file is listed
            let path = entry.path();
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn modified_at(&self, path: &Path) -> Result<Timestamp, Self::Error> {
        let modified = fs::metadata(path)?.modified()?;
        Ok(modified
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0))
    }

    fn remove_file(&mut self, path: &Path) -> Result<(), Self::Error> {
        fs::remove_file(path)
    }
}
