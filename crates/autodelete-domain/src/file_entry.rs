//! Files seen during a sweep

use std::path::PathBuf;

/// Seconds since the Unix epoch
pub type Timestamp = u64;

/// A file listed in the target folder, read fresh on every sweep
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Absolute path of the file
    pub path: PathBuf,

    /// Last modification time
    pub modified_at: Timestamp,
}

impl FileEntry {
    /// Create a new entry
    pub fn new(path: impl Into<PathBuf>, modified_at: Timestamp) -> Self {
        Self {
            path: path.into(),
            modified_at,
        }
    }

    /// Age of the file at `now`, in seconds.
    ///
    /// A modification time in the future yields an age of zero.
    pub fn age(&self, now: Timestamp) -> u64 {
        now.saturating_sub(self.modified_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age() {
        let entry = FileEntry::new("/app/uploads/a.log", 1_000);
        assert_eq!(entry.age(4_600), 3_600);
        assert_eq!(entry.age(1_000), 0);
    }

    #[test]
    fn test_future_mtime_has_zero_age() {
        let entry = FileEntry::new("/app/uploads/a.log", 5_000);
        assert_eq!(entry.age(1_000), 0);
    }
}
