//! Core retention sweep: resolve the folder, compute the threshold, delete old files

use crate::{SweepError, SweepReport};
use autodelete_domain::traits::FileSystem;
use autodelete_domain::{FileEntry, LogEntry, SweepConfig, SweepStatus, Timestamp};
use std::path::{Component, Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Current timestamp in seconds since Unix epoch
pub fn current_timestamp() -> Timestamp {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Join a configured folder under the root.
///
/// Duplicate and trailing separators disappear, and a leading separator
/// does not make the folder absolute. `..` segments are kept for
/// canonicalization to resolve.
pub fn join_under_root(root: &Path, folder: &str) -> PathBuf {
    let mut joined = root.to_path_buf();
    for component in Path::new(folder.trim()).components() {
        match component {
            Component::Normal(part) => joined.push(part),
            Component::ParentDir => joined.push(".."),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    joined
}

/// Sweeper deleting files older than a threshold from one folder
///
/// The sweeper never logs or touches the disk on its own: filesystem access
/// goes through the [`FileSystem`] passed to [`Sweeper::sweep`], and the log is
/// returned in the [`SweepReport`].
///
/// # Examples
///
/// ```no_run
/// use autodelete_domain::{SweepConfig, TimeUnit};
/// use autodelete_sweeper::{current_timestamp, LocalFileSystem, Sweeper};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = SweepConfig::new("/var/www/site", "tmp", 2, TimeUnit::Days);
/// let sweeper = Sweeper::new(config);
///
/// let report = sweeper.sweep(&mut LocalFileSystem::new(), current_timestamp())?;
/// println!("{}: {} deleted", report.status, report.deleted_count());
/// # Ok(())
/// # }
/// ```
pub struct Sweeper {
    config: SweepConfig,
}

impl Sweeper {
    /// Create a new sweeper for the given configuration
    pub fn new(config: SweepConfig) -> Self {
        Self { config }
    }

    /// Get the configuration this sweeper runs with
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Run one sweep at time `now`.
    ///
    /// 1. Rejects an empty folder path
    /// 2. Resolves the folder under the root and checks containment on canonical paths
    /// 3. Lists the folder's immediate files
    /// 4. Deletes every file whose age exceeds the threshold, stopping at the first failure
    ///
    /// Listing and stat errors are returned as `Err`; every other outcome is a report.
    pub fn sweep<F>(&self, fs: &mut F, now: Timestamp) -> Result<SweepReport, SweepError>
    where
        F: FileSystem,
        F::Error: std::fmt::Display,
    {
        let mut report = SweepReport::new(self.config.dry_run);

        let folder = self.config.target_folder.trim();
        if folder.is_empty() {
            report.push(LogEntry::warning("Folder path is empty"));
            return Ok(report.finish(SweepStatus::NoRun));
        }

        let root = &self.config.root_directory;
        let canonical_root = match resolve(fs, root)? {
            Some(path) => path,
            None => {
                report.push(LogEntry::warning(format!(
                    "Root directory {} does not exist",
                    root.display()
                )));
                return Ok(report.finish(SweepStatus::NoRun));
            }
        };

        let joined = join_under_root(root, folder);
        let resolved = match resolve(fs, &joined)? {
            Some(path) => path,
            None => {
                report.push(LogEntry::warning(format!(
                    "No files found in {}",
                    joined.display()
                )));
                return Ok(report.finish(SweepStatus::NoRun));
            }
        };

        // Path::starts_with compares whole components, so /app2 is not under /app
        if !resolved.starts_with(&canonical_root) {
            report.push(LogEntry::warning(
                "Folder path is not within the root directory",
            ));
            return Ok(report.finish(SweepStatus::NoRun));
        }

        let threshold = self.config.threshold();
        report.threshold = Some(threshold);
        report.folder = Some(resolved.clone());

        report.push(LogEntry::info(format!(
            "Processing files in {}",
            resolved.display()
        )));

        let files = fs.list_files(&resolved).map_err(|e| SweepError::Listing {
            path: resolved.clone(),
            message: e.to_string(),
        })?;

        if files.is_empty() {
            report.push(LogEntry::warning(format!(
                "No files found in {}",
                resolved.display()
            )));
            return Ok(report.finish(SweepStatus::NoRun));
        }

        for path in files {
            let modified_at = fs.modified_at(&path).map_err(|e| SweepError::Stat {
                path: path.clone(),
                message: e.to_string(),
            })?;
            let entry = FileEntry::new(path, modified_at);

            if !threshold.is_exceeded_by(entry.age(now)) {
                report.kept += 1;
                continue;
            }

            if self.config.dry_run {
                report.push(LogEntry::info(format!(
                    "Would delete file {}",
                    entry.path.display()
                )));
                report.deleted.push(entry.path);
                continue;
            }

            match fs.remove_file(&entry.path) {
                Ok(()) => {
                    report.push(LogEntry::info(format!(
                        "Deleted file {}",
                        entry.path.display()
                    )));
                    report.deleted.push(entry.path);
                }
                Err(e) => {
                    report.push(LogEntry::error(format!(
                        "Failed to delete file {}: {}",
                        entry.path.display(),
                        e
                    )));
                    return Ok(report.finish(SweepStatus::Failure));
                }
            }
        }

        report.push(LogEntry::info(format!(
            "Completed processing files in {}",
            resolved.display()
        )));

        Ok(report.finish(SweepStatus::Ok))
    }
}

fn resolve<F>(fs: &F, path: &Path) -> Result<Option<PathBuf>, SweepError>
where
    F: FileSystem,
    F::Error: std::fmt::Display,
{
    fs.canonicalize(path).map_err(|e| SweepError::Resolve {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use autodelete_domain::{Severity, TimeUnit};
    use std::cell::Cell;
    use std::collections::{BTreeMap, HashSet};

    const NOW: Timestamp = 1_700_000_000;
    const DAY: u64 = 86_400;

    // In-memory filesystem: canonicalize resolves `..` lexically
    struct MockFs {
        dirs: HashSet<PathBuf>,
        files: BTreeMap<PathBuf, Timestamp>,
        failing: HashSet<PathBuf>,
        removed: Vec<PathBuf>,
        calls: Cell<usize>,
    }

    impl MockFs {
        fn new() -> Self {
            let mut dirs = HashSet::new();
            dirs.insert(PathBuf::from("/"));
            Self {
                dirs,
                files: BTreeMap::new(),
                failing: HashSet::new(),
                removed: Vec::new(),
                calls: Cell::new(0),
            }
        }

        fn dir(mut self, path: &str) -> Self {
            let mut current = PathBuf::new();
            for component in Path::new(path).components() {
                current.push(component);
                self.dirs.insert(current.clone());
            }
            self
        }

        fn file(mut self, path: &str, modified_at: Timestamp) -> Self {
            self.files.insert(PathBuf::from(path), modified_at);
            self
        }

        fn failing(mut self, path: &str) -> Self {
            self.failing.insert(PathBuf::from(path));
            self
        }

        fn tick(&self) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    impl FileSystem for MockFs {
        type Error = String;

        fn canonicalize(&self, path: &Path) -> Result<Option<PathBuf>, Self::Error> {
            self.tick();
            let mut normalized = PathBuf::new();
            for component in path.components() {
                match component {
                    Component::ParentDir => {
                        normalized.pop();
                    }
                    Component::CurDir => {}
                    other => normalized.push(other),
                }
            }
            let exists = self.dirs.contains(&normalized) || self.files.contains_key(&normalized);
            Ok(exists.then_some(normalized))
        }

        fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, Self::Error> {
            self.tick();
            Ok(self
                .files
                .keys()
                .filter(|p| p.parent() == Some(dir))
                .cloned()
                .collect())
        }

        fn modified_at(&self, path: &Path) -> Result<Timestamp, Self::Error> {
            self.tick();
            self.files
                .get(path)
                .copied()
                .ok_or_else(|| format!("no such file: {}", path.display()))
        }

        fn remove_file(&mut self, path: &Path) -> Result<(), Self::Error> {
            self.tick();
            if self.failing.contains(path) {
                return Err("permission denied".to_string());
            }
            self.files.remove(path);
            self.removed.push(path.to_path_buf());
            Ok(())
        }
    }

    fn sweeper(folder: &str, value: u64, unit: TimeUnit) -> Sweeper {
        Sweeper::new(SweepConfig::new("/app", folder, value, unit))
    }

    fn messages(report: &SweepReport) -> Vec<String> {
        report.log.iter().map(|e| e.message.clone()).collect()
    }

    #[test]
    fn test_normalizes_folder_and_deletes_old_files() {
        let mut fs = MockFs::new()
            .dir("/app/uploads/temp")
            .file("/app/uploads/temp/a.log", NOW - 3 * DAY)
            .file("/app/uploads/temp/b.log", NOW - DAY);

        let report = sweeper("/uploads//temp/", 2, TimeUnit::Days)
            .sweep(&mut fs, NOW)
            .unwrap();

        assert_eq!(report.status, SweepStatus::Ok);
        assert_eq!(report.folder, Some(PathBuf::from("/app/uploads/temp")));
        assert_eq!(report.threshold.map(|t| t.as_secs()), Some(172_800));
        assert_eq!(report.deleted, vec![PathBuf::from("/app/uploads/temp/a.log")]);
        assert_eq!(report.kept, 1);
        assert!(fs.files.contains_key(Path::new("/app/uploads/temp/b.log")));
        assert_eq!(
            messages(&report),
            vec![
                "Processing files in /app/uploads/temp".to_string(),
                "Deleted file /app/uploads/temp/a.log".to_string(),
                "Completed processing files in /app/uploads/temp".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_folder_path_touches_nothing() {
        let mut fs = MockFs::new().dir("/app");

        let report = sweeper("   ", 1, TimeUnit::Days).sweep(&mut fs, NOW).unwrap();

        assert_eq!(report.status, SweepStatus::NoRun);
        assert_eq!(fs.calls.get(), 0);
        assert_eq!(report.log[0].severity, Severity::Warning);
        assert_eq!(report.log[0].message, "Folder path is empty");
    }

    #[test]
    fn test_traversal_outside_root_is_rejected() {
        let mut fs = MockFs::new()
            .dir("/app")
            .dir("/etc")
            .file("/etc/passwd", 0);

        let report = sweeper("../../../etc", 0, TimeUnit::Minutes)
            .sweep(&mut fs, NOW)
            .unwrap();

        assert_eq!(report.status, SweepStatus::NoRun);
        assert!(fs.removed.is_empty());
        assert_eq!(
            messages(&report),
            vec!["Folder path is not within the root directory".to_string()]
        );
    }

    #[test]
    fn test_sibling_with_shared_prefix_is_outside_root() {
        let mut fs = MockFs::new()
            .dir("/app")
            .dir("/app2")
            .file("/app2/x.log", 0);

        let report = sweeper("../app2", 0, TimeUnit::Minutes)
            .sweep(&mut fs, NOW)
            .unwrap();

        assert_eq!(report.status, SweepStatus::NoRun);
        assert!(fs.removed.is_empty());
    }

    #[test]
    fn test_missing_folder_is_no_run() {
        let mut fs = MockFs::new().dir("/app");

        let report = sweeper("uploads", 1, TimeUnit::Days).sweep(&mut fs, NOW).unwrap();

        assert_eq!(report.status, SweepStatus::NoRun);
        assert_eq!(messages(&report), vec!["No files found in /app/uploads".to_string()]);
    }

    #[test]
    fn test_empty_folder_is_no_run() {
        let mut fs = MockFs::new().dir("/app/uploads");

        let report = sweeper("uploads", 1, TimeUnit::Days).sweep(&mut fs, NOW).unwrap();

        assert_eq!(report.status, SweepStatus::NoRun);
        let warnings: Vec<_> = report.entries(Severity::Warning).collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].message, "No files found in /app/uploads");
    }

    #[test]
    fn test_missing_root_is_no_run() {
        let mut fs = MockFs::new();

        let report = sweeper("uploads", 1, TimeUnit::Days).sweep(&mut fs, NOW).unwrap();

        assert_eq!(report.status, SweepStatus::NoRun);
    }

    #[test]
    fn test_zero_threshold_deletes_everything_with_past_mtime() {
        let mut fs = MockFs::new()
            .dir("/app/cache")
            .file("/app/cache/one", NOW - 1)
            .file("/app/cache/two", NOW - 500);

        let report = sweeper("cache", 0, TimeUnit::Minutes).sweep(&mut fs, NOW).unwrap();

        assert_eq!(report.status, SweepStatus::Ok);
        assert_eq!(report.deleted_count(), 2);
        assert!(fs.files.is_empty());
    }

    #[test]
    fn test_age_equal_to_threshold_is_kept() {
        let mut fs = MockFs::new()
            .dir("/app/cache")
            .file("/app/cache/edge", NOW - 3_600)
            .file("/app/cache/over", NOW - 3_601);

        let report = sweeper("cache", 1, TimeUnit::Hours).sweep(&mut fs, NOW).unwrap();

        assert_eq!(report.deleted, vec![PathBuf::from("/app/cache/over")]);
        assert!(fs.files.contains_key(Path::new("/app/cache/edge")));
    }

    #[test]
    fn test_unknown_unit_is_days() {
        let mut fs = MockFs::new()
            .dir("/app/cache")
            .file("/app/cache/recent", NOW - 2 * 3_600)
            .file("/app/cache/old", NOW - 2 * DAY);

        let config = SweepConfig::new("/app", "cache", 1, TimeUnit::from_param("weeks"));
        let report = Sweeper::new(config).sweep(&mut fs, NOW).unwrap();

        assert_eq!(report.threshold.map(|t| t.as_secs()), Some(DAY));
        assert_eq!(report.deleted, vec![PathBuf::from("/app/cache/old")]);
    }

    #[test]
    fn test_no_qualifying_files_is_ok() {
        let mut fs = MockFs::new()
            .dir("/app/cache")
            .file("/app/cache/fresh", NOW - 10);

        let report = sweeper("cache", 5, TimeUnit::Minutes).sweep(&mut fs, NOW).unwrap();

        assert_eq!(report.status, SweepStatus::Ok);
        assert_eq!(report.deleted_count(), 0);
        assert_eq!(report.kept, 1);
    }

    #[test]
    fn test_deletion_failure_aborts_sweep() {
        let mut fs = MockFs::new()
            .dir("/app/cache")
            .file("/app/cache/a", 0)
            .file("/app/cache/b", 0)
            .file("/app/cache/c", 0)
            .failing("/app/cache/b");

        let report = sweeper("cache", 1, TimeUnit::Days).sweep(&mut fs, NOW).unwrap();

        assert_eq!(report.status, SweepStatus::Failure);
        assert_eq!(fs.removed, vec![PathBuf::from("/app/cache/a")]);
        assert!(fs.files.contains_key(Path::new("/app/cache/b")));
        assert!(fs.files.contains_key(Path::new("/app/cache/c")));

        let last = report.log.last().unwrap();
        assert_eq!(last.severity, Severity::Error);
        assert_eq!(
            last.message,
            "Failed to delete file /app/cache/b: permission denied"
        );
        assert!(!messages(&report).iter().any(|m| m.starts_with("Completed")));
    }

    #[test]
    fn test_dry_run_deletes_nothing() {
        let mut fs = MockFs::new()
            .dir("/app/cache")
            .file("/app/cache/old", 0);

        let config = SweepConfig::new("/app", "cache", 1, TimeUnit::Days).with_dry_run(true);
        let report = Sweeper::new(config).sweep(&mut fs, NOW).unwrap();

        assert_eq!(report.status, SweepStatus::Ok);
        assert!(report.dry_run);
        assert_eq!(report.deleted, vec![PathBuf::from("/app/cache/old")]);
        assert!(fs.removed.is_empty());
        assert!(messages(&report).contains(&"Would delete file /app/cache/old".to_string()));
    }

    #[test]
    fn test_stat_error_propagates() {
        struct BrokenStat(MockFs);

        impl FileSystem for BrokenStat {
            type Error = String;
            fn canonicalize(&self, path: &Path) -> Result<Option<PathBuf>, String> {
                self.0.canonicalize(path)
            }
            fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, String> {
                self.0.list_files(dir)
            }
            fn modified_at(&self, _path: &Path) -> Result<Timestamp, String> {
                Err("stat failed".to_string())
            }
            fn remove_file(&mut self, path: &Path) -> Result<(), String> {
                self.0.remove_file(path)
            }
        }

        let mut fs = BrokenStat(MockFs::new().dir("/app/cache").file("/app/cache/a", 0));
        let result = sweeper("cache", 1, TimeUnit::Days).sweep(&mut fs, NOW);

        assert!(matches!(result, Err(SweepError::Stat { .. })));
    }

    #[test]
    fn test_join_under_root() {
        let root = Path::new("/app");
        assert_eq!(join_under_root(root, "/uploads//temp/"), PathBuf::from("/app/uploads/temp"));
        assert_eq!(join_under_root(root, " logs "), PathBuf::from("/app/logs"));
        assert_eq!(join_under_root(root, "./a/./b"), PathBuf::from("/app/a/b"));
        assert_eq!(join_under_root(root, "../etc"), PathBuf::from("/app/../etc"));
    }
}
