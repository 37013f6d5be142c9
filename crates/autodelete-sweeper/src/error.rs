//! Error types for sweep operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors that escape a sweep
///
/// Expected outcomes (empty config, folder outside the root, no files,
/// a failed deletion) are reported through [`crate::SweepReport`] instead.
#[derive(Error, Debug)]
pub enum SweepError {
    /// A path could not be resolved for a reason other than not existing
    #[error("Failed to resolve {path}: {message}")]
    Resolve {
        /// Path being resolved
        path: PathBuf,
        /// Underlying error
        message: String,
    },

    /// The target folder could not be listed
    #[error("Failed to list {path}: {message}")]
    Listing {
        /// Folder being listed
        path: PathBuf,
        /// Underlying error
        message: String,
    },

    /// A file's modification time could not be read
    #[error("Failed to read modification time of {path}: {message}")]
    Stat {
        /// File being inspected
        path: PathBuf,
        /// Underlying error
        message: String,
    },

    /// Configuration or task parameter error
    #[error("Configuration error: {0}")]
    Config(String),
}
