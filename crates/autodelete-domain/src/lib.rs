//! Autodelete Domain Layer
//!
//! Core types for the age-based file retention sweep. This crate performs no
//! I/O: filesystem access is expressed through the [`traits::FileSystem`]
//! capability and implemented by infrastructure crates.
//!
//! ## Key Concepts
//!
//! - **SweepConfig**: root boundary, target folder, and a (value, unit) age threshold
//! - **Threshold**: maximum allowed file age in seconds; files strictly older are deleted
//! - **TimeUnit**: minutes, hours or days (anything unrecognized is days)
//! - **SweepStatus**: coarse outcome reported to the scheduler (ok / no-run / failure)
//! - **LogEntry**: one (severity, message) line of a sweep's task-run log

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod file_entry;
pub mod report;
pub mod run_id;
pub mod time_unit;
pub mod traits;

// Re-exports for convenience
pub use config::SweepConfig;
pub use file_entry::{FileEntry, Timestamp};
pub use report::{LogEntry, Severity, SweepStatus};
pub use run_id::RunId;
pub use time_unit::{Threshold, TimeUnit};
pub use traits::FileSystem;
