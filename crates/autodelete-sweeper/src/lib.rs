//! Autodelete Sweeper
//!
//! Scheduled retention sweeps: delete the files in a folder whose
//! modification time is older than a configured threshold.
//!
//! # Overview
//!
//! - **Sweeper**: one sweep over one folder, returning a status and an ordered log
//! - **TaskParams**: loosely typed task parameters from the scheduler event
//! - **LocalFileSystem**: the `std::fs` implementation of the filesystem capability
//! - **SweepWorker**: runs every configured task on an interval and forwards logs to `tracing`
//!
//! ## Sweep outcomes
//!
//! | Status | Code | When |
//! |--------|------|------|
//! | **Ok** | 0 | Sweep completed, even if nothing qualified |
//! | **NoRun** | 3 | Empty folder path, folder outside the root, missing or empty folder |
//! | **Failure** | 5 | A deletion failed; the remaining files were not tried |
//!
//! # Usage
//!
//! ## One-time Sweep
//!
//! ```no_run
//! use autodelete_sweeper::{current_timestamp, LocalFileSystem, Sweeper, TaskParams};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let params = TaskParams::from_json(&serde_json::json!({
//!     "folder_path": "tmp",
//!     "older_than": 2,
//!     "time_unit": "days",
//! }))?;
//! let sweeper = Sweeper::new(params.into_config(Path::new("/var/www/site")));
//!
//! let report = sweeper.sweep(&mut LocalFileSystem::new(), current_timestamp())?;
//! for entry in &report.log {
//!     println!("[{}] {}", entry.severity, entry.message);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Background Worker
//!
//! ```no_run
//! use autodelete_sweeper::{LocalFileSystem, SweepWorker, WorkerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut worker = SweepWorker::new(WorkerConfig::default());
//!     worker.run(LocalFileSystem::new()).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! root_directory = "/var/www/site"
//! interval_minutes = 60
//! dry_run = false
//!
//! [[tasks]]
//! name = "tmp-uploads"
//! folder_path = "uploads/temp"
//! older_than = 2
//! time_unit = "days"
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod fs;
mod metrics;
mod params;
mod report;
mod sweeper;
mod worker;

pub use config::{TaskConfig, WorkerConfig};
pub use error::SweepError;
pub use fs::LocalFileSystem;
pub use metrics::SweepMetrics;
pub use params::TaskParams;
pub use report::SweepReport;
pub use sweeper::{current_timestamp, join_under_root, Sweeper};
pub use worker::{SweepWorker, TaskOutcome};
