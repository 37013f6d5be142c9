//! Command implementations.

mod config;
mod run;
mod sweep;
mod watch;

pub use config::execute_config;
pub use run::{execute_run, worst_status};
pub use sweep::execute_sweep;
pub use watch::execute_watch;
