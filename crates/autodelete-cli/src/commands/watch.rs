//! Watch command implementation.

use crate::cli::WatchArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use autodelete_sweeper::{LocalFileSystem, SweepWorker};

/// Run the scheduled worker until Ctrl+C, or for a fixed number of cycles.
pub async fn execute_watch(args: WatchArgs, config: Config, formatter: &Formatter) -> Result<()> {
    let mut worker = SweepWorker::new(config.worker);

    match args.cycles {
        Some(cycles) => worker.run_cycles(LocalFileSystem::new(), cycles).await?,
        None => worker.run(LocalFileSystem::new()).await?,
    }

    let summary = formatter.format_metrics(worker.metrics());
    if !summary.is_empty() {
        println!("{}", summary);
    }

    Ok(())
}
