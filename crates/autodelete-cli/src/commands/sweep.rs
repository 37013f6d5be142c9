//! Sweep command implementation.

use crate::cli::SweepArgs;
use crate::error::Result;
use crate::output::Formatter;
use autodelete_domain::{SweepConfig, SweepStatus};
use autodelete_sweeper::{current_timestamp, LocalFileSystem, Sweeper};

/// Execute an ad-hoc sweep of one folder.
pub async fn execute_sweep(args: SweepArgs, formatter: &Formatter) -> Result<SweepStatus> {
    let config = SweepConfig::new(args.root, args.folder, args.older_than, args.unit.into())
        .with_dry_run(args.dry_run);

    let report = Sweeper::new(config).sweep(&mut LocalFileSystem::new(), current_timestamp())?;
    report.emit("sweep");

    let output = formatter.format_report("sweep", &report)?;
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(report.status)
}
