//! Run command implementation.

use crate::cli::RunArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use autodelete_domain::SweepStatus;
use autodelete_sweeper::{LocalFileSystem, SweepWorker, TaskOutcome};

/// Execute the run command.
///
/// Returns the worst status across the tasks that ran. A sweep that ended in
/// an unexpected error counts as a failure.
pub async fn execute_run(args: RunArgs, config: Config, formatter: &Formatter) -> Result<SweepStatus> {
    let mut worker_config = config.worker;
    worker_config.dry_run |= args.dry_run;

    let mut fs = LocalFileSystem::new();
    let mut worker = SweepWorker::new(worker_config);

    let outcomes = match args.task {
        Some(name) => {
            let task = worker
                .config()
                .task(&name)
                .cloned()
                .ok_or_else(|| CliError::InvalidInput(format!("No task named '{}'", name)))?;
            let result = worker.run_task(&mut fs, &task);
            vec![TaskOutcome { task: name, result }]
        }
        None => worker.run_once(&mut fs),
    };

    if outcomes.is_empty() {
        println!("{}", formatter.warning("No tasks configured"));
        return Ok(SweepStatus::NoRun);
    }

    let mut statuses = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        match outcome.result {
            Ok(report) => {
                let output = formatter.format_report(&outcome.task, &report)?;
                if !output.is_empty() {
                    println!("{}", output);
                }
                statuses.push(report.status);
            }
            Err(e) => {
                eprintln!("{}", formatter.error(&format!("{}: {}", outcome.task, e)));
                statuses.push(SweepStatus::Failure);
            }
        }
    }

    Ok(worst_status(&statuses))
}

/// Worst of several statuses; `Ok` when there are none.
pub fn worst_status(statuses: &[SweepStatus]) -> SweepStatus {
    statuses
        .iter()
        .copied()
        .max_by_key(|s| s.severity_rank())
        .unwrap_or(SweepStatus::Ok)
}
