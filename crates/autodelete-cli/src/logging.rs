//! Tracing setup for the `autodelete` binary.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
///
/// One-shot commands print their own reports, so they only log warnings by
/// default; `watch` has no other output and logs at info.
pub fn default_filter(verbose: u8, long_running: bool) -> String {
    let level = match (verbose, long_running) {
        (0, false) => "warn",
        (0, true) | (1, _) => "info",
        _ => "debug",
    };
    format!(
        "autodelete_cli={level},autodelete_sweeper={level}",
        level = level
    )
}

/// Initialize tracing to stderr.
pub fn init_logging(verbose: u8, long_running: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, long_running)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_levels() {
        assert!(default_filter(0, false).contains("autodelete_sweeper=warn"));
        assert!(default_filter(0, true).contains("autodelete_sweeper=info"));
        assert!(default_filter(1, false).contains("autodelete_cli=info"));
        assert!(default_filter(2, true).contains("autodelete_sweeper=debug"));
    }
}
