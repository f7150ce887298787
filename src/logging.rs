/// Diagnostic logging setup.
use tracing_subscriber::EnvFilter;

/// Install a stderr `tracing` subscriber.
///
/// `verbose` turns on debug events for this crate. Otherwise the filter comes
/// from `RUST_LOG`, falling back to warnings only, so stdout stays reserved
/// for the report.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("count_tokens=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
