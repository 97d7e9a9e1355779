//! Tracing subscriber setup.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber. `--verbose` forces DEBUG, otherwise
/// `RUST_LOG` applies and WARN is the fallback.
pub fn init(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose, rust_log.as_deref()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new(Level::DEBUG.to_string());
    }
    EnvFilter::builder()
        .with_default_directive(Level::WARN.into())
        .parse_lossy(rust_log.unwrap_or_default())
}
