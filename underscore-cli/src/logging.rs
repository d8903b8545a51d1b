use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Log to stderr. `RUST_LOG` takes precedence over the flags.
pub fn init(verbose: bool, debug: bool) {
    let log_level = if debug {
        Level::DEBUG
    } else if verbose {
        Level::INFO
    } else {
        Level::WARN
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_str().to_lowercase()));

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();
}
