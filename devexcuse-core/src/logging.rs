use tracing_subscriber::{EnvFilter, fmt};

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

/// JSON events on stdout, filtered by `RUST_LOG`.
///
/// Event fields are flattened into the top-level object so each line can be
/// fed straight into a log pipeline.
pub fn init_normal_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(filter)
        .json()
        .flatten_event(true)
        .init();
}

pub fn init_logging() {
    // tokio-console installs its own subscriber; only one may be global.
    if std::env::var("TOKIO_CONSOLE").is_ok() {
        init_console_logging();
    } else {
        init_normal_logging();
    }
}

fn init_console_logging() {
    console_subscriber::init();
}
