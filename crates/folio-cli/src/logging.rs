use tracing_subscriber::{EnvFilter, prelude::*};

use crate::types::LogLevel;

/// Install the stderr subscriber. `RUST_LOG`, when set, takes precedence
/// over `--log-level`.
pub(crate) fn init(level: LogLevel) {
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(format!("folio={level},folio_engine={level},folio_types={level}"))
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    let init_result = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();

    if let Err(err) = init_result {
        tracing::debug!(error = %err, "tracing already initialized");
    }
}
