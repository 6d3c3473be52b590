//! Tracing setup for the exporter binary.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{ExportError, ExportResult};

/// Installs a stderr `fmt` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `log_level` applies to this crate only.
pub fn init_tracing(log_level: &str) -> ExportResult<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("eventExporter={}", log_level)));

    let formatting_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(formatting_layer)
        .try_init()
        .map_err(|e| ExportError::Logging(e.to_string()))?;

    tracing::debug!(log_level = log_level, "Logging initialized");
    Ok(())
}
