//! Tracing and OpenTelemetry setup for the recordings CLI
//!
//! Usage:
//!   recordings --debug serve              # Debug logging to console
//!   recordings --otel serve               # Export traces to OTLP endpoint
//!   RUST_LOG=recordings_server=debug ...  # Fine-grained log control
//!
//! Environment variables:
//!   RUST_LOG                          # Log filter (default: info)
//!   OTEL_EXPORTER_OTLP_ENDPOINT       # OTLP endpoint (default: http://localhost:4317)
//!   OTEL_SERVICE_NAME                 # Service name (default: binary name)

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Reported service name and tracer name
#[cfg_attr(not(feature = "telemetry"), allow(dead_code))]
const SERVICE_NAME: &str = env!("CARGO_BIN_NAME");

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (used when RUST_LOG is not set)
    pub debug: bool,
    /// Enable OpenTelemetry OTLP export
    pub otel: bool,
}

fn env_filter(config: &TracingConfig) -> EnvFilter {
    let default = if config.debug { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Initialize tracing with console output only
pub fn init_tracing(config: &TracingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(config.debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

/// Batch-exporting tracer provider for `endpoint`
#[cfg(feature = "telemetry")]
fn otlp_provider(
    endpoint: &str,
    service_name: String,
) -> Result<opentelemetry_sdk::trace::TracerProvider> {
    use opentelemetry::KeyValue;
    use opentelemetry_otlp::WithExportConfig;

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()
        .map_err(|e| anyhow!("Failed to create OTLP exporter: {}", e))?;

    Ok(opentelemetry_sdk::trace::TracerProvider::builder()
        .with_batch_exporter(exporter, opentelemetry_sdk::runtime::Tokio)
        .with_resource(opentelemetry_sdk::Resource::new(vec![KeyValue::new(
            "service.name",
            service_name,
        )]))
        .build())
}

/// Initialize tracing with console output plus OpenTelemetry OTLP export
#[cfg(feature = "telemetry")]
pub fn init_tracing_with_otel(config: &TracingConfig) -> Result<()> {
    use opentelemetry::trace::TracerProvider as _;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
        .unwrap_or_else(|_| "http://localhost:4317".to_string());
    let service_name =
        std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| SERVICE_NAME.to_string());

    let provider = otlp_provider(&endpoint, service_name.clone())?;
    let telemetry_layer = tracing_opentelemetry::layer().with_tracer(provider.tracer(SERVICE_NAME));

    // Dropping the provider would stop export
    let _ = opentelemetry::global::set_tracer_provider(provider);

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(config.debug)
                .compact(),
        )
        .with(telemetry_layer)
        .try_init()
        .map_err(|err| anyhow!(err))?;

    tracing::info!(
        endpoint = %endpoint,
        service = %service_name,
        "OpenTelemetry tracing initialized"
    );

    Ok(())
}

/// Shutdown OpenTelemetry (flush pending spans)
#[cfg(feature = "telemetry")]
pub fn shutdown_otel() {
    opentelemetry::global::shutdown_tracer_provider();
}

/// No-op shutdown when telemetry is disabled
#[cfg(not(feature = "telemetry"))]
pub fn shutdown_otel() {}

/// Initialize tracing based on configuration
///
/// Chooses between console-only and OTEL based on config.otel flag
pub fn init(config: &TracingConfig) -> Result<()> {
    #[cfg(feature = "telemetry")]
    if config.otel {
        return init_tracing_with_otel(config);
    }

    #[cfg(not(feature = "telemetry"))]
    if config.otel {
        eprintln!("--otel ignored: built without the `telemetry` feature");
    }

    init_tracing(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_sets_default_filter() {
        // Only meaningful when RUST_LOG is unset
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let filter = env_filter(&TracingConfig { debug: true, otel: false });
        assert_eq!(filter.to_string(), "debug");
        let filter = env_filter(&TracingConfig::default());
        assert_eq!(filter.to_string(), "info");
    }

    #[test]
    fn service_name_is_binary_name() {
        assert_eq!(SERVICE_NAME, "recordings");
    }
}
