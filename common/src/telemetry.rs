// Telemetry module for structured logging, metrics, and tracing

use anyhow::Result;
use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::{global, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    trace::{RandomIdGenerator, Sampler, TracerProvider},
    Resource,
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::ObservabilityConfig;

const SERVICE_NAME: &str = "taskboard-api";

/// Initialize structured logging
///
/// Sets up the tracing subscriber with:
/// - JSON or compact formatting, depending on configuration
/// - Log levels from `RUST_LOG`, falling back to the configured level
/// - Optional OpenTelemetry export when a tracing endpoint is configured
#[tracing::instrument(skip_all)]
pub fn init_logging(config: &ObservabilityConfig) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => log_filter(&config.log_level)?,
    };

    let fmt_layer = if config.json_logs {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_filter(env_filter)
            .boxed()
    } else {
        fmt::layer()
            .compact()
            .with_target(false)
            .with_filter(env_filter)
            .boxed()
    };

    let registry = tracing_subscriber::registry().with(fmt_layer);

    if let Some(endpoint) = config.tracing_endpoint.as_deref() {
        let tracer = init_tracer(endpoint)?;
        let telemetry_layer = tracing_opentelemetry::layer().with_tracer(tracer);
        registry
            .with(telemetry_layer)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {}", e))?;
    } else {
        registry
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {}", e))?;
    }

    tracing::info!(
        log_level = %config.log_level,
        json_logs = config.json_logs,
        tracing_endpoint = config.tracing_endpoint.as_deref(),
        "Structured logging initialized"
    );

    Ok(())
}

/// Parse the configured level, e.g. `info` or `info,sqlx=warn`
fn log_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level)
        .map_err(|e| anyhow::anyhow!("Invalid log level {:?}: {}", level, e))
}

/// Initialize OpenTelemetry tracer with OTLP exporter
#[tracing::instrument(skip_all)]
fn init_tracer(endpoint: &str) -> Result<opentelemetry_sdk::trace::Tracer> {
    use opentelemetry_sdk::runtime::Tokio;

    let exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(endpoint)
        .build_span_exporter()
        .map_err(|e| anyhow::anyhow!("Failed to build span exporter: {}", e))?;

    let tracer_provider = TracerProvider::builder()
        .with_batch_exporter(exporter, Tokio)
        .with_config(
            opentelemetry_sdk::trace::Config::default()
                .with_sampler(Sampler::AlwaysOn)
                .with_id_generator(RandomIdGenerator::default())
                .with_resource(Resource::new(vec![
                    KeyValue::new("service.name", SERVICE_NAME),
                    KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
                ])),
        )
        .build();

    global::set_tracer_provider(tracer_provider.clone());
    let tracer = tracer_provider.tracer(SERVICE_NAME);

    tracing::info!(endpoint = endpoint, "OpenTelemetry tracer initialized");
    Ok(tracer)
}

/// Shutdown OpenTelemetry tracer provider
///
/// This should be called on graceful shutdown to flush remaining spans
pub fn shutdown_tracer() {
    global::shutdown_tracer_provider();
}

/// Install the Prometheus recorder and describe the service metrics.
///
/// The returned handle renders the exposition text served on `/metrics`.
#[tracing::instrument(skip_all)]
pub fn init_metrics() -> Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install Prometheus recorder: {}", e))?;

    describe_counter!("records_created_total", "Total number of records created");
    describe_counter!("records_deleted_total", "Total number of records deleted");
    describe_counter!(
        "request_errors_total",
        "Total number of requests answered with an error"
    );

    tracing::info!("Prometheus metrics recorder installed");
    Ok(handle)
}

/// Record a created user or task
#[inline]
pub fn record_entity_created(entity: &'static str) {
    counter!("records_created_total", "entity" => entity).increment(1);
}

/// Record a deleted user or task
#[inline]
pub fn record_entity_deleted(entity: &'static str) {
    record_entities_deleted(entity, 1);
}

/// Record several deletions at once, e.g. tasks removed with their owner
#[inline]
pub fn record_entities_deleted(entity: &'static str, count: u64) {
    counter!("records_deleted_total", "entity" => entity).increment(count);
}

/// Record a request that ended in an error response
#[inline]
pub fn record_request_error(kind: &'static str) {
    counter!("request_errors_total", "kind" => kind).increment(1);
}
