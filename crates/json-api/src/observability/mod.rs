//! Logs, traces and HTTP metrics for the gate server.
//!
//! `Observability::init` installs the subscriber before the app context is
//! built, so database and matcher start-up failures are logged.

use thiserror::Error;

mod init;
mod logging;
mod metrics;
mod otel;
mod request;
mod settings;

pub(crate) use init::Observability;
pub(crate) use metrics::metrics_handler;
pub(crate) use request::request_logging;

/// Start-up failures that leave the server without a log sink.
#[derive(Debug, Error)]
pub(crate) enum ObservabilityError {
    /// The OTLP span exporter could not be built from the configured endpoint.
    #[error("failed to build OTLP span exporter: {0}")]
    OtlpExporter(#[from] opentelemetry_otlp::ExporterBuildError),

    /// A global subscriber was already installed.
    #[error("tracing subscriber already installed: {0}")]
    TracingSubscriber(#[from] tracing_subscriber::util::TryInitError),
}
