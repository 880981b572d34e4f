//! Tracing initialization and subscriber setup.

use super::exporter;
use crate::infrastructure::paths::get_data_dir;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use std::path::{Path, PathBuf};
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "openlib";

/// File name of the trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "openlib-otlp.json";

/// Level used when neither `RUST_LOG` nor `trace_level` is set.
const DEFAULT_LEVEL: &str = "info";

/// Initializes the tracing subscriber with file-based OTLP export.
///
/// Level resolution: `RUST_LOG`, then `config.trace_level`, then `"info"`.
/// Traces go to [`TRACE_FILE_NAME`] in the data directory, never to the
/// terminal, so they do not interleave with rendered frames.
///
/// Fails silently if the data directory cannot be created, and only the
/// first call in a process installs a subscriber.
///
/// # Example
///
/// ```rust
/// use openlib::observability::init_tracing;
/// use openlib::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = exporter::create_tracer_provider(trace_file(&data_dir), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level(config)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}

fn level(config: &Config) -> &str {
    config
        .trace_level
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(DEFAULT_LEVEL)
}

fn trace_file(data_dir: &Path) -> PathBuf {
    data_dir.join(TRACE_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_defaults_to_info() {
        assert_eq!(level(&Config::default()), "info");

        let blank = Config {
            trace_level: Some("  ".to_string()),
            ..Config::default()
        };
        assert_eq!(level(&blank), "info");

        let debug = Config {
            trace_level: Some("openlib=debug".to_string()),
            ..Config::default()
        };
        assert_eq!(level(&debug), "openlib=debug");
    }

    #[test]
    fn trace_file_lives_in_data_dir() {
        assert_eq!(
            trace_file(Path::new("/data/openlib")),
            Path::new("/data/openlib/openlib-otlp.json")
        );
    }
}
