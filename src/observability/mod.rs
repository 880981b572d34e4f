//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! # Features
//!
//! - **File-Based Export**: Traces written to `~/.local/share/openlib/openlib-otlp.json`
//! - **Automatic Rotation**: Files rotate at 10MB with 3 numbered backups
//! - **OTLP Format**: Each line is an OTLP/JSON trace export request
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in the config file
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - `exporter`: Tracer provider with the file span exporter
//! - `otlp`: OTLP JSON encoding
//! - `rotation`: Size-rotated line file

mod exporter;
pub mod init;
mod otlp;
mod rotation;

pub use init::init_tracing;
