//! Openlib: a debounced, cancellable book search over the Open Library API.
//!
//! Openlib provides:
//! - A search coordinator that turns keystrokes into at most one network
//!   request per pause in typing
//! - Cancellation of superseded searches so stale results never reach the UI
//! - A repository over the Open Library HTTP API with a typed error taxonomy
//! - A plain-text renderer and a line-oriented terminal front end

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal front end (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Search coordinator (debounce, cancellation)      │
//! │  - Book list state and actions                      │
//! └─────────────────────────────────────────────────────┘
//!         │                                       │
//! ┌───────────────────────┐           ┌───────────────────────┐
//! │ Data Layer (data/)    │           │ UI Layer (ui/)        │
//! │ - Repository          │           │ - View models         │
//! │ - HTTP data source    │           │ - Text renderer       │
//! │ - DTOs and mappers    │           │ - Error text, covers  │
//! └───────────────────────┘           └───────────────────────┘
//!         │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Book model (domain/book)                         │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Search coordinator, screen state and actions
//! - [`data`]: Repository, remote data source, DTOs
//! - [`domain`]: Core domain types (Book, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`ui`]: View models and text rendering
//! - `observability`: OpenTelemetry tracing (internal)
//!
//! # Configuration
//!
//! The terminal front end reads `$OPENLIB_CONFIG` or
//! `~/.config/openlib/openlib.toml`:
//!
//! ```toml
//! base_url = "https://openlibrary.org"
//! result_limit = 20
//! debounce_ms = 500
//! min_query_len = 2
//! request_timeout_secs = 10
//! trace_level = "debug"
//! ```
//!
//! Every key is optional.
//!
//! # Example
//!
//! ```no_run
//! use futures_util::StreamExt;
//! use openlib::{initialize, Config};
//!
//! # async fn run() -> openlib::Result<()> {
//! let coordinator = initialize(&Config::default())?;
//! let mut states = Box::pin(coordinator.observe());
//!
//! coordinator.set_query("dune");
//! while let Some(state) = states.next().await {
//!     if !state.is_loading && !state.search_results.is_empty() {
//!         println!("{}", openlib::ui::render(&state, 80));
//!         break;
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Key Design Decisions
//!
//! ## Lazy Query Watcher
//!
//! The coordinator spawns its debounce loop the first time anyone observes
//! the state, exactly once per instance. Creating a coordinator needs no
//! runtime; observing it does.
//!
//! ## Last Query Wins
//!
//! Each settled query cancels the previous search before starting its own.
//! A search that finishes after being superseded writes nothing.

pub mod app;
pub mod data;
pub mod domain;
pub mod infrastructure;
pub mod ui;

pub mod observability;

pub use app::{BookListAction, BookListState, SearchCoordinator, SearchSettings};
pub use domain::{Book, DataError, OpenlibError, RemoteError, Result};

use data::{DefaultBookRepository, HttpRemoteBookDataSource};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Runtime configuration.
///
/// Loaded from a TOML file with [`Config::load`] or from a flat string map
/// with [`Config::from_map`]. Missing values fall back to [`Config::default`].
///
/// # Example
///
/// ```rust
/// use openlib::Config;
///
/// let config = Config::from_toml_str("debounce_ms = 250").unwrap();
/// assert_eq!(config.debounce_ms, 250);
/// assert_eq!(config.min_query_len, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Open Library base URL, without a trailing slash.
    ///
    /// Default: `https://openlibrary.org`
    pub base_url: String,

    /// Number of documents requested per search. Default: 20
    pub result_limit: u32,

    /// Quiet period after the last keystroke before a query settles, in
    /// milliseconds. Default: 500
    pub debounce_ms: u64,

    /// Shortest non-blank query, counted in chars as typed, that triggers a
    /// search. Default: 2
    pub min_query_len: usize,

    /// HTTP request timeout in seconds. Default: 10
    pub request_timeout_secs: u64,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://openlibrary.org".to_string(),
            result_limit: data::DEFAULT_RESULT_LIMIT,
            debounce_ms: 500,
            min_query_len: 2,
            request_timeout_secs: 10,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a flat string map.
    ///
    /// Missing or unparsable values keep their defaults, as does a zero
    /// `result_limit`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use openlib::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("result_limit".to_string(), "5".to_string());
    /// map.insert("debounce_ms".to_string(), "soon".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.result_limit, 5);
    /// assert_eq!(config.debounce_ms, 500);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let base_url = config
            .get("base_url")
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.base_url);

        Self {
            base_url,
            result_limit: Some(parse_or(config, "result_limit", defaults.result_limit))
                .filter(|limit| *limit > 0)
                .unwrap_or(defaults.result_limit),
            debounce_ms: parse_or(config, "debounce_ms", defaults.debounce_ms),
            min_query_len: parse_or(config, "min_query_len", defaults.min_query_len),
            request_timeout_secs: parse_or(
                config,
                "request_timeout_secs",
                defaults.request_timeout_secs,
            ),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`OpenlibError::Toml`] for malformed TOML or mistyped values,
    /// and [`OpenlibError::Config`] when `result_limit` is zero.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        if config.result_limit == 0 {
            return Err(OpenlibError::Config(
                "result_limit must be positive".to_string(),
            ));
        }
        Ok(config)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`OpenlibError::Io`] if the file cannot be read, otherwise the
    /// errors of [`Config::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading configuration");
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

fn parse_or<T: std::str::FromStr>(config: &BTreeMap<String, String>, key: &str, default: T) -> T {
    config
        .get(key)
        .and_then(|s| s.trim().parse::<T>().ok())
        .unwrap_or(default)
}

/// Wires the HTTP data source, repository and coordinator together.
///
/// # Errors
///
/// Returns [`OpenlibError::Http`] if the HTTP client cannot be built.
pub fn initialize(config: &Config) -> Result<SearchCoordinator> {
    tracing::debug!(base_url = %config.base_url, "initializing openlib");

    let source = HttpRemoteBookDataSource::new(config)?;
    let repository = DefaultBookRepository::new(source).with_result_limit(config.result_limit);

    Ok(SearchCoordinator::new(
        Arc::new(repository),
        SearchSettings::from(config),
    ))
}
