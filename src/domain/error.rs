//! Error types for the openlib crate.
//!
//! Two families of errors live here:
//!
//! - [`DataError`] (with [`RemoteError`] and [`LocalError`]) is the data-layer
//!   taxonomy returned by repositories. These errors are expected at runtime and
//!   are turned into user-facing text by [`crate::ui::text::to_ui_text`].
//! - [`OpenlibError`] is the crate-level error for configuration, I/O and HTTP
//!   client setup failures, together with the [`Result`] alias.
//!
//! All errors are implemented using the `thiserror` crate.

use thiserror::Error;

/// Failures reported by the remote catalog.
///
/// Produced by [`crate::data::network::RemoteBookDataSource`] implementations
/// when classifying transport errors and HTTP status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// The request did not complete in time (client timeout or HTTP 408).
    #[error("request timed out")]
    RequestTimeout,

    /// The server is rate limiting the client (HTTP 429).
    #[error("too many requests")]
    TooManyRequests,

    /// The host could not be reached at all.
    #[error("no internet connection")]
    NoInternet,

    /// The server answered with a 5xx status.
    #[error("server error")]
    Server,

    /// The response body did not match the expected shape.
    #[error("malformed response")]
    Serialization,

    /// The requested resource does not exist (HTTP 404).
    #[error("not found")]
    NotFound,

    /// Anything that does not fit the categories above.
    #[error("unknown remote error")]
    Unknown,
}

/// Failures of on-device storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocalError {
    /// The device ran out of space while writing.
    #[error("disk full")]
    DiskFull,

    /// Unclassified local failure.
    #[error("unknown local error")]
    Unknown,
}

/// Any error a repository operation can surface to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DataError {
    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Local(#[from] LocalError),
}

/// The crate-level error type.
///
/// Covers failures outside the search flow: loading configuration, touching
/// the filesystem and building the HTTP client.
///
/// # Examples
///
/// ```
/// use openlib::OpenlibError;
///
/// fn validate_limit(limit: u32) -> Result<u32, OpenlibError> {
///     if limit == 0 {
///         return Err(OpenlibError::Config("result_limit must be positive".to_string()));
///     }
///     Ok(limit)
/// }
///
/// assert!(validate_limit(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum OpenlibError {
    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid TOML.
    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// A specialized `Result` type for crate-level operations.
pub type Result<T> = std::result::Result<T, OpenlibError>;
