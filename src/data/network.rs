//! Remote data source abstraction and its HTTP implementation.
//!
//! [`RemoteBookDataSource`] is the seam between the repository and the network.
//! The crate ships [`HttpRemoteBookDataSource`], a `reqwest` client for the
//! public Open Library API; tests substitute in-memory implementations.
//!
//! # Error Classification
//!
//! Every failure is reduced to a [`RemoteError`]:
//!
//! | Condition                         | Error             |
//! |-----------------------------------|-------------------|
//! | client timeout, HTTP 408          | `RequestTimeout`  |
//! | connection could not be opened    | `NoInternet`      |
//! | HTTP 404                          | `NotFound`        |
//! | HTTP 429                          | `TooManyRequests` |
//! | HTTP 5xx                          | `Server`          |
//! | 2xx with an undecodable body      | `Serialization`   |
//! | anything else                     | `Unknown`         |

use crate::data::dto::{BookWorkDto, SearchResponseDto};
use crate::domain::error::{OpenlibError, RemoteError};
use crate::Config;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::Instrument;

/// Fields requested from the search endpoint.
const SEARCH_FIELDS: &str = "key,title,author_name,author_key,cover_edition_key,cover_i,\
ratings_average,ratings_count,first_publish_year,language,number_of_pages_median,edition_count";

/// Source of raw catalog data.
///
/// Implementations must be safe to abandon mid-call: the search coordinator
/// drops the future when a newer query supersedes the request.
#[async_trait]
pub trait RemoteBookDataSource: Send + Sync {
    /// Runs a full-text search and returns at most `result_limit` works.
    ///
    /// # Errors
    ///
    /// Returns a [`RemoteError`] classifying the transport or HTTP failure.
    async fn search_books(
        &self,
        query: &str,
        result_limit: u32,
    ) -> Result<SearchResponseDto, RemoteError>;

    /// Fetches the work record for a single book.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::NotFound`] for unknown ids and other variants for
    /// transport failures.
    async fn get_book_details(&self, book_work_id: &str) -> Result<BookWorkDto, RemoteError>;
}

/// `reqwest`-backed data source talking to the Open Library API.
#[derive(Debug, Clone)]
pub struct HttpRemoteBookDataSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRemoteBookDataSource {
    /// Builds a data source from configuration.
    ///
    /// Uses `base_url` and `request_timeout_secs` from the config.
    ///
    /// # Errors
    ///
    /// Returns [`OpenlibError::Http`] if the TLS backend cannot be initialized.
    pub fn new(config: &Config) -> Result<Self, OpenlibError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("openlib/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(client, &config.base_url))
    }

    /// Wraps an existing client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, RemoteError> {
        let response = request.send().await.map_err(|e| {
            tracing::debug!(error = %e, "request failed before a response arrived");
            classify_transport(&e)
        })?;

        let status = response.status();
        if let Some(error) = classify_status(status) {
            tracing::debug!(status = status.as_u16(), ?error, "remote returned an error status");
            return Err(error);
        }

        let body = response.bytes().await.map_err(|e| classify_transport(&e))?;
        decode_body(&body)
    }
}

#[async_trait]
impl RemoteBookDataSource for HttpRemoteBookDataSource {
    async fn search_books(
        &self,
        query: &str,
        result_limit: u32,
    ) -> Result<SearchResponseDto, RemoteError> {
        let span = tracing::debug_span!("remote_search", query_len = query.len(), result_limit);

        let limit = result_limit.to_string();
        let request = self
            .client
            .get(format!("{}/search.json", self.base_url))
            .query(&[
                ("q", query),
                ("mode", "everything"),
                ("limit", limit.as_str()),
                ("fields", SEARCH_FIELDS),
            ]);

        self.get_json(request).instrument(span).await
    }

    async fn get_book_details(&self, book_work_id: &str) -> Result<BookWorkDto, RemoteError> {
        tracing::debug!(book_work_id, "fetching book details");

        let request = self
            .client
            .get(format!("{}/works/{book_work_id}.json", self.base_url));

        self.get_json(request).await
    }
}

/// Maps an HTTP status to an error, or `None` for 2xx.
#[must_use]
pub fn classify_status(status: StatusCode) -> Option<RemoteError> {
    if status.is_success() {
        return None;
    }

    Some(match status.as_u16() {
        404 => RemoteError::NotFound,
        408 => RemoteError::RequestTimeout,
        429 => RemoteError::TooManyRequests,
        500..=599 => RemoteError::Server,
        _ => RemoteError::Unknown,
    })
}

/// Maps a `reqwest` transport failure to an error.
#[must_use]
pub fn classify_transport(error: &reqwest::Error) -> RemoteError {
    if error.is_timeout() {
        RemoteError::RequestTimeout
    } else if error.is_connect() {
        RemoteError::NoInternet
    } else if error.is_decode() {
        RemoteError::Serialization
    } else {
        RemoteError::Unknown
    }
}

/// Decodes a successful response body.
///
/// # Errors
///
/// Returns [`RemoteError::Serialization`] when the body is not the expected JSON.
pub fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, RemoteError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "failed to decode response body");
        RemoteError::Serialization
    })
}
