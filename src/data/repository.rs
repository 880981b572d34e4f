//! Book repository: the data-layer contract used by the presentation layer.
//!
//! The repository hides where books come from. [`DefaultBookRepository`] is a
//! pass-through over a [`RemoteBookDataSource`] that maps wire DTOs into domain
//! values and widens [`RemoteError`]s into [`DataError`]s.

use crate::data::network::RemoteBookDataSource;
use crate::domain::{Book, DataError};
use async_trait::async_trait;

/// Default number of results requested per search.
pub const DEFAULT_RESULT_LIMIT: u32 = 20;

/// Repository contract consumed by the search coordinator and detail screen.
///
/// Implementations must be cancel-safe: the coordinator drops in-flight calls
/// when a newer query supersedes them.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Searches the catalog and returns domain books in relevance order.
    ///
    /// # Errors
    ///
    /// Returns a [`DataError`] when the remote call fails.
    async fn search_books(&self, query: &str) -> Result<Vec<Book>, DataError>;

    /// Fetches the long description of a book, `None` if the catalog has none.
    ///
    /// # Errors
    ///
    /// Returns a [`DataError`] when the remote call fails.
    async fn get_book_description(&self, book_id: &str) -> Result<Option<String>, DataError>;
}

/// Repository backed directly by a remote data source.
///
/// # Example
///
/// ```no_run
/// use openlib::data::{BookRepository, DefaultBookRepository, HttpRemoteBookDataSource};
/// use openlib::Config;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config::default();
/// let repository = DefaultBookRepository::new(HttpRemoteBookDataSource::new(&config)?)
///     .with_result_limit(config.result_limit);
/// let books = repository.search_books("dune").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DefaultBookRepository<S> {
    remote_book_data_source: S,
    result_limit: u32,
}

impl<S: RemoteBookDataSource> DefaultBookRepository<S> {
    /// Creates a repository over the given data source.
    #[must_use]
    pub const fn new(remote_book_data_source: S) -> Self {
        Self {
            remote_book_data_source,
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }

    /// Overrides the number of results requested per search.
    #[must_use]
    pub const fn with_result_limit(mut self, result_limit: u32) -> Self {
        self.result_limit = result_limit;
        self
    }
}

#[async_trait]
impl<S: RemoteBookDataSource> BookRepository for DefaultBookRepository<S> {
    async fn search_books(&self, query: &str) -> Result<Vec<Book>, DataError> {
        let response = self
            .remote_book_data_source
            .search_books(query, self.result_limit)
            .await?;

        Ok(response.results.iter().map(|dto| dto.to_book()).collect())
    }

    async fn get_book_description(&self, book_id: &str) -> Result<Option<String>, DataError> {
        let work = self.remote_book_data_source.get_book_details(book_id).await?;
        Ok(work.description)
    }
}
