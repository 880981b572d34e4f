//! Domain layer for the openlib crate.
//!
//! This module contains the core domain types, independent of the HTTP client,
//! the async runtime or the terminal front end.
//!
//! # Organization
//!
//! - [`error`]: Data-layer error taxonomy, crate error and result alias
//! - [`book`]: Book domain model
//!
//! # Examples
//!
//! ```
//! use openlib::domain::{Book, DataError, RemoteError};
//!
//! fn first_result(results: Vec<Book>) -> Result<Book, DataError> {
//!     results.into_iter().next().ok_or(RemoteError::NotFound.into())
//! }
//!
//! assert!(first_result(vec![]).is_err());
//! ```

pub mod book;
pub mod error;

pub use book::Book;
pub use error::{DataError, LocalError, OpenlibError, RemoteError, Result};
