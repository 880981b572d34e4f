//! Data layer: remote catalog access and DTO-to-domain mapping.
//!
//! # Modules
//!
//! - [`dto`]: Wire models for the Open Library JSON API
//! - [`mappers`]: DTO → [`Book`](crate::domain::Book) conversion
//! - [`network`]: [`RemoteBookDataSource`] trait and the `reqwest` client
//! - [`repository`]: [`BookRepository`] trait and [`DefaultBookRepository`]

pub mod dto;
pub mod mappers;
pub mod network;
pub mod repository;

pub use dto::{BookWorkDto, SearchResponseDto, SearchedBookDto};
pub use network::{HttpRemoteBookDataSource, RemoteBookDataSource};
pub use repository::{BookRepository, DefaultBookRepository, DEFAULT_RESULT_LIMIT};
