//! Book domain model.
//!
//! A [`Book`] is the catalog entry shown in search results and on the detail
//! screen. Values are built by the data layer from remote DTOs and are not
//! mutated afterwards; the description is fetched separately and attached with
//! [`Book::with_description`].

use serde::{Deserialize, Serialize};

/// A book as presented to the user.
///
/// # Fields
///
/// - `id`: Open Library work id (e.g. `OL45804W`), without the `/works/` prefix
/// - `title`: Display title
/// - `image_url`: Cover image URL on the covers service
/// - `authors`: Author display names, in catalog order
/// - `description`: Long description, `None` until fetched
/// - `languages`: ISO 639-2 language codes of known editions
/// - `first_publish_year`: Year of first publication, as displayed
/// - `average_rating` / `rating_count`: Community ratings, if any
/// - `num_pages`: Median page count across editions
/// - `num_editions`: Number of editions known to the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub authors: Vec<String>,
    pub description: Option<String>,
    pub languages: Vec<String>,
    pub first_publish_year: Option<String>,
    pub average_rating: Option<f64>,
    pub rating_count: Option<u32>,
    pub num_pages: Option<u32>,
    pub num_editions: u32,
}

impl Book {
    /// Returns a copy of the book with its description filled in.
    ///
    /// # Examples
    ///
    /// ```
    /// use openlib::Book;
    ///
    /// let book = Book::new("OL1W", "Dune").with_description(Some("Spice.".to_string()));
    /// assert_eq!(book.description.as_deref(), Some("Spice."));
    /// ```
    #[must_use]
    pub fn with_description(self, description: Option<String>) -> Self {
        Self { description, ..self }
    }

    /// Creates a book with only an id and a title.
    ///
    /// All optional metadata is empty. Mostly useful for tests and fixtures;
    /// real values come from [`crate::data::mappers`].
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image_url: String::new(),
            authors: Vec::new(),
            description: None,
            languages: Vec::new(),
            first_publish_year: None,
            average_rating: None,
            rating_count: None,
            num_pages: None,
            num_editions: 0,
        }
    }

    /// Joins the author names for a single display line.
    ///
    /// Returns `"Unknown author"` when the catalog lists nobody.
    #[must_use]
    pub fn authors_line(&self) -> String {
        if self.authors.is_empty() {
            "Unknown author".to_string()
        } else {
            self.authors.join(", ")
        }
    }
}
