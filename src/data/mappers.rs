//! Conversions from wire models to domain values.

use crate::data::dto::SearchedBookDto;
use crate::domain::Book;

/// Base URL of the Open Library covers service.
const COVERS_BASE_URL: &str = "https://covers.openlibrary.org/b";

impl SearchedBookDto {
    /// Converts a search entry into a domain [`Book`].
    ///
    /// # Mapping Rules
    ///
    /// - `id`: the segment of the work key after the last `/`
    /// - `image_url`: edition cover when `cover_edition_key` is present,
    ///   otherwise the numeric `cover_i` cover, otherwise empty
    /// - missing lists become empty, missing edition count becomes 0
    /// - `description` stays `None`; it is fetched on demand
    #[must_use]
    pub fn to_book(&self) -> Book {
        let id = self
            .id
            .rsplit_once('/')
            .map_or(self.id.as_str(), |(_, tail)| tail)
            .to_string();

        let image_url = match (&self.cover_key, self.cover_alternative_key) {
            (Some(olid), _) => format!("{COVERS_BASE_URL}/olid/{olid}-L.jpg"),
            (None, Some(cover_id)) => format!("{COVERS_BASE_URL}/id/{cover_id}-L.jpg"),
            (None, None) => String::new(),
        };

        Book {
            id,
            title: self.title.clone(),
            image_url,
            authors: self.author_names.clone().unwrap_or_default(),
            description: None,
            languages: self.languages.clone().unwrap_or_default(),
            first_publish_year: self.first_publish_year.map(|year| year.to_string()),
            average_rating: self.ratings_average,
            rating_count: self.ratings_count,
            num_pages: self.num_pages_median,
            num_editions: self.num_editions.unwrap_or(0),
        }
    }
}
