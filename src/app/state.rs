//! Book list screen state.
//!
//! [`BookListState`] is the single record the search coordinator owns and
//! publishes. Consumers only ever see clones of it, taken after each update,
//! so every snapshot is internally consistent.
//!
//! # State Components
//!
//! - **Search Query**: Raw text as typed, updated on every keystroke
//! - **Search Results**: Books shown in the results tab
//! - **Loading / Error**: Status of the most recent search
//! - **Selected Tab**: Results (`0`) or favorites (`1`)
//! - **Favorite Books**: Contents of the favorites tab

use crate::domain::Book;
use crate::ui::viewmodel::{
    DisplayItem, EmptyState, HeaderInfo, SearchBarInfo, StatusLine, UIViewModel,
};

/// Narrowest row the title column is truncated to.
const MIN_TITLE_WIDTH: usize = 10;

/// Index of the search results tab.
pub const SEARCH_RESULTS_TAB: usize = 0;

/// Index of the favorites tab.
pub const FAVORITES_TAB: usize = 1;

/// Snapshot of the book list screen.
///
/// # Example
///
/// ```rust
/// use openlib::BookListState;
///
/// let state = BookListState::default();
/// assert!(state.search_query.is_empty());
/// assert!(!state.is_loading);
/// assert!(state.error_message.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookListState {
    /// Current query text, exactly as entered.
    pub search_query: String,

    /// Books displayed in the search results tab.
    ///
    /// Replaced by each settled search, restored from the cache when the
    /// query is cleared, emptied on failure.
    pub search_results: Vec<Book>,

    /// Books displayed in the favorites tab.
    pub favorite_books: Vec<Book>,

    /// True while a search is in flight and has not been superseded.
    pub is_loading: bool,

    /// User-facing description of the last failure, if any.
    pub error_message: Option<String>,

    /// Zero-based index of the active tab.
    pub selected_tab_index: usize,
}

impl BookListState {
    /// Returns the books of the currently selected tab.
    ///
    /// Unknown tab indices fall back to the search results.
    #[must_use]
    pub fn visible_books(&self) -> &[Book] {
        match self.selected_tab_index {
            FAVORITES_TAB => &self.favorite_books,
            _ => &self.search_results,
        }
    }

    /// Computes a renderable view model for a terminal `cols` wide.
    ///
    /// The status line shows loading before errors; the empty state is only
    /// produced when the active tab has no rows and nothing is loading.
    ///
    /// # Example
    ///
    /// ```rust
    /// use openlib::BookListState;
    ///
    /// let state = BookListState { is_loading: true, ..BookListState::default() };
    /// let vm = state.compute_viewmodel(80);
    /// assert!(vm.status.is_some());
    /// assert!(vm.empty_state.is_none());
    /// ```
    #[must_use]
    pub fn compute_viewmodel(&self, cols: usize) -> UIViewModel {
        let title_width = cols.saturating_sub(4).max(MIN_TITLE_WIDTH);

        let status = if self.is_loading {
            Some(StatusLine::Loading)
        } else {
            self.error_message.clone().map(StatusLine::Error)
        };

        let display_items: Vec<DisplayItem> = self
            .visible_books()
            .iter()
            .map(|book| Self::compute_display_item(book, title_width))
            .collect();

        let empty_state = if display_items.is_empty() && status.is_none() {
            Some(self.compute_empty_state())
        } else {
            None
        };

        UIViewModel {
            header: HeaderInfo {
                tabs: vec![
                    format!(" Search Results ({}) ", self.search_results.len()),
                    format!(" Favorites ({}) ", self.favorite_books.len()),
                ],
                selected_tab: self.selected_tab_index.min(FAVORITES_TAB),
            },
            search_bar: SearchBarInfo {
                query: self.search_query.clone(),
            },
            status,
            display_items,
            empty_state,
        }
    }

    fn compute_display_item(book: &Book, title_width: usize) -> DisplayItem {
        let title = if book.title.chars().count() > title_width {
            let kept: String = book.title.chars().take(title_width.saturating_sub(3)).collect();
            format!("{kept}...")
        } else {
            book.title.clone()
        };

        let subtitle = match &book.first_publish_year {
            Some(year) => format!("{} · {year}", book.authors_line()),
            None => book.authors_line(),
        };

        DisplayItem { title, subtitle }
    }

    fn compute_empty_state(&self) -> EmptyState {
        if self.selected_tab_index == FAVORITES_TAB {
            EmptyState {
                message: "No favorite books yet".to_string(),
                subtitle: "Books you mark as favorite show up here".to_string(),
            }
        } else if self.search_query.trim().is_empty() {
            EmptyState {
                message: "Search the Open Library".to_string(),
                subtitle: "Type at least two characters to search".to_string(),
            }
        } else {
            EmptyState {
                message: "No search results".to_string(),
                subtitle: format!("Nothing matched \"{}\"", self.search_query.trim()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_books_follow_the_selected_tab() {
        let mut state = BookListState {
            search_results: vec![Book::new("OL1W", "Dune")],
            favorite_books: vec![Book::new("OL2W", "Emma")],
            ..BookListState::default()
        };
        assert_eq!(state.visible_books()[0].title, "Dune");

        state.selected_tab_index = FAVORITES_TAB;
        assert_eq!(state.visible_books()[0].title, "Emma");

        state.selected_tab_index = 7;
        assert_eq!(state.visible_books()[0].title, "Dune");
    }

    #[test]
    fn viewmodel_lists_books_with_subtitles() {
        let mut dune = Book::new("OL1W", "Dune");
        dune.authors = vec!["Frank Herbert".to_string()];
        dune.first_publish_year = Some("1965".to_string());
        let state = BookListState {
            search_query: "dune".to_string(),
            search_results: vec![dune, Book::new("OL2W", "Anonymous Work")],
            ..BookListState::default()
        };

        let vm = state.compute_viewmodel(80);
        assert_eq!(vm.header.tabs[0], " Search Results (2) ");
        assert_eq!(vm.display_items[0].subtitle, "Frank Herbert · 1965");
        assert_eq!(vm.display_items[1].subtitle, "Unknown author");
        assert!(vm.status.is_none());
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn viewmodel_truncates_long_titles() {
        let state = BookListState {
            search_results: vec![Book::new("OL1W", "A".repeat(100))],
            ..BookListState::default()
        };

        let vm = state.compute_viewmodel(24);
        assert_eq!(vm.display_items[0].title.chars().count(), 20);
        assert!(vm.display_items[0].title.ends_with("..."));
    }

    #[test]
    fn viewmodel_prefers_loading_over_error() {
        let state = BookListState {
            is_loading: true,
            error_message: Some("boom".to_string()),
            ..BookListState::default()
        };
        assert_eq!(state.compute_viewmodel(80).status, Some(StatusLine::Loading));

        let failed = BookListState {
            error_message: Some("boom".to_string()),
            ..BookListState::default()
        };
        let vm = failed.compute_viewmodel(80);
        assert_eq!(vm.status, Some(StatusLine::Error("boom".to_string())));
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn viewmodel_empty_states_depend_on_context() {
        let idle = BookListState::default().compute_viewmodel(80);
        assert_eq!(idle.empty_state.unwrap().message, "Search the Open Library");

        let no_hits = BookListState {
            search_query: "zzzz".to_string(),
            ..BookListState::default()
        };
        assert_eq!(no_hits.compute_viewmodel(80).empty_state.unwrap().message, "No search results");

        let favorites = BookListState {
            selected_tab_index: FAVORITES_TAB,
            ..BookListState::default()
        };
        let vm = favorites.compute_viewmodel(80);
        assert_eq!(vm.header.selected_tab, FAVORITES_TAB);
        assert_eq!(vm.empty_state.unwrap().message, "No favorite books yet");
    }
}
