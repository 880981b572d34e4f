//! View model types representing renderable UI state.
//!
//! View models are computed from a [`BookListState`](crate::app::BookListState)
//! snapshot via `compute_viewmodel` and consumed by the renderer. They contain
//! no business logic, only display-ready data.
//!
//! # Example
//!
//! ```rust
//! use openlib::ui::viewmodel::{DisplayItem, HeaderInfo, SearchBarInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { tabs: vec![" Search Results (1) ".to_string()], selected_tab: 0 },
//!     search_bar: SearchBarInfo { query: "dune".to_string() },
//!     status: None,
//!     display_items: vec![DisplayItem {
//!         title: "Dune".to_string(),
//!         subtitle: "Frank Herbert · 1965".to_string(),
//!     }],
//!     empty_state: None,
//! };
//! assert_eq!(vm.display_items.len(), 1);
//! ```

/// Complete UI view model for the book list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Tab strip.
    pub header: HeaderInfo,

    /// Search input box.
    pub search_bar: SearchBarInfo,

    /// Loading or error line shown above the list.
    pub status: Option<StatusLine>,

    /// Rows of the active tab.
    pub display_items: Vec<DisplayItem>,

    /// Message shown instead of rows when the active tab is empty.
    pub empty_state: Option<EmptyState>,
}

/// One row of the book list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Title, truncated to the row width.
    pub title: String,

    /// Authors and first publication year.
    pub subtitle: String,
}

/// Tab strip labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub tabs: Vec<String>,
    pub selected_tab: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
}

/// Status shown between the search bar and the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    Loading,
    Error(String),
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No search results").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
