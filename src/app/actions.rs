//! User intents sent from the UI to the search coordinator.
//!
//! The UI never mutates [`BookListState`](crate::app::BookListState) directly;
//! it describes what the user did with a [`BookListAction`] and hands it to
//! [`SearchCoordinator::on_action`](crate::app::SearchCoordinator::on_action).
//!
//! # Example
//!
//! ```rust
//! use openlib::BookListAction;
//!
//! let actions = vec![
//!     BookListAction::OnSearchQueryChange("dune".to_string()),
//!     BookListAction::OnTabSelected(1),
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::domain::Book;

/// Something the user did on the book list screen.
#[derive(Debug, Clone, PartialEq)]
pub enum BookListAction {
    /// A book row was tapped.
    ///
    /// Opening the detail screen belongs to navigation, which lives outside
    /// the coordinator; the action is accepted and logged.
    OnBookClick(Book),

    /// The search field text changed.
    OnSearchQueryChange(String),

    /// A tab was selected.
    OnTabSelected(usize),
}
