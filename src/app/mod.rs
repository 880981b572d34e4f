//! Application layer: the book list screen's state and its coordinator.
//!
//! This module sits between the UI front end (main.rs, `ui/`) and the data
//! layer. It implements a unidirectional data flow:
//!
//! ```text
//! UI → BookListAction → SearchCoordinator → BookRepository
//!  ↑                           │
//!  └──── BookListState ◄───────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: User intents sent by the UI
//! - [`coordinator`]: Debounced, cancellable search coordinator
//! - [`state`]: Screen state snapshot published to observers

pub mod actions;
pub mod coordinator;
pub mod state;

pub use actions::BookListAction;
pub use coordinator::{ErrorMapper, SearchCoordinator, SearchSettings};
pub use state::{BookListState, FAVORITES_TAB, SEARCH_RESULTS_TAB};
