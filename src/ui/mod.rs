//! Presentation layer.
//!
//! Everything between a state snapshot and what the user reads:
//!
//! ```text
//! BookListState → compute_viewmodel → UIViewModel → render → text frame
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Plain-text layout of the book list screen
//! - [`text`]: User-facing messages for data errors
//! - [`cover`]: Cover image load state for the book detail screen

pub mod cover;
pub mod renderer;
pub mod text;
pub mod viewmodel;

pub use cover::{CoverError, CoverImage, CoverLoadState};
pub use renderer::render;
pub use text::to_ui_text;
pub use viewmodel::{DisplayItem, EmptyState, HeaderInfo, SearchBarInfo, StatusLine, UIViewModel};
