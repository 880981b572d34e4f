//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: Transform `BookListState` into `UIViewModel`
//! 2. **Text Layout**: Lay the view model out as plain text lines
//!
//! The output is a complete frame; the terminal front end prints one frame per
//! state snapshot.
//!
//! # Example
//!
//! ```rust
//! use openlib::ui::render;
//! use openlib::BookListState;
//!
//! let frame = render(&BookListState::default(), 60);
//! assert!(frame.contains("Search the Open Library"));
//! ```

use crate::app::BookListState;
use crate::ui::viewmodel::{StatusLine, UIViewModel};
use std::fmt::Write;

/// Renders a state snapshot as a text frame `cols` wide.
#[must_use]
pub fn render(state: &BookListState, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(cols);
    render_viewmodel(&viewmodel, cols)
}

/// Lays out a pre-computed view model.
///
/// ```text
/// [Search Results (2)]  Favorites (0)
/// ────────────────────────────────────
/// Search: dune
/// Loading...                       (status, optional)
///   1. Dune
///      Frank Herbert · 1965
/// ```
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, cols: usize) -> String {
    let mut frame = String::new();

    let tabs: Vec<String> = vm
        .header
        .tabs
        .iter()
        .enumerate()
        .map(|(index, label)| {
            if index == vm.header.selected_tab {
                format!("[{}]", label.trim())
            } else {
                format!(" {} ", label.trim())
            }
        })
        .collect();
    let _ = writeln!(frame, "{}", tabs.join(" "));
    let _ = writeln!(frame, "{}", "─".repeat(cols));
    let _ = writeln!(frame, "Search: {}", vm.search_bar.query);

    match &vm.status {
        Some(StatusLine::Loading) => {
            let _ = writeln!(frame, "Loading...");
        }
        Some(StatusLine::Error(message)) => {
            let _ = writeln!(frame, "Error: {message}");
        }
        None => {}
    }

    if let Some(empty) = &vm.empty_state {
        let _ = writeln!(frame);
        let _ = writeln!(frame, "{}", center(&empty.message, cols));
        let _ = writeln!(frame, "{}", center(&empty.subtitle, cols));
        return frame;
    }

    for (index, item) in vm.display_items.iter().enumerate() {
        let _ = writeln!(frame, "{:>3}. {}", index + 1, item.title);
        let _ = writeln!(frame, "     {}", item.subtitle);
    }

    frame
}

fn center(text: &str, cols: usize) -> String {
    let padding = cols.saturating_sub(text.chars().count()) / 2;
    format!("{}{text}", " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Book;

    #[test]
    fn renders_numbered_results() {
        let state = BookListState {
            search_query: "dune".to_string(),
            search_results: vec![Book::new("OL1W", "Dune"), Book::new("OL2W", "Dune Messiah")],
            ..BookListState::default()
        };

        let frame = render(&state, 40);
        assert!(frame.starts_with("[Search Results (2)]  Favorites (0) "));
        assert!(frame.contains("Search: dune"));
        assert!(frame.contains("  1. Dune\n"));
        assert!(frame.contains("  2. Dune Messiah\n"));
    }

    #[test]
    fn renders_error_line_without_rows() {
        let state = BookListState {
            search_query: "xx".to_string(),
            error_message: Some("Nothing was found.".to_string()),
            ..BookListState::default()
        };

        let frame = render(&state, 40);
        assert!(frame.contains("Error: Nothing was found."));
        assert!(!frame.contains("1."));
    }

    #[test]
    fn centers_empty_state() {
        let frame = render(&BookListState::default(), 43);
        assert!(frame.contains("\n          Search the Open Library\n"));
    }
}
