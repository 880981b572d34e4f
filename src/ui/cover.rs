//! Cover image state for the book detail screen.
//!
//! The detail screen shows the cover twice: blurred as a backdrop behind the
//! top of the screen, and sharp on a card in the middle. Loading is modelled as
//! an explicit state machine so every render path handles all three cases:
//!
//! ```text
//! Loading ──(decoded, both sides > 1px)──► Loaded(CoverImage)
//!    │
//!    └──(decode error or degenerate size)──► Failed(CoverError)
//! ```
//!
//! The card shows a pulse placeholder while loading, the sharp cover when
//! loaded, and the error illustration when failed. The backdrop is only drawn
//! for a loaded cover.

use thiserror::Error;

/// A decoded cover, described by its source URL and intrinsic size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// Why a cover could not be shown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoverError {
    /// The book has no cover URL.
    #[error("book has no cover")]
    Missing,

    /// The image decoded to a degenerate size (placeholder pixels).
    #[error("invalid image size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    /// The image loader reported a failure.
    #[error("failed to load cover: {0}")]
    Load(String),
}

/// Load state of a cover image.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CoverLoadState {
    #[default]
    Loading,
    Loaded(CoverImage),
    Failed(CoverError),
}

impl CoverLoadState {
    /// Initial state for a book's cover URL.
    #[must_use]
    pub fn for_url(url: Option<&str>) -> Self {
        match url {
            Some(url) if !url.trim().is_empty() => Self::Loading,
            _ => Self::Failed(CoverError::Missing),
        }
    }

    /// Transition taken when the image loader decodes an image.
    ///
    /// Open Library answers unknown covers with a 1x1 pixel, so anything not
    /// larger than one pixel on both sides counts as a failure.
    #[must_use]
    pub fn decoded(url: impl Into<String>, width: u32, height: u32) -> Self {
        if width > 1 && height > 1 {
            Self::Loaded(CoverImage {
                url: url.into(),
                width,
                height,
            })
        } else {
            Self::Failed(CoverError::InvalidSize { width, height })
        }
    }

    /// Transition taken when the image loader reports an error.
    #[must_use]
    pub fn load_failed(reason: impl Into<String>) -> Self {
        Self::Failed(CoverError::Load(reason.into()))
    }

    /// Cover to draw blurred behind the header, only once loaded.
    #[must_use]
    pub const fn backdrop(&self) -> Option<&CoverImage> {
        match self {
            Self::Loaded(image) => Some(image),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Accessible label of the favorite toggle on the cover card.
#[must_use]
pub const fn favorite_button_label(is_favorite: bool) -> &'static str {
    if is_favorite {
        "Remove from favorites"
    } else {
        "Mark as favorite"
    }
}

/// Accessible label of the back button.
pub const BACK_BUTTON_LABEL: &str = "Go back";

/// Accessible label of the cover image.
pub const COVER_LABEL: &str = "Book cover";
