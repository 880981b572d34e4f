//! User-facing text for data errors.

use crate::domain::{DataError, LocalError, RemoteError};

/// Maps a data error to the message shown in place of search results.
///
/// This is the default mapper of [`SearchCoordinator`](crate::app::SearchCoordinator).
///
/// # Example
///
/// ```rust
/// use openlib::domain::{DataError, RemoteError};
/// use openlib::ui::text::to_ui_text;
///
/// let message = to_ui_text(&DataError::Remote(RemoteError::NoInternet));
/// assert_eq!(message, "Couldn't reach the server. Check your internet connection.");
/// ```
#[must_use]
pub fn to_ui_text(error: &DataError) -> String {
    let text = match error {
        DataError::Remote(RemoteError::RequestTimeout) => "The request timed out. Please try again.",
        DataError::Remote(RemoteError::TooManyRequests) => {
            "Too many requests. Please wait a moment and try again."
        }
        DataError::Remote(RemoteError::NoInternet) => {
            "Couldn't reach the server. Check your internet connection."
        }
        DataError::Remote(RemoteError::Server) => "Something went wrong on the server. Please try again later.",
        DataError::Remote(RemoteError::Serialization) => "Couldn't read the server response.",
        DataError::Remote(RemoteError::NotFound) => "Nothing was found.",
        DataError::Remote(RemoteError::Unknown) | DataError::Local(LocalError::Unknown) => {
            "An unknown error occurred."
        }
        DataError::Local(LocalError::DiskFull) => "Not enough free space on the device.",
    };
    text.to_string()
}
