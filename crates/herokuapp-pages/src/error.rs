// Error types for herokuapp-pages

use std::time::Duration;
use thiserror::Error;

/// Result type alias for page-object operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when driving the demo site through page objects
#[derive(Debug, Error)]
pub enum Error {
    /// Failure raised by the browser driver
    ///
    /// Element lookups that match nothing, actions on hidden or detached
    /// elements, protocol timeouts and closed targets all arrive here untouched.
    #[error(transparent)]
    Driver(#[from] playwright_rs::Error),

    /// A geometry query matched no element
    #[error("Element not found: selector '{0}'")]
    ElementNotFound(String),

    /// The driver cannot perform the operation on this kind of target
    #[error("Unsupported target for {operation}: selector '{selector}'")]
    UnsupportedTarget { operation: String, selector: String },

    /// No download arrived within the driver's wait window
    #[error("Download did not start within {0:?}")]
    DownloadTimeout(Duration),

    /// The download listener was dropped before a download arrived
    ///
    /// Happens when the session is closed while a capture is pending.
    #[error("Download listener closed before a download arrived")]
    DownloadAborted,

    /// The page never reached the expected URL
    #[error("Navigation to '{expected}' did not complete within {timeout:?}; page is at '{actual}'")]
    NavigationTimeout {
        expected: String,
        actual: String,
        timeout: Duration,
    },

    /// Slider direction was neither "left" nor "right"
    #[error("Invalid direction '{0}': expected 'left' or 'right'")]
    InvalidDirection(String),

    /// Coordinate text was not of the form `<row>.<column>`
    #[error("Invalid coordinate '{0}': expected '<row>.<column>'")]
    InvalidCoordinate(String),

    /// Sibling scope was neither "outsideSiblings" nor "forTable"
    #[error("Invalid sibling scope '{0}': expected 'outsideSiblings' or 'forTable'")]
    InvalidScope(String),

    /// Avatar numbers on the hovers page start at 1
    #[error("Invalid user {0}: avatars are numbered from 1")]
    InvalidUser(usize),

    /// Session configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parse error
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
