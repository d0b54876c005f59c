// Driver - the narrow browser interface page objects are written against
//
// Page objects never talk to Playwright directly. They hold a SharedDriver and
// issue locate-and-interact calls through this trait, which keeps them
// testable against an in-memory driver and keeps selector knowledge inside
// the page objects (callers only ever see opaque Target values).
//
// Architecture:
// - Driver: async trait, implemented by PlaywrightSession
// - Target: opaque Playwright selector, built only by page objects
// - PendingDownload: armed download listener, resolved after the trigger

use crate::error::{Error, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;

/// Shared handle to one driver session
pub type SharedDriver = Arc<dyn Driver>;

/// Browser operations the page objects depend on.
///
/// Every call suspends until the browser has completed the action and
/// fails loudly when the target is missing or the wait window elapses.
/// Implementations must not retry or swallow failures.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Navigates to `url` (relative paths resolve against the session base URL)
    /// and returns the HTTP status of the main resource, if there was one.
    async fn goto(&self, url: &str) -> Result<Option<u16>>;

    /// Current URL of the page
    fn current_url(&self) -> String;

    /// Wait window the driver applies to actions, navigations and downloads
    fn timeout(&self) -> Duration;

    async fn click(&self, target: &Target) -> Result<()>;

    async fn hover(&self, target: &Target) -> Result<()>;

    async fn fill(&self, target: &Target, value: &str) -> Result<()>;

    async fn text_content(&self, target: &Target) -> Result<Option<String>>;

    /// Value of a form control (`<input>`, `<textarea>`, `<select>`)
    async fn input_value(&self, target: &Target) -> Result<String>;

    /// Number of elements currently matching `target`
    async fn count(&self, target: &Target) -> Result<usize>;

    /// On-screen geometry of the element, in viewport CSS pixels
    async fn bounding_box(&self, target: &Target) -> Result<BoundingBox>;

    /// Presses a single key on the page keyboard (e.g. `ArrowLeft`, `a`)
    async fn press_key(&self, key: &str) -> Result<()>;

    async fn mouse_move(&self, x: f64, y: f64) -> Result<()>;

    async fn mouse_down(&self) -> Result<()>;

    async fn mouse_up(&self) -> Result<()>;

    /// Arms a listener for the next download.
    ///
    /// Must be called before the action that triggers the download.
    async fn expect_download(&self) -> Result<PendingDownload>;

    /// Queues the response to the next JavaScript dialog.
    ///
    /// Must be called before the action that opens the dialog. Dialogs
    /// arriving with nothing queued are dismissed.
    async fn handle_next_dialog(&self, action: DialogAction) -> Result<()>;
}

/// Opaque element locator.
///
/// Wraps a Playwright selector string. Only page objects construct targets,
/// so callers never encode the site's DOM structure themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target {
    selector: String,
    css: bool,
}

impl Target {
    /// Plain CSS selector
    pub(crate) fn css(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            css: true,
        }
    }

    /// Element containing `text` (case-insensitive substring, like `getByText`)
    pub(crate) fn text(text: &str) -> Self {
        Self {
            selector: format!("internal:text={}i", quote(text)),
            css: false,
        }
    }

    /// Element with ARIA `role` whose accessible name contains `name`
    pub(crate) fn role(role: &str, name: &str) -> Self {
        Self {
            selector: format!("internal:role={role}[name={}i]", quote(name)),
            css: false,
        }
    }

    /// Element with ARIA `role` whose accessible name is exactly `name`
    pub(crate) fn role_exact(role: &str, name: &str) -> Self {
        Self {
            selector: format!("internal:role={role}[name={}s]", quote(name)),
            css: false,
        }
    }

    /// The `index`-th match (zero-based)
    pub(crate) fn nth(&self, index: usize) -> Self {
        Self {
            selector: format!("{} >> nth={}", self.selector, index),
            css: false,
        }
    }

    /// The first match in document order
    pub(crate) fn first(&self) -> Self {
        self.nth(0)
    }

    /// `child` searched within the subtree of this target
    pub(crate) fn within(&self, child: &Target) -> Self {
        Self {
            selector: format!("{} >> {}", self.selector, child.selector),
            css: false,
        }
    }

    /// The Playwright selector string
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Whether the selector is plain CSS (usable with `document.querySelector`)
    pub fn is_css(&self) -> bool {
        self.css
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.selector)
    }
}

// Playwright text engines take JSON-quoted strings
fn quote(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}

/// Element geometry in viewport CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Vertical midpoint
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

/// Response to a JavaScript dialog (alert, confirm, prompt)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    /// Press OK, optionally typing `prompt_text` into a prompt first
    Accept(Option<String>),
    /// Press Cancel
    Dismiss,
}

/// A completed download as delivered by the driver
#[async_trait]
pub trait DownloadArtifact: Send + Sync {
    /// File name the server suggested (Content-Disposition or `download` attribute)
    fn suggested_filename(&self) -> &str;

    /// Copies the downloaded file to `path`, waiting for the transfer to finish
    async fn save_as(&self, path: &Path) -> Result<()>;
}

/// An armed download listener.
///
/// Created by [`Driver::expect_download`] before the triggering action runs,
/// then resolved with [`PendingDownload::wait`].
#[must_use = "a pending download does nothing unless waited on"]
pub struct PendingDownload {
    receiver: oneshot::Receiver<Box<dyn DownloadArtifact>>,
    timeout: Duration,
}

impl PendingDownload {
    pub fn new(receiver: oneshot::Receiver<Box<dyn DownloadArtifact>>, timeout: Duration) -> Self {
        Self { receiver, timeout }
    }

    /// Waits for the download to arrive.
    ///
    /// Fails with [`Error::DownloadTimeout`] once the wait window elapses and
    /// with [`Error::DownloadAborted`] if the session dropped the listener.
    pub async fn wait(self) -> Result<Box<dyn DownloadArtifact>> {
        match tokio::time::timeout(self.timeout, self.receiver).await {
            Ok(Ok(artifact)) => Ok(artifact),
            Ok(Err(_)) => Err(Error::DownloadAborted),
            Err(_) => Err(Error::DownloadTimeout(self.timeout)),
        }
    }
}

impl std::fmt::Debug for PendingDownload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingDownload")
            .field("timeout", &self.timeout)
            .finish()
    }
}
