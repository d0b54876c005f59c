// Navigation - explicit completion of page transitions
//
// Operations that move the browser to another page (following a link,
// submitting a form, jumping to an anchor) return a Navigation instead of
// (). The caller either waits for it to settle or drops it with ignore(),
// so fire-and-forget is always a visible choice.

use crate::driver::SharedDriver;
use crate::error::{Error, Result};
use std::time::{Duration, Instant};
use url::Url;

/// Interval between URL checks while waiting for a navigation
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// A page transition that has been triggered but not yet confirmed.
///
/// # Example
///
/// ```ignore
/// let pages = session.pages();
/// pages.open_home().await?;
///
/// // Wait for the landing link to reach /inputs
/// pages.navigate_to().inputs_page().await?.arrived().await?;
///
/// // Or state the expectation explicitly
/// pages
///     .on_challenging_dom_page()
///     .edit_table_row(3)
///     .await?
///     .arrived_at("/challenging_dom#edit")
///     .await?;
/// ```
#[must_use = "resolve the navigation with `arrived`/`arrived_at`, or drop it with `ignore`"]
pub struct Navigation {
    driver: SharedDriver,
    origin: String,
    expected: String,
    timeout: Duration,
}

impl Navigation {
    /// Creates a navigation token; `origin` is the URL seen before the action ran.
    pub(crate) fn new(driver: SharedDriver, origin: String, expected: String) -> Self {
        let timeout = driver.timeout();
        Self {
            driver,
            origin,
            expected,
            timeout,
        }
    }

    /// Overrides the driver's wait window for this navigation.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Path the action leads to
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Waits until the page reaches the expected path.
    ///
    /// Returns the URL the page settled on.
    pub async fn arrived(self) -> Result<String> {
        let expected = self.expected.clone();
        self.arrived_at(&expected).await
    }

    /// Waits until the page URL matches `expected`.
    ///
    /// Absolute URLs must match in full. Relative expectations are compared
    /// against the path, query and fragment of the current URL; a trailing
    /// `/` is ignored.
    pub async fn arrived_at(self, expected: &str) -> Result<String> {
        self.poll(expected, |url| url_matches(url, expected)).await
    }

    /// Explicitly abandons the navigation without waiting for it.
    pub fn ignore(self) {
        tracing::debug!(origin = %self.origin, expected = %self.expected, "navigation not awaited");
    }

    async fn poll<F>(self, description: &str, matches: F) -> Result<String>
    where
        F: Fn(&str) -> bool,
    {
        let start = Instant::now();

        loop {
            let url = self.driver.current_url();
            if matches(&url) {
                tracing::debug!(%url, origin = %self.origin, elapsed = ?start.elapsed(), "navigation settled");
                return Ok(url);
            }

            if start.elapsed() >= self.timeout {
                return Err(Error::NavigationTimeout {
                    expected: description.to_string(),
                    actual: url,
                    timeout: self.timeout,
                });
            }

            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}

impl std::fmt::Debug for Navigation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigation")
            .field("origin", &self.origin)
            .field("expected", &self.expected)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Compares a page URL against an expected absolute URL or relative location.
pub(crate) fn url_matches(current: &str, expected: &str) -> bool {
    if let Ok(expected_url) = Url::parse(expected) {
        return Url::parse(current)
            .map(|current_url| current_url == expected_url)
            .unwrap_or(false);
    }

    let Ok(current_url) = Url::parse(current) else {
        return false;
    };

    let mut location = current_url.path().to_string();
    if let Some(query) = current_url.query() {
        location.push('?');
        location.push_str(query);
    }
    if let Some(fragment) = current_url.fragment() {
        location.push('#');
        location.push_str(fragment);
    }

    trim_slash(&location) == trim_slash(expected)
}

fn trim_slash(location: &str) -> &str {
    match location.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => location,
    }
}
