// Session configuration
//
// Everything a PlaywrightSession needs to know before launching: where the
// site lives, which browser to drive, where downloads go and how long the
// driver may wait. Values come from defaults, JSON, or HEROKUAPP_* variables.

use crate::error::{Error, Result};
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Public instance of "The Internet" demo site
pub const DEFAULT_BASE_URL: &str = "https://the-internet.herokuapp.com";

/// Directory downloads are saved into unless configured otherwise
pub const DEFAULT_DOWNLOADS_DIR: &str = "./downloads";

/// Default driver wait window in milliseconds (Playwright's standard default)
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Browser engine to launch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserKind {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

impl std::str::FromStr for BrowserKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chromium" | "chrome" => Ok(BrowserKind::Chromium),
            "firefox" => Ok(BrowserKind::Firefox),
            "webkit" | "safari" => Ok(BrowserKind::Webkit),
            other => Err(Error::InvalidConfig(format!(
                "unknown browser '{other}' (expected chromium, firefox or webkit)"
            ))),
        }
    }
}

/// HTTP basic-auth credentials sent with every request of the session
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpCredentials {
    pub username: String,
    pub password: String,
}

impl HttpCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Value for the `Authorization` request header
    pub fn authorization_header(&self) -> String {
        let token = base64::engine::general_purpose::STANDARD
            .encode(format!("{}:{}", self.username, self.password));
        format!("Basic {token}")
    }
}

impl std::fmt::Debug for HttpCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Options for launching a [`PlaywrightSession`](crate::PlaywrightSession)
///
/// # Example
///
/// ```ignore
/// use herokuapp_pages::{BrowserKind, SessionConfig};
///
/// let config = SessionConfig::default()
///     .with_browser(BrowserKind::Firefox)
///     .with_headless(false)
///     .with_credentials("admin", "admin");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionConfig {
    /// Root URL every relative path is resolved against
    pub base_url: Url,
    /// Browser engine to launch
    pub browser: BrowserKind,
    /// Run without a visible window
    pub headless: bool,
    /// Directory captured downloads are saved into
    pub downloads_dir: PathBuf,
    /// Wait window for actions, navigations and downloads
    pub timeout_ms: u64,
    /// Basic-auth credentials, if the session should send them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_credentials: Option<HttpCredentials>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL"),
            browser: BrowserKind::default(),
            headless: true,
            downloads_dir: PathBuf::from(DEFAULT_DOWNLOADS_DIR),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            http_credentials: None,
        }
    }
}

impl SessionConfig {
    /// Creates a configuration pointing at `base_url` with every other option defaulted
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self::default().with_base_url(Url::parse(base_url)?))
    }

    /// Parses a configuration from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SessionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `HEROKUAPP_*` variables from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup
    ///
    /// Recognised keys: `HEROKUAPP_BASE_URL`, `HEROKUAPP_BROWSER`,
    /// `HEROKUAPP_HEADLESS`, `HEROKUAPP_DOWNLOADS_DIR`, `HEROKUAPP_TIMEOUT_MS`,
    /// `HEROKUAPP_USERNAME` and `HEROKUAPP_PASSWORD`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("HEROKUAPP_BASE_URL") {
            config.base_url = Url::parse(&url)?;
        }
        if let Some(browser) = lookup("HEROKUAPP_BROWSER") {
            config.browser = browser.parse()?;
        }
        if let Some(headless) = lookup("HEROKUAPP_HEADLESS") {
            config.headless = parse_bool("HEROKUAPP_HEADLESS", &headless)?;
        }
        if let Some(dir) = lookup("HEROKUAPP_DOWNLOADS_DIR") {
            config.downloads_dir = PathBuf::from(dir);
        }
        if let Some(timeout) = lookup("HEROKUAPP_TIMEOUT_MS") {
            config.timeout_ms = timeout.trim().parse().map_err(|_| {
                Error::InvalidConfig(format!("HEROKUAPP_TIMEOUT_MS must be an integer, got '{timeout}'"))
            })?;
        }
        match (lookup("HEROKUAPP_USERNAME"), lookup("HEROKUAPP_PASSWORD")) {
            (Some(username), Some(password)) => {
                config.http_credentials = Some(HttpCredentials::new(username, password));
            }
            (None, None) => {}
            _ => {
                return Err(Error::InvalidConfig(
                    "HEROKUAPP_USERNAME and HEROKUAPP_PASSWORD must be set together".to_string(),
                ));
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_browser(mut self, browser: BrowserKind) -> Self {
        self.browser = browser;
        self
    }

    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn with_downloads_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.downloads_dir = dir.into();
        self
    }

    /// Sets the wait window, rounding sub-millisecond values up to 1 ms.
    ///
    /// A zero duration is kept as zero and rejected by
    /// [`validate`](Self::validate) when the session launches.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let millis = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self.timeout_ms = if millis == 0 && !timeout.is_zero() { 1 } else { millis };
        self
    }

    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.http_credentials = Some(HttpCredentials::new(username, password));
        self
    }

    /// Driver wait window as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Resolves `path` against the base URL; absolute URLs are returned as-is
    pub fn resolve(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Checks the options a session cannot run without
    pub fn validate(&self) -> Result<()> {
        if self.timeout_ms == 0 {
            return Err(Error::InvalidConfig("timeout must be greater than zero".to_string()));
        }
        if self.base_url.cannot_be_a_base() {
            return Err(Error::InvalidConfig(format!(
                "base URL '{}' cannot have relative paths joined to it",
                self.base_url
            )));
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::InvalidConfig(format!("{key} must be a boolean, got '{other}'"))),
    }
}
