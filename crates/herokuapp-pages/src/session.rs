// PlaywrightSession - the production Driver
//
// One session owns one Playwright server, one browser, one context and one
// page. Page objects see it only through the Driver trait.
//
// Playwright delivers downloads and dialogs as page events. The session
// registers a single handler for each at launch and routes events to whatever
// the page objects armed beforehand:
// - downloads go to the oldest waiting PendingDownload
// - dialogs get the oldest queued DialogAction (or are dismissed)

use crate::config::{BrowserKind, SessionConfig};
use crate::driver::{BoundingBox, DialogAction, Driver, DownloadArtifact, PendingDownload, Target};
use crate::error::{Error, Result};
use crate::manager::PageManager;
use async_trait::async_trait;
use parking_lot::Mutex;
use playwright_rs::protocol::{
    Browser, BrowserContext, BrowserContextOptions, ClickOptions, Dialog, Download, FillOptions,
    GotoOptions, HoverOptions, Page, Playwright,
};
use playwright_rs::LaunchOptions;
use std::collections::{HashMap, VecDeque};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;

// Geometry of the first element matching a CSS selector, or null
const BOUNDING_BOX_JS: &str = r#"(selector) => {
    const element = document.querySelector(selector);
    if (!element) return null;
    const rect = element.getBoundingClientRect();
    return { x: rect.x, y: rect.y, width: rect.width, height: rect.height };
}"#;

type DownloadWaiter = oneshot::Sender<Box<dyn DownloadArtifact>>;

/// Listeners armed by page objects ahead of the triggering action
#[derive(Default)]
struct Armed {
    downloads: Mutex<VecDeque<DownloadWaiter>>,
    dialogs: Mutex<VecDeque<DialogAction>>,
}

impl Armed {
    fn deliver_download(&self, download: Download) {
        let waiter = {
            let mut waiters = self.downloads.lock();
            // PendingDownloads dropped without waiting leave closed senders behind
            waiters.retain(|waiter| !waiter.is_closed());
            waiters.pop_front()
        };

        match waiter {
            Some(waiter) => {
                if waiter.send(Box::new(BrowserDownload(download))).is_err() {
                    tracing::debug!("download listener closed before delivery");
                }
            }
            None => tracing::warn!(
                suggested = download.suggested_filename(),
                "download arrived with no armed listener"
            ),
        }
    }

    async fn answer_dialog(&self, dialog: Dialog) -> playwright_rs::Result<()> {
        let action = self.dialogs.lock().pop_front();
        match action {
            Some(DialogAction::Accept(text)) => {
                tracing::debug!(kind = dialog.type_(), message = dialog.message(), "accepting dialog");
                dialog.accept(text.as_deref()).await
            }
            Some(DialogAction::Dismiss) => {
                tracing::debug!(kind = dialog.type_(), message = dialog.message(), "dismissing dialog");
                dialog.dismiss().await
            }
            None => {
                tracing::warn!(
                    kind = dialog.type_(),
                    message = dialog.message(),
                    "dialog opened with no queued response, dismissing"
                );
                dialog.dismiss().await
            }
        }
    }
}

/// Download delivered by Playwright
struct BrowserDownload(Download);

#[async_trait]
impl DownloadArtifact for BrowserDownload {
    fn suggested_filename(&self) -> &str {
        self.0.suggested_filename()
    }

    async fn save_as(&self, path: &Path) -> Result<()> {
        // The Playwright server resolves relative paths against its own cwd
        let path = std::path::absolute(path)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        self.0.save_as(&path).await?;
        Ok(())
    }
}

/// A browser session driving "The Internet".
///
/// # Example
///
/// ```ignore
/// use herokuapp_pages::{PlaywrightSession, SessionConfig};
///
/// let session = PlaywrightSession::launch(SessionConfig::from_env()?).await?;
/// let pages = session.pages();
///
/// pages.open_home().await?;
/// pages.navigate_to().inputs_page().await?.arrived().await?;
/// pages.on_inputs_page().focus_input().await?;
///
/// session.close().await?;
/// ```
pub struct PlaywrightSession {
    playwright: Playwright,
    browser: Browser,
    context: BrowserContext,
    page: Page,
    config: SessionConfig,
    armed: Arc<Armed>,
}

impl PlaywrightSession {
    /// Starts Playwright, launches the configured browser and opens a fresh
    /// context and page.
    ///
    /// The configuration is validated first, so a zero timeout fails with
    /// [`Error::InvalidConfig`] before any browser is started.
    pub async fn launch(config: SessionConfig) -> Result<Arc<Self>> {
        config.validate()?;
        tracing::debug!(
            browser = ?config.browser,
            headless = config.headless,
            base_url = %config.base_url,
            "launching session"
        );

        let playwright = Playwright::launch().await?;
        let browser_type = match config.browser {
            BrowserKind::Chromium => playwright.chromium(),
            BrowserKind::Firefox => playwright.firefox(),
            BrowserKind::Webkit => playwright.webkit(),
        };
        let browser = browser_type
            .launch_with_options(LaunchOptions::new().headless(config.headless))
            .await?;

        let mut options = BrowserContextOptions::builder()
            .accept_downloads(true)
            .base_url(config.base_url.to_string());
        if let Some(credentials) = &config.http_credentials {
            let mut headers = HashMap::new();
            headers.insert(
                "Authorization".to_string(),
                credentials.authorization_header(),
            );
            options = options.extra_http_headers(headers);
        }

        let context = browser.new_context_with_options(options.build()).await?;
        let page = context.new_page().await?;

        let armed = Arc::new(Armed::default());

        let downloads = Arc::clone(&armed);
        page.on_download(move |download| {
            let armed = Arc::clone(&downloads);
            async move {
                armed.deliver_download(download);
                Ok(())
            }
        })
        .await?;

        let dialogs = Arc::clone(&armed);
        page.on_dialog(move |dialog| {
            let armed = Arc::clone(&dialogs);
            async move { armed.answer_dialog(dialog).await }
        })
        .await?;

        Ok(Arc::new(Self {
            playwright,
            browser,
            context,
            page,
            config,
            armed,
        }))
    }

    /// The underlying Playwright page, for harness-side assertions
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// The underlying browser context
    pub fn context(&self) -> &BrowserContext {
        &self.context
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Builds the page registry over this session, saving downloads into
    /// the configured directory.
    pub fn pages(self: &Arc<Self>) -> PageManager {
        PageManager::with_downloads_dir(self.clone(), self.config.downloads_dir.clone())
    }

    /// Closes the context and browser and shuts the Playwright server down.
    ///
    /// Pending download waits fail with
    /// [`Error::DownloadAborted`](crate::Error::DownloadAborted).
    pub async fn close(&self) -> Result<()> {
        self.armed.downloads.lock().clear();
        self.armed.dialogs.lock().clear();

        self.context.close().await?;
        self.browser.close().await?;
        self.playwright.shutdown().await?;
        tracing::debug!("session closed");
        Ok(())
    }

    fn timeout_ms(&self) -> f64 {
        self.config.timeout_ms as f64
    }

    async fn locate(&self, target: &Target) -> playwright_rs::protocol::Locator {
        self.page.locator(target.selector()).await
    }
}

#[async_trait]
impl Driver for PlaywrightSession {
    async fn goto(&self, url: &str) -> Result<Option<u16>> {
        let url = self.config.resolve(url)?;
        tracing::debug!(%url, "goto");

        let response = self
            .page
            .goto(url.as_str(), Some(GotoOptions::new().timeout(self.config.timeout())))
            .await?;
        Ok(response.map(|response| response.status()))
    }

    fn current_url(&self) -> String {
        self.page.url()
    }

    fn timeout(&self) -> Duration {
        self.config.timeout()
    }

    async fn click(&self, target: &Target) -> Result<()> {
        let options = ClickOptions::builder().timeout(self.timeout_ms()).build();
        self.locate(target).await.click(Some(options)).await?;
        Ok(())
    }

    async fn hover(&self, target: &Target) -> Result<()> {
        let options = HoverOptions::builder().timeout(self.timeout_ms()).build();
        self.locate(target).await.hover(Some(options)).await?;
        Ok(())
    }

    async fn fill(&self, target: &Target, value: &str) -> Result<()> {
        let options = FillOptions::builder().timeout(self.timeout_ms()).build();
        self.locate(target).await.fill(value, Some(options)).await?;
        Ok(())
    }

    async fn text_content(&self, target: &Target) -> Result<Option<String>> {
        Ok(self.locate(target).await.text_content().await?)
    }

    async fn input_value(&self, target: &Target) -> Result<String> {
        Ok(self.locate(target).await.input_value(None).await?)
    }

    async fn count(&self, target: &Target) -> Result<usize> {
        Ok(self.locate(target).await.count().await?)
    }

    async fn bounding_box(&self, target: &Target) -> Result<BoundingBox> {
        if !target.is_css() {
            return Err(Error::UnsupportedTarget {
                operation: "bounding_box".to_string(),
                selector: target.selector().to_string(),
            });
        }

        let rect: Option<BoundingBox> = self
            .page
            .evaluate(BOUNDING_BOX_JS, Some(&target.selector()))
            .await?;
        rect.ok_or_else(|| Error::ElementNotFound(target.selector().to_string()))
    }

    async fn press_key(&self, key: &str) -> Result<()> {
        self.page.keyboard().press(key, None).await?;
        Ok(())
    }

    async fn mouse_move(&self, x: f64, y: f64) -> Result<()> {
        self.page
            .mouse()
            .move_to(x.round() as i32, y.round() as i32, None)
            .await?;
        Ok(())
    }

    async fn mouse_down(&self) -> Result<()> {
        self.page.mouse().down(None).await?;
        Ok(())
    }

    async fn mouse_up(&self) -> Result<()> {
        self.page.mouse().up(None).await?;
        Ok(())
    }

    async fn expect_download(&self) -> Result<PendingDownload> {
        let (sender, receiver) = oneshot::channel();
        self.armed.downloads.lock().push_back(sender);
        Ok(PendingDownload::new(receiver, self.config.timeout()))
    }

    async fn handle_next_dialog(&self, action: DialogAction) -> Result<()> {
        self.armed.dialogs.lock().push_back(action);
        Ok(())
    }
}

impl std::fmt::Debug for PlaywrightSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaywrightSession")
            .field("config", &self.config)
            .field("url", &self.page.url())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_launch_rejects_zero_timeout() {
        let config = SessionConfig::default().with_timeout(Duration::ZERO);

        let result = PlaywrightSession::launch(config).await;
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }
}
