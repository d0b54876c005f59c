// Recording driver for unit tests
//
// Logs every driver call in order and answers from scripted state, so page
// object tests can assert on the exact interaction sequence without a browser.

use crate::driver::{BoundingBox, DialogAction, Driver, DownloadArtifact, PendingDownload, Target};
use crate::error::Result;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::Path;
use std::time::Duration;
use tokio::sync::oneshot;

/// One driver interaction, as observed by the recording driver
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Goto(String),
    Click(String),
    Hover(String),
    Fill(String, String),
    TextContent(String),
    InputValue(String),
    Count(String),
    BoundingBox(String),
    Press(String),
    MouseMove(f64, f64),
    MouseDown,
    MouseUp,
    ExpectDownload,
    Dialog(DialogAction),
}

struct FakeArtifact {
    name: String,
    body: Vec<u8>,
}

#[async_trait]
impl DownloadArtifact for FakeArtifact {
    fn suggested_filename(&self) -> &str {
        &self.name
    }

    async fn save_as(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, &self.body).await?;
        Ok(())
    }
}

pub(crate) struct RecordingDriver {
    calls: Mutex<Vec<Call>>,
    url: Mutex<String>,
    timeout: Duration,
    texts: Mutex<HashMap<String, String>>,
    values: Mutex<HashMap<String, String>>,
    counts: Mutex<HashMap<String, usize>>,
    boxes: Mutex<HashMap<String, BoundingBox>>,
    statuses: Mutex<HashMap<String, u16>>,
    missing: Mutex<HashSet<String>>,
    // selector -> URL the page moves to when it is clicked
    links: Mutex<HashMap<String, String>>,
    // selector -> suggested filename of the download its click starts
    download_triggers: Mutex<HashMap<String, String>>,
    download_waiters: Mutex<VecDeque<oneshot::Sender<Box<dyn DownloadArtifact>>>>,
}

impl RecordingDriver {
    pub(crate) fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            url: Mutex::new("about:blank".to_string()),
            timeout: Duration::from_millis(200),
            texts: Mutex::new(HashMap::new()),
            values: Mutex::new(HashMap::new()),
            counts: Mutex::new(HashMap::new()),
            boxes: Mutex::new(HashMap::new()),
            statuses: Mutex::new(HashMap::new()),
            missing: Mutex::new(HashSet::new()),
            links: Mutex::new(HashMap::new()),
            download_triggers: Mutex::new(HashMap::new()),
            download_waiters: Mutex::new(VecDeque::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub(crate) fn set_url(&self, url: &str) {
        *self.url.lock() = url.to_string();
    }

    pub(crate) fn set_text(&self, selector: &str, text: &str) {
        self.texts.lock().insert(selector.to_string(), text.to_string());
    }

    pub(crate) fn set_value(&self, selector: &str, value: &str) {
        self.values.lock().insert(selector.to_string(), value.to_string());
    }

    pub(crate) fn set_count(&self, selector: &str, count: usize) {
        self.counts.lock().insert(selector.to_string(), count);
    }

    pub(crate) fn set_box(&self, selector: &str, bounding_box: BoundingBox) {
        self.boxes.lock().insert(selector.to_string(), bounding_box);
    }

    pub(crate) fn set_status(&self, url: &str, status: u16) {
        self.statuses.lock().insert(url.to_string(), status);
    }

    /// Makes every action on `selector` fail like a missing element
    pub(crate) fn set_missing(&self, selector: &str) {
        self.missing.lock().insert(selector.to_string());
    }

    pub(crate) fn link_to(&self, selector: &str, url: &str) {
        self.links.lock().insert(selector.to_string(), url.to_string());
    }

    pub(crate) fn download_on_click(&self, selector: &str, suggested_filename: &str) {
        self.download_triggers
            .lock()
            .insert(selector.to_string(), suggested_filename.to_string());
    }

    fn record(&self, call: Call) {
        self.calls.lock().push(call);
    }

    fn check_present(&self, target: &Target) -> Result<()> {
        if self.missing.lock().contains(target.selector()) {
            return Err(playwright_rs::Error::ElementNotFound(target.selector().to_string()).into());
        }
        Ok(())
    }
}

#[async_trait]
impl Driver for RecordingDriver {
    async fn goto(&self, url: &str) -> Result<Option<u16>> {
        self.record(Call::Goto(url.to_string()));
        self.set_url(url);
        Ok(self.statuses.lock().get(url).copied())
    }

    fn current_url(&self) -> String {
        self.url.lock().clone()
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn click(&self, target: &Target) -> Result<()> {
        self.record(Call::Click(target.selector().to_string()));
        self.check_present(target)?;

        if let Some(url) = self.links.lock().get(target.selector()).cloned() {
            self.set_url(&url);
        }

        let download = self.download_triggers.lock().get(target.selector()).cloned();
        if let Some(name) = download {
            // Downloads nobody is listening for are lost, as in a real browser
            if let Some(waiter) = self.download_waiters.lock().pop_front() {
                let artifact = FakeArtifact {
                    body: format!("contents of {name}").into_bytes(),
                    name,
                };
                let _ = waiter.send(Box::new(artifact));
            }
        }
        Ok(())
    }

    async fn hover(&self, target: &Target) -> Result<()> {
        self.record(Call::Hover(target.selector().to_string()));
        self.check_present(target)
    }

    async fn fill(&self, target: &Target, value: &str) -> Result<()> {
        self.record(Call::Fill(target.selector().to_string(), value.to_string()));
        self.check_present(target)
    }

    async fn text_content(&self, target: &Target) -> Result<Option<String>> {
        self.record(Call::TextContent(target.selector().to_string()));
        self.check_present(target)?;
        Ok(self.texts.lock().get(target.selector()).cloned())
    }

    async fn input_value(&self, target: &Target) -> Result<String> {
        self.record(Call::InputValue(target.selector().to_string()));
        self.check_present(target)?;
        Ok(self
            .values
            .lock()
            .get(target.selector())
            .cloned()
            .unwrap_or_default())
    }

    async fn count(&self, target: &Target) -> Result<usize> {
        self.record(Call::Count(target.selector().to_string()));
        Ok(self
            .counts
            .lock()
            .get(target.selector())
            .copied()
            .unwrap_or(0))
    }

    async fn bounding_box(&self, target: &Target) -> Result<BoundingBox> {
        self.record(Call::BoundingBox(target.selector().to_string()));
        self.boxes
            .lock()
            .get(target.selector())
            .copied()
            .ok_or_else(|| crate::error::Error::ElementNotFound(target.selector().to_string()))
    }

    async fn press_key(&self, key: &str) -> Result<()> {
        self.record(Call::Press(key.to_string()));
        Ok(())
    }

    async fn mouse_move(&self, x: f64, y: f64) -> Result<()> {
        self.record(Call::MouseMove(x, y));
        Ok(())
    }

    async fn mouse_down(&self) -> Result<()> {
        self.record(Call::MouseDown);
        Ok(())
    }

    async fn mouse_up(&self) -> Result<()> {
        self.record(Call::MouseUp);
        Ok(())
    }

    async fn expect_download(&self) -> Result<PendingDownload> {
        self.record(Call::ExpectDownload);
        let (tx, rx) = oneshot::channel();
        self.download_waiters.lock().push_back(tx);
        Ok(PendingDownload::new(rx, self.timeout))
    }

    async fn handle_next_dialog(&self, action: DialogAction) -> Result<()> {
        self.record(Call::Dialog(action));
        Ok(())
    }
}
