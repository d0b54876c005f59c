// JQuery UI Menus - a hover-driven nested menu
//
// Menu layout: Enabled > Downloads > {PDF, CSV, Excel}, and
// Enabled > Back to JQuery UI. Submenus only open while their parent is
// hovered, so every action walks the hover path from the top.

use crate::download::capture_download;
use crate::driver::{SharedDriver, Target};
use crate::error::Result;
use crate::navigation::Navigation;
use crate::pages::click_to_navigate;
use std::path::{Path, PathBuf};

/// Labels of the download entries under Enabled > Downloads
pub const DOWNLOAD_LABELS: [&str; 3] = ["PDF", "CSV", "Excel"];

#[derive(Clone)]
pub struct JQueryUiMenusPage {
    driver: SharedDriver,
    downloads_dir: PathBuf,
    enabled: Target,
    downloads: Target,
    back_to_jquery_ui: Target,
}

impl JQueryUiMenusPage {
    pub fn new(driver: SharedDriver, downloads_dir: impl Into<PathBuf>) -> Self {
        Self {
            driver,
            downloads_dir: downloads_dir.into(),
            enabled: Target::role("link", "Enabled"),
            downloads: Target::role("link", "Downloads"),
            back_to_jquery_ui: Target::text("Back to JQuery UI"),
        }
    }

    /// Directory captured files are saved into
    pub fn downloads_dir(&self) -> &Path {
        &self.downloads_dir
    }

    /// Downloads the file behind the menu entry `label` ("PDF", "CSV" or
    /// "Excel") and returns where it was saved.
    ///
    /// The file is written to `<downloads_dir>/<suggested filename>`; removing
    /// it afterwards is up to the caller.
    pub async fn download_file(&self, label: &str) -> Result<PathBuf> {
        tracing::debug!(label, dir = %self.downloads_dir.display(), "downloading from menu");
        let entry = Target::role("link", label);

        capture_download(self.driver.as_ref(), &self.downloads_dir, || async {
            self.driver.hover(&self.enabled).await?;
            self.driver.hover(&self.downloads).await?;
            self.driver.click(&entry).await
        })
        .await
    }

    /// Opens Enabled and follows "Back to JQuery UI".
    pub async fn click_on_back_to_jquery_ui_page(&self) -> Result<Navigation> {
        self.driver.hover(&self.enabled).await?;
        click_to_navigate(&self.driver, &self.back_to_jquery_ui, "/jqueryui").await
    }
}
