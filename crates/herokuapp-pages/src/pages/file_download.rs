use crate::download::capture_download;
use crate::driver::{SharedDriver, Target};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// "File Download" (`/download`) and "Secure File Download"
/// (`/download_secure`): a list of links, one per uploaded file.
///
/// The file list changes as visitors upload files, so callers pick a name
/// that is currently listed.
#[derive(Clone)]
pub struct FileDownloadPage {
    driver: SharedDriver,
    downloads_dir: PathBuf,
}

impl FileDownloadPage {
    pub fn new(driver: SharedDriver, downloads_dir: impl Into<PathBuf>) -> Self {
        Self {
            driver,
            downloads_dir: downloads_dir.into(),
        }
    }

    pub fn downloads_dir(&self) -> &Path {
        &self.downloads_dir
    }

    /// Downloads the file whose link text is exactly `file_name` and returns
    /// where it was saved.
    pub async fn download(&self, file_name: &str) -> Result<PathBuf> {
        tracing::debug!(file_name, "downloading listed file");
        let link = Target::role_exact("link", file_name);
        capture_download(self.driver.as_ref(), &self.downloads_dir, || {
            self.driver.click(&link)
        })
        .await
    }
}
