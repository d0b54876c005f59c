// Download capture
//
// Downloads follow a strict listen-before-trigger order: the listener is armed
// through Driver::expect_download, then the triggering action runs, then the
// download is awaited and saved. Arming after the click would race the
// browser and could miss the event entirely.

use crate::driver::Driver;
use crate::error::Result;
use std::future::Future;
use std::path::{Path, PathBuf};

/// Runs `trigger` with a download listener armed and saves the resulting
/// file to `dir/<suggested filename>`.
///
/// Returns the path of the saved file. Fails with
/// [`Error::DownloadTimeout`](crate::Error::DownloadTimeout) when no download
/// arrives within the driver's wait window.
pub(crate) async fn capture_download<F, Fut>(
    driver: &dyn Driver,
    dir: &Path,
    trigger: F,
) -> Result<PathBuf>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let pending = driver.expect_download().await?;
    trigger().await?;

    let artifact = pending.wait().await?;
    let file_name = local_file_name(artifact.suggested_filename());
    let path = dir.join(file_name);

    tracing::debug!(
        suggested = artifact.suggested_filename(),
        path = %path.display(),
        "saving download"
    );
    artifact.save_as(&path).await?;

    Ok(path)
}

// Servers control the suggested name; keep only its final component so the
// file cannot land outside the downloads directory.
fn local_file_name(suggested: &str) -> &str {
    suggested
        .rsplit(['/', '\\'])
        .find(|part| !part.is_empty() && *part != "." && *part != "..")
        .unwrap_or("download")
}
