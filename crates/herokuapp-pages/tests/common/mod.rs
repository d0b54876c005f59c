// Shared setup for integration tests

#![allow(dead_code)]

use herokuapp_pages::{PageManager, PlaywrightSession, SessionConfig};
use std::sync::Arc;
use std::time::Duration;

/// Installs a test-friendly tracing subscriber once per test binary.
///
/// Honors `RUST_LOG`; defaults to warnings from this crate only.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("herokuapp_pages=warn")),
        )
        .with_test_writer()
        .try_init();
}

/// Launches a headless Chromium session against `base_url`, saving downloads
/// into `downloads_dir`.
pub async fn launch(
    base_url: &str,
    downloads_dir: &std::path::Path,
) -> anyhow::Result<(Arc<PlaywrightSession>, PageManager)> {
    let config = SessionConfig::new(base_url)?
        .with_downloads_dir(downloads_dir)
        .with_timeout(Duration::from_secs(10));
    let session = PlaywrightSession::launch(config).await?;
    let pages = session.pages();
    Ok((session, pages))
}
