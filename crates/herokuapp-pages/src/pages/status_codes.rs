use crate::driver::SharedDriver;
use crate::error::Result;

/// Status codes the site serves example pages for
pub const STATUS_CODES: [u16; 4] = [200, 301, 404, 500];

/// "Status Codes": one page per code, each answered with that HTTP status.
#[derive(Clone)]
pub struct StatusCodesPage {
    driver: SharedDriver,
}

impl StatusCodesPage {
    pub fn new(driver: SharedDriver) -> Self {
        Self { driver }
    }

    /// Opens the example page for `code` and returns the status the server
    /// actually answered with.
    ///
    /// `None` means the navigation produced no response (e.g. same-document).
    pub async fn visit(&self, code: u16) -> Result<Option<u16>> {
        let status = self.driver.goto(&format!("/status_codes/{code}")).await?;
        tracing::debug!(code, ?status, "visited status code page");
        Ok(status)
    }
}
