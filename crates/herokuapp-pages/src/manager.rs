// PageManager - one instance of every page object over one session
//
// Page objects are built eagerly and never change afterwards; the accessors
// only hand out references. Each test builds its own manager from its own
// session, so nothing is shared between tests.

use crate::config::DEFAULT_DOWNLOADS_DIR;
use crate::driver::SharedDriver;
use crate::error::Result;
use crate::pages::{
    AddRemoveElementsPage, ChallengingDomPage, FileDownloadPage, FormAuthenticationPage,
    HorizontalSlidePage, HoversPage, InputsPage, JQueryUiMenusPage, JQueryUiPage,
    JavaScriptAlertsPage, LandingPage, LargeAndDeepDomPage, StatusCodesPage,
};
use std::path::PathBuf;

/// Registry of page objects bound to one driver session.
///
/// # Example
///
/// ```ignore
/// let pages = PageManager::new(driver);
/// pages.open_home().await?;
///
/// pages.navigate_to().add_remove_elements_page().await?.arrived().await?;
/// pages.on_add_remove_elements_page().add_elements(3).await?;
/// ```
#[derive(Clone)]
pub struct PageManager {
    driver: SharedDriver,
    landing: LandingPage,
    add_remove_elements: AddRemoveElementsPage,
    form_authentication: FormAuthenticationPage,
    challenging_dom: ChallengingDomPage,
    large_and_deep_dom: LargeAndDeepDomPage,
    jquery_ui_menus: JQueryUiMenusPage,
    jquery_ui: JQueryUiPage,
    horizontal_slide: HorizontalSlidePage,
    inputs: InputsPage,
    status_codes: StatusCodesPage,
    javascript_alerts: JavaScriptAlertsPage,
    file_download: FileDownloadPage,
    hovers: HoversPage,
}

impl PageManager {
    /// Builds every page object, saving downloads into `./downloads`.
    pub fn new(driver: SharedDriver) -> Self {
        Self::with_downloads_dir(driver, DEFAULT_DOWNLOADS_DIR)
    }

    /// Builds every page object, saving downloads into `downloads_dir`.
    pub fn with_downloads_dir(driver: SharedDriver, downloads_dir: impl Into<PathBuf>) -> Self {
        let downloads_dir = downloads_dir.into();
        Self {
            landing: LandingPage::new(driver.clone()),
            add_remove_elements: AddRemoveElementsPage::new(driver.clone()),
            form_authentication: FormAuthenticationPage::new(driver.clone()),
            challenging_dom: ChallengingDomPage::new(driver.clone()),
            large_and_deep_dom: LargeAndDeepDomPage::new(driver.clone()),
            jquery_ui_menus: JQueryUiMenusPage::new(driver.clone(), downloads_dir.clone()),
            jquery_ui: JQueryUiPage::new(driver.clone()),
            horizontal_slide: HorizontalSlidePage::new(driver.clone()),
            inputs: InputsPage::new(driver.clone()),
            status_codes: StatusCodesPage::new(driver.clone()),
            javascript_alerts: JavaScriptAlertsPage::new(driver.clone()),
            file_download: FileDownloadPage::new(driver.clone(), downloads_dir),
            hovers: HoversPage::new(driver.clone()),
            driver,
        }
    }

    /// Navigates the session to `path` (relative to the base URL) and
    /// returns the main response status, if any.
    pub async fn open(&self, path: &str) -> Result<Option<u16>> {
        self.driver.goto(path).await
    }

    /// Opens the landing page
    pub async fn open_home(&self) -> Result<Option<u16>> {
        self.open("/").await
    }

    /// The session the page objects drive
    pub fn driver(&self) -> &SharedDriver {
        &self.driver
    }

    pub fn navigate_to(&self) -> &LandingPage {
        &self.landing
    }

    pub fn on_add_remove_elements_page(&self) -> &AddRemoveElementsPage {
        &self.add_remove_elements
    }

    pub fn on_form_authentication_page(&self) -> &FormAuthenticationPage {
        &self.form_authentication
    }

    pub fn on_challenging_dom_page(&self) -> &ChallengingDomPage {
        &self.challenging_dom
    }

    pub fn on_large_and_deep_dom_page(&self) -> &LargeAndDeepDomPage {
        &self.large_and_deep_dom
    }

    pub fn on_jquery_ui_menus_page(&self) -> &JQueryUiMenusPage {
        &self.jquery_ui_menus
    }

    pub fn on_jquery_ui_page(&self) -> &JQueryUiPage {
        &self.jquery_ui
    }

    pub fn on_horizontal_slide_page(&self) -> &HorizontalSlidePage {
        &self.horizontal_slide
    }

    pub fn on_inputs_page(&self) -> &InputsPage {
        &self.inputs
    }

    pub fn on_status_codes_page(&self) -> &StatusCodesPage {
        &self.status_codes
    }

    pub fn on_javascript_alerts_page(&self) -> &JavaScriptAlertsPage {
        &self.javascript_alerts
    }

    pub fn on_file_download_page(&self) -> &FileDownloadPage {
        &self.file_download
    }

    pub fn on_hovers_page(&self) -> &HoversPage {
        &self.hovers
    }
}

impl std::fmt::Debug for PageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageManager")
            .field("url", &self.driver.current_url())
            .field("downloads_dir", &self.file_download.downloads_dir())
            .finish_non_exhaustive()
    }
}
