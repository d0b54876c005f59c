// Page objects
//
// One module per feature page of "The Internet". Every page object holds a
// clone of the session's SharedDriver plus the Targets it interacts with, and
// exposes intention-revealing async operations. Selectors never leave this
// module tree.

pub mod add_remove_elements;
pub mod challenging_dom;
pub mod file_download;
pub mod form_authentication;
pub mod horizontal_slide;
pub mod hovers;
pub mod inputs;
pub mod javascript_alerts;
pub mod jquery_ui;
pub mod jquery_ui_menus;
pub mod landing;
pub mod large_and_deep_dom;
pub mod status_codes;

pub use add_remove_elements::AddRemoveElementsPage;
pub use challenging_dom::{ChallengingButton, ChallengingDomPage};
pub use file_download::FileDownloadPage;
pub use form_authentication::FormAuthenticationPage;
pub use horizontal_slide::{Direction, HorizontalSlidePage};
pub use hovers::HoversPage;
pub use inputs::InputsPage;
pub use javascript_alerts::JavaScriptAlertsPage;
pub use jquery_ui::JQueryUiPage;
pub use jquery_ui_menus::{DOWNLOAD_LABELS, JQueryUiMenusPage};
pub use landing::{Feature, LandingPage};
pub use large_and_deep_dom::{Coordinate, LargeAndDeepDomPage, SiblingScope};
pub use status_codes::{STATUS_CODES, StatusCodesPage};

use crate::driver::{SharedDriver, Target};
use crate::error::Result;
use crate::navigation::Navigation;

/// Clicks `target` and hands back the resulting page transition.
///
/// The URL is sampled before the click so a timeout can report where the
/// page started from.
pub(crate) async fn click_to_navigate(
    driver: &SharedDriver,
    target: &Target,
    expected: &str,
) -> Result<Navigation> {
    let origin = driver.current_url();
    driver.click(target).await?;
    Ok(Navigation::new(driver.clone(), origin, expected.to_string()))
}

/// Repeats `action` `times` times, stopping at the first failure
pub(crate) async fn repeat<F, Fut>(times: u32, mut action: F) -> Result<()>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<()>>,
{
    for _ in 0..times {
        action().await?;
    }
    Ok(())
}

/// Text of `target` with surrounding whitespace removed; empty when the
/// element has no text node.
pub(crate) async fn trimmed_text(driver: &SharedDriver, target: &Target) -> Result<String> {
    Ok(driver
        .text_content(target)
        .await?
        .map(|text| text.trim().to_string())
        .unwrap_or_default())
}
