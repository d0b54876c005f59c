use crate::driver::{SharedDriver, Target};
use crate::error::Result;
use crate::navigation::Navigation;
use crate::pages::click_to_navigate;

/// External jQuery UI home page the "JQuery UI" link points to
pub const JQUERY_UI_HOME: &str = "https://jqueryui.com/";

/// "JQuery UI" landing page at `/jqueryui`, reached from the menus demo.
#[derive(Clone)]
pub struct JQueryUiPage {
    driver: SharedDriver,
    menu_link: Target,
    jquery_ui_link: Target,
}

impl JQueryUiPage {
    pub fn new(driver: SharedDriver) -> Self {
        Self {
            driver,
            menu_link: Target::role("link", "Menu"),
            jquery_ui_link: Target::role("link", "JQuery UI"),
        }
    }

    /// Follows the "Menu" link back to the menus demo.
    pub async fn click_on_menu_hypertext(&self) -> Result<Navigation> {
        click_to_navigate(&self.driver, &self.menu_link, "/jqueryui/menu").await
    }

    /// Follows the "JQuery UI" link to the external jQuery UI site.
    pub async fn click_on_jquery_ui_hypertext(&self) -> Result<Navigation> {
        click_to_navigate(&self.driver, &self.jquery_ui_link, JQUERY_UI_HOME).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, RecordingDriver};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_links_and_expected_destinations() {
        let driver = Arc::new(RecordingDriver::new());
        let page = JQueryUiPage::new(driver.clone());

        let menu = page.click_on_menu_hypertext().await.unwrap();
        assert_eq!(menu.expected(), "/jqueryui/menu");
        menu.ignore();

        let home = page.click_on_jquery_ui_hypertext().await.unwrap();
        assert_eq!(home.expected(), "https://jqueryui.com/");
        home.ignore();

        assert_eq!(
            driver.calls(),
            vec![
                Call::Click(r#"internal:role=link[name="Menu"i]"#.to_string()),
                Call::Click(r#"internal:role=link[name="JQuery UI"i]"#.to_string()),
            ]
        );
    }
}
