use crate::driver::{SharedDriver, Target};
use crate::error::Result;
use crate::navigation::Navigation;
use crate::pages::{click_to_navigate, trimmed_text};

/// Path of the secure area a successful login lands on
pub const SECURE_AREA_PATH: &str = "/secure";

/// "Form Authentication": a username/password form at `/login`.
#[derive(Clone)]
pub struct FormAuthenticationPage {
    driver: SharedDriver,
    username: Target,
    password: Target,
    login_button: Target,
    flash: Target,
}

impl FormAuthenticationPage {
    pub fn new(driver: SharedDriver) -> Self {
        Self {
            driver,
            username: Target::role("textbox", "Username"),
            password: Target::role("textbox", "Password"),
            login_button: Target::role("button", "Login"),
            flash: Target::css("#flash"),
        }
    }

    /// Fills in the credentials verbatim (empty strings included) and submits.
    ///
    /// The returned navigation expects the secure area. A rejected login
    /// reloads `/login` instead, so callers checking the error banner should
    /// resolve it with `arrived_at("/login")` or drop it with `ignore()`.
    pub async fn login(&self, username: &str, password: &str) -> Result<Navigation> {
        tracing::debug!(username, "logging in");
        self.driver.fill(&self.username, username).await?;
        self.driver.fill(&self.password, password).await?;
        click_to_navigate(&self.driver, &self.login_button, SECURE_AREA_PATH).await
    }

    /// Text of the flash banner shown after a login attempt
    pub async fn flash_message(&self) -> Result<String> {
        trimmed_text(&self.driver, &self.flash).await
    }
}
