use crate::driver::{SharedDriver, Target};
use crate::error::{Error, Result};
use crate::navigation::Navigation;
use crate::pages::{click_to_navigate, trimmed_text};

/// "Hovers": three user avatars whose captions appear on hover.
#[derive(Clone)]
pub struct HoversPage {
    driver: SharedDriver,
    figures: Target,
}

impl HoversPage {
    pub fn new(driver: SharedDriver) -> Self {
        Self {
            driver,
            figures: Target::css(".figure"),
        }
    }

    // `user` is 1-based, matching the /users/<n> profile paths
    fn figure(&self, user: usize) -> Result<Target> {
        match user.checked_sub(1) {
            Some(index) => Ok(self.figures.nth(index)),
            None => Err(Error::InvalidUser(user)),
        }
    }

    /// Hovers avatar `user` (1-based) and follows its "View profile" link.
    ///
    /// Fails with [`Error::InvalidUser`] for `user == 0`.
    pub async fn open_profile(&self, user: usize) -> Result<Navigation> {
        let figure = self.figure(user)?;
        self.driver.hover(&figure).await?;

        let link = figure.within(&Target::css(".figcaption a"));
        let expected = format!("/users/{user}");
        click_to_navigate(&self.driver, &link, &expected).await
    }

    /// Caption heading of avatar `user` (e.g. "name: user1"), hovering it first.
    pub async fn caption(&self, user: usize) -> Result<String> {
        let figure = self.figure(user)?;
        self.driver.hover(&figure).await?;
        trimmed_text(&self.driver, &figure.within(&Target::css(".figcaption h5"))).await
    }
}
