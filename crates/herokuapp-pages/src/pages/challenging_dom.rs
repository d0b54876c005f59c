// Challenging DOM - buttons with random ids and a table of edit/delete links
//
// Button ids change on every load, so buttons are located by their exact
// class attribute. Table rows are addressed by position, with the header row
// at index 0.

use crate::driver::{SharedDriver, Target};
use crate::error::Result;
use crate::navigation::Navigation;
use crate::pages::{click_to_navigate, repeat};

/// The three colored buttons above the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChallengingButton {
    /// Plain button (`class="button"`)
    Blue,
    /// Alert button (`class="button alert"`)
    Red,
    /// Success button (`class="button success"`)
    Green,
}

impl ChallengingButton {
    fn class(self) -> &'static str {
        match self {
            ChallengingButton::Blue => "button",
            ChallengingButton::Red => "button alert",
            ChallengingButton::Green => "button success",
        }
    }
}

#[derive(Clone)]
pub struct ChallengingDomPage {
    driver: SharedDriver,
    rows: Target,
    edit_link: Target,
    delete_link: Target,
}

impl ChallengingDomPage {
    pub fn new(driver: SharedDriver) -> Self {
        Self {
            driver,
            rows: Target::css("table tr"),
            edit_link: Target::css(r##"a[href="#edit"]"##),
            delete_link: Target::css(r##"a[href="#delete"]"##),
        }
    }

    /// Locator of one of the colored buttons
    pub fn button(&self, kind: ChallengingButton) -> Target {
        Target::css(format!(r#"[class="{}"]"#, kind.class()))
    }

    /// Clicks `button` `count` times.
    ///
    /// Each click reloads the buttons with fresh ids and labels, so the
    /// button is located anew on every iteration.
    pub async fn click_button_several_times(
        &self,
        button: ChallengingButton,
        count: u32,
    ) -> Result<()> {
        tracing::debug!(?button, count, "clicking challenging button");
        let target = self.button(button);
        repeat(count, || self.driver.click(&target)).await
    }

    /// Clicks the "edit" link of table row `row` (zero-based; 0 is the header).
    pub async fn edit_table_row(&self, row: usize) -> Result<Navigation> {
        tracing::debug!(row, "editing table row");
        let link = self.rows.nth(row).within(&self.edit_link);
        click_to_navigate(&self.driver, &link, "/challenging_dom#edit").await
    }

    /// Clicks the "delete" link of table row `row` (zero-based; 0 is the header).
    pub async fn delete_table_row(&self, row: usize) -> Result<Navigation> {
        tracing::debug!(row, "deleting table row");
        let link = self.rows.nth(row).within(&self.delete_link);
        click_to_navigate(&self.driver, &link, "/challenging_dom#delete").await
    }
}
