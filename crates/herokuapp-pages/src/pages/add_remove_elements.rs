use crate::driver::{SharedDriver, Target};
use crate::error::Result;
use crate::pages::repeat;

/// "Add/Remove Elements": an "Add Element" button that appends "Delete"
/// buttons, each of which removes itself.
#[derive(Clone)]
pub struct AddRemoveElementsPage {
    driver: SharedDriver,
    add_button: Target,
    delete_buttons: Target,
}

impl AddRemoveElementsPage {
    pub fn new(driver: SharedDriver) -> Self {
        Self {
            driver,
            add_button: Target::text("Add Element"),
            delete_buttons: Target::role("button", "Delete"),
        }
    }

    /// Clicks "Add Element" `count` times.
    pub async fn add_elements(&self, count: u32) -> Result<()> {
        tracing::debug!(count, "adding elements");
        repeat(count, || self.driver.click(&self.add_button)).await
    }

    /// Clicks the first remaining "Delete" button `count` times.
    ///
    /// Buttons are removed in document order. Asking for more removals than
    /// there are buttons fails once none are left.
    pub async fn remove_elements(&self, count: u32) -> Result<()> {
        tracing::debug!(count, "removing elements");
        let first_delete = self.delete_buttons.first();
        repeat(count, || self.driver.click(&first_delete)).await
    }

    /// Number of "Delete" buttons currently on the page
    pub async fn delete_button_count(&self) -> Result<usize> {
        self.driver.count(&self.delete_buttons).await
    }
}
