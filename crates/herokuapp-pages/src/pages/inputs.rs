use crate::driver::{SharedDriver, Target};
use crate::error::Result;
use crate::pages::repeat;

/// "Inputs": a single number input.
#[derive(Clone)]
pub struct InputsPage {
    driver: SharedDriver,
    input: Target,
}

impl InputsPage {
    pub fn new(driver: SharedDriver) -> Self {
        Self {
            driver,
            input: Target::css("input"),
        }
    }

    /// Presses `key` on the keyboard `count` times.
    ///
    /// Keys go to whatever element has focus; call [`focus_input`](Self::focus_input)
    /// first to aim them at the number field.
    pub async fn perform_clicks(&self, count: u32, key: &str) -> Result<()> {
        tracing::debug!(count, key, "pressing key");
        repeat(count, || self.driver.press_key(key)).await
    }

    /// Clicks the number input so key presses land in it
    pub async fn focus_input(&self) -> Result<()> {
        self.driver.click(&self.input).await
    }

    /// Current text of the number input
    pub async fn input_value(&self) -> Result<String> {
        self.driver.input_value(&self.input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, RecordingDriver};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_perform_clicks_presses_key_each_time() {
        let driver = Arc::new(RecordingDriver::new());
        let page = InputsPage::new(driver.clone());

        page.focus_input().await.unwrap();
        page.perform_clicks(3, "ArrowUp").await.unwrap();

        let up = Call::Press("ArrowUp".to_string());
        assert_eq!(
            driver.calls(),
            vec![Call::Click("input".to_string()), up.clone(), up.clone(), up]
        );
    }

    #[tokio::test]
    async fn test_input_value() {
        let driver = Arc::new(RecordingDriver::new());
        driver.set_value("input", "42");
        let page = InputsPage::new(driver.clone());

        assert_eq!(page.input_value().await.unwrap(), "42");
    }
}
