// JavaScript Alerts - buttons that open alert, confirm and prompt dialogs
//
// Dialogs block the page until answered, so the answer is queued with the
// driver before the button is clicked. The page reports the outcome in
// #result.

use crate::driver::{DialogAction, SharedDriver, Target};
use crate::error::Result;
use crate::pages::trimmed_text;

#[derive(Clone)]
pub struct JavaScriptAlertsPage {
    driver: SharedDriver,
    alert_button: Target,
    confirm_button: Target,
    prompt_button: Target,
    result: Target,
}

impl JavaScriptAlertsPage {
    pub fn new(driver: SharedDriver) -> Self {
        Self {
            driver,
            alert_button: Target::role("button", "Click for JS Alert"),
            confirm_button: Target::role("button", "Click for JS Confirm"),
            prompt_button: Target::role("button", "Click for JS Prompt"),
            result: Target::css("#result"),
        }
    }

    /// Opens the alert and acknowledges it.
    pub async fn trigger_alert(&self) -> Result<()> {
        self.answer_with(&self.alert_button, DialogAction::Accept(None))
            .await
    }

    /// Opens the confirm dialog and presses OK (`accept`) or Cancel.
    pub async fn trigger_confirm(&self, accept: bool) -> Result<()> {
        let action = if accept {
            DialogAction::Accept(None)
        } else {
            DialogAction::Dismiss
        };
        self.answer_with(&self.confirm_button, action).await
    }

    /// Opens the prompt and types `answer` into it, or cancels it when
    /// `answer` is `None`.
    pub async fn trigger_prompt(&self, answer: Option<&str>) -> Result<()> {
        let action = match answer {
            Some(text) => DialogAction::Accept(Some(text.to_string())),
            None => DialogAction::Dismiss,
        };
        self.answer_with(&self.prompt_button, action).await
    }

    /// Outcome line below the buttons (e.g. "You clicked: Ok")
    pub async fn result(&self) -> Result<String> {
        trimmed_text(&self.driver, &self.result).await
    }

    async fn answer_with(&self, button: &Target, action: DialogAction) -> Result<()> {
        tracing::debug!(%button, ?action, "answering dialog");
        self.driver.handle_next_dialog(action).await?;
        self.driver.click(button).await
    }
}
