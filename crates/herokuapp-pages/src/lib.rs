//! herokuapp-pages: Page objects for "The Internet" demo site
//!
//! This crate wraps the site's element selectors and interaction sequences
//! behind small async operations, driven through Playwright.
//!
//! # Examples
//!
//! ## Logging in
//!
//! ```ignore
//! use herokuapp_pages::{PlaywrightSession, SessionConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = PlaywrightSession::launch(SessionConfig::default()).await?;
//!     let pages = session.pages();
//!
//!     pages.open_home().await?;
//!     pages.navigate_to().form_authentication_page().await?.arrived().await?;
//!
//!     pages
//!         .on_form_authentication_page()
//!         .login("tomsmith", "SuperSecretPassword!")
//!         .await?
//!         .arrived()
//!         .await?;
//!
//!     let flash = pages.on_form_authentication_page().flash_message().await?;
//!     assert!(flash.contains("You logged into a secure area!"));
//!
//!     session.close().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Downloading a file
//!
//! ```ignore
//! use herokuapp_pages::{PlaywrightSession, SessionConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SessionConfig::default().with_downloads_dir("target/downloads");
//!     let session = PlaywrightSession::launch(config).await?;
//!     let pages = session.pages();
//!
//!     pages.open("/jqueryui/menu").await?;
//!     let path = pages.on_jquery_ui_menus_page().download_file("PDF").await?;
//!     assert!(path.exists());
//!
//!     std::fs::remove_file(path)?;
//!     session.close().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Random lookups in a large DOM
//!
//! ```ignore
//! use herokuapp_pages::SiblingScope;
//!
//! let page = pages.on_large_and_deep_dom_page();
//! let coordinate = page.define_sibling_to_get(SiblingScope::Table);
//! assert_eq!(page.get_value_from_table(coordinate).await?, coordinate.to_string());
//! ```

pub mod config;
mod download;
pub mod driver;
mod error;
mod manager;
pub mod navigation;
pub mod pages;
mod session;

#[cfg(test)]
pub(crate) mod testing;

// Re-export error types
pub use error::{Error, Result};

// Re-export the session and its configuration
pub use config::{BrowserKind, HttpCredentials, SessionConfig};
pub use session::PlaywrightSession;

// Re-export the driver seam
pub use driver::{BoundingBox, DialogAction, Driver, PendingDownload, SharedDriver, Target};
pub use navigation::Navigation;

// Re-export the registry and page objects
pub use manager::PageManager;
pub use pages::{
    AddRemoveElementsPage, ChallengingButton, ChallengingDomPage, Coordinate, DOWNLOAD_LABELS,
    Direction, Feature, FileDownloadPage, FormAuthenticationPage, HorizontalSlidePage, HoversPage,
    InputsPage, JQueryUiMenusPage, JQueryUiPage, JavaScriptAlertsPage, LandingPage,
    LargeAndDeepDomPage, STATUS_CODES, SiblingScope, StatusCodesPage,
};
