// Landing page - the link index at "/"

use crate::driver::{SharedDriver, Target};
use crate::error::Result;
use crate::navigation::Navigation;
use crate::pages::click_to_navigate;

/// A feature page linked from the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    AbTesting,
    AddRemoveElements,
    BasicAuth,
    BrokenImages,
    ChallengingDom,
    Checkboxes,
    ContextMenu,
    DisappearingElements,
    DragAndDrop,
    Dropdown,
    DynamicContent,
    DynamicControls,
    DynamicLoading,
    EntryAd,
    ExitIntent,
    FileDownload,
    FileUpload,
    FloatingMenu,
    ForgotPassword,
    FormAuthentication,
    HorizontalSlider,
    Hovers,
    InfiniteScroll,
    Inputs,
    JQueryUiMenus,
    JavaScriptAlerts,
    KeyPresses,
    LargeAndDeepDom,
    MultipleWindows,
    NotificationMessages,
    RedirectLink,
    SecureFileDownload,
    ShadowDom,
    ShiftingContent,
    SlowResources,
    StatusCodes,
    Typos,
}

impl Feature {
    pub const ALL: [Feature; 37] = [
        Feature::AbTesting,
        Feature::AddRemoveElements,
        Feature::BasicAuth,
        Feature::BrokenImages,
        Feature::ChallengingDom,
        Feature::Checkboxes,
        Feature::ContextMenu,
        Feature::DisappearingElements,
        Feature::DragAndDrop,
        Feature::Dropdown,
        Feature::DynamicContent,
        Feature::DynamicControls,
        Feature::DynamicLoading,
        Feature::EntryAd,
        Feature::ExitIntent,
        Feature::FileDownload,
        Feature::FileUpload,
        Feature::FloatingMenu,
        Feature::ForgotPassword,
        Feature::FormAuthentication,
        Feature::HorizontalSlider,
        Feature::Hovers,
        Feature::InfiniteScroll,
        Feature::Inputs,
        Feature::JQueryUiMenus,
        Feature::JavaScriptAlerts,
        Feature::KeyPresses,
        Feature::LargeAndDeepDom,
        Feature::MultipleWindows,
        Feature::NotificationMessages,
        Feature::RedirectLink,
        Feature::SecureFileDownload,
        Feature::ShadowDom,
        Feature::ShiftingContent,
        Feature::SlowResources,
        Feature::StatusCodes,
        Feature::Typos,
    ];

    /// Link text on the landing page
    pub fn label(self) -> &'static str {
        match self {
            Feature::AbTesting => "A/B Testing",
            Feature::AddRemoveElements => "Add/Remove Elements",
            Feature::BasicAuth => "Basic Auth",
            Feature::BrokenImages => "Broken Images",
            Feature::ChallengingDom => "Challenging DOM",
            Feature::Checkboxes => "Checkboxes",
            Feature::ContextMenu => "Context Menu",
            Feature::DisappearingElements => "Disappearing Elements",
            Feature::DragAndDrop => "Drag and Drop",
            Feature::Dropdown => "Dropdown",
            Feature::DynamicContent => "Dynamic Content",
            Feature::DynamicControls => "Dynamic Controls",
            Feature::DynamicLoading => "Dynamic Loading",
            Feature::EntryAd => "Entry Ad",
            Feature::ExitIntent => "Exit Intent",
            Feature::FileDownload => "File Download",
            Feature::FileUpload => "File Upload",
            Feature::FloatingMenu => "Floating Menu",
            Feature::ForgotPassword => "Forgot Password",
            Feature::FormAuthentication => "Form Authentication",
            Feature::HorizontalSlider => "Horizontal Slider",
            Feature::Hovers => "Hovers",
            Feature::InfiniteScroll => "Infinite Scroll",
            Feature::Inputs => "Inputs",
            Feature::JQueryUiMenus => "JQuery UI Menus",
            Feature::JavaScriptAlerts => "JavaScript Alerts",
            Feature::KeyPresses => "Key Presses",
            Feature::LargeAndDeepDom => "Large & Deep DOM",
            Feature::MultipleWindows => "Multiple Windows",
            Feature::NotificationMessages => "Notification Messages",
            Feature::RedirectLink => "Redirect Link",
            Feature::SecureFileDownload => "Secure File Download",
            Feature::ShadowDom => "Shadow DOM",
            Feature::ShiftingContent => "Shifting Content",
            Feature::SlowResources => "Slow Resources",
            Feature::StatusCodes => "Status Codes",
            Feature::Typos => "Typos",
        }
    }

    /// Path the page settles on after following the link.
    ///
    /// Notification Messages redirects once, so its path is the redirect target.
    pub fn path(self) -> &'static str {
        match self {
            Feature::AbTesting => "/abtest",
            Feature::AddRemoveElements => "/add_remove_elements/",
            Feature::BasicAuth => "/basic_auth",
            Feature::BrokenImages => "/broken_images",
            Feature::ChallengingDom => "/challenging_dom",
            Feature::Checkboxes => "/checkboxes",
            Feature::ContextMenu => "/context_menu",
            Feature::DisappearingElements => "/disappearing_elements",
            Feature::DragAndDrop => "/drag_and_drop",
            Feature::Dropdown => "/dropdown",
            Feature::DynamicContent => "/dynamic_content",
            Feature::DynamicControls => "/dynamic_controls",
            Feature::DynamicLoading => "/dynamic_loading",
            Feature::EntryAd => "/entry_ad",
            Feature::ExitIntent => "/exit_intent",
            Feature::FileDownload => "/download",
            Feature::FileUpload => "/upload",
            Feature::FloatingMenu => "/floating_menu",
            Feature::ForgotPassword => "/forgot_password",
            Feature::FormAuthentication => "/login",
            Feature::HorizontalSlider => "/horizontal_slider",
            Feature::Hovers => "/hovers",
            Feature::InfiniteScroll => "/infinite_scroll",
            Feature::Inputs => "/inputs",
            Feature::JQueryUiMenus => "/jqueryui/menu",
            Feature::JavaScriptAlerts => "/javascript_alerts",
            Feature::KeyPresses => "/key_presses",
            Feature::LargeAndDeepDom => "/large",
            Feature::MultipleWindows => "/windows",
            Feature::NotificationMessages => "/notification_message_rendered",
            Feature::RedirectLink => "/redirector",
            Feature::SecureFileDownload => "/download_secure",
            Feature::ShadowDom => "/shadowdom",
            Feature::ShiftingContent => "/shifting_content",
            Feature::SlowResources => "/slow",
            Feature::StatusCodes => "/status_codes",
            Feature::Typos => "/typos",
        }
    }

    /// Locator of the feature's landing link.
    ///
    /// The two download links share the text "File Download", so they are
    /// located by `href` instead.
    pub fn link(self) -> Target {
        match self {
            Feature::FileDownload => Target::css(r#"[href="/download"]"#),
            Feature::SecureFileDownload => Target::css(r#"[href="/download_secure"]"#),
            other => Target::text(other.label()),
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// One shortcut per landing link, each equivalent to `go(Feature::X)`
macro_rules! feature_shortcuts {
    ($($method:ident => $feature:ident),* $(,)?) => {
        $(
            #[doc = concat!("Follows the landing link to [`Feature::", stringify!($feature), "`].")]
            pub async fn $method(&self) -> Result<Navigation> {
                self.go(Feature::$feature).await
            }
        )*
    };
}

/// The landing page and its links to every feature page.
#[derive(Clone)]
pub struct LandingPage {
    driver: SharedDriver,
}

impl LandingPage {
    pub fn new(driver: SharedDriver) -> Self {
        Self { driver }
    }

    /// Clicks the landing link for `feature`.
    ///
    /// The returned navigation expects [`Feature::path`].
    pub async fn go(&self, feature: Feature) -> Result<Navigation> {
        tracing::debug!(%feature, "following landing link");
        click_to_navigate(&self.driver, &feature.link(), feature.path()).await
    }

    feature_shortcuts! {
        ab_testing_page => AbTesting,
        add_remove_elements_page => AddRemoveElements,
        basic_auth_page => BasicAuth,
        broken_images_page => BrokenImages,
        challenging_dom_page => ChallengingDom,
        checkboxes_page => Checkboxes,
        context_menu_page => ContextMenu,
        disappearing_elements_page => DisappearingElements,
        drag_and_drop_page => DragAndDrop,
        dropdown_page => Dropdown,
        dynamic_content_page => DynamicContent,
        dynamic_controls_page => DynamicControls,
        dynamic_loading_page => DynamicLoading,
        entry_ad_page => EntryAd,
        exit_intent_page => ExitIntent,
        file_download_page => FileDownload,
        file_upload_page => FileUpload,
        floating_menu_page => FloatingMenu,
        forgot_password_page => ForgotPassword,
        form_authentication_page => FormAuthentication,
        horizontal_slide_page => HorizontalSlider,
        hovers_page => Hovers,
        infinite_scroll_page => InfiniteScroll,
        inputs_page => Inputs,
        jquery_ui_menus_page => JQueryUiMenus,
        javascript_alerts_page => JavaScriptAlerts,
        key_presses_page => KeyPresses,
        large_and_deep_dom_page => LargeAndDeepDom,
        multiple_windows_page => MultipleWindows,
        notification_messages_page => NotificationMessages,
        redirect_link_page => RedirectLink,
        secure_file_download_page => SecureFileDownload,
        shadow_dom_page => ShadowDom,
        shifting_content_page => ShiftingContent,
        slow_resources_page => SlowResources,
        status_codes_page => StatusCodes,
        typos_page => Typos,
    }
}
