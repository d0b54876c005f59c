// Integration tests for page transitions
//
// Covers the landing links, form login, the jQuery UI links, avatar profiles
// and direct status-code visits. Related checks share one browser launch.

use herokuapp_pages::{Error, Feature, STATUS_CODES};
use std::time::Duration;

mod common;

use test_server::TestServer;

/// Landing links reach their feature pages, including the redirecting one.
#[tokio::test]
async fn test_landing_links() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let server = TestServer::start().await;
    let dir = tempfile::tempdir()?;
    let (session, pages) = common::launch(&server.url(), dir.path()).await?;

    assert_eq!(pages.open_home().await?, Some(200));
    assert_eq!(session.page().title().await?, "The Internet");

    for feature in [
        Feature::AddRemoveElements,
        Feature::ChallengingDom,
        Feature::Inputs,
        Feature::JQueryUiMenus,
        Feature::FileDownload,
        Feature::NotificationMessages,
    ] {
        pages.open_home().await?;
        let url = pages.navigate_to().go(feature).await?.arrived().await?;
        assert!(
            url.ends_with(feature.path()),
            "{feature} should land on {}, got {url}",
            feature.path()
        );
    }

    // Shortcuts are the same as go()
    pages.open_home().await?;
    let url = pages.navigate_to().hovers_page().await?.arrived().await?;
    assert_eq!(url, format!("{}/hovers", server.url()));

    session.close().await?;
    server.shutdown();
    Ok(())
}

/// A navigation that never reaches its target reports where the page stayed.
#[tokio::test]
async fn test_navigation_timeout() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let server = TestServer::start().await;
    let dir = tempfile::tempdir()?;
    let (session, pages) = common::launch(&server.url(), dir.path()).await?;

    pages.open_home().await?;
    let result = pages
        .navigate_to()
        .inputs_page()
        .await?
        .with_timeout(Duration::from_millis(500))
        .arrived_at("/nowhere")
        .await;

    match result {
        Err(Error::NavigationTimeout { expected, .. }) => assert_eq!(expected, "/nowhere"),
        other => panic!("expected a navigation timeout, got {other:?}"),
    }

    session.close().await?;
    server.shutdown();
    Ok(())
}

/// Valid credentials reach the secure area; invalid ones stay on the login form.
#[tokio::test]
async fn test_form_authentication() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let server = TestServer::start().await;
    let dir = tempfile::tempdir()?;
    let (session, pages) = common::launch(&server.url(), dir.path()).await?;
    let form = pages.on_form_authentication_page();

    pages.open("/login").await?;
    form.login("tomsmith", "SuperSecretPassword!")
        .await?
        .arrived()
        .await?;
    assert!(
        form.flash_message()
            .await?
            .contains("You logged into a secure area!")
    );

    pages.open("/login").await?;
    form.login("nobody", "wrong")
        .await?
        .arrived_at("/login")
        .await?;
    assert!(form.flash_message().await?.contains("Your username is invalid!"));

    // The flash is shown once; a fresh form has none until the next attempt
    pages.open("/login").await?;
    form.login("tomsmith", "wrong")
        .await?
        .arrived_at("/login")
        .await?;
    assert!(form.flash_message().await?.contains("Your password is invalid!"));

    session.close().await?;
    server.shutdown();
    Ok(())
}

/// jQuery UI links, the menu's way back, and hover-revealed profile links.
#[tokio::test]
async fn test_link_pages() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let server = TestServer::start().await;
    let dir = tempfile::tempdir()?;
    let (session, pages) = common::launch(&server.url(), dir.path()).await?;

    pages.open("/jqueryui/menu").await?;
    pages
        .on_jquery_ui_menus_page()
        .click_on_back_to_jquery_ui_page()
        .await?
        .arrived()
        .await?;
    pages
        .on_jquery_ui_page()
        .click_on_menu_hypertext()
        .await?
        .arrived()
        .await?;

    pages.open("/hovers").await?;
    let hovers = pages.on_hovers_page();
    assert_eq!(hovers.caption(2).await?, "name: user2");
    let url = hovers.open_profile(3).await?.arrived().await?;
    assert!(url.ends_with("/users/3"));

    session.close().await?;
    server.shutdown();
    Ok(())
}

/// Visiting each status-code page reports that status.
#[tokio::test]
async fn test_status_codes() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let server = TestServer::start().await;
    let dir = tempfile::tempdir()?;
    let (session, pages) = common::launch(&server.url(), dir.path()).await?;

    for code in STATUS_CODES {
        assert_eq!(pages.on_status_codes_page().visit(code).await?, Some(code));
    }

    session.close().await?;
    server.shutdown();
    Ok(())
}
