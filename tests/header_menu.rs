// Component tests for the mobile navigation overlay.
//
// The overlay starts closed, opens from the menu trigger, and closes from
// the close button or by selecting any navigation link.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{cleanup, click, create_mount_point};
use wasm_bindgen_test::*;
use yew::platform::time::sleep;

use solar_transfer_support::components::header::Header;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn overlay_is_open(mount: &web_sys::Element) -> bool {
    mount
        .query_selector(".mobile-menu.open")
        .unwrap()
        .is_some()
}

#[wasm_bindgen_test]
async fn overlay_starts_closed() {
    let mount = create_mount_point();
    yew::Renderer::<Header>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    assert!(!overlay_is_open(&mount), "overlay should start closed");

    let overlay = mount
        .query_selector(".mobile-menu")
        .unwrap()
        .expect("overlay element should exist");
    assert_eq!(
        overlay.get_attribute("aria-hidden").as_deref(),
        Some("true"),
        "closed overlay should be hidden from the accessibility tree"
    );

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn trigger_opens_overlay_with_nav_links() {
    let mount = create_mount_point();
    yew::Renderer::<Header>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    click(&mount, ".menu-trigger");
    sleep(Duration::from_millis(10)).await;

    assert!(overlay_is_open(&mount), "trigger tap should open the overlay");

    let links = mount.query_selector_all(".mobile-menu-link").unwrap();
    assert_eq!(links.length(), 4, "all navigation links should be visible");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn close_button_closes_overlay() {
    let mount = create_mount_point();
    yew::Renderer::<Header>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    click(&mount, ".menu-trigger");
    sleep(Duration::from_millis(10)).await;
    assert!(overlay_is_open(&mount));

    click(&mount, ".mobile-menu-close");
    sleep(Duration::from_millis(10)).await;
    assert!(!overlay_is_open(&mount), "close tap should close the overlay");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn selecting_a_link_closes_overlay() {
    let mount = create_mount_point();
    yew::Renderer::<Header>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    click(&mount, ".menu-trigger");
    sleep(Duration::from_millis(10)).await;
    assert!(overlay_is_open(&mount));

    click(&mount, ".mobile-menu-link");
    sleep(Duration::from_millis(10)).await;
    assert!(
        !overlay_is_open(&mount),
        "selecting a navigation link should close the overlay"
    );

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn opening_twice_leaves_overlay_open() {
    let mount = create_mount_point();
    yew::Renderer::<Header>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    click(&mount, ".menu-trigger");
    sleep(Duration::from_millis(10)).await;
    click(&mount, ".menu-trigger");
    sleep(Duration::from_millis(10)).await;

    assert!(overlay_is_open(&mount), "double-open should stay open");

    cleanup(&mount);
}
