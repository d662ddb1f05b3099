// Component tests for the header's scroll-threshold style switch.
//
// The header is transparent at the top of the page, opaque past the
// threshold, and reverts when scrolled back up.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{cleanup, create_mount_point, dispatch_window_scroll};
use wasm_bindgen_test::*;
use yew::platform::time::sleep;

use solar_transfer_support::components::header::Header;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Make the page scrollable so `scroll_to` can actually move the viewport.
fn add_spacer() -> web_sys::Element {
    let document = gloo_utils::document();
    let spacer = document.create_element("div").unwrap();
    spacer.set_attribute("style", "height: 3000px;").unwrap();
    document.body().unwrap().append_child(&spacer).unwrap();
    spacer
}

fn scroll_to(y: f64) {
    gloo_utils::window().scroll_to_with_x_and_y(0.0, y);
    dispatch_window_scroll();
}

fn header_is_opaque(mount: &web_sys::Element) -> bool {
    mount
        .query_selector(".site-header.scrolled")
        .unwrap()
        .is_some()
}

#[wasm_bindgen_test]
async fn header_follows_the_scroll_threshold_both_ways() {
    let spacer = add_spacer();
    let mount = create_mount_point();

    scroll_to(0.0);
    yew::Renderer::<Header>::with_root(mount.clone()).render();
    sleep(Duration::from_millis(20)).await;

    assert!(
        !header_is_opaque(&mount),
        "header should start transparent at offset 0"
    );

    // Past the 20px threshold.
    scroll_to(25.0);
    sleep(Duration::from_millis(20)).await;
    assert!(
        header_is_opaque(&mount),
        "header should switch to the opaque treatment past the threshold"
    );

    // Back to the top: unlike the reveal latch this is fully reversible.
    scroll_to(0.0);
    sleep(Duration::from_millis(20)).await;
    assert!(
        !header_is_opaque(&mount),
        "header should revert to transparent at offset 0"
    );

    cleanup(&mount);
    cleanup(&spacer);
}

#[wasm_bindgen_test]
async fn offset_at_threshold_stays_transparent() {
    let spacer = add_spacer();
    let mount = create_mount_point();

    scroll_to(0.0);
    yew::Renderer::<Header>::with_root(mount.clone()).render();
    sleep(Duration::from_millis(20)).await;

    // The switch is strictly greater-than.
    scroll_to(20.0);
    sleep(Duration::from_millis(20)).await;
    assert!(!header_is_opaque(&mount));

    scroll_to(0.0);
    cleanup(&mount);
    cleanup(&spacer);
}
