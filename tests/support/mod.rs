// Shared test harness for component tests.
//
// Provides mount/cleanup helpers so individual test files stay focused on
// assertions rather than boilerplate.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use wasm_bindgen::JsCast;

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Fire a native click on the first element matching `selector` under
/// `mount`. Panics when the selector matches nothing.
pub fn click(mount: &web_sys::Element, selector: &str) {
    let element = mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"));
    element.unchecked_into::<web_sys::HtmlElement>().click();
}

/// Dispatch a plain `scroll` event on `window` so registered listeners run
/// without waiting for a real scroll.
pub fn dispatch_window_scroll() {
    let event = web_sys::Event::new("scroll").unwrap();
    gloo_utils::window().dispatch_event(&event).unwrap();
}
