// Integration test for the full page composition.
//
// The page assembles header, the ordered section list, footer, and the
// sticky contact bar; every call-to-action points at the same external
// contact endpoint.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{cleanup, create_mount_point};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::platform::time::sleep;

use solar_transfer_support::config;
use solar_transfer_support::pages::home::Home;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn page_renders_all_sections_in_order() {
    let mount = create_mount_point();
    yew::Renderer::<Home>::with_root(mount.clone()).render();
    sleep(Duration::from_millis(20)).await;

    for selector in [
        ".site-header",
        ".hero",
        "#problems",
        "#process",
        ".solution",
        "#reasons",
        "#voice",
        ".story",
        "#contact",
        ".site-footer",
        ".sticky-bar",
    ] {
        assert!(
            mount.query_selector(selector).unwrap().is_some(),
            "page should contain {selector}"
        );
    }

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn every_cta_targets_the_contact_endpoint() {
    let mount = create_mount_point();
    yew::Renderer::<Home>::with_root(mount.clone()).render();
    sleep(Duration::from_millis(20)).await;

    let buttons = mount.query_selector_all(".line-button").unwrap();
    assert!(
        buttons.length() >= 4,
        "hero, problems callout, cta, and sticky bar should each carry a button"
    );

    for i in 0..buttons.length() {
        let button: web_sys::Element = buttons.get(i).unwrap().unchecked_into();
        assert_eq!(
            button.get_attribute("href").as_deref(),
            Some(config::LINE_CONTACT_URL),
            "every call-to-action should open the contact endpoint"
        );
    }

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn testimonials_render_all_voices() {
    let mount = create_mount_point();
    yew::Renderer::<Home>::with_root(mount.clone()).render();
    sleep(Duration::from_millis(20)).await;

    let cards = mount.query_selector_all(".voice-card").unwrap();
    assert_eq!(cards.length(), 3);

    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("お客様の声"));
    assert!(text.contains("ご依頼は3ステップ"));

    cleanup(&mount);
}
