// Component tests for the viewport-triggered reveal.
//
// A block below the fold stays hidden, reveals the first time it enters the
// viewport, and never reverts once revealed.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{cleanup, create_mount_point, dispatch_window_scroll};
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

use solar_transfer_support::components::fade_in::{FadeIn, RevealDirection};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// A reveal block parked well below the fold.
#[function_component(BelowFold)]
fn below_fold() -> Html {
    html! {
        <div style="height: 6000px;">
            <div style="height: 5500px;"></div>
            <FadeIn>
                <p>{"below the fold"}</p>
            </FadeIn>
        </div>
    }
}

fn reveal_class(mount: &web_sys::Element) -> String {
    mount
        .query_selector(".reveal")
        .unwrap()
        .expect("reveal block should exist")
        .class_name()
}

fn scroll_to(y: f64) {
    gloo_utils::window().scroll_to_with_x_and_y(0.0, y);
    dispatch_window_scroll();
}

#[wasm_bindgen_test]
async fn block_below_fold_reveals_once_and_latches() {
    let mount = create_mount_point();

    scroll_to(0.0);
    yew::Renderer::<BelowFold>::with_root(mount.clone()).render();
    sleep(Duration::from_millis(200)).await;

    assert!(
        !reveal_class(&mount).contains("revealed"),
        "block below the fold should stay hidden"
    );

    // Bring it into view.
    scroll_to(5300.0);
    sleep(Duration::from_millis(300)).await;
    assert!(
        reveal_class(&mount).contains("revealed"),
        "block should reveal on first viewport entry"
    );

    // Leaving the viewport must not replay the animation.
    scroll_to(0.0);
    sleep(Duration::from_millis(300)).await;
    assert!(
        reveal_class(&mount).contains("revealed"),
        "reveal is a one-shot latch and must not revert"
    );

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn block_in_view_reveals_on_mount() {
    #[function_component(InView)]
    fn in_view() -> Html {
        html! {
            <FadeIn>
                <p>{"already visible"}</p>
            </FadeIn>
        }
    }

    let mount = create_mount_point();
    scroll_to(0.0);
    yew::Renderer::<InView>::with_root(mount.clone()).render();
    sleep(Duration::from_millis(300)).await;

    assert!(
        reveal_class(&mount).contains("revealed"),
        "a block already in the viewport should reveal shortly after mount"
    );

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn direction_and_delay_are_reflected_in_markup() {
    #[function_component(Styled)]
    fn styled() -> Html {
        html! {
            <FadeIn direction={RevealDirection::Left} delay_ms={300}>
                <p>{"staggered"}</p>
            </FadeIn>
        }
    }

    let mount = create_mount_point();
    yew::Renderer::<Styled>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let block = mount
        .query_selector(".reveal")
        .unwrap()
        .expect("reveal block should exist");
    assert!(block.class_name().contains("reveal-left"));

    let style = block.get_attribute("style").unwrap_or_default();
    assert!(
        style.contains("transition-delay: 300ms"),
        "per-site delay should be applied inline, got: {style}"
    );

    cleanup(&mount);
}
