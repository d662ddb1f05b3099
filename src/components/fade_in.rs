//! Scroll-triggered entrance animation. Wrapped blocks start transparent and
//! offset from their resting position, then animate in the first time they
//! enter the viewport. The latch is single-fire: leaving and re-entering the
//! viewport later does nothing.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::state::Reveal;

/// Axis the block slides in from. `Up` rises from below, `Left`/`Right`
/// slide in horizontally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevealDirection {
    #[default]
    Up,
    Left,
    Right,
}

impl RevealDirection {
    fn class(self) -> &'static str {
        match self {
            Self::Up => "reveal-up",
            Self::Left => "reveal-left",
            Self::Right => "reveal-right",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub children: Children,
    /// Delay before the entrance transition starts, for staggering siblings.
    #[prop_or(0)]
    pub delay_ms: u32,
    #[prop_or_default]
    pub direction: RevealDirection,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state_eq(Reveal::default);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let cleanup: Box<dyn FnOnce()> = match node.cast::<Element>() {
                    Some(element) => watch_entry(element, revealed),
                    None => Box::new(|| ()),
                };
                move || cleanup()
            },
            (),
        );
    }

    let mut style = format!(
        "transition-duration: {}ms; transition-timing-function: {};",
        config::REVEAL_DURATION_MS,
        config::REVEAL_EASING
    );
    if props.delay_ms > 0 {
        style.push_str(&format!(" transition-delay: {}ms;", props.delay_ms));
    }

    html! {
        <div
            ref={node}
            class={classes!(
                "reveal",
                props.direction.class(),
                revealed.is_revealed().then_some("revealed"),
                props.class.clone()
            )}
            {style}
        >
            { for props.children.iter() }
        </div>
    }
}

/// Arm the viewport-entry watch for `element`. Prefers IntersectionObserver;
/// hosts without it fall back to a periodic position check.
fn watch_entry(element: Element, revealed: UseStateHandle<Reveal>) -> Box<dyn FnOnce()> {
    match observe_intersection(&element, revealed.clone()) {
        Ok(cleanup) => cleanup,
        Err(_) => {
            warn!("IntersectionObserver unavailable, falling back to periodic viewport checks");
            poll_position(element, revealed)
        }
    }
}

fn observe_intersection(
    element: &Element,
    revealed: UseStateHandle<Reveal>,
) -> Result<Box<dyn FnOnce()>, JsValue> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    revealed.set(revealed.trigger());
                    // Single-fire: stop watching after the first entry.
                    observer.disconnect();
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&format!("-{}px", config::REVEAL_MARGIN_PX));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);

    Ok(Box::new(move || {
        observer.disconnect();
        drop(callback);
    }))
}

/// Manual substitute for hosts without IntersectionObserver: check the
/// node's bounding rect against the (inset) viewport on a timer, and stop
/// the timer once the latch fires.
fn poll_position(element: Element, revealed: UseStateHandle<Reveal>) -> Box<dyn FnOnce()> {
    let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

    let interval = Interval::new(config::REVEAL_POLL_INTERVAL_MS, {
        let handle = handle.clone();
        move || {
            let Some(window) = web_sys::window() else {
                return;
            };
            let viewport = window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0);
            let rect = element.get_bounding_client_rect();
            if entered_viewport(
                rect.top(),
                rect.bottom(),
                viewport,
                f64::from(config::REVEAL_MARGIN_PX),
            ) {
                revealed.set(revealed.trigger());
                drop(handle.borrow_mut().take());
            }
        }
    });
    handle.borrow_mut().replace(interval);

    Box::new(move || {
        drop(handle.borrow_mut().take());
    })
}

/// True once any part of the block lies inside the viewport inset by
/// `margin` on both edges.
fn entered_viewport(top: f64, bottom: f64, viewport_height: f64, margin: f64) -> bool {
    bottom > margin && top < viewport_height - margin
}

#[cfg(test)]
mod tests {
    use super::entered_viewport;

    #[test]
    fn below_the_fold_has_not_entered() {
        assert!(!entered_viewport(900.0, 1100.0, 800.0, 50.0));
    }

    #[test]
    fn entry_fires_only_past_the_margin() {
        // Top edge just inside the viewport but not past the 50px inset.
        assert!(!entered_viewport(760.0, 960.0, 800.0, 50.0));
        // Past the inset.
        assert!(entered_viewport(740.0, 940.0, 800.0, 50.0));
    }

    #[test]
    fn block_above_the_viewport_has_left() {
        assert!(!entered_viewport(-300.0, -60.0, 800.0, 50.0));
    }

    #[test]
    fn block_filling_the_viewport_counts() {
        assert!(entered_viewport(-100.0, 900.0, 800.0, 50.0));
    }
}
