//! Fixed page header. Tracks the scroll offset to swap between the
//! transparent and opaque treatments, and owns the mobile navigation
//! overlay.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::line_button::{ButtonSize, LineButton};
use crate::state::{is_scrolled, MenuState};

const NAV_LINKS: [(&str, &str); 4] = [
    ("お悩み", "#problems"),
    ("流れ", "#process"),
    ("強み", "#reasons"),
    ("実績", "#voice"),
];

#[function_component(Header)]
pub fn header() -> Html {
    let scrolled = use_state_eq(|| false);
    let menu = use_state_eq(MenuState::default);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let scrolled = scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(offset) = win.scroll_y() {
                                    scrolled.set(is_scrolled(offset));
                                }
                            }
                        }
                    });
                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    // Initial check so a reload mid-page starts opaque
                    if let Ok(offset) = window.scroll_y() {
                        scrolled.set(is_scrolled(offset));
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let open_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set(menu.open());
        })
    };

    // Also used on the overlay links: selecting one closes the overlay and
    // lets the anchor navigate.
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu.close());
        })
    };

    html! {
        <>
            <header class={classes!("site-header", (*scrolled).then_some("scrolled"))}>
                <div class="header-inner">
                    <a href="#" class="brand">
                        <span class="brand-mark"><i class="fa-solid fa-sun"></i></span>
                        <span class="brand-text">
                            <span class="brand-sub">{"行政書士による一括代行"}</span>
                            <span class="brand-title">{"太陽光名義変更サポート"}</span>
                        </span>
                    </a>

                    <nav class="desktop-nav">
                        { for NAV_LINKS.iter().map(|&(name, href)| html! {
                            <a href={href} class="nav-link">{ name }</a>
                        }) }
                        <LineButton size={ButtonSize::Small} text="相談する" />
                    </nav>

                    <button class="menu-trigger" aria-label="メニューを開く" onclick={open_menu}>
                        <i class="fa-solid fa-bars"></i>
                    </button>
                </div>
            </header>

            <div
                class={classes!("mobile-menu", menu.is_open().then_some("open"))}
                aria-hidden={(!menu.is_open()).to_string()}
            >
                <div class="mobile-menu-top">
                    <button
                        class="mobile-menu-close"
                        aria-label="メニューを閉じる"
                        onclick={close_menu.clone()}
                    >
                        <i class="fa-solid fa-xmark"></i>
                    </button>
                </div>
                <nav class="mobile-menu-links">
                    { for NAV_LINKS.iter().map(|&(name, href)| html! {
                        <a href={href} class="mobile-menu-link" onclick={close_menu.clone()}>
                            { name }
                        </a>
                    }) }
                    <div class="mobile-menu-cta" onclick={close_menu.clone()}>
                        <LineButton size={ButtonSize::Large} text="LINEで相談する" />
                    </div>
                </nav>
            </div>

            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 1.25rem 0;
                        background: transparent;
                        border-bottom: 1px solid transparent;
                        transition: all 0.5s ease;
                    }

                    .site-header.scrolled {
                        padding: 0.75rem 0;
                        background: rgba(255, 255, 255, 0.9);
                        backdrop-filter: blur(16px);
                        border-bottom-color: #e2e8f0;
                    }

                    .header-inner {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .brand {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        text-decoration: none;
                    }

                    .brand-mark {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 0.75rem;
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(8px);
                        color: #fff;
                        font-size: 1.25rem;
                        transition: all 0.3s ease;
                    }

                    .site-header.scrolled .brand-mark {
                        background: #f1f5f9;
                        color: #1e3a8a;
                    }

                    .brand-text {
                        display: flex;
                        flex-direction: column;
                        line-height: 1.2;
                        color: #fff;
                        transition: color 0.3s ease;
                    }

                    .site-header.scrolled .brand-text {
                        color: #1e293b;
                    }

                    .brand-sub {
                        font-size: 0.625rem;
                        font-weight: 700;
                        opacity: 0.8;
                        letter-spacing: 0.05em;
                    }

                    .brand-title {
                        font-size: 1.125rem;
                        font-weight: 700;
                        letter-spacing: -0.01em;
                    }

                    .desktop-nav {
                        display: none;
                        align-items: center;
                        gap: 2rem;
                    }

                    .nav-link {
                        position: relative;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: rgba(255, 255, 255, 0.9);
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }

                    .site-header.scrolled .nav-link {
                        color: #475569;
                    }

                    .nav-link::after {
                        content: '';
                        position: absolute;
                        bottom: -4px;
                        left: 0;
                        width: 0;
                        height: 2px;
                        background: #f59e0b;
                        transition: width 0.3s ease;
                    }

                    .nav-link:hover {
                        color: #f59e0b;
                    }

                    .nav-link:hover::after {
                        width: 100%;
                    }

                    .menu-trigger {
                        display: block;
                        padding: 0.5rem;
                        border: none;
                        border-radius: 0.5rem;
                        background: transparent;
                        color: #fff;
                        font-size: 1.25rem;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }

                    .menu-trigger:hover {
                        background: rgba(255, 255, 255, 0.1);
                    }

                    .site-header.scrolled .menu-trigger {
                        color: #1e293b;
                    }

                    .site-header.scrolled .menu-trigger:hover {
                        background: #f1f5f9;
                    }

                    @media (min-width: 1024px) {
                        .desktop-nav {
                            display: flex;
                        }

                        .menu-trigger {
                            display: none;
                        }
                    }

                    .mobile-menu {
                        position: fixed;
                        inset: 0;
                        z-index: 60;
                        display: flex;
                        flex-direction: column;
                        background: #fff;
                        transform: translateX(100%);
                        visibility: hidden;
                        transition:
                            transform 0.4s cubic-bezier(0.32, 0.72, 0.35, 1),
                            visibility 0s linear 0.4s;
                    }

                    .mobile-menu.open {
                        transform: translateX(0);
                        visibility: visible;
                        transition: transform 0.4s cubic-bezier(0.32, 0.72, 0.35, 1);
                    }

                    @media (min-width: 768px) {
                        .mobile-menu {
                            display: none;
                        }
                    }

                    .mobile-menu-top {
                        display: flex;
                        justify-content: flex-end;
                        padding: 1.25rem;
                        border-bottom: 1px solid #f1f5f9;
                    }

                    .mobile-menu-close {
                        padding: 0.5rem 0.75rem;
                        border: none;
                        border-radius: 9999px;
                        background: #f8fafc;
                        color: #64748b;
                        font-size: 1.25rem;
                        cursor: pointer;
                    }

                    .mobile-menu-links {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        padding: 1.5rem;
                        text-align: center;
                    }

                    .mobile-menu-link {
                        padding: 0.5rem 0;
                        color: #1e293b;
                        font-size: 1.25rem;
                        font-weight: 700;
                        text-decoration: none;
                    }

                    .mobile-menu-cta {
                        margin-top: 2rem;
                    }
                "#}
            </style>
        </>
    }
}
