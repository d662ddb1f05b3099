//! Always-visible contact bar pinned to the bottom of small viewports.

use yew::prelude::*;

use crate::components::line_button::{ButtonSize, LineButton};

#[function_component(StickyBar)]
pub fn sticky_bar() -> Html {
    html! {
        <div class="sticky-bar">
            <LineButton
                size={ButtonSize::Large}
                text="LINEで無料相談"
                sub_text="1分で完了・相談無料"
            />
            <style>
                {r#"
                    .sticky-bar {
                        position: fixed;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        z-index: 40;
                        padding: 1rem;
                        padding-bottom: calc(1rem + env(safe-area-inset-bottom));
                        background: rgba(255, 255, 255, 0.92);
                        backdrop-filter: blur(16px);
                        border-top: 1px solid #e2e8f0;
                        box-shadow: 0 -4px 20px -5px rgba(0, 0, 0, 0.1);
                    }

                    @media (min-width: 768px) {
                        .sticky-bar {
                            display: none;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
