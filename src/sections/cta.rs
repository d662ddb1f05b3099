use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::components::line_button::{ButtonSize, LineButton};

const ASSURANCES: [&str; 3] = ["全国対応（郵送）", "相談無料", "土日祝も受付"];

#[function_component(Cta)]
pub fn cta() -> Html {
    html! {
        <section id="contact" class="cta">
            <div class="cta-background">
                <div class="cta-blob cta-blob-blue pulse"></div>
                <div class="cta-blob cta-blob-amber"></div>
            </div>

            <div class="section-inner cta-body">
                <FadeIn>
                    <div class="cta-pill">{"＼ まずは無料相談から ／"}</div>

                    <h2>
                        {"面倒な手続きは、"}<br />
                        {"LINEで"}<span class="cta-accent">{"丸投げ"}</span>{"してください。"}
                    </h2>

                    <p class="cta-lead">
                        {"行政書士本人が直接対応します。"}<br />
                        {"「何から始めればいいか分からない」状態でも大丈夫です。"}
                    </p>

                    <div class="cta-actions">
                        <div class="cta-button-scale">
                            <LineButton
                                size={ButtonSize::Large}
                                text="LINEで無料相談を始める"
                                sub_text="24時間受付中・しつこい営業なし"
                            />
                        </div>

                        <div class="cta-assurances">
                            { for ASSURANCES.iter().map(|&item| html! {
                                <span><i class="fa-solid fa-check"></i>{ item }</span>
                            }) }
                        </div>
                    </div>
                </FadeIn>
            </div>

            <style>
                {r#"
                    .cta {
                        position: relative;
                        padding: 6rem 0;
                        background: #1e3a8a;
                        overflow: hidden;
                    }

                    .cta-background {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                    }

                    .cta-blob {
                        position: absolute;
                        width: 500px;
                        height: 500px;
                        border-radius: 9999px;
                        filter: blur(100px);
                    }

                    .cta-blob-blue {
                        top: 0;
                        left: 25%;
                        background: rgba(59, 130, 246, 0.2);
                    }

                    .cta-blob-amber {
                        bottom: 0;
                        right: 25%;
                        background: rgba(245, 158, 11, 0.2);
                    }

                    .cta-body {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                    }

                    .cta-pill {
                        display: inline-block;
                        margin-bottom: 2rem;
                        padding: 0.5rem 1.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(8px);
                        color: #fff;
                        font-weight: 500;
                    }

                    .cta h2 {
                        margin: 0 0 2rem;
                        color: #fff;
                        font-size: clamp(1.875rem, 5vw, 3.75rem);
                        line-height: 1.3;
                    }

                    .cta-accent {
                        color: #f59e0b;
                    }

                    .cta-lead {
                        max-width: 42rem;
                        margin: 0 auto 3rem;
                        color: #dbeafe;
                        font-size: 1.25rem;
                        line-height: 1.8;
                    }

                    .cta-actions {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1.5rem;
                    }

                    .cta-button-scale {
                        transition: transform 0.2s ease;
                    }

                    .cta-button-scale:hover {
                        transform: scale(1.05);
                    }

                    .cta-button-scale:active {
                        transform: scale(0.95);
                    }

                    .cta-assurances {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        margin-top: 1rem;
                        color: rgba(255, 255, 255, 0.6);
                        font-size: 0.875rem;
                    }

                    @media (min-width: 768px) {
                        .cta-assurances {
                            flex-direction: row;
                            gap: 2rem;
                        }
                    }

                    .cta-assurances span {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                "#}
            </style>
        </section>
    }
}
