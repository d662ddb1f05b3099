use yew::prelude::*;

use crate::components::fade_in::{FadeIn, RevealDirection};
use crate::components::float::Float;

struct Feature {
    title: &'static str,
    sub: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "経産省・電力会社への一括申請",
        sub: "ID/PW管理から代行します",
    },
    Feature {
        title: "相続書類（遺産分割協議書）作成",
        sub: "法的な書類もお任せください",
    },
    Feature {
        title: "全国対応・完全オンライン完結",
        sub: "ご来所不要で完了します",
    },
];

#[function_component(Solution)]
pub fn solution() -> Html {
    html! {
        <section class="solution">
            <div class="section-inner solution-grid">
                <div class="solution-copy">
                    <FadeIn>
                        <span class="solution-eyebrow">{"Why Professional?"}</span>
                        <h2>
                            {"複雑な手続き、"}<br />
                            <span class="solution-highlight">{"ワンストップ"}</span>{"で解決。"}
                        </h2>
                        <p class="solution-lead">
                            {"太陽光発電の名義変更には、電力会社、経済産業省（JPEA）、場合によっては法務局など、複数の機関への手続きが必要です。"}
                            <br /><br />
                            {"これらをバラバラに依頼すると、手間も費用もかさみます。私たちは「行政書士」として、これら全てを一括で引き受けます。"}
                        </p>

                        <div class="solution-features">
                            { for FEATURES.iter().map(|feature| html! {
                                <div class="solution-feature">
                                    <span class="solution-feature-check">
                                        <i class="fa-solid fa-check"></i>
                                    </span>
                                    <div>
                                        <h4>{ feature.title }</h4>
                                        <p>{ feature.sub }</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </FadeIn>
                </div>

                <div class="solution-visual">
                    <FadeIn direction={RevealDirection::Right}>
                        <div class="solution-cards">
                            <div class="solution-blob solution-blob-blue"></div>
                            <div class="solution-blob solution-blob-amber"></div>

                            <Float duration={6.0} class="solution-card-float first">
                                <div class="filing-card">
                                    <div class="filing-card-head">
                                        <span class="filing-card-icon icon-blue">
                                            <i class="fa-solid fa-building"></i>
                                        </span>
                                        <div>
                                            <p class="filing-card-label">{"提出先"}</p>
                                            <p class="filing-card-name">{"経済産業省 (JPEA)"}</p>
                                        </div>
                                    </div>
                                    <div class="filing-card-lines">
                                        <span class="filing-line w-full"></span>
                                        <span class="filing-line w-34"></span>
                                    </div>
                                </div>
                            </Float>

                            <Float duration={7.0} delay={1.0} class="solution-card-float second">
                                <div class="filing-card">
                                    <div class="filing-card-head">
                                        <span class="filing-card-icon icon-amber">
                                            <i class="fa-solid fa-bolt"></i>
                                        </span>
                                        <div>
                                            <p class="filing-card-label">{"提出先"}</p>
                                            <p class="filing-card-name">{"各電力会社"}</p>
                                        </div>
                                    </div>
                                    <div class="filing-card-lines">
                                        <span class="filing-line w-full"></span>
                                        <span class="filing-line w-56"></span>
                                    </div>
                                    <span class="filing-card-badge">{"代行OK"}</span>
                                </div>
                            </Float>
                        </div>
                    </FadeIn>
                </div>
            </div>

            <style>
                {r#"
                    .solution {
                        padding: 6rem 0;
                        background: #f8fafc;
                        overflow: hidden;
                    }

                    .solution-grid {
                        display: grid;
                        align-items: center;
                        gap: 4rem;
                    }

                    @media (min-width: 1024px) {
                        .solution-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }

                    .solution-eyebrow {
                        display: block;
                        margin-bottom: 0.75rem;
                        color: #f59e0b;
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                    }

                    .solution-copy h2 {
                        margin: 0 0 2rem;
                        color: #1e293b;
                        font-size: clamp(1.875rem, 4vw, 3rem);
                        line-height: 1.3;
                    }

                    .solution-highlight {
                        color: #1e3a8a;
                    }

                    .solution-lead {
                        margin: 0 0 2.5rem;
                        color: #475569;
                        font-size: 1.125rem;
                        line-height: 1.9;
                    }

                    .solution-features {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }

                    .solution-feature {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                    }

                    .solution-feature-check {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        flex-shrink: 0;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        background: #fff;
                        box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
                        color: #f59e0b;
                        font-size: 1.25rem;
                    }

                    .solution-feature h4 {
                        margin: 0;
                        color: #1e293b;
                        font-size: 1.125rem;
                    }

                    .solution-feature p {
                        margin: 0.25rem 0 0;
                        color: #64748b;
                        font-size: 0.875rem;
                    }

                    .solution-cards {
                        position: relative;
                        max-width: 28rem;
                        margin: 0 auto;
                        aspect-ratio: 1;
                    }

                    .solution-blob {
                        position: absolute;
                        width: 18rem;
                        height: 18rem;
                        border-radius: 9999px;
                        filter: blur(48px);
                        opacity: 0.5;
                    }

                    .solution-blob-blue {
                        top: 0;
                        right: 0;
                        background: #dbeafe;
                    }

                    .solution-blob-amber {
                        bottom: 0;
                        left: 0;
                        background: rgba(245, 158, 11, 0.2);
                    }

                    .solution-card-float {
                        position: absolute;
                        width: 100%;
                    }

                    .solution-card-float.first {
                        top: 2.5rem;
                        left: 0;
                        z-index: 20;
                    }

                    .solution-card-float.second {
                        top: 8rem;
                        left: 2rem;
                        z-index: 30;
                    }

                    .filing-card {
                        position: relative;
                        padding: 1.5rem;
                        border: 1px solid #f1f5f9;
                        border-radius: 1.5rem;
                        background: #fff;
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    }

                    .filing-card-head {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 1rem;
                        padding-bottom: 1rem;
                        border-bottom: 1px solid #f8fafc;
                    }

                    .filing-card-icon {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 9999px;
                    }

                    .icon-blue {
                        background: #eff6ff;
                        color: #1e3a8a;
                    }

                    .icon-amber {
                        background: #fefce8;
                        color: #f59e0b;
                    }

                    .filing-card-label {
                        margin: 0;
                        color: #94a3b8;
                        font-size: 0.75rem;
                    }

                    .filing-card-name {
                        margin: 0;
                        color: #1e293b;
                        font-weight: 700;
                    }

                    .filing-card-lines {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }

                    .filing-line {
                        height: 0.5rem;
                        border-radius: 9999px;
                        background: #f1f5f9;
                    }

                    .filing-line.w-full { width: 100%; }
                    .filing-line.w-34 { width: 75%; }
                    .filing-line.w-56 { width: 83%; }

                    .filing-card-badge {
                        position: absolute;
                        top: -0.5rem;
                        right: -0.5rem;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        background: #ef4444;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.2);
                        color: #fff;
                        font-size: 0.75rem;
                        font-weight: 700;
                    }
                "#}
            </style>
        </section>
    }
}
