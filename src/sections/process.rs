use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::components::float::Float;
use crate::components::section_heading::SectionHeading;

struct Step {
    number: &'static str,
    title: &'static str,
    desc: &'static str,
    icon: &'static str,
    tone: &'static str,
}

const STEPS: [Step; 3] = [
    Step {
        number: "01",
        title: "LINEで相談",
        desc: "まずはLINEでお友達登録。現状の書類や設備の写真をスマホで送るだけでOK。",
        icon: "fa-solid fa-comment",
        tone: "step-line",
    },
    Step {
        number: "02",
        title: "署名・捺印",
        desc: "行政書士が作成した書類をご郵送します。内容を確認し、署名して返送してください。",
        icon: "fa-solid fa-file-lines",
        tone: "step-primary",
    },
    Step {
        number: "03",
        title: "手続き完了",
        desc: "官公庁・電力会社への申請は全て代行。完了通知が届くのを待つだけです。",
        icon: "fa-solid fa-circle-check",
        tone: "step-accent",
    },
];

#[function_component(Process)]
pub fn process() -> Html {
    html! {
        <section id="process" class="process">
            <div class="section-inner">
                <FadeIn>
                    <SectionHeading en="Simple Flow" jp={html! { {"ご依頼は3ステップ"} }} />
                </FadeIn>

                <div class="process-grid">
                    <div class="process-connector"></div>
                    { for STEPS.iter().enumerate().map(|(index, step)| html! {
                        <FadeIn delay_ms={index as u32 * 200}>
                            <div class="process-step">
                                <div class="process-step-number">{ step.number }</div>
                                <Float delay={index as f64 * 0.5} duration={5.0}>
                                    <div class={classes!("process-step-icon", step.tone)}>
                                        <i class={step.icon}></i>
                                    </div>
                                </Float>
                                <h3>{ step.title }</h3>
                                <p>{ step.desc }</p>
                                if index < STEPS.len() - 1 {
                                    <div class="process-step-arrow">
                                        <i class="fa-solid fa-arrow-right"></i>
                                    </div>
                                }
                            </div>
                        </FadeIn>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                    .process {
                        position: relative;
                        padding: 6rem 0;
                        background: #fff;
                    }

                    .process-grid {
                        position: relative;
                        display: grid;
                        gap: 3rem;
                        max-width: 72rem;
                        margin: 5rem auto 0;
                    }

                    @media (min-width: 768px) {
                        .process-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }

                    .process-connector {
                        display: none;
                        position: absolute;
                        top: 4rem;
                        left: 0;
                        width: 100%;
                        height: 4px;
                        background: linear-gradient(90deg, #f1f5f9, #e2e8f0, #f1f5f9);
                        z-index: -1;
                    }

                    @media (min-width: 768px) {
                        .process-connector {
                            display: block;
                        }
                    }

                    .process-step {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                    }

                    .process-step-number {
                        position: absolute;
                        top: -3rem;
                        z-index: -1;
                        color: #f1f5f9;
                        font-size: 3.75rem;
                        font-weight: 900;
                        user-select: none;
                    }

                    .process-step-icon {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 6rem;
                        height: 6rem;
                        margin-bottom: 1.5rem;
                        border-radius: 1.5rem;
                        color: #fff;
                        font-size: 2rem;
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.15);
                        transform: rotate(3deg);
                        transition: transform 0.3s ease;
                    }

                    .process-step-icon:hover {
                        transform: rotate(0);
                    }

                    .step-line { background: #06c755; }
                    .step-primary { background: #1e3a8a; }
                    .step-accent { background: #f59e0b; }

                    .process-step h3 {
                        margin: 0 0 1rem;
                        color: #1e293b;
                        font-size: 1.35rem;
                    }

                    .process-step p {
                        max-width: 20rem;
                        margin: 0;
                        color: #64748b;
                        line-height: 1.8;
                    }

                    .process-step-arrow {
                        margin-top: 2rem;
                        color: #e2e8f0;
                        font-size: 2rem;
                        transform: rotate(90deg);
                    }

                    @media (min-width: 768px) {
                        .process-step-arrow {
                            display: none;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
