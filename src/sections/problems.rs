use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::components::line_button::LineButton;
use crate::components::section_heading::SectionHeading;

struct Problem {
    title: &'static str,
    desc: &'static str,
}

const PROBLEMS: [Problem; 4] = [
    Problem {
        title: "手続き先が不明",
        desc: "屋根の太陽光、誰に名義変更を頼めばいいか分からない",
    },
    Problem {
        title: "相続手続きの漏れ",
        desc: "家の名義変更はしたが、太陽光パネルは放置していた",
    },
    Problem {
        title: "電子申請が複雑",
        desc: "経産省のシステムが難解で、IDやパスワードも不明",
    },
    Problem {
        title: "スケジュール切迫",
        desc: "売買決済までに急いで名義変更を済ませたい",
    },
];

#[function_component(Problems)]
pub fn problems() -> Html {
    html! {
        <section id="problems" class="problems">
            <div class="section-inner">
                <FadeIn>
                    <SectionHeading
                        en="Check List"
                        jp={html! { <>{"こんなお悩み、"}<br class="sm-only" />{"抱えていませんか？"}</> }}
                    />
                </FadeIn>

                <div class="problems-grid">
                    { for PROBLEMS.iter().enumerate().map(|(index, item)| html! {
                        <FadeIn delay_ms={index as u32 * 100}>
                            <div class="problem-card">
                                <div class="problem-card-edge"></div>
                                <div class="problem-card-icon">
                                    <i class="fa-solid fa-xmark"></i>
                                </div>
                                <h3>{ item.title }</h3>
                                <p>{ item.desc }</p>
                            </div>
                        </FadeIn>
                    }) }
                </div>

                <FadeIn delay_ms={400}>
                    <div class="problems-callout">
                        <div class="problems-callout-blob"></div>
                        <div class="problems-callout-body">
                            <p class="problems-callout-lead">
                                {"その面倒な手続き、"}
                                <span class="marked">{"丸投げでOK"}</span>
                                {"です。"}
                            </p>
                            <p class="problems-callout-sub">
                                {"手続きの遅延は、売電収入の停止や取引トラブルの原因になります。"}
                                <br class="md-only" />
                                {"専門家に任せて、安心と時間を手に入れませんか？"}
                            </p>
                            <LineButton text="まずは無料で相談してみる" />
                        </div>
                    </div>
                </FadeIn>
            </div>

            <style>
                {r#"
                    .problems {
                        padding: 6rem 0;
                        background: #f8fafc;
                    }

                    .problems-grid {
                        display: grid;
                        gap: 1.5rem;
                    }

                    @media (min-width: 768px) {
                        .problems-grid {
                            grid-template-columns: repeat(2, 1fr);
                            gap: 2rem;
                        }
                    }

                    @media (min-width: 1024px) {
                        .problems-grid {
                            grid-template-columns: repeat(4, 1fr);
                        }
                    }

                    .problem-card {
                        position: relative;
                        height: 100%;
                        padding: 2rem;
                        border: 1px solid #f1f5f9;
                        border-radius: 2rem;
                        background: #fff;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                        overflow: hidden;
                        transition: border-color 0.3s ease;
                    }

                    .problem-card:hover {
                        border-color: #fecaca;
                    }

                    .problem-card-edge {
                        position: absolute;
                        top: 0;
                        left: 0;
                        width: 0.5rem;
                        height: 100%;
                        background: #e2e8f0;
                        transition: background 0.3s ease;
                    }

                    .problem-card:hover .problem-card-edge {
                        background: #f87171;
                    }

                    .problem-card-icon {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 3rem;
                        height: 3rem;
                        margin-bottom: 1.5rem;
                        border-radius: 1rem;
                        background: #f1f5f9;
                        color: #94a3b8;
                        font-size: 1.25rem;
                        transition: all 0.3s ease;
                    }

                    .problem-card:hover .problem-card-icon {
                        background: #fef2f2;
                        color: #ef4444;
                    }

                    .problem-card h3 {
                        margin: 0 0 0.75rem;
                        color: #1e293b;
                        font-size: 1.25rem;
                        transition: color 0.3s ease;
                    }

                    .problem-card:hover h3 {
                        color: #dc2626;
                    }

                    .problem-card p {
                        margin: 0;
                        color: #475569;
                        font-size: 0.9rem;
                        line-height: 1.7;
                    }

                    .problems-callout {
                        position: relative;
                        max-width: 56rem;
                        margin: 4rem auto 0;
                        padding: 2rem;
                        border: 1px solid #f1f5f9;
                        border-radius: 2.5rem;
                        background: #fff;
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                        text-align: center;
                        overflow: hidden;
                    }

                    @media (min-width: 768px) {
                        .problems-callout {
                            margin-top: 6rem;
                            padding: 3rem;
                        }
                    }

                    .problems-callout-blob {
                        position: absolute;
                        top: 0;
                        right: 0;
                        width: 16rem;
                        height: 16rem;
                        border-radius: 9999px;
                        background: #eff6ff;
                        transform: translate(50%, -50%);
                        filter: blur(48px);
                        opacity: 0.6;
                    }

                    .problems-callout-body {
                        position: relative;
                        z-index: 10;
                    }

                    .problems-callout-lead {
                        margin: 0 0 1rem;
                        color: #1e3a8a;
                        font-size: 1.35rem;
                        font-weight: 700;
                    }

                    .problems-callout-lead .marked {
                        color: #f59e0b;
                        text-decoration: underline;
                        text-decoration-thickness: 4px;
                        text-decoration-color: rgba(245, 158, 11, 0.3);
                        text-underline-offset: 4px;
                    }

                    .problems-callout-sub {
                        margin: 0 0 2rem;
                        color: #64748b;
                        line-height: 1.8;
                    }
                "#}
            </style>
        </section>
    }
}
