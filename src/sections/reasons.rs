use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::components::section_heading::SectionHeading;

struct Reason {
    title: &'static str,
    desc: &'static str,
    icon: &'static str,
    badge: &'static str,
}

const REASONS: [Reason; 4] = [
    Reason {
        title: "地域No.1の実績",
        desc: "長崎県内でトップクラスの口コミ評価を獲得。確かな信頼があります。",
        icon: "fa-solid fa-award",
        badge: "TRUST",
    },
    Reason {
        title: "完全ワンストップ",
        desc: "面倒なID取得から書類作成まで、窓口ひとつで完結します。",
        icon: "fa-solid fa-circle-check",
        badge: "EASY",
    },
    Reason {
        title: "法的サポート",
        desc: "行政書士だからできる、遺産分割協議書などの権利義務書類の作成。",
        icon: "fa-solid fa-file-lines",
        badge: "LEGAL",
    },
    Reason {
        title: "柔軟な対応",
        desc: "LINE・Zoom・郵送・出張。お客様のやりやすい方法で進めます。",
        icon: "fa-solid fa-comment",
        badge: "FLEXIBLE",
    },
];

#[function_component(Reasons)]
pub fn reasons() -> Html {
    html! {
        <section id="reasons" class="reasons">
            <div class="reasons-dots"></div>
            <div class="section-inner reasons-body">
                <FadeIn>
                    <SectionHeading en="Our Strengths" jp={html! { {"選ばれる4つの理由"} }} light={true} />
                </FadeIn>

                <div class="reasons-grid">
                    { for REASONS.iter().enumerate().map(|(index, reason)| html! {
                        <FadeIn delay_ms={index as u32 * 100}>
                            <div class="reason-card">
                                <div class="reason-card-head">
                                    <span class="reason-card-icon">
                                        <i class={reason.icon}></i>
                                    </span>
                                    <span class="reason-card-badge">{ reason.badge }</span>
                                </div>
                                <h3>{ reason.title }</h3>
                                <p>{ reason.desc }</p>
                            </div>
                        </FadeIn>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                    .reasons {
                        position: relative;
                        padding: 6rem 0;
                        background: #0f172a;
                        color: #fff;
                        overflow: hidden;
                    }

                    .reasons-dots {
                        position: absolute;
                        inset: 0;
                        background-image: radial-gradient(#ffffff 1px, transparent 1px);
                        background-size: 30px 30px;
                        opacity: 0.1;
                    }

                    .reasons-body {
                        position: relative;
                        z-index: 10;
                    }

                    .reasons-grid {
                        display: grid;
                        gap: 1.5rem;
                    }

                    @media (min-width: 768px) {
                        .reasons-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    @media (min-width: 1024px) {
                        .reasons-grid {
                            grid-template-columns: repeat(4, 1fr);
                        }
                    }

                    .reason-card {
                        height: 100%;
                        padding: 2rem;
                        border: 1px solid #334155;
                        border-radius: 2rem;
                        background: rgba(30, 41, 59, 0.5);
                        backdrop-filter: blur(4px);
                        transition: background 0.3s ease;
                    }

                    .reason-card:hover {
                        background: #1e293b;
                    }

                    .reason-card-head {
                        display: flex;
                        align-items: flex-start;
                        justify-content: space-between;
                        margin-bottom: 1.5rem;
                    }

                    .reason-card-icon {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 1rem;
                        background: linear-gradient(135deg, #2563eb, #1e3a8a);
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
                        font-size: 1.25rem;
                        transition: transform 0.3s ease;
                    }

                    .reason-card:hover .reason-card-icon {
                        transform: scale(1.1);
                    }

                    .reason-card-badge {
                        padding: 0.25rem 0.75rem;
                        border: 1px solid #334155;
                        border-radius: 9999px;
                        background: #0f172a;
                        color: #94a3b8;
                        font-size: 0.625rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                    }

                    .reason-card h3 {
                        margin: 0 0 0.75rem;
                        color: #fff;
                        font-size: 1.25rem;
                        transition: color 0.3s ease;
                    }

                    .reason-card:hover h3 {
                        color: #93c5fd;
                    }

                    .reason-card p {
                        margin: 0;
                        color: #94a3b8;
                        font-size: 0.875rem;
                        line-height: 1.8;
                    }
                "#}
            </style>
        </section>
    }
}
