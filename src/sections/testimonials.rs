use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::components::section_heading::SectionHeading;

struct Voice {
    name: &'static str,
    info: &'static str,
    image: &'static str,
    title: &'static str,
    content: &'static str,
}

const VOICES: [Voice; 3] = [
    Voice {
        name: "T.S 様",
        info: "50代男性 / 中古住宅購入",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?fit=crop&w=200&h=200",
        title: "屋根のことまで分からなくて…",
        content: "不動産の手続きは済んだけど、屋根にある太陽光発電の名義変更までは誰に相談していいのか分からず困っていました。ここにお願いしたら全部まとめてやってもらえて本当に助かりました。",
    },
    Voice {
        name: "K.M 様",
        info: "60代女性 / 実家を相続",
        image: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?fit=crop&w=200&h=200",
        title: "相続書類がまた必要なんて",
        content: "家の名義変更は司法書士さんに頼みましたが、まさか太陽光パネルにまで相続書類が必要になるとは…。LINEで気軽に相談できて、戸籍集めから手続きまで全部やってもらえたので安心でした。",
    },
    Voice {
        name: "Y.A 様",
        info: "40代女性 / 電子申請代行",
        image: "https://images.unsplash.com/photo-1580489944761-15a19d654956?fit=crop&w=200&h=200",
        title: "画面を見た瞬間、諦めました",
        content: "IDやパスワードの管理もできてなくて、電子申請の画面を開いた瞬間に無理だと思いました（笑） 全部お任せで、LINEだけでやりとりできたのがすごくラクでした！",
    },
];

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section id="voice" class="testimonials">
            <div class="section-inner">
                <FadeIn>
                    <SectionHeading en="Testimonials" jp={html! { {"お客様の声"} }} />
                </FadeIn>

                <div class="voices-grid">
                    { for VOICES.iter().enumerate().map(|(index, voice)| html! {
                        <FadeIn delay_ms={index as u32 * 200}>
                            <div class="voice-card">
                                <div class="voice-avatar">
                                    <img src={voice.image} alt={voice.name} loading="lazy" />
                                </div>

                                <div class="voice-stars">
                                    { for (0..5).map(|_| html! { <i class="fa-solid fa-star"></i> }) }
                                </div>

                                <h3>{"\u{201c}"}{ voice.title }{"\u{201d}"}</h3>

                                <div class="voice-quote">
                                    <i class="fa-solid fa-quote-left"></i>
                                    <p>{ voice.content }</p>
                                </div>

                                <div class="voice-foot">
                                    <div>
                                        <p class="voice-name">{ voice.name }</p>
                                        <p class="voice-info">{ voice.info }</p>
                                    </div>
                                    <span class="voice-verified">
                                        <i class="fa-solid fa-check"></i>
                                    </span>
                                </div>
                            </div>
                        </FadeIn>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                    .testimonials {
                        position: relative;
                        padding: 6rem 0;
                        background: #f8fafc;
                        overflow: hidden;
                    }

                    .voices-grid {
                        display: grid;
                        gap: 3.5rem;
                        margin-top: 5rem;
                    }

                    @media (min-width: 768px) {
                        .voices-grid {
                            grid-template-columns: repeat(3, 1fr);
                            gap: 3rem;
                        }
                    }

                    .voice-card {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        height: 100%;
                        padding: 2rem;
                        border: 1px solid #f1f5f9;
                        border-radius: 2.5rem;
                        background: #fff;
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                        transition: transform 0.3s ease;
                    }

                    .voice-card:hover {
                        transform: translateY(-0.5rem);
                    }

                    .voice-avatar {
                        position: absolute;
                        top: -2.5rem;
                        left: 2.5rem;
                        width: 5rem;
                        height: 5rem;
                        border: 4px solid #fff;
                        border-radius: 9999px;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                        overflow: hidden;
                    }

                    .voice-avatar img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }

                    .voice-stars {
                        display: flex;
                        justify-content: flex-end;
                        gap: 0.25rem;
                        margin-bottom: 1.5rem;
                        color: #facc15;
                        font-size: 0.875rem;
                    }

                    .voice-card h3 {
                        margin: 0 0 1rem;
                        color: #1e293b;
                        font-size: 1.125rem;
                        line-height: 1.5;
                    }

                    .voice-quote {
                        position: relative;
                        flex: 1;
                    }

                    .voice-quote i {
                        position: absolute;
                        top: -0.5rem;
                        left: -0.5rem;
                        z-index: 0;
                        color: #f1f5f9;
                        font-size: 2rem;
                    }

                    .voice-quote p {
                        position: relative;
                        z-index: 1;
                        margin: 0;
                        color: #475569;
                        font-size: 0.9rem;
                        line-height: 1.8;
                    }

                    .voice-foot {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        margin-top: 2rem;
                        padding-top: 1.5rem;
                        border-top: 1px solid #f8fafc;
                    }

                    .voice-name {
                        margin: 0;
                        color: #1e293b;
                        font-size: 0.875rem;
                        font-weight: 700;
                    }

                    .voice-info {
                        margin: 0;
                        color: #94a3b8;
                        font-size: 0.75rem;
                    }

                    .voice-verified {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 2rem;
                        height: 2rem;
                        border-radius: 9999px;
                        background: #dcfce7;
                        color: #16a34a;
                        font-size: 0.875rem;
                    }
                "#}
            </style>
        </section>
    }
}
