use yew::prelude::*;

use crate::components::fade_in::{FadeIn, RevealDirection};

#[function_component(Story)]
pub fn story() -> Html {
    html! {
        <section class="story">
            <div class="section-inner story-grid">
                <div class="story-visual">
                    <FadeIn direction={RevealDirection::Left}>
                        <div class="story-photo">
                            <img
                                src="https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?q=80&w=2070&auto=format&fit=crop"
                                alt="ご相談の様子"
                                loading="lazy"
                            />
                            <div class="story-photo-tint"></div>
                        </div>
                        <div class="story-accent-box">
                            <p>{"安心の"}<br />{"専門窓口"}</p>
                        </div>
                    </FadeIn>
                </div>

                <div>
                    <FadeIn direction={RevealDirection::Right}>
                        <span class="story-eyebrow">{"Our Mission"}</span>
                        <h2>
                            {"「誰に聞けばいいか分からない」"}<br />
                            {"その不安を解消するために。"}
                        </h2>
                        <div class="story-copy">
                            <p>
                                {"「中古住宅を買ったけど、屋根のパネルはどうすれば？」「親から相続したけど手続きが分からない」"}
                            </p>
                            <p>
                                {"そんな声が、私たちのもとに数多く寄せられました。不動産の手続きは司法書士がいますが、太陽光設備は専門外とされることが多く、お客様は「たらい回し」にされがちです。"}
                            </p>
                            <p>
                                {"私たちは行政書士として、この"}
                                <strong class="story-marked">{"「隙間の手続き」を専門的にサポート"}</strong>
                                {"する体制を整えました。"}
                            </p>
                            <p>
                                {"面倒なことは全てプロにお任せください。あなたが新しい生活を安心してスタートできるよう、全力でサポートいたします。"}
                            </p>
                        </div>
                    </FadeIn>
                </div>
            </div>

            <style>
                {r#"
                    .story {
                        position: relative;
                        padding: 6rem 0;
                        background: #fff;
                    }

                    .story-grid {
                        display: grid;
                        align-items: center;
                        gap: 3rem;
                        max-width: 64rem;
                    }

                    @media (min-width: 768px) {
                        .story-grid {
                            grid-template-columns: 1fr 1fr;
                            gap: 5rem;
                        }
                    }

                    .story-visual {
                        position: relative;
                    }

                    .story-photo {
                        position: relative;
                        border-radius: 2rem;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                        overflow: hidden;
                        transform: rotate(2deg);
                    }

                    .story-photo img {
                        display: block;
                        width: 100%;
                        height: auto;
                        object-fit: cover;
                    }

                    .story-photo-tint {
                        position: absolute;
                        inset: 0;
                        background: rgba(30, 58, 138, 0.2);
                        mix-blend-mode: multiply;
                    }

                    .story-accent-box {
                        display: none;
                        position: absolute;
                        bottom: -1.5rem;
                        left: -1.5rem;
                        max-width: 200px;
                        padding: 1.5rem;
                        border-radius: 1.5rem;
                        background: #f59e0b;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.2);
                        color: #fff;
                    }

                    @media (min-width: 768px) {
                        .story-accent-box {
                            display: block;
                        }
                    }

                    .story-accent-box p {
                        margin: 0;
                        font-size: 1.125rem;
                        font-weight: 700;
                    }

                    .story-eyebrow {
                        display: block;
                        margin-bottom: 0.75rem;
                        color: #1e3a8a;
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                    }

                    .story h2 {
                        margin: 0 0 1.5rem;
                        color: #1e293b;
                        font-size: 1.875rem;
                        line-height: 1.5;
                    }

                    .story-copy {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        color: #475569;
                        font-size: 1.125rem;
                        line-height: 1.9;
                    }

                    .story-copy p {
                        margin: 0;
                    }

                    .story-marked {
                        padding: 0 0.25rem;
                        background: #fef9c3;
                        color: #1e293b;
                    }
                "#}
            </style>
        </section>
    }
}
