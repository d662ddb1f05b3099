use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::components::float::Float;
use crate::components::line_button::{ButtonSize, LineButton};

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-background">
                <img
                    src="https://images.unsplash.com/photo-1508514177221-188b1cf16e9d?q=80&w=2072&auto=format&fit=crop"
                    alt="太陽光パネル"
                    loading="eager"
                />
                <div class="hero-gradient"></div>
                <div class="hero-blob hero-blob-blue pulse"></div>
                <div class="hero-blob hero-blob-amber"></div>
            </div>

            <div class="hero-inner">
                <div class="hero-copy">
                    <FadeIn>
                        <div class="hero-badges">
                            <span class="hero-badge">
                                <i class="fa-solid fa-shield-halved"></i>
                                {"行政書士直営"}
                            </span>
                            <span class="hero-badge">
                                <i class="fa-solid fa-star star"></i>
                                {"口コミ高評価"}
                            </span>
                        </div>

                        <h1>
                            {"太陽光の"}<br />
                            <span class="hero-gradient-text">{"名義変更"}</span>{"、"}<br />
                            <span class="hero-underline">
                                {"プロに丸投げ。"}
                                <svg viewBox="0 0 100 10" preserveAspectRatio="none">
                                    <path d="M0 5 Q 50 10 100 5" stroke="currentColor" stroke-width="4" fill="none" />
                                </svg>
                            </span>
                        </h1>

                        <p class="hero-lead">
                            {"面倒な電子申請・相続書類・電力会社対応。"}<br />
                            {"すべて行政書士が代行します。"}<br />
                            {"あなたの手間は、"}<strong>{"LINEで写真を送るだけ。"}</strong>
                        </p>

                        <LineButton
                            size={ButtonSize::Large}
                            text="LINEで今すぐ無料相談"
                            sub_text="面倒な登録なし・1分で完了"
                        />
                        <p class="hero-note">{"※売買・相続・贈与などあらゆるケースに対応"}</p>
                    </FadeIn>
                </div>

                <div class="hero-visual">
                    <Float duration={8.0}>
                        <div class="phone-frame">
                            <div class="phone-screen">
                                <div class="phone-header">
                                    <p class="phone-header-sub">{"名義変更サポート"}</p>
                                    <p class="phone-header-title">{"手続き完了のお知らせ"}</p>
                                </div>
                                <div class="phone-chat">
                                    <div class="chat-bubble theirs">
                                        <p>{"名義変更の電子申請、すべて完了しました！"}</p>
                                    </div>
                                    <div class="chat-bubble ours">
                                        <p>{"ありがとうございます！こんなに早く終わるとは思いませんでした😭"}</p>
                                    </div>
                                    <div class="chat-bubble theirs chat-file">
                                        <i class="fa-solid fa-file-lines"></i>
                                        <span>{"完了通知書.pdf"}</span>
                                    </div>
                                    <div class="chat-stamp">
                                        <span>{"COMPLETE"}</span>
                                    </div>
                                </div>
                                <div class="phone-input"></div>
                            </div>
                        </div>
                    </Float>

                    <Float delay={1.5} duration={7.0} class="hero-card-float">
                        <div class="hero-glass-card">
                            <div class="glass-card-row">
                                <span class="glass-card-check"><i class="fa-solid fa-check"></i></span>
                                <span class="glass-line w-20"></span>
                            </div>
                            <span class="glass-line w-full"></span>
                            <span class="glass-line w-23"></span>
                        </div>
                    </Float>
                </div>
            </div>

            <div class="hero-scroll-cue">
                <i class="fa-solid fa-chevron-down"></i>
            </div>

            <style>
                {r#"
                    .hero {
                        position: relative;
                        display: flex;
                        align-items: center;
                        min-height: 100dvh;
                        padding-top: 6rem;
                        overflow: hidden;
                        background: #0f172a;
                    }

                    .hero-background {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                    }

                    .hero-background img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        opacity: 0.2;
                        mix-blend-mode: overlay;
                    }

                    .hero-gradient {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(135deg, #0f172a, rgba(15, 23, 42, 0.95) 50%, rgba(23, 37, 84, 0.9));
                    }

                    .hero-blob {
                        position: absolute;
                        border-radius: 9999px;
                    }

                    .hero-blob-blue {
                        top: -10%;
                        right: -5%;
                        width: 500px;
                        height: 500px;
                        background: rgba(37, 99, 235, 0.2);
                        filter: blur(100px);
                    }

                    .hero-blob-amber {
                        bottom: -10%;
                        left: -10%;
                        width: 400px;
                        height: 400px;
                        background: rgba(245, 158, 11, 0.1);
                        filter: blur(80px);
                    }

                    .hero-inner {
                        position: relative;
                        z-index: 10;
                        display: grid;
                        align-items: center;
                        gap: 3rem;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }

                    .hero-copy {
                        max-width: 42rem;
                    }

                    .hero-badges {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                        margin-bottom: 2rem;
                    }

                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        border: 1px solid #334155;
                        border-radius: 9999px;
                        background: rgba(30, 41, 59, 0.8);
                        backdrop-filter: blur(8px);
                        color: #fff;
                        font-size: 0.8rem;
                        font-weight: 500;
                    }

                    .hero-badge i {
                        color: #f59e0b;
                    }

                    .hero-badge .star {
                        color: #facc15;
                    }

                    .hero h1 {
                        margin: 0 0 2rem;
                        color: #fff;
                        font-size: clamp(2.5rem, 6vw, 4.5rem);
                        font-weight: 700;
                        line-height: 1.1;
                        letter-spacing: -0.02em;
                    }

                    .hero-gradient-text {
                        background: linear-gradient(90deg, #bfdbfe, #fff);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }

                    .hero-underline {
                        position: relative;
                        display: inline-block;
                    }

                    .hero-underline svg {
                        position: absolute;
                        left: 0;
                        bottom: -0.25rem;
                        width: 100%;
                        height: 0.75rem;
                        color: #f59e0b;
                    }

                    .hero-lead {
                        margin-bottom: 2.5rem;
                        color: #cbd5e1;
                        font-size: 1.125rem;
                        line-height: 1.8;
                        max-width: 32rem;
                    }

                    .hero-lead strong {
                        color: #fff;
                    }

                    .hero-note {
                        margin-top: 1rem;
                        padding-left: 0.5rem;
                        color: #94a3b8;
                        font-size: 0.75rem;
                        opacity: 0.8;
                    }

                    .hero-visual {
                        display: none;
                        position: relative;
                    }

                    @media (min-width: 1024px) {
                        .hero-inner {
                            grid-template-columns: 1fr 1fr;
                        }

                        .hero-visual {
                            display: block;
                        }
                    }

                    .phone-frame {
                        width: 320px;
                        height: 640px;
                        margin: 0 auto;
                        border: 8px solid #1e293b;
                        border-radius: 3rem;
                        background: #0f172a;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                        overflow: hidden;
                        transform: rotate(-3deg);
                    }

                    .phone-screen {
                        display: flex;
                        flex-direction: column;
                        height: 100%;
                        background: #fff;
                    }

                    .phone-header {
                        padding: 3rem 1.5rem 1.5rem;
                        background: #2c3e50;
                        color: #fff;
                        text-align: center;
                    }

                    .phone-header-sub {
                        margin: 0;
                        font-size: 0.875rem;
                        opacity: 0.8;
                    }

                    .phone-header-title {
                        margin: 0;
                        font-size: 1.125rem;
                        font-weight: 700;
                    }

                    .phone-chat {
                        position: relative;
                        flex: 1;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1rem;
                        background: #f1f5f9;
                        overflow: hidden;
                    }

                    .chat-bubble {
                        max-width: 80%;
                        padding: 0.75rem;
                        border-radius: 1rem;
                        background: #fff;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                        color: #334155;
                        font-size: 0.875rem;
                    }

                    .chat-bubble p {
                        margin: 0;
                    }

                    .chat-bubble.theirs {
                        border-top-left-radius: 0;
                    }

                    .chat-bubble.ours {
                        margin-left: auto;
                        border-top-right-radius: 0;
                        background: #dcf8c6;
                        color: #1e293b;
                    }

                    .chat-file {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }

                    .chat-file i {
                        color: #ef4444;
                    }

                    .chat-stamp {
                        position: absolute;
                        right: 1rem;
                        bottom: 2.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 6rem;
                        height: 6rem;
                        border: 4px solid rgba(239, 68, 68, 0.3);
                        border-radius: 9999px;
                        transform: rotate(-12deg) scale(2);
                        opacity: 0;
                        animation: stamp-pop 0.4s ease-out 1s forwards;
                    }

                    .chat-stamp span {
                        border-top: 2px solid rgba(239, 68, 68, 0.3);
                        border-bottom: 2px solid rgba(239, 68, 68, 0.3);
                        color: rgba(239, 68, 68, 0.3);
                        font-size: 1.25rem;
                        font-weight: 700;
                        text-transform: uppercase;
                    }

                    @keyframes stamp-pop {
                        to {
                            transform: rotate(-12deg) scale(1);
                            opacity: 1;
                        }
                    }

                    .phone-input {
                        height: 4rem;
                        background: #f8fafc;
                        border-top: 1px solid #e2e8f0;
                    }

                    .hero-card-float {
                        position: absolute;
                        top: 5rem;
                        right: -2.5rem;
                    }

                    .hero-glass-card {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        width: 12rem;
                        padding: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 1rem;
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(16px);
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.3);
                    }

                    .glass-card-row {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 0.25rem;
                    }

                    .glass-card-check {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 2rem;
                        height: 2rem;
                        border-radius: 9999px;
                        background: #22c55e;
                        color: #fff;
                        font-size: 0.875rem;
                    }

                    .glass-line {
                        height: 0.5rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.1);
                    }

                    .glass-card-row .glass-line {
                        background: rgba(255, 255, 255, 0.3);
                    }

                    .glass-line.w-20 { width: 5rem; }
                    .glass-line.w-23 { width: 66%; }
                    .glass-line.w-full { width: 100%; }

                    .hero-scroll-cue {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: none;
                        color: rgba(255, 255, 255, 0.3);
                        font-size: 2rem;
                        animation: scroll-cue-bob 2s ease-in-out infinite;
                    }

                    @media (min-width: 768px) {
                        .hero-scroll-cue {
                            display: block;
                        }
                    }

                    @keyframes scroll-cue-bob {
                        0%, 100% { transform: translate(-50%, 0); }
                        50% { transform: translate(-50%, 10px); }
                    }
                "#}
            </style>
        </section>
    }
}
