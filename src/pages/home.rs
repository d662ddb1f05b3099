//! The single page: header, the ordered marketing sections, footer, and the
//! sticky mobile contact bar. Sections do not talk to each other.

use yew::prelude::*;

use crate::components::header::Header;
use crate::components::sticky_bar::StickyBar;
use crate::sections::cta::Cta;
use crate::sections::footer::Footer;
use crate::sections::hero::Hero;
use crate::sections::problems::Problems;
use crate::sections::process::Process;
use crate::sections::reasons::Reasons;
use crate::sections::solution::Solution;
use crate::sections::story::Story;
use crate::sections::testimonials::Testimonials;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="page">
            <Header />
            <main>
                <Hero />
                <Problems />
                <Process />
                <Solution />
                <Reasons />
                <Testimonials />
                <Story />
                <Cta />
            </main>
            <Footer />
            <StickyBar />

            <style>
                {r#"
                    * {
                        box-sizing: border-box;
                    }

                    html {
                        scroll-behavior: smooth;
                    }

                    body {
                        margin: 0;
                        background: #f8fafc;
                        color: #1e293b;
                        font-family: 'Hiragino Kaku Gothic ProN', 'Hiragino Sans', 'Noto Sans JP',
                            'Yu Gothic', sans-serif;
                        -webkit-font-smoothing: antialiased;
                    }

                    ::selection {
                        background: rgba(245, 158, 11, 0.3);
                        color: #0f172a;
                    }

                    .section-inner {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }

                    .sm-only {
                        display: inline;
                    }

                    .md-only {
                        display: none;
                    }

                    @media (min-width: 768px) {
                        .sm-only {
                            display: none;
                        }

                        .md-only {
                            display: inline;
                        }
                    }

                    /* Viewport-entry reveal. Blocks start transparent and offset;
                       the component adds .revealed the first time they enter view. */
                    .reveal {
                        opacity: 0;
                        transition-property: opacity, transform;
                        will-change: opacity, transform;
                    }

                    .reveal-up {
                        transform: translateY(40px);
                    }

                    .reveal-left {
                        transform: translateX(-40px);
                    }

                    .reveal-right {
                        transform: translateX(40px);
                    }

                    .reveal.revealed {
                        opacity: 1;
                        transform: none;
                    }

                    /* Ambient bobbing, duration and delay set per instance. */
                    .float {
                        animation-name: float-bob;
                        animation-timing-function: ease-in-out;
                        animation-iteration-count: infinite;
                    }

                    @keyframes float-bob {
                        0%, 100% {
                            transform: translateY(0);
                        }
                        50% {
                            transform: translateY(-15px);
                        }
                    }

                    .pulse {
                        animation: pulse-glow 4s ease-in-out infinite;
                    }

                    @keyframes pulse-glow {
                        0%, 100% {
                            opacity: 1;
                        }
                        50% {
                            opacity: 0.5;
                        }
                    }

                    .line-button {
                        position: relative;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.75rem;
                        border-radius: 9999px;
                        background: #06c755;
                        box-shadow: 0 10px 30px -10px rgba(6, 199, 85, 0.6);
                        color: #fff;
                        font-weight: 700;
                        text-decoration: none;
                        overflow: hidden;
                        transition: all 0.3s ease;
                    }

                    .line-button:hover {
                        background: #05b34c;
                        box-shadow: 0 15px 35px -10px rgba(6, 199, 85, 0.7);
                    }

                    .line-button-shine {
                        position: absolute;
                        top: 0;
                        left: -100%;
                        width: 50%;
                        height: 100%;
                        background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.2), transparent);
                        transform: skewX(-25deg);
                        transition: left 1s ease-in-out;
                    }

                    .line-button:hover .line-button-shine {
                        left: 200%;
                    }

                    .line-button-label {
                        display: flex;
                        flex-direction: column;
                        align-items: flex-start;
                        line-height: 1.2;
                    }

                    .line-button-sub {
                        margin-top: 0.25rem;
                        font-size: 0.7rem;
                        font-weight: 400;
                        opacity: 0.9;
                    }

                    .line-button-arrow {
                        transition: transform 0.3s ease;
                    }

                    .line-button:hover .line-button-arrow {
                        transform: translateX(0.25rem);
                    }

                    .line-button-sm {
                        padding: 0.625rem 1.25rem;
                        font-size: 0.875rem;
                    }

                    .line-button-md {
                        display: inline-flex;
                        padding: 1rem 2rem;
                        font-size: 1rem;
                    }

                    .line-button-lg {
                        min-width: 300px;
                        padding: 1.25rem 2rem;
                        font-size: 1.125rem;
                    }

                    @media (min-width: 768px) {
                        .line-button-lg {
                            width: auto;
                            font-size: 1.25rem;
                        }
                    }

                    .section-heading {
                        margin-bottom: 4rem;
                        text-align: center;
                    }

                    @media (min-width: 768px) {
                        .section-heading {
                            margin-bottom: 6rem;
                        }
                    }

                    .section-heading.align-left {
                        text-align: left;
                    }

                    .section-heading-en {
                        display: block;
                        margin-bottom: 0.75rem;
                        color: #f59e0b;
                        font-size: 0.8rem;
                        font-weight: 700;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                    }

                    .section-heading.light .section-heading-en {
                        color: #bfdbfe;
                    }

                    .section-heading h2 {
                        margin: 0;
                        color: #1e293b;
                        font-size: clamp(1.875rem, 4vw, 3rem);
                        font-weight: 700;
                        line-height: 1.4;
                    }

                    .section-heading.light h2 {
                        color: #fff;
                    }

                    .section-heading-rule {
                        width: 5rem;
                        height: 0.375rem;
                        margin: 1.5rem auto 0;
                        border-radius: 9999px;
                        background: linear-gradient(90deg, #f59e0b, #fde047);
                    }

                    .section-heading.align-left .section-heading-rule {
                        margin-left: 0;
                    }

                    .section-heading.light .section-heading-rule {
                        background: #60a5fa;
                    }
                "#}
            </style>
        </div>
    }
}
