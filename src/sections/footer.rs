use chrono::{Datelike, Local};
use yew::prelude::*;

const DISCLAIMERS: [&str; 3] = [
    "電力会社や行政機関の判断により、手続きに時間を要する場合があります。",
    "必要に応じて、司法書士・税理士・弁護士等と連携して対応いたします。",
    "売電収入の確約や保証をするものではありません。",
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="section-inner">
                <div class="footer-grid">
                    <div>
                        <div class="footer-brand">
                            <span class="footer-brand-mark"><i class="fa-solid fa-sun"></i></span>
                            <span>{"太陽光名義変更サポート"}</span>
                        </div>
                        <p class="footer-about">
                            {"長崎県内を中心に、全国の太陽光発電設備の名義変更・相続手続きを専門に扱う行政書士事務所です。"}
                        </p>
                    </div>

                    <div class="footer-disclaimer">
                        <h4>
                            <i class="fa-solid fa-shield-halved"></i>
                            {"免責事項"}
                        </h4>
                        <ul>
                            { for DISCLAIMERS.iter().map(|&item| html! {
                                <li>{"• "}{ item }</li>
                            }) }
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{ format!("© {year} Solar Name Change Support. All rights reserved.") }</p>
                    <div class="footer-legal">
                        <a href="#">{"プライバシーポリシー"}</a>
                        <a href="#">{"特定商取引法に基づく表記"}</a>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .site-footer {
                        padding: 4rem 0;
                        background: #020617;
                        color: #94a3b8;
                        font-size: 0.875rem;
                    }

                    .footer-grid {
                        display: grid;
                        gap: 3rem;
                        margin-bottom: 4rem;
                        padding-bottom: 4rem;
                        border-bottom: 1px solid #0f172a;
                    }

                    @media (min-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }

                    .footer-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin-bottom: 1.5rem;
                        color: #fff;
                        font-size: 1.25rem;
                        font-weight: 700;
                    }

                    .footer-brand-mark {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 0.5rem;
                        border-radius: 0.5rem;
                        background: #1e293b;
                        color: #f59e0b;
                    }

                    .footer-about {
                        margin: 0;
                        color: #64748b;
                        line-height: 1.8;
                    }

                    .footer-disclaimer {
                        padding: 1.5rem;
                        border: 1px solid #1e293b;
                        border-radius: 1rem;
                        background: rgba(15, 23, 42, 0.5);
                    }

                    .footer-disclaimer h4 {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin: 0 0 1rem;
                        color: #fff;
                    }

                    .footer-disclaimer h4 i {
                        color: #64748b;
                    }

                    .footer-disclaimer ul {
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        margin: 0;
                        padding: 0;
                        list-style: none;
                        color: #64748b;
                        font-size: 0.75rem;
                    }

                    .footer-bottom {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1rem;
                        font-size: 0.75rem;
                    }

                    @media (min-width: 768px) {
                        .footer-bottom {
                            flex-direction: row;
                            justify-content: space-between;
                        }
                    }

                    .footer-bottom p {
                        margin: 0;
                    }

                    .footer-legal {
                        display: flex;
                        gap: 1.5rem;
                    }

                    .footer-legal a {
                        color: inherit;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }

                    .footer-legal a:hover {
                        color: #fff;
                    }
                "#}
            </style>
        </footer>
    }
}
