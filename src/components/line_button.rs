//! The call-to-action button. Every instance points at the same external
//! LINE talk link.

use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            Self::Small => "line-button-sm",
            Self::Medium => "line-button-md",
            Self::Large => "line-button-lg",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LineButtonProps {
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or(AttrValue::Static("LINEで無料相談"))]
    pub text: AttrValue,
    /// Shown under the label on the large size only.
    #[prop_or_default]
    pub sub_text: Option<AttrValue>,
}

#[function_component(LineButton)]
pub fn line_button(props: &LineButtonProps) -> Html {
    let sub = match (&props.sub_text, props.size) {
        (Some(sub), ButtonSize::Large) => {
            html! { <span class="line-button-sub">{ sub.clone() }</span> }
        }
        _ => html! {},
    };

    html! {
        <a
            href={config::LINE_CONTACT_URL}
            target="_blank"
            rel="noopener noreferrer"
            class={classes!("line-button", props.size.class())}
        >
            <span class="line-button-shine"></span>
            <i class="fa-solid fa-comment"></i>
            <span class="line-button-label">
                <span>{ props.text.clone() }</span>
                { sub }
            </span>
            if props.size != ButtonSize::Small {
                <i class="fa-solid fa-arrow-right line-button-arrow"></i>
            }
        </a>
    }
}
