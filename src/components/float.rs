//! Decorative infinite bobbing. Runs from mount to unmount, independent of
//! scroll and input.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FloatProps {
    #[prop_or_default]
    pub children: Children,
    /// Seconds per bob cycle.
    #[prop_or(6.0)]
    pub duration: f64,
    /// Seconds before the first cycle starts.
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Float)]
pub fn float(props: &FloatProps) -> Html {
    let style = format!(
        "animation-duration: {}s; animation-delay: {}s;",
        props.duration, props.delay
    );

    html! {
        <div class={classes!("float", props.class.clone())} {style}>
            { for props.children.iter() }
        </div>
    }
}
