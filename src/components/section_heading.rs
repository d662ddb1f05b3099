use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    /// Small english eyebrow line.
    pub en: AttrValue,
    /// Main heading, may contain markup (line breaks etc).
    pub jp: Html,
    #[prop_or_default]
    pub light: bool,
    #[prop_or_default]
    pub align_left: bool,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class={classes!(
            "section-heading",
            props.light.then_some("light"),
            props.align_left.then_some("align-left")
        )}>
            <span class="section-heading-en">{ props.en.clone() }</span>
            <h2>{ props.jp.clone() }</h2>
            <div class="section-heading-rule"></div>
        </div>
    }
}
