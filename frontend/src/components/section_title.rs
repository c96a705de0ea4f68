use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or(true)]
    pub centered: bool,
    #[prop_or_default]
    pub gradient: bool,
    /// For dark backgrounds.
    #[prop_or_default]
    pub light: bool,
}

#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    let heading_class = if props.gradient {
        "text-gradient"
    } else if props.light {
        "section-title-light"
    } else {
        "section-title-dark"
    };

    html! {
        <div class={classes!("section-title", "fade-up", props.centered.then(|| "centered"))}>
            <h2 class={heading_class}>{ props.title.clone() }</h2>
            {
                if let Some(subtitle) = &props.subtitle {
                    html! {
                        <p class={if props.light { "section-subtitle-light" } else { "section-subtitle" }}>
                            { subtitle.clone() }
                        </p>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
