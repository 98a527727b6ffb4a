use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn Section(props: &SectionProps) -> Html {
    html! {
        <section id={props.id.clone()} class={classes!("section", props.class.clone())}>
            { for props.children.iter() }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn Card(props: &CardProps) -> Html {
    html! {
        <div class={classes!("card", props.class.clone())}>
            if props.title.is_some() || props.description.is_some() {
                <div class="card-header">
                    if let Some(title) = &props.title {
                        <h3 class="card-title">{ title.clone() }</h3>
                    }
                    if let Some(description) = &props.description {
                        <p class="card-description">{ description.clone() }</p>
                    }
                </div>
            }
            if !props.children.is_empty() {
                <div class="card-content">{ for props.children.iter() }</div>
            }
        </div>
    }
}
