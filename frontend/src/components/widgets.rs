use yew::prelude::*;

use crate::components::layout::{Card, Section};
use crate::content::{FaqItem, SolutionTab, FAQ_ITEMS, SOLUTION_TABS};

/// Clicking the open item closes it; clicking any other opens that one.
pub fn toggle_open(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// Falls back to the first tab for unknown keys.
pub fn find_tab<'a>(tabs: &'a [SolutionTab], key: &str) -> Option<&'a SolutionTab> {
    tabs.iter().find(|t| t.key == key).or_else(|| tabs.first())
}

/// The item list twice over, so a -50% translate loops without a seam.
pub fn marquee_track<'a>(items: &[&'a str]) -> Vec<&'a str> {
    items.iter().chain(items.iter()).copied().collect()
}

#[function_component]
pub fn SolutionTabs() -> Html {
    let active = use_state(|| SOLUTION_TABS.first().map(|t| t.key).unwrap_or_default());
    let Some(current) = find_tab(SOLUTION_TABS, *active) else {
        return html! {};
    };

    html! {
        <div>
            <div class="tab-row">
                { for SOLUTION_TABS.iter().map(|tab| {
                    let onclick = {
                        let active = active.clone();
                        let key = tab.key;
                        Callback::from(move |_: MouseEvent| active.set(key))
                    };
                    let class = if tab.key == current.key { "button" } else { "button button-light" };
                    html! { <button {class} {onclick}>{ tab.name }</button> }
                }) }
            </div>
            <div class="grid grid-3 tab-body">
                <Card class="span-2" title={format!("{} preview", current.name)} description={current.desc}>
                    <div class="placeholder"><span>{"Short demo clip / image placeholder"}</span></div>
                </Card>
                <Card title="Challenge steps">
                    <ul class="bullets">
                        { for current.bullets.iter().map(|b| html! { <li>{ *b }</li> }) }
                    </ul>
                </Card>
            </div>
        </div>
    }
}

#[function_component]
pub fn FaqAccordion() -> Html {
    let open = use_state(|| Some(0usize));

    let render_item = |(i, item): (usize, &FaqItem)| {
        let onclick = {
            let open = open.clone();
            Callback::from(move |_: MouseEvent| open.set(toggle_open(*open, i)))
        };
        let is_open = *open == Some(i);
        html! {
            <div class="faq-item">
                <button class="faq-question" {onclick}>
                    <span>{ item.question }</span>
                    <span class="muted">{ if is_open { "–" } else { "+" } }</span>
                </button>
                if is_open {
                    <div class="faq-answer">{ item.answer }</div>
                }
            </div>
        }
    };

    html! {
        <Section class="faq">
            <h2>{"FAQ"}</h2>
            <div class="faq-list">
                { for FAQ_ITEMS.iter().enumerate().map(render_item) }
            </div>
        </Section>
    }
}

#[derive(Properties, PartialEq)]
pub struct MarqueeProps {
    pub items: &'static [&'static str],
}

#[function_component]
pub fn Marquee(props: &MarqueeProps) -> Html {
    html! {
        <div class="marquee">
            <div class="marquee-track">
                { for marquee_track(props.items).into_iter().map(|item| html! { <span>{ item }</span> }) }
            </div>
        </div>
    }
}
