use yew::prelude::*;

use crate::animation::{
    format_thousands, hero_offsets, scroll_progress, CounterAnimation, DEFAULT_COUNTER_SECONDS,
};
use crate::components::layout::Section;
use crate::listeners::{FrameLoop, WindowListener};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    pub offset: f64,
    pub max: f64,
}

fn sample_scroll() -> ScrollSample {
    let Some(window) = web_sys::window() else {
        return ScrollSample::default();
    };
    let offset = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|e| e.scroll_height() as f64)
        .unwrap_or(0.0);

    ScrollSample {
        offset,
        max: (height - viewport).max(0.0),
    }
}

/// Current scroll position, resampled on every `scroll` event.
#[hook]
pub fn use_scroll() -> ScrollSample {
    let sample = use_state(sample_scroll);

    {
        let sample = sample.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::new("scroll", move || sample.set(sample_scroll()));
                move || drop(listener)
            },
            (),
        );
    }

    *sample
}

#[derive(Properties, PartialEq)]
pub struct AnimatedNumberProps {
    pub value: u64,
    #[prop_or(DEFAULT_COUNTER_SECONDS)]
    pub duration: f64,
}

#[function_component]
pub fn AnimatedNumber(props: &AnimatedNumberProps) -> Html {
    let display = use_state(|| 0u64);

    {
        let display = display.clone();
        use_effect_with_deps(
            move |(value, duration)| {
                let mut counter = CounterAnimation::new(*value, *duration);
                if let Some(now) = web_sys::window()
                    .and_then(|w| w.performance())
                    .map(|p| p.now())
                {
                    counter = counter.starting_at(now);
                }

                let frames = FrameLoop::start(move |timestamp| {
                    let running = counter.tick(timestamp);
                    display.set(counter.current());
                    running
                });
                move || drop(frames)
            },
            (props.value, props.duration),
        );
    }

    html! { <>{ format_thousands(*display) }</> }
}

#[function_component]
pub fn ProgressBar() -> Html {
    let scroll = use_scroll();
    let scale = scroll_progress(scroll.offset, scroll.max);

    html! {
        <div class="progress-bar" style={format!("transform: scaleX({});", scale)} />
    }
}

#[function_component]
pub fn ParallaxHero() -> Html {
    let scroll = use_scroll();
    let offsets = hero_offsets(scroll.offset);

    html! {
        <div class="hero">
            <div class="hero-gradient" />
            <div class="hero-orb" style={format!("transform: translateY({}px);", offsets.orb)} />
            <Section class="hero-copy">
                <span class="badge">{"VR + Haptics + Employability"}</span>
                <h1>{"Redefining the learning & recruiting experience with VR"}</h1>
                <p class="lead">
                    {"We build sustainable, cost‑effective VR solutions with custom haptic gloves that turn \
                      career fairs and training into immersive, hands‑on experiences—transforming resumes \
                      into proof of skill."}
                </p>
                <div class="hero-actions">
                    <a href="#solution"><button class="button">{"Explore ImmersiFair"}</button></a>
                    <a href="#contact"><button class="button button-light">{"Talk to our team"}</button></a>
                </div>
            </Section>
            <div class="hero-backdrop" style={format!("transform: translateY({}px);", offsets.backdrop)}>
                <div class="hero-backdrop-inner">
                    <span>{"Scroll to see the hero subtly move"}</span>
                </div>
            </div>
        </div>
    }
}
