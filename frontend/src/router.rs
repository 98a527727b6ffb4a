use log::info;
use web_sys::window;
use yew::prelude::*;

use crate::listeners::{EventSource, WindowListener};

pub const ADMIN_FRAGMENT: &str = "#admin";

/// The raw location fragment, leading `#` included, or empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub active_fragment: String,
}

impl NavigationState {
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            active_fragment: fragment.into(),
        }
    }

    pub fn from_location() -> Self {
        let fragment = window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::new(fragment)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Site,
    Admin,
}

pub fn is_admin_route(state: &NavigationState) -> bool {
    state.active_fragment == ADMIN_FRAGMENT
}

/// Every fragment other than `#admin`, empty included, falls through to the site.
pub fn select_view(state: &NavigationState) -> View {
    if is_admin_route(state) {
        View::Admin
    } else {
        View::Site
    }
}

/// Subscribes to `hashchange` on `source`. Each change re-reads the
/// fragment through `read` and hands the new state to `apply`.
pub fn watch_fragment<T, R, A>(source: T, read: R, apply: A) -> Option<WindowListener<T>>
where
    T: EventSource,
    R: Fn() -> NavigationState + 'static,
    A: Fn(NavigationState) + 'static,
{
    WindowListener::attach(source, "hashchange", move || {
        let next = read();
        info!(
            "Fragment changed to {:?}, showing {:?}",
            next.active_fragment,
            select_view(&next)
        );
        apply(next);
    })
}

/// Tracks `window.location.hash`. Subscribes to `hashchange` once on mount
/// and drops the subscription on unmount.
#[hook]
pub fn use_fragment() -> NavigationState {
    let state = use_state(NavigationState::from_location);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let listener = window().and_then(|w| {
                    watch_fragment(w, NavigationState::from_location, move |next| state.set(next))
                });
                move || drop(listener)
            },
            (),
        );
    }

    (*state).clone()
}
