use log::{info, Level};
use yew::prelude::*;

mod animation;
mod config;
mod contact;
mod content;
mod listeners;
mod router;
mod session;
mod components {
    pub mod admin;
    pub mod animated;
    pub mod contact_form;
    pub mod layout;
    pub mod site;
    pub mod widgets;
}

use components::{admin::AdminPortal, site::SyntechSite};
use router::{select_view, use_fragment, View};

#[function_component]
fn App() -> Html {
    let navigation = use_fragment();

    match select_view(&navigation) {
        View::Admin => html! { <AdminPortal /> },
        View::Site => html! { <SyntechSite /> },
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
