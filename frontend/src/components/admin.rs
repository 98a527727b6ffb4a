use log::warn;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::layout::{Card, Section};
use crate::config;
use crate::content::{ADMIN_ACTIONS, ADMIN_STATS, RECENT_SIGN_INS};
use crate::session::{LiteralCredentials, LocalStorageStore, SessionGate, SessionPhase};

type AdminGate = SessionGate<LocalStorageStore, LiteralCredentials>;

/// Admin view behind the session gate: login card or dashboard.
#[function_component]
pub fn AdminPortal() -> Html {
    let gate = use_mut_ref(|| -> AdminGate {
        SessionGate::new(LocalStorageStore::new(config::SESSION_KEY), LiteralCredentials::default())
    });
    let phase = use_state(|| gate.borrow().phase());
    let login_error = use_state(|| None::<String>);

    let on_login = {
        let gate = gate.clone();
        let phase = phase.clone();
        let login_error = login_error.clone();
        Callback::from(move |(username, password): (String, String)| {
            let outcome = gate.borrow_mut().attempt_login(&username, &password);
            match outcome {
                Ok(()) => {
                    login_error.set(None);
                    phase.set(gate.borrow().phase());
                }
                Err(e) => {
                    warn!("Admin login failed for {:?}", username);
                    login_error.set(Some(e.to_string()));
                }
            }
        })
    };

    let on_logout = {
        let gate = gate.clone();
        let phase = phase.clone();
        Callback::from(move |_: ()| {
            gate.borrow_mut().logout();
            phase.set(gate.borrow().phase());
        })
    };

    html! {
        <div class="admin">
            <header class="top-nav">
                <div class="nav-content narrow">
                    <div class="brand"><div class="brand-mark" /><span>{"Syntech Admin"}</span></div>
                    <nav><a href="#">{"← Back to site"}</a></nav>
                </div>
            </header>
            {
                match *phase {
                    SessionPhase::LoggedIn => html! { <AdminDashboard {on_logout} /> },
                    SessionPhase::LoggedOut => html! {
                        <AdminLogin on_submit={on_login} error={(*login_error).clone()} />
                    },
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AdminLoginProps {
    pub on_submit: Callback<(String, String)>,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component]
pub fn AdminLogin(props: &AdminLoginProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(((*username).clone(), (*password).clone()));
        })
    };

    let bind = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            handle.set(input.value());
        })
    };

    html! {
        <Section class="login">
            <Card title="Welcome back" description="Sign in to manage your ImmersiFair deployments.">
                <div class="eyebrow">{"Admin Login"}</div>
                <form class="form" {onsubmit}>
                    <label>
                        <div class="field-label">{"Username"}</div>
                        <input class="input" value={(*username).clone()} oninput={bind(&username)} placeholder="admin" />
                    </label>
                    <label>
                        <div class="field-label">{"Password"}</div>
                        <input class="input" type="password" value={(*password).clone()} oninput={bind(&password)} placeholder="••••••" />
                    </label>
                    if let Some(error) = &props.error {
                        <div class="error-message">{ error.clone() }</div>
                    }
                    <button type="submit" class="button">{"Sign in"}</button>
                </form>
            </Card>
        </Section>
    }
}

#[derive(Properties, PartialEq)]
pub struct AdminDashboardProps {
    pub on_logout: Callback<()>,
}

#[function_component]
pub fn AdminDashboard(props: &AdminDashboardProps) -> Html {
    let onclick = props.on_logout.reform(|_: MouseEvent| ());

    html! {
        <>
            <Section class="dashboard">
                <div class="dashboard-header">
                    <div>
                        <h1>{"Admin Dashboard"}</h1>
                        <p class="muted">{"Quick snapshot of your ImmersiFair event. (Demo data)"}</p>
                    </div>
                    <button class="button button-light" {onclick}>{"Log out"}</button>
                </div>
                <div class="grid grid-4">
                    { for ADMIN_STATS.iter().map(|s| html! {
                        <Card class="stat">
                            <div class="stat-value">{ s.value }</div>
                            <div class="stat-label">{ s.label }</div>
                        </Card>
                    }) }
                </div>
            </Section>
            <Section class="dashboard-panels">
                <div class="grid grid-2">
                    <Card title="Recent sign‑ins" description="Top performers and engagement (demo)">
                        <ul class="bullets">
                            { for RECENT_SIGN_INS.iter().map(|line| html! { <li>{ *line }</li> }) }
                        </ul>
                    </Card>
                    <Card title="Actions" description="Common quick tasks">
                        <div class="grid grid-2">
                            { for ADMIN_ACTIONS.iter().map(|action| html! { <button class="button">{ *action }</button> }) }
                        </div>
                    </Card>
                </div>
            </Section>
        </>
    }
}
