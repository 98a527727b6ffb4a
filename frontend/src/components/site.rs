use chrono::Datelike;
use yew::prelude::*;

use crate::components::animated::{AnimatedNumber, ParallaxHero, ProgressBar};
use crate::components::contact_form::ContactForm;
use crate::components::layout::{Card, Section};
use crate::components::widgets::{FaqAccordion, Marquee, SolutionTabs};
use crate::content::{
    ABOUT_POINTS, CONTACT_FACTS, FEATURES, FOOTER_LINKS, METRICS, NAV_LINKS, PARTNERS, PHASES,
    REVENUE, STEPS,
};

fn card_grid(cards: &'static [crate::content::Card]) -> Html {
    html! {
        <div class="grid grid-3">
            { for cards.iter().map(|c| html! {
                <Card class="tilt" title={c.title} description={c.desc} />
            }) }
        </div>
    }
}

#[function_component]
pub fn SyntechSite() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <div class="site">
            <ProgressBar />
            <div class="orbs" aria-hidden="true">
                <div class="orb orb-top" />
                <div class="orb orb-bottom" />
            </div>

            <header class="top-nav">
                <div class="nav-content">
                    <div class="brand"><div class="brand-mark" /><span>{"Syntech Solutions"}</span></div>
                    <nav class="nav-links">
                        { for NAV_LINKS.iter().map(|(href, label)| html! { <a href={*href}>{ *label }</a> }) }
                    </nav>
                    <a href="#contact"><button class="button">{"Partner with us"}</button></a>
                </div>
            </header>

            <ParallaxHero />
            <Marquee items={PARTNERS} />

            <Section id="about" class="grid grid-2">
                <div>
                    <h2>{"Who we are"}</h2>
                    <p class="lead">
                        {"Syntech Solutions delivers sustainable VR training systems that combine Meta‑class headsets \
                          with affordable ESP32‑powered haptic gloves. Our focus is high‑impact, safe, hands‑on \
                          learning for medical, engineering, creative and business students—especially for skills like \
                          suturing, assembly, design sprints and client simulations."}
                    </p>
                </div>
                <Card title="What we do" description="ImmersiFair: a VR platform for career fairs that converts passive CV drops into \
                    5–12 minute, haptics‑enabled skill challenges with instant feedback and micro‑credentials.">
                    <div class="grid grid-2">
                        { for ABOUT_POINTS.iter().map(|p| html! {
                            <div>
                                <div class="point-title">{ p.title }</div>
                                <div class="muted">{ p.desc }</div>
                            </div>
                        }) }
                    </div>
                </Card>
            </Section>

            <Section id="solution">
                <p class="eyebrow">{"ImmersiFair"}</p>
                <h2>{"Experiential employability, at scale"}</h2>
                <p class="lead">
                    {"Students complete short, realistic challenges in VR—diagnose a circuit fault, run a client \
                      negotiation, model in 3D, or practice surgical sutures—with tactile realism from our \
                      in‑house haptic gloves. Recruiters get data that goes beyond resumes to assess accuracy, \
                      problem‑solving and adaptability."}
                </p>
                <SolutionTabs />
            </Section>

            <Section id="features">
                <h2>{"Key features"}</h2>
                <p class="lead">{"Built for Talentbank‑scale fairs and campus deployments."}</p>
                { card_grid(FEATURES) }
            </Section>

            <Section id="metrics">
                <h2>{"Target outcomes"}</h2>
                <p class="lead">{"Clear, measurable wins for students, recruiters and organizers."}</p>
                <div class="grid grid-3">
                    { for METRICS.iter().map(|m| html! {
                        <Card class="metric">
                            <div class="metric-value"><AnimatedNumber value={m.kpi} />{" "}{ m.suffix }</div>
                            <div class="muted">{ m.label }</div>
                        </Card>
                    }) }
                </div>
            </Section>

            <Section id="how">
                <h2>{"How it works at a fair"}</h2>
                <div class="grid grid-2">
                    { for STEPS.iter().enumerate().map(|(i, s)| html! {
                        <Card title={s.title} description={s.desc}>
                            <span class="badge">{ format!("Step {}", i + 1) }</span>
                        </Card>
                    }) }
                </div>
            </Section>

            <Section id="revenue">
                <h2>{"Revenue & partnership model"}</h2>
                <p class="lead">{"Multiple scalable streams—while keeping student access free."}</p>
                { card_grid(REVENUE) }
            </Section>

            <Section id="timeline">
                <h2>{"Roadmap"}</h2>
                <div class="grid grid-3">
                    { for PHASES.iter().map(|phase| html! {
                        <Card title={phase.title} description={phase.when}>
                            <ul class="bullets">
                                { for phase.points.iter().map(|p| html! { <li>{ *p }</li> }) }
                            </ul>
                        </Card>
                    }) }
                </div>
            </Section>

            <Section class="cta">
                <h2>{"Ready to build the future of employability?"}</h2>
                <p class="lead">
                    {"Let’s co‑design a sponsored module, run a pilot at your fair, or license ImmersiFair for campus events."}
                </p>
                <a href="#contact"><button class="button">{"Start a partnership"}</button></a>
            </Section>

            <FaqAccordion />

            <Section id="contact" class="grid grid-2">
                <div>
                    <h3>{"Partner with Syntech"}</h3>
                    <p class="lead">
                        {"Tell us about your event, faculty or sponsorship idea. We’ll reply with a tailored proposal within 1–2 business days."}
                    </p>
                    <div class="grid grid-2">
                        { for CONTACT_FACTS.iter().map(|(k, v)| html! {
                            <Card>
                                <div class="muted">{ *k }</div>
                                <div class="point-title">{ *v }</div>
                            </Card>
                        }) }
                    </div>
                </div>
                <ContactForm />
            </Section>

            <footer class="footer">
                <div class="footer-content">
                    <div>{ format!("© {} Syntech Solutions • All rights reserved", year) }</div>
                    <div class="footer-links">
                        { for FOOTER_LINKS.iter().map(|(href, label)| html! { <a href={*href}>{ *label }</a> }) }
                    </div>
                </div>
            </footer>
        </div>
    }
}
