use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::layout::Card;
use crate::contact::{
    ContactEndpoint, ContactField, HttpContactEndpoint, Submission, SubmissionError, SubmissionState,
};

pub enum ContactFormMsg {
    Edit(ContactField, String),
    Submit,
    Settled(Result<(), SubmissionError>),
}

pub struct ContactForm {
    submission: Submission,
    endpoint: HttpContactEndpoint,
}

impl Component for ContactForm {
    type Message = ContactFormMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            submission: Submission::new(),
            endpoint: HttpContactEndpoint::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::Edit(field, value) => {
                self.submission.edit(field, value);
                true
            }
            ContactFormMsg::Submit => {
                let Some(payload) = self.submission.submit() else {
                    return false;
                };
                let endpoint = self.endpoint.clone();
                ctx.link().send_future(async move {
                    ContactFormMsg::Settled(endpoint.deliver(&payload).await)
                });
                true
            }
            ContactFormMsg::Settled(outcome) => {
                self.submission.settle(outcome);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = self.submission.state();
        let fields = self.submission.fields();
        let pending = self.submission.is_pending();

        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactFormMsg::Submit
        });
        let input = |field: ContactField| {
            ctx.link().callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                ContactFormMsg::Edit(field, input.value())
            })
        };
        let on_message = ctx.link().callback(|e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            ContactFormMsg::Edit(ContactField::Message, input.value())
        });

        html! {
            <Card title="Send a message" description="We’ll get back to you shortly.">
                if *state == SubmissionState::Succeeded {
                    <div class="success-message">{"Thanks! Your message was sent. We’ll reply soon."}</div>
                } else {
                    <form class="form" {onsubmit}>
                        <label>
                            <div class="field-label">{"Full name"}</div>
                            <input class="input" value={fields.name.clone()} oninput={input(ContactField::Name)}
                                placeholder="Jane Doe" required=true />
                        </label>
                        <label>
                            <div class="field-label">{"Work email"}</div>
                            <input class="input" type="email" value={fields.email.clone()} oninput={input(ContactField::Email)}
                                placeholder="jane@company.com" required=true />
                        </label>
                        <label>
                            <div class="field-label">{"Organization"}</div>
                            <input class="input" value={fields.organization.clone()} oninput={input(ContactField::Organization)}
                                placeholder="Company / University" />
                        </label>
                        <label>
                            <div class="field-label">{"Message"}</div>
                            <textarea class="input" rows="5" value={fields.message.clone()} oninput={on_message}
                                placeholder="What would you like to build together?" required=true />
                        </label>
                        if let SubmissionState::Failed(message) = state {
                            <div class="error-message">{ message.clone() }</div>
                        }
                        <button type="submit" class="button" disabled={pending}>
                            { if pending { "Sending…" } else { "Submit" } }
                        </button>
                    </form>
                }
            </Card>
        }
    }
}
