use gloo_net::http::Request;
use log::{info, warn};
use serde::Serialize;
use thiserror::Error;

use crate::config;

pub const DEFAULT_FAILURE: &str = "Something went wrong";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub organization: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Organization,
    Message,
}

impl ContactFields {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Organization => self.organization = value,
            ContactField::Message => self.message = value,
        }
    }
}

/// Wire shape of `POST /api/contact`.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub org: String,
    pub message: String,
}

impl From<&ContactFields> for ContactPayload {
    fn from(fields: &ContactFields) -> Self {
        Self {
            name: fields.name.clone(),
            email: fields.email.clone(),
            org: fields.organization.clone(),
            message: fields.message.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("{0}")]
    Transport(String),
    #[error("Failed to send")]
    Status(u16),
}

impl SubmissionError {
    pub fn message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            DEFAULT_FAILURE.to_string()
        } else {
            message
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

/// The receiving end of a contact submission.
#[allow(async_fn_in_trait)]
pub trait ContactEndpoint {
    async fn deliver(&self, payload: &ContactPayload) -> Result<(), SubmissionError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpContactEndpoint {
    url: String,
}

impl HttpContactEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for HttpContactEndpoint {
    fn default() -> Self {
        Self::new(config::contact_url())
    }
}

impl ContactEndpoint for HttpContactEndpoint {
    async fn deliver(&self, payload: &ContactPayload) -> Result<(), SubmissionError> {
        let request = Request::post(&self.url)
            .json(payload)
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(SubmissionError::Status(response.status()))
        }
    }
}

/// One contact form's worth of state. At most one request is in flight:
/// `submit` hands out a payload only when nothing is pending, and the
/// caller reports the endpoint's answer back through `settle`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Submission {
    fields: ContactFields,
    state: SubmissionState,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == SubmissionState::Pending
    }

    pub fn edit(&mut self, field: ContactField, value: String) {
        self.fields.set(field, value);
    }

    /// Moves to `Pending` and returns the payload to send. Returns `None`
    /// while a request is already outstanding.
    pub fn submit(&mut self) -> Option<ContactPayload> {
        if self.is_pending() {
            warn!("Contact submission already in flight, ignoring");
            return None;
        }
        self.state = SubmissionState::Pending;
        info!("Sending contact submission");
        Some(ContactPayload::from(&self.fields))
    }

    pub fn settle(&mut self, outcome: Result<(), SubmissionError>) {
        if !self.is_pending() {
            return;
        }
        match outcome {
            Ok(()) => {
                info!("Contact submission delivered");
                self.fields = ContactFields::default();
                self.state = SubmissionState::Succeeded;
            }
            Err(e) => {
                warn!("Contact submission failed: {}", e);
                self.state = SubmissionState::Failed(e.message());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Simulated endpoint answering every request the same way.
    struct FakeEndpoint {
        outcome: Result<(), SubmissionError>,
        received: RefCell<Vec<ContactPayload>>,
    }

    impl FakeEndpoint {
        fn answering(outcome: Result<(), SubmissionError>) -> Self {
            Self {
                outcome,
                received: RefCell::new(Vec::new()),
            }
        }
    }

    impl ContactEndpoint for FakeEndpoint {
        async fn deliver(&self, payload: &ContactPayload) -> Result<(), SubmissionError> {
            self.received.borrow_mut().push(payload.clone());
            self.outcome.clone()
        }
    }

    fn jane() -> Submission {
        let mut submission = Submission::new();
        submission.edit(ContactField::Name, "Jane".into());
        submission.edit(ContactField::Email, "jane@x.com".into());
        submission.edit(ContactField::Organization, "".into());
        submission.edit(ContactField::Message, "hi".into());
        submission
    }

    fn run(submission: &mut Submission, endpoint: &FakeEndpoint) -> Vec<SubmissionState> {
        let mut seen = vec![submission.state().clone()];
        let payload = submission.submit().expect("form was idle");
        seen.push(submission.state().clone());
        let outcome = block_on(endpoint.deliver(&payload));
        submission.settle(outcome);
        seen.push(submission.state().clone());
        seen
    }

    #[test]
    fn success_clears_fields() {
        let endpoint = FakeEndpoint::answering(Ok(()));
        let mut submission = jane();

        let seen = run(&mut submission, &endpoint);

        assert_eq!(
            seen,
            vec![SubmissionState::Idle, SubmissionState::Pending, SubmissionState::Succeeded]
        );
        assert_eq!(submission.fields(), &ContactFields::default());
        assert_eq!(
            endpoint.received.borrow().as_slice(),
            &[ContactPayload {
                name: "Jane".into(),
                email: "jane@x.com".into(),
                org: "".into(),
                message: "hi".into(),
            }]
        );
    }

    #[test]
    fn bad_status_fails_and_keeps_fields() {
        let endpoint = FakeEndpoint::answering(Err(SubmissionError::Status(500)));
        let mut submission = jane();
        let before = submission.fields().clone();

        let seen = run(&mut submission, &endpoint);

        assert_eq!(
            seen,
            vec![
                SubmissionState::Idle,
                SubmissionState::Pending,
                SubmissionState::Failed("Failed to send".into()),
            ]
        );
        assert_eq!(submission.fields(), &before);
    }

    #[test]
    fn transport_error_carries_its_message() {
        let endpoint = FakeEndpoint::answering(Err(SubmissionError::Transport("Failed to fetch".into())));
        let mut submission = jane();
        run(&mut submission, &endpoint);
        assert_eq!(submission.state(), &SubmissionState::Failed("Failed to fetch".into()));
    }

    #[test]
    fn empty_transport_error_falls_back_to_default() {
        let endpoint = FakeEndpoint::answering(Err(SubmissionError::Transport("  ".into())));
        let mut submission = jane();
        run(&mut submission, &endpoint);
        assert_eq!(submission.state(), &SubmissionState::Failed(DEFAULT_FAILURE.into()));
    }

    #[test]
    fn second_submit_while_pending_is_ignored() {
        let mut submission = jane();
        assert!(submission.submit().is_some());
        assert!(submission.submit().is_none());
        assert!(submission.is_pending());
    }

    #[test]
    fn failed_form_can_be_resubmitted() {
        let mut submission = jane();
        run(&mut submission, &FakeEndpoint::answering(Err(SubmissionError::Status(503))));
        let endpoint = FakeEndpoint::answering(Ok(()));

        let seen = run(&mut submission, &endpoint);

        assert_eq!(seen.last(), Some(&SubmissionState::Succeeded));
        assert_eq!(endpoint.received.borrow()[0].name, "Jane");
    }

    #[test]
    fn settle_without_pending_request_is_ignored() {
        let mut submission = jane();
        submission.settle(Ok(()));
        assert_eq!(submission.state(), &SubmissionState::Idle);
        assert_eq!(submission.fields().name, "Jane");
    }

    #[test]
    fn payload_forwards_fields_verbatim() {
        let mut submission = Submission::new();
        submission.edit(ContactField::Organization, "  Uni Hub ".into());
        let payload = submission.submit().unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({"name": "", "email": "", "org": "  Uni Hub ", "message": ""})
        );
    }
}
