//! Intake Submission
//!
//! One form submission becomes exactly one relay request. The outcome is
//! folded into a four-phase [`SubmissionState`] owned by the page session.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut session = IntakeSession::new();
//! let submitter = IntakeSubmitter::new(FormspreeRelay::new(), &config);
//!
//! if let Some(form) = session.begin() {
//!     let outcome = submitter.submit(&form).await;
//!     session.settle(outcome);
//! }
//! ```

use async_trait::async_trait;
use serde::Serialize;

use crate::config::SiteConfig;
use crate::error::{IntakeError, Result};

/// Shown when the relay rejects a submission without a usable message
pub const RELAY_FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

/// Shown when the relay could not be reached at all
pub const NETWORK_FAILURE_MESSAGE: &str = "Submission failed.";

/// Values currently typed into the intake form
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct IntakeForm {
    /// Client or family name (required)
    pub name: String,
    /// Callback number (required)
    pub phone: String,
    pub email: String,
    /// Care needs, free text
    pub message: String,
}

impl IntakeForm {
    /// Reset every field to empty
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Form body in submission order, hidden subject first.
    /// Optional fields are sent even when empty.
    pub fn fields(&self, subject: &str) -> Vec<(&'static str, String)> {
        vec![
            ("_subject", subject.to_string()),
            ("name", self.name.clone()),
            ("phone", self.phone.clone()),
            ("email", self.email.clone()),
            ("message", self.message.clone()),
        ]
    }
}

/// Phase of the intake form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Request in flight
    Sending,
    /// Relay acknowledged the request
    Success,
    /// Relay rejected the request or could not be reached
    Error(String),
}

impl SubmissionState {
    pub const fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Message to show while in the error phase
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Caption of the submit button
    pub const fn submit_label(&self) -> &'static str {
        if self.is_sending() { "Sending..." } else { "Submit Intake Request" }
    }
}

/// Raw relay answer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayReply {
    pub status: u16,
    pub body: String,
}

impl RelayReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Form relay transport (Strategy pattern)
///
/// Implementations must send `Accept: application/json` so the relay
/// answers with a machine-readable body, and must return
/// [`IntakeError::Network`] only when no response arrived.
#[async_trait(?Send)]
pub trait FormRelay {
    /// POST the fields to `endpoint`
    async fn post(&self, endpoint: &str, fields: &[(&'static str, String)]) -> Result<RelayReply>;
}

#[async_trait(?Send)]
impl<R: FormRelay + ?Sized> FormRelay for &R {
    async fn post(&self, endpoint: &str, fields: &[(&'static str, String)]) -> Result<RelayReply> {
        (**self).post(endpoint, fields).await
    }
}

/// Turns one form snapshot into one relay request
#[derive(Debug)]
pub struct IntakeSubmitter<R> {
    relay: R,
    endpoint: String,
    subject: String,
}

impl<R: FormRelay> IntakeSubmitter<R> {
    pub fn new(relay: R, config: &SiteConfig) -> Self {
        Self {
            relay,
            endpoint: config.relay_endpoint.clone(),
            subject: config.intake_subject(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Send the form. Not idempotent: every call is a new record at the relay.
    pub async fn submit(&self, form: &IntakeForm) -> Result<()> {
        let fields = form.fields(&self.subject);
        tracing::debug!(endpoint = %self.endpoint, "Posting intake request");

        let reply = self.relay.post(&self.endpoint, &fields).await?;
        if reply.is_success() {
            return Ok(());
        }

        let message = resolve_rejection_message(&reply.body);
        tracing::debug!(status = reply.status, %message, "Intake request rejected");
        Err(IntakeError::Rejected { status: reply.status, message })
    }
}

/// First `errors[].message` of a relay error body, or the generic message.
pub fn resolve_rejection_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|data| data["errors"][0]["message"].as_str().map(str::to_owned))
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| RELAY_FALLBACK_MESSAGE.to_string())
}

/// Submission state plus the form it describes, for one page session
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntakeSession {
    state: SubmissionState,
    pub form: IntakeForm,
}

impl IntakeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Enter `Sending` and hand back the fields to post.
    ///
    /// Returns `None` while a request is already in flight.
    pub fn begin(&mut self) -> Option<IntakeForm> {
        if self.state.is_sending() {
            return None;
        }
        self.state = SubmissionState::Sending;
        Some(self.form.clone())
    }

    /// Apply the outcome of the request started by [`IntakeSession::begin`].
    /// Fields are kept on failure so the visitor can fix and resend.
    pub fn settle(&mut self, outcome: Result<()>) {
        match outcome {
            Ok(()) => {
                self.form.clear();
                self.state = SubmissionState::Success;
            }
            Err(err) => {
                self.state = SubmissionState::Error(err.user_message());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Relay answering every request with the same canned outcome
    struct CannedRelay {
        outcome: Result<RelayReply>,
        requests: RefCell<Vec<(String, Vec<(&'static str, String)>)>>,
    }

    impl CannedRelay {
        fn new(outcome: Result<RelayReply>) -> Self {
            Self { outcome, requests: RefCell::new(Vec::new()) }
        }

        fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl FormRelay for CannedRelay {
        async fn post(
            &self,
            endpoint: &str,
            fields: &[(&'static str, String)],
        ) -> Result<RelayReply> {
            self.requests.borrow_mut().push((endpoint.to_string(), fields.to_vec()));
            self.outcome.clone()
        }
    }

    fn filled_session() -> IntakeSession {
        let mut session = IntakeSession::new();
        session.form = IntakeForm {
            name: "Jane Doe".into(),
            phone: "(253) 555-0100".into(),
            email: String::new(),
            message: "Companion care three days a week".into(),
        };
        session
    }

    async fn submit_once(relay: &CannedRelay, session: &mut IntakeSession) {
        let submitter = IntakeSubmitter::new(relay, &SiteConfig::default());
        let form = session.begin().unwrap();
        assert_eq!(session.state(), &SubmissionState::Sending);
        let outcome = submitter.submit(&form).await;
        session.settle(outcome);
    }

    #[tokio::test]
    async fn test_success_clears_form() {
        let relay = CannedRelay::new(Ok(RelayReply::new(200, r#"{"ok":true}"#)));
        let mut session = filled_session();
        assert_eq!(session.state(), &SubmissionState::Idle);

        submit_once(&relay, &mut session).await;

        assert_eq!(session.state(), &SubmissionState::Success);
        assert!(session.form.is_empty());
        assert_eq!(relay.request_count(), 1);
    }

    #[tokio::test]
    async fn test_request_carries_subject_and_fields() {
        let relay = CannedRelay::new(Ok(RelayReply::new(200, "")));
        let mut session = filled_session();

        submit_once(&relay, &mut session).await;

        let requests = relay.requests.borrow();
        let (endpoint, fields) = &requests[0];
        assert_eq!(endpoint, "https://formspree.io/f/mwvnlrwq");
        assert_eq!(
            fields[0],
            ("_subject", "New Client Intake Request — Deddeh & Tyler Homecare".to_string())
        );
        let names: Vec<_> = fields.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["_subject", "name", "phone", "email", "message"]);
    }

    #[tokio::test]
    async fn test_relay_error_message_is_surfaced() {
        let relay = CannedRelay::new(Ok(RelayReply::new(
            404,
            r#"{"errors":[{"message":"Form not found"}]}"#,
        )));
        let mut session = filled_session();

        submit_once(&relay, &mut session).await;

        assert_eq!(session.state(), &SubmissionState::Error("Form not found".into()));
        assert_eq!(session.form.name, "Jane Doe");
    }

    #[tokio::test]
    async fn test_unparseable_rejection_falls_back() {
        let relay = CannedRelay::new(Ok(RelayReply::new(502, "<html>Bad Gateway</html>")));
        let mut session = filled_session();

        submit_once(&relay, &mut session).await;

        assert_eq!(session.state().error_message(), Some(RELAY_FALLBACK_MESSAGE));
    }

    #[tokio::test]
    async fn test_network_failure_keeps_fields() {
        let relay = CannedRelay::new(Err(IntakeError::Network("dns error".into())));
        let mut session = filled_session();
        let before = session.form.clone();

        submit_once(&relay, &mut session).await;

        assert_eq!(session.state().error_message(), Some(NETWORK_FAILURE_MESSAGE));
        assert_eq!(session.form, before);
    }

    #[tokio::test]
    async fn test_resubmit_after_error_clears_message() {
        let relay = CannedRelay::new(Err(IntakeError::Network("offline".into())));
        let mut session = filled_session();
        submit_once(&relay, &mut session).await;
        assert!(session.state().error_message().is_some());

        assert!(session.begin().is_some());
        assert_eq!(session.state(), &SubmissionState::Sending);
        assert_eq!(session.state().error_message(), None);
    }

    #[test]
    fn test_no_second_begin_while_sending() {
        let mut session = filled_session();
        assert!(session.begin().is_some());
        assert!(session.begin().is_none());
        assert_eq!(session.state().submit_label(), "Sending...");
    }

    #[test]
    fn test_rejection_message_resolution() {
        assert_eq!(resolve_rejection_message(r#"{"errors":[{"message":"Form not found"}]}"#), "Form not found");
        assert_eq!(
            resolve_rejection_message(r#"{"errors":[{"message":"first"},{"message":"second"}]}"#),
            "first"
        );
        assert_eq!(resolve_rejection_message(r#"{"errors":[]}"#), RELAY_FALLBACK_MESSAGE);
        assert_eq!(resolve_rejection_message(r#"{"errors":[{"message":""}]}"#), RELAY_FALLBACK_MESSAGE);
        assert_eq!(resolve_rejection_message(r#"{"error":"nope"}"#), RELAY_FALLBACK_MESSAGE);
        assert_eq!(resolve_rejection_message(""), RELAY_FALLBACK_MESSAGE);
    }

    #[test]
    fn test_reply_status_ranges() {
        assert!(RelayReply::new(200, "").is_success());
        assert!(RelayReply::new(204, "").is_success());
        assert!(!RelayReply::new(302, "").is_success());
        assert!(!RelayReply::new(422, "").is_success());
    }
}
