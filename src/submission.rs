use std::{future::Future, time::Duration};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shown whenever the relay gives us nothing better to say.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to send message. Please try again.";

/// How long `success`/`error` stay on screen before the form resets.
pub const REVERT_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("a submission is already in flight")]
    AlreadySubmitting,
}

/// Identifies one pass through the state machine. Results and revert timers
/// carrying an outdated ticket are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default)]
pub struct SubmissionMachine {
    state: SubmissionState,
    generation: u64,
}

impl SubmissionMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn begin(&mut self) -> Result<Ticket, SubmissionError> {
        if self.state.is_submitting() {
            return Err(SubmissionError::AlreadySubmitting);
        }
        self.generation += 1;
        self.state = SubmissionState::Submitting;
        Ok(Ticket(self.generation))
    }

    /// Record the outcome of the request started with `ticket`.
    ///
    /// Returns the ticket to hand to the revert timer, or `None` if the
    /// outcome belongs to a stale submission.
    pub fn finish(&mut self, ticket: Ticket, outcome: Result<(), String>) -> Option<Ticket> {
        if ticket.0 != self.generation || !self.state.is_submitting() {
            return None;
        }
        self.state = match outcome {
            Ok(()) => SubmissionState::Success,
            Err(msg) => SubmissionState::Error(msg),
        };
        Some(ticket)
    }

    pub fn revert(&mut self, ticket: Ticket) -> bool {
        let settled = matches!(
            self.state,
            SubmissionState::Success | SubmissionState::Error(_)
        );
        if ticket.0 != self.generation || !settled {
            return false;
        }
        self.state = SubmissionState::Idle;
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: u16,
    pub body: String,
}

impl RelayResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("couldn't encode request: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Network(String),
}

/// The third-party endpoint that turns form posts into mail.
pub trait FormRelay {
    fn post_json(
        &self,
        endpoint: &str,
        payload: &ContactMessage,
    ) -> impl Future<Output = Result<RelayResponse, RelayError>>;
}

#[derive(Deserialize)]
struct RelayErrorBody {
    error: Option<String>,
}

/// Map a relay response onto the message the form should show.
pub fn interpret(response: &RelayResponse) -> Result<(), String> {
    if response.is_success() {
        return Ok(());
    }
    let message = serde_json::from_str::<RelayErrorBody>(&response.body)
        .ok()
        .and_then(|b| b.error)
        .filter(|msg| !msg.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());
    Err(message)
}

pub async fn deliver<R: FormRelay>(
    relay: &R,
    endpoint: &str,
    payload: &ContactMessage,
) -> Result<(), String> {
    match relay.post_json(endpoint, payload).await {
        Ok(response) => {
            log::debug!("form relay answered {}", response.status);
            interpret(&response)
        }
        Err(e) => {
            log::warn!("form relay unreachable: {e}");
            Err(FALLBACK_ERROR_MESSAGE.to_string())
        }
    }
}

#[cfg(feature = "hydrate")]
pub struct GlooRelay;

#[cfg(feature = "hydrate")]
impl FormRelay for GlooRelay {
    async fn post_json(
        &self,
        endpoint: &str,
        payload: &ContactMessage,
    ) -> Result<RelayResponse, RelayError> {
        let resp = gloo_net::http::Request::post(endpoint)
            .header("Accept", "application/json")
            .json(payload)
            .map_err(|e| RelayError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Ok(RelayResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    };

    const ENDPOINT: &str = "https://relay.test/f/abc";

    struct StubRelay {
        reply: Result<RelayResponse, RelayError>,
        calls: AtomicUsize,
        last_payload: Mutex<Option<String>>,
    }

    impl StubRelay {
        fn answering(status: u16, body: &str) -> Self {
            Self::with(Ok(RelayResponse {
                status,
                body: body.to_string(),
            }))
        }

        fn with(reply: Result<RelayResponse, RelayError>) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
                last_payload: Mutex::new(None),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl FormRelay for StubRelay {
        async fn post_json(
            &self,
            endpoint: &str,
            payload: &ContactMessage,
        ) -> Result<RelayResponse, RelayError> {
            assert_eq!(endpoint, ENDPOINT);
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_payload.lock().expect("should be able to lock") =
                Some(serde_json::to_string(payload).expect("should serialize"));
            self.reply.clone()
        }
    }

    fn filled() -> ContactMessage {
        ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello there".into(),
        }
    }

    /// What the contact form does on submit, minus the timer.
    async fn submit(
        machine: &mut SubmissionMachine,
        form: &mut ContactMessage,
        relay: &StubRelay,
    ) -> Option<Ticket> {
        let ticket = machine.begin().ok()?;
        let outcome = deliver(relay, ENDPOINT, form).await;
        let cleared = outcome.is_ok();
        let revert = machine.finish(ticket, outcome);
        if cleared {
            *form = ContactMessage::default();
        }
        revert
    }

    #[test]
    fn test_payload_shape() {
        let json = serde_json::to_value(filled()).expect("should serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Hello there",
            })
        );
    }

    #[test]
    fn test_interpret() {
        let ok = RelayResponse {
            status: 204,
            body: String::new(),
        };
        assert_eq!(interpret(&ok), Ok(()));

        let cases = [
            (422, r#"{"error":"Invalid email"}"#, "Invalid email"),
            (500, "<html>oops</html>", FALLBACK_ERROR_MESSAGE),
            (400, r#"{"errors":[{"message":"x"}]}"#, FALLBACK_ERROR_MESSAGE),
            (400, r#"{"error":""}"#, FALLBACK_ERROR_MESSAGE),
            (400, r#"{"error":null}"#, FALLBACK_ERROR_MESSAGE),
        ];
        for (status, body, expected) in cases {
            let resp = RelayResponse {
                status,
                body: body.to_string(),
            };
            assert_eq!(interpret(&resp), Err(expected.to_string()), "{body}");
        }
    }

    #[test]
    fn test_begin_is_guarded_while_submitting() {
        let mut machine = SubmissionMachine::new();
        assert!(machine.begin().is_ok());
        assert_eq!(machine.begin(), Err(SubmissionError::AlreadySubmitting));
        assert!(machine.state().is_submitting());
    }

    #[tokio::test]
    async fn test_double_submit_sends_one_request() {
        let relay = StubRelay::answering(200, "{}");
        let mut machine = SubmissionMachine::new();

        let ticket = machine.begin().expect("first submit should start");
        // user clicks again while the first request is in flight
        assert!(machine.begin().is_err());

        let outcome = deliver(&relay, ENDPOINT, &filled()).await;
        machine.finish(ticket, outcome);

        assert_eq!(relay.calls(), 1);
        assert_eq!(machine.state(), &SubmissionState::Success);
    }

    #[tokio::test]
    async fn test_success_clears_fields() {
        let relay = StubRelay::answering(200, r#"{"ok":true}"#);
        let mut machine = SubmissionMachine::new();
        let mut form = filled();

        submit(&mut machine, &mut form, &relay).await;

        assert_eq!(machine.state(), &SubmissionState::Success);
        assert_eq!(form, ContactMessage::default());
        assert_eq!(
            relay
                .last_payload
                .lock()
                .expect("should be able to lock")
                .as_deref(),
            Some(r#"{"name":"Ada","email":"ada@example.com","message":"Hello there"}"#)
        );
    }

    #[tokio::test]
    async fn test_rejection_keeps_fields_and_surfaces_message() {
        let relay = StubRelay::answering(422, r#"{"error":"Invalid email"}"#);
        let mut machine = SubmissionMachine::new();
        let mut form = filled();

        submit(&mut machine, &mut form, &relay).await;

        assert_eq!(
            machine.state(),
            &SubmissionState::Error("Invalid email".to_string())
        );
        assert_eq!(machine.state().error_message(), Some("Invalid email"));
        assert_eq!(form, filled());
    }

    #[tokio::test]
    async fn test_network_failure_uses_fallback() {
        let relay = StubRelay::with(Err(RelayError::Network("Failed to fetch".into())));
        let mut machine = SubmissionMachine::new();
        let mut form = filled();

        submit(&mut machine, &mut form, &relay).await;

        assert_eq!(
            machine.state().error_message(),
            Some(FALLBACK_ERROR_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_revert_returns_to_idle_and_allows_resubmit() {
        let relay = StubRelay::answering(500, "");
        let mut machine = SubmissionMachine::new();
        let mut form = filled();

        let ticket = submit(&mut machine, &mut form, &relay)
            .await
            .expect("should get a revert ticket");
        assert!(machine.revert(ticket));
        assert_eq!(machine.state(), &SubmissionState::Idle);
        assert!(!machine.revert(ticket));

        submit(&mut machine, &mut form, &relay).await;
        assert_eq!(relay.calls(), 2);
    }

    #[test]
    fn test_stale_timer_does_not_revert_newer_submission() {
        let mut machine = SubmissionMachine::new();
        let first = machine.begin().expect("should start");
        let first = machine.finish(first, Ok(())).expect("should settle");

        // resubmitted from `success` before the first timer fired
        let second = machine.begin().expect("should start again");
        assert!(!machine.revert(first));
        assert!(machine.state().is_submitting());

        let second = machine
            .finish(second, Err("nope".into()))
            .expect("should settle");
        assert!(!machine.revert(first));
        assert!(machine.revert(second));
    }

    #[test]
    fn test_stale_outcome_is_ignored() {
        let mut machine = SubmissionMachine::new();
        let first = machine.begin().expect("should start");
        machine.finish(first, Ok(()));
        let _second = machine.begin().expect("should start again");

        assert_eq!(machine.finish(first, Err("late".into())), None);
        assert!(machine.state().is_submitting());
    }
}
