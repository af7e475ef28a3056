use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::transport::{Transport, TransportError, TransportResponse};
use crate::config::SiteConfig;
use crate::models::contact::{validate, validate_field, ContactFormRecord, Field, FieldErrors};
use crate::scheduler::{Scheduler, TimerId};
use crate::sync::lock;

pub const NETWORK_FAILURE_MESSAGE: &str =
    "Não foi possível conectar ao servidor. Verifique sua conexão e tente novamente.";
pub const SEND_FAILURE_MESSAGE: &str =
    "Ocorreu um erro ao enviar sua mensagem. Por favor, tente novamente.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Everything the page needs to draw the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSnapshot {
    pub state: SubmissionState,
    pub field_errors: FieldErrors,
    pub record: ContactFormRecord,
    /// Message from the last failed send, cleared by the next edit or submit.
    pub error: Option<String>,
}

impl FormSnapshot {
    pub fn inputs_disabled(&self) -> bool {
        self.state == SubmissionState::Submitting
    }
}

/// Why a send failed. All of them end in [`SubmissionState::Failed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Network,
    Rejected(u16),
    Malformed,
}

impl Failure {
    pub fn user_message(&self) -> &'static str {
        match self {
            Failure::Network => NETWORK_FAILURE_MESSAGE,
            Failure::Rejected(_) | Failure::Malformed => SEND_FAILURE_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("form is {0:?}, not idle")]
    Busy(SubmissionState),
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FieldErrors),
    #[error("form has been torn down")]
    Unmounted,
}

pub type SnapshotSink = Arc<dyn Fn(&FormSnapshot) + Send + Sync>;

struct FormInner {
    snapshot: FormSnapshot,
    mounted: bool,
    /// Set once a submit attempt showed field errors; edits then re-check.
    revalidate: bool,
    reset_timer: Option<TimerId>,
}

/// Owns the contact form's submission lifecycle.
///
/// ```text
/// Idle --submit, valid--> Submitting --ok--> Succeeded --reset timer--> Idle
///                                    \--error--> Failed --> Idle
/// ```
///
/// Clones share state, so one can sit in an event handler while another is
/// moved into the cleanup hook.
pub struct ContactFormSubmitter<T> {
    inner: Arc<Mutex<FormInner>>,
    transport: Arc<T>,
    scheduler: Arc<dyn Scheduler>,
    endpoint: Arc<str>,
    success_reset: Duration,
    sink: Option<SnapshotSink>,
}

impl<T> Clone for ContactFormSubmitter<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            transport: Arc::clone(&self.transport),
            scheduler: Arc::clone(&self.scheduler),
            endpoint: Arc::clone(&self.endpoint),
            success_reset: self.success_reset,
            sink: self.sink.clone(),
        }
    }
}

impl<T> fmt::Debug for ContactFormSubmitter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactFormSubmitter")
            .field("endpoint", &self.endpoint)
            .field("state", &lock(&self.inner).snapshot.state)
            .finish_non_exhaustive()
    }
}

impl<T> ContactFormSubmitter<T>
where
    T: Transport + Send + Sync + 'static,
{
    pub fn new(config: &SiteConfig, transport: Arc<T>, scheduler: Arc<dyn Scheduler>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(FormInner {
                snapshot: FormSnapshot::default(),
                mounted: true,
                revalidate: false,
                reset_timer: None,
            })),
            transport,
            scheduler,
            endpoint: Arc::from(config.form_endpoint.as_str()),
            success_reset: config.success_reset(),
            sink: None,
        }
    }

    /// Called with a fresh snapshot after every change.
    pub fn with_sink(mut self, sink: impl Fn(&FormSnapshot) + Send + Sync + 'static) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    pub fn snapshot(&self) -> FormSnapshot {
        lock(&self.inner).snapshot.clone()
    }

    pub fn state(&self) -> SubmissionState {
        lock(&self.inner).snapshot.state
    }

    pub fn validate(&self, record: &ContactFormRecord) -> FieldErrors {
        validate(record)
    }

    /// Edits the draft record. Ignored unless the form is idle.
    pub fn set_field(&self, field: Field, value: String) {
        {
            let mut inner = lock(&self.inner);
            if !inner.mounted || inner.snapshot.state != SubmissionState::Idle {
                return;
            }
            inner.snapshot.record.set(field, value);
            inner.snapshot.error = None;
            if inner.revalidate {
                match validate_field(&inner.snapshot.record, field) {
                    Some(message) => inner.snapshot.field_errors.insert(field, message),
                    None => inner.snapshot.field_errors.remove(field),
                }
            }
        }
        self.emit();
    }

    pub fn submit_draft(&self) -> Result<impl Future<Output = SubmissionState> + 'static, SubmitRejected> {
        let draft = lock(&self.inner).snapshot.record.clone();
        self.submit(draft)
    }

    /// Validates `record` and, if it passes, moves to `Submitting` before
    /// returning. The returned future performs the single transport call and
    /// resolves to the state it settled in.
    pub fn submit(
        &self,
        record: ContactFormRecord,
    ) -> Result<impl Future<Output = SubmissionState> + 'static, SubmitRejected> {
        let body = {
            let mut inner = lock(&self.inner);
            if !inner.mounted {
                return Err(SubmitRejected::Unmounted);
            }
            if inner.snapshot.state != SubmissionState::Idle {
                debug!(state = ?inner.snapshot.state, "ignoring re-entrant submit");
                return Err(SubmitRejected::Busy(inner.snapshot.state));
            }

            let errors = validate(&record);
            inner.snapshot.record = record;
            inner.snapshot.error = None;
            if errors.is_empty() {
                inner.snapshot.field_errors.clear();
                inner.snapshot.state = SubmissionState::Submitting;
                Ok(inner.snapshot.record.to_json())
            } else {
                inner.snapshot.field_errors = errors.clone();
                inner.revalidate = true;
                Err(SubmitRejected::Invalid(errors))
            }
        };
        self.emit();
        let body = body?;

        info!(endpoint = %self.endpoint, "sending contact form");
        let this = self.clone();
        Ok(async move {
            let outcome = this.transport.post(&this.endpoint, &body).await;
            this.settle(outcome)
        })
    }

    /// Detaches the form: cancels the success reset and discards any
    /// transport result that arrives later.
    pub fn teardown(&self) {
        let timer = {
            let mut inner = lock(&self.inner);
            inner.mounted = false;
            inner.reset_timer.take()
        };
        if let Some(timer) = timer {
            self.scheduler.cancel(timer);
        }
        debug!("contact form torn down");
    }

    fn settle(&self, outcome: Result<TransportResponse, TransportError>) -> SubmissionState {
        let failure = match outcome {
            Ok(response) if response.ok => None,
            Ok(response) => {
                warn!(status = response.status, "form relay rejected the message");
                Some(Failure::Rejected(response.status))
            }
            Err(TransportError::Network(reason)) => {
                warn!(%reason, "form relay unreachable");
                Some(Failure::Network)
            }
            Err(TransportError::Malformed(reason)) => {
                warn!(%reason, "form relay sent an unreadable reply");
                Some(Failure::Malformed)
            }
        };

        {
            let mut inner = lock(&self.inner);
            if !inner.mounted {
                debug!("discarding result for a torn down form");
                return inner.snapshot.state;
            }
            match failure {
                None => inner.snapshot.state = SubmissionState::Succeeded,
                Some(failure) => {
                    inner.snapshot.state = SubmissionState::Failed;
                    inner.snapshot.error = Some(failure.user_message().to_string());
                }
            }
        }
        self.emit();

        match failure {
            None => {
                info!("contact form delivered");
                self.arm_reset();
                SubmissionState::Succeeded
            }
            Some(_) => {
                {
                    let mut inner = lock(&self.inner);
                    if inner.snapshot.state == SubmissionState::Failed {
                        inner.snapshot.state = SubmissionState::Idle;
                    }
                }
                self.emit();
                SubmissionState::Failed
            }
        }
    }

    fn arm_reset(&self) {
        let this = self.clone();
        let timer = self
            .scheduler
            .schedule(self.success_reset, Box::new(move || this.reset_after_success()));
        let keep = {
            let mut inner = lock(&self.inner);
            let keep = inner.mounted && inner.snapshot.state == SubmissionState::Succeeded;
            if keep {
                inner.reset_timer = Some(timer);
            }
            keep
        };
        if !keep {
            self.scheduler.cancel(timer);
        }
    }

    fn reset_after_success(&self) {
        {
            let mut inner = lock(&self.inner);
            if !inner.mounted || inner.snapshot.state != SubmissionState::Succeeded {
                return;
            }
            inner.snapshot = FormSnapshot::default();
            inner.revalidate = false;
            inner.reset_timer = None;
        }
        debug!("contact form reset after success");
        self.emit();
    }

    fn emit(&self) {
        if let Some(sink) = &self.sink {
            let snapshot = self.snapshot();
            sink(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use serde_json::{json, Value};

    use super::*;
    use crate::scheduler::manual::ManualScheduler;

    #[derive(Default)]
    struct ScriptedTransport {
        replies: Mutex<VecDeque<Result<TransportResponse, TransportError>>>,
        calls: Mutex<Vec<(String, Value)>>,
    }

    impl ScriptedTransport {
        fn replying(reply: Result<TransportResponse, TransportError>) -> Arc<Self> {
            let transport = Self::default();
            lock(&transport.replies).push_back(reply);
            Arc::new(transport)
        }

        fn calls(&self) -> Vec<(String, Value)> {
            lock(&self.calls).clone()
        }
    }

    impl Transport for ScriptedTransport {
        async fn post(&self, url: &str, body: &Value) -> Result<TransportResponse, TransportError> {
            lock(&self.calls).push((url.to_string(), body.clone()));
            lock(&self.replies).pop_front().unwrap_or(Ok(TransportResponse {
                ok: true,
                status: 200,
            }))
        }
    }

    const OK: TransportResponse = TransportResponse { ok: true, status: 200 };

    fn valid_record() -> ContactFormRecord {
        ContactFormRecord {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            phone: Some("(13) 99806-1936".into()),
            message: "Quero um orçamento.".into(),
        }
    }

    struct Harness {
        transport: Arc<ScriptedTransport>,
        clock: Arc<ManualScheduler>,
        form: ContactFormSubmitter<ScriptedTransport>,
        seen: Arc<Mutex<Vec<SubmissionState>>>,
    }

    fn harness(reply: Result<TransportResponse, TransportError>) -> Harness {
        let transport = ScriptedTransport::replying(reply);
        let clock = Arc::new(ManualScheduler::default());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink_seen = Arc::clone(&seen);
        let form = ContactFormSubmitter::new(&SiteConfig::default(), transport.clone(), clock.clone())
            .with_sink(move |snapshot| lock(&sink_seen).push(snapshot.state));
        Harness {
            transport,
            clock,
            form,
            seen,
        }
    }

    #[tokio::test]
    async fn success_resets_after_the_configured_delay() {
        let h = harness(Ok(OK));

        let send = h.form.submit(valid_record()).unwrap();
        assert_eq!(h.form.state(), SubmissionState::Submitting);
        assert!(h.form.snapshot().inputs_disabled());

        assert_eq!(send.await, SubmissionState::Succeeded);
        assert_eq!(h.form.state(), SubmissionState::Succeeded);

        h.clock.advance(Duration::from_millis(2999));
        assert_eq!(h.form.state(), SubmissionState::Succeeded);
        assert_eq!(h.form.snapshot().record, valid_record());

        h.clock.advance(Duration::from_millis(1));
        let snapshot = h.form.snapshot();
        assert_eq!(snapshot.state, SubmissionState::Idle);
        assert!(snapshot.record.is_empty());
        assert_eq!(h.clock.now(), Duration::from_millis(3000));
    }

    #[tokio::test]
    async fn posts_the_record_as_json_to_the_endpoint() {
        let h = harness(Ok(OK));
        h.form.submit(valid_record()).unwrap().await;

        let calls = h.transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, SiteConfig::default().form_endpoint);
        assert_eq!(
            calls[0].1,
            json!({
                "name": "Ana",
                "email": "ana@example.com",
                "phone": "(13) 99806-1936",
                "message": "Quero um orçamento.",
            })
        );
    }

    #[tokio::test]
    async fn rejected_status_fails_and_keeps_the_record() {
        let h = harness(Ok(TransportResponse { ok: false, status: 500 }));

        let settled = h.form.submit(valid_record()).unwrap().await;
        assert_eq!(settled, SubmissionState::Failed);

        let snapshot = h.form.snapshot();
        assert_eq!(snapshot.state, SubmissionState::Idle);
        assert_eq!(snapshot.record, valid_record());
        assert_eq!(snapshot.error.as_deref(), Some(SEND_FAILURE_MESSAGE));
        assert_eq!(
            *lock(&h.seen),
            vec![SubmissionState::Submitting, SubmissionState::Failed, SubmissionState::Idle]
        );
        assert_eq!(h.clock.pending(), 0);
    }

    #[tokio::test]
    async fn network_error_uses_the_connection_message() {
        let h = harness(Err(TransportError::Network("connection refused".into())));

        assert_eq!(h.form.submit(valid_record()).unwrap().await, SubmissionState::Failed);
        let snapshot = h.form.snapshot();
        assert_eq!(snapshot.state, SubmissionState::Idle);
        assert_eq!(snapshot.record, valid_record());
        assert_eq!(snapshot.error.as_deref(), Some(NETWORK_FAILURE_MESSAGE));
    }

    #[tokio::test]
    async fn failed_send_can_be_retried() {
        let h = harness(Err(TransportError::Malformed("expected value".into())));
        assert_eq!(h.form.submit(valid_record()).unwrap().await, SubmissionState::Failed);
        assert_eq!(h.form.submit_draft().unwrap().await, SubmissionState::Succeeded);
        assert_eq!(h.transport.calls().len(), 2);
    }

    #[tokio::test]
    async fn second_submit_while_in_flight_is_rejected() {
        let h = harness(Ok(OK));

        let first = h.form.submit(valid_record()).unwrap();
        let second = h.form.submit(valid_record());
        assert!(matches!(second, Err(SubmitRejected::Busy(SubmissionState::Submitting))));
        assert!(h.transport.calls().is_empty());

        first.await;
        assert_eq!(h.transport.calls().len(), 1);
    }

    #[test]
    fn invalid_record_never_reaches_the_transport() {
        let h = harness(Ok(OK));
        let record = ContactFormRecord {
            email: "not-an-email".into(),
            ..valid_record()
        };

        let Err(SubmitRejected::Invalid(errors)) = h.form.submit(record.clone()) else {
            panic!("invalid record was accepted");
        };
        assert!(errors.contains(Field::Email));

        let snapshot = h.form.snapshot();
        assert_eq!(snapshot.state, SubmissionState::Idle);
        assert_eq!(snapshot.field_errors, errors);
        assert_eq!(snapshot.record, record);
        assert!(h.transport.calls().is_empty());
    }

    #[test]
    fn edits_revalidate_only_after_a_failed_attempt() {
        let h = harness(Ok(OK));

        h.form.set_field(Field::Name, String::new());
        assert!(h.form.snapshot().field_errors.is_empty());

        let _ = h.form.submit_draft();
        assert!(h.form.snapshot().field_errors.contains(Field::Name));

        h.form.set_field(Field::Name, "Ana".into());
        let errors = h.form.snapshot().field_errors;
        assert!(!errors.contains(Field::Name));
        assert!(errors.contains(Field::Email));

        h.form.set_field(Field::Email, "ana@".into());
        assert_eq!(
            h.form.snapshot().field_errors.get(Field::Email),
            Some(crate::models::contact::EMAIL_INVALID)
        );
    }

    #[tokio::test]
    async fn edits_are_ignored_while_submitting_and_clear_errors_after() {
        let h = harness(Err(TransportError::Network("offline".into())));
        let send = h.form.submit(valid_record()).unwrap();
        h.form.set_field(Field::Name, "Outra".into());
        assert_eq!(h.form.snapshot().record.name, "Ana");

        send.await;
        assert!(h.form.snapshot().error.is_some());
        h.form.set_field(Field::Message, "Nova mensagem".into());
        assert_eq!(h.form.snapshot().error, None);
    }

    #[tokio::test]
    async fn teardown_cancels_the_reset_timer() {
        let h = harness(Ok(OK));
        h.form.submit(valid_record()).unwrap().await;
        assert_eq!(h.clock.pending(), 1);

        h.form.teardown();
        assert_eq!(h.clock.pending(), 0);
        h.clock.advance(Duration::from_secs(10));
        assert_eq!(h.form.state(), SubmissionState::Succeeded);
    }

    #[tokio::test]
    async fn result_after_teardown_is_discarded() {
        let h = harness(Ok(OK));
        let send = h.form.submit(valid_record()).unwrap();
        h.form.teardown();
        let notified = lock(&h.seen).len();

        assert_eq!(send.await, SubmissionState::Submitting);
        assert_eq!(h.transport.calls().len(), 1);
        assert_eq!(lock(&h.seen).len(), notified);
        assert_eq!(h.clock.pending(), 0);
        assert!(matches!(h.form.submit(valid_record()), Err(SubmitRejected::Unmounted)));
    }

    #[tokio::test]
    async fn submit_is_rejected_while_success_is_showing() {
        let h = harness(Ok(OK));
        h.form.submit(valid_record()).unwrap().await;
        assert!(matches!(
            h.form.submit(valid_record()),
            Err(SubmitRejected::Busy(SubmissionState::Succeeded))
        ));
    }
}
