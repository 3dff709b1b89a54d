//! Asynchronous success actions
//!
//! Once a form validates, its payload is handed to a [`SubmitAction`] that
//! runs on the tokio runtime. [`FormRunner`] owns the spawned task: it flags
//! the form as submitting, clears the flag when the action settles, and
//! aborts the task on [`FormRunner::cancel`] or when the runner is dropped
//! with the screen that owns it.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;

use crate::form::{Form, FormError, SubmitOutcome};
use crate::validation::SubmitPayload;

/// Form shared between the UI and a running action
pub type SharedForm = Arc<Mutex<Form>>;

/// Failure of a success action
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action ran and failed
    #[error("Action failed: {0}")]
    Failed(String),

    /// The action was aborted before it settled
    #[error("Action cancelled")]
    Cancelled,
}

/// What a settled action produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action finished with no user-facing result
    Completed,
    /// The action surfaced a message to the user
    Notice(String),
}

/// Screen-specific work performed with a validated payload
#[async_trait]
pub trait SubmitAction: Send + Sync + 'static {
    /// Perform the action
    async fn perform(&self, payload: SubmitPayload) -> Result<ActionOutcome, ActionError>;
}

/// Drives a form's submissions through a success action
pub struct FormRunner {
    form: SharedForm,
    action: Arc<dyn SubmitAction>,
    pending: Option<JoinHandle<Result<ActionOutcome, ActionError>>>,
}

impl std::fmt::Debug for FormRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormRunner")
            .field("form", &self.form)
            .field("pending", &self.pending.is_some())
            .finish()
    }
}

impl FormRunner {
    /// Bind a form to its success action
    pub fn new(form: Form, action: Arc<dyn SubmitAction>) -> Self {
        Self {
            form: Arc::new(Mutex::new(form)),
            action,
            pending: None,
        }
    }

    /// Shared handle to the form
    pub fn form(&self) -> SharedForm {
        Arc::clone(&self.form)
    }

    /// Whether a submission is in flight
    pub fn is_submitting(&self) -> bool {
        self.form.lock().is_submitting()
    }

    /// Forward typed text to a field
    pub fn change_text(&self, name: &str, text: impl Into<String>) -> Result<(), FormError> {
        self.form.lock().change_text(name, text)
    }

    /// Forward a focus event to a field
    pub fn focus(&self, name: &str) -> Result<(), FormError> {
        self.form.lock().focus(name)
    }

    /// Forward a blur event to a field
    pub fn blur(&self, name: &str) -> Result<(), FormError> {
        self.form.lock().blur(name)
    }

    /// Flip text obscuring on a secure field
    pub fn toggle_visibility(&self, name: &str) -> Result<bool, FormError> {
        self.form.lock().toggle_visibility(name)
    }

    /// Validate and, when valid, start the success action
    ///
    /// The payload is a snapshot: edits made while the action runs do not
    /// reach it. Must be called from within a tokio runtime.
    pub fn submit(&mut self) -> Result<SubmitOutcome, FormError> {
        let outcome = {
            let mut form = self.form.lock();
            let outcome = form.submit()?;
            if outcome.is_valid() {
                form.begin_submit();
            }
            outcome
        };

        if let SubmitOutcome::Valid(payload) = &outcome {
            tracing::info!(fields = payload.len(), "Submit accepted, starting action");
            let form = Arc::clone(&self.form);
            let action = Arc::clone(&self.action);
            let payload = payload.clone();
            self.pending = Some(tokio::spawn(async move {
                let result = action.perform(payload).await;
                form.lock().finish_submit();
                result
            }));
        }

        Ok(outcome)
    }

    /// Wait for the in-flight action, if any, and return its result
    pub async fn settle(&mut self) -> Option<Result<ActionOutcome, ActionError>> {
        let handle = self.pending.take()?;
        let result = match handle.await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(ActionError::Cancelled),
            Err(e) => {
                self.form.lock().finish_submit();
                Err(ActionError::Failed(e.to_string()))
            }
        };

        match &result {
            Ok(outcome) => tracing::debug!(?outcome, "Action settled"),
            Err(e) => tracing::warn!("Action did not complete: {}", e),
        }
        Some(result)
    }

    /// Abort the in-flight action; returns whether one was running
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                let was_running = !handle.is_finished();
                handle.abort();
                self.form.lock().finish_submit();
                if was_running {
                    tracing::info!("Cancelled in-flight submission");
                }
                was_running
            }
            None => false,
        }
    }
}

impl Drop for FormRunner {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
            self.form.lock().finish_submit();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldSpec, FormPolicy};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct DelayedAction {
        delay: Duration,
        calls: AtomicUsize,
        seen: Mutex<Vec<SubmitPayload>>,
        fail: bool,
    }

    impl DelayedAction {
        fn new(delay: Duration) -> Arc<Self> {
            Arc::new(Self {
                delay,
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
                fail: false,
            })
        }
    }

    #[async_trait]
    impl SubmitAction for DelayedAction {
        async fn perform(&self, payload: SubmitPayload) -> Result<ActionOutcome, ActionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            self.seen.lock().push(payload);
            if self.fail {
                return Err(ActionError::Failed("backend unavailable".to_string()));
            }
            Ok(ActionOutcome::Completed)
        }
    }

    fn login_form() -> Form {
        Form::new(
            vec![
                FieldSpec::new("username", "Username").required(),
                FieldSpec::password("password", "Password").with_max_length(100),
            ],
            FormPolicy::default(),
        )
        .unwrap()
    }

    fn filled_runner(action: Arc<DelayedAction>) -> FormRunner {
        let runner = FormRunner::new(login_form(), action);
        runner.change_text("username", "alice").unwrap();
        runner.change_text("password", "secret").unwrap();
        runner
    }

    #[tokio::test(start_paused = true)]
    async fn test_valid_submit_invokes_action_once() {
        let action = DelayedAction::new(Duration::from_millis(1500));
        let mut runner = filled_runner(Arc::clone(&action));

        let outcome = runner.submit().unwrap();
        assert!(outcome.is_valid());
        assert!(runner.is_submitting());

        let result = runner.settle().await.unwrap();
        assert_eq!(result, Ok(ActionOutcome::Completed));
        assert!(!runner.is_submitting());
        assert_eq!(action.calls.load(Ordering::SeqCst), 1);

        let seen = action.seen.lock();
        assert_eq!(seen[0].get("username"), Some("alice"));
        assert_eq!(seen[0].get("password"), Some("secret"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_submit_skips_action() {
        let action = DelayedAction::new(Duration::from_millis(10));
        let mut runner = FormRunner::new(login_form(), Arc::clone(&action) as Arc<dyn SubmitAction>);

        let outcome = runner.submit().unwrap();
        assert!(!outcome.is_valid());
        assert!(!runner.is_submitting());
        assert!(runner.settle().await.is_none());
        assert_eq!(action.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_submit_while_in_flight_refused() {
        let action = DelayedAction::new(Duration::from_secs(2));
        let mut runner = filled_runner(Arc::clone(&action));

        runner.submit().unwrap();
        assert_eq!(runner.submit(), Err(FormError::SubmitInFlight));

        runner.settle().await.unwrap().unwrap();
        assert_eq!(action.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sequential_submits_produce_equal_payloads() {
        let action = DelayedAction::new(Duration::from_millis(100));
        let mut runner = filled_runner(Arc::clone(&action));

        let first = runner.submit().unwrap();
        runner.settle().await.unwrap().unwrap();
        let second = runner.submit().unwrap();
        runner.settle().await.unwrap().unwrap();

        assert_eq!(first, second);
        let seen = action.seen.lock();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], seen[1]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_edits_during_flight_do_not_reach_payload() {
        let action = DelayedAction::new(Duration::from_millis(500));
        let mut runner = filled_runner(Arc::clone(&action));

        runner.submit().unwrap();
        runner.change_text("username", "mallory").unwrap();
        runner.settle().await.unwrap().unwrap();

        assert_eq!(action.seen.lock()[0].get("username"), Some("alice"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_aborts_pending_action() {
        let action = DelayedAction::new(Duration::from_secs(5));
        let mut runner = filled_runner(Arc::clone(&action));

        runner.submit().unwrap();
        tokio::task::yield_now().await;
        assert!(runner.cancel());
        assert!(!runner.is_submitting());

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(action.seen.lock().is_empty());
        assert!(runner.settle().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_pending_action() {
        let action = DelayedAction::new(Duration::from_secs(1));
        let mut runner = filled_runner(Arc::clone(&action));
        let form = runner.form();

        runner.submit().unwrap();
        drop(runner);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(action.seen.lock().is_empty());
        assert!(!form.lock().is_submitting());
    }

    #[tokio::test(start_paused = true)]
    async fn test_action_failure_surfaces() {
        let action = Arc::new(DelayedAction {
            delay: Duration::from_millis(10),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
            fail: true,
        });
        let mut runner = filled_runner(action);

        runner.submit().unwrap();
        let result = runner.settle().await.unwrap();
        assert_eq!(result, Err(ActionError::Failed("backend unavailable".to_string())));
        assert!(!runner.is_submitting());
    }
}
