use crate::configuration::FormSettings;
use crate::domain::{ContactSubmission, FormField, FormFields};
use crate::form_client::FormClient;
use crate::status::{StatusRegion, SubmissionStatus, TriggerControl};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Form Submission Controller for one contact form on the page.
///
/// Cloning yields another handle on the same form. The disabled trigger is the
/// only guard against overlapping submissions: while a request is in flight,
/// [`ContactForm::submit`] is a no-op. Dropping an in-flight `submit` future
/// re-enables the trigger and reports a connection error.
#[derive(Clone)]
pub struct ContactForm {
    inner: Arc<Inner>,
}

struct Inner {
    client: FormClient,
    settings: FormSettings,
    state: Mutex<FormState>,
}

struct FormState {
    fields: FormFields,
    status: SubmissionStatus,
    trigger: TriggerControl,
    hide_timer: Option<JoinHandle<()>>,
    attempts: u64,
}

impl FormState {
    fn cancel_hide_timer(&mut self) {
        if let Some(timer) = self.hide_timer.take() {
            timer.abort();
        }
    }
}

enum Started {
    Ignored(SubmissionStatus),
    Invalid(SubmissionStatus),
    Sending(ContactSubmission, u64),
}

/// Restores the trigger if a submit future is dropped before the backend answers.
struct InFlight<'a> {
    form: &'a ContactForm,
    attempt: u64,
    settled: bool,
}

impl InFlight<'_> {
    fn settle(mut self, status: SubmissionStatus) -> SubmissionStatus {
        self.settled = true;
        self.form.finish_attempt(status)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut state = self.form.state();
        if state.attempts == self.attempt {
            tracing::warn!("Contact submission abandoned before the form backend answered");
            state.trigger = TriggerControl::new(self.form.inner.settings.submit_label.clone());
            state.status = SubmissionStatus::connection_error();
        }
    }
}

fn lock(state: &Mutex<FormState>) -> MutexGuard<'_, FormState> {
    // No critical section can leave the state half-updated.
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ContactForm {
    pub fn new(client: FormClient, settings: FormSettings) -> Self {
        let trigger = TriggerControl::new(settings.submit_label.clone());
        Self {
            inner: Arc::new(Inner {
                client,
                settings,
                state: Mutex::new(FormState {
                    fields: FormFields::default(),
                    status: SubmissionStatus::Idle,
                    trigger,
                    hide_timer: None,
                    attempts: 0,
                }),
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, FormState> {
        lock(&self.inner.state)
    }

    pub fn fields(&self) -> FormFields {
        self.state().fields.clone()
    }

    pub fn set_field(&self, field: FormField, value: impl Into<String>) {
        self.state().fields.set(field, value);
    }

    pub fn fill(&self, fields: FormFields) {
        self.state().fields = fields;
    }

    pub fn status(&self) -> SubmissionStatus {
        self.state().status.clone()
    }

    pub fn status_region(&self) -> StatusRegion {
        StatusRegion::from(&self.state().status)
    }

    pub fn trigger(&self) -> TriggerControl {
        self.state().trigger.clone()
    }

    /// Replace the field values and submit them.
    pub async fn submit_with(&self, fields: FormFields) -> SubmissionStatus {
        self.fill(fields);
        self.submit().await
    }

    /// Validate the current field values and, if they pass, post them to the form backend.
    ///
    /// Returns the status the attempt settled in.
    #[tracing::instrument(
        name = "Submit the contact form",
        skip(self),
        fields(attempt_id = %Uuid::new_v4())
    )]
    pub async fn submit(&self) -> SubmissionStatus {
        let (submission, in_flight) = match self.start_attempt() {
            Started::Ignored(status) | Started::Invalid(status) => return status,
            Started::Sending(submission, attempt) => (
                submission,
                InFlight {
                    form: self,
                    attempt,
                    settled: false,
                },
            ),
        };

        let status = match self.inner.client.send_submission(&submission).await {
            Ok(ack) if ack.is_accepted() => {
                tracing::info!(status = ack.status, ok = ack.ok, "Contact submission accepted");
                SubmissionStatus::success()
            }
            Ok(ack) => {
                tracing::warn!(status = ack.status, ok = ack.ok, "Contact submission rejected");
                SubmissionStatus::rejected()
            }
            Err(e) => {
                tracing::error!(error.cause_chain = ?e, "Failed to deliver contact submission");
                SubmissionStatus::connection_error()
            }
        };
        in_flight.settle(status)
    }

    fn start_attempt(&self) -> Started {
        let mut state = self.state();
        if !state.trigger.enabled {
            tracing::info!("Ignoring submit while a submission is in flight");
            return Started::Ignored(state.status.clone());
        }
        state.cancel_hide_timer();
        state.attempts += 1;

        let fields = &state.fields;
        tracing::debug!(
            first_name = fields.is_filled(FormField::FirstName),
            last_name = fields.is_filled(FormField::LastName),
            email = fields.is_filled(FormField::Email),
            service = fields.is_filled(FormField::Service),
            message = fields.is_filled(FormField::Message),
            "Form validation"
        );
        match ContactSubmission::try_from(fields) {
            Ok(submission) => {
                state.status = SubmissionStatus::Sending;
                state.trigger = TriggerControl {
                    enabled: false,
                    label: self.inner.settings.sending_label.clone(),
                };
                Started::Sending(submission, state.attempts)
            }
            Err(e) => {
                tracing::info!(error = ?e, "Contact form failed validation");
                state.status = SubmissionStatus::Failure(e.to_string());
                Started::Invalid(state.status.clone())
            }
        }
    }

    fn finish_attempt(&self, status: SubmissionStatus) -> SubmissionStatus {
        let mut state = self.state();
        state.trigger = TriggerControl::new(self.inner.settings.submit_label.clone());
        if status.is_success() {
            state.fields = FormFields::default();
            state.hide_timer = Some(self.schedule_hide(state.attempts));
        }
        state.status = status.clone();
        status
    }

    fn schedule_hide(&self, attempt: u64) -> JoinHandle<()> {
        let form: Weak<Inner> = Arc::downgrade(&self.inner);
        let delay = self.inner.settings.success_display();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(inner) = form.upgrade() {
                let mut state = lock(&inner.state);
                // A later attempt owns the status now.
                if state.attempts == attempt {
                    state.status = SubmissionStatus::Idle;
                    state.hide_timer = None;
                }
            }
        })
    }

    /// Cancel the pending success auto-hide, if any.
    pub(crate) fn teardown(&self) {
        self.state().cancel_hide_timer();
    }

    pub fn has_pending_hide(&self) -> bool {
        self.state().hide_timer.is_some()
    }
}

impl std::fmt::Debug for ContactForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state();
        f.debug_struct("ContactForm")
            .field("endpoint", &self.inner.client.endpoint().as_str())
            .field("status", &state.status)
            .field("trigger", &state.trigger)
            .finish()
    }
}
