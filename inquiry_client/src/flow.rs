use std::sync::{Mutex, MutexGuard, PoisonError};

use inquiry_extern_contracts::contact::{ContactApiError, ContactApiResponse, ContactApiService};
use inquiry_models::contact::{ContactField, ContactFormFields, SubmissionStatus};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Shown when the server rejected a submission without giving a reason.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Shown when the contact endpoint could not be reached or answered with
/// something unreadable.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

/// Observable state of a contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub fields: ContactFormFields,
    pub status: SubmissionStatus,
    /// Present only while `status` is [`SubmissionStatus::Error`].
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactSubmitFlowError {
    #[error("A submission is already in flight.")]
    AlreadySubmitting,
}

/// Drives a contact form through `idle -> submitting -> success | error`.
///
/// The flow owns the field values and the submission status. All methods take
/// `&self`, so a single instance can be shared (e.g. behind an `Arc`) between
/// the code reacting to user input and a pending [`submit`](Self::submit).
///
/// While a submission is in flight the form is locked: field updates and
/// resets are ignored and another `submit` fails with
/// [`ContactSubmitFlowError::AlreadySubmitting`].
#[derive(Debug)]
pub struct ContactSubmissionFlow<Api> {
    api: Api,
    state: Mutex<ContactFormState>,
}

impl<Api> ContactSubmissionFlow<Api> {
    /// Create a flow with empty fields in the `idle` state.
    pub fn new(api: Api) -> Self {
        Self {
            api,
            state: Default::default(),
        }
    }

    pub fn state(&self) -> ContactFormState {
        self.lock().clone()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.lock().status
    }

    pub fn fields(&self) -> ContactFormFields {
        self.lock().fields.clone()
    }

    pub fn error_message(&self) -> Option<String> {
        self.lock().error_message.clone()
    }

    /// Overwrite a single field. Ignored while a submission is in flight.
    pub fn update_field(&self, field: ContactField, value: impl Into<String>) {
        let mut state = self.lock();
        if state.status == SubmissionStatus::Submitting {
            debug!(%field, "ignoring field update during submission");
            return;
        }
        state.fields.set(field, value.into());
    }

    /// Return to `idle` after a submission finished.
    ///
    /// From `success` this yields the state of a freshly created flow. From
    /// `error` the error message is cleared and the fields are kept. In any
    /// other state nothing happens.
    pub fn reset(&self) {
        let mut state = self.lock();
        match state.status {
            SubmissionStatus::Success | SubmissionStatus::Error => {
                state.status = SubmissionStatus::Idle;
                state.error_message = None;
            }
            SubmissionStatus::Idle | SubmissionStatus::Submitting => {
                debug!(status = %state.status, "ignoring reset");
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, ContactFormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Enter `submitting` and return the fields to send.
    fn begin(&self) -> Result<(InFlight<'_>, ContactFormFields), ContactSubmitFlowError> {
        let mut state = self.lock();
        if state.status == SubmissionStatus::Submitting {
            return Err(ContactSubmitFlowError::AlreadySubmitting);
        }
        state.status = SubmissionStatus::Submitting;
        state.error_message = None;
        let in_flight = InFlight {
            state: &self.state,
            finished: false,
        };
        Ok((in_flight, state.fields.clone()))
    }

    fn finish(
        &self,
        mut in_flight: InFlight<'_>,
        result: Result<ContactApiResponse, ContactApiError>,
    ) -> SubmissionStatus {
        in_flight.finished = true;
        let mut state = self.lock();
        match result {
            Ok(ContactApiResponse::Ok { message }) => {
                info!(?message, "contact form submitted");
                *state = ContactFormState {
                    status: SubmissionStatus::Success,
                    ..Default::default()
                };
            }
            Ok(ContactApiResponse::Rejected { message }) => {
                warn!(?message, "contact form submission rejected");
                state.status = SubmissionStatus::Error;
                state.error_message = Some(message.unwrap_or_else(|| GENERIC_ERROR_MESSAGE.into()));
            }
            Err(err) => {
                warn!("contact form submission failed: {err:#}");
                state.status = SubmissionStatus::Error;
                state.error_message = Some(NETWORK_ERROR_MESSAGE.into());
            }
        }
        state.status
    }
}

impl<Api> ContactSubmissionFlow<Api>
where
    Api: ContactApiService,
{
    /// Send the current fields to the contact endpoint.
    ///
    /// Issues exactly one request and returns the resulting status, either
    /// `success` or `error`. Fields are cleared only on success. Dropping the
    /// returned future before it completes leaves the form in `error`.
    pub async fn submit(&self) -> Result<SubmissionStatus, ContactSubmitFlowError> {
        let (in_flight, fields) = self.begin()?;
        let result = self.api.submit(fields).await;
        Ok(self.finish(in_flight, result))
    }
}

/// Held by a pending [`ContactSubmissionFlow::submit`]. If the submission is
/// dropped before a response arrived, the form moves to `error` with the
/// network error message and keeps its fields.
struct InFlight<'a> {
    state: &'a Mutex<ContactFormState>,
    finished: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        warn!("contact form submission aborted");
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.status = SubmissionStatus::Error;
        state.error_message = Some(NETWORK_ERROR_MESSAGE.into());
    }
}
