//! Submission controller: the view-side state machine around one analysis.
//!
//! Idle -> Validating -> (Submitting -> Result | Submitting -> Failed) ->
//! Idle. Validation runs synchronously inside `submit`; Result and Failed
//! both return to Idle on the next submit or reset. The controller sits
//! behind interior mutability so it can be shared across handlers, which is
//! what makes the in-flight guard meaningful.

use parking_lot::Mutex;
use thiserror::Error;
use tracing::{info, warn};

use vinalyze_config::ClientConfig;
use vinalyze_core::{validate, SubmissionDraft, ValidationReport, WineField};

use crate::client::{ClientError, PredictionClient, QualityLabel};

/// View state of the submission flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    /// Editable form, no outcome yet.
    Idle,
    /// A request is outstanding; further submits are rejected.
    Submitting,
    /// The predictor answered with a quality label.
    Result(QualityLabel),
    /// The last submission failed; the draft is untouched.
    Failed(String),
}

/// Error from a submit attempt.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Another submission is outstanding.
    #[error("a submission is already in flight")]
    InFlight,

    /// The draft failed validation; per-field errors attached.
    #[error("validation failed: {0}")]
    Invalid(ValidationReport),

    /// Configuration or transport failure from the prediction client.
    #[error(transparent)]
    Client(#[from] ClientError),
}

struct ControllerInner {
    draft: SubmissionDraft,
    state: SubmissionState,
}

/// Orchestrates the single external interaction for one form.
pub struct SubmissionController {
    client: Option<PredictionClient>,
    inner: Mutex<ControllerInner>,
}

impl SubmissionController {
    /// Creates a controller from configuration.
    ///
    /// A missing endpoint is not an error here; it surfaces on submit as
    /// [`ClientError::EndpointMissing`] without any network attempt.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            client: PredictionClient::from_config(config).ok(),
            inner: Mutex::new(ControllerInner {
                draft: SubmissionDraft::new(),
                state: SubmissionState::Idle,
            }),
        }
    }

    /// Returns whether a prediction endpoint is configured.
    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Replaces the raw text for one field.
    pub fn set_value(&self, field: WineField, raw: impl Into<String>) {
        self.inner.lock().draft.set(field, raw);
    }

    /// Replaces the whole draft, e.g. from a posted form.
    pub fn set_draft(&self, draft: SubmissionDraft) {
        self.inner.lock().draft = draft;
    }

    /// Returns a copy of the current draft.
    pub fn draft(&self) -> SubmissionDraft {
        self.inner.lock().draft.clone()
    }

    /// Returns the current view state.
    pub fn state(&self) -> SubmissionState {
        self.inner.lock().state.clone()
    }

    /// Returns the form to the editable Idle state. The draft is preserved.
    ///
    /// No effect while a request is outstanding.
    pub fn reset(&self) {
        let mut inner = self.inner.lock();
        if inner.state != SubmissionState::Submitting {
            inner.state = SubmissionState::Idle;
        }
    }

    /// Validates the draft and, when it passes, performs the one POST.
    ///
    /// Order on trigger: in-flight guard, validation, endpoint check,
    /// network. The lock is never held across the network await; only state
    /// transitions take it. On failure the draft is left untouched so the
    /// user can resubmit.
    pub async fn submit(&self) -> Result<QualityLabel, SubmitError> {
        let (client, submission) = {
            let mut inner = self.inner.lock();
            if inner.state == SubmissionState::Submitting {
                return Err(SubmitError::InFlight);
            }

            let submission = match validate(&inner.draft) {
                Ok(submission) => submission,
                Err(report) => {
                    inner.state = SubmissionState::Idle;
                    return Err(SubmitError::Invalid(report));
                }
            };

            let client = match &self.client {
                Some(client) => client.clone(),
                None => {
                    warn!("submit attempted without a configured endpoint");
                    inner.state = SubmissionState::Idle;
                    return Err(SubmitError::Client(ClientError::EndpointMissing));
                }
            };

            inner.state = SubmissionState::Submitting;
            (client, submission)
        };

        match client.predict(&submission).await {
            Ok(label) => {
                info!(label = %label, "wine analysis successful");
                self.inner.lock().state = SubmissionState::Result(label.clone());
                Ok(label)
            }
            Err(error) => {
                warn!(%error, "wine analysis failed");
                self.inner.lock().state = SubmissionState::Failed(error.to_string());
                Err(SubmitError::Client(error))
            }
        }
    }
}
