//! HTTP client for the external prediction service.
//!
//! One POST per prediction, no retry, no backoff, no client-side timeout;
//! transport defaults apply. The service is an opaque collaborator: the only
//! contract is a JSON body with the eleven measurement keys out, and a JSON
//! object carrying a `wine_quality` string label back.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use vinalyze_config::ClientConfig;
use vinalyze_core::Submission;

/// Error from the prediction client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No prediction endpoint is configured.
    #[error("client isn't connected to a prediction server")]
    EndpointMissing,

    /// The request could not be sent or the response body not read.
    #[error("prediction request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("prediction service returned {0}")]
    BadStatus(reqwest::StatusCode),

    /// The response body did not carry a `wine_quality` label.
    #[error("malformed prediction response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

/// The quality label returned by the external predictor, e.g. "good".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualityLabel(String);

impl QualityLabel {
    /// Wraps a label string.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QualityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Expected response shape. Extra fields are ignored; a missing
/// `wine_quality` is a malformed response.
#[derive(Debug, Deserialize)]
struct PredictionResponse {
    wine_quality: String,
}

/// Client for the external wine quality predictor.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl PredictionClient {
    /// Creates a client posting to `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// [`ClientError::EndpointMissing`] when no endpoint is configured; no
    /// network call is ever attempted in that case.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        match config.endpoint() {
            Some(endpoint) => Ok(Self::new(endpoint)),
            None => Err(ClientError::EndpointMissing),
        }
    }

    /// Returns the configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts `submission` and returns the predicted quality label.
    ///
    /// Issues exactly one request per call.
    pub async fn predict(&self, submission: &Submission) -> Result<QualityLabel, ClientError> {
        debug!(endpoint = %self.endpoint, "submitting measurements for prediction");

        let response = self
            .http
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::BadStatus(status));
        }

        let body = response.text().await?;
        let parsed: PredictionResponse = serde_json::from_str(&body)?;

        debug!(label = %parsed.wine_quality, "prediction received");
        Ok(QualityLabel(parsed.wine_quality))
    }
}
