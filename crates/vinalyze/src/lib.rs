//! Vinalyze - Red Wine Quality Analysis Client
//!
//! Collects eleven wine chemistry measurements, validates them against
//! physically plausible ranges, and submits them to an external prediction
//! service, surfacing the returned quality label.
//!
//! # Example
//!
//! ```rust
//! use vinalyze::prelude::*;
//!
//! let mut draft = SubmissionDraft::new();
//! draft.set(WineField::Alcohol, "11.5");
//!
//! // Ten fields are still absent, so validation reports them.
//! let report = validate(&draft).unwrap_err();
//! assert_eq!(report.len(), 10);
//! ```

// Constraint table and validation
pub use vinalyze_core::{
    constraint_for, constraints, validate, FieldError, FieldErrorKind, MeasurementConstraint,
    Submission, SubmissionDraft, ValidationReport, WineField, CONSTRAINTS,
};

// Endpoint configuration
pub use vinalyze_config::{ClientConfig, ConfigError, ENDPOINT_ENV};

// HTTP client and submission state machine
pub use vinalyze_client::{
    ClientError, PredictionClient, QualityLabel, SubmissionController, SubmissionState,
    SubmitError,
};

pub mod prelude {
    pub use super::{
        validate, ClientConfig, PredictionClient, QualityLabel, Submission, SubmissionController,
        SubmissionDraft, SubmissionState, WineField,
    };
}
