//! Vinalyze Core - Core types for the red wine quality client
//!
//! This crate provides the fundamental pieces of the analyzer:
//! - The measurement constraint table for the eleven chemistry fields
//! - Submission types for raw and validated input
//! - The declarative validator producing per-field error annotations

pub mod constraint;
pub mod error;
pub mod submission;
pub mod validate;

pub use constraint::{constraint_for, constraints, MeasurementConstraint, WineField, CONSTRAINTS};
pub use error::{FieldError, FieldErrorKind, ValidationReport};
pub use submission::{Submission, SubmissionDraft};
pub use validate::validate;
