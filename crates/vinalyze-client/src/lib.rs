//! Vinalyze Client - HTTP submission layer for the wine quality analyzer
//!
//! This crate performs the one external interaction of the analyzer:
//! - [`PredictionClient`] posts a validated submission to the configured
//!   prediction service and extracts the returned quality label
//! - [`SubmissionController`] wraps the client in the view-side state
//!   machine: validate, submit once, render result or failure

pub mod client;
pub mod controller;

pub use client::{ClientError, PredictionClient, QualityLabel};
pub use controller::{SubmissionController, SubmissionState, SubmitError};
