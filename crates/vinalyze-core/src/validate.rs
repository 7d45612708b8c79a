//! Declarative validation of a submission draft against the constraint table.
//!
//! Each field is checked independently: parse, then inclusive bounds, then
//! step granularity. All failing fields are reported in one pass so every
//! input can be annotated in a single round trip.

use crate::constraint::{constraint_for, MeasurementConstraint, WineField};
use crate::error::{FieldError, FieldErrorKind, ValidationReport};
use crate::submission::{Submission, SubmissionDraft};

/// Relative tolerance for the step-multiple check. Parse and divide noise
/// stays orders of magnitude below this.
const STEP_TOLERANCE: f64 = 1e-9;

/// Validates `draft` against the constraint table.
///
/// Returns the validated [`Submission`] when every field passes, or a
/// [`ValidationReport`] with one error per failing field, in table order.
///
/// # Example
///
/// ```
/// use vinalyze_core::{validate, SubmissionDraft, WineField, FieldErrorKind};
///
/// let draft = SubmissionDraft::new();
/// let report = validate(&draft).unwrap_err();
///
/// // Empty input is absent, never coerced to zero.
/// let error = report.for_field(WineField::Alcohol).unwrap();
/// assert_eq!(error.kind, FieldErrorKind::InvalidNumber);
/// ```
pub fn validate(draft: &SubmissionDraft) -> Result<Submission, ValidationReport> {
    let mut values = [0.0f64; 11];
    let mut report = ValidationReport::default();

    for field in WineField::ALL {
        match check_field(draft.get(field), constraint_for(field)) {
            Ok(value) => values[field as usize] = value,
            Err(error) => report.push(error),
        }
    }

    if !report.is_empty() {
        return Err(report);
    }

    let v = |field: WineField| values[field as usize];
    Ok(Submission {
        fixed_acidity: v(WineField::FixedAcidity),
        volatile_acidity: v(WineField::VolatileAcidity),
        citric_acid: v(WineField::CitricAcid),
        residual_sugar: v(WineField::ResidualSugar),
        chlorides: v(WineField::Chlorides),
        free_sulfur_dioxide: v(WineField::FreeSulfurDioxide),
        total_sulfur_dioxide: v(WineField::TotalSulfurDioxide),
        density: v(WineField::Density),
        ph: v(WineField::Ph),
        sulphates: v(WineField::Sulphates),
        alcohol: v(WineField::Alcohol),
    })
}

fn check_field(raw: &str, constraint: &MeasurementConstraint) -> Result<f64, FieldError> {
    let field = constraint.field;

    let value: f64 = match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => return Err(invalid_number(field)),
    };
    if !value.is_finite() {
        return Err(invalid_number(field));
    }

    if value < constraint.min {
        return Err(FieldError {
            field,
            kind: FieldErrorKind::OutOfRange,
            message: format!(
                "{} can't be lower than {}{}.",
                field.label(),
                constraint.min,
                unit_suffix(constraint.unit)
            ),
        });
    }
    if value > constraint.max {
        return Err(FieldError {
            field,
            kind: FieldErrorKind::OutOfRange,
            message: format!(
                "{} can't exceed {}{}.",
                field.label(),
                constraint.max,
                unit_suffix(constraint.unit)
            ),
        });
    }

    if !is_step_multiple(value, constraint.step) {
        return Err(FieldError {
            field,
            kind: FieldErrorKind::Precision,
            message: format!("{} must be a multiple of {}.", field.label(), constraint.step),
        });
    }

    Ok(value)
}

fn invalid_number(field: WineField) -> FieldError {
    FieldError {
        field,
        kind: FieldErrorKind::InvalidNumber,
        message: "Invalid number.".to_string(),
    }
}

fn unit_suffix(unit: &str) -> String {
    if unit.is_empty() {
        String::new()
    } else {
        format!(" {unit}")
    }
}

fn is_step_multiple(value: f64, step: f64) -> bool {
    let steps = value / step;
    (steps - steps.round()).abs() <= STEP_TOLERANCE * steps.abs().max(1.0)
}
