//! Validation error types surfaced next to each input.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::constraint::WineField;

/// Classification of a per-field validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// Raw input was empty or could not be parsed as a finite number.
    InvalidNumber,
    /// Parsed value lies outside the inclusive bounds.
    OutOfRange,
    /// Parsed value is not expressible at the declared step granularity.
    Precision,
}

/// A validation failure for a single field.
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("{message}")]
pub struct FieldError {
    /// Field the error belongs to.
    pub field: WineField,
    /// Failure classification.
    pub kind: FieldErrorKind,
    /// Human-readable message rendered next to the input.
    pub message: String,
}

/// All per-field errors from one validation pass, in table order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    pub(crate) fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Returns whether the pass produced no errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of failing fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the errors in table order.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Returns the error for `field`, if that field failed.
    pub fn for_field(&self, field: WineField) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", error.field.label(), error.message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lookup_and_display() {
        let mut report = ValidationReport::default();
        report.push(FieldError {
            field: WineField::Alcohol,
            kind: FieldErrorKind::OutOfRange,
            message: "Alcohol can't exceed 15 %.".to_string(),
        });

        assert_eq!(report.len(), 1);
        assert!(report.for_field(WineField::Alcohol).is_some());
        assert!(report.for_field(WineField::Density).is_none());
        assert_eq!(report.to_string(), "Alcohol: Alcohol can't exceed 15 %.");
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&FieldErrorKind::InvalidNumber).unwrap();
        assert_eq!(json, "\"invalid_number\"");
    }
}
