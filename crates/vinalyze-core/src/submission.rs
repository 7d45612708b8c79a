//! Submission types: the raw form draft and the validated measurement set.

use serde::{Deserialize, Serialize};

use crate::constraint::WineField;

/// Raw user input for one analysis request, exactly as entered.
///
/// Values stay strings until validation runs; an empty string means the
/// field is absent and is never coerced to zero. Missing keys deserialize
/// to the empty string so a partial form round-trips cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionDraft {
    fixed_acidity: String,
    volatile_acidity: String,
    citric_acid: String,
    residual_sugar: String,
    chlorides: String,
    free_sulfur_dioxide: String,
    total_sulfur_dioxide: String,
    density: String,
    #[serde(rename = "pH")]
    ph: String,
    sulphates: String,
    alcohol: String,
}

impl SubmissionDraft {
    /// Creates an empty draft (every field absent).
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw text entered for `field`.
    pub fn get(&self, field: WineField) -> &str {
        match field {
            WineField::FixedAcidity => &self.fixed_acidity,
            WineField::VolatileAcidity => &self.volatile_acidity,
            WineField::CitricAcid => &self.citric_acid,
            WineField::ResidualSugar => &self.residual_sugar,
            WineField::Chlorides => &self.chlorides,
            WineField::FreeSulfurDioxide => &self.free_sulfur_dioxide,
            WineField::TotalSulfurDioxide => &self.total_sulfur_dioxide,
            WineField::Density => &self.density,
            WineField::Ph => &self.ph,
            WineField::Sulphates => &self.sulphates,
            WineField::Alcohol => &self.alcohol,
        }
    }

    /// Replaces the raw text for `field`.
    pub fn set(&mut self, field: WineField, raw: impl Into<String>) {
        let slot = match field {
            WineField::FixedAcidity => &mut self.fixed_acidity,
            WineField::VolatileAcidity => &mut self.volatile_acidity,
            WineField::CitricAcid => &mut self.citric_acid,
            WineField::ResidualSugar => &mut self.residual_sugar,
            WineField::Chlorides => &mut self.chlorides,
            WineField::FreeSulfurDioxide => &mut self.free_sulfur_dioxide,
            WineField::TotalSulfurDioxide => &mut self.total_sulfur_dioxide,
            WineField::Density => &mut self.density,
            WineField::Ph => &mut self.ph,
            WineField::Sulphates => &mut self.sulphates,
            WineField::Alcohol => &mut self.alcohol,
        };
        *slot = raw.into();
    }
}

/// A validated set of the eleven measurements.
///
/// Serializes to a JSON object with exactly the eleven wire keys and
/// numeric values - the body of the prediction request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub fixed_acidity: f64,
    pub volatile_acidity: f64,
    pub citric_acid: f64,
    pub residual_sugar: f64,
    pub chlorides: f64,
    pub free_sulfur_dioxide: f64,
    pub total_sulfur_dioxide: f64,
    pub density: f64,
    #[serde(rename = "pH")]
    pub ph: f64,
    pub sulphates: f64,
    pub alcohol: f64,
}

impl Submission {
    /// Returns the validated value for `field`.
    pub fn value(&self, field: WineField) -> f64 {
        match field {
            WineField::FixedAcidity => self.fixed_acidity,
            WineField::VolatileAcidity => self.volatile_acidity,
            WineField::CitricAcid => self.citric_acid,
            WineField::ResidualSugar => self.residual_sugar,
            WineField::Chlorides => self.chlorides,
            WineField::FreeSulfurDioxide => self.free_sulfur_dioxide,
            WineField::TotalSulfurDioxide => self.total_sulfur_dioxide,
            WineField::Density => self.density,
            WineField::Ph => self.ph,
            WineField::Sulphates => self.sulphates,
            WineField::Alcohol => self.alcohol,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Submission {
        Submission {
            fixed_acidity: 8.0,
            volatile_acidity: 0.79,
            citric_acid: 0.5,
            residual_sugar: 8.2,
            chlorides: 0.35,
            free_sulfur_dioxide: 36.0,
            total_sulfur_dioxide: 141.5,
            density: 1.04,
            ph: 3.5,
            sulphates: 1.0,
            alcohol: 11.5,
        }
    }

    #[test]
    fn test_draft_get_set() {
        let mut draft = SubmissionDraft::new();
        assert_eq!(draft.get(WineField::Alcohol), "");

        draft.set(WineField::Alcohol, "11.5");
        assert_eq!(draft.get(WineField::Alcohol), "11.5");
        assert_eq!(draft.get(WineField::Density), "");
    }

    #[test]
    fn test_draft_missing_keys_deserialize_empty() {
        let draft: SubmissionDraft = serde_json::from_str(r#"{"alcohol": "11.5"}"#).unwrap();
        assert_eq!(draft.get(WineField::Alcohol), "11.5");
        assert_eq!(draft.get(WineField::FixedAcidity), "");
    }

    #[test]
    fn test_draft_ph_key_capitalisation() {
        let draft: SubmissionDraft = serde_json::from_str(r#"{"pH": "3.5"}"#).unwrap();
        assert_eq!(draft.get(WineField::Ph), "3.5");
    }

    #[test]
    fn test_submission_serializes_exactly_eleven_keys() {
        let value = serde_json::to_value(sample()).unwrap();
        let object = value.as_object().unwrap();

        let expected: Vec<&str> = WineField::ALL.iter().map(|f| f.key()).collect();
        let mut actual: Vec<&str> = object.keys().map(|k| k.as_str()).collect();
        actual.sort_unstable();
        let mut expected_sorted = expected.clone();
        expected_sorted.sort_unstable();

        assert_eq!(actual, expected_sorted);
        assert_eq!(object.len(), 11);
        assert!(object.values().all(|v| v.is_number()));
        assert_eq!(object["pH"], serde_json::json!(3.5));
    }

    #[test]
    fn test_submission_value_accessor() {
        let submission = sample();
        for field in WineField::ALL {
            // Every field is reachable through the accessor.
            let _ = submission.value(field);
        }
        assert_eq!(submission.value(WineField::TotalSulfurDioxide), 141.5);
    }
}
