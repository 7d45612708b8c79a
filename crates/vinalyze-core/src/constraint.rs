//! Measurement constraints for the eleven wine chemistry fields.
//!
//! The constraint table is fixed at compile time: one record per field with
//! inclusive bounds, the precision step, and the helper text rendered under
//! the input. Table order determines on-screen field order.

use serde::{Deserialize, Serialize};

/// Identifier for one of the eleven chemistry measurements.
///
/// # Example
///
/// ```
/// use vinalyze_core::WineField;
///
/// assert_eq!(WineField::FixedAcidity.key(), "fixed_acidity");
/// assert_eq!(WineField::Ph.key(), "pH");
/// assert_eq!(WineField::from_key("alcohol"), Some(WineField::Alcohol));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WineField {
    FixedAcidity,
    VolatileAcidity,
    CitricAcid,
    ResidualSugar,
    Chlorides,
    FreeSulfurDioxide,
    TotalSulfurDioxide,
    Density,
    /// Kept capitalised as `pH` on the wire.
    #[serde(rename = "pH")]
    Ph,
    Sulphates,
    Alcohol,
}

impl WineField {
    /// All fields in on-screen order.
    pub const ALL: [WineField; 11] = [
        WineField::FixedAcidity,
        WineField::VolatileAcidity,
        WineField::CitricAcid,
        WineField::ResidualSugar,
        WineField::Chlorides,
        WineField::FreeSulfurDioxide,
        WineField::TotalSulfurDioxide,
        WineField::Density,
        WineField::Ph,
        WineField::Sulphates,
        WineField::Alcohol,
    ];

    /// Returns the wire name used as the JSON key.
    pub const fn key(&self) -> &'static str {
        match self {
            WineField::FixedAcidity => "fixed_acidity",
            WineField::VolatileAcidity => "volatile_acidity",
            WineField::CitricAcid => "citric_acid",
            WineField::ResidualSugar => "residual_sugar",
            WineField::Chlorides => "chlorides",
            WineField::FreeSulfurDioxide => "free_sulfur_dioxide",
            WineField::TotalSulfurDioxide => "total_sulfur_dioxide",
            WineField::Density => "density",
            WineField::Ph => "pH",
            WineField::Sulphates => "sulphates",
            WineField::Alcohol => "alcohol",
        }
    }

    /// Returns the display label shown above the input.
    pub const fn label(&self) -> &'static str {
        match self {
            WineField::FixedAcidity => "Fixed Acidity",
            WineField::VolatileAcidity => "Volatile Acidity",
            WineField::CitricAcid => "Citric Acid",
            WineField::ResidualSugar => "Residual Sugar",
            WineField::Chlorides => "Chlorides",
            WineField::FreeSulfurDioxide => "Free Sulfur Dioxide",
            WineField::TotalSulfurDioxide => "Total Sulfur Dioxide",
            WineField::Density => "Density",
            WineField::Ph => "pH",
            WineField::Sulphates => "Sulphates",
            WineField::Alcohol => "Alcohol",
        }
    }

    /// Looks up a field by its wire name.
    pub fn from_key(key: &str) -> Option<WineField> {
        WineField::ALL.into_iter().find(|field| field.key() == key)
    }
}

/// Static bounds, precision, and unit metadata for one chemistry field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeasurementConstraint {
    /// Field this constraint applies to.
    pub field: WineField,
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound.
    pub max: f64,
    /// Precision step; accepted values are multiples of this.
    pub step: f64,
    /// Short unit suffix used in messages; empty when unitless.
    pub unit: &'static str,
    /// Helper text rendered under the input.
    pub description: &'static str,
}

impl MeasurementConstraint {
    /// Returns whether `value` lies within the inclusive bounds.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Precision step shared by every field: hundredths.
const HUNDREDTHS: f64 = 0.01;

const G_PER_L: &str = "Measured in grams per liter (g/L)";

/// The eleven measurement constraints, in on-screen order.
pub const CONSTRAINTS: [MeasurementConstraint; 11] = [
    MeasurementConstraint {
        field: WineField::FixedAcidity,
        min: 0.0,
        max: 16.0,
        step: HUNDREDTHS,
        unit: "g/L",
        description: G_PER_L,
    },
    MeasurementConstraint {
        field: WineField::VolatileAcidity,
        min: 0.0,
        max: 1.58,
        step: HUNDREDTHS,
        unit: "g/L",
        description: G_PER_L,
    },
    MeasurementConstraint {
        field: WineField::CitricAcid,
        min: 0.0,
        max: 1.0,
        step: HUNDREDTHS,
        unit: "g/L",
        description: G_PER_L,
    },
    MeasurementConstraint {
        field: WineField::ResidualSugar,
        min: 0.9,
        max: 15.5,
        step: HUNDREDTHS,
        unit: "g/L",
        description: G_PER_L,
    },
    MeasurementConstraint {
        field: WineField::Chlorides,
        min: 0.0,
        max: 0.7,
        step: HUNDREDTHS,
        unit: "g/L",
        description: G_PER_L,
    },
    MeasurementConstraint {
        field: WineField::FreeSulfurDioxide,
        min: 0.0,
        max: 72.0,
        step: HUNDREDTHS,
        unit: "g/L",
        description: G_PER_L,
    },
    MeasurementConstraint {
        field: WineField::TotalSulfurDioxide,
        min: 6.0,
        max: 289.0,
        step: HUNDREDTHS,
        unit: "g/L",
        description: G_PER_L,
    },
    MeasurementConstraint {
        field: WineField::Density,
        min: 0.98,
        max: 1.1,
        step: HUNDREDTHS,
        unit: "g/mL",
        description: "Measured in grams per milliliter (g/ml)",
    },
    MeasurementConstraint {
        field: WineField::Ph,
        min: 2.5,
        max: 4.5,
        step: HUNDREDTHS,
        unit: "",
        description: "Unitless",
    },
    MeasurementConstraint {
        field: WineField::Sulphates,
        min: 0.0,
        max: 2.0,
        step: HUNDREDTHS,
        unit: "g/L",
        description: G_PER_L,
    },
    MeasurementConstraint {
        field: WineField::Alcohol,
        min: 8.0,
        max: 15.0,
        step: HUNDREDTHS,
        unit: "%",
        description: "Measured in percent (%)",
    },
];

/// Returns the ordered constraint table.
pub fn constraints() -> &'static [MeasurementConstraint; 11] {
    &CONSTRAINTS
}

/// Returns the constraint record for `field`.
pub fn constraint_for(field: WineField) -> &'static MeasurementConstraint {
    // Discriminant order matches table order.
    &CONSTRAINTS[field as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_field_order() {
        for (i, field) in WineField::ALL.into_iter().enumerate() {
            assert_eq!(CONSTRAINTS[i].field, field);
            assert_eq!(constraint_for(field).field, field);
        }
    }

    #[test]
    fn test_from_key_roundtrip() {
        for field in WineField::ALL {
            assert_eq!(WineField::from_key(field.key()), Some(field));
        }
        assert_eq!(WineField::from_key("ph"), None);
        assert_eq!(WineField::from_key("grape_count"), None);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let c = constraint_for(WineField::VolatileAcidity);
        assert!(c.contains(0.0));
        assert!(c.contains(1.58));
        assert!(!c.contains(1.59));
        assert!(!c.contains(-0.01));
    }

    #[test]
    fn test_total_sulfur_dioxide_floor() {
        let c = constraint_for(WineField::TotalSulfurDioxide);
        assert_eq!(c.min, 6.0);
        assert_eq!(c.max, 289.0);
    }

    #[test]
    fn test_every_step_is_hundredths() {
        for c in constraints() {
            assert_eq!(c.step, 0.01);
        }
    }

    #[test]
    fn test_field_serializes_to_wire_name() {
        let json = serde_json::to_string(&WineField::Ph).unwrap();
        assert_eq!(json, "\"pH\"");
        let json = serde_json::to_string(&WineField::FreeSulfurDioxide).unwrap();
        assert_eq!(json, "\"free_sulfur_dioxide\"");
    }
}
