//! # Sizing Calculations
//!
//! The four engines of the sizing pipeline. Each follows the pattern:
//!
//! - `*Input` / shared [`LoadInputs`] - input parameters (JSON-serializable)
//! - `*Evaluation` / `*Result` - derived values (JSON-serializable)
//! - a pure function taking immutable inputs and returning fresh results
//!
//! Pipeline order: [`feasibility`] evaluates every catalog cylinder, the
//! caller picks one candidate, [`selection`] derives the component set,
//! then [`cost`] and [`thermal`] price and heat-check the configuration.
//! No engine holds state across calls; re-invocation with identical inputs
//! yields identical outputs.

pub mod cost;
pub mod feasibility;
pub mod selection;
pub mod thermal;

use serde::{Deserialize, Serialize};

use crate::errors::{SizingError, SizingResult};

pub use cost::{compute_cost, CostBreakdown};
pub use feasibility::{evaluate_cylinders, CylinderEvaluation};
pub use selection::{select_components, HoseConfiguration, SelectedConfiguration};
pub use thermal::{compute_thermal, ThermalInput, ThermalResult};

/// Mechanical reeving between car and cylinder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SuspensionRatio {
    /// Direct acting: car travel equals ram stroke
    #[serde(rename = "1:1")]
    OneToOne,
    /// Roped 2:1: ram stroke is half the car travel, load doubles
    #[serde(rename = "2:1")]
    #[default]
    TwoToOne,
}

impl SuspensionRatio {
    /// Load/flow multiplier: 2 for 2:1, 1 for 1:1
    pub fn factor(&self) -> f64 {
        match self {
            SuspensionRatio::OneToOne => 1.0,
            SuspensionRatio::TwoToOne => 2.0,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SuspensionRatio::OneToOne => "1:1",
            SuspensionRatio::TwoToOne => "2:1",
        }
    }
}

/// Default buffer margin added to the travel distance (mm)
pub const DEFAULT_BUFFER_MM: f64 = 300.0;

/// Elevator load parameters, supplied per calculation and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadInputs {
    /// Rated capacity (kg)
    pub capacity_kg: f64,

    /// Car carcass weight (kg)
    pub carcass_weight_kg: f64,

    /// Car travel distance (mm)
    pub travel_distance_mm: f64,

    /// Buffer margin added to the stroke (mm)
    pub buffer_mm: f64,

    /// Rated speed (m/s)
    pub speed_mps: f64,

    /// Suspension ratio
    pub suspension: SuspensionRatio,

    /// Number of cylinders
    pub cylinder_count: u32,

    /// Regulation mode, passed through untouched for display/persistence
    pub regulation: String,
}

impl LoadInputs {
    /// Validate inputs before any engine math. NaN and non-positive values
    /// are rejected here; the engines assume well-formed numbers.
    pub fn validate(&self) -> SizingResult<()> {
        let positive = [
            ("capacity_kg", self.capacity_kg),
            ("carcass_weight_kg", self.carcass_weight_kg),
            ("travel_distance_mm", self.travel_distance_mm),
            ("speed_mps", self.speed_mps),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(SizingError::invalid_input(
                    field,
                    value.to_string(),
                    "Must be a positive number",
                ));
            }
        }
        if !(self.buffer_mm >= 0.0) {
            return Err(SizingError::invalid_input(
                "buffer_mm",
                self.buffer_mm.to_string(),
                "Must be a non-negative number",
            ));
        }
        if self.cylinder_count == 0 {
            return Err(SizingError::invalid_input(
                "cylinder_count",
                "0",
                "At least one cylinder is required",
            ));
        }
        Ok(())
    }

    /// Ram stroke (mm): full travel + buffer for 1:1, halved for 2:1.
    pub fn stroke_mm(&self) -> f64 {
        match self.suspension {
            SuspensionRatio::OneToOne => self.travel_distance_mm + self.buffer_mm,
            SuspensionRatio::TwoToOne => (self.travel_distance_mm + self.buffer_mm) / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_inputs() -> LoadInputs {
        LoadInputs {
            capacity_kg: 1000.0,
            carcass_weight_kg: 800.0,
            travel_distance_mm: 3000.0,
            buffer_mm: 300.0,
            speed_mps: 0.5,
            suspension: SuspensionRatio::TwoToOne,
            cylinder_count: 2,
            regulation: "EN 81-20".to_string(),
        }
    }

    #[test]
    fn test_stroke_halved_for_2_to_1() {
        let mut inputs = sample_inputs();
        assert_eq!(inputs.stroke_mm(), 1650.0);

        inputs.suspension = SuspensionRatio::OneToOne;
        assert_eq!(inputs.stroke_mm(), 3300.0);
    }

    #[test]
    fn test_validate_rejects_nan() {
        let mut inputs = sample_inputs();
        inputs.speed_mps = f64::NAN;
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_cylinders() {
        let mut inputs = sample_inputs();
        inputs.cylinder_count = 0;
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn test_suspension_serialization() {
        let json = serde_json::to_string(&SuspensionRatio::TwoToOne).unwrap();
        assert_eq!(json, "\"2:1\"");
        let roundtrip: SuspensionRatio = serde_json::from_str("\"1:1\"").unwrap();
        assert_eq!(roundtrip, SuspensionRatio::OneToOne);
    }
}
