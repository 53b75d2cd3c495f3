//! # Thermal Estimator
//!
//! Duty-cycle heat model for the power unit oil. The motor dissipates a
//! fixed fraction of its rated power into the oil during each up run; the
//! tank sheds a fraction of the accumulated rise to ambient. When the
//! estimated steady-state oil temperature exceeds the 55 °C limit, the
//! quote should carry an oil cooler.
//!
//! The model is deliberately coarse. It answers "does this duty cycle need
//! a cooler" and nothing finer; transient behavior and radiator sizing are
//! out of scope.

use serde::{Deserialize, Serialize};

use crate::errors::{SizingError, SizingResult};

/// Fraction of motor power dissipated into the oil per up run
const HEAT_LOSS_FRACTION: f64 = 0.15;

/// Specific heat of hydraulic oil (kJ/(kg·K))
const OIL_SPECIFIC_HEAT: f64 = 2.0;

/// Hydraulic oil density (kg/m³)
const OIL_DENSITY: f64 = 870.0;

/// Assumed machine-room ambient (°C)
const AMBIENT_TEMP_C: f64 = 25.0;

/// Retained fraction of the hourly rise at steady state
const RETENTION_FACTOR: f64 = 0.7;

/// Oil temperature limit above which a cooler is required (°C)
pub const MAX_OIL_TEMP_C: f64 = 55.0;

/// Duty-cycle parameters for the heat estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermalInput {
    /// Rated motor power (kW)
    pub motor_power_kw: f64,

    /// Car travel distance (mm)
    pub travel_distance_mm: f64,

    /// Rated speed (m/s)
    pub speed_mps: f64,

    /// Up starts per hour
    pub trips_per_hour: f64,

    /// Oil volume in the tank (L)
    pub oil_volume_l: f64,
}

impl ThermalInput {
    pub fn validate(&self) -> SizingResult<()> {
        let positive = [
            ("motor_power_kw", self.motor_power_kw),
            ("travel_distance_mm", self.travel_distance_mm),
            ("speed_mps", self.speed_mps),
            ("trips_per_hour", self.trips_per_hour),
            ("oil_volume_l", self.oil_volume_l),
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
        Ok(())
    }
}

/// Heat estimate for one duty cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermalResult {
    /// Heat input to the oil per hour (kJ/h)
    pub heat_per_hour_kj: f64,

    /// Oil mass in the tank (kg)
    pub oil_mass_kg: f64,

    /// Unchecked temperature rise per hour (°C/h)
    pub temp_rise_per_hour_c: f64,

    /// Estimated steady-state oil temperature (°C)
    pub steady_state_temp_c: f64,

    /// Steady state exceeds the 55 °C limit
    pub cooling_required: bool,

    /// Human-readable cooling recommendation for the quote
    pub recommendation: String,
}

/// Whether a steady-state temperature calls for a cooler. The limit
/// itself is acceptable; only exceeding it triggers the recommendation.
pub fn cooling_required(steady_state_temp_c: f64) -> bool {
    steady_state_temp_c > MAX_OIL_TEMP_C
}

/// Estimate the steady-state oil temperature for a duty cycle.
pub fn compute_thermal(input: &ThermalInput) -> SizingResult<ThermalResult> {
    input.validate()?;

    // One up run: kW over seconds gives kJ
    let run_time_s = input.travel_distance_mm / 1000.0 / input.speed_mps;
    let heat_per_hour_kj =
        input.motor_power_kw * run_time_s * HEAT_LOSS_FRACTION * input.trips_per_hour;

    let oil_mass_kg = input.oil_volume_l / 1000.0 * OIL_DENSITY;
    let temp_rise_per_hour_c = heat_per_hour_kj / (oil_mass_kg * OIL_SPECIFIC_HEAT);

    let steady_state_temp_c = AMBIENT_TEMP_C + RETENTION_FACTOR * temp_rise_per_hour_c;
    let cooling = cooling_required(steady_state_temp_c);

    Ok(ThermalResult {
        heat_per_hour_kj,
        oil_mass_kg,
        temp_rise_per_hour_c,
        steady_state_temp_c,
        cooling_required: cooling,
        recommendation: recommendation_text(cooling).to_string(),
    })
}

/// Recommendation line matching the cooling verdict.
pub fn recommendation_text(cooling_required: bool) -> &'static str {
    if cooling_required {
        "Oil cooler recommended"
    } else {
        "Natural cooling sufficient"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> ThermalInput {
        ThermalInput {
            motor_power_kw: 11.0,
            travel_distance_mm: 3000.0,
            speed_mps: 0.5,
            trips_per_hour: 120.0,
            oil_volume_l: 150.0,
        }
    }

    #[test]
    fn test_moderate_duty_cycle_numbers() {
        let result = compute_thermal(&sample_input()).unwrap();

        // 11 kW * 6 s * 0.15 * 120 = 1188 kJ/h
        assert!((result.heat_per_hour_kj - 1188.0).abs() < 1e-9);
        // 150 L of oil at 870 kg/m³ = 130.5 kg
        assert!((result.oil_mass_kg - 130.5).abs() < 1e-9);
        // 1188 / (130.5 * 2.0) = 4.55 °C/h
        assert!((result.temp_rise_per_hour_c - 4.5517).abs() < 0.001);
        // 25 + 0.7 * 4.55 = 28.19 °C, well under the limit
        assert!((result.steady_state_temp_c - 28.186).abs() < 0.001);
        assert!(!result.cooling_required);
        assert_eq!(result.recommendation, "Natural cooling sufficient");
    }

    #[test]
    fn test_heavy_duty_cycle_requires_cooling() {
        let input = ThermalInput {
            motor_power_kw: 30.0,
            travel_distance_mm: 12_000.0,
            speed_mps: 0.3,
            trips_per_hour: 180.0,
            oil_volume_l: 60.0,
        };
        let result = compute_thermal(&input).unwrap();
        assert!(result.steady_state_temp_c > MAX_OIL_TEMP_C);
        assert!(result.cooling_required);
        assert_eq!(result.recommendation, "Oil cooler recommended");
    }

    #[test]
    fn test_recommendation_tracks_cooling_verdict() {
        for input in [
            sample_input(),
            ThermalInput {
                motor_power_kw: 30.0,
                oil_volume_l: 40.0,
                trips_per_hour: 240.0,
                ..sample_input()
            },
        ] {
            let result = compute_thermal(&input).unwrap();
            assert_eq!(
                result.recommendation,
                recommendation_text(result.cooling_required)
            );
        }
    }

    #[test]
    fn test_limit_is_exclusive() {
        // Scenario: steady state exactly at the limit stays passive
        assert!(!cooling_required(MAX_OIL_TEMP_C));
        assert!(cooling_required(MAX_OIL_TEMP_C + f64::EPSILON * 64.0));
        assert!(!cooling_required(MAX_OIL_TEMP_C - 0.01));
    }

    #[test]
    fn test_rejects_zero_oil_volume() {
        let input = ThermalInput {
            oil_volume_l: 0.0,
            ..sample_input()
        };
        assert!(compute_thermal(&input).is_err());
    }

    #[test]
    fn test_rejects_nan_power() {
        let input = ThermalInput {
            motor_power_kw: f64::NAN,
            ..sample_input()
        };
        assert!(compute_thermal(&input).is_err());
    }

    #[test]
    fn test_more_oil_runs_cooler() {
        let small = compute_thermal(&ThermalInput {
            oil_volume_l: 60.0,
            ..sample_input()
        })
        .unwrap();
        let large = compute_thermal(&ThermalInput {
            oil_volume_l: 250.0,
            ..sample_input()
        })
        .unwrap();
        assert!(large.steady_state_temp_c < small.steady_state_temp_c);
        // heat input does not depend on tank size
        assert_eq!(small.heat_per_hour_kj, large.heat_per_hour_kj);
    }

    #[test]
    fn test_result_serialization() {
        let result = compute_thermal(&sample_input()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: ThermalResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
