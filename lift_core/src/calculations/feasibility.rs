//! # Cylinder Feasibility Engine
//!
//! Evaluates every catalog cylinder geometry against the load case:
//! static pressures at empty and full car, plus a buckling check of the
//! ram in the Euler or Tetmajer regime depending on slenderness.
//!
//! A candidate is valid when all three fixed limits hold:
//!
//! - empty-car pressure >= 12 bar (the car must still lower itself)
//! - full-car pressure <= 59 bar (seal and valve rating)
//! - critical buckling force >= acting force
//!
//! These thresholds are engineering limits; changing them requires domain
//! sign-off. An empty valid set is a normal outcome ("no suitable
//! cylinder"), not an error.
//!
//! ## Example
//!
//! ```rust
//! use lift_core::calculations::{evaluate_cylinders, LoadInputs, SuspensionRatio};
//! use lift_core::catalog::Catalog;
//!
//! let inputs = LoadInputs {
//!     capacity_kg: 1000.0,
//!     carcass_weight_kg: 800.0,
//!     travel_distance_mm: 3000.0,
//!     buffer_mm: 300.0,
//!     speed_mps: 0.5,
//!     suspension: SuspensionRatio::TwoToOne,
//!     cylinder_count: 2,
//!     regulation: String::new(),
//! };
//! let evaluations = evaluate_cylinders(&inputs, &Catalog::standard()).unwrap();
//! assert!(evaluations.iter().any(|e| e.valid));
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::LoadInputs;
use crate::catalog::{Catalog, CylinderSpec};
use crate::errors::SizingResult;

/// Fixed allowance for guide shoes, head fittings and oil column (kg)
const EXTRA_WEIGHT_KG: f64 = 100.0;

/// Standard gravity (m/s²)
const GRAVITY: f64 = 9.81;

/// Elastic modulus of the ram steel (N/mm²)
const E_MODULUS: f64 = 210_000.0;

/// Yield strength Rp0.2 of the ram steel (N/mm²)
const YIELD_STRENGTH: f64 = 355.0;

/// Slenderness at which the buckling check switches to the Euler branch
const EULER_LAMBDA: f64 = 100.0;

/// Minimum empty-car pressure (bar)
const MIN_EMPTY_PRESSURE_BAR: f64 = 12.0;

/// Maximum full-car pressure (bar)
const MAX_FULL_PRESSURE_BAR: f64 = 59.0;

/// One cylinder candidate annotated with pressures and buckling results.
///
/// Created fresh on every feasibility run; never persisted by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CylinderEvaluation {
    /// "DxT" type code, e.g. "90x10"
    pub type_code: String,

    /// Outer diameter D (mm)
    pub outer_diameter_mm: f64,

    /// Wall thickness t (mm)
    pub wall_thickness_mm: f64,

    /// Static pressure with empty car (bar)
    pub pressure_empty_bar: f64,

    /// Static pressure with rated load (bar)
    pub pressure_full_bar: f64,

    /// Slenderness ratio λ of the ram over the full stroke
    pub lambda: f64,

    /// Critical buckling force (N)
    pub critical_force_n: f64,

    /// Acting buckling force with the 1.4 safety factor applied (N)
    pub acting_force_n: f64,

    /// Buckling utilization, acting/critical (%)
    pub utilization_pct: f64,

    /// Critical force covers the acting force
    pub buckling_safe: bool,

    /// All three validity limits hold
    pub valid: bool,
}

/// Evaluate every catalog cylinder against the load case.
///
/// Entries with a non-positive wall thickness are skipped. Results come
/// back in catalog order, valid and invalid alike; callers typically sort
/// by diameter and filter to `valid` for display.
pub fn evaluate_cylinders(
    inputs: &LoadInputs,
    catalog: &Catalog,
) -> SizingResult<Vec<CylinderEvaluation>> {
    inputs.validate()?;

    let stroke_mm = inputs.stroke_mm();
    let factor = inputs.suspension.factor();
    let count = inputs.cylinder_count as f64;

    let empty_term_kg = inputs.carcass_weight_kg * factor / count;
    let full_term_kg = (inputs.capacity_kg + inputs.carcass_weight_kg) * factor / count;

    let evaluations = catalog
        .cylinders
        .iter()
        .filter(|cyl| cyl.wall_thickness_mm > 0.0)
        .map(|cyl| evaluate_one(cyl, stroke_mm, empty_term_kg, full_term_kg))
        .collect();

    Ok(evaluations)
}

fn evaluate_one(
    cyl: &CylinderSpec,
    stroke_mm: f64,
    empty_term_kg: f64,
    full_term_kg: f64,
) -> CylinderEvaluation {
    let d_outer = cyl.outer_diameter_mm;
    let t = cyl.wall_thickness_mm;
    let area_mm2 = cyl.area_mm2();

    // Ram self weight from the tube section, 40.55 mm²·m/kg steel constant
    let ram_weight_kg = ((d_outer - t) * t / 40.55) * (stroke_mm / 1000.0);

    let force_empty_kg = empty_term_kg + ram_weight_kg + EXTRA_WEIGHT_KG;
    let force_full_kg = full_term_kg + ram_weight_kg + EXTRA_WEIGHT_KG;

    // kg → bar over mm²: F·g gives N, ×10 converts N/mm² to bar
    let pressure_empty_bar = force_empty_kg * GRAVITY * 10.0 / area_mm2;
    let pressure_full_bar = force_full_kg * GRAVITY * 10.0 / area_mm2;

    // Slenderness over the full stroke
    let d_inner = cyl.inner_diameter_mm();
    let inertia_mm4 = std::f64::consts::PI * (d_outer.powi(4) - d_inner.powi(4)) / 64.0;
    let radius_of_gyration_mm = (inertia_mm4 / area_mm2).sqrt();
    let lambda = stroke_mm / radius_of_gyration_mm;

    let critical_force_n = if lambda >= EULER_LAMBDA {
        // Euler, free upper end: Fk = π²·E·I / (2·L²)
        std::f64::consts::PI.powi(2) * E_MODULUS * inertia_mm4 / (2.0 * stroke_mm.powi(2))
    } else {
        // Tetmajer interpolation below the elastic regime
        (area_mm2 / 2.0)
            * (YIELD_STRENGTH - (YIELD_STRENGTH - 210.0) * (lambda / EULER_LAMBDA).powi(2))
    };

    // Acting force: rated load term plus 64% of ram + allowance, factored 1.4
    let acting_force_n =
        1.4 * GRAVITY * (full_term_kg + 0.64 * (ram_weight_kg + EXTRA_WEIGHT_KG));

    let buckling_safe = critical_force_n >= acting_force_n;
    let utilization_pct = acting_force_n / critical_force_n * 100.0;

    let valid = pressure_empty_bar >= MIN_EMPTY_PRESSURE_BAR
        && pressure_full_bar <= MAX_FULL_PRESSURE_BAR
        && buckling_safe;

    CylinderEvaluation {
        type_code: cyl.type_code(),
        outer_diameter_mm: d_outer,
        wall_thickness_mm: t,
        pressure_empty_bar,
        pressure_full_bar,
        lambda,
        critical_force_n,
        acting_force_n,
        utilization_pct,
        buckling_safe,
        valid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::SuspensionRatio;

    fn scenario_a_inputs() -> LoadInputs {
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

    fn single_cylinder_catalog(d: f64, t: f64) -> Catalog {
        Catalog {
            cylinders: vec![CylinderSpec::new(d, t)],
            ..Catalog::standard()
        }
    }

    #[test]
    fn test_scenario_a_finds_valid_cylinder() {
        let inputs = scenario_a_inputs();
        assert_eq!(inputs.stroke_mm(), 1650.0);

        let evaluations = evaluate_cylinders(&inputs, &Catalog::standard()).unwrap();
        let valid: Vec<_> = evaluations.iter().filter(|e| e.valid).collect();
        assert!(!valid.is_empty(), "expected at least one valid cylinder");
        for eval in &valid {
            assert!(eval.pressure_empty_bar >= 12.0);
            assert!(eval.pressure_full_bar <= 59.0);
            assert!(eval.buckling_safe);
        }
    }

    #[test]
    fn test_90x10_numbers() {
        let inputs = scenario_a_inputs();
        let evaluations =
            evaluate_cylinders(&inputs, &single_cylinder_catalog(90.0, 10.0)).unwrap();
        let eval = &evaluations[0];

        // ram = (80*10/40.55) * 1.65 = 32.55 kg
        // empty: (800 + 32.55 + 100) * 98.1 / 6361.73 = 14.38 bar
        assert!((eval.pressure_empty_bar - 14.38).abs() < 0.01);
        // full: (1800 + 32.55 + 100) * 98.1 / 6361.73 = 29.80 bar
        assert!((eval.pressure_full_bar - 29.80).abs() < 0.01);
        assert!(eval.lambda < 100.0);
        assert!(eval.buckling_safe);
        assert!(eval.valid);
    }

    #[test]
    fn test_zero_thickness_skipped() {
        let inputs = scenario_a_inputs();
        let evaluations =
            evaluate_cylinders(&inputs, &single_cylinder_catalog(230.0, 0.0)).unwrap();
        assert!(evaluations.is_empty());
    }

    #[test]
    fn test_validity_predicate_is_exactly_three_limits() {
        let inputs = scenario_a_inputs();
        let evaluations = evaluate_cylinders(&inputs, &Catalog::standard()).unwrap();
        for eval in &evaluations {
            let expected = eval.pressure_empty_bar >= 12.0
                && eval.pressure_full_bar <= 59.0
                && eval.buckling_safe;
            assert_eq!(eval.valid, expected, "{}", eval.type_code);
        }
    }

    #[test]
    fn test_euler_branch_at_lambda_100() {
        // Find stroke giving λ = 100 exactly for a 70x7.5 ram, then check
        // the critical force matches the Euler formula at the boundary.
        let cyl = CylinderSpec::new(70.0, 7.5);
        let area = cyl.area_mm2();
        let inertia =
            std::f64::consts::PI * (70.0f64.powi(4) - 55.0f64.powi(4)) / 64.0;
        let r = (inertia / area).sqrt();
        let stroke = 100.0 * r; // λ == 100

        let eval = evaluate_one(&cyl, stroke, 400.0, 900.0);
        assert!((eval.lambda - 100.0).abs() < 1e-9);

        let euler =
            std::f64::consts::PI.powi(2) * E_MODULUS * inertia / (2.0 * stroke.powi(2));
        assert!((eval.critical_force_n - euler).abs() < 1e-6);
    }

    #[test]
    fn test_determinism() {
        let inputs = scenario_a_inputs();
        let catalog = Catalog::standard();
        let a = evaluate_cylinders(&inputs, &catalog).unwrap();
        let b = evaluate_cylinders(&inputs, &catalog).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_no_feasible_cylinder_is_empty_not_error() {
        // An absurdly heavy load overpressures every bore
        let inputs = LoadInputs {
            capacity_kg: 100_000.0,
            carcass_weight_kg: 50_000.0,
            ..scenario_a_inputs()
        };
        let evaluations = evaluate_cylinders(&inputs, &Catalog::standard()).unwrap();
        assert!(evaluations.iter().all(|e| !e.valid));
    }

    #[test]
    fn test_evaluation_serialization() {
        let inputs = scenario_a_inputs();
        let evaluations = evaluate_cylinders(&inputs, &Catalog::standard()).unwrap();
        let json = serde_json::to_string(&evaluations[0]).unwrap();
        let roundtrip: CylinderEvaluation = serde_json::from_str(&json).unwrap();
        assert_eq!(evaluations[0], roundtrip);
    }
}
