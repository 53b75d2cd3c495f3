//! # Cost Engine
//!
//! Prices a [`SelectedConfiguration`] into a per-category breakdown and a
//! grand total. The breakdown is recomputed from scratch on every call,
//! with no cached partials, so repeated calls with an unchanged
//! configuration are bit-identical.
//!
//! Pricing rules:
//!
//! - Cylinders: factory pricing by "DxT" code, `(fixed + per_meter ·
//!   stroke)` plus the two-piece surcharge where set, margins 1.16 then
//!   1.30 compounded, times quantity. Unknown codes price at zero with a
//!   warning diagnostic.
//! - Motor, pump, main valve: flat list price, no margin.
//! - Rupture valve: flat price per cylinder, times quantity.
//! - Power unit: flat price; when the power-unit-hoses accessory is
//!   selected, the computed hose cost lands here (and nowhere else).
//! - Accessories: flat prices, except the hoses item (0 here) and the
//!   ball valve, priced by the main valve's size tier.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::selection::{HoseConfiguration, SelectedConfiguration};
use crate::catalog::{cylinder_pricing, AccessoryKind, Catalog};

/// Margin applied to cylinder factory cost (16%, then 30%)
const MARGIN_FIRST: f64 = 1.16;
const MARGIN_SECOND: f64 = 1.30;

/// Priced breakdown by category (EUR). Total is the exact sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CostBreakdown {
    pub cylinders_eur: f64,
    pub motor_eur: f64,
    pub pump_eur: f64,
    /// Includes the computed hose cost when the power-unit-hoses accessory
    /// is selected
    pub power_unit_eur: f64,
    pub rupture_valve_eur: f64,
    pub main_valve_eur: f64,
    pub accessories_eur: f64,
}

impl CostBreakdown {
    /// Grand total: exact sum of the seven categories.
    pub fn total_eur(&self) -> f64 {
        self.cylinders_eur
            + self.motor_eur
            + self.pump_eur
            + self.power_unit_eur
            + self.rupture_valve_eur
            + self.main_valve_eur
            + self.accessories_eur
    }
}

/// Price one cylinder line item.
///
/// Unknown type codes price at zero with a warning; a quote with a
/// missing price entry is still a quote.
pub fn cylinder_price_eur(
    type_code: &str,
    stroke_m: f64,
    quantity: u32,
    two_piece: bool,
) -> f64 {
    let Some(pricing) = cylinder_pricing(type_code) else {
        warn!(type_code, "no pricing entry for cylinder type");
        return 0.0;
    };

    let mut base = pricing.fixed_eur + pricing.per_meter_eur * stroke_m;
    if two_piece {
        base += pricing.two_piece_extra_eur;
    }

    base * MARGIN_FIRST * MARGIN_SECOND * quantity as f64
}

/// Hose cost: main run plus one branch run per cylinder.
pub fn hose_cost_eur(hoses: &HoseConfiguration) -> f64 {
    let main = hoses.main_diameter.price_per_meter_eur() * hoses.main_length_m;
    let branches = hoses.cylinder_diameter.price_per_meter_eur()
        * hoses.cylinder_length_m
        * hoses.cylinder_count as f64;
    main + branches
}

/// Price a full configuration into a category breakdown.
pub fn compute_cost(config: &SelectedConfiguration, catalog: &Catalog) -> CostBreakdown {
    let mut breakdown = CostBreakdown::default();

    breakdown.cylinders_eur = cylinder_price_eur(
        &config.cylinder_type,
        config.stroke_m,
        config.quantity,
        config.two_piece,
    );

    if let Some(motor) = catalog.motor(&config.motor) {
        breakdown.motor_eur = motor.price_eur;
    } else {
        warn!(model = %config.motor, "motor not found in catalog");
    }

    if let Some(pump) = catalog.pump(&config.pump) {
        breakdown.pump_eur = pump.price_eur;
    } else {
        warn!(model = %config.pump, "pump not found in catalog");
    }

    let hoses_selected = config.accessories.contains(&AccessoryKind::PowerUnitHoses);

    if let Some(model) = &config.power_unit {
        if let Some(unit) = catalog.power_unit(model) {
            breakdown.power_unit_eur = unit.price_eur;
            if hoses_selected {
                breakdown.power_unit_eur += hose_cost_eur(&config.hoses);
            }
        } else {
            warn!(model = %model, "power unit not found in catalog");
        }
    }

    if let Some(key) = config.rupture_valve {
        if let Some(valve) = catalog.rupture_valve(key) {
            breakdown.rupture_valve_eur = valve.price_eur * config.quantity as f64;
        } else {
            warn!(?key, "rupture valve not found in catalog");
        }
    }

    breakdown.main_valve_eur = config.main_valve.price_eur();

    for accessory in &config.accessories {
        breakdown.accessories_eur += match accessory {
            // folded into the power unit category above
            AccessoryKind::PowerUnitHoses => 0.0,
            AccessoryKind::BallValve => config.main_valve.ball_valve_tier().price_eur(),
            other => other.flat_price_eur().unwrap_or(0.0),
        };
    }

    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{HoseDiameter, MainValveModel, RuptureValveKey, RuptureValveSize};

    fn sample_config() -> SelectedConfiguration {
        SelectedConfiguration {
            cylinder_type: "90x10".to_string(),
            stroke_m: 1.65,
            quantity: 2,
            two_piece: false,
            pump: "SP-210".to_string(),
            motor: "SM-15".to_string(),
            main_valve: MainValveModel::Ev100_150,
            rupture_valve: Some(RuptureValveKey {
                size: RuptureValveSize::OneInch,
                dual: true,
            }),
            power_unit: Some("GU-60".to_string()),
            hoses: HoseConfiguration {
                main_diameter: HoseDiameter::OneAndHalfInch,
                main_length_m: 6.0,
                cylinder_diameter: HoseDiameter::OneInch,
                cylinder_length_m: 2.0,
                cylinder_count: 2,
            },
            accessories: vec![
                AccessoryKind::PowerUnitHoses,
                AccessoryKind::BallValve,
                AccessoryKind::PressureSwitch,
                AccessoryKind::HandPump,
            ],
            required_flow_lpm: 190.85,
            actual_flow_lpm: 210.0,
            effective_speed_mps: 0.55,
            required_power_kw: 13.56,
            required_oil_volume_l: 57.26,
        }
    }

    #[test]
    fn test_cylinder_pricing_with_margins() {
        // (420 + 185 * 1.65) * 1.16 * 1.30 * 2 = 2187.33
        let price = cylinder_price_eur("90x10", 1.65, 2, false);
        assert!((price - 2187.33).abs() < 0.01);

        // two-piece adds the surcharge before margins
        let two_piece = cylinder_price_eur("90x10", 1.65, 2, true);
        assert!((two_piece - (price + 160.0 * 1.16 * 1.30 * 2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_cylinder_type_prices_zero() {
        // Scenario B: unknown type is a zero price, not a panic
        let mut config = sample_config();
        config.cylinder_type = "999x9".to_string();
        let breakdown = compute_cost(&config, &Catalog::standard());
        assert_eq!(breakdown.cylinders_eur, 0.0);
        assert!(breakdown.total_eur() > 0.0);
    }

    #[test]
    fn test_total_is_sum_of_categories() {
        let breakdown = compute_cost(&sample_config(), &Catalog::standard());
        let sum = breakdown.cylinders_eur
            + breakdown.motor_eur
            + breakdown.pump_eur
            + breakdown.power_unit_eur
            + breakdown.rupture_valve_eur
            + breakdown.main_valve_eur
            + breakdown.accessories_eur;
        assert_eq!(breakdown.total_eur(), sum);
        assert!(breakdown.total_eur() > 0.0);
    }

    #[test]
    fn test_idempotence() {
        let config = sample_config();
        let catalog = Catalog::standard();
        let a = compute_cost(&config, &catalog);
        let b = compute_cost(&config, &catalog);
        assert_eq!(a, b);
        assert_eq!(a.total_eur().to_bits(), b.total_eur().to_bits());
    }

    #[test]
    fn test_hose_cost_folds_into_power_unit_only() {
        let catalog = Catalog::standard();
        let with_hoses = compute_cost(&sample_config(), &catalog);

        let mut config = sample_config();
        config.accessories.retain(|a| *a != AccessoryKind::PowerUnitHoses);
        let without_hoses = compute_cost(&config, &catalog);

        let hose_cost = hose_cost_eur(&sample_config().hoses);
        assert!(
            (with_hoses.power_unit_eur - without_hoses.power_unit_eur - hose_cost).abs() < 1e-9
        );
        // accessories never change: the hoses item contributes zero there
        assert_eq!(with_hoses.accessories_eur, without_hoses.accessories_eur);
    }

    #[test]
    fn test_hose_cost_values() {
        let hoses = sample_config().hoses;
        // 28.4 * 6 + 15.8 * 2 * 2 = 233.6
        assert!((hose_cost_eur(&hoses) - 233.6).abs() < 0.01);
    }

    #[test]
    fn test_ball_valve_priced_by_main_valve_tier() {
        let catalog = Catalog::standard();
        let mut config = sample_config();
        config.accessories = vec![AccessoryKind::BallValve];

        config.main_valve = MainValveModel::Ev100_150;
        assert_eq!(compute_cost(&config, &catalog).accessories_eur, 67.0);

        config.main_valve = MainValveModel::Ev100_075;
        assert_eq!(compute_cost(&config, &catalog).accessories_eur, 42.0);

        config.main_valve = MainValveModel::Kv2s05;
        assert_eq!(compute_cost(&config, &catalog).accessories_eur, 24.0);

        // blocks without a dedicated tier fall back to the 0.75'' price
        config.main_valve = MainValveModel::Gv05;
        assert_eq!(compute_cost(&config, &catalog).accessories_eur, 42.0);
    }

    #[test]
    fn test_rupture_valve_scales_with_quantity() {
        let catalog = Catalog::standard();
        let config = sample_config();
        let breakdown = compute_cost(&config, &catalog);
        // dual 1.0" at 190 EUR, two cylinders
        assert_eq!(breakdown.rupture_valve_eur, 380.0);

        let mut none_selected = config;
        none_selected.rupture_valve = None;
        let breakdown = compute_cost(&none_selected, &catalog);
        assert_eq!(breakdown.rupture_valve_eur, 0.0);
    }

    #[test]
    fn test_no_power_unit_prices_zero() {
        let mut config = sample_config();
        config.power_unit = None;
        let breakdown = compute_cost(&config, &Catalog::standard());
        assert_eq!(breakdown.power_unit_eur, 0.0);
    }

    #[test]
    fn test_breakdown_serialization() {
        let breakdown = compute_cost(&sample_config(), &Catalog::standard());
        let json = serde_json::to_string(&breakdown).unwrap();
        let roundtrip: CostBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(breakdown, roundtrip);
    }
}
