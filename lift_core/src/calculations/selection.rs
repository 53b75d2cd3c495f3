//! # Component Selector
//!
//! Derives a recommended component set from one chosen cylinder
//! evaluation: pump by required flow, motor by required power, main valve
//! by pump flow tier, rupture valve by worst-case flow per cylinder, power
//! unit by required oil volume, plus a default hose configuration and
//! accessory set.
//!
//! Every pick is a default. The returned [`SelectedConfiguration`] is a
//! plain value the caller may edit freely; after any edit the cost and
//! thermal engines must be re-run on the full configuration. The core
//! never patches a previous result.

use serde::{Deserialize, Serialize};

use crate::calculations::{CylinderEvaluation, LoadInputs};
use crate::catalog::{
    AccessoryKind, Catalog, HoseDiameter, MainValveModel, RuptureValveKey, RuptureValveSize,
};
use crate::errors::{SizingError, SizingResult};

/// Main valve flow tier boundary (L/min): at or below picks the 0.75''
/// EV100, above picks the 1.5'' EV100
const MAIN_VALVE_TIER_BOUNDARY_LPM: f64 = 122.0;

/// Overspeed margin for rupture valve sizing (m/s)
const RUPTURE_SPEED_MARGIN_MPS: f64 = 0.3;

/// Oil reserve factor on top of the swept cylinder volume
const OIL_RESERVE_FACTOR: f64 = 1.5;

/// Default main hose run between power unit and shaft (m)
const DEFAULT_MAIN_HOSE_M: f64 = 6.0;

/// Default hose run per cylinder on multi-cylinder systems (m)
const DEFAULT_CYLINDER_HOSE_M: f64 = 2.0;

/// Hose runs between power unit and cylinders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoseConfiguration {
    /// Main line diameter
    pub main_diameter: HoseDiameter,

    /// Main line length (m)
    pub main_length_m: f64,

    /// Per-cylinder branch diameter
    pub cylinder_diameter: HoseDiameter,

    /// Branch length per cylinder (m); zero on single-cylinder systems
    pub cylinder_length_m: f64,

    /// Number of cylinder branches
    pub cylinder_count: u32,
}

impl HoseConfiguration {
    /// Default configuration for a pump flow and cylinder count, with
    /// diameters recommended per line flow.
    pub fn default_for(pump_flow_lpm: f64, cylinder_count: u32) -> Self {
        let branch_flow = pump_flow_lpm / cylinder_count as f64;
        HoseConfiguration {
            main_diameter: HoseDiameter::recommend_for_flow(pump_flow_lpm),
            main_length_m: DEFAULT_MAIN_HOSE_M,
            cylinder_diameter: HoseDiameter::recommend_for_flow(branch_flow),
            cylinder_length_m: if cylinder_count > 1 {
                DEFAULT_CYLINDER_HOSE_M
            } else {
                0.0
            },
            cylinder_count,
        }
    }
}

/// A fully specified system configuration with recommended picks.
///
/// Built fresh from one cylinder evaluation; replaces any prior
/// configuration entirely when a different cylinder is chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedConfiguration {
    /// Chosen cylinder "DxT" type code
    pub cylinder_type: String,

    /// Ram stroke (m), suspension-adjusted, used for cylinder pricing
    pub stroke_m: f64,

    /// Number of cylinders
    pub quantity: u32,

    /// Ram ships in two joined sections (long strokes)
    pub two_piece: bool,

    /// Selected pump model code
    pub pump: String,

    /// Selected motor model code
    pub motor: String,

    /// Selected main control valve
    pub main_valve: MainValveModel,

    /// Selected rupture valve; `None` means "none selected"
    pub rupture_valve: Option<RuptureValveKey>,

    /// Selected power unit model code; `None` means no unit in the catalog
    /// has a sufficient tank ("no suitable unit found")
    pub power_unit: Option<String>,

    /// Hose runs between power unit and cylinders
    pub hoses: HoseConfiguration,

    /// Selected accessory set
    pub accessories: Vec<AccessoryKind>,

    /// Required flow at rated speed (L/min)
    pub required_flow_lpm: f64,

    /// Actual flow of the selected pump (L/min)
    pub actual_flow_lpm: f64,

    /// Car speed the selected pump actually delivers (m/s)
    pub effective_speed_mps: f64,

    /// Required motor power for the selected pump (kW)
    pub required_power_kw: f64,

    /// Required oil volume including reserve (L)
    pub required_oil_volume_l: f64,
}

/// Derive the recommended component set for one chosen cylinder.
///
/// Errors only on malformed inputs or an empty pump/motor catalog; every
/// domain-level miss (no rupture valve match, no sufficient power unit)
/// is reported in-band as `None`.
pub fn select_components(
    cylinder: &CylinderEvaluation,
    inputs: &LoadInputs,
    catalog: &Catalog,
) -> SizingResult<SelectedConfiguration> {
    inputs.validate()?;
    if catalog.pumps.is_empty() {
        return Err(SizingError::empty_catalog("pumps"));
    }
    if catalog.motors.is_empty() {
        return Err(SizingError::empty_catalog("motors"));
    }

    let area_mm2 = std::f64::consts::FRAC_PI_4 * cylinder.outer_diameter_mm.powi(2);
    let factor = inputs.suspension.factor();
    let count = inputs.cylinder_count as f64;

    // Required flow at rated speed (L/min)
    let required_flow_lpm = inputs.speed_mps * area_mm2 * 60.0 * count / (factor * 1000.0);

    // First pump that covers the flow, else the largest
    let pump = catalog
        .pumps
        .iter()
        .find(|p| p.flow_lpm >= required_flow_lpm)
        .unwrap_or_else(|| catalog.pumps.last().expect("pumps checked non-empty"));
    let actual_flow_lpm = pump.flow_lpm;

    // Speed the selected pump actually delivers
    let effective_speed_mps = actual_flow_lpm * factor * 1000.0 / (area_mm2 * 60.0 * count);

    // Required power with the 1.3 dynamic-pressure margin
    let required_power_kw = actual_flow_lpm * cylinder.pressure_full_bar * 1.3 / 600.0;

    // First motor that covers the power, else the largest
    let motor = catalog
        .motors
        .iter()
        .find(|m| m.power_kw >= required_power_kw)
        .unwrap_or_else(|| catalog.motors.last().expect("motors checked non-empty"));

    let main_valve = main_valve_for_flow(actual_flow_lpm);
    let rupture_valve = pick_rupture_valve(
        inputs.speed_mps,
        area_mm2,
        factor,
        inputs.cylinder_count,
        catalog,
    );

    // Oil volume from the swept travel volume plus reserve. Sizing uses the
    // car travel distance, not the suspension-adjusted stroke.
    let travel_m = inputs.travel_distance_mm / 1000.0;
    let required_oil_volume_l =
        (area_mm2 * travel_m * count) / 1000.0 * OIL_RESERVE_FACTOR;

    // Smallest power unit whose tank covers the oil volume; never an
    // undersized pick
    let power_unit = catalog
        .power_units
        .iter()
        .find(|u| u.tank_capacity_l >= required_oil_volume_l)
        .map(|u| u.model.clone());

    Ok(SelectedConfiguration {
        cylinder_type: cylinder.type_code.clone(),
        stroke_m: inputs.stroke_mm() / 1000.0,
        quantity: inputs.cylinder_count,
        two_piece: false,
        pump: pump.model.clone(),
        motor: motor.model.clone(),
        main_valve,
        rupture_valve,
        power_unit,
        hoses: HoseConfiguration::default_for(actual_flow_lpm, inputs.cylinder_count),
        accessories: AccessoryKind::default_set(),
        required_flow_lpm,
        actual_flow_lpm,
        effective_speed_mps,
        required_power_kw,
        required_oil_volume_l,
    })
}

/// Main valve tier for a pump flow.
///
/// Exactly two tiers are reachable: the boundary is inclusive at 122 L/min.
pub fn main_valve_for_flow(flow_lpm: f64) -> MainValveModel {
    if flow_lpm <= MAIN_VALVE_TIER_BOUNDARY_LPM {
        MainValveModel::Ev100_075
    } else {
        MainValveModel::Ev100_150
    }
}

/// Pick the rupture valve for the worst-case flow per cylinder.
///
/// Dual (DK) variants are required from two cylinders up. The only
/// missing-size upgrade is dual 0.5" → dual 0.75"; any other miss yields
/// `None` ("none selected").
fn pick_rupture_valve(
    speed_mps: f64,
    area_mm2: f64,
    suspension_factor: f64,
    cylinder_count: u32,
    catalog: &Catalog,
) -> Option<RuptureValveKey> {
    let max_flow_per_cylinder_lpm =
        (speed_mps + RUPTURE_SPEED_MARGIN_MPS) * area_mm2 * 60.0 / (suspension_factor * 1000.0);

    let size = RuptureValveSize::for_flow(max_flow_per_cylinder_lpm)?;
    let dual = cylinder_count >= 2;

    let key = RuptureValveKey { size, dual };
    if catalog.rupture_valve(key).is_some() {
        return Some(key);
    }

    if dual && size == RuptureValveSize::HalfInch {
        let upgraded = RuptureValveKey {
            size: RuptureValveSize::ThreeQuarterInch,
            dual: true,
        };
        if catalog.rupture_valve(upgraded).is_some() {
            return Some(upgraded);
        }
    }

    None
}
