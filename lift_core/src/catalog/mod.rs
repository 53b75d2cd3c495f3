//! # Catalog Store
//!
//! Static reference data for every selectable component: cylinder
//! geometries and pricing, pumps, motors, valves, power units, hoses and
//! accessories. Read-only during a calculation; the engines receive a
//! [`Catalog`] snapshot and never mutate it.
//!
//! Catalogs whose entries are open-ended (pumps, motors, rupture valves,
//! power units) are plain `Vec`s so callers can substitute their own price
//! lists; closed sets (main valves, hose diameters, accessories) are enums
//! with match-based attribute lookups.
//!
//! ## Example
//!
//! ```rust
//! use lift_core::catalog::Catalog;
//!
//! let catalog = Catalog::standard();
//! assert!(!catalog.pumps.is_empty());
//! ```

pub mod accessories;
pub mod cylinders;
pub mod hoses;
pub mod motors;
pub mod power_units;
pub mod pumps;
pub mod valves;

pub use accessories::{AccessoryCategory, AccessoryKind};
pub use cylinders::{cylinder_pricing, CylinderPricing, CylinderSpec, CYLINDER_SIZES};
pub use hoses::HoseDiameter;
pub use motors::{Motor, StarDeltaCurrents, Voltage};
pub use power_units::PowerUnit;
pub use pumps::Pump;
pub use valves::{
    BallValveTier, MainValveModel, RuptureValve, RuptureValveKey, RuptureValveSize,
};

use serde::{Deserialize, Serialize};

/// Read-only component catalogs handed to the engines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Cylinder geometries, ascending by outer diameter
    pub cylinders: Vec<CylinderSpec>,

    /// Pumps, ascending by flow
    pub pumps: Vec<Pump>,

    /// Motors, ascending by rated power
    pub motors: Vec<Motor>,

    /// Rupture valves, keyed by size + dual flag
    pub rupture_valves: Vec<RuptureValve>,

    /// Power units, ascending by tank capacity
    pub power_units: Vec<PowerUnit>,
}

impl Catalog {
    /// The built-in factory catalog.
    pub fn standard() -> Self {
        Catalog {
            cylinders: CYLINDER_SIZES.to_vec(),
            pumps: pumps::standard_pumps(),
            motors: motors::standard_motors(),
            rupture_valves: valves::standard_rupture_valves(),
            power_units: power_units::standard_power_units(),
        }
    }

    /// Find a pump by model code.
    pub fn pump(&self, model: &str) -> Option<&Pump> {
        self.pumps.iter().find(|p| p.model == model)
    }

    /// Find a motor by model code.
    pub fn motor(&self, model: &str) -> Option<&Motor> {
        self.motors.iter().find(|m| m.model == model)
    }

    /// Find a rupture valve by its size + dual key.
    pub fn rupture_valve(&self, key: RuptureValveKey) -> Option<&RuptureValve> {
        self.rupture_valves.iter().find(|v| v.key == key)
    }

    /// Find a power unit by model code.
    pub fn power_unit(&self, model: &str) -> Option<&PowerUnit> {
        self.power_units.iter().find(|u| u.model == model)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::standard()
    }
}
