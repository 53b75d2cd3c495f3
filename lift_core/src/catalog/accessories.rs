//! Accessory Catalog
//!
//! Optional items added to a quote. Two accessories have non-flat pricing:
//!
//! - [`AccessoryKind::PowerUnitHoses`]: its cost is the computed hose cost
//!   and is folded into the power unit category by the cost engine, so it
//!   contributes nothing under accessories.
//! - [`AccessoryKind::BallValve`]: priced by the size tier of the selected
//!   main valve (see `MainValveModel::ball_valve_tier`).

use serde::{Deserialize, Serialize};

/// Accessory categories, for grouping in quote output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessoryCategory {
    Hydraulic,
    Safety,
    Monitoring,
}

impl AccessoryCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            AccessoryCategory::Hydraulic => "Hydraulic",
            AccessoryCategory::Safety => "Safety",
            AccessoryCategory::Monitoring => "Monitoring",
        }
    }
}

/// Catalog accessories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessoryKind {
    /// Hose set between power unit and cylinders; priced by the hose
    /// configuration, folded into the power unit category
    PowerUnitHoses,
    /// Shut-off ball valve sized to the main valve
    BallValve,
    /// Maximum pressure switch
    PressureSwitch,
    /// Minimum (slack-rope) pressure switch
    LowPressureSwitch,
    /// Manual emergency lowering hand pump
    HandPump,
    /// Oil level sensor with dry-run cutout
    OilLevelSensor,
    /// Tank heater for cold shafts
    TankHeater,
    /// Glycerine pressure gauge with shut-off
    PressureGauge,
}

impl AccessoryKind {
    /// All accessories in display order
    pub const ALL: [AccessoryKind; 8] = [
        AccessoryKind::PowerUnitHoses,
        AccessoryKind::BallValve,
        AccessoryKind::PressureSwitch,
        AccessoryKind::LowPressureSwitch,
        AccessoryKind::HandPump,
        AccessoryKind::OilLevelSensor,
        AccessoryKind::TankHeater,
        AccessoryKind::PressureGauge,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            AccessoryKind::PowerUnitHoses => "Power unit hoses",
            AccessoryKind::BallValve => "Ball valve (sized)",
            AccessoryKind::PressureSwitch => "Pressure switch",
            AccessoryKind::LowPressureSwitch => "Low pressure switch",
            AccessoryKind::HandPump => "Hand pump",
            AccessoryKind::OilLevelSensor => "Oil level sensor",
            AccessoryKind::TankHeater => "Tank heater",
            AccessoryKind::PressureGauge => "Pressure gauge",
        }
    }

    pub fn category(&self) -> AccessoryCategory {
        match self {
            AccessoryKind::PowerUnitHoses
            | AccessoryKind::BallValve
            | AccessoryKind::HandPump => AccessoryCategory::Hydraulic,
            AccessoryKind::PressureSwitch
            | AccessoryKind::LowPressureSwitch
            | AccessoryKind::OilLevelSensor => AccessoryCategory::Safety,
            AccessoryKind::TankHeater | AccessoryKind::PressureGauge => {
                AccessoryCategory::Monitoring
            }
        }
    }

    /// Flat list price (EUR). `None` for the two dynamically priced items.
    pub fn flat_price_eur(&self) -> Option<f64> {
        match self {
            AccessoryKind::PowerUnitHoses => None,
            AccessoryKind::BallValve => None,
            AccessoryKind::PressureSwitch => Some(38.0),
            AccessoryKind::LowPressureSwitch => Some(38.0),
            AccessoryKind::HandPump => Some(95.0),
            AccessoryKind::OilLevelSensor => Some(45.0),
            AccessoryKind::TankHeater => Some(120.0),
            AccessoryKind::PressureGauge => Some(25.0),
        }
    }

    /// Whether the accessory ships checked by default on a new quote
    pub fn included_by_default(&self) -> bool {
        matches!(
            self,
            AccessoryKind::PowerUnitHoses
                | AccessoryKind::BallValve
                | AccessoryKind::PressureSwitch
                | AccessoryKind::HandPump
        )
    }

    /// The default accessory set for a fresh configuration
    pub fn default_set() -> Vec<AccessoryKind> {
        AccessoryKind::ALL
            .iter()
            .copied()
            .filter(AccessoryKind::included_by_default)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dynamic_items_have_no_flat_price() {
        assert!(AccessoryKind::PowerUnitHoses.flat_price_eur().is_none());
        assert!(AccessoryKind::BallValve.flat_price_eur().is_none());
        assert!(AccessoryKind::HandPump.flat_price_eur().is_some());
    }

    #[test]
    fn test_default_set() {
        let set = AccessoryKind::default_set();
        assert!(set.contains(&AccessoryKind::PowerUnitHoses));
        assert!(!set.contains(&AccessoryKind::TankHeater));
    }

    #[test]
    fn test_serialization() {
        let acc = AccessoryKind::BallValve;
        let json = serde_json::to_string(&acc).unwrap();
        assert_eq!(json, "\"BallValve\"");
        let roundtrip: AccessoryKind = serde_json::from_str(&json).unwrap();
        assert_eq!(acc, roundtrip);
    }
}
