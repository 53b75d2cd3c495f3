//! Hose Catalog
//!
//! High-pressure hose diameters with per-meter pricing, and the flow-based
//! diameter recommendation used to seed the default hose configuration.

use serde::{Deserialize, Serialize};

/// Nominal hose diameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HoseDiameter {
    HalfInch,
    ThreeQuarterInch,
    OneInch,
    OneAndQuarterInch,
    OneAndHalfInch,
    TwoInch,
}

impl HoseDiameter {
    /// All diameters for UI selection, ascending
    pub const ALL: [HoseDiameter; 6] = [
        HoseDiameter::HalfInch,
        HoseDiameter::ThreeQuarterInch,
        HoseDiameter::OneInch,
        HoseDiameter::OneAndQuarterInch,
        HoseDiameter::OneAndHalfInch,
        HoseDiameter::TwoInch,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            HoseDiameter::HalfInch => "1/2\"",
            HoseDiameter::ThreeQuarterInch => "3/4\"",
            HoseDiameter::OneInch => "1\"",
            HoseDiameter::OneAndQuarterInch => "1 1/4\"",
            HoseDiameter::OneAndHalfInch => "1 1/2\"",
            HoseDiameter::TwoInch => "2\"",
        }
    }

    /// Price per meter (EUR/m)
    pub fn price_per_meter_eur(&self) -> f64 {
        match self {
            HoseDiameter::HalfInch => 8.5,
            HoseDiameter::ThreeQuarterInch => 11.2,
            HoseDiameter::OneInch => 15.8,
            HoseDiameter::OneAndQuarterInch => 21.5,
            HoseDiameter::OneAndHalfInch => 28.4,
            HoseDiameter::TwoInch => 39.9,
        }
    }

    /// Recommend a diameter for a line carrying the given flow (L/min).
    ///
    /// Tiers keep oil velocity in the usual 4-6 m/s band for pressure lines.
    pub fn recommend_for_flow(flow_lpm: f64) -> Self {
        if flow_lpm <= 35.0 {
            HoseDiameter::HalfInch
        } else if flow_lpm <= 70.0 {
            HoseDiameter::ThreeQuarterInch
        } else if flow_lpm <= 120.0 {
            HoseDiameter::OneInch
        } else if flow_lpm <= 200.0 {
            HoseDiameter::OneAndQuarterInch
        } else if flow_lpm <= 320.0 {
            HoseDiameter::OneAndHalfInch
        } else {
            HoseDiameter::TwoInch
        }
    }
}
