//! Valve Catalogs
//!
//! Two valve families are selected per system:
//!
//! - **Main control valve**: the down-direction control block on the power
//!   unit, picked by pump flow. Only the two EV100 tiers are ever
//!   recommended; the smaller GV/KV blocks stay available as manual picks.
//! - **Rupture valve** (burst-hose valve): the safety valve mounted on the
//!   cylinder, sized by worst-case flow per cylinder. "DK" marks the dual
//!   variant used when the system has two or more cylinders.
//!
//! Both catalogs are keyed by enums; the display names exist for quoting
//! output only. The size-dependent ball valve accessory resolves its price
//! tier through [`MainValveModel::ball_valve_tier`] rather than by matching
//! on display strings.

use serde::{Deserialize, Serialize};

/// Main control valve models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MainValveModel {
    /// 0.5'' GV gate block
    Gv05,
    /// 0.5'' KV1P compact block
    Kv1p05,
    /// 0.5'' KV1S compact block
    Kv1s05,
    /// 0.5'' KV2P compact block
    Kv2p05,
    /// 0.5'' KV2S compact block
    Kv2s05,
    /// 0.75'' EVD electronic block
    Evd075,
    /// 0.75'' EV100 electronic block
    Ev100_075,
    /// 1.5'' EV100 electronic block
    Ev100_150,
}

impl MainValveModel {
    /// All models for UI selection
    pub const ALL: [MainValveModel; 8] = [
        MainValveModel::Gv05,
        MainValveModel::Kv1p05,
        MainValveModel::Kv1s05,
        MainValveModel::Kv2p05,
        MainValveModel::Kv2s05,
        MainValveModel::Evd075,
        MainValveModel::Ev100_075,
        MainValveModel::Ev100_150,
    ];

    /// Display name for quoting output
    pub fn display_name(&self) -> &'static str {
        match self {
            MainValveModel::Gv05 => "0.5'' GV",
            MainValveModel::Kv1p05 => "0.5'' KV1P",
            MainValveModel::Kv1s05 => "0.5'' KV1S",
            MainValveModel::Kv2p05 => "0.5'' KV2P",
            MainValveModel::Kv2s05 => "0.5'' KV2S",
            MainValveModel::Evd075 => "0.75'' EVD",
            MainValveModel::Ev100_075 => "0.75'' EV100",
            MainValveModel::Ev100_150 => "1.5'' EV100",
        }
    }

    /// List price (EUR)
    pub fn price_eur(&self) -> f64 {
        match self {
            MainValveModel::Gv05 => 320.0,
            MainValveModel::Kv1p05 => 410.0,
            MainValveModel::Kv1s05 => 430.0,
            MainValveModel::Kv2p05 => 520.0,
            MainValveModel::Kv2s05 => 540.0,
            MainValveModel::Evd075 => 610.0,
            MainValveModel::Ev100_075 => 680.0,
            MainValveModel::Ev100_150 => 980.0,
        }
    }

    /// Size tier for the matching ball valve accessory.
    ///
    /// The GV and EVD blocks have no dedicated tier; they fall back to the
    /// 0.75'' tier, matching how the quote sheet has always priced them.
    pub fn ball_valve_tier(&self) -> BallValveTier {
        match self {
            MainValveModel::Kv1p05
            | MainValveModel::Kv1s05
            | MainValveModel::Kv2p05
            | MainValveModel::Kv2s05 => BallValveTier::Kv,
            MainValveModel::Ev100_075 => BallValveTier::ThreeQuarterInch,
            MainValveModel::Ev100_150 => BallValveTier::OneAndHalfInch,
            MainValveModel::Gv05 | MainValveModel::Evd075 => BallValveTier::ThreeQuarterInch,
        }
    }
}

/// Price tiers for the size-dependent ball valve accessory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallValveTier {
    /// Matches the KV compact blocks
    Kv,
    /// Matches 0.75'' blocks; also the safe fallback tier
    ThreeQuarterInch,
    /// Matches the 1.5'' EV100 block
    OneAndHalfInch,
    /// Matches a 2'' block
    TwoInch,
}

impl BallValveTier {
    /// Accessory price (EUR) for this tier
    pub fn price_eur(&self) -> f64 {
        match self {
            BallValveTier::Kv => 24.0,
            BallValveTier::ThreeQuarterInch => 42.0,
            BallValveTier::OneAndHalfInch => 67.0,
            BallValveTier::TwoInch => 77.0,
        }
    }
}

/// Nominal rupture valve sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuptureValveSize {
    HalfInch,
    ThreeQuarterInch,
    OneInch,
    OneAndHalfInch,
    TwoInch,
}

impl RuptureValveSize {
    pub fn display_name(&self) -> &'static str {
        match self {
            RuptureValveSize::HalfInch => "0.5\"",
            RuptureValveSize::ThreeQuarterInch => "0.75\"",
            RuptureValveSize::OneInch => "1.0\"",
            RuptureValveSize::OneAndHalfInch => "1.5\"",
            RuptureValveSize::TwoInch => "2.0\"",
        }
    }

    /// Map worst-case flow per cylinder (L/min) to a nominal size.
    ///
    /// Returns `None` above the 2.0" breakpoint ("out of range").
    pub fn for_flow(max_flow_per_cylinder_lpm: f64) -> Option<Self> {
        if max_flow_per_cylinder_lpm <= 55.0 {
            Some(RuptureValveSize::HalfInch)
        } else if max_flow_per_cylinder_lpm <= 100.0 {
            Some(RuptureValveSize::ThreeQuarterInch)
        } else if max_flow_per_cylinder_lpm <= 165.0 {
            Some(RuptureValveSize::OneInch)
        } else if max_flow_per_cylinder_lpm <= 400.0 {
            Some(RuptureValveSize::OneAndHalfInch)
        } else if max_flow_per_cylinder_lpm <= 1200.0 {
            Some(RuptureValveSize::TwoInch)
        } else {
            None
        }
    }
}

/// Catalog key for a rupture valve: nominal size plus the dual (DK) flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuptureValveKey {
    pub size: RuptureValveSize,
    pub dual: bool,
}

/// One catalog rupture valve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuptureValve {
    /// Size + dual-variant key
    pub key: RuptureValveKey,

    /// Display name, e.g. "R10 1.0\" DK"
    pub name: String,

    /// List price per cylinder (EUR)
    pub price_eur: f64,
}

impl RuptureValve {
    fn new(size: RuptureValveSize, dual: bool, price_eur: f64) -> Self {
        let name = if dual {
            format!("R10 {} DK", size.display_name())
        } else {
            format!("R10 {}", size.display_name())
        };
        RuptureValve {
            key: RuptureValveKey { size, dual },
            name,
            price_eur,
        }
    }
}

/// Standard rupture valve range.
///
/// No dual 0.5" variant exists; twin-cylinder systems that size to 0.5"
/// upgrade to the dual 0.75" valve.
pub fn standard_rupture_valves() -> Vec<RuptureValve> {
    vec![
        RuptureValve::new(RuptureValveSize::HalfInch, false, 85.0),
        RuptureValve::new(RuptureValveSize::ThreeQuarterInch, false, 95.0),
        RuptureValve::new(RuptureValveSize::ThreeQuarterInch, true, 150.0),
        RuptureValve::new(RuptureValveSize::OneInch, false, 120.0),
        RuptureValve::new(RuptureValveSize::OneInch, true, 190.0),
        RuptureValve::new(RuptureValveSize::OneAndHalfInch, false, 210.0),
        RuptureValve::new(RuptureValveSize::OneAndHalfInch, true, 320.0),
        RuptureValve::new(RuptureValveSize::TwoInch, false, 330.0),
        RuptureValve::new(RuptureValveSize::TwoInch, true, 480.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_breakpoints() {
        assert_eq!(
            RuptureValveSize::for_flow(55.0),
            Some(RuptureValveSize::HalfInch)
        );
        assert_eq!(
            RuptureValveSize::for_flow(55.1),
            Some(RuptureValveSize::ThreeQuarterInch)
        );
        assert_eq!(
            RuptureValveSize::for_flow(400.0),
            Some(RuptureValveSize::OneAndHalfInch)
        );
        assert_eq!(RuptureValveSize::for_flow(1201.0), None);
    }

    #[test]
    fn test_no_dual_half_inch() {
        let valves = standard_rupture_valves();
        assert!(!valves
            .iter()
            .any(|v| v.key.size == RuptureValveSize::HalfInch && v.key.dual));
    }

    #[test]
    fn test_ball_valve_tiers() {
        assert_eq!(MainValveModel::Kv1p05.ball_valve_tier(), BallValveTier::Kv);
        assert_eq!(
            MainValveModel::Ev100_075.ball_valve_tier(),
            BallValveTier::ThreeQuarterInch
        );
        assert_eq!(
            MainValveModel::Ev100_150.ball_valve_tier(),
            BallValveTier::OneAndHalfInch
        );
        // fallback tier for blocks without a dedicated tier
        assert_eq!(
            MainValveModel::Gv05.ball_valve_tier(),
            BallValveTier::ThreeQuarterInch
        );
        assert_eq!(BallValveTier::TwoInch.price_eur(), 77.0);
    }

    #[test]
    fn test_dual_names_carry_dk_suffix() {
        for valve in standard_rupture_valves() {
            assert_eq!(valve.key.dual, valve.name.ends_with("DK"));
        }
    }

    #[test]
    fn test_serialization() {
        let model = MainValveModel::Ev100_150;
        let json = serde_json::to_string(&model).unwrap();
        let roundtrip: MainValveModel = serde_json::from_str(&json).unwrap();
        assert_eq!(model, roundtrip);
    }
}
