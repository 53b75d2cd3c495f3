//! Cylinder Catalog
//!
//! Standard single-acting ram geometries offered for direct and 2:1 roped
//! hydraulic elevators, plus the factory pricing table used by the cost
//! engine. Geometry entries are immutable reference data; a wall thickness
//! of zero marks a bore that is only quoted to order and is skipped by the
//! feasibility engine.
//!
//! ## Type Codes
//!
//! A cylinder is identified by its "DxT" code, e.g. `90x10` for a 90 mm
//! outer diameter with a 10 mm wall. Fractional walls keep their decimal
//! part (`85x7.5`). The code is the pricing key.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One catalog cylinder geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylinderSpec {
    /// Outer diameter D (mm)
    pub outer_diameter_mm: f64,

    /// Wall thickness t (mm); entries with `t <= 0` are quoted to order
    /// and excluded from feasibility evaluation
    pub wall_thickness_mm: f64,
}

impl CylinderSpec {
    pub const fn new(outer_diameter_mm: f64, wall_thickness_mm: f64) -> Self {
        CylinderSpec {
            outer_diameter_mm,
            wall_thickness_mm,
        }
    }

    /// Piston cross-sectional area A = π/4 · D² (mm²)
    pub fn area_mm2(&self) -> f64 {
        std::f64::consts::FRAC_PI_4 * self.outer_diameter_mm.powi(2)
    }

    /// Inner diameter d = D - 2t (mm)
    pub fn inner_diameter_mm(&self) -> f64 {
        self.outer_diameter_mm - 2.0 * self.wall_thickness_mm
    }

    /// "DxT" type code used as the pricing key, e.g. "90x10" or "85x7.5"
    pub fn type_code(&self) -> String {
        format!("{}x{}", trim_num(self.outer_diameter_mm), trim_num(self.wall_thickness_mm))
    }
}

impl fmt::Display for CylinderSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_code())
    }
}

/// Format a dimension without a trailing ".0" ("10", "7.5")
fn trim_num(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

/// Standard cylinder geometries, ascending by outer diameter.
pub const CYLINDER_SIZES: [CylinderSpec; 18] = [
    CylinderSpec::new(50.0, 5.0),
    CylinderSpec::new(60.0, 5.0),
    CylinderSpec::new(60.0, 7.5),
    CylinderSpec::new(70.0, 7.5),
    CylinderSpec::new(80.0, 7.5),
    CylinderSpec::new(80.0, 10.0),
    CylinderSpec::new(85.0, 7.5),
    CylinderSpec::new(90.0, 7.5),
    CylinderSpec::new(90.0, 10.0),
    CylinderSpec::new(100.0, 7.5),
    CylinderSpec::new(100.0, 10.0),
    CylinderSpec::new(110.0, 7.5),
    CylinderSpec::new(110.0, 10.0),
    CylinderSpec::new(120.0, 10.0),
    CylinderSpec::new(130.0, 10.0),
    CylinderSpec::new(140.0, 10.0),
    CylinderSpec::new(150.0, 10.0),
    CylinderSpec::new(230.0, 0.0),
];

/// Factory pricing for one cylinder type.
///
/// Price per cylinder is `fixed + per_meter · stroke_m`, plus
/// `two_piece_extra` when the ram ships in two sections, before margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylinderPricing {
    /// Fixed cost per cylinder (EUR)
    pub fixed_eur: f64,

    /// Cost per meter of stroke (EUR/m)
    pub per_meter_eur: f64,

    /// Surcharge for a two-piece (jointed) ram (EUR)
    pub two_piece_extra_eur: f64,
}

impl CylinderPricing {
    const fn new(fixed_eur: f64, per_meter_eur: f64, two_piece_extra_eur: f64) -> Self {
        CylinderPricing {
            fixed_eur,
            per_meter_eur,
            two_piece_extra_eur,
        }
    }
}

static CYLINDER_PRICING: Lazy<HashMap<&'static str, CylinderPricing>> = Lazy::new(|| {
    HashMap::from([
        ("50x5", CylinderPricing::new(185.0, 95.0, 90.0)),
        ("60x5", CylinderPricing::new(205.0, 105.0, 95.0)),
        ("60x7.5", CylinderPricing::new(225.0, 115.0, 95.0)),
        ("70x7.5", CylinderPricing::new(255.0, 125.0, 105.0)),
        ("80x7.5", CylinderPricing::new(290.0, 140.0, 115.0)),
        ("80x10", CylinderPricing::new(320.0, 155.0, 115.0)),
        ("85x7.5", CylinderPricing::new(310.0, 150.0, 120.0)),
        ("90x7.5", CylinderPricing::new(335.0, 160.0, 125.0)),
        ("90x10", CylinderPricing::new(420.0, 185.0, 160.0)),
        ("100x7.5", CylinderPricing::new(390.0, 180.0, 140.0)),
        ("100x10", CylinderPricing::new(460.0, 205.0, 170.0)),
        ("110x7.5", CylinderPricing::new(450.0, 200.0, 155.0)),
        ("110x10", CylinderPricing::new(520.0, 230.0, 185.0)),
        ("120x10", CylinderPricing::new(585.0, 255.0, 205.0)),
        ("130x10", CylinderPricing::new(655.0, 285.0, 225.0)),
        ("140x10", CylinderPricing::new(730.0, 315.0, 250.0)),
        ("150x10", CylinderPricing::new(810.0, 350.0, 275.0)),
    ])
});

/// Look up factory pricing for a "DxT" type code.
///
/// Returns `None` for unknown codes; the cost engine treats that as a
/// zero-priced cylinder and emits a diagnostic.
pub fn cylinder_pricing(type_code: &str) -> Option<CylinderPricing> {
    CYLINDER_PRICING.get(type_code).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_code_formatting() {
        assert_eq!(CylinderSpec::new(90.0, 10.0).type_code(), "90x10");
        assert_eq!(CylinderSpec::new(85.0, 7.5).type_code(), "85x7.5");
    }

    #[test]
    fn test_area() {
        let cyl = CylinderSpec::new(100.0, 10.0);
        assert!((cyl.area_mm2() - 7853.98).abs() < 0.01);
        assert_eq!(cyl.inner_diameter_mm(), 80.0);
    }

    #[test]
    fn test_catalog_sorted_by_diameter() {
        for pair in CYLINDER_SIZES.windows(2) {
            assert!(pair[0].outer_diameter_mm <= pair[1].outer_diameter_mm);
        }
    }

    #[test]
    fn test_pricing_lookup() {
        let pricing = cylinder_pricing("90x10").unwrap();
        assert_eq!(pricing.fixed_eur, 420.0);
        assert!(cylinder_pricing("999x9").is_none());
    }

    #[test]
    fn test_every_standard_wall_is_priced() {
        for cyl in CYLINDER_SIZES.iter().filter(|c| c.wall_thickness_mm > 0.0) {
            assert!(
                cylinder_pricing(&cyl.type_code()).is_some(),
                "missing pricing for {}",
                cyl.type_code()
            );
        }
    }

    #[test]
    fn test_serialization() {
        let cyl = CylinderSpec::new(90.0, 10.0);
        let json = serde_json::to_string(&cyl).unwrap();
        let roundtrip: CylinderSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(cyl, roundtrip);
    }
}
