//! Power Unit Catalog
//!
//! Tank/pump/motor skids, ascending by tank capacity. Selection checks
//! tank capacity only; total oil, dead zone and dimensions are display
//! attributes carried through to the quote.

use serde::{Deserialize, Serialize};

/// One catalog power unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUnit {
    /// Model code, e.g. "GU-120"
    pub model: String,

    /// Usable tank capacity (L)
    pub tank_capacity_l: f64,

    /// Total oil fill including the dead zone (L)
    pub total_oil_l: f64,

    /// Oil below the suction line that never circulates (L)
    pub dead_zone_l: f64,

    /// Skid dimensions (mm)
    pub length_mm: f64,
    pub width_mm: f64,
    pub height_mm: f64,

    /// List price (EUR)
    pub price_eur: f64,
}

impl PowerUnit {
    #[allow(clippy::too_many_arguments)]
    fn new(
        model: &str,
        tank_capacity_l: f64,
        total_oil_l: f64,
        dead_zone_l: f64,
        length_mm: f64,
        width_mm: f64,
        height_mm: f64,
        price_eur: f64,
    ) -> Self {
        PowerUnit {
            model: model.to_string(),
            tank_capacity_l,
            total_oil_l,
            dead_zone_l,
            length_mm,
            width_mm,
            height_mm,
            price_eur,
        }
    }
}

/// Standard power unit range, ascending by tank capacity.
pub fn standard_power_units() -> Vec<PowerUnit> {
    vec![
        PowerUnit::new("GU-60", 60.0, 75.0, 15.0, 650.0, 450.0, 650.0, 1150.0),
        PowerUnit::new("GU-90", 90.0, 110.0, 20.0, 750.0, 500.0, 700.0, 1350.0),
        PowerUnit::new("GU-120", 120.0, 145.0, 25.0, 850.0, 550.0, 750.0, 1550.0),
        PowerUnit::new("GU-180", 180.0, 210.0, 30.0, 1000.0, 600.0, 800.0, 1900.0),
        PowerUnit::new("GU-250", 250.0, 290.0, 40.0, 1150.0, 650.0, 880.0, 2350.0),
        PowerUnit::new("GU-330", 330.0, 380.0, 50.0, 1300.0, 700.0, 950.0, 2850.0),
        PowerUnit::new("GU-450", 450.0, 515.0, 65.0, 1500.0, 780.0, 1050.0, 3500.0),
        PowerUnit::new("GU-600", 600.0, 680.0, 80.0, 1700.0, 850.0, 1150.0, 4300.0),
    ]
}
