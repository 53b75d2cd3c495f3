//! Pump Catalog
//!
//! Screw pumps available for the power unit, ascending by nominal flow.
//! The selector picks the first pump whose flow covers the required flow,
//! so the ascending order is load-bearing.

use serde::{Deserialize, Serialize};

/// One catalog screw pump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pump {
    /// Model code, e.g. "SP-100"
    pub model: String,

    /// Nominal flow (L/min)
    pub flow_lpm: f64,

    /// List price (EUR)
    pub price_eur: f64,
}

impl Pump {
    fn new(model: &str, flow_lpm: f64, price_eur: f64) -> Self {
        Pump {
            model: model.to_string(),
            flow_lpm,
            price_eur,
        }
    }
}

/// Standard pump range, ascending by flow.
pub fn standard_pumps() -> Vec<Pump> {
    vec![
        Pump::new("SP-25", 25.0, 390.0),
        Pump::new("SP-40", 40.0, 430.0),
        Pump::new("SP-55", 55.0, 470.0),
        Pump::new("SP-75", 75.0, 520.0),
        Pump::new("SP-100", 100.0, 585.0),
        Pump::new("SP-125", 125.0, 650.0),
        Pump::new("SP-150", 150.0, 720.0),
        Pump::new("SP-180", 180.0, 810.0),
        Pump::new("SP-210", 210.0, 900.0),
        Pump::new("SP-250", 250.0, 1020.0),
        Pump::new("SP-300", 300.0, 1180.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pumps_sorted_by_flow() {
        let pumps = standard_pumps();
        for pair in pumps.windows(2) {
            assert!(pair[0].flow_lpm < pair[1].flow_lpm);
        }
    }

    #[test]
    fn test_serialization() {
        let pump = standard_pumps()[0].clone();
        let json = serde_json::to_string(&pump).unwrap();
        let roundtrip: Pump = serde_json::from_str(&json).unwrap();
        assert_eq!(pump, roundtrip);
    }
}
