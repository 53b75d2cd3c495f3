//! Motor Catalog
//!
//! Submersible induction motors for the power unit, ascending by rated
//! power, with star/delta starting currents per supply voltage. 220 V data
//! exists only for the smaller frames; larger motors run on 380 V supplies
//! exclusively.

use serde::{Deserialize, Serialize};

/// Supply voltage options for the motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Voltage {
    /// 380 V three-phase supply (measured line voltage 400 V)
    #[default]
    V380,
    /// 220 V three-phase supply (measured line voltage 230 V)
    V220,
}

impl Voltage {
    /// Line voltage used in the nominal current formula
    pub fn line_voltage(&self) -> f64 {
        match self {
            Voltage::V380 => 400.0,
            Voltage::V220 => 230.0,
        }
    }
}

/// Star/delta starting currents (A) at one supply voltage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarDeltaCurrents {
    pub star_a: f64,
    pub delta_a: f64,
}

impl StarDeltaCurrents {
    const fn new(star_a: f64, delta_a: f64) -> Self {
        StarDeltaCurrents { star_a, delta_a }
    }
}

/// One catalog submersible motor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Motor {
    /// Model code, e.g. "SM-15"
    pub model: String,

    /// Rated power (kW)
    pub power_kw: f64,

    /// List price (EUR)
    pub price_eur: f64,

    /// Starting currents on a 380 V supply
    pub currents_380v: StarDeltaCurrents,

    /// Starting currents on a 220 V supply, where the frame supports it
    pub currents_220v: Option<StarDeltaCurrents>,
}

impl Motor {
    fn new(
        model: &str,
        power_kw: f64,
        price_eur: f64,
        currents_380v: StarDeltaCurrents,
        currents_220v: Option<StarDeltaCurrents>,
    ) -> Self {
        Motor {
            model: model.to_string(),
            power_kw,
            price_eur,
            currents_380v,
            currents_220v,
        }
    }

    /// Nominal running current (A) at the given supply voltage.
    ///
    /// `I = 1.5 · P / (√3 · U · cos φ)` with cos φ = 0.79 and the 1.5
    /// service factor used for contactor sizing.
    pub fn nominal_current_a(&self, voltage: Voltage) -> f64 {
        (1.5 * self.power_kw * 1000.0) / (1.732 * voltage.line_voltage() * 0.79)
    }

    /// Starting currents at the given supply voltage, if supported.
    pub fn starting_currents(&self, voltage: Voltage) -> Option<StarDeltaCurrents> {
        match voltage {
            Voltage::V380 => Some(self.currents_380v),
            Voltage::V220 => self.currents_220v,
        }
    }
}

/// Standard motor range, ascending by rated power.
pub fn standard_motors() -> Vec<Motor> {
    vec![
        Motor::new(
            "SM-5.5",
            5.5,
            620.0,
            StarDeltaCurrents::new(7.5, 13.0),
            Some(StarDeltaCurrents::new(12.4, 21.5)),
        ),
        Motor::new(
            "SM-7.5",
            7.5,
            710.0,
            StarDeltaCurrents::new(10.0, 17.4),
            Some(StarDeltaCurrents::new(16.5, 28.7)),
        ),
        Motor::new(
            "SM-9.2",
            9.2,
            790.0,
            StarDeltaCurrents::new(12.2, 21.1),
            Some(StarDeltaCurrents::new(20.1, 34.9)),
        ),
        Motor::new(
            "SM-11",
            11.0,
            880.0,
            StarDeltaCurrents::new(14.5, 25.1),
            Some(StarDeltaCurrents::new(24.0, 41.5)),
        ),
        Motor::new(
            "SM-13",
            13.0,
            980.0,
            StarDeltaCurrents::new(17.1, 29.6),
            None,
        ),
        Motor::new(
            "SM-15",
            15.0,
            1090.0,
            StarDeltaCurrents::new(19.7, 34.2),
            None,
        ),
        Motor::new(
            "SM-18.5",
            18.5,
            1260.0,
            StarDeltaCurrents::new(24.3, 42.1),
            None,
        ),
        Motor::new(
            "SM-22",
            22.0,
            1450.0,
            StarDeltaCurrents::new(28.9, 50.1),
            None,
        ),
        Motor::new(
            "SM-30",
            30.0,
            1820.0,
            StarDeltaCurrents::new(39.4, 68.3),
            None,
        ),
    ]
}
