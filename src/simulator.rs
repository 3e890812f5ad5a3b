//! TerraSense risk simulator.
//!
//! Damage risk of hitting a road hazard at a given speed, with and without an
//! early alert. With an alert the driver is assumed to slow to
//! [`ALERTED_SPEED_KMH`].

use serde::Serialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

pub const MIN_SPEED_KMH: u32 = 20;
pub const MAX_SPEED_KMH: u32 = 120;
pub const DEFAULT_SPEED_KMH: u32 = 60;
pub const ALERTED_SPEED_KMH: u32 = 20;
const IMPACT_SCALE: f64 = 0.9;
const MAX_RISK: f64 = 100.0;

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Hazard {
    #[default]
    Pothole,
    Breaker,
    Surface,
}

impl Hazard {
    pub fn factor(&self) -> f64 {
        match self {
            Hazard::Pothole => 1.5,
            Hazard::Breaker => 1.2,
            Hazard::Surface => 1.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Hazard::Pothole => "Deep Pothole",
            Hazard::Breaker => "Speed Breaker",
            Hazard::Surface => "Damaged Surface",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Hazard::Pothole => "Suspension Damage Risk",
            Hazard::Breaker => "Undercarriage Impact",
            Hazard::Surface => "Loss of Traction",
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RiskAssessment {
    pub hazard: Hazard,
    pub label: &'static str,
    pub description: &'static str,
    pub speed_kmh: u32,
    /// Percentage, 0..=100
    pub raw_risk: f64,
    /// Percentage, 0..=100
    pub reduced_risk: f64,
    pub risk_reduction: f64,
}

fn risk(speed_kmh: u32, hazard: Hazard) -> f64 {
    (speed_kmh as f64 * hazard.factor() * IMPACT_SCALE).min(MAX_RISK)
}

pub fn assess(speed_kmh: u32, hazard: Hazard) -> RiskAssessment {
    let speed_kmh = speed_kmh.clamp(MIN_SPEED_KMH, MAX_SPEED_KMH);
    let raw_risk = risk(speed_kmh, hazard);
    let reduced_risk = risk(ALERTED_SPEED_KMH, hazard);

    RiskAssessment {
        hazard,
        label: hazard.label(),
        description: hazard.description(),
        speed_kmh,
        raw_risk,
        reduced_risk,
        risk_reduction: raw_risk - reduced_risk,
    }
}
