// Use-case level inputs/outputs for the regatta loop.

use crate::domain::{BoatSnapshot, HelmInput, Wind};

#[derive(Debug, Clone)]
pub enum RegattaEvent {
    Join { boat_id: u64, x: f64, y: f64 },
    Leave { boat_id: u64 },
    Helm { boat_id: u64, input: HelmInput },
    SetSheet { boat_id: u64, sheet_length: f64 },
    SetWind(Wind),
}

#[derive(Debug, Clone)]
pub struct WorldUpdate {
    pub tick: u64,
    pub wind: Wind,
    pub boats: Vec<BoatSnapshot>,
}
