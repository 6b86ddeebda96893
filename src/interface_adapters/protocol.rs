// Telemetry DTOs and conversions for world snapshots.

use crate::domain::{BoatSnapshot, Wind};
use crate::use_cases::WorldUpdate;
use serde::Serialize;

/// Messages written to the telemetry stream, one JSON object per line.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum TelemetryMessage {
    // Snapshot of the regatta for a given tick.
    WorldUpdate(WorldUpdateDto),
}

#[derive(Debug, Clone, Serialize)]
pub struct WorldUpdateDto {
    pub tick: u64,
    pub wind: WindDto,
    pub boats: Vec<BoatStateDto>,
}

impl From<WorldUpdate> for WorldUpdateDto {
    fn from(update: WorldUpdate) -> Self {
        Self {
            tick: update.tick,
            wind: WindDto::from(update.wind),
            boats: update.boats.iter().map(BoatStateDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WindDto {
    pub strength: f64,
    pub direction_deg: f64,
}

impl From<Wind> for WindDto {
    fn from(wind: Wind) -> Self {
        Self {
            strength: wind.strength,
            direction_deg: wind.direction_deg,
        }
    }
}

/// Flattened boat state for telemetry.
#[derive(Debug, Clone, Serialize)]
pub struct BoatStateDto {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub heading_deg: f64,
    pub sail_angle_deg: f64,
    pub sheet_length: f64,
    pub speed: f64,
    pub luffing: bool,
}

impl From<&BoatSnapshot> for BoatStateDto {
    fn from(boat: &BoatSnapshot) -> Self {
        Self {
            id: boat.id.to_string(),
            x: boat.x,
            y: boat.y,
            heading_deg: boat.heading_deg,
            sail_angle_deg: boat.sail_angle_deg,
            sheet_length: boat.sheet_length,
            speed: boat.speed,
            luffing: boat.luffing,
        }
    }
}
