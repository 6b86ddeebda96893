// Domain-level simulated boats and input/snapshot types.

use super::sail::SailPhysics;

/// Helm controls for one boat, each in -1.0..=1.0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HelmInput {
    /// Positive turns to starboard (clockwise).
    pub turn: f64,
    /// Positive eases the main sheet, negative hauls it in.
    pub trim: f64,
}

impl HelmInput {
    /// Limits both controls to -1.0..=1.0. NaN becomes zero.
    pub fn clamped(self) -> Self {
        let limit = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(-1.0, 1.0) };
        Self {
            turn: limit(self.turn),
            trim: limit(self.trim),
        }
    }
}

/// True wind as set by the wind sliders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wind {
    /// Slider strength, 0..=100.
    pub strength: f64,
    /// Direction the wind blows toward, degrees.
    pub direction_deg: f64,
}

#[derive(Debug, Clone)]
pub struct BoatSnapshot {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub heading_deg: f64,
    pub sail_angle_deg: f64,
    pub sheet_length: f64,
    pub speed: f64,
    pub luffing: bool,
}

pub struct SimBoat {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub heading_deg: f64,
    pub sheet_length: f64,

    // Display-only outputs of the last step.
    pub sail_angle_deg: f64,
    pub vx: f64,
    pub vy: f64,

    // Physics and control state (not part of snapshots).
    pub sail: SailPhysics,
    pub last_input: HelmInput,
}

impl SimBoat {
    pub fn new(id: u64, x: f64, y: f64, sheet_length: f64) -> Self {
        Self {
            id,
            x,
            y,
            heading_deg: 0.0,
            sheet_length,
            sail_angle_deg: 0.0,
            vx: 0.0,
            vy: 0.0,
            sail: SailPhysics::default(),
            last_input: HelmInput::default(),
        }
    }

    /// On-screen speed in units per second.
    pub fn speed(&self) -> f64 {
        self.vx.hypot(self.vy)
    }
}

impl From<&SimBoat> for BoatSnapshot {
    fn from(b: &SimBoat) -> Self {
        Self {
            id: b.id,
            x: b.x,
            y: b.y,
            heading_deg: b.heading_deg,
            sail_angle_deg: b.sail_angle_deg,
            sheet_length: b.sheet_length,
            speed: b.speed(),
            luffing: b.sail.state().luffing,
        }
    }
}
