// Fixed-step world loop that sails every joined boat.

use super::types::{RegattaEvent, WorldUpdate};
use crate::domain::systems::boat_movement;
use crate::domain::tuning::HelmTuning;
use crate::domain::{BoatSnapshot, SimBoat, Wind};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::sync::{Notify, broadcast, mpsc};
use tracing::{debug, info, warn};

/// Settings for one regatta world.
#[derive(Debug, Clone)]
pub struct RegattaSettings {
    /// Fixed tick interval for the world loop.
    pub tick_interval: Duration,
    /// Helm tuning shared by every boat.
    pub helm: HelmTuning,
    /// Wind at the start of the session.
    pub initial_wind: Wind,
}

impl Default for RegattaSettings {
    fn default() -> Self {
        let helm = HelmTuning::default();
        Self {
            tick_interval: Duration::from_millis(1000 / 60),
            initial_wind: Wind {
                strength: helm.default_wind_strength,
                direction_deg: 90.0,
            },
            helm,
        }
    }
}

/// Runs until `shutdown` is notified or every event sender is dropped.
///
/// Each tick drains pending events, steps each boat exactly once and then
/// broadcasts a snapshot.
pub async fn world_task(
    mut events_rx: mpsc::Receiver<RegattaEvent>,
    world_tx: broadcast::Sender<WorldUpdate>,
    settings: RegattaSettings,
    shutdown: Arc<Notify>,
) {
    let mut tick: u64 = 0;
    let mut boats: Vec<SimBoat> = Vec::new();
    let mut wind = settings.initial_wind;
    let dt = settings.tick_interval.as_secs_f64();

    let mut interval = tokio::time::interval(settings.tick_interval);

    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                info!(tick, "regatta shutdown requested");
                break;
            }
            _ = interval.tick() => {}
        }

        let mut closed = false;
        loop {
            match events_rx.try_recv() {
                Ok(ev) => apply_event(&mut boats, &mut wind, ev, &settings.helm),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    closed = true;
                    break;
                }
            }
        }

        for b in &mut boats {
            boat_movement::tick_boat(b, wind, dt, &settings.helm);
        }

        tick += 1;
        let _ = world_tx.send(WorldUpdate {
            tick,
            wind,
            boats: boats.iter().map(BoatSnapshot::from).collect(),
        });

        if closed {
            info!(tick, "event channel closed; stopping regatta");
            break;
        }
    }
}

fn apply_event(boats: &mut Vec<SimBoat>, wind: &mut Wind, ev: RegattaEvent, helm: &HelmTuning) {
    match ev {
        RegattaEvent::Join { boat_id, x, y } => {
            if boats.iter().any(|b| b.id == boat_id) {
                warn!(boat_id, "boat already sailing; join ignored");
                return;
            }
            info!(boat_id, x, y, "boat joined");
            boats.push(SimBoat::new(boat_id, x, y, helm.default_sheet_length));
        }
        RegattaEvent::Leave { boat_id } => {
            info!(boat_id, "boat left");
            boats.retain(|b| b.id != boat_id);
        }
        RegattaEvent::Helm { boat_id, input } => {
            if let Some(b) = boats.iter_mut().find(|b| b.id == boat_id) {
                b.last_input = input.clamped();
            }
        }
        RegattaEvent::SetSheet {
            boat_id,
            sheet_length,
        } => {
            if sheet_length.is_nan() {
                warn!(boat_id, "sheet length is NaN; ignored");
                return;
            }
            if let Some(b) = boats.iter_mut().find(|b| b.id == boat_id) {
                b.sheet_length = sheet_length.clamp(0.0, helm.max_sheet_length);
                debug!(boat_id, sheet_length = b.sheet_length, "sheet set");
            }
        }
        RegattaEvent::SetWind(new_wind) => {
            if new_wind.strength.is_nan() || !new_wind.direction_deg.is_finite() {
                warn!(
                    strength = new_wind.strength,
                    direction_deg = new_wind.direction_deg,
                    "wind change is not a number; ignored"
                );
                return;
            }
            wind.strength = new_wind.strength.clamp(0.0, helm.max_wind_strength);
            wind.direction_deg = new_wind.direction_deg;
            info!(
                strength = wind.strength,
                direction_deg = wind.direction_deg,
                "wind changed"
            );
        }
    }
}
