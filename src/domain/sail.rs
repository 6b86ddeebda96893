// Sail physics: one deterministic integration step per boat per frame.

use super::angles::{angle_mod, angle_mod_raw, folded_difference, place_round};
use super::tuning::{BoatGeometry, SailTuning};
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use tracing::trace;

/// Apparent wind as felt on a moving boat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApparentWind {
    pub velocity: f64,
    pub angle: f64,
}

/// Sail angle after the sheet-trim clamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SailTrim {
    /// Boat-relative sail angle in radians.
    pub angle: f64,
    /// True when the sheet pinned the sail and it produces no drive.
    pub luffing: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SailForces {
    pub drag: f64,
    pub lift: f64,
    pub forward: f64,
    pub lateral: f64,
}

/// Values handed back to the caller after a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutput {
    /// Forward speed multiplied by `SailTuning::velocity_output_scale`.
    pub scaled_speed: f64,
    /// Boat-relative sail angle in degrees, rounded for display.
    pub sail_angle_deg: f64,
}

/// Mutable per-boat state of the integrator.
///
/// Only `main_angle` and `boat_velocity` carry over between steps; everything
/// else is refreshed on every call and kept for inspection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoatState {
    pub boat_angle: f64,
    pub main_angle: f64,
    pub boat_velocity: f64,
    pub boat_accel: f64,

    // Last position passed to `step`. Not used by the force model.
    pub x: f64,
    pub y: f64,

    pub app_velocity: f64,
    pub app_angle: f64,
    pub main_area: f64,
    pub main_attack: f64,
    pub boat_attack: f64,
    pub drag_coef: f64,
    pub lift_coef: f64,
    pub angular_velocity: f64,
    pub luffing: bool,

    pub drag_force: f64,
    pub lift_force: f64,
    pub forward_force: f64,
    pub lateral_force: f64,
    pub resistance_force: f64,
    pub resistance_accel: f64,
}

/// Sail integrator for a single boat.
#[derive(Debug, Clone, Default)]
pub struct SailPhysics {
    geometry: BoatGeometry,
    tuning: SailTuning,
    state: BoatState,
}

impl SailPhysics {
    pub fn new(geometry: BoatGeometry, tuning: SailTuning) -> Self {
        Self {
            geometry,
            tuning,
            state: BoatState::default(),
        }
    }

    pub fn state(&self) -> &BoatState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut BoatState {
        &mut self.state
    }

    pub fn geometry(&self) -> &BoatGeometry {
        &self.geometry
    }

    pub fn tuning(&self) -> &SailTuning {
        &self.tuning
    }

    /// Advances the boat by one nominal frame.
    ///
    /// `wind_speed` must be strictly positive: at zero the wind power term
    /// vanishes and the sail's angular velocity becomes 0/0. Callers add a
    /// small epsilon (see `HelmTuning::wind_speed`).
    ///
    /// `pos_x`/`pos_y` are recorded on the state but do not influence the
    /// forces yet; a position-dependent term (gusts, current) may be missing.
    pub fn step(
        &mut self,
        wind_speed: f64,
        wind_angle: f64,
        sheet_trim: f64,
        boat_heading: f64,
        pos_x: f64,
        pos_y: f64,
    ) -> StepOutput {
        debug_assert!(wind_speed > 0.0, "wind speed must be strictly positive");

        self.state.x = pos_x;
        self.state.y = pos_y;
        self.state.boat_angle = boat_heading;

        let app = apparent_wind(
            self.tuning.apparent_boat_multiplier,
            self.state.boat_velocity,
            boat_heading,
            wind_speed,
            wind_angle,
        );
        self.state.app_velocity = app.velocity;
        self.state.app_angle = app.angle;

        let trim = self.rotate_mainsail(app, sheet_trim);
        self.state.main_angle = trim.angle;
        self.state.luffing = trim.luffing;

        let forces = self.forces(app, trim.luffing);
        self.state.drag_force = forces.drag;
        self.state.lift_force = forces.lift;
        self.state.forward_force = forces.forward;
        self.state.lateral_force = forces.lateral;

        self.integrate();

        trace!(
            app_velocity = app.velocity,
            app_angle = app.angle,
            main_angle = trim.angle,
            luffing = trim.luffing,
            forward_force = forces.forward,
            boat_velocity = self.state.boat_velocity,
            "sail step"
        );

        StepOutput {
            scaled_speed: self.state.boat_velocity * self.tuning.velocity_output_scale,
            sail_angle_deg: place_round(
                self.state.main_angle.to_degrees(),
                self.tuning.output_decimals,
            ),
        }
    }

    // Swings the sail toward the apparent wind and applies the sheet clamp.
    fn rotate_mainsail(&mut self, app: ApparentWind, sheet_trim: f64) -> SailTrim {
        let boat_angle = self.state.boat_angle;
        let main_length = self.geometry.main_length;

        // World-frame sail angle.
        let main_angle = angle_mod_raw(boat_angle + self.state.main_angle + PI);
        let main_attack = folded_difference(main_angle, app.angle);
        self.state.main_attack = main_attack;
        self.state.main_area = self.geometry.main_area();

        let pressure = self.tuning.wind_pressure_coefficient * app.velocity.powi(2);
        let (drag_coef, lift_coef) =
            fluid_coefficients(main_attack, self.tuning.min_drag_coefficient);
        self.state.drag_coef = drag_coef;
        self.state.lift_coef = lift_coef;

        let torque = self.state.main_area * pressure * drag_coef * main_attack.sin() * main_length;
        let wind_power =
            0.5 * self.state.main_area * self.geometry.air_density * app.velocity.powi(3);
        // Not a physical angular velocity; the ratio is what the model was tuned on.
        let angular_velocity = torque / wind_power;
        self.state.angular_velocity = angular_velocity;

        let proposed = propose_angle(main_angle, app.angle, angular_velocity, boat_angle);
        limit_mainsail(sheet_trim, self.geometry.main_sheet_limit(), proposed)
    }

    fn forces(&mut self, app: ApparentWind, luffing: bool) -> SailForces {
        let app_from = angle_mod_raw(app.angle + PI);
        self.state.boat_attack = angle_mod(folded_difference(app_from, self.state.boat_angle));

        if luffing {
            return SailForces::default();
        }

        let dynamic = 0.5 * self.state.main_area * self.geometry.air_density * app.velocity.powi(2);
        let drag = dynamic * self.state.drag_coef;
        let lift = dynamic * self.state.lift_coef;
        let attack = self.state.boat_attack;

        SailForces {
            drag,
            lift,
            forward: lift * attack.sin() - drag * attack.cos(),
            lateral: lift * attack.cos() - drag * attack.sin(),
        }
    }

    // Fixed-rate integration with linear hull resistance.
    fn integrate(&mut self) {
        let t = &self.tuning;
        let s = &mut self.state;

        s.boat_accel = s.forward_force / t.boat_mass;
        s.boat_velocity += s.boat_accel / t.calibration_rate_hz;

        s.resistance_force = t.resistance_coefficient * s.boat_velocity;
        s.resistance_accel = s.resistance_force / t.boat_mass;
        s.boat_velocity -= s.resistance_accel / t.calibration_rate_hz;

        s.boat_velocity = s.boat_velocity.max(t.speed_floor);
    }
}

/// Composes true wind with the reversed motion of the boat.
pub fn apparent_wind(
    boat_multiplier: f64,
    boat_velocity: f64,
    boat_angle: f64,
    wind_speed: f64,
    wind_angle: f64,
) -> ApparentWind {
    let boat_speed = boat_multiplier * boat_velocity;
    let sum_sin = boat_speed * (boat_angle + PI).sin() + wind_speed * wind_angle.sin();
    let sum_cos = boat_speed * (boat_angle + PI).cos() + wind_speed * wind_angle.cos();

    ApparentWind {
        velocity: (sum_sin.powi(2) + sum_cos.powi(2)).sqrt(),
        angle: angle_mod(sum_sin.atan2(sum_cos)),
    }
}

/// Drag and lift coefficients for a folded attack angle.
///
/// Both curves are low-order polynomial fits of published mainsail data.
pub fn fluid_coefficients(attack: f64, min_drag: f64) -> (f64, f64) {
    let drag = (-0.45361 * attack.powi(2) + 1.64225 * attack - 0.27701).max(min_drag);
    let lift = 0.5626 * attack.powi(3) - 3.1881 * attack.powi(2) + 4.4150 * attack - 0.6614;
    (drag, lift)
}

// Re-expresses the world-frame sail angle relative to the hull and nudges it
// toward the apparent wind. Leaves it untouched when already aligned.
fn propose_angle(main_angle: f64, app_angle: f64, angular_velocity: f64, boat_angle: f64) -> f64 {
    if main_angle > app_angle {
        angle_mod(main_angle - boat_angle - PI) - angular_velocity
    } else if main_angle < app_angle {
        angle_mod(main_angle - boat_angle - PI) + angular_velocity
    } else {
        main_angle
    }
}

/// Clamps a proposed boat-relative sail angle to what the sheet allows.
///
/// Sheet beyond `main_sheet_limit` saturates the swing at ±90°. The proposal
/// is reduced into `[0, 2π)` and its folded attack off the centreline is
/// compared with the limit; a sail outside `[-limit, limit]` is pinned to the
/// side it swung toward and luffs. Dead astern (exactly π) pins to `+limit`.
pub fn limit_mainsail(sheet_trim: f64, main_sheet_limit: f64, proposed: f64) -> SailTrim {
    // NaN sheet counts as fully hauled in.
    let sheet = sheet_trim.max(0.0).min(main_sheet_limit);
    let limit = (sheet / main_sheet_limit) * FRAC_PI_2;
    let angle = angle_mod(proposed);
    let attack = angle.min(TAU - angle);

    if attack > limit {
        SailTrim {
            angle: if angle <= PI { limit } else { TAU - limit },
            luffing: true,
        }
    } else {
        SailTrim {
            angle,
            luffing: false,
        }
    }
}
