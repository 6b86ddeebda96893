use crate::domain::state::{SimBoat, Wind};
use crate::domain::tuning::HelmTuning;

pub fn tick_boat(b: &mut SimBoat, wind: Wind, dt: f64, cfg: &HelmTuning) {
    // sail physics (heading 0 = up / +Y, clockwise positive)
    let heading_rad = b.heading_deg.to_radians();
    let out = b.sail.step(
        cfg.wind_speed(wind.strength),
        wind.direction_deg.to_radians(),
        b.sheet_length,
        heading_rad,
        b.x,
        b.y,
    );
    b.sail_angle_deg = out.sail_angle_deg;

    // velocity = forward * scaled speed * dt, capped
    let mut vx = heading_rad.sin() * out.scaled_speed * dt;
    let mut vy = heading_rad.cos() * out.scaled_speed * dt;
    let speed_sq = vx * vx + vy * vy;
    if speed_sq > cfg.max_velocity * cfg.max_velocity {
        let scale = cfg.max_velocity / speed_sq.sqrt();
        vx *= scale;
        vy *= scale;
    }
    b.vx = vx;
    b.vy = vy;

    // rudder
    if b.last_input.turn != 0.0 {
        b.heading_deg = wrap_degrees(b.heading_deg + b.last_input.turn * cfg.turn_rate_deg * dt);
    }

    // main sheet
    if b.last_input.trim != 0.0 {
        b.sheet_length = (b.sheet_length + b.last_input.trim * cfg.sheet_rate * dt)
            .clamp(0.0, cfg.max_sheet_length);
    }

    // position integrate
    b.x += b.vx * dt;
    b.y += b.vy * dt;

    wrap_boat(b, cfg);
}

fn wrap_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

// Teleports to the opposite edge once the hull has fully left the screen.
fn wrap_boat(b: &mut SimBoat, cfg: &HelmTuning) {
    let r = cfg.boat_radius;

    if b.x - r > cfg.screen_half_width {
        b.x = -cfg.screen_half_width;
    } else if b.x + r < -cfg.screen_half_width {
        b.x = cfg.screen_half_width;
    }

    if b.y - r > cfg.screen_half_height {
        b.y = -cfg.screen_half_height;
    } else if b.y + r < -cfg.screen_half_height {
        b.y = cfg.screen_half_height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::state::HelmInput;

    const DT: f64 = 1.0 / 60.0;

    fn calm() -> Wind {
        Wind {
            strength: 0.0,
            direction_deg: 0.0,
        }
    }

    #[test]
    fn velocity_is_capped() {
        let cfg = HelmTuning::default();
        let mut b = SimBoat::new(1, 0.0, 0.0, 10.0);
        b.heading_deg = 30.0;
        b.sail.state_mut().boat_velocity = 1.0;

        tick_boat(&mut b, calm(), DT, &cfg);

        assert!((b.speed() - cfg.max_velocity).abs() < 1e-9);
        assert!(b.vx > 0.0 && b.vy > 0.0);
    }

    #[test]
    fn rudder_wraps_heading() {
        let cfg = HelmTuning::default();
        let mut b = SimBoat::new(1, 0.0, 0.0, 10.0);
        b.heading_deg = 350.0;
        b.last_input = HelmInput {
            turn: 1.0,
            trim: 0.0,
        };

        tick_boat(&mut b, calm(), 20.0 / 360.0, &cfg);
        assert!((b.heading_deg - 10.0).abs() < 1e-9);

        b.last_input.turn = -1.0;
        tick_boat(&mut b, calm(), 30.0 / 360.0, &cfg);
        assert!((b.heading_deg - 340.0).abs() < 1e-9);
    }

    #[test]
    fn sheet_stays_on_slider() {
        let cfg = HelmTuning::default();
        let mut b = SimBoat::new(1, 0.0, 0.0, 1.0);
        b.last_input.trim = -1.0;
        tick_boat(&mut b, calm(), 1.0, &cfg);
        assert_eq!(b.sheet_length, 0.0);

        b.last_input.trim = 1.0;
        for _ in 0..20 {
            tick_boat(&mut b, calm(), 1.0, &cfg);
        }
        assert_eq!(b.sheet_length, cfg.max_sheet_length);
    }

    #[test]
    fn wraps_only_after_leaving_screen() {
        let cfg = HelmTuning::default();
        let mut b = SimBoat::new(1, 21.4, -16.4, 10.0);
        wrap_boat(&mut b, &cfg);
        assert_eq!((b.x, b.y), (21.4, -16.4));

        b.x = 21.6;
        b.y = -16.6;
        wrap_boat(&mut b, &cfg);
        assert_eq!((b.x, b.y), (-20.0, 15.0));

        b.x = -21.6;
        b.y = 16.6;
        wrap_boat(&mut b, &cfg);
        assert_eq!((b.x, b.y), (20.0, -15.0));
    }

    #[test]
    fn sail_angle_is_published_for_display() {
        let cfg = HelmTuning::default();
        let mut b = SimBoat::new(1, 0.0, 0.0, 10.0);
        let mut reference = b.sail.clone();
        let wind = Wind {
            strength: 50.0,
            direction_deg: 90.0,
        };

        tick_boat(&mut b, wind, DT, &cfg);
        let out = reference.step(cfg.wind_speed(50.0), 90f64.to_radians(), 10.0, 0.0, 0.0, 0.0);

        assert_eq!(b.sail_angle_deg, out.sail_angle_deg);
        assert_eq!(b.sail.state().boat_velocity, reference.state().boat_velocity);
    }

    #[test]
    fn pinned_sail_leaves_boat_in_place() {
        let cfg = HelmTuning::default();
        let mut b = SimBoat::new(7, 2.0, -3.0, 0.0);
        let wind = Wind {
            strength: 60.0,
            direction_deg: 90.0,
        };
        for _ in 0..120 {
            tick_boat(&mut b, wind, DT, &cfg);
        }
        assert_eq!((b.x, b.y), (2.0, -3.0));
        assert!(b.sail.state().luffing);
    }
}
