// Angle helpers shared by the sail integrator.
//
// Two normalisers exist on purpose: the integrator uses the positive form for
// sail and apparent-wind angles and the raw remainder where the sign of the
// input has to survive.

use std::f64::consts::{PI, TAU};

/// Reduces `angle` into `[0, 2π)`.
pub fn angle_mod(angle: f64) -> f64 {
    let mut reduced = angle % TAU;
    while reduced < 0.0 {
        reduced += TAU;
    }
    // A tiny negative remainder rounds up to exactly 2π when shifted.
    if reduced >= TAU { 0.0 } else { reduced }
}

/// Truncated remainder modulo 2π. Keeps the sign of `angle`, so the result lies
/// in `(-2π, 2π)`.
pub fn angle_mod_raw(angle: f64) -> f64 {
    angle % TAU
}

/// Unsigned difference between two angles, folded into `[0, π]` by reflecting
/// across π. Only meaningful when both inputs are already reduced.
pub fn folded_difference(a: f64, b: f64) -> f64 {
    let diff = a.max(b) - a.min(b);
    if diff > PI { TAU - diff } else { diff }
}

/// Rounds to `digits` decimal places, ties to even.
pub fn place_round(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round_ties_even() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [f64; 12] = [
        0.0, 1.0, -1.0, PI, -PI, TAU, -TAU, 7.5, -7.5, 123.456, -98765.4321, 1e-20,
    ];

    #[test]
    fn positive_form_stays_in_range() {
        for a in SAMPLES.iter().copied().chain([-1e-20, -1e-300]) {
            let r = angle_mod(a);
            assert!((0.0..TAU).contains(&r), "angle_mod({a}) = {r}");
        }
    }

    #[test]
    fn positive_form_is_idempotent() {
        for a in SAMPLES {
            let once = angle_mod(a);
            assert_eq!(angle_mod(once), once);
        }
    }

    #[test]
    fn raw_form_keeps_sign_and_congruence() {
        for a in SAMPLES {
            let r = angle_mod_raw(a);
            assert!(r > -TAU && r < TAU);
            assert!(r == 0.0 || r.signum() == a.signum());
            let turns = (a - r) / TAU;
            assert!((turns - turns.round()).abs() < 1e-9, "{a} vs {r}");
        }
    }

    #[test]
    fn raw_form_differs_from_positive_form_for_negatives() {
        assert!(angle_mod_raw(-1.0) < 0.0);
        assert!((angle_mod(-1.0) - (TAU - 1.0)).abs() < 1e-12);
    }

    #[test]
    fn folded_difference_reflects_across_pi() {
        assert!((folded_difference(0.1, 6.2) - (TAU - 6.1)).abs() < 1e-12);
        assert!((folded_difference(1.0, 2.0) - 1.0).abs() < 1e-12);
        assert_eq!(folded_difference(PI, 0.0), PI);
    }

    #[test]
    fn place_round_two_digits() {
        assert_eq!(place_round(12.3456, 2), 12.35);
        assert_eq!(place_round(-0.004, 2), 0.0);
        assert_eq!(place_round(359.999, 2), 360.0);
    }

    #[test]
    fn place_round_ties_go_to_even() {
        // Each of these scales to an exact .5 in binary.
        assert_eq!(place_round(0.125, 2), 0.12);
        assert_eq!(place_round(0.375, 2), 0.38);
        assert_eq!(place_round(-0.125, 2), -0.12);
        assert_eq!(place_round(2.5, 0), 2.0);
    }
}
