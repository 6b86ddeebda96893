/// Tuning for the helm: how UI controls map onto the sail integrator and how
/// the integrator's output moves a boat around the screen.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelmTuning {
    /// Rudder turn rate in degrees per second.
    pub turn_rate_deg: f64,

    /// How fast the main sheet is eased or hauled, in sheet units per second.
    pub sheet_rate: f64,

    /// Maximum on-screen velocity in units per second.
    pub max_velocity: f64,

    /// Divisor turning the wind-strength slider into integrator wind speed.
    pub wind_scale: f64,

    /// Added to the wind strength so the integrator never sees zero wind.
    pub wind_epsilon: f64,

    /// Upper bound of the wind-strength slider (lower bound is zero).
    pub max_wind_strength: f64,

    /// Upper bound of the main-sheet slider (lower bound is zero).
    pub max_sheet_length: f64,

    /// Screen spans -half_width..half_width on X.
    pub screen_half_width: f64,

    /// Screen spans -half_height..half_height on Y.
    pub screen_half_height: f64,

    /// Boat sprite radius used for wraparound.
    pub boat_radius: f64,

    /// Slider defaults for a fresh session.
    pub default_wind_strength: f64,
    pub default_sheet_length: f64,
}

impl HelmTuning {
    /// Integrator wind speed for a slider value. Always strictly positive; NaN
    /// counts as calm.
    pub fn wind_speed(&self, strength: f64) -> f64 {
        let strength = if strength.is_nan() { 0.0 } else { strength };
        (strength.clamp(0.0, self.max_wind_strength) + self.wind_epsilon) / self.wind_scale
    }
}

impl Default for HelmTuning {
    fn default() -> Self {
        Self {
            turn_rate_deg: 360.0,
            sheet_rate: 10.0,
            max_velocity: 10.0,
            wind_scale: 1000.0,
            wind_epsilon: 0.000001,
            max_wind_strength: 100.0,
            max_sheet_length: 100.0,
            screen_half_width: 20.0,
            screen_half_height: 15.0,
            boat_radius: 1.5,
            default_wind_strength: 12.0,
            default_sheet_length: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wind_speed_is_strictly_positive_across_slider() {
        let tuning = HelmTuning::default();
        for step in 0..=100 {
            assert!(tuning.wind_speed(step as f64) > 0.0);
        }
        assert!(tuning.wind_speed(-5.0) > 0.0);
        assert!(tuning.wind_speed(f64::NAN) > 0.0);
        assert_eq!(tuning.wind_speed(f64::INFINITY), tuning.wind_speed(100.0));
        assert!((tuning.wind_speed(12.0) - 0.012000001).abs() < 1e-15);
    }
}
