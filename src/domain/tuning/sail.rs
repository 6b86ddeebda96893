/// Calibration constants for the sail integrator.
///
/// These numbers are tuned together with the helm and display code; changing
/// the units here changes how fast every boat moves on screen.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SailTuning {
    /// Boat mass (a J/24-sized hull).
    pub boat_mass: f64,

    /// Linear hull resistance per unit of velocity.
    pub resistance_coefficient: f64,

    /// Nominal integration rate. Independent of the caller's real frame time.
    pub calibration_rate_hz: f64,

    /// Multiplier applied to the forward speed handed back to callers.
    pub velocity_output_scale: f64,

    /// Weight of the boat's own motion when composing apparent wind.
    pub apparent_boat_multiplier: f64,

    /// Lowest allowed (unscaled) forward speed.
    pub speed_floor: f64,

    /// Pressure per squared unit of apparent wind speed.
    pub wind_pressure_coefficient: f64,

    /// Lower bound for the drag coefficient curve.
    pub min_drag_coefficient: f64,

    /// Decimal places of the sail angle returned in degrees.
    pub output_decimals: i32,
}

impl Default for SailTuning {
    fn default() -> Self {
        Self {
            boat_mass: 2000.0,
            resistance_coefficient: 300.0,
            calibration_rate_hz: 60.0,
            velocity_output_scale: 10_000_000.0,
            apparent_boat_multiplier: 5.0,
            speed_floor: -0.03,
            wind_pressure_coefficient: 0.00256,
            min_drag_coefficient: 0.16,
            output_decimals: 2,
        }
    }
}
