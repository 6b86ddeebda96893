/// Fixed hull and mainsail dimensions for a boat.
///
/// Units are game pixels; roughly 1px is 1.5 ft on a small keelboat.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoatGeometry {
    /// Hull width in pixels.
    pub boat_width: f64,

    /// Hull length in pixels.
    pub boat_length: f64,

    /// Length of the mainsail boom in pixels.
    pub main_length: f64,

    /// Sea-level air density used by the force model.
    pub air_density: f64,
}

impl BoatGeometry {
    /// Longest sheet that still lets the boom reach 90 degrees.
    pub fn main_sheet_limit(&self) -> f64 {
        self.main_length * std::f64::consts::SQRT_2
    }

    /// Triangular mainsail area.
    pub fn main_area(&self) -> f64 {
        self.main_length.powi(2) / 2.0
    }
}

impl Default for BoatGeometry {
    fn default() -> Self {
        Self {
            boat_width: 12.0,
            boat_length: 36.0,
            main_length: 36.0,
            air_density: 0.0765,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_geometry_is_stable_across_calls() {
        let geometry = BoatGeometry::default();
        let first = (geometry.main_area(), geometry.main_sheet_limit());
        for _ in 0..1000 {
            let again = (geometry.main_area(), geometry.main_sheet_limit());
            assert_eq!(first.0.to_bits(), again.0.to_bits());
            assert_eq!(first.1.to_bits(), again.1.to_bits());
        }
        assert_eq!(first.0, 648.0);
        assert!((first.1 - 50.911688245431421).abs() < 1e-12);
    }
}
