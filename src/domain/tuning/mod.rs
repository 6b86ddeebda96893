// Gameplay tuning: physical constants and calibration values for boats.
//
// Keep these separate from runtime configuration (tick rates, channel sizes).

pub mod boat;
pub mod helm;
pub mod sail;

pub use boat::BoatGeometry;
pub use helm::HelmTuning;
pub use sail::SailTuning;
