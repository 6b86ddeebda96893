// Domain layer: sail physics, boat state and the rules that move boats.

pub mod angles;
pub mod sail;
pub mod state;
pub mod systems;
pub mod tuning;

pub use sail::{BoatState, SailPhysics, StepOutput};
pub use state::{BoatSnapshot, HelmInput, SimBoat, Wind};
