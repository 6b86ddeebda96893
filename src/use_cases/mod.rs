// Use cases layer: application workflows around the sail simulation.

pub mod regatta;
pub mod types;

pub use regatta::{RegattaSettings, world_task};
pub use types::{RegattaEvent, WorldUpdate};
