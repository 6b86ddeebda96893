// Per-tick rules applied to simulated boats.

pub mod boat_movement;
