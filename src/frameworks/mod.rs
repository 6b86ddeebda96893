// Frameworks layer: process bootstrap, configuration and runtime wiring.

pub mod config;
pub mod runner;
