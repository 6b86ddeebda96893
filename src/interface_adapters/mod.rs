// Interface adapters: telemetry format and serialization tasks.

pub mod protocol;
pub mod telemetry;
