// Domain layer: run values and ports. Adapters implement the ports.

pub mod model;
pub mod ports;
