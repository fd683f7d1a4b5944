// Domain layer: input values and the ports that supply them. No I/O here.

pub mod model;
pub mod ports;
