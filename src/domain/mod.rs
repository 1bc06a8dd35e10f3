// Domain layer: models, tag enums and ports (interfaces). No I/O here.

pub mod model;
pub mod ports;
pub mod tags;
