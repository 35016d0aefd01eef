// Domain layer: dataset models, chart data and ports. Only std/serde here.

pub mod model;
pub mod ports;
