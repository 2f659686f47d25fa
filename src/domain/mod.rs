// Domain layer: probe definitions, results and ports. No HTTP client types here.

pub mod model;
pub mod ports;
