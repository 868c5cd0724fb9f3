// Domain layer: form and page models plus the ports the scripts talk through.

pub mod model;
pub mod ports;
