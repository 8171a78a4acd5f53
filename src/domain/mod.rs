// Domain layer: the values passed between stages and the ports each stage implements.

pub mod model;
pub mod ports;
