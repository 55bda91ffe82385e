// Domain layer: the optional text value and the drill port. std only.

pub mod model;
pub mod ports;
