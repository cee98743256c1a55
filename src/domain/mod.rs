// Domain layer: content models and the two ports the renderers depend on.

pub mod model;
pub mod ports;
