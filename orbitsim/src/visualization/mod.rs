pub mod projection;
pub mod orbitsim_vis2d;
