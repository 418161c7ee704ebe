pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::states::{Attraction, Body, BodyColor, NVec2, Path, System};
pub use simulation::params::{Parameters, AU, G, SCALE, SECONDS_PER_DAY, TIMESTEP};
pub use simulation::engine::Engine;
pub use simulation::forces::{ForceLaw, ForceSet, NewtonianGravity};
pub use simulation::integrator::{euler_sequential, euler_simultaneous};
pub use simulation::scenario::Simulator;

pub use configuration::config::{IntegratorConfig, EngineConfig, ParametersConfig, ViewportConfig, BodyConfig, ScenarioConfig};

pub use visualization::{projection::Viewport, orbitsim_vis2d::run_2d};
