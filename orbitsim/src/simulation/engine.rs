//! High-level runtime engine settings
//!
//! Selects the integrator and the trail cap used when building and running
//! a `Simulator`

use std::num::NonZeroUsize;

use crate::configuration::config::IntegratorConfig;

#[derive(Debug, Clone, Default)]
pub struct Engine {
    pub integrator: IntegratorConfig, // sequential or simultaneous euler
    pub trail_limit: Option<NonZeroUsize>, // None = keep every point
}
