//! Physical constants for the simulation
//!
//! `Parameters` is built once and handed to the `Simulator`; it holds:
//! - the gravitational constant `G`,
//! - the fixed integration step (one day),
//! - the astronomical unit used for input positions and display scaling

/// Gravitational constant, SI units
pub const G: f64 = 6.67428e-11;
/// Astronomical unit, meters
pub const AU: f64 = 149.6e6 * 1000.0;
/// Display scale, pixels per meter (1 AU = 200 px)
pub const SCALE: f64 = 200.0 / AU;
/// Seconds in a day
pub const SECONDS_PER_DAY: f64 = 3600.0 * 24.0;
/// One simulated day per tick, seconds
pub const TIMESTEP: f64 = SECONDS_PER_DAY;

#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub timestep: f64, // seconds per tick
    pub au: f64, // astronomical unit
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G,
            timestep: TIMESTEP,
            au: AU,
        }
    }
}

impl Parameters {
    /// Pixels per meter, 200 px per AU
    pub fn scale(&self) -> f64 {
        200.0 / self.au
    }
}
