//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – integrator choice and trail cap
//! - [`ParametersConfig`] – physical constants
//! - [`ViewportConfig`]   – window size for the viewer
//! - [`BodyConfig`]       – initial state and appearance of each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every section but `bodies` may be omitted, in which case the defaults
//! (sequential euler, unbounded trails, SI constants, one-day step, 900x900
//! window) apply.
//!
//! # YAML format
//! An example two-body scenario matching these types:
//!
//! ```yaml
//! engine:
//!   integrator: "sequential"  # or "simultaneous"
//!   trail_limit: 2000         # optional cap on stored path points
//!
//! parameters:
//!   G: 6.67428e-11            # gravitational constant
//!   timestep: 86400.0         # seconds per tick
//!   au: 1.496e11              # meters per AU
//!
//! bodies:
//!   - name: "Sun"
//!     x_au: [ 0.0, 0.0 ]      # position in AU
//!     v: [ 0.0, 0.0 ]         # velocity in m/s
//!     m: 1.98892e30           # kg
//!     radius: 30.0            # marker size in pixels
//!     color: [ 255, 255, 0 ]
//!     anchor: true
//!   - name: "Earth"
//!     x_au: [ -1.0, 0.0 ]
//!     v: [ 0.0, 29783.0 ]
//!     m: 5.9742e24
//!     radius: 16.0
//!     color: [ 100, 149, 237 ]
//! ```
//!
//! The engine maps this configuration into its runtime `Simulator`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::simulation::params::{AU, G, TIMESTEP};

/// Which integrator the engine steps with
/// `integrator: "sequential"` or `integrator: "simultaneous"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegratorConfig {
    #[serde(rename = "sequential")] // In-place euler, later bodies see earlier bodies' new positions
    #[default]
    Sequential,

    #[serde(rename = "simultaneous")] // Euler with all forces taken from one pre-step snapshot
    Simultaneous,
}

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub integrator: IntegratorConfig, // Time integrator used for advancing the system state
    #[serde(default)]
    pub trail_limit: Option<usize>, // Maximum number of path points kept per body
}

/// Physical constants for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(default = "default_g")]
    pub G: f64,        // gravitational constant
    #[serde(default = "default_timestep")]
    pub timestep: f64, // seconds per tick
    #[serde(default = "default_au")]
    pub au: f64,       // meters per astronomical unit
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            G: default_g(),
            timestep: default_timestep(),
            au: default_au(),
        }
    }
}

fn default_g() -> f64 { G }
fn default_timestep() -> f64 { TIMESTEP }
fn default_au() -> f64 { AU }

/// Window size in pixels, the projection centers on its midpoint
#[derive(Deserialize, Debug, Clone)]
pub struct ViewportConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 900.0,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    #[serde(default)]
    pub name: Option<String>, // Label used in logs
    pub x_au: Vec<f64>,  // Initial position in AU
    pub v: Vec<f64>,     // Initial velocity in m/s
    pub m: f64,          // Mass in kg
    pub radius: f64,     // Marker radius in pixels
    #[serde(default = "default_color")]
    pub color: [u8; 3],  // Marker and trail color
    #[serde(default)]
    pub anchor: bool,    // Other bodies track their distance to this one
}

fn default_color() -> [u8; 3] { [255, 255, 255] }

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig, // Integrator and trail settings
    #[serde(default)]
    pub parameters: ParametersConfig, // Physical constants
    #[serde(default)]
    pub viewport: ViewportConfig, // Viewer window size
    pub bodies: Vec<BodyConfig>, // Bodies in update order
}

impl ScenarioConfig {
    /// Parse a scenario from YAML text
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let cfg = serde_yaml::from_str(text).context("invalid scenario YAML")?;
        Ok(cfg)
    }

    /// Load a scenario from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open scenario {}", path.display()))?;
        let reader = BufReader::new(file);
        let cfg = serde_yaml::from_reader(reader)
            .with_context(|| format!("invalid scenario YAML in {}", path.display()))?;
        Ok(cfg)
    }
}
