//! Build fully-initialized simulators from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) or the built-in solar system and
//! produces a runtime `Simulator` bundle containing:
//! - engine settings (`Engine`)
//! - physical constants (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`ForceSet`)
//!
//! The simulator is inserted into Bevy as a `Resource` and stepped once per
//! fixed tick by the viewer, or looped directly in headless runs

use std::num::NonZeroUsize;

use anyhow::{ensure, Context, Result};
use bevy::prelude::Resource;

use crate::configuration::config::{BodyConfig, IntegratorConfig, ScenarioConfig, ViewportConfig};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{ForceSet, NewtonianGravity};
use crate::simulation::integrator::{euler_sequential, euler_simultaneous};
use crate::simulation::params::{Parameters, AU};
use crate::simulation::states::{Body, BodyColor, NVec2, System};
use crate::visualization::projection::Viewport;

/// Bevy resource representing a fully-initialized simulation
///
/// This is the main "runtime bundle": it contains the engine settings,
/// constants, current system state and the force terms. The driver calls
/// [`Simulator::step`] once per tick and otherwise only reads `system`.
#[derive(Resource)]
pub struct Simulator {
    pub engine: Engine,
    pub parameters: Parameters,
    pub viewport: Viewport,
    pub system: System,
    pub forces: ForceSet,
}

impl Simulator {
    /// Simulator over `bodies` with Newtonian gravity and the given settings.
    /// Each body's path is reset to honor the engine's trail limit.
    pub fn new(bodies: Vec<Body>, anchor: Option<usize>, engine: Engine, parameters: Parameters) -> Self {
        let bodies = bodies
            .into_iter()
            .map(|b| b.with_trail_limit(engine.trail_limit))
            .collect();

        let forces = ForceSet::new().with(NewtonianGravity {
            G: parameters.G,
        });

        Self {
            engine,
            parameters,
            viewport: Viewport::default(),
            system: System::new(bodies, anchor),
            forces,
        }
    }

    /// Replace the force terms, mostly useful to inspect the stepping loop
    pub fn with_forces(mut self, forces: ForceSet) -> Self {
        self.forces = forces;
        self
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Advance every body by exactly one time step
    pub fn step(&mut self) {
        match self.engine.integrator {
            IntegratorConfig::Sequential => euler_sequential(&mut self.system, &self.forces, &self.parameters),
            IntegratorConfig::Simultaneous => euler_simultaneous(&mut self.system, &self.forces, &self.parameters),
        }

        if log::log_enabled!(log::Level::Trace) {
            for b in &self.system.bodies {
                log::trace!(
                    "step {}: {} at ({:.4}, {:.4}) AU, {:.4} AU from anchor",
                    self.system.steps,
                    b.name,
                    b.x.x / self.parameters.au,
                    b.x.y / self.parameters.au,
                    b.distance_to_anchor / self.parameters.au,
                );
            }
        }
    }

    /// Step `steps` times in a row
    pub fn run(&mut self, steps: u64) {
        for _ in 0..steps {
            self.step();
        }
        log::debug!("ran {} steps, t = {} s", steps, self.system.t);
    }

    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    /// Build a simulator from a parsed scenario, validating it first
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        ensure!(p_cfg.timestep.is_finite() && p_cfg.timestep > 0.0, "timestep must be positive, got {}", p_cfg.timestep);
        ensure!(p_cfg.au.is_finite() && p_cfg.au > 0.0, "au must be positive, got {}", p_cfg.au);
        ensure!(p_cfg.G.is_finite(), "G must be finite");
        let parameters = Parameters {
            G: p_cfg.G,
            timestep: p_cfg.timestep,
            au: p_cfg.au,
        };

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let trail_limit = e_cfg
            .trail_limit
            .map(|n| NonZeroUsize::new(n).context("trail_limit must be at least 1"))
            .transpose()?;
        let engine = Engine {
            integrator: e_cfg.integrator,
            trail_limit,
        };

        let viewport = viewport_from(&cfg.viewport)?;

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let mut anchor = None;
        let mut bodies = Vec::with_capacity(cfg.bodies.len());
        for (i, bc) in cfg.bodies.iter().enumerate() {
            bodies.push(body_from(i, bc, parameters.au)?);
            if bc.anchor {
                ensure!(anchor.is_none(), "more than one anchor body (bodies {} and {})", anchor.unwrap_or(0), i);
                anchor = Some(i);
            }
        }

        log::info!(
            "built scenario: {} bodies, anchor {:?}, {:?} integrator, dt = {} s",
            bodies.len(),
            anchor.map(|i| bodies[i].name.clone()),
            engine.integrator,
            parameters.timestep,
        );

        Ok(Self::new(bodies, anchor, engine, parameters).with_viewport(viewport))
    }

    /// The Sun and the five inner planets with their literal initial states
    pub fn solar_system() -> Self {
        let bodies = vec![
            Body::new("Sun", NVec2::zeros(), NVec2::zeros(), 1.98892e30, 30.0, BodyColor::YELLOW),
            Body::new("Earth", NVec2::new(-1.0 * AU, 0.0), NVec2::new(0.0, 29.783 * 1000.0), 5.9742e24, 16.0, BodyColor::BLUE),
            Body::new("Mars", NVec2::new(-1.524 * AU, 0.0), NVec2::new(0.0, 24.077 * 1000.0), 6.39e23, 12.0, BodyColor::RED),
            Body::new("Mercury", NVec2::new(0.387 * AU, 0.0), NVec2::new(0.0, -47.4 * 1000.0), 0.330e24, 8.0, BodyColor::DARK_GREY),
            Body::new("Venus", NVec2::new(0.723 * AU, 0.0), NVec2::new(0.0, -35.02 * 1000.0), 4.8685e24, 14.0, BodyColor::YELLOWISH_WHITE),
            Body::new("Jupiter", NVec2::new(-2.120 * AU, 0.0), NVec2::new(0.0, 13.06 * 1000.0), 1.898e27, 18.0, BodyColor::YELLOWISH),
        ];

        Self::new(bodies, Some(0), Engine::default(), Parameters::default())
    }
}

fn body_from(i: usize, bc: &BodyConfig, au: f64) -> Result<Body> {
    let name = bc.name.clone().unwrap_or_else(|| format!("body{i}"));
    ensure!(bc.x_au.len() == 2, "{name}: x_au needs 2 components, got {}", bc.x_au.len());
    ensure!(bc.v.len() == 2, "{name}: v needs 2 components, got {}", bc.v.len());
    ensure!(bc.m.is_finite() && bc.m > 0.0, "{name}: mass must be positive, got {}", bc.m);

    Ok(Body::new(
        name,
        NVec2::new(bc.x_au[0] * au, bc.x_au[1] * au),
        NVec2::new(bc.v[0], bc.v[1]),
        bc.m,
        bc.radius,
        BodyColor(bc.color),
    ))
}

fn viewport_from(cfg: &ViewportConfig) -> Result<Viewport> {
    ensure!(cfg.width > 0.0 && cfg.height > 0.0, "viewport must have a positive size");
    Ok(Viewport::new(cfg.width, cfg.height))
}
