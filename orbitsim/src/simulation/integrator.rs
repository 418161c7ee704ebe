//! Fixed-step time integrators for the orbit system
//!
//! Provides an in-place sequential Euler step and a snapshot-based
//! simultaneous Euler step, both driven by `ForceSet` and `Parameters`.
//! Each integrates velocity first and then moves the body with the new
//! velocity.

use super::states::{System, NVec2};
use super::forces::ForceSet;
use super::params::Parameters;

/// Advance the system by one step, updating bodies one after another in place.
///
/// Body `i` is evaluated against the *current* state of every other body, so
/// bodies earlier in the vector have already moved this tick while later ones
/// have not. Forces on body `i` never include body `i` itself.
pub fn euler_sequential(sys: &mut System, forces: &ForceSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    let dt = params.timestep;

    for i in 0..n {
        let mut total = NVec2::zeros();
        let mut anchor_distance = None;

        for j in 0..n {
            if i == j {
                continue;
            }
            let attraction = forces.attraction(&sys.bodies[i], &sys.bodies[j]);
            if sys.is_anchor(j) {
                anchor_distance = Some(attraction.distance);
            }
            total += attraction.force;
        }

        let b = &mut sys.bodies[i];
        if let Some(d) = anchor_distance {
            b.observe_anchor(d);
        }

        // a = F / m
        let a = total / b.m();
        b.v += a * dt;
        // x_n+1 = x_n + v_n+1 dt
        b.x += b.v * dt;
        b.path.push(b.x);
    }

    sys.t += dt;
    sys.steps += 1;
}

/// Advance the system by one step with every force taken from the same
/// snapshot of pre-step positions.
///
/// Physically symmetric, but diverges numerically from [`euler_sequential`].
pub fn euler_simultaneous(sys: &mut System, forces: &ForceSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    let dt = params.timestep;

    // Forces and anchor distances for every body from the untouched state
    let mut totals = vec![NVec2::zeros(); n];
    let mut anchor_distances = vec![None; n];
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let attraction = forces.attraction(&sys.bodies[i], &sys.bodies[j]);
            if sys.is_anchor(j) {
                anchor_distances[i] = Some(attraction.distance);
            }
            totals[i] += attraction.force;
        }
    }

    for ((b, total), anchor_distance) in sys.bodies.iter_mut().zip(totals.iter()).zip(anchor_distances) {
        if let Some(d) = anchor_distance {
            b.observe_anchor(d);
        }
        let a = *total / b.m();
        b.v += a * dt;
        b.x += b.v * dt;
        b.path.push(b.x);
    }

    sys.t += dt;
    sys.steps += 1;
}
