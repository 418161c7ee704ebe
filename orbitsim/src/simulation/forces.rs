//! Force contributors for the orbit engine
//!
//! Defines the pairwise force trait and the direct Newtonian gravity term
//! used by every scenario

use crate::simulation::states::{Attraction, Body, NVec2};

/// Collection of pairwise force terms (gravity, test recorders, etc.)
/// Each term implements [`ForceLaw`] and their contributions are summed
/// into a single force vector per pair
pub struct ForceSet {
    terms: Vec<Box<dyn ForceLaw + Send + Sync>>,
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: ForceLaw + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Number of registered force terms
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Total force on `body` by `other` summed over all terms, plus their separation.
    /// The separation comes from the first term; an empty set measures it directly
    pub fn attraction(&self, body: &Body, other: &Body) -> Attraction {
        let mut contributions = self.terms.iter().map(|term| term.attraction(body, other));
        let Some(first) = contributions.next() else {
            return Attraction {
                force: NVec2::zeros(),
                distance: body.distance_to(other),
            };
        };

        contributions.fold(first, |acc, a| Attraction {
            force: acc.force + a.force,
            distance: acc.distance,
        })
    }
}

/// Trait for pairwise force sources
/// Implementations return the force exerted on `body` by `other` and the
/// separation they measured
pub trait ForceLaw {
    fn attraction(&self, body: &Body, other: &Body) -> Attraction;
}

/// Unsoftened Newtonian gravity
/// Coincident bodies produce a non-finite force, nothing clamps the separation
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl ForceLaw for NewtonianGravity {
    fn attraction(&self, body: &Body, other: &Body) -> Attraction {
        body.compute_attraction(other, self.G)
    }
}
