//! Core state types for the orbit simulation.
//!
//! Defines the 2D body/system structs:
//! - `Body`   one point mass with its recorded `Path`
//! - `System` the ordered collection of bodies, the anchor index and the clock
//!
//! Positions are in meters, velocities in m/s, masses in kg.

use std::collections::VecDeque;
use std::num::NonZeroUsize;

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Opaque appearance token carried for the renderer, never read by the physics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BodyColor(pub [u8; 3]);

impl BodyColor {
    pub const WHITE: Self = Self([255, 255, 255]);
    pub const YELLOW: Self = Self([255, 255, 0]);
    pub const BLUE: Self = Self([100, 149, 237]);
    pub const RED: Self = Self([188, 39, 50]);
    pub const DARK_GREY: Self = Self([144, 143, 143]);
    pub const YELLOWISH_WHITE: Self = Self([240, 172, 15]);
    pub const YELLOWISH: Self = Self([242, 220, 160]);
}

/// Result of one pairwise force evaluation
#[derive(Debug, Clone, Copy)]
pub struct Attraction {
    pub force: NVec2, // force on `self` by `other`, newtons
    pub distance: f64, // separation, meters
}

/// Chronological history of a body's positions.
///
/// Unbounded unless built with a limit; when limited, the oldest point is
/// dropped before a new one is appended.
#[derive(Debug, Clone, Default)]
pub struct Path {
    points: VecDeque<NVec2>,
    limit: Option<NonZeroUsize>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: Option<NonZeroUsize>) -> Self {
        Self {
            points: VecDeque::new(),
            limit,
        }
    }

    pub fn push(&mut self, point: NVec2) {
        if let Some(limit) = self.limit {
            while self.points.len() >= limit.get() {
                self.points.pop_front();
            }
        }
        self.points.push_back(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit.map(NonZeroUsize::get)
    }

    pub fn last(&self) -> Option<&NVec2> {
        self.points.back()
    }

    pub fn get(&self, i: usize) -> Option<&NVec2> {
        self.points.get(i)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NVec2> + '_ {
        self.points.iter()
    }

    /// A trail is only drawn once it holds more than two points
    pub fn is_drawable(&self) -> bool {
        self.points.len() > 2
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    m: f64, // mass, fixed at construction
    pub radius: f64, // marker size in pixels, not physical
    pub color: BodyColor,
    pub distance_to_anchor: f64, // last observed distance to the anchor
    pub path: Path,
}

impl Body {
    pub fn new(name: impl Into<String>, x: NVec2, v: NVec2, m: f64, radius: f64, color: BodyColor) -> Self {
        Self {
            name: name.into(),
            x,
            v,
            m,
            radius,
            color,
            distance_to_anchor: 0.0,
            path: Path::new(),
        }
    }

    pub fn with_trail_limit(mut self, limit: Option<NonZeroUsize>) -> Self {
        self.path = Path::with_limit(limit);
        self
    }

    pub fn m(&self) -> f64 {
        self.m
    }

    /// Gravitational force exerted on `self` by `other`.
    ///
    /// The magnitude is split into components through `atan2`/`cos`/`sin`,
    /// not `F * r / d`; the two differ in the last bits.
    /// Coincident bodies give `d = 0` and a non-finite force; this is not
    /// guarded, callers must skip self-pairs.
    pub fn compute_attraction(&self, other: &Body, g: f64) -> Attraction {
        let dx = other.x.x - self.x.x;
        let dy = other.x.y - self.x.y;
        let distance = (dx * dx + dy * dy).sqrt();

        let f = g * self.m * other.m / (distance * distance);
        let theta = dy.atan2(dx);

        Attraction {
            force: NVec2::new(f * theta.cos(), f * theta.sin()),
            distance,
        }
    }

    /// Record the distance to the anchor seen during a force evaluation
    pub fn observe_anchor(&mut self, distance: f64) {
        self.distance_to_anchor = distance;
    }

    /// Euclidean distance between the two bodies' current positions
    pub fn distance_to(&self, other: &Body) -> f64 {
        let dx = other.x.x - self.x.x;
        let dy = other.x.y - self.x.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // update order is the vector order
    pub anchor: Option<usize>, // index into `bodies`
    pub t: f64, // elapsed simulated time, seconds
    pub steps: u64, // ticks taken
}

impl System {
    pub fn new(bodies: Vec<Body>, anchor: Option<usize>) -> Self {
        Self {
            bodies,
            anchor,
            t: 0.0,
            steps: 0,
        }
    }

    pub fn anchor_body(&self) -> Option<&Body> {
        self.anchor.and_then(|i| self.bodies.get(i))
    }

    pub fn is_anchor(&self, i: usize) -> bool {
        self.anchor == Some(i)
    }
}
