//! Physical-to-pixel projection shared by every viewer
//!
//! Screen coordinates have their origin at the top-left corner of the
//! viewport; the physical origin lands on the viewport center.

use crate::simulation::states::{NVec2, Path};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(900.0, 900.0)
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// `position * scale + center`, component-wise
    pub fn to_screen(&self, position: &NVec2, scale: f64) -> (f64, f64) {
        let (cx, cy) = self.center();
        (position.x * scale + cx, position.y * scale + cy)
    }

    /// Every point of `path`, projected in chronological order
    pub fn project_path(&self, path: &Path, scale: f64) -> Vec<(f64, f64)> {
        path.iter().map(|p| self.to_screen(p, scale)).collect()
    }

    /// Screen pixels to a centered, y-up world frame (what bevy's 2D camera uses)
    pub fn screen_to_world(&self, screen: (f64, f64)) -> (f64, f64) {
        let (cx, cy) = self.center();
        (screen.0 - cx, cy - screen.1)
    }
}
