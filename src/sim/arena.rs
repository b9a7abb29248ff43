//! Arena bounds and wall-response policy
//!
//! The arena is an axis-aligned rectangle in the same coordinate space as the
//! bodies. Walls either reflect bodies elastically or kill their velocity
//! outright, matching the wall-mode toggle of the UI collaborator.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Rectangular simulation bounds plus wall behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena {
    /// Top-left corner
    pub origin: Vec2,
    /// Width/height extents
    pub size: Vec2,
    /// If true, any wall contact zeroes the velocity instead of reflecting it
    pub walls_kill_velocity: bool,
}

impl Arena {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self {
            origin,
            size,
            walls_kill_velocity: false,
        }
    }

    /// Arena covering the viewport minus the control panel reserved on the right
    pub fn from_viewport(viewport: Vec2, ui_panel_width: f32) -> Self {
        Self::new(Vec2::ZERO, Vec2::new(viewport.x - ui_panel_width, viewport.y))
    }

    /// Minimum corner
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.origin
    }

    /// Maximum corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }

    /// Whether a circle lies entirely inside the bounds
    pub fn contains_circle(&self, center: Vec2, radius: f32) -> bool {
        let min = self.min();
        let max = self.max();
        center.x - radius >= min.x
            && center.x + radius <= max.x
            && center.y - radius >= min.y
            && center.y + radius <= max.y
    }
}
