//! Body entity and its mutation boundary
//!
//! A body is a circular point mass. The committed position/velocity are what
//! the renderer reads; the staged buffers belong to the simulator's compute
//! phase and are never visible outside a step. Radius and mass are validated
//! here, at the mutation boundary, so the per-step math can assume them
//! positive.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::trail::Trail;
use crate::consts::{MIN_MASS, MIN_RADIUS};

/// A circular point-mass simulation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    position: Vec2,
    velocity: Vec2,
    radius: f32,
    mass: f32,
    /// False while a drag gesture holds the body; the step skips disabled
    /// bodies, though they still block enabled neighbors
    pub enabled: bool,
    staged_position: Vec2,
    staged_velocity: Vec2,
    /// Committed-position history for the renderer
    #[serde(skip)]
    pub trail: Trail,
}

impl Body {
    /// Create a body at rest. Radius and mass are clamped to positive minima.
    pub fn new(position: Vec2, radius: f32, mass: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            radius: radius.max(MIN_RADIUS),
            mass: mass.max(MIN_MASS),
            enabled: true,
            staged_position: position,
            staged_velocity: Vec2::ZERO,
            trail: Trail::new(),
        }
    }

    /// Create a body with an initial velocity
    pub fn with_velocity(position: Vec2, velocity: Vec2, radius: f32, mass: f32) -> Self {
        let mut body = Self::new(position, radius, mass);
        body.set_velocity(velocity);
        body
    }

    /// Position in meters
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Velocity in meters per second
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Radius in meters
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Mass in grams
    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Momentum carried by the body
    #[inline]
    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }

    /// Move the body directly (drag collaborator). The staged position
    /// follows so the next commit cannot snap the body back.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.staged_position = position;
    }

    /// Overwrite the velocity directly (drag collaborator). The staged
    /// velocity follows so the override survives the next commit.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
        self.staged_velocity = velocity;
    }

    /// Resize the body; values below `MIN_RADIUS` are clamped
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius.max(MIN_RADIUS);
    }

    /// Re-weigh the body; values below `MIN_MASS` are clamped
    pub fn set_mass(&mut self, mass: f32) {
        self.mass = mass.max(MIN_MASS);
    }

    /// Store the compute phase's result without touching committed state
    pub(crate) fn stage(&mut self, position: Vec2, velocity: Vec2) {
        self.staged_position = position;
        self.staged_velocity = velocity;
    }

    /// Staged velocity carried over from the previous commit (already damped)
    #[inline]
    pub(crate) fn staged_velocity(&self) -> Vec2 {
        self.staged_velocity
    }

    /// Apply staged state: velocity first, then a trail sample of the
    /// outgoing position, then the position itself. The damping multiplier
    /// re-seeds the staged velocity for the next step.
    pub(crate) fn commit(&mut self, time: f64, damping: f32) {
        self.velocity = self.staged_velocity;
        self.trail.record(time, self.position);
        self.position = self.staged_position;
        self.staged_velocity = self.velocity * damping;
    }
}
