//! Pointer-side collaborators: selection, placement, dragging
//!
//! The event plumbing (mouse/touch) lives outside the crate; these are the
//! rules the pointer handlers apply. A drag holds exactly one body: the body
//! is disabled for the duration, follows the pointer, and the pointer delta
//! doubles as the thrown velocity on release.

use glam::Vec2;

use crate::sim::Body;

/// One tracked pointer (mouse cursor or touch point)
#[derive(Debug, Clone, Copy)]
pub struct PointerPoint {
    pos: Vec2,
    old_pos: Vec2,
}

impl PointerPoint {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, old_pos: pos }
    }

    pub fn set_pos(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Movement since the last call; resets the reference point
    pub fn delta(&mut self) -> Vec2 {
        let delta = self.pos - self.old_pos;
        self.old_pos = self.pos;
        delta
    }
}

/// First body containing the point, if any (selection and drag start)
pub fn hit_test(bodies: &[Body], point: Vec2) -> Option<usize> {
    bodies
        .iter()
        .position(|body| (body.position() - point).length() < body.radius())
}

/// Whether a new body of the given radius fits at `center` without
/// overlapping any existing body
pub fn can_place(bodies: &[Body], center: Vec2, radius: f32) -> bool {
    bodies
        .iter()
        .all(|body| (body.position() - center).length() >= radius + body.radius())
}

/// An in-progress drag of one body
#[derive(Debug, Clone, Copy)]
pub struct Drag {
    body_index: usize,
}

impl Drag {
    /// Grab the body under the pointer, if any; the body is disabled so the
    /// step leaves it alone while held
    pub fn begin(bodies: &mut [Body], point: Vec2) -> Option<Self> {
        let index = hit_test(bodies, point)?;
        bodies[index].enabled = false;
        Some(Self { body_index: index })
    }

    #[inline]
    pub fn body_index(&self) -> usize {
        self.body_index
    }

    /// Apply a pointer delta: carry the body along and keep the delta as its
    /// velocity, so releasing mid-swipe throws it
    pub fn apply(&self, bodies: &mut [Body], delta: Vec2) {
        let body = &mut bodies[self.body_index];
        body.set_position(body.position() + delta);
        body.set_velocity(delta);
    }

    /// Release the body back into the simulation
    pub fn finish(self, bodies: &mut [Body]) {
        bodies[self.body_index].enabled = true;
    }
}
