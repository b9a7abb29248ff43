//! Collision detection and response for circles against walls and each other
//!
//! Pure functions over positions and velocities; nothing here mutates a
//! body. Wall resolution works independently per axis. The pair response
//! applies the one-dimensional elastic formula to the full velocity vectors,
//! which is exact for head-on impacts and an approximation for oblique ones
//! (tangential velocity is not preserved).

use glam::Vec2;

use super::arena::Arena;

/// Squared center distance below which two circles count as coincident
const COINCIDENT_EPSILON: f32 = 1e-12;

/// Which arena edges a candidate position crosses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl WallContact {
    /// Contact on either vertical wall
    #[inline]
    pub fn along_x(&self) -> bool {
        self.left || self.right
    }

    /// Contact on either horizontal wall
    #[inline]
    pub fn along_y(&self) -> bool {
        self.top || self.bottom
    }

    /// Any contact at all
    #[inline]
    pub fn any(&self) -> bool {
        self.along_x() || self.along_y()
    }
}

/// Per-edge overlap test for a circle at a tentative position
pub fn wall_overlap(candidate: Vec2, radius: f32, arena: &Arena) -> WallContact {
    let min = arena.min();
    let max = arena.max();
    WallContact {
        left: candidate.x - radius < min.x,
        right: candidate.x + radius > max.x,
        top: candidate.y - radius < min.y,
        bottom: candidate.y + radius > max.y,
    }
}

/// Signed per-axis penetration of a circle past the arena walls.
///
/// Subtracting the result from the candidate position leaves the circle
/// tangent to each violated wall; axes without contact contribute zero. A
/// circle wider than the arena touches both opposing walls and the left/top
/// arithmetic wins, so bounds must exceed the body diameter for defined
/// behavior.
pub fn wall_penetration(candidate: Vec2, radius: f32, arena: &Arena) -> Vec2 {
    let contact = wall_overlap(candidate, radius, arena);
    let min = arena.min();
    let max = arena.max();

    let x = if contact.left {
        (candidate.x - radius) - min.x
    } else if contact.right {
        (candidate.x + radius) - max.x
    } else {
        0.0
    };
    let y = if contact.top {
        (candidate.y - radius) - min.y
    } else if contact.bottom {
        (candidate.y + radius) - max.y
    } else {
        0.0
    };
    Vec2::new(x, y)
}

/// Reflect a velocity off a surface: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Resolve wall contact for a tentative position, independently per axis.
///
/// Each penetrating axis pushes the position back to tangency and reflects
/// that velocity component off the axis-aligned wall normal (which reduces
/// to a sign flip). With `arena.walls_kill_velocity` set, any contact zeroes
/// the whole velocity instead.
pub fn resolve_wall(
    candidate: Vec2,
    velocity: Vec2,
    radius: f32,
    arena: &Arena,
) -> (Vec2, Vec2) {
    let penetration = wall_penetration(candidate, radius, arena);
    let mut position = candidate;
    let mut velocity = velocity;
    let mut contact = false;

    if penetration.x != 0.0 {
        position.x -= penetration.x;
        let normal = Vec2::new(-penetration.x.signum(), 0.0);
        velocity = reflect_velocity(velocity, normal);
        contact = true;
    }
    if penetration.y != 0.0 {
        position.y -= penetration.y;
        let normal = Vec2::new(0.0, -penetration.y.signum());
        velocity = reflect_velocity(velocity, normal);
        contact = true;
    }

    if contact && arena.walls_kill_velocity {
        velocity = Vec2::ZERO;
    }

    (position, velocity)
}

/// Contact between two overlapping circles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairContact {
    /// Position the first circle should occupy to sit exactly tangent to the
    /// second
    pub point: Vec2,
    /// Unit normal from the second circle's center toward the first
    pub normal: Vec2,
}

/// Detect overlap between two circles from their committed centers.
///
/// A hit requires the center distance to be strictly less than the radius
/// sum. Coincident centers have no usable normal and report no collision
/// rather than propagating a NaN direction.
pub fn detect_pair_collision(
    a_pos: Vec2,
    a_radius: f32,
    b_pos: Vec2,
    b_radius: f32,
) -> Option<PairContact> {
    let delta = a_pos - b_pos;
    let dist_sq = delta.length_squared();
    let radius_sum = a_radius + b_radius;
    if dist_sq >= radius_sum * radius_sum {
        return None;
    }
    if dist_sq < COINCIDENT_EPSILON {
        return None;
    }

    let normal = delta / dist_sq.sqrt();
    Some(PairContact {
        point: b_pos + normal * radius_sum,
        normal,
    })
}

/// New velocity for the first body after an elastic impact with the second.
///
/// One-dimensional elastic collision applied to the full vectors:
/// `v' = (v_a (m_a - m_b) + 2 m_b v_b) / (m_a + m_b)`
pub fn resolve_pair_velocity(a_vel: Vec2, a_mass: f32, b_vel: Vec2, b_mass: f32) -> Vec2 {
    (a_vel * (a_mass - b_mass) + b_vel * (2.0 * b_mass)) / (a_mass + b_mass)
}
