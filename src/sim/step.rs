//! Two-phase simulation step
//!
//! The step computes every body's next state from the committed pre-step
//! snapshot before any of it is applied, so the result does not depend on
//! body iteration order: two bodies examining each other see the same stale
//! values whichever is processed first. External mutation (drag, resize,
//! delete) is only possible between steps, since `step` holds the one
//! `&mut Simulator`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::body::Body;
use super::collision;
use crate::consts::VELOCITY_DAMPING;

/// Owns the body set and the arena; advances them one discrete step at a time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulator {
    bodies: Vec<Body>,
    arena: Arena,
    /// Monotonic simulation clock (sum of all step dts)
    time: f64,
}

impl Simulator {
    pub fn new(arena: Arena) -> Self {
        Self {
            bodies: Vec::new(),
            arena,
            time: 0.0,
        }
    }

    /// Read access for the rendering collaborator
    #[inline]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Mutable access for the drag/resize collaborators. Only reachable
    /// while no step is in progress.
    #[inline]
    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    #[inline]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    #[inline]
    pub fn arena_mut(&mut self) -> &mut Arena {
        &mut self.arena
    }

    /// Simulation clock in seconds
    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Insert a body placed by the external creation collaborator
    pub fn add_body(&mut self, body: Body) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    /// Remove a body (deletion collaborator); indices above it shift down
    pub fn remove_body(&mut self, index: usize) -> Body {
        self.bodies.remove(index)
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Compute phase: every enabled body derives a staged next state from
    /// committed pre-step values only. The candidate position is wall-
    /// resolved first; overlapping neighbors then overwrite it with the
    /// contact point and the elastic velocity (last overlapping neighbor
    /// wins, corrections do not accumulate). Without any contact the staged
    /// velocity keeps the damped value seeded by the previous commit.
    ///
    /// Commit phase: staged state becomes committed state, a trail sample is
    /// recorded, and the per-step damping multiplier re-seeds the staged
    /// velocity. Disabled bodies are left untouched by both phases but still
    /// act as obstacles for enabled neighbors.
    ///
    /// `dt` is taken as supplied; a pathologically large value can tunnel a
    /// body through walls or neighbors within a single step.
    pub fn step(&mut self, dt: f32) {
        let mut staged: Vec<Option<(Vec2, Vec2)>> = Vec::with_capacity(self.bodies.len());

        for (i, body) in self.bodies.iter().enumerate() {
            if !body.enabled {
                staged.push(None);
                continue;
            }

            let candidate = body.position() + body.velocity() * dt;
            let contact = collision::wall_overlap(candidate, body.radius(), &self.arena);
            let (wall_pos, wall_vel) =
                collision::resolve_wall(candidate, body.velocity(), body.radius(), &self.arena);

            let mut next_pos = wall_pos;
            let mut next_vel = if contact.any() {
                wall_vel
            } else {
                body.staged_velocity()
            };

            for (j, other) in self.bodies.iter().enumerate() {
                if j == i {
                    continue;
                }
                if let Some(hit) = collision::detect_pair_collision(
                    body.position(),
                    body.radius(),
                    other.position(),
                    other.radius(),
                ) {
                    next_pos = hit.point;
                    next_vel = collision::resolve_pair_velocity(
                        body.velocity(),
                        body.mass(),
                        other.velocity(),
                        other.mass(),
                    );
                }
            }

            staged.push(Some((next_pos, next_vel)));
        }

        for (body, next) in self.bodies.iter_mut().zip(staged) {
            if let Some((pos, vel)) = next {
                body.stage(pos, vel);
            }
        }

        for body in &mut self.bodies {
            if body.enabled {
                body.commit(self.time, VELOCITY_DAMPING);
            }
        }
        self.time += f64::from(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arena_400() -> Arena {
        Arena::new(Vec2::ZERO, Vec2::new(400.0, 400.0))
    }

    #[test]
    fn test_wall_containment_and_reflection() {
        let mut sim = Simulator::new(arena_400());
        sim.add_body(Body::with_velocity(
            Vec2::new(385.0, 200.0),
            Vec2::new(30.0, 0.0),
            10.0,
            1.0,
        ));
        sim.step(1.0);

        let body = &sim.bodies()[0];
        assert!(sim.arena().contains_circle(body.position(), body.radius() * 0.999));
        assert_eq!(body.position(), Vec2::new(390.0, 200.0));
        assert_eq!(body.velocity(), Vec2::new(-30.0, 0.0));
    }

    #[test]
    fn test_wall_stop_mode_zeroes_velocity() {
        let mut arena = arena_400();
        arena.walls_kill_velocity = true;
        let mut sim = Simulator::new(arena);
        sim.add_body(Body::with_velocity(
            Vec2::new(385.0, 200.0),
            Vec2::new(30.0, 12.0),
            10.0,
            1.0,
        ));
        sim.step(1.0);
        assert_eq!(sim.bodies()[0].velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_pairwise_separation_is_exact() {
        let mut sim = Simulator::new(arena_400());
        sim.add_body(Body::new(Vec2::new(200.0, 200.0), 20.0, 1.0));
        sim.add_body(Body::new(Vec2::new(215.0, 200.0), 20.0, 1.0));
        let b_before = sim.bodies()[1].position();

        sim.step(1.0);

        let separation = (sim.bodies()[0].position() - b_before).length();
        assert!((separation - 40.0).abs() < 1e-3);
    }

    #[test]
    fn test_head_on_elastic_velocities() {
        // m1=1 at v=(1,0) against m2=2 at v=(-1,0), overlapping
        let mut sim = Simulator::new(arena_400());
        sim.add_body(Body::with_velocity(
            Vec2::new(190.0, 200.0),
            Vec2::new(1.0, 0.0),
            10.0,
            1.0,
        ));
        sim.add_body(Body::with_velocity(
            Vec2::new(205.0, 200.0),
            Vec2::new(-1.0, 0.0),
            10.0,
            2.0,
        ));
        sim.step(1.0);

        let v1 = sim.bodies()[0].velocity();
        let v2 = sim.bodies()[1].velocity();
        assert!((v1.x - (-5.0 / 3.0)).abs() < 1e-6);
        // Symmetric formula for the heavier body: (-1*(2-1) + 1*2) / 3 = 1/3
        assert!((v2.x - (1.0 / 3.0)).abs() < 1e-6);
    }

    #[test]
    fn test_compute_phase_is_order_independent() {
        let a = Body::with_velocity(Vec2::new(190.0, 200.0), Vec2::new(5.0, 1.0), 15.0, 1.0);
        let b = Body::with_velocity(Vec2::new(210.0, 200.0), Vec2::new(-3.0, 0.0), 15.0, 3.0);

        let mut forward = Simulator::new(arena_400());
        forward.add_body(a.clone());
        forward.add_body(b.clone());
        forward.step(1.0);

        let mut reversed = Simulator::new(arena_400());
        reversed.add_body(b);
        reversed.add_body(a);
        reversed.step(1.0);

        assert_eq!(forward.bodies()[0].position(), reversed.bodies()[1].position());
        assert_eq!(forward.bodies()[0].velocity(), reversed.bodies()[1].velocity());
        assert_eq!(forward.bodies()[1].position(), reversed.bodies()[0].position());
        assert_eq!(forward.bodies()[1].velocity(), reversed.bodies()[0].velocity());
    }

    #[test]
    fn test_stationary_body_is_stable() {
        let mut sim = Simulator::new(arena_400());
        sim.add_body(Body::new(Vec2::new(200.0, 200.0), 20.0, 1.0));
        sim.step(1.0);
        sim.step(1.0);

        let body = &sim.bodies()[0];
        assert_eq!(body.position(), Vec2::new(200.0, 200.0));
        assert_eq!(body.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_damping_applies_from_second_step() {
        let mut sim = Simulator::new(arena_400());
        sim.add_body(Body::with_velocity(
            Vec2::new(100.0, 200.0),
            Vec2::new(10.0, 0.0),
            10.0,
            1.0,
        ));

        // First step travels at the full launch velocity
        sim.step(1.0);
        assert_eq!(sim.bodies()[0].position(), Vec2::new(110.0, 200.0));
        assert_eq!(sim.bodies()[0].velocity(), Vec2::new(10.0, 0.0));

        // The previous commit re-seeded the staged velocity with the damped value
        sim.step(1.0);
        assert_eq!(
            sim.bodies()[0].velocity(),
            Vec2::new(10.0, 0.0) * VELOCITY_DAMPING
        );
    }

    #[test]
    fn test_disabled_body_is_frozen_but_blocks() {
        let mut sim = Simulator::new(arena_400());
        let held = sim.add_body(Body::with_velocity(
            Vec2::new(200.0, 200.0),
            Vec2::new(50.0, 0.0),
            20.0,
            1.0,
        ));
        sim.bodies_mut()[held].enabled = false;
        let mover = sim.add_body(Body::with_velocity(
            Vec2::new(230.0, 200.0),
            Vec2::new(-5.0, 0.0),
            20.0,
            1.0,
        ));

        sim.step(1.0);

        // Held body did not move despite its velocity
        assert_eq!(sim.bodies()[held].position(), Vec2::new(200.0, 200.0));
        // The free body was pushed out to tangency against the held one
        let separation =
            (sim.bodies()[mover].position() - sim.bodies()[held].position()).length();
        assert!((separation - 40.0).abs() < 1e-3);
    }

    #[test]
    fn test_clock_advances_and_trails_record() {
        let mut sim = Simulator::new(arena_400());
        sim.add_body(Body::with_velocity(
            Vec2::new(100.0, 100.0),
            Vec2::new(10.0, 0.0),
            10.0,
            1.0,
        ));
        sim.step(1.0);
        sim.step(1.0);
        assert_eq!(sim.time(), 2.0);

        let trail = &sim.bodies()[0].trail;
        assert_eq!(trail.points().len(), 2);
        // Samples hold the outgoing committed positions
        assert_eq!(trail.points()[0].pos, Vec2::new(100.0, 100.0));
        assert_eq!(trail.points()[1].pos, Vec2::new(110.0, 100.0));
    }

    #[test]
    fn test_last_overlapping_neighbor_wins() {
        let mut sim = Simulator::new(arena_400());
        // Middle body overlaps both neighbors; the later-indexed one decides
        sim.add_body(Body::new(Vec2::new(185.0, 200.0), 10.0, 1.0));
        sim.add_body(Body::new(Vec2::new(200.0, 200.0), 10.0, 1.0));
        sim.add_body(Body::new(Vec2::new(215.0, 200.0), 10.0, 1.0));

        sim.step(1.0);

        let middle = sim.bodies()[1].position();
        let last_neighbor = Vec2::new(215.0, 200.0);
        assert!(((middle - last_neighbor).length() - 20.0).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn prop_single_body_stays_contained(
            x in 20.0f32..380.0,
            y in 20.0f32..380.0,
            vx in -500.0f32..500.0,
            vy in -500.0f32..500.0,
            radius in 1.0f32..20.0,
        ) {
            let mut sim = Simulator::new(arena_400());
            sim.add_body(Body::with_velocity(Vec2::new(x, y), Vec2::new(vx, vy), radius, 1.0));
            sim.step(1.0);
            let body = &sim.bodies()[0];
            prop_assert!(sim.arena().contains_circle(body.position(), body.radius() * 0.999));
        }
    }
}
