//! Seeded initial scenarios
//!
//! Reproducible body placement for the headless driver and tests: the same
//! seed always yields the same layout.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::interact::can_place;
use crate::sim::{Arena, Body};

/// Attempts per body before giving up on a crowded arena
const MAX_PLACEMENT_ATTEMPTS: usize = 64;

/// Parameters for scattering an initial set of bodies
#[derive(Debug, Clone)]
pub struct Scenario {
    pub seed: u64,
    /// Number of bodies to place
    pub count: usize,
    pub radius_range: (f32, f32),
    pub mass_range: (f32, f32),
    /// Largest initial speed along each axis (m/s)
    pub max_speed: f32,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            seed: 0,
            count: 8,
            radius_range: (20.0, 60.0),
            mass_range: (1.0, 4.0),
            max_speed: 8.0,
        }
    }
}

impl Scenario {
    /// Scatter non-overlapping bodies inside the arena.
    ///
    /// Positions are rejection-sampled against the bodies placed so far; a
    /// body that still overlaps after `MAX_PLACEMENT_ATTEMPTS` tries is
    /// skipped, so a crowded arena yields fewer bodies rather than
    /// overlapping ones.
    pub fn spawn(&self, arena: &Arena) -> Vec<Body> {
        let mut rng = Pcg32::seed_from_u64(self.seed);
        let mut bodies: Vec<Body> = Vec::with_capacity(self.count);
        let min = arena.min();
        let max = arena.max();

        for _ in 0..self.count {
            let radius = rng.random_range(self.radius_range.0..=self.radius_range.1);
            let mass = rng.random_range(self.mass_range.0..=self.mass_range.1);
            if 2.0 * radius >= arena.size.x || 2.0 * radius >= arena.size.y {
                continue;
            }

            for _ in 0..MAX_PLACEMENT_ATTEMPTS {
                let pos = Vec2::new(
                    rng.random_range(min.x + radius..=max.x - radius),
                    rng.random_range(min.y + radius..=max.y - radius),
                );
                if !can_place(&bodies, pos, radius) {
                    continue;
                }
                let vel = Vec2::new(
                    rng.random_range(-self.max_speed..=self.max_speed),
                    rng.random_range(-self.max_speed..=self.max_speed),
                );
                bodies.push(Body::with_velocity(pos, vel, radius, mass));
                break;
            }
        }

        if bodies.len() < self.count {
            log::warn!(
                "Placed {} of {} bodies; arena too crowded for the rest",
                bodies.len(),
                self.count
            );
        }
        bodies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Arena {
        Arena::new(Vec2::ZERO, Vec2::new(1080.0, 720.0))
    }

    #[test]
    fn test_same_seed_same_layout() {
        let scenario = Scenario {
            seed: 42,
            ..Scenario::default()
        };
        let first = scenario.spawn(&arena());
        let second = scenario.spawn(&arena());

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.position(), b.position());
            assert_eq!(a.velocity(), b.velocity());
            assert_eq!(a.radius(), b.radius());
            assert_eq!(a.mass(), b.mass());
        }
    }

    #[test]
    fn test_spawned_bodies_fit_without_overlap() {
        let arena = arena();
        let bodies = Scenario::default().spawn(&arena);
        assert!(!bodies.is_empty());

        for (i, body) in bodies.iter().enumerate() {
            assert!(arena.contains_circle(body.position(), body.radius()));
            for other in &bodies[i + 1..] {
                let dist = (body.position() - other.position()).length();
                assert!(dist >= body.radius() + other.radius());
            }
        }
    }

    #[test]
    fn test_oversized_bodies_are_skipped() {
        let tiny = Arena::new(Vec2::ZERO, Vec2::new(50.0, 50.0));
        let scenario = Scenario {
            radius_range: (40.0, 60.0),
            ..Scenario::default()
        };
        assert!(scenario.spawn(&tiny).is_empty());
    }
}
