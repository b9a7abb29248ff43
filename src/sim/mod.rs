//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Two-phase step: compute from the committed snapshot, then commit
//! - Stable iteration order (by body index)
//! - No rendering or platform dependencies

pub mod arena;
pub mod body;
pub mod collision;
pub mod step;
pub mod trail;

pub use arena::Arena;
pub use body::Body;
pub use collision::{
    PairContact, WallContact, detect_pair_collision, reflect_velocity, resolve_pair_velocity,
    resolve_wall, wall_overlap, wall_penetration,
};
pub use step::Simulator;
pub use trail::{Trail, TrailPoint};
