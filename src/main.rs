//! Bounce Box headless driver
//!
//! Stands in for the interactive render loop: builds an arena from a
//! viewport, scatters a seeded scenario, and advances the simulation at the
//! fixed unit step the UI would use.

use std::path::Path;

use glam::Vec2;

use bounce_box::consts::STEP_DT;
use bounce_box::scenario::Scenario;
use bounce_box::settings::Settings;
use bounce_box::sim::{Arena, Simulator};

const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);
const STEPS: u32 = 600;

fn main() {
    env_logger::init();
    log::info!("Bounce Box (headless) starting...");

    let settings = Settings::load(Path::new("settings.json"));

    let mut arena = Arena::from_viewport(VIEWPORT, settings.ui_panel_width);
    arena.walls_kill_velocity = settings.walls_kill_velocity;

    let mut sim = Simulator::new(arena);
    let bodies = Scenario::default().spawn(sim.arena());
    for body in bodies {
        sim.add_body(body);
    }
    log::info!("Spawned {} bodies", sim.bodies().len());

    for i in 1..=STEPS {
        sim.step(STEP_DT);

        if i % 100 == 0 {
            let momentum = sim
                .bodies()
                .iter()
                .fold(Vec2::ZERO, |acc, body| acc + body.momentum());
            log::info!(
                "step {i:4}  t={:6.0}  |p|={:8.2}",
                sim.time(),
                momentum.length()
            );
        }
    }

    for (i, body) in sim.bodies().iter().enumerate() {
        log::info!(
            "body {i}: pos=({:7.1}, {:7.1})  vel=({:6.2}, {:6.2})  trail={} samples",
            body.position().x,
            body.position().y,
            body.velocity().x,
            body.velocity().y,
            body.trail.points().len()
        );
    }
}
