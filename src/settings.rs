//! User-tunable simulation settings
//!
//! One explicit struct the collaborators pass around, instead of values
//! scattered across UI controls. Persisted as a JSON file next to the
//! binary; a missing or malformed file falls back to defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MASS, DEFAULT_RADIUS, UI_PANEL_WIDTH};

/// Simulation settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Wall contacts zero the velocity instead of reflecting it
    pub walls_kill_velocity: bool,
    /// Radius for newly placed bodies (meters)
    pub spawn_radius: f32,
    /// Mass for newly placed bodies (grams)
    pub spawn_mass: f32,
    /// Trail dash frequency (time slices per second)
    pub trail_frequency: f32,
    /// Drawn fraction of each trail time slice (0..=1)
    pub trail_line_width: f32,
    /// Reserved width of the side control panel
    pub ui_panel_width: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            walls_kill_velocity: false,
            spawn_radius: DEFAULT_RADIUS,
            spawn_mass: DEFAULT_MASS,
            trail_frequency: 10.0,
            trail_line_width: 0.5,
            ui_panel_width: UI_PANEL_WIDTH,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed settings file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings as pretty-printed JSON
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("Failed to save settings to {}: {err}", path.display());
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(err) => log::warn!("Failed to serialize settings: {err}"),
        }
    }
}
