//! Field geometry and physics tuning
//!
//! Loaded from an optional JSON file; any field left out keeps its default.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Field ===
    /// Playfield width; arrows past it are lost
    pub canvas_width: f32,
    /// Playfield height; arrows below it are lost
    pub canvas_height: f32,
    /// Arrow spawn point
    pub bow_anchor: Vec2,
    /// Bullseye position
    pub target_center: Vec2,
    /// Outer edge of the scoring face (also the outer tier boundary)
    pub target_radius: f32,

    // === Rules ===
    pub shots_per_round: u32,

    // === Physics ===
    pub gravity: f32,
    pub arrow_life_ticks: u32,
    pub launch_speed: f32,
    pub wind_influence: f32,
    pub power_wind_factor: f32,

    // === Aiming ===
    pub drag_full_power: f32,
    pub fire_threshold: f32,

    // === Cosmetic ===
    pub trail_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            bow_anchor: Vec2::new(BOW_X, BOW_Y),
            target_center: Vec2::new(TARGET_X, TARGET_Y),
            target_radius: TARGET_RADIUS,

            shots_per_round: SHOTS_PER_ROUND,

            gravity: GRAVITY,
            arrow_life_ticks: ARROW_LIFE_TICKS,
            launch_speed: LAUNCH_SPEED,
            wind_influence: WIND_INFLUENCE,
            power_wind_factor: POWER_BOW_WIND_FACTOR,

            drag_full_power: DRAG_FULL_POWER,
            fire_threshold: FIRE_THRESHOLD,

            trail_length: TRAIL_LENGTH,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON config
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load from a JSON file, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read config {}: {} - using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Invalid config {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// True if a point lies outside the live area (right, bottom or left edge).
    /// The top edge is open so lobbed arrows can come back down.
    pub fn out_of_bounds(&self, pos: Vec2) -> bool {
        pos.x > self.canvas_width || pos.y > self.canvas_height || pos.x < 0.0
    }
}
