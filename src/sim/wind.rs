//! Wind model
//!
//! One wind vector per round, rerolled at session start and on restart.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{deg_to_rad, unit_from_angle};

/// Minimum and maximum rolled wind strength
pub const MIN_WIND_STRENGTH: f32 = 1.0;
pub const MAX_WIND_STRENGTH: f32 = 4.0;

/// Compass arrows for the wind indicator, one per 45° sector
const DIRECTION_ARROWS: [char; 8] = ['↑', '↗', '→', '↘', '↓', '↙', '←', '↖'];
/// Strength names indexed by floor(strength)
const STRENGTH_NAMES: [&str; 5] = ["Calm", "Light", "Medium", "Strong", "Very Strong"];

/// Current wind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Direction in degrees, [0, 360)
    pub direction_degrees: f32,
    /// Strength, [1, 4) when rolled
    pub strength: f32,
}

impl Wind {
    pub fn new(direction_degrees: f32, strength: f32) -> Self {
        Self {
            direction_degrees,
            strength,
        }
    }

    /// No wind at all (used by tests and tooling)
    pub fn calm() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Roll a fresh wind
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut wind = Self::calm();
        wind.regenerate(rng);
        wind
    }

    /// Reroll direction and strength
    pub fn regenerate<R: Rng>(&mut self, rng: &mut R) {
        self.direction_degrees = rng.random::<f32>() * 360.0;
        self.strength =
            MIN_WIND_STRENGTH + rng.random::<f32>() * (MAX_WIND_STRENGTH - MIN_WIND_STRENGTH);
        log::info!(
            "Wind regenerated: {:.1}° strength {:.2}",
            self.direction_degrees,
            self.strength
        );
    }

    /// Wind as a vector, strength scaled by `multiplier`
    pub fn vector(&self, multiplier: f32) -> Vec2 {
        unit_from_angle(deg_to_rad(self.direction_degrees)) * self.strength * multiplier
    }

    /// Indicator text for the HUD
    pub fn label(&self) -> WindLabel {
        let sector = (self.direction_degrees.rem_euclid(360.0) / 45.0).floor() as usize % 8;
        let strength_idx = (self.strength.max(0.0).floor() as usize).min(STRENGTH_NAMES.len() - 1);
        WindLabel {
            arrow: DIRECTION_ARROWS[sector],
            strength: STRENGTH_NAMES[strength_idx],
        }
    }
}

/// Human-readable wind indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindLabel {
    pub arrow: char,
    pub strength: &'static str,
}

impl std::fmt::Display for WindLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.arrow, self.strength)
    }
}
