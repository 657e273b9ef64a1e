//! Archery - A single-player target archery arcade game
//!
//! Core modules:
//! - `sim`: Deterministic shot simulation (wind, aim, arrow flight, scoring)
//! - `settings`: Data-driven field geometry and physics tuning

pub mod settings;
pub mod sim;

pub use settings::GameConfig;

use glam::Vec2;

/// Game configuration constants (defaults for `GameConfig`)
pub mod consts {
    /// Playfield dimensions (pixels, y grows downward)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Where arrows are nocked
    pub const BOW_X: f32 = 80.0;
    pub const BOW_Y: f32 = 300.0;

    /// Target placement
    pub const TARGET_X: f32 = 650.0;
    pub const TARGET_Y: f32 = 300.0;
    pub const TARGET_RADIUS: f32 = 100.0;

    /// Shots per round
    pub const SHOTS_PER_ROUND: u32 = 3;

    /// Downward acceleration per tick. Tuned for one tick per rendered frame;
    /// rescale together with LAUNCH_SPEED if the tick rate changes.
    pub const GRAVITY: f32 = 0.15;
    /// Ticks before an arrow is declared lost
    pub const ARROW_LIFE_TICKS: u32 = 100;
    /// Launch speed at full power (pixels/tick)
    pub const LAUNCH_SPEED: f32 = 8.0;
    /// Fraction of wind strength added to launch velocity
    pub const WIND_INFLUENCE: f32 = 0.1;
    /// Wind multiplier applied to the power bow
    pub const POWER_BOW_WIND_FACTOR: f32 = 1.5;

    /// Drag distance (pixels) that yields full power
    pub const DRAG_FULL_POWER: f32 = 100.0;
    /// Releases at or below this power are discarded
    pub const FIRE_THRESHOLD: f32 = 0.1;

    /// Trail points kept behind a flying arrow
    pub const TRAIL_LENGTH: usize = 10;
    /// Alpha of the newest trail point
    pub const TRAIL_MAX_ALPHA: f32 = 0.5;
}

/// Degrees to radians
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

/// Radians to degrees
#[inline]
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * 180.0 / std::f32::consts::PI
}

/// Direction of a vector in radians, atan2(y, x)
#[inline]
pub fn heading(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}

/// Unit vector for an angle in radians
#[inline]
pub fn unit_from_angle(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}
