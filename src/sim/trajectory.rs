//! Arrow flight
//!
//! Launch parameters are randomized once at spawn; after that the flight is
//! fully deterministic. One `tick` call advances the arrow one frame.

use std::collections::VecDeque;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::aim::FireCommand;
use super::bow::{BowMode, BowModeSpec};
use super::wind::Wind;
use crate::consts::TRAIL_MAX_ALPHA;
use crate::settings::GameConfig;
use crate::{deg_to_rad, heading, unit_from_angle};

/// An arrow in flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrow {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Orientation in radians (follows velocity)
    pub angle: f32,
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Ticks left before the arrow is lost
    pub remaining_ticks: u32,
    /// Bow the arrow was fired with
    pub mode: BowMode,
}

impl Arrow {
    pub fn new(pos: Vec2, vel: Vec2, gravity: f32, remaining_ticks: u32, mode: BowMode) -> Self {
        Self {
            pos,
            vel,
            angle: heading(vel),
            gravity,
            remaining_ticks,
            mode,
        }
    }

    /// Advance position and velocity by one tick
    fn integrate(&mut self) {
        self.pos += self.vel;
        self.vel.y += self.gravity;
        self.angle = heading(self.vel);
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
    }
}

/// Trail point for rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailPoint {
    pub pos: Vec2,
    /// Opacity, highest for the newest point
    pub alpha: f32,
}

/// Recent arrow positions, oldest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trail {
    points: VecDeque<TrailPoint>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a position, evicting the oldest beyond capacity, and refade
    pub fn record(&mut self, pos: Vec2) {
        if self.capacity == 0 {
            return;
        }
        self.points.push_back(TrailPoint { pos, alpha: 1.0 });
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }

        let len = self.points.len() as f32;
        for (i, point) in self.points.iter_mut().enumerate() {
            point.alpha = (i + 1) as f32 / len * TRAIL_MAX_ALPHA;
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }
}

/// Result of one flight tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Still in the air
    Flying,
    /// Landed on the target face at this distance from center
    Hit(f32),
    /// Left the field or ran out of life
    Miss,
}

/// Launch a new arrow from the bow anchor.
///
/// The only randomness in a shot is the angle perturbation drawn here.
pub fn spawn<R: Rng>(
    cmd: &FireCommand,
    bow: &BowModeSpec,
    wind: &Wind,
    config: &GameConfig,
    rng: &mut R,
) -> Arrow {
    let adjusted_power = cmd.power * bow.power_multiplier;

    let variation_degrees = (rng.random::<f32>() - 0.5) * bow.spread_degrees();
    let angle = cmd.angle() + deg_to_rad(variation_degrees);

    let wind_vec = wind.vector(bow.wind_factor(config.power_wind_factor));
    let speed = adjusted_power * config.launch_speed;
    let vel = unit_from_angle(angle) * speed + wind_vec * config.wind_influence;

    log::debug!(
        "Spawn arrow: mode={} power={:.3} angle={:.2}° (variation {:+.2}°) vel=({:.3}, {:.3})",
        bow.mode,
        adjusted_power,
        crate::rad_to_deg(angle),
        variation_degrees,
        vel.x,
        vel.y
    );

    Arrow {
        pos: config.bow_anchor,
        vel,
        angle,
        gravity: config.gravity,
        remaining_ticks: config.arrow_life_ticks,
        mode: bow.mode,
    }
}

/// Advance one arrow by one tick.
///
/// A target hit is checked before the bounds/life check, so an arrow that
/// reaches the face on its last tick or past the field edge still scores.
pub fn tick(arrow: &mut Arrow, trail: &mut Trail, config: &GameConfig) -> TickOutcome {
    trail.record(arrow.pos);
    arrow.integrate();

    let distance = arrow.pos.distance(config.target_center);
    if distance <= config.target_radius {
        return TickOutcome::Hit(distance);
    }

    if config.out_of_bounds(arrow.pos) || arrow.remaining_ticks == 0 {
        return TickOutcome::Miss;
    }

    TickOutcome::Flying
}
