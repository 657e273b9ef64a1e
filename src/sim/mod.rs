//! Deterministic shot simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, constants tuned to that cadence
//! - Injected, seedable RNG only
//! - No rendering, audio or platform dependencies

pub mod aim;
pub mod bow;
pub mod events;
pub mod scoring;
pub mod session;
pub mod trajectory;
pub mod wind;

pub use aim::{AimGesture, FireCommand};
pub use bow::{BowMode, BowModeSpec, BowModeTable, InvalidModeError};
pub use events::GameEvent;
pub use scoring::{
    FinalRating, HitType, Scoreboard, ShotRecord, TARGET_RING_RADII, resolve_hit, resolve_miss,
};
pub use session::{AimView, GamePhase, GameSession, Snapshot, TargetGeometry};
pub use trajectory::{Arrow, TickOutcome, Trail, TrailPoint, spawn, tick};
pub use wind::{Wind, WindLabel};
