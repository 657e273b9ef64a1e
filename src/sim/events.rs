//! Events emitted by the session for audio and UI collaborators.
//!
//! The session queues these as things happen; collaborators drain the queue
//! once per frame.

use serde::{Deserialize, Serialize};

use super::bow::BowMode;
use super::scoring::{FinalRating, HitType, ShotRecord};
use super::wind::Wind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    // --- Audio cues ---
    /// Arrow loosed
    Fire { mode: BowMode },
    /// Arrow struck the target face
    Hit { hit_type: HitType },
    /// Arrow lost
    Miss,

    // --- UI text ---
    /// Score or shot count changed
    ScoreChanged {
        total_score: u32,
        shots_remaining: u32,
    },
    /// New wind rolled; the indicator must redraw
    WindChanged { wind: Wind, label: String },
    /// New history entry
    ShotRecorded { record: ShotRecord },
    /// Round finished
    GameOver {
        final_score: u32,
        rating: FinalRating,
    },
}

impl GameEvent {
    /// True for events meant for the audio collaborator
    pub fn is_audio_cue(&self) -> bool {
        matches!(self, GameEvent::Fire { .. } | GameEvent::Hit { .. } | GameEvent::Miss)
    }
}
