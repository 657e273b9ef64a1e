//! Round state machine
//!
//! `GameSession` owns every piece of mutable game state: wind, aim gesture,
//! the (at most one) arrow in flight, its trail, and the scoreboard. Input
//! handlers call the `aim_*` methods, the frame loop calls `tick`, and
//! presentation reads `snapshot` and drains `events`.
//!
//! Phases: Ready -> Aiming -> Flying -> Resolving -> (Ready | GameOver).
//! Nothing here is reentrant; the session must be driven from one thread.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::aim::AimGesture;
use super::bow::{BowMode, BowModeTable};
use super::events::GameEvent;
use super::scoring::{Scoreboard, TARGET_RING_RADII, resolve_hit, resolve_miss};
use super::trajectory::{self, Arrow, TickOutcome, Trail};
use super::wind::{Wind, WindLabel};
use crate::settings::GameConfig;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player to start a drag
    Ready,
    /// Drag in progress
    Aiming,
    /// One arrow in the air
    Flying,
    /// Arrow landed; scoring in progress
    Resolving,
    /// No shots left; only `restart` does anything
    GameOver,
}

/// Target face geometry for drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetGeometry {
    pub center: Vec2,
    pub radius: f32,
}

impl TargetGeometry {
    /// Ring radii, outermost first; the outer ring is the face edge
    pub fn rings(&self) -> [f32; 5] {
        let mut rings = TARGET_RING_RADII;
        rings[0] = self.radius;
        rings
    }
}

/// Active drag as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimView {
    pub start: Vec2,
    pub end: Vec2,
    pub power: f32,
    /// Radians
    pub angle: f32,
    pub indicator_radius: f32,
}

/// Read-only view of the session for one frame
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub phase: GamePhase,
    pub wind: Wind,
    pub wind_label: WindLabel,
    pub aim: Option<AimView>,
    pub arrow: Option<&'a Arrow>,
    pub trail: &'a Trail,
    pub bow_anchor: Vec2,
    pub target: TargetGeometry,
    pub scoreboard: &'a Scoreboard,
}

/// A single-player archery round
pub struct GameSession<R = Pcg32> {
    config: GameConfig,
    rng: R,
    wind: Wind,
    aim: AimGesture,
    arrow: Option<Arrow>,
    trail: Trail,
    scoreboard: Scoreboard,
    phase: GamePhase,
    events: Vec<GameEvent>,
}

impl GameSession<Pcg32> {
    /// Session driven by a seeded PCG generator
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        log::info!("Starting session with seed {}", seed);
        Self::new(config, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> GameSession<R> {
    /// New session; rolls the first wind
    pub fn new(config: GameConfig, mut rng: R) -> Self {
        let wind = Wind::random(&mut rng);
        let mut session = Self {
            aim: AimGesture::new(config.drag_full_power, config.fire_threshold),
            trail: Trail::new(config.trail_length),
            scoreboard: Scoreboard::new(config.shots_per_round),
            config,
            rng,
            wind,
            arrow: None,
            phase: GamePhase::Ready,
            events: Vec::new(),
        };
        if session.scoreboard.game_over {
            session.phase = GamePhase::GameOver;
        }
        session.push_wind_changed();
        session.push_score_changed();
        session
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn wind(&self) -> Wind {
        self.wind
    }

    pub fn aim(&self) -> &AimGesture {
        &self.aim
    }

    pub fn arrow(&self) -> Option<&Arrow> {
        self.arrow.as_ref()
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Take all queued events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Start (or restart) a drag. Ignored while an arrow flies or after the
    /// round ends.
    pub fn aim_begin(&mut self, pos: Vec2) {
        match self.phase {
            GamePhase::Ready | GamePhase::Aiming => {
                self.aim.begin(pos);
                self.phase = GamePhase::Aiming;
            }
            _ => {}
        }
    }

    /// Move the drag end. Ignored unless aiming.
    pub fn aim_update(&mut self, pos: Vec2) {
        if self.phase == GamePhase::Aiming {
            self.aim.update(pos);
        }
    }

    /// Release the drag and, if strong enough, fire with the bow selected by
    /// `bow_mode_id`. Unknown ids fall back to the standard bow.
    /// Returns true if an arrow was loosed.
    pub fn aim_release(&mut self, pos: Vec2, bow_mode_id: &str) -> bool {
        if self.phase != GamePhase::Aiming {
            return false;
        }

        let Some(cmd) = self.aim.release(pos) else {
            log::debug!("Release below fire threshold - no shot");
            self.phase = GamePhase::Ready;
            return false;
        };

        let bow = BowModeTable::resolve(bow_mode_id);
        let arrow = trajectory::spawn(&cmd, &bow, &self.wind, &self.config, &mut self.rng);
        log::debug!(
            "Fired shot {} with {} bow (power {:.2})",
            self.scoreboard.initial_shots - self.scoreboard.shots_remaining + 1,
            bow.mode,
            cmd.power
        );

        self.arrow = Some(arrow);
        self.trail.clear();
        self.phase = GamePhase::Flying;
        self.events.push(GameEvent::Fire { mode: bow.mode });
        true
    }

    /// Advance the arrow in flight by one tick. Returns the tick outcome, or
    /// None when nothing is flying.
    pub fn tick(&mut self) -> Option<TickOutcome> {
        if self.phase != GamePhase::Flying {
            return None;
        }

        let Some(arrow) = self.arrow.as_mut() else {
            log::warn!("Flying phase without an arrow - back to ready");
            self.phase = GamePhase::Ready;
            return None;
        };

        let outcome = trajectory::tick(arrow, &mut self.trail, &self.config);
        if outcome != TickOutcome::Flying {
            self.resolve(outcome);
        }
        Some(outcome)
    }

    /// Tick until the current arrow resolves. Flight is bounded by the arrow
    /// life, so this always terminates.
    pub fn settle(&mut self) -> Option<TickOutcome> {
        let max_ticks = self.config.arrow_life_ticks.max(1);
        let mut last = None;
        for _ in 0..max_ticks {
            match self.tick() {
                Some(TickOutcome::Flying) => continue,
                outcome => {
                    last = outcome;
                    break;
                }
            }
        }
        last
    }

    /// New round: clear score, history and arrow, reroll the wind
    pub fn restart(&mut self) {
        self.scoreboard.reset();
        self.arrow = None;
        self.trail.clear();
        self.aim.cancel();
        self.wind.regenerate(&mut self.rng);
        self.phase = if self.scoreboard.game_over {
            GamePhase::GameOver
        } else {
            GamePhase::Ready
        };
        log::info!("Session restarted");

        self.push_wind_changed();
        self.push_score_changed();
    }

    /// Renderer view of the current frame
    pub fn snapshot(&self) -> Snapshot<'_> {
        let aim = self.aim.active.then(|| AimView {
            start: self.aim.start,
            end: self.aim.end,
            power: self.aim.power(),
            angle: self.aim.angle(),
            indicator_radius: self.aim.indicator_radius(),
        });

        Snapshot {
            phase: self.phase,
            wind: self.wind,
            wind_label: self.wind.label(),
            aim,
            arrow: self.arrow.as_ref(),
            trail: &self.trail,
            bow_anchor: self.config.bow_anchor,
            target: TargetGeometry {
                center: self.config.target_center,
                radius: self.config.target_radius,
            },
            scoreboard: &self.scoreboard,
        }
    }

    /// Score a finished flight and move on
    fn resolve(&mut self, outcome: TickOutcome) {
        self.phase = GamePhase::Resolving;

        let mode = self.arrow.take().map(|a| a.mode).unwrap_or(BowMode::Standard);
        self.trail.clear();

        let (score, hit_type) = match outcome {
            TickOutcome::Hit(distance) => {
                let resolved = resolve_hit(distance);
                self.events.push(GameEvent::Hit { hit_type: resolved.1 });
                log::debug!("Hit at {:.1} from center: {} ({} pts)", distance, resolved.1, resolved.0);
                resolved
            }
            TickOutcome::Miss | TickOutcome::Flying => {
                self.events.push(GameEvent::Miss);
                log::debug!("Miss");
                resolve_miss()
            }
        };

        if let Some(record) = self.scoreboard.record_shot(score, hit_type, mode).cloned() {
            self.events.push(GameEvent::ShotRecorded { record });
        }
        self.push_score_changed();

        if self.scoreboard.game_over {
            self.aim.cancel();
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver {
                final_score: self.scoreboard.total_score,
                rating: self.scoreboard.rating(),
            });
        } else {
            self.phase = GamePhase::Ready;
        }
    }

    fn push_wind_changed(&mut self) {
        self.events.push(GameEvent::WindChanged {
            wind: self.wind,
            label: self.wind.label().to_string(),
        });
    }

    fn push_score_changed(&mut self) {
        self.events.push(GameEvent::ScoreChanged {
            total_score: self.scoreboard.total_score,
            shots_remaining: self.scoreboard.shots_remaining,
        });
    }
}
