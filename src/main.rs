//! Archery entry point
//!
//! Headless driver: plays one scripted round against the simulation and
//! prints what a UI would show.
//!
//! Usage: `archery [config.json] [seed]`

use archery::GameConfig;
use archery::sim::{BowMode, GameEvent, GameSession};
use glam::Vec2;

/// Scripted drags (start, end), one per shot
const SCRIPT: [((f32, f32), (f32, f32)); 3] = [
    ((200.0, 300.0), (280.0, 262.0)),
    ((200.0, 300.0), (270.0, 268.0)),
    ((200.0, 300.0), (300.0, 255.0)),
];

fn main() {
    env_logger::init();
    log::info!("Archery (native) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => GameConfig::load_or_default(path),
        None => GameConfig::default(),
    };
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(clock_seed);

    let mut session = GameSession::with_seed(config, seed);
    print_events(session.drain_events());

    let modes = BowMode::ALL.iter().cycle();
    for (&(start, end), mode) in SCRIPT.iter().zip(modes) {
        if session.is_game_over() {
            break;
        }
        session.aim_begin(Vec2::from(start));
        session.aim_update(Vec2::from(end));
        if !session.aim_release(Vec2::from(end), mode.id()) {
            println!("(drag too short, no shot)");
            continue;
        }
        session.settle();
        print_events(session.drain_events());
    }

    let board = session.scoreboard();
    println!("\nFinal score: {} points", board.total_score);
    for record in &board.history {
        println!("  {}", record.summary());
    }
}

/// Print drained events, audio cues on their own channel
fn print_events(events: Vec<GameEvent>) {
    for event in events {
        let channel = if event.is_audio_cue() { "sfx" } else { "ui" };
        let line = match event {
            GameEvent::Fire { mode } => format!("twang ({} bow)", mode),
            GameEvent::Hit { hit_type } => format!("thunk: {}", hit_type),
            GameEvent::Miss => "whoosh: miss".to_string(),
            GameEvent::ScoreChanged {
                total_score,
                shots_remaining,
            } => format!("Score: {}  Shots: {}", total_score, shots_remaining),
            GameEvent::WindChanged { label, .. } => format!("Wind: {}", label),
            GameEvent::ShotRecorded { record } => record.summary(),
            GameEvent::GameOver {
                final_score,
                rating,
            } => format!("Game Over! Final Score: {} points - {}", final_score, rating.message()),
        };
        println!("[{}] {}", channel, line);
    }
}

/// Seed from the wall clock when none is given
fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
