//! SkiFree entry point
//!
//! Headless native runner: plays demo runs with the autopilot and reports
//! the leaderboard. A graphical front-end drives the same `sim` API.
//!
//! Usage: `skifree [SETTINGS.json] [--runs N] [--seed S] [--ticks T]`

use std::time::{SystemTime, UNIX_EPOCH};

use skifree::sim::{GameEvent, Session, demo_input, tick};
use skifree::{HighScores, ScoreSink, Settings, Viewport};

/// Give up on a run that never crashes after this many ticks (5 minutes at 30 Hz)
const DEFAULT_MAX_TICKS: u64 = 5 * 60 * 30;

struct Options {
    settings: Settings,
    runs: u32,
    seed: u64,
    max_ticks: u64,
}

fn parse_args() -> Options {
    let mut options = Options {
        settings: Settings::default(),
        runs: 3,
        seed: SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0),
        max_ticks: DEFAULT_MAX_TICKS,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--runs" => {
                if let Some(n) = args.next().and_then(|v| v.parse().ok()) {
                    options.runs = n;
                }
            }
            "--seed" => {
                if let Some(s) = args.next().and_then(|v| v.parse().ok()) {
                    options.seed = s;
                }
            }
            "--ticks" => {
                if let Some(t) = args.next().and_then(|v| v.parse().ok()) {
                    options.max_ticks = t;
                }
            }
            path => options.settings = Settings::load(path),
        }
    }

    options
}

fn main() {
    env_logger::init();
    log::info!("SkiFree (headless) starting...");

    let options = parse_args();
    log::info!(
        "{} run(s), seed {}, {} Hz ({:.4}s per tick)",
        options.runs,
        options.seed,
        options.settings.tick_hz,
        options.settings.tick_seconds()
    );
    let mut scores = HighScores::new();
    let mut session = Session::new(options.seed, Viewport::default(), options.settings)
        .with_player("demo");

    for run in 1..=options.runs {
        if run > 1 {
            session.restart();
        }

        let mut flags = 0u32;
        while !session.is_over() && session.time_ticks < options.max_ticks {
            let input = demo_input(&session);
            tick(&mut session, &input);
            flags += session
                .events
                .iter()
                .filter(|e| matches!(e, GameEvent::FlagCollected { .. }))
                .count() as u32;
        }

        log::info!(
            "Run {}: {} ticks, {} flags, score {}, {:?}",
            run,
            session.time_ticks,
            flags,
            session.score,
            session.phase
        );
        scores.submit(&session.player, session.score);
    }

    println!("Leaderboard (seed {}):", options.seed);
    for (rank, entry) in scores.entries.iter().enumerate() {
        println!("{:>2}. {:<12} {}", rank + 1, entry.player, entry.score);
    }
    if scores.is_empty() {
        println!("    (no scoring runs)");
    }

    match serde_json::to_string_pretty(&session.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(err) => log::error!("Could not serialize final snapshot: {}", err),
    }
}
