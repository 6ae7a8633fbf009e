//! Perft baseline runner.
//!
//! Usage:
//! `cargo run --release --bin perft_baseline`
//! `cargo run --release --bin perft_baseline -- --depth 5 --playouts 100`
//!
//! Set `RUST_LOG=debug` to see rejected moves, `trace` for every refresh.

use chrono::Utc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use plum_rules::chess_errors::RulesError;
use plum_rules::game_state::game_state::GameState;
use plum_rules::move_generation::perft::perft;
use plum_rules::utils::random_playout::{rewind, seeded_playout};

fn parse_arg_u8(flag: &str, default: u8) -> u8 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u8>() {
                return v.max(1);
            }
        }
    }
    default
}

fn run_perft(depth: u8) -> Result<(), RulesError> {
    let mut game = GameState::new_game();
    for d in 1..=depth {
        let started = Utc::now();
        let counts = perft(&mut game, d)?;
        let elapsed_ms = (Utc::now() - started).num_milliseconds().max(1);
        info!(
            depth = d,
            nodes = counts.nodes,
            captures = counts.captures,
            en_passant = counts.en_passant,
            castles = counts.castles,
            promotions = counts.promotions,
            checks = counts.checks,
            checkmates = counts.checkmates,
            elapsed_ms,
            nps = counts.nodes * 1000 / elapsed_ms as u64,
            "perft startpos"
        );
    }
    Ok(())
}

fn run_playouts(count: u8) -> Result<(), RulesError> {
    let started = Utc::now();
    let mut plies = 0usize;
    let start = GameState::new_game();

    for seed in 0..u64::from(count) {
        let mut game = start.clone();
        let playout = seeded_playout(&mut game, seed, 400);
        plies += playout.records.len();
        info!(seed, plies = playout.records.len(), end = ?playout.end, "playout finished");
        rewind(&mut game, &playout)?;
    }

    let elapsed_ms = (Utc::now() - started).num_milliseconds();
    info!(playouts = count, plies, elapsed_ms, "playouts complete");
    Ok(())
}

fn main() -> Result<(), RulesError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let depth = parse_arg_u8("--depth", 4);
    let playouts = parse_arg_u8("--playouts", 10);
    info!(depth, playouts, started_at = %Utc::now().to_rfc3339(), "perft baseline run");

    run_perft(depth)?;
    run_playouts(playouts)
}
