//! Scoundrel console game.
//!
//! Usage:
//!   scoundrel                          # Play interactively
//!   scoundrel --seed 42                # Reproducible dungeon
//!   scoundrel --auto greedy --games 500

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use rust_scoundrel::input::{parse_defer_response, parse_selection};
use rust_scoundrel::{
    play_out, Action, GameConfig, GameEvent, GameState, GreedyPolicy, Phase, Policy, RandomPolicy, RulesEngine,
    ScoundrelGame, Slot,
};

/// Scoundrel: a single-player dungeon crawl with a deck of cards
#[derive(Parser, Debug)]
#[command(name = "scoundrel")]
#[command(author, version, about = "Scoundrel - Escape the dungeon!", long_about = None)]
struct Args {
    /// RNG seed for a reproducible dungeon
    #[arg(short = 's', long = "seed", env = "SCOUNDREL_SEED")]
    seed: Option<u64>,

    /// Let a policy play instead of reading stdin
    #[arg(short = 'a', long = "auto", value_enum)]
    auto: Option<PolicyKind>,

    /// Number of games to simulate with --auto
    #[arg(short = 'n', long = "games", default_value_t = 1)]
    games: u32,

    /// Log filter used when RUST_LOG is unset
    #[arg(long = "log-level", default_value = "warn")]
    log_level: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PolicyKind {
    Random,
    Greedy,
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(&args.log_level)?;

    match args.auto {
        Some(kind) => simulate(kind, args.seed, args.games),
        None => play(args.seed),
    }
}

/// Log to stderr so stdout stays the game transcript.
fn setup_logging(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).with_context(|| format!("invalid log level {level:?}"))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

// =============================================================================
// Interactive play
// =============================================================================

fn play(seed: Option<u64>) -> Result<()> {
    let config = seed.map_or_else(GameConfig::new, |s| GameConfig::new().with_seed(s));
    let game = ScoundrelGame::new(config);
    let (mut state, events) = game.new_game();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Welcome to the Scoundrel Dungeon!");
    println!("(seed {})", state.seed());
    narrate(&events);

    loop {
        let action = match state.phase() {
            Phase::Finished(_) => break,
            Phase::AwaitingDeferral => {
                show_room(&state);
                show_status(&state);
                prompt("Do you want to defer this room? (y/n): ")?;
                if ask_defer(&mut lines)? {
                    Action::Defer
                } else {
                    Action::Face
                }
            }
            Phase::Resolving => {
                show_room(&state);
                Action::Resolve(ask_selection(&state, &mut lines)?)
            }
        };

        match game.apply_action(&mut state, action) {
            Ok(events) => {
                narrate(&events);
                if matches!(action, Action::Resolve(_)) && !state.is_over() {
                    show_status(&state);
                }
            }
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}

fn next_line<I>(lines: &mut I) -> Result<String>
where
    I: Iterator<Item = io::Result<String>>,
{
    match lines.next() {
        Some(line) => Ok(line.context("failed to read input")?),
        None => bail!("input closed before the game ended"),
    }
}

fn ask_defer<I>(lines: &mut I) -> Result<bool>
where
    I: Iterator<Item = io::Result<String>>,
{
    loop {
        match parse_defer_response(&next_line(lines)?) {
            Ok(answer) => return Ok(answer),
            Err(_) => prompt("Invalid input! Please enter 'y' or 'n': ")?,
        }
    }
}

fn ask_selection<I>(state: &GameState, lines: &mut I) -> Result<Slot>
where
    I: Iterator<Item = io::Result<String>>,
{
    let resolution = state.resolution().context("no room to resolve")?;
    loop {
        prompt(&format!("\nChoose a card to resolve (1-{}): ", resolution.room().len()))?;
        match parse_selection(&next_line(lines)?, resolution) {
            Ok(slot) => return Ok(slot),
            Err(err) => println!("{err}"),
        }
    }
}

fn prompt(text: &str) -> Result<()> {
    print!("{text}");
    io::stdout().flush().context("failed to flush stdout")
}

fn narrate(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::RoomEntered { .. } | GameEvent::MustFace | GameEvent::GameOver { .. } => {
                println!("\n{event}")
            }
            GameEvent::Resolved { effect, .. } if effect.health_delta() != 0 => {
                println!("{event} ({:+} HP)", effect.health_delta())
            }
            _ => println!("{event}"),
        }
    }
}

fn show_room(state: &GameState) {
    let Some(resolution) = state.resolution() else {
        return;
    };
    for (slot, card) in resolution.room().slots() {
        let done = if resolution.is_resolved(slot) { " (resolved)" } else { "" };
        println!("{}) {} - {}{}", slot, card, card.category(), done);
    }
}

fn show_status(state: &GameState) {
    println!("\n--- Player Status ---");
    println!("{}", state.player());
    println!("Cards left in the dungeon: {}", state.deck().len());
}

// =============================================================================
// Simulation
// =============================================================================

fn simulate(kind: PolicyKind, seed: Option<u64>, games: u32) -> Result<()> {
    let mut wins = 0u32;
    let mut rooms = 0u64;
    let mut health_on_win = 0i64;

    for index in 0..games {
        let game_seed = match seed {
            Some(seed) => seed.wrapping_add(u64::from(index)),
            None => rand::random(),
        };
        let game = ScoundrelGame::new(GameConfig::new().with_seed(game_seed));
        let (mut state, _) = game.new_game();

        let mut policy: Box<dyn Policy> = match kind {
            PolicyKind::Random => Box::new(RandomPolicy::new(game_seed.rotate_left(17))),
            PolicyKind::Greedy => Box::new(GreedyPolicy::new()),
        };
        let result = play_out(&game, &mut state, policy.as_mut())
            .with_context(|| format!("policy made an illegal move in game with seed {game_seed}"))?;

        tracing::info!(game = index, seed = game_seed, ?result, rooms = state.room_number(), "game finished");
        rooms += u64::from(state.room_number());
        if result.is_win() {
            wins += 1;
            health_on_win += i64::from(state.player().health());
        }
    }

    println!("Policy:         {kind:?}");
    println!("Games:          {games}");
    if games > 0 {
        println!("Wins:           {} ({:.1}%)", wins, 100.0 * f64::from(wins) / f64::from(games));
        println!("Avg rooms:      {:.1}", rooms as f64 / f64::from(games));
    }
    if wins > 0 {
        println!("Avg HP on win:  {:.1}", health_on_win as f64 / f64::from(wins));
    }
    Ok(())
}
