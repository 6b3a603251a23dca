//! Roll a Turn
//!
//! Plays one turn: roll until the die shows something other than a six.
//!
//! Key concepts:
//! - The turn is an enum state machine: `WaitingToRoll` or `Done(result)`
//! - The die is injected, seeded from the config for reproducible runs
//! - A checkpoint of the finished turn can be written and read back
//!
//! Run with: cargo run --example roll_turn [config.json]
//! Set RUST_LOG=debug to see every roll.

use reroll::config::TurnConfig;
use reroll::core::State;
use reroll::turn::play_turn;
use reroll::TurnCheckpoint;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => TurnConfig::load(path)?,
        None => TurnConfig::default(),
    };

    println!("=== Roll a Turn ===\n");

    let turn = play_turn(config.die(), &config)?;

    for roll in turn.history().rolls() {
        let note = if roll.face.is_reroll() { "roll again" } else { "stop" };
        println!("  Roll {}: {} ({})", roll.attempt, roll.face, note);
    }
    println!("\nFinal state: {} ({})", turn.current_state(), turn.current_state().name());

    let json = turn.checkpoint().to_json()?;
    let restored = TurnCheckpoint::from_json(&json)?;
    println!("Checkpoint {} restores {} roll(s)", restored.id, restored.history.len());

    println!("\n=== Turn Complete ===");
    Ok(())
}
