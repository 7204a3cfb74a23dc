//! Deal command handler for sample hand dealing and evaluation.
//!
//! Deals two hole cards and a board up to the requested street with the
//! engine's deterministic deck, then evaluates the combined hand. Supports
//! optional seeding for reproducibility; without a seed, one is drawn at
//! random and echoed so the deal can be replayed.

use std::io::Write;

use crate::cli::StreetArg;
use crate::config;
use crate::error::CliError;
use flopcore_engine::deck::Deck;
use flopcore_engine::hand::evaluate;
use flopcore_engine::score::score;

/// Handle the deal command.
///
/// Seed precedence: `--seed` flag, then configured seed, then random.
pub fn handle_deal_command(
    seed: Option<u64>,
    street: StreetArg,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let base_seed = match seed {
        Some(s) => s,
        None => match config::load().ok().and_then(|c| c.seed) {
            Some(s) => s,
            None => rand::random(),
        },
    };

    let mut deck = Deck::new_with_seed(base_seed);
    deck.shuffle();
    let hand = deck
        .deal_sample(street.to_street())
        .ok_or_else(|| CliError::Internal("fresh deck ran out of cards".into()))?;

    writeln!(out, "Seed: {}", base_seed)?;
    writeln!(out, "Hole: {} {}", hand.hole[0], hand.hole[1])?;
    let board: Vec<String> = hand.board.iter().map(|c| c.to_string()).collect();
    writeln!(out, "Board: {}", board.join(" "))?;

    let cards = hand.card_set()?;
    let evaluation = evaluate(&cards)?;
    writeln!(out, "Hand: {:?}", evaluation.label())?;
    writeln!(out, "Score: {}", score(&evaluation))?;
    Ok(())
}
