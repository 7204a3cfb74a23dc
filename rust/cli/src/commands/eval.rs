//! Hand evaluation command handler.
//!
//! Classifies 5-7 cards, prints the category, tie-break key, and scalar
//! score, and optionally appends an evaluation record to a JSONL log.

use std::io::Write;
use std::path::Path;

use crate::error::CliError;
use flopcore_engine::hand::evaluate;
use flopcore_engine::logger::{EvalLogger, EvalRecord};
use flopcore_engine::score::score;

use super::parse_cards;

/// Handle the eval command.
///
/// # Arguments
///
/// * `cards` - 5-7 compact card strings (hole plus known board)
/// * `json` - emit a JSON object instead of text lines
/// * `log` - optional JSONL file to append the evaluation record to
/// * `out` - output stream for command results
pub fn handle_eval_command(
    cards: &[String],
    json: bool,
    log: Option<&Path>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let set = parse_cards(cards)?;
    let evaluation = evaluate(&set)?;
    let s = score(&evaluation);

    if json {
        let v = serde_json::json!({
            "cards": set.cards().iter().map(|c| c.to_string()).collect::<Vec<_>>(),
            "category": evaluation.label(),
            "tiebreak": evaluation.tiebreak,
            "score": s,
        });
        let text = serde_json::to_string_pretty(&v).map_err(std::io::Error::other)?;
        writeln!(out, "{}", text)?;
    } else {
        writeln!(out, "Category: {:?}", evaluation.label())?;
        let key: Vec<String> = evaluation
            .tiebreak
            .iter()
            .take_while(|&&k| k > 0)
            .map(|k| k.to_string())
            .collect();
        writeln!(out, "Tie-break: {}", key.join(" "))?;
        writeln!(out, "Score: {}", s)?;
    }

    if let Some(path) = log {
        let mut logger = EvalLogger::append(path)?;
        logger.write(&EvalRecord {
            cards: set.cards().to_vec(),
            evaluation,
            score: s,
            outs: None,
            potential: None,
            ts: None,
            meta: None,
        })?;
    }
    Ok(())
}
