//! Outs enumeration command handler.
//!
//! Combines hole and board cards, enumerates every unseen card that improves
//! the hand under the selected policy, and reports the potential score.

use std::io::Write;

use crate::cli::{PolicyArg, TargetArg};
use crate::config;
use crate::error::CliError;
use flopcore_engine::outs::{enumerate_outs_with, estimate_potential, OutsPolicy};

use super::parse_cards;

/// Handle the outs command.
///
/// Policy resolution: an explicit `--target` wins, then `--policy`, then the
/// configured default.
pub fn handle_outs_command(
    hole: &[String],
    board: &[String],
    policy: Option<PolicyArg>,
    target: Option<TargetArg>,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut symbols = hole.to_vec();
    symbols.extend(board.iter().cloned());
    let current = parse_cards(&symbols)?;

    let policy = resolve_policy(policy, target)?;
    let outs = enumerate_outs_with(&current, &current.unseen(), policy)?;
    let potential = estimate_potential(&outs, &current)?;

    if json {
        let v = serde_json::json!({
            "current": current.cards().iter().map(|c| c.to_string()).collect::<Vec<_>>(),
            "policy": policy,
            "outs": outs.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
            "count": outs.len(),
            "potential": potential,
        });
        let text = serde_json::to_string_pretty(&v).map_err(std::io::Error::other)?;
        writeln!(out, "{}", text)?;
    } else {
        let listed: Vec<String> = outs.iter().map(|c| c.to_string()).collect();
        writeln!(out, "Outs ({}): {}", outs.len(), listed.join(" "))?;
        writeln!(out, "Potential: {:.4}", potential)?;
    }
    Ok(())
}

fn resolve_policy(
    policy: Option<PolicyArg>,
    target: Option<TargetArg>,
) -> Result<OutsPolicy, CliError> {
    if let Some(t) = target {
        return Ok(OutsPolicy::AtLeast(t.to_category()));
    }
    if let Some(p) = policy {
        return Ok(p.to_policy());
    }
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    Ok(match cfg.policy.as_str() {
        "any" => OutsPolicy::AnyImprovement,
        _ => OutsPolicy::CategoryUpgrade,
    })
}
