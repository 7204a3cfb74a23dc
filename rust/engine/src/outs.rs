use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardSet};
use crate::errors::EvalError;
use crate::hand::{evaluate, Category};

/// What counts as an out.
///
/// Conventional player usage counts category upgrades only; the other two
/// modes are caller-selectable.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum OutsPolicy {
    /// Any category upgrade counts; a better tie-break within the same
    /// category does not. The default.
    CategoryUpgrade,
    /// Any strictly stronger evaluation counts, tie-break improvements
    /// included.
    AnyImprovement,
    /// Only cards reaching at least the named category count, and only when
    /// the baseline is still below it (a made target hand has no outs to
    /// itself).
    AtLeast(Category),
}

/// Enumerates outs under the default [`OutsPolicy::CategoryUpgrade`] policy.
pub fn enumerate_outs(current: &CardSet, unseen: &[Card]) -> Result<Vec<Card>, EvalError> {
    enumerate_outs_with(current, unseen, OutsPolicy::CategoryUpgrade)
}

/// Enumerates every unseen card that improves the hand per `policy`.
///
/// Exhaustive simulate-and-classify: each candidate is added to the current
/// set and the result evaluated from scratch, so no draw pattern can be
/// missed or double-counted. Candidates already in `current` are skipped;
/// `unseen` is expected to be the complement (see [`CardSet::unseen`]).
///
/// # Errors
///
/// [`EvalError::InvalidCardSetSize`] when the hand is already complete
/// (7 cards); [`EvalError::InsufficientCards`] below 5 cards, from the
/// baseline evaluation.
pub fn enumerate_outs_with(
    current: &CardSet,
    unseen: &[Card],
    policy: OutsPolicy,
) -> Result<Vec<Card>, EvalError> {
    if current.len() >= 7 {
        return Err(EvalError::InvalidCardSetSize { len: current.len() });
    }
    let baseline = evaluate(current)?;

    let mut outs = Vec::new();
    for &card in unseen {
        if current.contains(card) {
            continue;
        }
        let hypothetical = evaluate(&current.with_unseen_card(card))?;
        let improves = match policy {
            OutsPolicy::CategoryUpgrade => hypothetical.category > baseline.category,
            OutsPolicy::AnyImprovement => hypothetical > baseline,
            OutsPolicy::AtLeast(target) => {
                baseline.category < target && hypothetical.category >= target
            }
        };
        if improves {
            outs.push(card);
        }
    }
    Ok(outs)
}

/// Converts an outs count into a bounded equity proxy:
/// `min(|outs| / (52 - |current|), 1)`.
///
/// # Errors
///
/// [`EvalError::InvalidCardSetSize`] when no unseen cards remain.
pub fn estimate_potential(outs: &[Card], current: &CardSet) -> Result<f64, EvalError> {
    if current.len() >= 52 {
        return Err(EvalError::InvalidCardSetSize { len: current.len() });
    }
    let unseen_count = (52 - current.len()) as f64;
    Ok((outs.len() as f64 / unseen_count).min(1.0))
}
