use crate::hand::HandEvaluation;

/// Spacing between category base values. The largest possible tie-break sum
/// is 14 * (15^4 + 15^3 + 15^2 + 15 + 1) = 759_374, so no tie-break can
/// cross a category boundary.
const CATEGORY_STEP: u64 = 1_000_000;

/// Per-position tie-break weights, most significant first. Base-15
/// positional encoding: every tie-break element is at most 14, so the scalar
/// ordering matches lexicographic tie-break comparison exactly.
const TIEBREAK_WEIGHTS: [u64; 5] = [50_625, 3_375, 225, 15, 1];

/// Maps an evaluation to a single scalar whose ordering agrees with
/// [`HandEvaluation`]'s lexicographic ordering for all inputs.
pub fn score(eval: &HandEvaluation) -> u64 {
    let mut s = eval.category as u64 * CATEGORY_STEP;
    for (k, w) in eval.tiebreak.iter().zip(TIEBREAK_WEIGHTS) {
        s += *k as u64 * w;
    }
    s
}
