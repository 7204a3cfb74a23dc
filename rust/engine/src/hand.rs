use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{CardSet, Rank};
use crate::errors::EvalError;

/// Hand categories ordered weakest to strongest.
///
/// [`evaluate`] never returns `RoyalFlush` directly: an ace-high straight
/// flush carries Ace in its tie-break key and already outranks every other
/// straight flush. [`HandEvaluation::label`] refines it for display.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

/// The best 5-card hand obtainable from a card set: a category plus an
/// ordered tie-break key.
///
/// Ordering is lexicographic — category first, then the tie-break ranks
/// high-to-low — and forms a strict total order consistent with poker hand
/// strength. Unused trailing tie-break slots are zero.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandEvaluation {
    pub category: Category,
    /// Tie-break ranks, most significant first (e.g. trips rank before
    /// kickers for three of a kind).
    pub tiebreak: [u8; 5],
}

impl HandEvaluation {
    /// Display-level category: maps an ace-high straight flush to
    /// [`Category::RoyalFlush`], everything else to its own category.
    pub fn label(&self) -> Category {
        if self.category == Category::StraightFlush && self.tiebreak[0] == Rank::Ace.value() {
            Category::RoyalFlush
        } else {
            self.category
        }
    }
}

/// Compares two evaluations; equivalent to `a.cmp(b)`.
pub fn compare(a: &HandEvaluation, b: &HandEvaluation) -> Ordering {
    a.cmp(b)
}

/// Classifies the best 5-card hand in a set of 5 to 7 cards.
///
/// Checks run in strength order over rank/suit multiplicities and the first
/// match wins; a stronger category always also satisfies the weaker
/// predicates, so returning immediately is correct.
///
/// # Errors
///
/// [`EvalError::InsufficientCards`] below 5 cards,
/// [`EvalError::InvalidCardSetSize`] above 7.
pub fn evaluate(cards: &CardSet) -> Result<HandEvaluation, EvalError> {
    if cards.len() < 5 {
        return Err(EvalError::InsufficientCards {
            required: 5,
            actual: cards.len(),
        });
    }
    if cards.len() > 7 {
        return Err(EvalError::InvalidCardSetSize { len: cards.len() });
    }

    let mut rank_counts = [0u8; 15]; // indices 2..=14 used
    let mut suit_counts = [0u8; 4];
    let mut suit_masks = [0u16; 4];
    let mut rank_mask: u16 = 0;
    for &c in cards.cards() {
        let r = c.rank.value();
        rank_counts[r as usize] += 1;
        rank_mask |= 1 << r;
        let s = c.suit.index();
        suit_counts[s] += 1;
        suit_masks[s] |= 1 << r;
    }

    // At most one suit can reach 5 cards out of 7.
    let flush_suit = (0..4).find(|&s| suit_counts[s] >= 5);

    // Straight flush
    if let Some(s) = flush_suit {
        if let Some(high) = straight_high(suit_masks[s]) {
            return Ok(HandEvaluation {
                category: Category::StraightFlush,
                tiebreak: [high, 0, 0, 0, 0],
            });
        }
    }

    // Four of a kind: quad rank, then highest remaining kicker
    if let Some(quad) = highest_with_count(&rank_counts, 4) {
        let kicker = ranks_desc(&rank_counts)
            .into_iter()
            .find(|&r| r != quad)
            .unwrap_or(0);
        return Ok(HandEvaluation {
            category: Category::FourOfAKind,
            tiebreak: [quad, kicker, 0, 0, 0],
        });
    }

    // Full house: trips plus a distinct pair; a second trips acts as the pair
    let trips: Vec<u8> = ranks_with_count_desc(&rank_counts, 3);
    let pairs: Vec<u8> = ranks_with_count_desc(&rank_counts, 2);
    if let Some(&t) = trips.first() {
        let pair = trips.get(1).copied().or_else(|| pairs.first().copied());
        if let Some(p) = pair {
            return Ok(HandEvaluation {
                category: Category::FullHouse,
                tiebreak: [t, p, 0, 0, 0],
            });
        }
    }

    // Flush: 5 highest ranks of the suit, descending
    if let Some(s) = flush_suit {
        let mut ranks: Vec<u8> = (2..=14).rev().filter(|r| suit_masks[s] & (1 << r) != 0).collect();
        ranks.truncate(5);
        let mut k = [0u8; 5];
        k.copy_from_slice(&ranks);
        return Ok(HandEvaluation {
            category: Category::Flush,
            tiebreak: k,
        });
    }

    // Straight
    if let Some(high) = straight_high(rank_mask) {
        return Ok(HandEvaluation {
            category: Category::Straight,
            tiebreak: [high, 0, 0, 0, 0],
        });
    }

    // Three of a kind: trips rank, then two highest kickers
    if let Some(&t) = trips.first() {
        let mut k = [t, 0, 0, 0, 0];
        for (i, r) in ranks_desc(&rank_counts).into_iter().filter(|&r| r != t).take(2).enumerate() {
            k[i + 1] = r;
        }
        return Ok(HandEvaluation {
            category: Category::ThreeOfAKind,
            tiebreak: k,
        });
    }

    // Two pair: two highest pairs, then the best leftover rank. With three
    // pairs in 7 cards the third pair's rank competes for the kicker.
    if pairs.len() >= 2 {
        let (high, low) = (pairs[0], pairs[1]);
        let kicker = ranks_desc(&rank_counts)
            .into_iter()
            .find(|&r| r != high && r != low)
            .unwrap_or(0);
        return Ok(HandEvaluation {
            category: Category::TwoPair,
            tiebreak: [high, low, kicker, 0, 0],
        });
    }

    // One pair: pair rank, then three highest kickers
    if let Some(&p) = pairs.first() {
        let mut k = [p, 0, 0, 0, 0];
        for (i, r) in ranks_desc(&rank_counts).into_iter().filter(|&r| r != p).take(3).enumerate() {
            k[i + 1] = r;
        }
        return Ok(HandEvaluation {
            category: Category::OnePair,
            tiebreak: k,
        });
    }

    // High card: the 5 highest ranks, descending
    let mut k = [0u8; 5];
    for (i, r) in ranks_desc(&rank_counts).into_iter().take(5).enumerate() {
        k[i] = r;
    }
    Ok(HandEvaluation {
        category: Category::HighCard,
        tiebreak: k,
    })
}

/// Top rank of the best straight in a rank bitmask, or `None`. Ace counts
/// both high and low, so the wheel reports 5.
fn straight_high(mask: u16) -> Option<u8> {
    let mut m = mask;
    if m & (1 << 14) != 0 {
        m |= 1 << 1;
    }
    for high in (5..=14u8).rev() {
        let window = 0b11111u16 << (high - 4);
        if m & window == window {
            return Some(high);
        }
    }
    None
}

fn highest_with_count(rank_counts: &[u8; 15], count: u8) -> Option<u8> {
    (2..=14u8).rev().find(|&r| rank_counts[r as usize] == count)
}

fn ranks_with_count_desc(rank_counts: &[u8; 15], count: u8) -> Vec<u8> {
    (2..=14u8)
        .rev()
        .filter(|&r| rank_counts[r as usize] == count)
        .collect()
}

/// Every distinct rank present, descending.
fn ranks_desc(rank_counts: &[u8; 15]) -> Vec<u8> {
    (2..=14u8)
        .rev()
        .filter(|&r| rank_counts[r as usize] > 0)
        .collect()
}
