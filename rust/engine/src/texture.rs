use serde::{Deserialize, Serialize};

use crate::cards::{CardSet, Rank};
use crate::errors::EvalError;

/// Descriptive board label derived from the three texture booleans by fixed
/// precedence.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureLabel {
    Dry,
    WetConnected,
    WetUnconnected,
    MonotoneConnected,
    HighCard,
}

/// Classification of a community board's coordination, independent of hole
/// cards. Consumed by external strategy logic; carries no betting semantics.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BoardTexture {
    /// At least two board cards share a suit.
    pub suited: bool,
    /// Sorted rank gaps are all at most 4 with at most 2 distinct gap sizes.
    pub connected: bool,
    /// Any board rank is Jack or higher.
    pub high_card: bool,
    pub label: TextureLabel,
}

/// Classifies a 3 to 5 card community board.
///
/// # Errors
///
/// [`EvalError::InsufficientCards`] below 3 cards,
/// [`EvalError::InvalidCardSetSize`] above 5.
pub fn classify_texture(community: &CardSet) -> Result<BoardTexture, EvalError> {
    if community.len() < 3 {
        return Err(EvalError::InsufficientCards {
            required: 3,
            actual: community.len(),
        });
    }
    if community.len() > 5 {
        return Err(EvalError::InvalidCardSetSize {
            len: community.len(),
        });
    }

    let mut suit_counts = [0u8; 4];
    let mut values: Vec<u8> = Vec::with_capacity(community.len());
    for &c in community.cards() {
        suit_counts[c.suit.index()] += 1;
        values.push(c.rank.value());
    }
    values.sort_unstable();

    let suited = suit_counts.iter().any(|&n| n >= 2);

    let gaps: Vec<u8> = values.windows(2).map(|w| w[1] - w[0]).collect();
    let mut distinct = gaps.clone();
    distinct.sort_unstable();
    distinct.dedup();
    let connected = gaps.iter().all(|&g| g <= 4) && distinct.len() <= 2;

    let high_card = values.iter().any(|&v| v >= Rank::Jack.value());

    let label = match (suited, connected) {
        (true, true) => TextureLabel::WetConnected,
        (true, false) => TextureLabel::WetUnconnected,
        (false, true) => TextureLabel::MonotoneConnected,
        (false, false) if high_card => TextureLabel::HighCard,
        _ => TextureLabel::Dry,
    };

    Ok(BoardTexture {
        suited,
        connected,
        high_card,
        label,
    })
}
