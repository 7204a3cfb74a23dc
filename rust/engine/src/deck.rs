use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card, CardSet};
use crate::errors::EvalError;

/// How much of the board has been dealt alongside the hole cards.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Street {
    /// 3 community cards
    Flop,
    /// 4 community cards
    Turn,
    /// 5 community cards
    River,
}

impl Street {
    pub fn board_len(self) -> usize {
        match self {
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }
}

/// A 52-card deck with deterministic ChaCha20 shuffling.
///
/// The same seed always yields the same deal order, which keeps sample hands
/// and tests reproducible.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

/// One sampled deal: two hole cards plus a partial or full board.
#[derive(Debug, Clone)]
pub struct SampleHand {
    pub hole: [Card; 2],
    pub board: Vec<Card>,
}

impl SampleHand {
    /// Hole and board combined into the set the classifier consumes.
    pub fn card_set(&self) -> Result<CardSet, EvalError> {
        let mut cards = self.hole.to_vec();
        cards.extend_from_slice(&self.board);
        CardSet::new(cards)
    }
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        // Initial order is canonical until shuffle is called explicitly.
        Self {
            cards: full_deck(),
            position: 0,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied();
        if c.is_some() {
            self.position += 1;
        }
        c
    }

    pub fn burn_card(&mut self) {
        let _ = self.deal_card();
    }

    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.position = 0;
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    /// Deals one hand for inspection: two hole cards, then the board up to
    /// `street` with a burn before the flop and before each later card.
    ///
    /// Returns `None` when too few cards remain for the requested street.
    pub fn deal_sample(&mut self, street: Street) -> Option<SampleHand> {
        let burns = match street {
            Street::Flop => 1,
            Street::Turn => 2,
            Street::River => 3,
        };
        if self.remaining() < 2 + burns + street.board_len() {
            return None;
        }
        let hole = [self.deal_card()?, self.deal_card()?];
        let mut board = Vec::with_capacity(street.board_len());
        self.burn_card();
        for _ in 0..3 {
            board.push(self.deal_card()?);
        }
        if street != Street::Flop {
            self.burn_card();
            board.push(self.deal_card()?);
        }
        if street == Street::River {
            self.burn_card();
            board.push(self.deal_card()?);
        }
        Some(SampleHand { hole, board })
    }
}
