use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("Invalid card: {input:?}")]
    InvalidCard { input: String },
    #[error("Insufficient cards: need {required}, got {actual}")]
    InsufficientCards { required: usize, actual: usize },
    #[error("Invalid card set size: {len}")]
    InvalidCardSetSize { len: usize },
    #[error("Duplicate card: {card}")]
    DuplicateCard { card: Card },
}
