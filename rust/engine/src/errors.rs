use thiserror::Error;

use crate::cards::Card;

/// Caller errors rejected by [`crate::hand::best_hand`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("Invalid hand size: {count} cards, expected 5 to 7")]
    InvalidHandSize { count: usize },
    #[error("Duplicate card: {card}")]
    DuplicateCard { card: Card },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCardError {
    #[error("Empty card label")]
    Empty,
    #[error("Invalid rank label: {0:?}")]
    InvalidRank(String),
    #[error("Invalid suit label: {0:?}")]
    InvalidSuit(String),
}
