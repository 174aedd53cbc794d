//! Error types.
//!
//! Play itself never fails: disallowed flips are no-ops. Errors only come
//! from building a deck or a session with bad inputs.

use thiserror::Error;

use crate::cards::{CardId, Symbol};

/// Result type alias using ConfigError.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while building or validating a deck.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("alphabet has {available} symbols but {required} pairs were requested")]
    AlphabetTooSmall { required: usize, available: usize },

    #[error("a deck needs at least one pair")]
    NoPairs,

    #[error("symbol {0} appears more than once in the alphabet")]
    DuplicateSymbol(Symbol),

    #[error("symbol {symbol} appears {count} times, expected 2")]
    UnpairedSymbol { symbol: Symbol, count: usize },

    #[error("card id {0} appears more than once")]
    DuplicateId(CardId),

    #[error("card {0} is already face-up or matched")]
    DirtyCard(CardId),

    #[error("deck is empty")]
    Empty,
}

/// Errors raised while validating a session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid deck settings: {0}")]
    Deck(#[from] DeckError),

    #[error("match_points must be positive")]
    ZeroMatchPoints,
}
