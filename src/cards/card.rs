//! Card identity and face state.

use serde::{Deserialize, Serialize};

/// Identifier of a card within one session.
///
/// Ids are assigned `0..2*pair_count` before the shuffle, so they say
/// nothing about grid position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Opaque face symbol. Only equality matters to the game.
///
/// The presentation layer maps symbols to icons.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol from any string-like name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The symbol's name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Stable identity for the session.
    pub id: CardId,

    /// Face symbol. Exactly one other card shares it.
    pub symbol: Symbol,

    /// Face-up?
    pub is_flipped: bool,

    /// Permanently resolved. Never reverts within a session.
    pub is_matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    pub fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            is_flipped: false,
            is_matched: false,
        }
    }

    /// Can this card be turned face-up right now?
    #[must_use]
    pub fn is_face_down(&self) -> bool {
        !self.is_flipped && !self.is_matched
    }

    /// Do two cards form a pair?
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.id != other.id && self.symbol == other.symbol
    }
}
