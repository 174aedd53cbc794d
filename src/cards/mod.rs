//! Cards and decks.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier of a card within one session
//! - `Symbol`: Opaque face value; two cards share each symbol
//! - `Card`: A card with its face-up and matched flags
//! - `DeckBuilder`: Validated recipe that deals shuffled decks

pub mod card;
pub mod deck;

pub use card::{Card, CardId, Symbol};
pub use deck::{
    build_deck, default_alphabet, validate_deck, DeckBuilder, DEFAULT_ALPHABET, DEFAULT_PAIR_COUNT,
};
