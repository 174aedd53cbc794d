//! Deck construction and validation.
//!
//! A deck is `pair_count` symbols, each on exactly two cards, in a
//! uniformly shuffled order. Symbol selection is deterministic (the first
//! `pair_count` of the alphabet); only the ordering is random.

use rustc_hash::{FxHashMap, FxHashSet};

use super::card::{Card, CardId, Symbol};
use crate::core::GameRng;
use crate::error::DeckError;

/// Default number of pairs (a 4x4 grid).
pub const DEFAULT_PAIR_COUNT: usize = 8;

/// Default symbol alphabet. Games use a prefix of it.
pub const DEFAULT_ALPHABET: [&str; 12] = [
    "SportsEsports",
    "SportsTennis",
    "Casino",
    "TheaterComedy",
    "Palette",
    "MusicNote",
    "Piano",
    "Mic",
    "Headphones",
    "DrumSet",
    "Guitar",
    "Radio",
];

/// The default alphabet as owned symbols.
#[must_use]
pub fn default_alphabet() -> Vec<Symbol> {
    DEFAULT_ALPHABET.iter().copied().map(Symbol::from).collect()
}

/// Validated deck recipe.
///
/// Construction checks the alphabet once; dealing afterwards cannot fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckBuilder {
    symbols: Vec<Symbol>,
}

impl DeckBuilder {
    /// Select the first `pair_count` symbols of `alphabet`.
    ///
    /// Fails if the alphabet is too short, `pair_count` is zero, or the
    /// selected symbols are not distinct.
    pub fn new(pair_count: usize, alphabet: &[Symbol]) -> Result<Self, DeckError> {
        if pair_count == 0 {
            return Err(DeckError::NoPairs);
        }
        if alphabet.len() < pair_count {
            return Err(DeckError::AlphabetTooSmall {
                required: pair_count,
                available: alphabet.len(),
            });
        }

        let symbols = alphabet[..pair_count].to_vec();
        let mut seen = FxHashSet::default();
        for symbol in &symbols {
            if !seen.insert(symbol) {
                return Err(DeckError::DuplicateSymbol(symbol.clone()));
            }
        }

        Ok(Self { symbols })
    }

    /// Number of pairs this builder deals.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.symbols.len()
    }

    /// Symbols in play, in alphabet order.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Cards in id order, before shuffling: `[s0..sn, s0..sn]`.
    #[must_use]
    pub fn unshuffled(&self) -> Vec<Card> {
        self.symbols
            .iter()
            .chain(self.symbols.iter())
            .enumerate()
            .map(|(index, symbol)| Card::new(CardId::new(index as u32), symbol.clone()))
            .collect()
    }

    /// Deal a freshly shuffled deck.
    pub fn build(&self, rng: &mut GameRng) -> Vec<Card> {
        let mut cards = self.unshuffled();
        rng.shuffle(&mut cards);
        cards
    }
}

/// Build a shuffled deck of `pair_count` pairs drawn from `alphabet`.
pub fn build_deck(pair_count: usize, alphabet: &[Symbol], rng: &mut GameRng) -> Result<Vec<Card>, DeckError> {
    Ok(DeckBuilder::new(pair_count, alphabet)?.build(rng))
}

/// Check that a caller-supplied deck can start a game.
///
/// Requires a non-empty deck, unique ids, every symbol on exactly two
/// cards, and every card face-down and unmatched.
pub fn validate_deck(cards: &[Card]) -> Result<(), DeckError> {
    if cards.is_empty() {
        return Err(DeckError::Empty);
    }

    let mut ids = FxHashSet::default();
    let mut counts: FxHashMap<&Symbol, usize> = FxHashMap::default();

    for card in cards {
        if !ids.insert(card.id) {
            return Err(DeckError::DuplicateId(card.id));
        }
        if !card.is_face_down() {
            return Err(DeckError::DirtyCard(card.id));
        }
        *counts.entry(&card.symbol).or_insert(0) += 1;
    }

    // Report in deck order so the error is deterministic
    for card in cards {
        let count = counts[&card.symbol];
        if count != 2 {
            return Err(DeckError::UnpairedSymbol {
                symbol: card.symbol.clone(),
                count,
            });
        }
    }

    Ok(())
}
