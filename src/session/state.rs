//! Session snapshot.
//!
//! `GameState` is what the presentation layer renders. It uses `im`
//! persistent vectors so handing out a snapshot is an O(1) clone.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardId};

/// Face-up, unresolved card ids in flip order. Never more than two.
pub type FlippedCards = SmallVec<[CardId; 2]>;

/// Where the session is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Not started, or reset.
    Idle,
    /// Zero or one card face-up; flips accepted.
    Playing,
    /// Two cards face-up, waiting on resolution or the mismatch hide.
    Resolving,
    /// Every card matched. Terminal until start/reset.
    Complete,
}

/// Read-only game snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Cards in grid order, fixed after the shuffle.
    pub cards: Vector<Card>,

    /// Face-up cards awaiting resolution.
    pub flipped_cards: FlippedCards,

    /// Completed comparison attempts.
    pub moves: u32,

    /// Accumulated points.
    pub score: u32,

    /// True iff every card is matched.
    pub is_game_complete: bool,

    /// False until `start`, and again after `reset`.
    pub is_game_started: bool,
}

impl GameState {
    /// Empty, unstarted state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh game over the given deck, counters zeroed.
    #[must_use]
    pub fn dealt(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            is_game_started: true,
            ..Self::default()
        }
    }

    /// Derived phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if !self.is_game_started {
            Phase::Idle
        } else if self.is_game_complete {
            Phase::Complete
        } else if self.flipped_cards.len() == 2 {
            Phase::Resolving
        } else {
            Phase::Playing
        }
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Cards not yet matched.
    #[must_use]
    pub fn cards_left(&self) -> usize {
        self.cards.iter().filter(|c| !c.is_matched).count()
    }

    /// Pairs matched so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        (self.cards.len() - self.cards_left()) / 2
    }

    /// Pairs in the deck.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// Would a flip of `id` be accepted right now?
    #[must_use]
    pub fn can_flip(&self, id: CardId) -> bool {
        self.flipped_cards.len() < 2
            && !self.is_game_complete
            && self.card(id).is_some_and(Card::is_face_down)
    }

    /// Recompute completion from the cards.
    pub(crate) fn refresh_complete(&mut self) -> bool {
        self.is_game_complete = !self.cards.is_empty() && self.cards.iter().all(|c| c.is_matched);
        self.is_game_complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Symbol;

    fn deck() -> Vec<Card> {
        ["A", "B", "A", "B"]
            .iter()
            .enumerate()
            .map(|(i, s)| Card::new(CardId::new(i as u32), Symbol::new(*s)))
            .collect()
    }

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::new();

        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.cards.is_empty());
        assert!(!state.is_game_started);
        assert!(!state.is_game_complete);
        assert_eq!(state.cards_left(), 0);
        assert!(!state.can_flip(CardId::new(0)));
    }

    #[test]
    fn test_dealt_state() {
        let state = GameState::dealt(deck());

        assert_eq!(state.phase(), Phase::Playing);
        assert_eq!(state.cards.len(), 4);
        assert_eq!(state.total_pairs(), 2);
        assert_eq!(state.cards_left(), 4);
        assert_eq!(state.matched_pairs(), 0);
        assert!(state.can_flip(CardId::new(2)));
        assert!(!state.can_flip(CardId::new(9)));
    }

    #[test]
    fn test_phase_resolving_and_complete() {
        let mut state = GameState::dealt(deck());
        state.flipped_cards.push(CardId::new(0));
        state.flipped_cards.push(CardId::new(1));
        assert_eq!(state.phase(), Phase::Resolving);
        assert!(!state.can_flip(CardId::new(2)));

        state.flipped_cards.clear();
        for card in state.cards.iter_mut() {
            card.is_flipped = true;
            card.is_matched = true;
        }
        assert!(state.refresh_complete());
        assert_eq!(state.phase(), Phase::Complete);
        assert_eq!(state.matched_pairs(), 2);
        assert_eq!(state.cards_left(), 0);
    }

    #[test]
    fn test_empty_deck_never_complete() {
        let mut state = GameState::new();
        assert!(!state.refresh_complete());
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::dealt(deck());
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["moves"], 0);
        assert_eq!(json["is_game_started"], true);
        assert_eq!(json["cards"].as_array().unwrap().len(), 4);
        assert_eq!(json["flipped_cards"], serde_json::json!([]));

        let back: GameState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }
}
