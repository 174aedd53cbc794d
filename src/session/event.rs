//! Session events.
//!
//! Every state change also records an event. Hosts drain them to drive
//! notices (e.g. the completion dialog) without diffing snapshots.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Something that happened to the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A new deck was dealt.
    GameStarted { generation: u64, cards: usize },
    /// The session returned to the empty state.
    GameReset { generation: u64 },
    /// A card turned face-up.
    CardFlipped { card: CardId },
    /// Two revealed cards matched.
    PairMatched { first: CardId, second: CardId },
    /// Two revealed cards differed; they hide after the mismatch delay.
    PairMismatched { first: CardId, second: CardId },
    /// A mismatched pair turned face-down.
    CardsHidden { first: CardId, second: CardId },
    /// The last pair matched.
    GameCompleted { moves: u32, score: u32 },
}
