//! Intents forwarded by the presentation layer.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// A user intent.
///
/// ```
/// use memory_match::{CardId, Intent};
///
/// let intent: Intent = serde_json::from_str(r#"{"type":"flip","card":3}"#).unwrap();
/// assert_eq!(intent, Intent::Flip { card: CardId::new(3) });
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    /// Deal a new game, replacing any game in progress.
    Start,
    /// Return to the empty, unstarted state.
    Reset,
    /// Turn a card face-up.
    Flip { card: CardId },
}

impl From<CardId> for Intent {
    fn from(card: CardId) -> Self {
        Intent::Flip { card }
    }
}
