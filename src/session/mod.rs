//! Game session: the flip/match state machine and its deferred tasks.
//!
//! ## Turn Cycle
//!
//! ```text
//! Idle --start--> Playing --2nd flip--> Resolving --match--> Playing | Complete
//!                                          |
//!                                          +--mismatch, hide delay--> Playing
//! ```
//!
//! The reveal pause and the mismatch hide are scheduled tasks on the
//! session's logical clock, tagged with the session generation so that
//! start/reset invalidates them.

mod event;
mod game;
mod intent;
mod scheduler;
mod state;

pub use event::SessionEvent;
pub use game::GameSession;
pub use intent::Intent;
pub use state::{FlippedCards, GameState, Phase};
