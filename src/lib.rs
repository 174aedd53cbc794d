//! # memory-match
//!
//! Core of a memory-matching card game: a shuffled deck of paired symbols
//! is laid face-down and the player reveals two cards per turn looking for
//! matches.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: The crate exposes a snapshot and accepts
//!    intents. Rendering, layout, and icons live elsewhere.
//!
//! 2. **Deterministic**: Seeded ChaCha8 deals and a logical clock make
//!    every game reproducible.
//!
//! 3. **No Stale Callbacks**: Deferred work is an explicit task carrying
//!    the session generation, cancelled when the session is replaced.
//!
//! ## Modules
//!
//! - `core`: RNG and session configuration
//! - `cards`: Cards, symbols, deck building
//! - `session`: State machine, scheduler, snapshot, events, intents
//! - `error`: Construction-time errors

pub mod cards;
pub mod core;
pub mod error;
pub mod session;

// Re-export commonly used types
pub use crate::cards::{build_deck, default_alphabet, Card, CardId, DeckBuilder, Symbol};
pub use crate::core::{GameRng, SessionConfig};
pub use crate::error::{ConfigError, DeckError};
pub use crate::session::{GameSession, GameState, Intent, Phase, SessionEvent};
