//! Core building blocks: deterministic RNG and session configuration.

pub mod config;
pub mod rng;

pub use config::SessionConfig;
pub use rng::GameRng;
