//! Dice Roller Core - Rust Engine
//!
//! Deterministic dice-rolling core for the ability-roll service. The HTTP
//! route that serves rolls is a thin wrapper elsewhere: it constructs one
//! engine per request, rolls one block, and serializes the result. This
//! crate supplies the integers.
//!
//! # Architecture
//!
//! - **rng**: MT19937 engine (seeding, raw words, boolean and bounded draws)
//! - **rolls**: ability-score dice pools built on the engine
//!
//! # Critical Invariants
//!
//! 1. All randomness flows through the seeded engine in `rng`
//! 2. Seeded sequences are bit-compatible with the reference MT19937
//!    word stream across runs and releases
//! 3. The core performs no I/O and assumes nothing about transport

// Module declarations
pub mod rng;
pub mod rolls;

// Re-exports for convenience
pub use rng::{MersenneTwister, RngError};
pub use rolls::{roll_ability_score, roll_ability_scores, roll_die, AbilityScores};
