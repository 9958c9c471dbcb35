//! Deterministic random number generation
//!
//! Uses the MT19937 Mersenne Twister algorithm for seeded, reproducible
//! draws. CRITICAL: All randomness in the roller MUST go through this
//! module.

mod mersenne;

pub use mersenne::{MersenneTwister, RngError};
