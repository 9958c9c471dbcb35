//! Ability-score dice pools
//!
//! Turns engine draws into the roll service's domain values: one d6 per
//! bounded draw, an ability score as the best three of four d6, and a
//! block of six scores per engine. All generation is deterministic based
//! on the engine seed.
//!
//! # Key Principles
//!
//! 1. **Determinism**: Same seed → same block
//! 2. **Fixed draw order**: Four consecutive draws per score, six scores
//!    in sequence; reordering would break replay
//! 3. **No I/O**: The caller owns serialization and transport
//!
//! # Example
//!
//! ```
//! use dice_roller_core_rs::rolls::roll_ability_scores;
//! use dice_roller_core_rs::MersenneTwister;
//!
//! let mut rng = MersenneTwister::new(42);
//! let block = roll_ability_scores(&mut rng).unwrap();
//! assert_eq!(block.scores(), &[16, 15, 18, 9, 16, 12]);
//! ```

use crate::rng::{MersenneTwister, RngError};
use serde::{Deserialize, Serialize};

/// Faces on the service's die.
pub const DIE_FACES: i32 = 6;

/// Dice rolled per ability score; the lowest one is dropped.
pub const DICE_PER_SCORE: usize = 4;

/// Ability scores in one block.
pub const SCORE_COUNT: usize = 6;

/// Six ability scores rolled from one engine, in roll order.
///
/// Serializes as a bare JSON array of six sums, the wire shape consumers
/// hand back to their clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores([i32; SCORE_COUNT]);

impl AbilityScores {
    /// Get the six scores in roll order
    pub fn scores(&self) -> &[i32; SCORE_COUNT] {
        &self.0
    }
}

/// Roll one die
///
/// A single bounded draw in `[1, DIE_FACES]`.
pub fn roll_die(rng: &mut MersenneTwister) -> Result<i32, RngError> {
    rng.next_int(DIE_FACES)
}

/// Roll one ability score: best three of four dice
///
/// Draws four dice in sequence, drops exactly one lowest die (ties drop a
/// single copy), and sums the remaining three. The result lies in
/// `[3, 18]`.
///
/// # Example
/// ```
/// use dice_roller_core_rs::rolls::roll_ability_score;
/// use dice_roller_core_rs::MersenneTwister;
///
/// let mut rng = MersenneTwister::new(42);
/// // Opening dice for seed 42 are 4, 6, 3, 6; dropping the 3 leaves 16.
/// assert_eq!(roll_ability_score(&mut rng).unwrap(), 16);
/// ```
pub fn roll_ability_score(rng: &mut MersenneTwister) -> Result<i32, RngError> {
    let mut pool = [0i32; DICE_PER_SCORE];
    for die in &mut pool {
        *die = roll_die(rng)?;
    }
    Ok(pool_sum(pool))
}

/// Roll a full block of six ability scores
///
/// Scores are rolled sequentially from the same engine, so a block is
/// fully determined by the engine's seed.
pub fn roll_ability_scores(rng: &mut MersenneTwister) -> Result<AbilityScores, RngError> {
    let mut scores = [0i32; SCORE_COUNT];
    for score in &mut scores {
        *score = roll_ability_score(rng)?;
    }
    Ok(AbilityScores(scores))
}

/// Sum the pool with exactly one lowest die dropped.
fn pool_sum(mut pool: [i32; DICE_PER_SCORE]) -> i32 {
    pool.sort_unstable();
    pool[1..].iter().sum()
}
