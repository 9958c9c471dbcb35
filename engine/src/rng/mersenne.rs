//! MT19937 (Mersenne Twister) random number generator
//!
//! Deterministic PRNG with a 624-word state vector and a period of
//! 2^19937 - 1. One engine is constructed per unit of work (e.g. one roll
//! request) and discarded afterwards; instances are never shared.
//!
//! # Algorithm
//!
//! The engine keeps 624 unsigned 32-bit words and a cursor. Seeding fills
//! the vector from the low 32 bits of the seed using the 2002 initializer,
//! then marks the batch exhausted so the first draw regenerates. Every draw
//! returns one tempered word; when the cursor reaches the end of the batch
//! the whole vector is regenerated in place by the twist transformation.
//!
//! # Determinism
//!
//! Same seed → same sequence of draws. This is CRITICAL for:
//! - Replaying a roll from its seed (reproduce exact results)
//! - Testing (the reference sequences are pinned bit-for-bit)
//! - Compatibility (output matches the reference MT19937 word stream)
//!
//! Not cryptographically secure: the state is recoverable from observed
//! outputs, which is acceptable for dice rolls.

use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

// Period parameters
const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

// Tempering parameters
const TEMPERING_MASK_B: u32 = 0x9d2c_5680;
const TEMPERING_MASK_C: u32 = 0xefc6_0000;

/// Twist feedback table: XOR with `MATRIX_A` exactly when the low bit is set.
const MAG01: [u32; 2] = [0, MATRIX_A];

/// Errors that can occur during draw operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RngError {
    /// Bounded draws are unsatisfiable for bounds of one or less.
    #[error("n must be greater than one, got: {0}")]
    InvalidArgument(i32),
}

/// Deterministic random number generator using MT19937
///
/// # Example
/// ```
/// use dice_roller_core_rs::MersenneTwister;
///
/// let mut rng = MersenneTwister::new(12345);
/// let word = rng.next_u32();
/// let face = rng.next_int(6).unwrap(); // one d6, in [1, 6]
/// ```
#[derive(Debug, Clone)]
pub struct MersenneTwister {
    /// State vector; index 0 holds the word derived from the seed
    state: [u32; N],
    /// Cursor of the next unused word; `N` means the batch is exhausted
    index: usize,
}

impl MersenneTwister {
    /// Create a new engine from the given seed
    ///
    /// Only the low 32 bits of the seed are significant; the high bits are
    /// discarded. Seeding never fails.
    ///
    /// # Arguments
    /// * `seed` - Initial seed value (truncated to u32)
    ///
    /// # Example
    /// ```
    /// use dice_roller_core_rs::MersenneTwister;
    ///
    /// let mut rng = MersenneTwister::new(5489);
    /// assert_eq!(rng.next_u32(), 3499211612); // canonical first output
    /// ```
    pub fn new(seed: u64) -> Self {
        let mut state = [0u32; N];
        state[0] = seed as u32;
        for i in 1..N {
            let prev = state[i - 1];
            // Knuth TAOCP Vol2, 3rd Ed., p.106 multiplier
            state[i] = 1_812_433_253u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        // Exhausted cursor forces a full regeneration on the first draw
        Self { state, index: N }
    }

    /// Create a new engine seeded from the wall clock
    ///
    /// Uses the current time in milliseconds since the Unix epoch,
    /// truncated to 32 bits. Engines built this way do not reproduce
    /// across runs; use [`MersenneTwister::new`] when replay matters.
    ///
    /// # Panics
    /// Panics if the system clock is set before the Unix epoch.
    pub fn from_clock() -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock is set before the Unix epoch");
        Self::new(now.as_millis() as u64)
    }

    /// Generate the next tempered 32-bit word
    ///
    /// Advances the cursor by one; regenerates the whole state vector first
    /// when the current batch is exhausted. Amortized O(1) per draw with an
    /// O(624) spike at batch boundaries.
    ///
    /// # Example
    /// ```
    /// use dice_roller_core_rs::MersenneTwister;
    ///
    /// let mut rng = MersenneTwister::new(0);
    /// assert_eq!(rng.next_u32(), 2357136044);
    /// assert_eq!(rng.next_u32(), 2546248239);
    /// ```
    pub fn next_u32(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }

        let mut y = self.state[self.index];
        self.index += 1;

        y ^= y >> 11;
        y ^= (y << 7) & TEMPERING_MASK_B;
        y ^= (y << 15) & TEMPERING_MASK_C;
        y ^= y >> 18;

        y
    }

    /// Draw a random boolean
    ///
    /// Returns the most significant bit of the next tempered word.
    ///
    /// # Example
    /// ```
    /// use dice_roller_core_rs::MersenneTwister;
    ///
    /// let mut rng = MersenneTwister::new(42);
    /// assert!(!rng.next_bool());
    /// assert!(rng.next_bool());
    /// ```
    pub fn next_bool(&mut self) -> bool {
        (self.next_u32() >> 31) != 0
    }

    /// Draw a bounded integer
    ///
    /// For bounds that are not a power of two the draw is taken by
    /// rejection sampling and lies in `[1, n]`, the dice convention, so
    /// `next_int(6)` is one d6. Power-of-two bounds take a single-draw fast
    /// path that scales the high bits of one word and lies in `[0, n - 1]`.
    /// Both mappings are fixed: changing either would break replay of
    /// seeded sequences.
    ///
    /// # Arguments
    /// * `n` - Upper bound, must be greater than one
    ///
    /// # Returns
    /// - Ok(value) drawn uniformly from the path's range
    /// - Err([`RngError::InvalidArgument`]) if `n <= 1`; the engine state
    ///   is not advanced in that case
    ///
    /// # Example
    /// ```
    /// use dice_roller_core_rs::MersenneTwister;
    ///
    /// let mut rng = MersenneTwister::new(0);
    /// assert_eq!(rng.next_int(6).unwrap(), 5);
    /// assert_eq!(rng.next_int(6).unwrap(), 2);
    /// assert!(rng.next_int(1).is_err());
    /// ```
    pub fn next_int(&mut self, n: i32) -> Result<i32, RngError> {
        if n <= 1 {
            return Err(RngError::InvalidArgument(n));
        }

        // Power of two: scale the high 31 bits of a single word.
        if (n & -n) == n {
            let y = self.next_u32();
            return Ok(((n as i64 * (y >> 1) as i64) >> 31) as i32);
        }

        // Rejection sampling over the high 31 bits. A draw is rejected when
        // `bits - val + (n - 1)` overflows a signed 32-bit value, which
        // strips the modulo bias of ranges that do not divide 2^31 evenly.
        // Acceptance probability is floor(2^31 / n) * n / 2^31 > 1/2, so
        // the loop terminates almost surely.
        loop {
            let bits = (self.next_u32() >> 1) as i32;
            let val = bits % n;
            if bits.wrapping_sub(val).wrapping_add(n - 1) >= 0 {
                return Ok(val + 1);
            }
        }
    }

    /// Regenerate the entire state vector in place (the "twist")
    ///
    /// Processes the vector in three ranges, in order; later elements read
    /// already-updated earlier elements, so the order is load-bearing.
    fn twist(&mut self) {
        for kk in 0..N - M {
            let y = (self.state[kk] & UPPER_MASK) | (self.state[kk + 1] & LOWER_MASK);
            self.state[kk] = self.state[kk + M] ^ (y >> 1) ^ MAG01[(y & 1) as usize];
        }
        for kk in N - M..N - 1 {
            let y = (self.state[kk] & UPPER_MASK) | (self.state[kk + 1] & LOWER_MASK);
            self.state[kk] = self.state[kk + M - N] ^ (y >> 1) ^ MAG01[(y & 1) as usize];
        }
        let y = (self.state[N - 1] & UPPER_MASK) | (self.state[0] & LOWER_MASK);
        self.state[N - 1] = self.state[M - 1] ^ (y >> 1) ^ MAG01[(y & 1) as usize];

        self.index = 0;
    }
}

impl Default for MersenneTwister {
    /// Equivalent to [`MersenneTwister::from_clock`].
    fn default() -> Self {
        Self::from_clock()
    }
}
