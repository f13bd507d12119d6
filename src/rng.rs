//! Seeded pseudo-random number generation.
//!
//! The swarm draws all of its randomness - spawn positions, lifetimes,
//! per-tick velocity jitter, noise gradient assignment - from a single
//! linear-congruential generator so a fixed seed reproduces an entire run.
//! This is NOT cryptographically secure; it only needs to be cheap and
//! internally consistent.
//!
//! # Example
//!
//! ```ignore
//! use wisp::rng::SmallPrng;
//!
//! let mut rng = SmallPrng::new(42);
//! let f = rng.next_f64();          // [0, 1)
//! let life = rng.next_in_range(1000, 5000); // inclusive on both ends
//! ```

/// LCG modulus, 2^31. State always stays in `[0, MODULUS - 1]`.
const MODULUS: u64 = 0x8000_0000;
/// Multiplier and increment from the classic glibc parameter set.
const MULTIPLIER: u64 = 1_103_515_245;
const INCREMENT: u64 = 12_345;

/// A small linear-congruential generator with 31 bits of state.
#[derive(Debug, Clone)]
pub struct SmallPrng {
    state: u32,
}

impl SmallPrng {
    /// Create a generator from an explicit seed.
    ///
    /// The seed is reduced modulo 2^31 so the state invariant holds from the
    /// first draw.
    pub fn new(seed: u32) -> Self {
        Self {
            state: (seed as u64 % MODULUS) as u32,
        }
    }

    /// Create a generator seeded from wall-clock time.
    ///
    /// Used when no explicit seed is given; every launch gets a different
    /// swarm.
    pub fn from_entropy() -> Self {
        let millis = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u32)
            .unwrap_or(0x5EED);
        Self::new(millis)
    }

    /// Advance the state and return a float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = ((MULTIPLIER * self.state as u64 + INCREMENT) % MODULUS) as u32;
        self.state as f64 / MODULUS as f64
    }

    /// Advance the state and return an integer in `[min, max]`, inclusive on
    /// both ends.
    pub fn next_in_range(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max);
        let span = (max - min + 1) as f64;
        (self.next_f64() * span) as i32 + min
    }
}
