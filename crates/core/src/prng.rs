//! The injected randomness source for every style generator.
//!
//! Each texture paints from its own [`Xorshift64`], seeded from the
//! descriptor, so a given (color, style) pair reproduces the same strokes.

use std::f64::consts::TAU;

/// Marsaglia xorshift with the (13, 7, 17) triple.
///
/// Not cryptographic. The same seed yields the same sequence on every platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xorshift64 {
    state: u64,
}

/// Substituted for a zero seed, which would lock the generator at zero.
const ZERO_SEED_REPLACEMENT: u64 = 0x9E37_79B9_7F4A_7C15;

/// 2^-53: scales a 53-bit integer into [0, 1).
const UNIT_SCALE: f64 = 1.0 / (1u64 << 53) as f64;

impl Xorshift64 {
    /// Seeds the generator. A zero seed is swapped for a fixed non-zero
    /// constant, since zero is a fixed point of xorshift.
    pub fn new(seed: u64) -> Self {
        let state = match seed {
            0 => ZERO_SEED_REPLACEMENT,
            s => s,
        };
        Self { state }
    }

    /// Advances the state and returns it.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform in [0, 1), from the top 53 bits.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * UNIT_SCALE
    }

    /// Uniform in [lo, hi).
    pub fn next_range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Uniform integer in [lo, hi]. Returns `lo` when `hi <= lo`.
    pub fn next_between(&mut self, lo: usize, hi: usize) -> usize {
        if hi <= lo {
            return lo;
        }
        let span = (hi - lo) as u64 + 1;
        lo + (self.next_u64() % span) as usize
    }

    /// A direction in [0, 2π).
    pub fn next_angle(&mut self) -> f64 {
        TAU * self.next_f64()
    }

    /// `true` with probability `p`: never for `p <= 0`, always for `p >= 1`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}
