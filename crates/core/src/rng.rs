//! RNG module - uniform random piece selection
//!
//! Every draw picks one of the seven kinds with equal probability, independently
//! of previous draws. There is no bag or anti-repetition logic: the same kind may
//! come up any number of times in a row.
//!
//! A small seeded LCG keeps games reproducible for tests and benchmarks.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales the full 32-bit output instead of taking a modulus, since the low
    /// bits of an LCG cycle with short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Uniform piece generator
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: SimpleRng,
    seed: u32,
}

impl PieceGenerator {
    /// Create a new generator with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    /// Draw the next piece kind, uniformly among all seven
    pub fn draw(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}
