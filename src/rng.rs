//! Random piece selection.
//!
//! The engine's only randomness is the shape and color drawn at spawn. It is
//! abstracted behind [`RandomSource`] so tests can inject a scripted source
//! and games can be replayed from a seed. [`SimpleRng`] is the default
//! implementation, a small LCG with Numerical Recipes constants.

/// A uniform random source.
///
/// One method: the next uniform value in `[0, max)`. Implementations must be
/// deterministic for a given starting state.
pub trait RandomSource {
    /// Next uniform value in `[0, max)`. `max` is at least 1.
    fn next_range(&mut self, max: u32) -> u32;
}

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
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current internal state (for replaying a game from this point)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
