//! Seeded random source for race kinematics.
//!
//! A simple LCG is all the race needs: it keeps the core crate
//! dependency-free and makes every race replayable from its seed, which
//! is what the tests rely on. The binary seeds it from the system
//! clock; tests pass fixed seeds.

/// Simple LCG (Linear Congruential Generator) RNG.
/// Uses constants from Numerical Recipes.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32.
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max).
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Generate a random f32 in [0, 1).
    ///
    /// Uses the top 24 bits so the result is exactly representable.
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Generate a random f32 uniformly in [lo, hi).
    pub fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_f32() * (hi - lo)
    }

    /// Return true with probability `p`.
    ///
    /// `p <= 0.0` never fires, `p >= 1.0` always fires.
    pub fn chance(&mut self, p: f32) -> bool {
        self.next_f32() < p
    }
}
