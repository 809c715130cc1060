//! Random source abstraction and deterministic implementations.
//!
//! The engine never owns global randomness; it draws spawn powers and
//! wildcard rolls through the [`RandomSource`] trait supplied by the host.
//! A simple LCG is provided for deterministic matches, and a scripted
//! source for driving exact spawn sequences in tests.

use std::collections::VecDeque;

/// Uniform random values consumed by the spawner.
pub trait RandomSource {
    /// Uniform integer in the half-open range `[low, high)`.
    /// `high` must be greater than `low`.
    fn uniform_int(&mut self, low: u32, high: u32) -> u32;

    /// Uniform float in `[0, 1)`.
    fn uniform_float(&mut self) -> f32;
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
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

impl RandomSource for SimpleRng {
    fn uniform_int(&mut self, low: u32, high: u32) -> u32 {
        debug_assert!(high > low);
        low + self.next_range(high - low)
    }

    fn uniform_float(&mut self) -> f32 {
        // Top 24 bits give a uniform float in [0, 1) without rounding to 1.0.
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }
}

/// Scripted random source for tests: replays queued draws, then falls back
/// to fixed defaults (lowest power, no wildcard).
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    ints: VecDeque<u32>,
    floats: VecDeque<f32>,
}

impl ScriptedRng {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next integer draws (clamped into the requested range on use).
    pub fn push_ints(&mut self, values: impl IntoIterator<Item = u32>) {
        self.ints.extend(values);
    }

    /// Queue the next float draws.
    pub fn push_floats(&mut self, values: impl IntoIterator<Item = f32>) {
        self.floats.extend(values);
    }
}

impl RandomSource for ScriptedRng {
    fn uniform_int(&mut self, low: u32, high: u32) -> u32 {
        debug_assert!(high > low);
        match self.ints.pop_front() {
            Some(v) => v.clamp(low, high - 1),
            None => low,
        }
    }

    fn uniform_float(&mut self) -> f32 {
        // Default draw never trips a wildcard roll.
        self.floats.pop_front().unwrap_or(0.999)
    }
}
