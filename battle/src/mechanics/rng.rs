//! Injectable randomness for battle rolls and roster generation.
//!
//! Every random decision in the engine goes through [`RandomSource`], so
//! tests can replace the process RNG with a seeded [`rand::rngs::StdRng`] or
//! with [`ScriptedRolls`] that replays a fixed sequence.

use std::collections::VecDeque;

use rand::Rng;

/// Source of the random draws the engine needs
pub trait RandomSource {
    /// Bernoulli draw: true with probability `p` (clamped to 0..=1)
    fn chance(&mut self, p: f64) -> bool;

    /// Fair coin
    fn coin_flip(&mut self) -> bool {
        self.chance(0.5)
    }

    /// Uniform index in `0..upper`. Returns 0 when `upper <= 1`.
    fn index(&mut self, upper: usize) -> usize;

    /// Uniform integer in `low..=high`. Returns `low` when the range is empty.
    fn between(&mut self, low: u32, high: u32) -> u32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn chance(&mut self, p: f64) -> bool {
        self.gen_bool(p.clamp(0.0, 1.0))
    }

    fn index(&mut self, upper: usize) -> usize {
        if upper <= 1 {
            return 0;
        }
        self.gen_range(0..upper)
    }

    fn between(&mut self, low: u32, high: u32) -> u32 {
        if low >= high {
            return low;
        }
        self.gen_range(low..=high)
    }
}

/// Replays fixed outcomes.
///
/// `chance` and `coin_flip` pop from the flip queue, `index` and `between`
/// pop from the pick queue. Exhausted queues yield `false` and the lowest
/// value of the range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    flips: VecDeque<bool>,
    picks: VecDeque<usize>,
}

impl ScriptedRolls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flips(mut self, flips: impl IntoIterator<Item = bool>) -> Self {
        self.flips.extend(flips);
        self
    }

    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }

    pub fn remaining_flips(&self) -> usize {
        self.flips.len()
    }

    pub fn remaining_picks(&self) -> usize {
        self.picks.len()
    }
}

impl RandomSource for ScriptedRolls {
    fn chance(&mut self, _p: f64) -> bool {
        self.flips.pop_front().unwrap_or(false)
    }

    fn index(&mut self, upper: usize) -> usize {
        let pick = self.picks.pop_front().unwrap_or(0);
        if upper == 0 { 0 } else { pick.min(upper - 1) }
    }

    fn between(&mut self, low: u32, high: u32) -> u32 {
        let offset = self.picks.pop_front().unwrap_or(0) as u32;
        low.saturating_add(offset).min(high.max(low))
    }
}
