// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use rand::prelude::*;

/// The number of elements `level` levels are designed to serve efficiently,
/// `2^level - 1`. Saturates at `usize::MAX`.
#[inline]
pub fn capacity_for_level(level: usize) -> usize {
    u32::try_from(level)
        .ok()
        .and_then(|shift| 1usize.checked_shl(shift))
        .map_or(usize::MAX, |cap| cap - 1)
}

/// Upon the insertion of a new node in the list, the node is replicated to high
/// levels with a certain probability as determined by a `LevelGenerator`.
///
/// The list grows its number of levels as it fills up, so the current maximum
/// is passed on every draw rather than fixed at construction.
pub trait LevelGenerator {
    /// Generate a level for a new node in the range `[1, max_level]`.
    ///
    /// This must never return `0` or a level that is `> max_level`. Callers
    /// always pass `max_level >= 1`.
    fn random(&mut self, max_level: usize) -> usize;
}

/// A level generator which draws a single uniform number below the capacity of
/// the current level count and maps it onto a level through its base-2
/// logarithm.
///
/// Level `1` is picked roughly half the time, level `2` a quarter, and so on up
/// to `max_level`, which is picked with probability `1 / (2^max_level - 1)`.
#[derive(Debug)]
pub struct CapacityLevelGenerator {
    rng: SmallRng,
}

#[allow(clippy::new_without_default)]
impl CapacityLevelGenerator {
    pub fn new() -> Self {
        CapacityLevelGenerator {
            rng: SmallRng::from_entropy(),
        }
    }

    /// A generator producing the same sequence of levels for the same seed.
    pub fn from_seed(seed: u64) -> Self {
        CapacityLevelGenerator {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl LevelGenerator for CapacityLevelGenerator {
    fn random(&mut self, max_level: usize) -> usize {
        if max_level <= 1 {
            return 1;
        }
        let r = self.rng.gen_range(0..capacity_for_level(max_level));
        // r + 1 <= usize::MAX since r < capacity
        let k = ((r + 1).ilog2() as usize).min(max_level - 1);
        max_level - k
    }
}

/// A level generator which will produce geometrically distributed numbers.
///
/// The probability of generating level `n` is `p` times the probability of
/// generating level `n-1`, with the probability truncated at the maximum number
/// of levels in use.
#[derive(Debug)]
pub struct GeometricalLevelGenerator {
    p: f64,
    rng: SmallRng, // Fast generator
}

impl GeometricalLevelGenerator {
    /// Create a new GeometricalLevelGenerator with `p` as the probability that
    /// a given node is present in the next level.
    ///
    /// # Panics
    ///
    /// `p` must be between 0 and 1 and will panic otherwise.
    pub fn new(p: f64) -> Self {
        Self::with_rng(p, SmallRng::from_entropy())
    }

    /// Same as [`GeometricalLevelGenerator::new`] with a deterministic seed.
    pub fn from_seed(p: f64, seed: u64) -> Self {
        Self::with_rng(p, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(p: f64, rng: SmallRng) -> Self {
        if p <= 0.0 || p >= 1.0 {
            panic!("p must be in (0, 1).");
        }
        GeometricalLevelGenerator { p, rng }
    }
}

impl LevelGenerator for GeometricalLevelGenerator {
    fn random(&mut self, max_level: usize) -> usize {
        let mut h = 1;
        let mut x = self.p;
        let f = 1.0 - self.rng.gen::<f64>();
        while x > f && h < max_level {
            h += 1;
            x *= self.p
        }
        h
    }
}
