// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

//! A skiplist which allows ordered insertion and lookup in expected logarithmic
//! time without any rebalancing.
//!
//! SkipLists use a probabilistic distribution of nodes over the internal
//! levels, whereby the lowest level (level 0) contains all the nodes, and each
//! level `n > 0` will contain a random subset of the nodes on level `n - 1`.
//!
//! This list does not fix its number of levels up front. It starts with none
//! and adds one each time its size passes `2^levels - 1`, and a new node's
//! level is drawn by a [`LevelGenerator`] bounded by the levels in use. The
//! default [`CapacityLevelGenerator`] favours low levels in roughly the same
//! proportions as a coin-flip geometric distribution, and the
//! [`GeometricalLevelGenerator`] is available when a different `p` is wanted.

mod level_generator;
pub mod skiplist;
mod skipnode;

pub use self::level_generator::{
    capacity_for_level,
    CapacityLevelGenerator,
    GeometricalLevelGenerator,
    LevelGenerator,
};
pub use self::skiplist::SkipList;
