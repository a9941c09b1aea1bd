// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

pub mod config;
pub mod errs;

/// An ordered [`skip list`] that grows its levels with its size.
///
/// [`skip list`]: https://en.wikipedia.org/wiki/Skip_list
pub mod skiplist;

pub use crate::{
    config::Config,
    errs::SkipListError,
    skiplist::SkipList,
};
