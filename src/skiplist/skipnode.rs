// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use std::fmt;

use crate::errs::SkipListError;

/// Index of a node in the list's node arena.
pub(crate) type NodeId = usize;

/// A position a traversal can stand on: the head or a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Link {
    Head,
    Node(NodeId),
}

/// The head of the list. It holds no value, only one forward link per level in
/// use, so its length is always the list's current number of levels.
#[derive(Debug, Default)]
pub(crate) struct Head {
    pub(crate) forward: Vec<Option<NodeId>>,
}

/// SkipNodes make up the SkipList. Each node lives in the list's arena and is
/// never moved or removed; `forward[i]` is the next node on level `i`, or
/// `None` at the tail. The length of `forward` is the node's level and never
/// changes once the node is created.
///
/// A node keeps a bounded bucket of equal values. Inserting a value equal to an
/// existing node's key lands in that bucket until it is full.
#[derive(Debug)]
pub(crate) struct SkipNode<E> {
    values: Vec<E>,
    capacity: usize,
    pub(crate) forward: Vec<Option<NodeId>>,
}

impl<E> SkipNode<E> {
    /// Create a node reaching `level` levels, holding `value` as its only
    /// entry. All forward links start out empty.
    pub(crate) fn new(level: usize, value: E, capacity: usize) -> Result<Self, SkipListError> {
        // buckets grow on demand, most keys never see a second value
        let mut values = Vec::new();
        values.try_reserve_exact(1)?;
        values.push(value);

        let mut forward = Vec::new();
        forward.try_reserve_exact(level)?;
        forward.resize(level, None);

        Ok(SkipNode {
            values,
            capacity,
            forward,
        })
    }

    #[inline]
    pub(crate) fn level(&self) -> usize {
        self.forward.len()
    }

    /// The value the node is ordered by.
    #[inline]
    pub(crate) fn key(&self) -> &E {
        &self.values[0]
    }

    #[inline]
    pub(crate) fn values(&self) -> &[E] {
        &self.values
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.values.len() >= self.capacity
    }

    /// Append a value to the bucket. A full bucket rejects the value instead of
    /// dropping it.
    pub(crate) fn add(&mut self, value: E) -> Result<(), SkipListError> {
        if self.is_full() {
            return Err(SkipListError::BucketFull {
                capacity: self.capacity,
            });
        }
        self.values.try_reserve(1)?;
        self.values.push(value);
        Ok(())
    }
}

impl<E: Ord> SkipNode<E> {
    pub(crate) fn contains(&self, target: &E) -> bool {
        self.find(target).is_some()
    }

    /// The stored value equal to `target`, which is not necessarily the same
    /// object as `target`.
    pub(crate) fn find(&self, target: &E) -> Option<&E> {
        self.values.iter().find(|v| *v == target)
    }

    /// Whether the whole node sorts before `target`, i.e. a search for `target`
    /// should move past it.
    pub(crate) fn precedes(&self, target: &E) -> bool {
        self.values.iter().all(|v| v < target)
    }
}

impl<E> fmt::Display for SkipNode<E>
where
    E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for v in &self.values {
            write!(f, "{} , ", v)?;
        }
        write!(f, " |{}|", self.level())
    }
}
