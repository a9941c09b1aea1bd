// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use std::{
    fmt,
    iter,
};

use tracing::{
    debug,
    instrument,
};

use crate::{
    config::{
        Config,
        DEFAULT_BUCKET_CAPACITY,
    },
    errs::SkipListError,
    skiplist::{
        level_generator::{
            capacity_for_level,
            CapacityLevelGenerator,
            LevelGenerator,
        },
        skipnode::{
            Head,
            Link,
            NodeId,
            SkipNode,
        },
    },
};

/// An ordered skiplist which grows its number of levels with its size.
///
/// The list starts with no levels at all and adds one whenever the number of
/// inserted values exceeds [`capacity_for_level`] of the current level count,
/// so after `n` insertions it has `ceil(log2(n + 1))` levels. New nodes draw
/// their level from the [`LevelGenerator`] `G`, bounded by the levels in use at
/// that moment.
///
/// Equal values are kept, never replaced. A value equal to an existing node's
/// key is added to that node's bucket while the bucket has room.
#[derive(Debug)]
pub struct SkipList<E, G = CapacityLevelGenerator> {
    head: Head,
    nodes: Vec<SkipNode<E>>,
    len: usize,
    bucket_capacity: usize,
    level_generator: G,
}

impl<E: Ord> SkipList<E> {
    pub fn new() -> Self {
        Self::with_generator(CapacityLevelGenerator::new())
    }

    /// A list whose node levels are reproducible for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_generator(CapacityLevelGenerator::from_seed(seed))
    }

    pub fn with_config(config: Config) -> Result<Self, SkipListError> {
        config.validate()?;
        let level_generator = match config.seed() {
            | Some(seed) => CapacityLevelGenerator::from_seed(seed),
            | None => CapacityLevelGenerator::new(),
        };
        let mut list = Self::with_generator(level_generator);
        list.bucket_capacity = config.bucket_capacity();
        Ok(list)
    }
}

impl<E: Ord> Default for SkipList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Ord, G: LevelGenerator> SkipList<E, G> {
    pub fn with_generator(level_generator: G) -> Self {
        SkipList {
            head: Head::default(),
            nodes: Vec::new(),
            len: 0,
            bucket_capacity: DEFAULT_BUCKET_CAPACITY,
            level_generator,
        }
    }

    /// The number of values inserted.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of levels currently in use.
    #[inline]
    pub fn max_level(&self) -> usize {
        self.head.forward.len()
    }

    /// The number of nodes allocated. This is lower than [`SkipList::len`]
    /// once equal values share a node.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Insert a value. Equal values already in the list are kept alongside it.
    ///
    /// The only failure is running out of memory while growing the list, in
    /// which case the value is dropped and the list is left untouched.
    #[instrument(level = "trace", skip_all, fields(len = self.len))]
    pub fn insert(&mut self, item: E) -> Result<(), SkipListError> {
        let len = self.len + 1;

        let mut preds = Vec::new();
        preds.try_reserve_exact(self.max_level() + 1)?;
        preds.resize(self.max_level(), Link::Head);
        let pred = self.search(&item, |level, link| preds[level] = link);

        // everything fallible happens before the head or any link changes
        let grow = len > capacity_for_level(self.max_level());
        if grow {
            self.head.forward.try_reserve(1)?;
        }
        let max_level = self.max_level() + usize::from(grow);

        if let Some(next) = self.forward(pred, 0) {
            let node = &mut self.nodes[next];
            debug_assert!(node.key() >= &item);
            if node.contains(&item) && !node.is_full() {
                node.add(item)?;
                if grow {
                    self.add_level(&mut preds, len);
                }
                self.len = len;
                return Ok(());
            }
        }

        let level = self
            .level_generator
            .random(max_level)
            .clamp(1, max_level);

        self.nodes.try_reserve(1)?;
        let mut node = SkipNode::new(level, item, self.bucket_capacity)?;

        if grow {
            self.add_level(&mut preds, len);
        }
        let id = self.nodes.len();
        for (i, &p) in preds.iter().take(level).enumerate() {
            node.forward[i] = self.forward(p, i);
            self.set_forward(p, i, Some(id));
        }
        self.nodes.push(node);
        self.len = len;

        Ok(())
    }

    /// Add an empty top level. Both vectors already have room for it.
    fn add_level(&mut self, preds: &mut Vec<Link>, len: usize) {
        self.head.forward.push(None);
        // nothing else reaches the new top level yet
        preds.push(Link::Head);
        debug!(max_level = self.max_level(), len, "added skiplist level");
    }

    /// Insert every value from `iter`, stopping at the first failure.
    pub fn try_extend<I>(&mut self, iter: I) -> Result<(), SkipListError>
    where
        I: IntoIterator<Item = E>,
    {
        for item in iter {
            self.insert(item)?;
        }
        Ok(())
    }

    /// Look up a value. The returned reference is the stored value equal to
    /// `target`.
    #[instrument(level = "trace", skip_all)]
    pub fn find(&self, target: &E) -> Option<&E> {
        let pred = self.search(target, |_, _| {});
        self.forward(pred, 0)
            .and_then(|next| self.nodes[next].find(target))
    }

    pub fn contains(&self, target: &E) -> bool {
        self.find(target).is_some()
    }

    /// All values in non-decreasing order.
    pub fn iter(&self) -> impl Iterator<Item = &E> + '_ {
        self.level_ids(0)
            .flat_map(move |id| self.nodes[id].values().iter())
    }

    /// A human readable dump of the list. Same as the `Display` output.
    pub fn render(&self) -> String
    where
        E: fmt::Display,
    {
        self.to_string()
    }

    /// Walk from the top level down to level 0, moving right past every node
    /// that sorts before `target`. `record` sees the node each level stopped at
    /// and the level-0 stop is returned.
    fn search<F>(&self, target: &E, mut record: F) -> Link
    where
        F: FnMut(usize, Link),
    {
        let mut current = Link::Head;
        for level in (0..self.max_level()).rev() {
            while let Some(next) = self.forward(current, level) {
                if !self.nodes[next].precedes(target) {
                    break;
                }
                current = Link::Node(next);
            }
            record(level, current);
        }
        current
    }

    #[inline]
    fn forward(&self, link: Link, level: usize) -> Option<NodeId> {
        match link {
            | Link::Head => self.head.forward.get(level).copied().flatten(),
            | Link::Node(id) => self.nodes[id].forward.get(level).copied().flatten(),
        }
    }

    #[inline]
    fn set_forward(&mut self, link: Link, level: usize, to: Option<NodeId>) {
        match link {
            | Link::Head => self.head.forward[level] = to,
            | Link::Node(id) => self.nodes[id].forward[level] = to,
        }
    }

    /// Ids of the nodes on `level`, front to back.
    fn level_ids(&self, level: usize) -> impl Iterator<Item = NodeId> + '_ {
        let first = self.head.forward.get(level).copied().flatten();
        iter::successors(first, move |&id| {
            self.nodes[id].forward.get(level).copied().flatten()
        })
    }
}

impl<E, G> fmt::Display for SkipList<E, G>
where
    E: Ord + fmt::Display,
    G: LevelGenerator,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Empty");
        }
        write!(f, "Head: {}", self.max_level())?;
        for (i, id) in self.level_ids(0).enumerate() {
            write!(f, " --> {}", self.nodes[id])?;
            if (i + 1) % 10 == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
