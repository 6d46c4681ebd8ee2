//! FIFO flood-fill state for pool exploration.

use std::collections::VecDeque;

use archimedes_utils::BlockPos;
use rustc_hash::FxHashSet;

const INITIAL_CAPACITY: usize = 64;

/// Queue of discovered positions plus the set of positions already processed.
///
/// A position enters the queue at most once over the lifetime of the
/// frontier: [`Frontier::offer`] ignores anything queued or explored, so the
/// two sets never overlap and every reachable block is processed once.
#[derive(Debug, Clone)]
pub struct Frontier {
    queue: VecDeque<BlockPos>,
    /// Mirror of `queue` for O(1) membership checks.
    queued: FxHashSet<BlockPos>,
    explored: FxHashSet<BlockPos>,
}

impl Frontier {
    /// Creates a frontier holding only `seed`.
    #[must_use]
    pub fn new(seed: BlockPos) -> Self {
        let mut frontier = Self {
            queue: VecDeque::with_capacity(INITIAL_CAPACITY),
            queued: FxHashSet::with_capacity_and_hasher(INITIAL_CAPACITY, Default::default()),
            explored: FxHashSet::with_capacity_and_hasher(INITIAL_CAPACITY, Default::default()),
        };
        frontier.offer(seed);
        frontier
    }

    /// Queues `pos` unless it was queued or explored before.
    /// Returns whether it was queued.
    pub fn offer(&mut self, pos: BlockPos) -> bool {
        if self.is_known(pos) {
            return false;
        }
        self.queued.insert(pos);
        self.queue.push_back(pos);
        true
    }

    /// Takes the oldest queued position and marks it explored.
    ///
    /// Returns `None` if the queue is empty.
    pub fn poll(&mut self) -> Option<BlockPos> {
        let pos = self.queue.pop_front()?;
        self.queued.remove(&pos);
        self.explored.insert(pos);
        Some(pos)
    }

    /// Whether `pos` is queued or explored.
    #[must_use]
    #[inline]
    pub fn is_known(&self, pos: BlockPos) -> bool {
        self.queued.contains(&pos) || self.explored.contains(&pos)
    }

    /// Whether `pos` was already processed.
    #[must_use]
    #[inline]
    pub fn is_explored(&self, pos: BlockPos) -> bool {
        self.explored.contains(&pos)
    }

    /// Number of queued positions.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether nothing is queued.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of processed positions.
    #[must_use]
    #[inline]
    pub fn explored_count(&self) -> usize {
        self.explored.len()
    }

    /// Forgets everything and starts over from `seed`.
    pub fn reset(&mut self, seed: BlockPos) {
        self.queue.clear();
        self.queued.clear();
        self.explored.clear();
        self.offer(seed);
    }
}
