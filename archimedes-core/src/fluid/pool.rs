//! Connected fluid blocks treated as one body of fluid.
//!
//! A [`FluidPool`] starts from a single block and floods outward in small
//! batches, only as far as a request needs. Every quantity operation runs in
//! two phases: an exploration phase that only reads the grid and collects
//! candidate blocks, then a commit phase that mutates exactly those blocks.
//! A request that cannot be satisfied never reaches the commit phase.

use archimedes_registry::{FluidId, FluidState};
use archimedes_utils::BlockPos;
use rustc_hash::FxHashSet;

use crate::config::PoolConfig;
use crate::grid::FluidGrid;

use super::frontier::Frontier;

/// Positions processed per exploration step unless configured otherwise.
pub const DEFAULT_BATCH_SIZE: usize = 10;

const MAX_AMOUNT: u32 = FluidState::MAX_AMOUNT as u32;

/// What an accumulation pass is counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Search {
    /// Units of the pool's fluid.
    Fluid,
    /// Units of room for the pool's fluid.
    Space,
}

impl Search {
    const fn looks_for_space(self) -> bool {
        matches!(self, Search::Space)
    }
}

/// An incrementally explored pool of one fluid.
///
/// The pool borrows the grid mutably for its whole lifetime, so no other
/// writer can touch the grid between the exploration and commit phases.
///
/// Exploration state is kept between calls: a second operation continues
/// from where the previous one stopped and never revisits explored blocks.
/// Use [`FluidPool::reset`] to start over from the seed.
pub struct FluidPool<'a, G: FluidGrid + ?Sized> {
    grid: &'a mut G,
    fluid: FluidId,
    seed: BlockPos,
    extra_seeds: Vec<BlockPos>,
    frontier: Frontier,
    excluded: FxHashSet<BlockPos>,
    batch_size: usize,
    search_limit: Option<usize>,
}

impl<'a, G: FluidGrid + ?Sized> FluidPool<'a, G> {
    /// Creates a pool of `fluid` seeded at `seed`.
    ///
    /// Nothing is read from the grid until the first operation.
    pub fn new(grid: &'a mut G, seed: BlockPos, fluid: FluidId) -> Self {
        Self {
            grid,
            fluid,
            seed,
            extra_seeds: Vec::new(),
            frontier: Frontier::new(seed),
            excluded: FxHashSet::default(),
            batch_size: DEFAULT_BATCH_SIZE,
            search_limit: None,
        }
    }

    /// Creates a pool using the batch size and search limit from `config`.
    pub fn with_config(
        grid: &'a mut G,
        seed: BlockPos,
        fluid: FluidId,
        config: &PoolConfig,
    ) -> Self {
        let mut pool = Self::new(grid, seed, fluid);
        pool.batch_size = config.batch_size.max(1);
        pool.search_limit = config.search_limit;
        pool
    }

    /// Sets the number of positions processed per exploration step.
    #[must_use]
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Starts exploring from `pos` as well, so regions reached from any seed
    /// are treated as one pool.
    pub fn add_seed(&mut self, pos: BlockPos) {
        if pos != self.seed && !self.extra_seeds.contains(&pos) {
            self.extra_seeds.push(pos);
        }
        self.frontier.offer(pos);
    }

    /// Forbids `pos` from being counted or changed by this pool.
    ///
    /// The block is still explored, so fluid behind it stays reachable.
    pub fn mark_excluded(&mut self, pos: BlockPos) {
        self.excluded.insert(pos);
    }

    /// Whether `pos` was marked with [`FluidPool::mark_excluded`].
    #[must_use]
    pub fn is_excluded(&self, pos: BlockPos) -> bool {
        self.excluded.contains(&pos)
    }

    /// Number of positions explored so far.
    #[must_use]
    pub fn explored_count(&self) -> usize {
        self.frontier.explored_count()
    }

    /// Number of positions discovered but not yet explored.
    #[must_use]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Whether further exploration would find nothing new.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.frontier.is_empty() || self.limit_reached()
    }

    /// Drops all exploration progress and starts again from the seed.
    /// Exclusions are kept.
    pub fn reset(&mut self) {
        self.frontier.reset(self.seed);
        for &pos in &self.extra_seeds {
            self.frontier.offer(pos);
        }
    }

    fn limit_reached(&self) -> bool {
        self.search_limit
            .is_some_and(|limit| self.frontier.explored_count() >= limit)
    }

    /// Explores up to `batch_size` positions and returns them in the order
    /// they were processed.
    ///
    /// Each position's neighbors are queued if they hold this pool's fluid,
    /// or, when `look_for_space` is set, if they are air or an empty
    /// loggable block. An empty result means the pool is exhausted.
    pub fn explore_batch(&mut self, look_for_space: bool, batch_size: usize) -> Vec<BlockPos> {
        let mut batch = Vec::with_capacity(batch_size.min(self.frontier.len()));

        while batch.len() < batch_size && !self.limit_reached() {
            let Some(pos) = self.frontier.poll() else {
                break;
            };
            batch.push(pos);

            for neighbor in self.grid.neighbors(pos) {
                if self.frontier.is_known(neighbor) {
                    continue;
                }
                if self.is_traversable(neighbor, look_for_space) {
                    self.frontier.offer(neighbor);
                }
            }
        }

        log::trace!(
            "Explored {} positions of fluid {} pool at {}, {} queued",
            batch.len(),
            self.fluid.0,
            self.seed,
            self.frontier.len()
        );
        batch
    }

    fn can_hold(&self, pos: BlockPos) -> bool {
        self.grid.is_air(pos) || self.grid.is_loggable_and_empty(pos)
    }

    fn is_traversable(&self, pos: BlockPos, look_for_space: bool) -> bool {
        (look_for_space && self.can_hold(pos)) || self.grid.fluid_state(pos).is_same(self.fluid)
    }

    /// Units `pos` adds to a search.
    fn contribution(&self, pos: BlockPos, search: Search) -> u32 {
        match search {
            Search::Fluid => {
                let state = self.grid.fluid_state(pos);
                if state.is_same(self.fluid) {
                    u32::from(state.amount)
                } else {
                    0
                }
            }
            Search::Space => {
                if self.can_hold(pos) {
                    return MAX_AMOUNT;
                }
                let state = self.grid.fluid_state(pos);
                if state.is_same(self.fluid) {
                    u32::from(state.headroom())
                } else {
                    0
                }
            }
        }
    }

    /// Explores until `amount` units are found.
    ///
    /// Returns the contributing positions in discovery order, or `None` if the
    /// pool ran out first. Positions are only collected when `retain` is set.
    /// Never mutates the grid.
    fn accumulate(&mut self, search: Search, amount: u32, retain: bool) -> Option<Vec<BlockPos>> {
        let mut found: u32 = 0;
        let mut retained = Vec::new();

        while found < amount {
            let batch = self.explore_batch(search.looks_for_space(), self.batch_size);
            if batch.is_empty() {
                log::debug!(
                    "Fluid {} pool at {} exhausted looking for {amount} units of {search:?}, found {found}",
                    self.fluid.0,
                    self.seed
                );
                return None;
            }

            for pos in batch {
                if self.excluded.contains(&pos) {
                    continue;
                }
                let units = self.contribution(pos, search);
                if units == 0 {
                    continue;
                }
                if retain {
                    retained.push(pos);
                }
                found = found.saturating_add(units);
            }
        }

        Some(retained)
    }

    /// Whether at least `amount` units of fluid can be reached.
    pub fn check_for_fluid(&mut self, amount: u32) -> bool {
        self.accumulate(Search::Fluid, amount, false).is_some()
    }

    /// Whether room for at least `amount` units of fluid can be reached.
    pub fn check_for_space(&mut self, amount: u32) -> bool {
        self.accumulate(Search::Space, amount, false).is_some()
    }

    /// Whether there is room for the fluid held in every block of `carried`
    /// that exploration reaches.
    ///
    /// The `carried` blocks are excluded, so none of them can take fluid
    /// back. Demand grows as more of them are reached, which means a carried
    /// block in a separate pool only counts against its own pool.
    pub fn check_for_space_carrying(&mut self, carried: &[BlockPos]) -> bool {
        self.excluded.extend(carried.iter().copied());
        let mut demand: u32 = 0;
        let mut room: u32 = 0;

        loop {
            let batch = self.explore_batch(true, self.batch_size);
            if batch.is_empty() {
                log::debug!(
                    "Fluid {} pool at {} has room for {room} of {demand} carried units",
                    self.fluid.0,
                    self.seed
                );
                return false;
            }

            for pos in batch {
                if carried.contains(&pos) {
                    let state = self.grid.fluid_state(pos);
                    if state.is_same(self.fluid) {
                        demand = demand.saturating_add(u32::from(state.amount));
                    }
                } else if !self.excluded.contains(&pos) {
                    room = room.saturating_add(self.contribution(pos, Search::Space));
                }
            }

            if room >= demand {
                return true;
            }
        }
    }

    /// Takes exactly `amount` units of fluid out of the pool.
    ///
    /// Returns false without changing anything if the pool holds less.
    pub fn remove_fluid(&mut self, amount: u32) -> bool {
        let Some(positions) = self.accumulate(Search::Fluid, amount, true) else {
            return false;
        };

        let mut remaining = amount;
        for pos in positions {
            if remaining == 0 {
                break;
            }
            let state = self.grid.fluid_state(pos);
            if !state.is_same(self.fluid) {
                continue;
            }
            let transfer = u32::from(state.amount).min(remaining);
            remaining -= transfer;
            self.grid.change_fluid(pos, self.fluid, -(transfer as i32));
        }

        log::debug!(
            "Removed {amount} units of fluid {} from pool at {}",
            self.fluid.0,
            self.seed
        );
        true
    }

    /// Puts exactly `amount` units of fluid into the pool.
    ///
    /// Returns false without changing anything if there is less room.
    pub fn add_fluid(&mut self, amount: u32) -> bool {
        let Some(positions) = self.accumulate(Search::Space, amount, true) else {
            return false;
        };

        let mut remaining = amount;
        for pos in positions {
            if remaining == 0 {
                break;
            }
            let state = self.grid.fluid_state(pos);
            if !state.is_same(self.fluid) && !self.can_hold(pos) {
                continue;
            }
            let transfer = u32::from(state.headroom()).min(remaining);
            remaining -= transfer;
            self.grid.change_fluid(pos, self.fluid, transfer as i32);
        }

        log::debug!(
            "Added {amount} units of fluid {} to pool at {}",
            self.fluid.0,
            self.seed
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cell, MemoryGrid};

    const WATER: FluidId = FluidId::WATER;

    /// A row of `len` full water blocks along +x starting at the origin,
    /// sealed in solid.
    fn water_row(len: i32) -> MemoryGrid {
        let mut grid = MemoryGrid::enclosed();
        grid.fill(BlockPos::ZERO, BlockPos::new(len - 1, 0, 0), Cell::source(WATER));
        grid
    }

    fn snapshot(grid: &MemoryGrid, len: i32) -> Vec<Cell> {
        (0..len).map(|x| grid.get(BlockPos::new(x, 0, 0))).collect()
    }

    #[test]
    fn test_construction_does_not_explore() {
        let mut grid = water_row(3);
        let pool = FluidPool::new(&mut grid, BlockPos::ZERO, WATER);
        assert_eq!(pool.explored_count(), 0);
        assert_eq!(pool.frontier_len(), 1);
        assert!(!pool.is_exhausted());
    }

    #[test]
    fn test_remove_across_cells() {
        let mut grid = water_row(3);
        {
            let mut pool = FluidPool::new(&mut grid, BlockPos::ZERO, WATER);
            assert!(pool.remove_fluid(20));
        }
        assert_eq!(grid.total_amount(WATER), 4);
    }

    #[test]
    fn test_remove_is_exact() {
        for amount in 1..=24 {
            let mut grid = water_row(3);
            let mut pool = FluidPool::new(&mut grid, BlockPos::new(1, 0, 0), WATER);
            assert!(pool.remove_fluid(amount));
            assert_eq!(grid.total_amount(WATER), 24 - amount);
        }
    }

    #[test]
    fn test_remove_too_much_changes_nothing() {
        let mut grid = water_row(3);
        let before = snapshot(&grid, 3);
        {
            let mut pool = FluidPool::new(&mut grid, BlockPos::ZERO, WATER);
            assert!(!pool.remove_fluid(25));
            assert!(pool.is_exhausted());
        }
        assert_eq!(snapshot(&grid, 3), before);
        assert_eq!(grid.mutation_count(), 0);
    }

    #[test]
    fn test_check_for_fluid_is_read_only() {
        let mut grid = water_row(4);
        {
            let mut pool = FluidPool::new(&mut grid, BlockPos::ZERO, WATER);
            assert!(pool.check_for_fluid(32));
        }
        {
            let mut pool = FluidPool::new(&mut grid, BlockPos::ZERO, WATER);
            assert!(!pool.check_for_fluid(33));
        }
        assert_eq!(grid.mutation_count(), 0);
        assert_eq!(grid.total_amount(WATER), 32);
    }

    #[test]
    fn test_excluded_not_counted() {
        let mut grid = water_row(3);
        let middle = BlockPos::new(1, 0, 0);

        for (amount, expected) in [(16, true), (17, false)] {
            let mut pool = FluidPool::new(&mut grid, BlockPos::ZERO, WATER);
            pool.mark_excluded(middle);
            assert_eq!(pool.check_for_fluid(amount), expected);
        }
    }

    #[test]
    fn test_excluded_still_traversed() {
        // The excluded block is the only link between the seed and the far end.
        let mut grid = water_row(3);
        let middle = BlockPos::new(1, 0, 0);
        {
            let mut pool = FluidPool::new(&mut grid, BlockPos::ZERO, WATER);
            pool.mark_excluded(middle);
            assert!(pool.remove_fluid(16));
        }
        assert_eq!(grid.amount_at(middle), FluidState::MAX_AMOUNT);
        assert_eq!(grid.total_amount(WATER), 8);
    }

    #[test]
    fn test_exclusion_is_idempotent() {
        let mut grid = water_row(3);
        let middle = BlockPos::new(1, 0, 0);
        {
            let mut pool = FluidPool::new(&mut grid, BlockPos::ZERO, WATER);
            pool.mark_excluded(middle);
            pool.mark_excluded(middle);
            pool.mark_excluded(middle);
            assert!(pool.is_excluded(middle));
            assert!(!pool.remove_fluid(17));
            pool.reset();
            assert!(pool.remove_fluid(16));
        }
        assert_eq!(grid.amount_at(middle), FluidState::MAX_AMOUNT);
    }

    #[test]
    fn test_excluded_not_filled() {
        let mut grid = MemoryGrid::enclosed();
        let air = BlockPos::new(1, 0, 0);
        let loggable = BlockPos::new(0, 1, 0);
        grid.set(BlockPos::ZERO, Cell::source(WATER));
        grid.set(air, Cell::Air);
        grid.set(loggable, Cell::loggable());
        grid.set(BlockPos::new(2, 0, 0), Cell::Air);
        {
            let mut pool = FluidPool::new(&mut grid, BlockPos::ZERO, WATER);
            pool.mark_excluded(air);
            pool.mark_excluded(loggable);
            assert!(!pool.add_fluid(9));
            pool.reset();
            assert!(pool.add_fluid(8));
        }
        assert_eq!(grid.get(air), Cell::Air);
        assert_eq!(grid.get(loggable), Cell::loggable());
        assert_eq!(grid.get(BlockPos::new(2, 0, 0)), Cell::source(WATER));
    }

    #[test]
    fn test_extra_seed_joins_regions() {
        let mut grid = MemoryGrid::enclosed();
        grid.set(BlockPos::ZERO, Cell::source(WATER));
        grid.set(BlockPos::new(5, 0, 0), Cell::source(WATER));

        let mut pool = FluidPool::new(&mut grid, BlockPos::ZERO, WATER);
        assert!(!pool.check_for_fluid(9));
        pool.add_seed(BlockPos::new(5, 0, 0));
        pool.reset();
        assert!(pool.check_for_fluid(16));
        assert!(pool.is_exhausted());
    }

    #[test]
    fn test_carried_demand_grows_with_reach() {
        // Two carried blocks side by side share one free block.
        let mut grid = water_row(2);
        grid.set(BlockPos::new(2, 0, 0), Cell::Air);
        let carried = [BlockPos::ZERO, BlockPos::new(1, 0, 0)];

        {
            let mut pool = FluidPool::new(&mut grid, BlockPos::ZERO, WATER);
            assert!(!pool.check_for_space_carrying(&carried));
        }
        {
            let mut pool = FluidPool::new(&mut grid, BlockPos::ZERO, WATER);
            assert!(pool.check_for_space_carrying(&carried[..1]));
        }
        assert_eq!(grid.mutation_count(), 0);
    }

    #[test]
    fn test_other_fluid_blocks_pool() {
        let mut grid = water_row(3);
        grid.set(BlockPos::new(1, 0, 0), Cell::source(FluidId::LAVA));

        let mut pool = FluidPool::new(&mut grid, BlockPos::ZERO, WATER);
        assert!(pool.check_for_fluid(8));
        assert!(!pool.check_for_fluid(1));
        assert_eq!(pool.explored_count(), 1);
    }

    #[test]
    fn test_flowing_variant_is_same_pool() {
        let mut grid = water_row(2);
        grid.set(
            BlockPos::new(2, 0, 0),
            Cell::Fluid(FluidState::new(FluidId::FLOWING_WATER, 3)),
        );
        {
            let mut pool = FluidPool::new(&mut grid, BlockPos::ZERO, WATER);
            assert!(pool.remove_fluid(19));
        }
        assert_eq!(grid.total_amount(WATER), 0);
    }

    #[test]
    fn test_space_in_sealed_pool() {
        let mut grid = water_row(3);
        grid.set(BlockPos::new(1, 0, 0), Cell::Fluid(FluidState::new(WATER, 5)));

        let mut pool = FluidPool::new(&mut grid, BlockPos::ZERO, WATER);
        assert!(!pool.check_for_space(100));
        pool.reset();
        assert!(pool.check_for_space(3));
        pool.reset();
        assert!(!pool.check_for_space(4));
    }

    #[test]
    fn test_add_fills_air_and_headroom() {
        let mut grid = MemoryGrid::enclosed();
        grid.set(BlockPos::ZERO, Cell::Fluid(FluidState::new(WATER, 6)));
        grid.set(BlockPos::new(1, 0, 0), Cell::Air);
        grid.set(BlockPos::new(0, 1, 0), Cell::loggable());
        {
            let mut pool = FluidPool::new(&mut grid, BlockPos::ZERO, WATER);
            assert!(pool.add_fluid(18));
        }
        assert_eq!(grid.total_amount(WATER), 24);
        assert_eq!(
            grid.get(BlockPos::new(0, 1, 0)),
            Cell::Loggable(FluidState::source(WATER))
        );
        assert_eq!(grid.get(BlockPos::new(1, 0, 0)), Cell::source(WATER));
    }

    #[test]
    fn test_add_too_much_changes_nothing() {
        let mut grid = MemoryGrid::enclosed();
        grid.set(BlockPos::ZERO, Cell::Fluid(FluidState::new(WATER, 6)));
        grid.set(BlockPos::new(1, 0, 0), Cell::Air);
        {
            let mut pool = FluidPool::new(&mut grid, BlockPos::ZERO, WATER);
            assert!(!pool.add_fluid(11));
        }
        assert_eq!(grid.mutation_count(), 0);
        assert_eq!(grid.get(BlockPos::new(1, 0, 0)), Cell::Air);
    }

    #[test]
    fn test_add_respects_capacity() {
        let mut grid = MemoryGrid::enclosed();
        grid.fill(BlockPos::ZERO, BlockPos::new(4, 0, 0), Cell::Air);
        {
            let mut pool = FluidPool::new(&mut grid, BlockPos::ZERO, WATER);
            assert!(pool.add_fluid(37));
        }
        let amounts: Vec<u8> = (0..5).map(|x| grid.amount_at(BlockPos::new(x, 0, 0))).collect();
        assert!(amounts.iter().all(|&a| a <= FluidState::MAX_AMOUNT));
        assert_eq!(amounts.iter().map(|&a| u32::from(a)).sum::<u32>(), 37);
    }

    #[test]
    fn test_open_world_add_is_lazy() {
        let mut grid = MemoryGrid::open();
        {
            let mut pool = FluidPool::new(&mut grid, BlockPos::ZERO, WATER);
            assert!(pool.add_fluid(80));
            assert!(pool.explored_count() <= DEFAULT_BATCH_SIZE);
            assert!(!pool.is_exhausted());
        }
        assert_eq!(grid.total_amount(WATER), 80);
    }

    #[test]
    fn test_explore_batch_respects_size() {
        let mut grid = water_row(25);
        let mut pool = FluidPool::new(&mut grid, BlockPos::ZERO, WATER);

        let sizes: Vec<usize> = std::iter::repeat_with(|| pool.explore_batch(false, 10).len())
            .take(4)
            .collect();
        assert_eq!(sizes, vec![10, 10, 5, 0]);
        assert_eq!(pool.explored_count(), 25);
        assert!(pool.is_exhausted());
    }

    #[test]
    fn test_explore_batch_fluid_mode_skips_air() {
        let mut grid = MemoryGrid::open();
        grid.set(BlockPos::ZERO, Cell::source(WATER));
        let mut pool = FluidPool::new(&mut grid, BlockPos::ZERO, WATER);

        assert_eq!(pool.explore_batch(false, 10), vec![BlockPos::ZERO]);
        assert!(pool.explore_batch(false, 10).is_empty());
    }

    #[test]
    fn test_explore_batch_space_mode_enters_air() {
        let mut grid = MemoryGrid::enclosed();
        grid.set(BlockPos::ZERO, Cell::source(WATER));
        grid.set(BlockPos::new(0, 1, 0), Cell::Air);
        grid.set(BlockPos::new(0, -1, 0), Cell::loggable());
        grid.set(BlockPos::new(1, 0, 0), Cell::Loggable(FluidState::source(FluidId::LAVA)));
        let mut pool = FluidPool::new(&mut grid, BlockPos::ZERO, WATER);

        let batch = pool.explore_batch(true, 10);
        assert_eq!(batch.len(), 3);
        assert_eq!(batch[0], BlockPos::ZERO);
        assert!(batch.contains(&BlockPos::new(0, 1, 0)));
        assert!(batch.contains(&BlockPos::new(0, -1, 0)));
    }

    #[test]
    fn test_resumes_between_calls() {
        let mut grid = water_row(6);
        let mut pool = FluidPool::new(&mut grid, BlockPos::ZERO, WATER).batch_size(2);

        assert!(pool.check_for_fluid(16));
        assert_eq!(pool.explored_count(), 2);
        // Only the four unexplored blocks remain visible.
        assert!(pool.check_for_fluid(32));
        assert!(!pool.check_for_fluid(1));

        pool.reset();
        assert!(pool.check_for_fluid(48));
    }

    #[test]
    fn test_each_position_explored_once() {
        let mut grid = MemoryGrid::enclosed();
        grid.fill(BlockPos::ZERO, BlockPos::new(3, 3, 3), Cell::source(WATER));
        let mut pool = FluidPool::new(&mut grid, BlockPos::new(1, 1, 1), WATER);

        let mut seen = FxHashSet::default();
        let mut batches = 0;
        loop {
            let batch = pool.explore_batch(false, DEFAULT_BATCH_SIZE);
            if batch.is_empty() {
                break;
            }
            batches += 1;
            for pos in batch {
                assert!(seen.insert(pos), "{pos} explored twice");
            }
        }
        assert_eq!(seen.len(), 64);
        assert_eq!(batches, 64usize.div_ceil(DEFAULT_BATCH_SIZE));
    }

    #[test]
    fn test_search_limit_stops_endless_ocean() {
        let mut grid = MemoryGrid::with_fallback(Cell::source(WATER));
        let config = PoolConfig {
            search_limit: Some(100),
            ..PoolConfig::default()
        };
        let mut pool = FluidPool::with_config(&mut grid, BlockPos::ZERO, WATER, &config);

        assert!(!pool.check_for_space(1));
        assert_eq!(pool.explored_count(), 100);
        assert!(pool.is_exhausted());
    }

    #[test]
    fn test_zero_amount_succeeds_without_exploring() {
        let mut grid = MemoryGrid::enclosed();
        let mut pool = FluidPool::new(&mut grid, BlockPos::ZERO, WATER);
        assert!(pool.remove_fluid(0));
        assert!(pool.add_fluid(0));
        assert_eq!(pool.explored_count(), 0);
    }
}
