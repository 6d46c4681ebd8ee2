use archimedes_registry::{FluidId, FluidState};
use archimedes_utils::BlockPos;
use rustc_hash::FxHashMap;

use super::FluidGrid;

/// A single block in a [`MemoryGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Nothing.
    Air,
    /// A block fluid can neither enter nor pass.
    Solid,
    /// A block of free fluid.
    Fluid(FluidState),
    /// A block that keeps its shape while holding fluid, like a waterlogged slab.
    Loggable(FluidState),
}

impl Cell {
    /// The fluid held by this block.
    #[must_use]
    pub const fn fluid_state(self) -> FluidState {
        match self {
            Cell::Fluid(state) | Cell::Loggable(state) => state,
            Cell::Air | Cell::Solid => FluidState::EMPTY,
        }
    }

    /// A full block of `fluid`.
    #[must_use]
    pub const fn source(fluid: FluidId) -> Self {
        Cell::Fluid(FluidState::source(fluid))
    }

    /// An empty loggable block.
    #[must_use]
    pub const fn loggable() -> Self {
        Cell::Loggable(FluidState::EMPTY)
    }
}

/// Sparse in-memory grid.
///
/// Blocks that were never set read as the fallback cell, so the same type can
/// model an endless open world (air fallback) or a sealed box (solid fallback).
#[derive(Debug, Clone)]
pub struct MemoryGrid {
    cells: FxHashMap<BlockPos, Cell>,
    fallback: Cell,
    mutations: usize,
}

impl MemoryGrid {
    /// A grid where every unset block is `fallback`.
    #[must_use]
    pub fn with_fallback(fallback: Cell) -> Self {
        Self {
            cells: FxHashMap::default(),
            fallback,
            mutations: 0,
        }
    }

    /// A grid that is air everywhere it was not set.
    #[must_use]
    pub fn open() -> Self {
        Self::with_fallback(Cell::Air)
    }

    /// A grid that is solid everywhere it was not set.
    #[must_use]
    pub fn enclosed() -> Self {
        Self::with_fallback(Cell::Solid)
    }

    /// The block at `pos`.
    #[must_use]
    pub fn get(&self, pos: BlockPos) -> Cell {
        self.cells.get(&pos).copied().unwrap_or(self.fallback)
    }

    /// Replaces the block at `pos`. An empty fluid cell is stored as air.
    pub fn set(&mut self, pos: BlockPos, cell: Cell) {
        let cell = match cell {
            Cell::Fluid(state) if state.is_empty() => Cell::Air,
            cell => cell,
        };
        self.cells.insert(pos, cell);
    }

    /// Sets every block in the box spanned by `from` and `to`, both inclusive.
    pub fn fill(&mut self, from: BlockPos, to: BlockPos, cell: Cell) {
        for x in from.x().min(to.x())..=from.x().max(to.x()) {
            for y in from.y().min(to.y())..=from.y().max(to.y()) {
                for z in from.z().min(to.z())..=from.z().max(to.z()) {
                    self.set(BlockPos::new(x, y, z), cell);
                }
            }
        }
    }

    /// Units of fluid at `pos`, whatever the fluid.
    #[must_use]
    pub fn amount_at(&self, pos: BlockPos) -> u8 {
        self.get(pos).fluid_state().amount
    }

    /// Total units of `fluid` over every block that was explicitly set.
    #[must_use]
    pub fn total_amount(&self, fluid: FluidId) -> u32 {
        self.cells
            .values()
            .map(|cell| cell.fluid_state())
            .filter(|state| state.is_same(fluid))
            .map(|state| u32::from(state.amount))
            .sum()
    }

    /// Number of accepted [`FluidGrid::change_fluid`] calls.
    #[must_use]
    pub fn mutation_count(&self) -> usize {
        self.mutations
    }
}

impl Default for MemoryGrid {
    fn default() -> Self {
        Self::open()
    }
}

impl FluidGrid for MemoryGrid {
    fn fluid_state(&self, pos: BlockPos) -> FluidState {
        self.get(pos).fluid_state()
    }

    fn is_air(&self, pos: BlockPos) -> bool {
        matches!(self.get(pos), Cell::Air)
    }

    fn is_loggable_and_empty(&self, pos: BlockPos) -> bool {
        matches!(self.get(pos), Cell::Loggable(state) if state.is_empty())
    }

    fn change_fluid(&mut self, pos: BlockPos, fluid: FluidId, delta: i32) {
        let cell = self.get(pos);
        if matches!(cell, Cell::Solid) {
            log::warn!("Ignoring fluid change at solid block {pos}");
            return;
        }

        let current = cell.fluid_state();
        if !current.is_empty() && !current.is_same(fluid) {
            log::warn!(
                "Ignoring change of fluid {} at {pos}, block holds fluid {}",
                fluid.0,
                current.fluid_id.0
            );
            return;
        }

        let fluid_id = if current.is_empty() {
            fluid
        } else {
            current.fluid_id
        };
        let amount =
            (i32::from(current.amount) + delta).clamp(0, i32::from(FluidState::MAX_AMOUNT)) as u8;
        let state = FluidState::new(fluid_id, amount);

        let cell = match cell {
            Cell::Loggable(_) => Cell::Loggable(state),
            _ => Cell::Fluid(state),
        };
        self.set(pos, cell);
        self.mutations += 1;
    }
}
