//! Access to the blocks a fluid pool is made of.
//!
//! The pool never stores amounts itself. It reads fluid states through
//! [`FluidGrid`] and asks the grid to apply deltas, so capacity enforcement
//! lives in exactly one place.

mod memory;

pub use memory::{Cell, MemoryGrid};

use archimedes_registry::{FluidId, FluidState};
use archimedes_utils::BlockPos;

/// A mutable voxel world holding fluids.
pub trait FluidGrid {
    /// The fluid held at `pos`.
    fn fluid_state(&self, pos: BlockPos) -> FluidState;

    /// Whether `pos` is an air block.
    fn is_air(&self, pos: BlockPos) -> bool;

    /// Whether `pos` is a block that can hold fluid in its logged state and
    /// currently holds none.
    fn is_loggable_and_empty(&self, pos: BlockPos) -> bool;

    /// Adds `delta` units of `fluid` to `pos`, or removes them when `delta`
    /// is negative. The result is clamped to `0..=FluidState::MAX_AMOUNT`.
    fn change_fluid(&mut self, pos: BlockPos, fluid: FluidId, delta: i32);

    /// The positions fluid can move to from `pos`.
    fn neighbors(&self, pos: BlockPos) -> [BlockPos; 6] {
        pos.neighbors()
    }
}
