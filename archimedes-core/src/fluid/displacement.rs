//! Pushing fluid out of blocks that are about to be overwritten.
//!
//! When a block is placed into fluid, or a piston moves blocks through it,
//! the fluid in the affected blocks has to go somewhere. These helpers push it
//! into the rest of its pool, or report that the pool has no room so the
//! caller can cancel the action.

use archimedes_registry::FluidState;
use archimedes_utils::BlockPos;

use crate::config::PoolConfig;
use crate::grid::FluidGrid;

use super::pool::FluidPool;

/// Whether the fluid at `pos` is stuck: it cannot be pushed into the rest of
/// its pool. Blocks without fluid are never in the way.
pub fn is_fluid_in_way<G: FluidGrid + ?Sized>(
    grid: &mut G,
    pos: BlockPos,
    config: &PoolConfig,
) -> bool {
    !has_room(grid, pos, &[pos], config)
}

/// Pushes the fluid at `pos` into the rest of its pool and empties `pos`.
///
/// Returns false without changing anything if the pool has no room.
pub fn move_fluid_in_way<G: FluidGrid + ?Sized>(
    grid: &mut G,
    pos: BlockPos,
    config: &PoolConfig,
) -> bool {
    displace(grid, pos, &[pos], config)
}

/// Pushes the fluid out of every block in `positions`, as a piston does
/// before moving them. None of the listed blocks can receive fluid.
///
/// Every block is checked before any is moved, and a blocked block cancels
/// the whole move. Each block's pool must hold the fluid of every listed
/// block it reaches, and all listed blocks of one fluid must fit into the
/// room their pools offer together.
///
/// Blocks of different fluids are checked independently. When two fluids
/// compete for the same free room the move can still run out of room
/// halfway: the blocks displaced so far stay moved and false is returned.
pub fn displace_all<G: FluidGrid + ?Sized>(
    grid: &mut G,
    positions: &[BlockPos],
    config: &PoolConfig,
) -> bool {
    let filled: Vec<(BlockPos, FluidState)> = positions
        .iter()
        .map(|&pos| (pos, grid.fluid_state(pos)))
        .filter(|(_, state)| !state.is_empty())
        .collect();

    for &(pos, _) in &filled {
        if !has_room(grid, pos, positions, config) {
            log::debug!("Fluid at {pos} has nowhere to go, cancelling move");
            return false;
        }
    }

    // Pools explored one block at a time may still share their free room.
    for (i, &(pos, state)) in filled.iter().enumerate() {
        if filled[..i]
            .iter()
            .any(|(_, earlier)| earlier.is_same(state.fluid_id))
        {
            continue;
        }
        let same_kind = filled
            .iter()
            .filter(|(_, other)| other.is_same(state.fluid_id));
        let demand: u32 = same_kind.clone().map(|(_, other)| u32::from(other.amount)).sum();

        let mut pool = FluidPool::with_config(grid, pos, state.fluid_id, config);
        for &other in positions {
            pool.mark_excluded(other);
        }
        for &(seed, _) in same_kind {
            pool.add_seed(seed);
        }
        if !pool.check_for_space(demand) {
            log::debug!(
                "Pools around {pos} lack room for {demand} units of fluid {}, cancelling move",
                state.fluid_id.0
            );
            return false;
        }
    }

    for &(pos, _) in &filled {
        if !displace(grid, pos, positions, config) {
            log::warn!("Pool filled up while displacing fluid at {pos}");
            return false;
        }
    }
    true
}

fn has_room<G: FluidGrid + ?Sized>(
    grid: &mut G,
    pos: BlockPos,
    carried: &[BlockPos],
    config: &PoolConfig,
) -> bool {
    let state = grid.fluid_state(pos);
    if state.is_empty() {
        return true;
    }

    FluidPool::with_config(grid, pos, state.fluid_id, config).check_for_space_carrying(carried)
}

fn displace<G: FluidGrid + ?Sized>(
    grid: &mut G,
    pos: BlockPos,
    excluded: &[BlockPos],
    config: &PoolConfig,
) -> bool {
    let state = grid.fluid_state(pos);
    if state.is_empty() {
        return true;
    }

    let moved = {
        let mut pool = FluidPool::with_config(grid, pos, state.fluid_id, config);
        for &other in excluded {
            pool.mark_excluded(other);
        }
        pool.add_fluid(u32::from(state.amount))
    };
    if !moved {
        return false;
    }

    grid.change_fluid(pos, state.fluid_id, -i32::from(state.amount));
    log::debug!(
        "Displaced {} units of fluid {} from {pos}",
        state.amount,
        state.fluid_id.0
    );
    true
}
