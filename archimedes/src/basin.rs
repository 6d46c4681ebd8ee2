//! A sealed basin that blocks are placed into one at a time.

use archimedes_core::fluid::{displace_all, is_fluid_in_way, move_fluid_in_way};
use archimedes_core::{Cell, FluidGrid, MemoryGrid, PoolConfig};
use archimedes_registry::FluidId;
use archimedes_utils::BlockPos;

/// Width of the basin along x and z.
const SIZE: i32 = 4;

/// Outcome of a basin run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasinReport {
    /// Blocks placed after pushing their fluid away.
    pub placed: usize,
    /// Placements cancelled because the fluid had nowhere to go.
    pub refused: usize,
    /// Whether the final piston push went through.
    pub piston_moved: bool,
    /// Units of fluid left in the basin.
    pub remaining: u32,
}

/// A `SIZE`x2x`SIZE` basin in stone: the bottom layer full of `fluid`, the top
/// layer air.
fn build(fluid: FluidId) -> MemoryGrid {
    let mut grid = MemoryGrid::enclosed();
    grid.fill(
        BlockPos::new(0, 0, 0),
        BlockPos::new(SIZE - 1, 0, SIZE - 1),
        Cell::source(fluid),
    );
    grid.fill(
        BlockPos::new(0, 1, 0),
        BlockPos::new(SIZE - 1, 1, SIZE - 1),
        Cell::Air,
    );
    grid
}

fn place(grid: &mut MemoryGrid, pos: BlockPos, config: &PoolConfig) -> bool {
    if is_fluid_in_way(grid, pos, config) {
        log::info!("Placement at {pos} cancelled, {} units have nowhere to go", grid.amount_at(pos));
        return false;
    }
    if !move_fluid_in_way(grid, pos, config) {
        return false;
    }
    grid.set(pos, Cell::Solid);
    true
}

/// Fills the basin with stone, bottom layer first, then tries to push two
/// top blocks with a piston.
pub fn run(fluid: FluidId, config: &PoolConfig) -> BasinReport {
    let _span = tracing::info_span!("basin", fluid = fluid.0).entered();
    let mut grid = build(fluid);
    let mut report = BasinReport {
        placed: 0,
        refused: 0,
        piston_moved: false,
        remaining: 0,
    };

    for y in 0..2 {
        for x in 0..SIZE {
            for z in 0..SIZE {
                let pos = BlockPos::new(x, y, z);
                if grid.get(pos) == Cell::Solid {
                    continue;
                }
                if place(&mut grid, pos, config) {
                    report.placed += 1;
                } else {
                    report.refused += 1;
                }
            }
        }
    }

    let pushed = [BlockPos::new(0, 1, 0), BlockPos::new(1, 1, 0)];
    report.piston_moved = pushed
        .iter()
        .all(|&pos| !grid.fluid_state(pos).is_empty())
        && displace_all(&mut grid, &pushed, config);
    tracing::info!(moved = report.piston_moved, "Piston push");

    report.remaining = grid.total_amount(fluid);
    report
}
