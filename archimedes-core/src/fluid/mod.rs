//! Fluid pools.
//!
//! Connected blocks of the same fluid behave as one body: fluid pushed out of
//! one block by a placement spreads into the free room of the whole pool,
//! and a placement is refused when the pool has no room left.

pub mod displacement;
pub mod frontier;
pub mod pool;

pub use displacement::{displace_all, is_fluid_in_way, move_fluid_in_way};
pub use frontier::Frontier;
pub use pool::{DEFAULT_BATCH_SIZE, FluidPool};
