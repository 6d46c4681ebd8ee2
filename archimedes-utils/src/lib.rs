//! Shared value types for the Archimedes workspace.

pub mod direction;
pub mod math;
pub mod types;

pub use direction::Direction;
pub use types::BlockPos;
