//! # Archimedes core
//!
//! Treats connected fluid blocks as one pool and moves whole amounts of fluid
//! across it. Pools are discovered lazily with a budgeted flood fill, so a
//! request only touches as much of the world as it needs.
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    clippy::unwrap_used
)]
#![allow(
    clippy::single_call_fn,
    clippy::multiple_inherent_impl,
    clippy::shadow_unrelated,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]

/// Pool configuration.
pub mod config;
/// Error types.
pub mod error;
/// Fluid pools and displacement.
pub mod fluid;
/// The grid the pools live in.
pub mod grid;

pub use config::{LogConfig, PoolConfig};
pub use error::ConfigError;
pub use fluid::{FluidPool, Frontier};
pub use grid::{Cell, FluidGrid, MemoryGrid};
