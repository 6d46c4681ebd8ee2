/// Fluid ids and registry entries.
pub mod fluid;
/// Lookup of fluids by id and name.
pub mod registry;
/// Kind and amount of fluid held by one block.
pub mod state;
/// The built-in fluids.
pub mod vanilla;

pub use fluid::*;
pub use registry::*;
pub use state::*;
