//! Fluid identities and the registry that names them.

/// Fluid ids, states and their registry.
pub mod fluid;

pub use fluid::{FluidEntry, FluidId, FluidRegistry, FluidState, fluid_ids, vanilla};

/// Shared behaviour of registries.
pub trait RegistryExt {
    /// Stops any further registration.
    fn freeze(&mut self);
}
