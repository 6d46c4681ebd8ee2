use super::{FluidEntry, FluidId, vanilla};
use crate::RegistryExt;
use rustc_hash::FxHashMap;

/// Name and id lookup for fluids.
pub struct FluidRegistry {
    by_id: FxHashMap<FluidId, FluidEntry>,
    by_name: FxHashMap<&'static str, FluidId>,
    allows_registering: bool,
}

impl FluidRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_id: FxHashMap::default(),
            by_name: FxHashMap::default(),
            allows_registering: true,
        }
    }

    /// Creates a frozen registry holding the vanilla fluids.
    #[must_use]
    pub fn new_vanilla() -> Self {
        let mut registry = Self::new();
        for entry in vanilla::ALL {
            registry.register(entry);
        }
        registry.freeze();
        registry
    }

    /// Registers a fluid.
    ///
    /// # Panics
    /// Panics if the registry is frozen.
    pub fn register(&mut self, entry: FluidEntry) {
        assert!(
            self.allows_registering,
            "Cannot register fluid after registry is frozen"
        );
        if self.by_id.contains_key(&entry.id) {
            log::warn!("Fluid id {} registered twice, replacing", entry.id.0);
        }
        self.by_name.insert(entry.name, entry.id);
        self.by_id.insert(entry.id, entry);
    }

    /// Looks up a fluid by id.
    #[must_use]
    pub fn get(&self, id: FluidId) -> Option<&FluidEntry> {
        self.by_id.get(&id)
    }

    /// Looks up a fluid id by name. Accepts an optional `minecraft:` prefix.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<FluidId> {
        let name = name.strip_prefix("minecraft:").unwrap_or(name);
        self.by_name.get(name).copied()
    }

    /// Number of registered fluids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether no fluid is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl Default for FluidRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryExt for FluidRegistry {
    fn freeze(&mut self) {
        self.allows_registering = false;
    }
}
