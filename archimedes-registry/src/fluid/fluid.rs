/// Fluid ID - raw registry id matching vanilla.
///
/// Vanilla IDs:
///   0 = Empty
///   1 = Flowing Water
///   2 = Water
///   3 = Flowing Lava
///   4 = Lava
///
/// Anything above 4 is a custom fluid that is its own source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FluidId(pub u16);

impl FluidId {
    /// No fluid.
    pub const EMPTY: FluidId = FluidId(fluid_ids::EMPTY);
    /// Flowing water.
    pub const FLOWING_WATER: FluidId = FluidId(fluid_ids::FLOWING_WATER);
    /// Water source.
    pub const WATER: FluidId = FluidId(fluid_ids::WATER);
    /// Flowing lava.
    pub const FLOWING_LAVA: FluidId = FluidId(fluid_ids::FLOWING_LAVA);
    /// Lava source.
    pub const LAVA: FluidId = FluidId(fluid_ids::LAVA);

    /// Returns true if this is the empty fluid.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == fluid_ids::EMPTY
    }

    /// The source variant of this fluid. Flowing fluids map to their source,
    /// everything else maps to itself.
    #[must_use]
    pub const fn source(self) -> FluidId {
        match self.0 {
            fluid_ids::FLOWING_WATER => Self::WATER,
            fluid_ids::FLOWING_LAVA => Self::LAVA,
            _ => self,
        }
    }

    /// Whether two ids name the same kind of fluid, like vanilla's `Fluid.isSame`.
    /// The empty fluid is never the same as anything.
    #[must_use]
    pub const fn is_same(self, other: FluidId) -> bool {
        !self.is_empty() && self.source().0 == other.source().0
    }
}

/// Vanilla fluid IDs
pub mod fluid_ids {
    /// Empty fluid (ID: 0)
    pub const EMPTY: u16 = 0;
    /// Flowing water (ID: 1)
    pub const FLOWING_WATER: u16 = 1;
    /// Water source (ID: 2)
    pub const WATER: u16 = 2;
    /// Flowing lava (ID: 3)
    pub const FLOWING_LAVA: u16 = 3;
    /// Lava source (ID: 4)
    pub const LAVA: u16 = 4;
}

/// A registered fluid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FluidEntry {
    /// Registry id.
    pub id: FluidId,
    /// Registry name, without namespace.
    pub name: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flowing_is_same_as_source() {
        assert!(FluidId::FLOWING_WATER.is_same(FluidId::WATER));
        assert!(FluidId::WATER.is_same(FluidId::FLOWING_WATER));
        assert!(FluidId::LAVA.is_same(FluidId::FLOWING_LAVA));
        assert!(!FluidId::WATER.is_same(FluidId::LAVA));
    }

    #[test]
    fn test_empty_is_never_same() {
        assert!(!FluidId::EMPTY.is_same(FluidId::EMPTY));
        assert!(!FluidId::EMPTY.is_same(FluidId::WATER));
        assert!(!FluidId::WATER.is_same(FluidId::EMPTY));
    }

    #[test]
    fn test_custom_fluid_is_its_own_source() {
        let oil = FluidId(17);
        assert_eq!(oil.source(), oil);
        assert!(oil.is_same(oil));
        assert!(!oil.is_same(FluidId::WATER));
    }
}
