use super::{FluidEntry, FluidId};

/// No fluid.
pub const EMPTY: FluidEntry = FluidEntry {
    id: FluidId::EMPTY,
    name: "empty",
};

/// Water that is not a source block.
pub const FLOWING_WATER: FluidEntry = FluidEntry {
    id: FluidId::FLOWING_WATER,
    name: "flowing_water",
};

/// Water source.
pub const WATER: FluidEntry = FluidEntry {
    id: FluidId::WATER,
    name: "water",
};

/// Lava that is not a source block.
pub const FLOWING_LAVA: FluidEntry = FluidEntry {
    id: FluidId::FLOWING_LAVA,
    name: "flowing_lava",
};

/// Lava source.
pub const LAVA: FluidEntry = FluidEntry {
    id: FluidId::LAVA,
    name: "lava",
};

/// Every vanilla fluid, in id order.
pub const ALL: [FluidEntry; 5] = [EMPTY, FLOWING_WATER, WATER, FLOWING_LAVA, LAVA];
