use super::FluidId;

/// The fluid held by a single block: which fluid and how much of it.
///
/// Amounts run from 0 to [`FluidState::MAX_AMOUNT`]; a full block is a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FluidState {
    /// The fluid in this block.
    pub fluid_id: FluidId,
    /// How many units of fluid the block holds.
    pub amount: u8,
}

impl FluidState {
    /// Number of units a single block can hold.
    pub const MAX_AMOUNT: u8 = 8;

    /// A block without fluid.
    pub const EMPTY: FluidState = FluidState {
        fluid_id: FluidId::EMPTY,
        amount: 0,
    };

    /// Creates a fluid state, clamping `amount` to the block capacity.
    /// A zero amount or the empty fluid collapses to [`FluidState::EMPTY`].
    #[must_use]
    pub const fn new(fluid_id: FluidId, amount: u8) -> Self {
        if amount == 0 || fluid_id.is_empty() {
            return Self::EMPTY;
        }
        let amount = if amount > Self::MAX_AMOUNT {
            Self::MAX_AMOUNT
        } else {
            amount
        };
        Self { fluid_id, amount }
    }

    /// A full block of `fluid_id`.
    #[must_use]
    pub const fn source(fluid_id: FluidId) -> Self {
        Self::new(fluid_id, Self::MAX_AMOUNT)
    }

    /// Whether this block holds no fluid.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.amount == 0 || self.fluid_id.is_empty()
    }

    /// Whether this block is full.
    #[must_use]
    pub const fn is_source(&self) -> bool {
        !self.is_empty() && self.amount == Self::MAX_AMOUNT
    }

    /// Whether this block holds a fluid of the same kind as `fluid_id`.
    #[must_use]
    pub const fn is_same(&self, fluid_id: FluidId) -> bool {
        !self.is_empty() && self.fluid_id.is_same(fluid_id)
    }

    /// Units that can still be added before the block is full.
    #[must_use]
    pub const fn headroom(&self) -> u8 {
        Self::MAX_AMOUNT - self.amount
    }
}

impl Default for FluidState {
    fn default() -> Self {
        Self::EMPTY
    }
}
