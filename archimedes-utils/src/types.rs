//! Position types shared by every crate.

use std::fmt::{self, Display};

use crate::{direction::Direction, math::Vector3};

/// A block position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlockPos(pub Vector3<i32>);

impl BlockPos {
    /// The origin of the world.
    pub const ZERO: BlockPos = BlockPos(Vector3::new(0, 0, 0));

    /// Creates a new block position.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    /// The x coordinate.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.0.x
    }

    /// The y coordinate.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.0.y
    }

    /// The z coordinate.
    #[must_use]
    pub const fn z(&self) -> i32 {
        self.0.z
    }

    /// Returns the adjacent position in `direction`.
    #[must_use]
    pub fn relative(&self, direction: Direction) -> Self {
        Self(self.0 + direction.step())
    }

    /// The six face-adjacent positions, in [`Direction::ALL`] order.
    #[must_use]
    pub fn neighbors(&self) -> [BlockPos; 6] {
        Direction::ALL.map(|direction| self.relative(direction))
    }
}

impl Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0.x, self.0.y, self.0.z)
    }
}
