//! Face directions used to step from a block to its neighbours.

use crate::math::Vector3;

/// A face of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// -Y
    Down,
    /// +Y
    Up,
    /// -Z
    North,
    /// +Z
    South,
    /// -X
    West,
    /// +X
    East,
}

/// Unit steps indexed by the direction's position in [`Direction::ALL`].
const STEPS: [Vector3<i32>; 6] = [
    Vector3::new(0, -1, 0),
    Vector3::new(0, 1, 0),
    Vector3::new(0, 0, -1),
    Vector3::new(0, 0, 1),
    Vector3::new(-1, 0, 0),
    Vector3::new(1, 0, 0),
];

impl Direction {
    /// Every face, vertical ones first. Flood fills visit neighbours in this
    /// order, which keeps exploration deterministic.
    pub const ALL: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// The unit vector pointing out of this face.
    #[must_use]
    pub const fn step(self) -> Vector3<i32> {
        STEPS[self as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_unit_and_distinct() {
        for (i, direction) in Direction::ALL.into_iter().enumerate() {
            let step = direction.step();
            assert_eq!(step.x.abs() + step.y.abs() + step.z.abs(), 1);
            assert!(Direction::ALL[i + 1..].iter().all(|other| other.step() != step));
        }
    }

    #[test]
    fn test_faces_pair_up() {
        let origin = Vector3::default();
        let total = Direction::ALL
            .into_iter()
            .fold(origin, |sum, direction| sum + direction.step());
        assert_eq!(total, origin);
        assert_eq!(Direction::Up.step(), Vector3::new(0, 1, 0));
    }
}
