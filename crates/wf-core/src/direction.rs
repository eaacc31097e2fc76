//! The eight compass directions used by move orders.
//!
//! Grid coordinates grow east (`dx > 0`) and south (`dy > 0`), so `North`
//! is `(0, -1)`.

use std::str::FromStr;

use crate::CoreError;

/// A step from one tile to one of its eight neighbours.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions, clockwise from north.  Adjacency iteration uses this
    /// order so path ties break the same way on every run.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// `(dx, dy)` offset of one step in this direction.
    #[inline]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North     => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East      => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South     => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West      => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Short compass label ("n", "ne", …).
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North     => "n",
            Direction::NorthEast => "ne",
            Direction::East      => "e",
            Direction::SouthEast => "se",
            Direction::South     => "s",
            Direction::SouthWest => "sw",
            Direction::West      => "w",
            Direction::NorthWest => "nw",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str() == lower)
            .ok_or_else(|| CoreError::UnknownDirection(s.to_owned()))
    }
}
