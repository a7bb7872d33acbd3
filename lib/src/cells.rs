//! Coordinates and directions on the grid.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The coordinates of a cell.
///
/// `(row, column)`, both 0-indexed. The coordinates are signed so that
/// one-step arithmetic may leave the grid before the bounds check runs.
pub type Coord = (isize, isize);

/// The axis a tunnel lives on.
///
/// Horizontal tunnels rewire `Left`/`Right` lookups,
/// vertical tunnels rewire `Up`/`Down` lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// Left/right.
    Horizontal,
    /// Up/down.
    Vertical,
}

/// The four orthogonal lookup directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Towards smaller row indices.
    Up,
    /// Towards larger column indices.
    Right,
    /// Towards larger row indices.
    Down,
    /// Towards smaller column indices.
    Left,
}

impl Direction {
    /// All four directions, in table precedence order.
    ///
    /// When two directions of one cell resolve to the same destination,
    /// the one that comes later in this array is the one that is dropped.
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// The direction pointing back at the caller.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    /// The `(row, column)` offset of one ordinary step.
    #[inline]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Right => (0, 1),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
        }
    }

    /// The axis this direction moves along.
    #[inline]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Up | Self::Down => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }

    /// Index of this direction in a dense per-cell table entry.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}
