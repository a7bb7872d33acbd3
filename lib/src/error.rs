//! All kinds of errors in this crate.

use crate::cells::{Axis, Coord};
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
///
/// Every variant except [`InternalInvariant`](Error::InternalInvariant)
/// is raised while the simulation is being constructed, before any
/// generation runs. `InternalInvariant` marks a defect in a built
/// table, not a recoverable state.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Grid dimensions {found:?} disagree with the board dimensions {expected:?}.
    DimensionMismatch {
        expected: (isize, isize),
        found: (isize, isize),
    },
    /// {axis:?} tunnel color {color:#08x} marks cells {coords:?}; a tunnel needs exactly two mouths.
    MalformedTunnel {
        axis: Axis,
        color: u32,
        coords: Vec<Coord>,
    },
    /// Cell {coord:?} is a mouth of two different {axis:?} tunnels.
    DuplicateMouth { axis: Axis, coord: Coord },
    /// Tunnel mouth {mouth:?} lies outside the {board:?} board.
    MouthOutOfBounds {
        axis: Axis,
        mouth: Coord,
        board: (isize, isize),
    },
    /// Invalid milestone list: {0}.
    InvalidMilestone(String),
    /// Neighbor lookup for cell {cell:?} produced the out-of-board destination {dest:?}.
    InternalInvariant { cell: Coord, dest: Coord },
}
