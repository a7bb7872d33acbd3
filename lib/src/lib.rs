//! Conway's Game of Life on a grid whose adjacency is rewired by
//! wormhole tunnels.
//!
//! Tunnel mouths come in color-coded pairs, one set per axis. A
//! [`TunnelMap`] turns the color grids into mouth pairings, a
//! [`NeighborTable`] resolves every cell's four orthogonal lookups
//! (tunnels included), and [`step`] advances a [`Board`] one
//! generation at a time. [`Config`] ties them together into a
//! [`Simulation`] that reports back at the requested milestones.

mod board;
mod cells;
mod config;
mod engine;
mod error;
mod table;
mod tunnel;

pub use board::Board;
pub use cells::{Axis, Coord, Direction};
pub use config::Config;
pub use engine::{step, Simulation, Status};
pub use error::Error;
pub use table::NeighborTable;
pub use tunnel::{ColorGrid, TunnelMap};
