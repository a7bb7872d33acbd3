//! Simulation configuration.

use crate::board::Board;
use crate::engine::Simulation;
use crate::error::Error;
use crate::table::NeighborTable;
use crate::tunnel::TunnelMap;
use derivative::Derivative;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Simulation configuration.
///
/// A [`Simulation`] is generated from this configuration.
#[derive(Clone, Debug, Derivative, PartialEq, Eq)]
#[derivative(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Generations at which the board is handed to the snapshot sink.
    ///
    /// Must be non-empty, positive, and strictly ascending.
    #[derivative(Default(value = "vec![1, 10, 100, 1000]"))]
    pub milestones: Vec<u64>,
}

impl Config {
    /// Sets up a new configuration with the given milestones.
    pub fn new(milestones: Vec<u64>) -> Self {
        Self { milestones }
    }

    /// Sets the milestones.
    pub fn set_milestones(mut self, milestones: Vec<u64>) -> Self {
        self.milestones = milestones;
        self
    }

    /// Creates a simulation from the configuration.
    ///
    /// Builds the neighbor table for the board's dimensions and
    /// validates the milestone list. All construction errors surface
    /// here, before any generation is computed.
    pub fn simulation(&self, board: Board, tunnels: &TunnelMap) -> Result<Simulation, Error> {
        if tunnels.dimensions() != board.dimensions() {
            return Err(Error::DimensionMismatch {
                expected: board.dimensions(),
                found: tunnels.dimensions(),
            });
        }
        let (height, width) = board.dimensions();
        let table = NeighborTable::new(height, width, tunnels);
        Simulation::new(board, table, self.milestones.clone())
    }
}
