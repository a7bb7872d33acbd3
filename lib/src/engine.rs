//! Advancing the board, one generation at a time.

use crate::board::Board;
use crate::cells::{Coord, Direction};
use crate::error::Error;
use crate::table::NeighborTable;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The four diagonal lookups, each a vertical hop followed by a
/// horizontal hop. See [`NeighborTable::diagonal`].
const DIAGONALS: [(Direction, Direction); 4] = [
    (Direction::Up, Direction::Left),
    (Direction::Up, Direction::Right),
    (Direction::Down, Direction::Left),
    (Direction::Down, Direction::Right),
];

/// Advances one generation.
///
/// Every cell's next state is a pure function of the previous board and
/// the table, so the input board is left untouched and a brand-new board
/// is returned. With the `rayon` feature the rows are computed in
/// parallel; the result is bit-identical either way.
///
/// # Errors
///
/// [`Error::InternalInvariant`] if a table destination falls outside the
/// board. This is unreachable for a table built for this board's
/// dimensions and marks a defect, not a recoverable state.
///
/// # Panics
///
/// Panics if the board and the table disagree on dimensions.
pub fn step(board: &Board, table: &NeighborTable) -> Result<Board, Error> {
    assert_eq!(
        board.dimensions(),
        table.dimensions(),
        "board and neighbor table dimensions must match"
    );
    let rows = next_rows(board, table)?;
    Ok(Board::from_fn(board.height(), board.width(), |(row, col)| {
        rows[row as usize][col as usize]
    }))
}

#[cfg(feature = "rayon")]
fn next_rows(board: &Board, table: &NeighborTable) -> Result<Vec<Vec<bool>>, Error> {
    (0..board.height())
        .into_par_iter()
        .map(|row| next_row(board, table, row))
        .collect()
}

#[cfg(not(feature = "rayon"))]
fn next_rows(board: &Board, table: &NeighborTable) -> Result<Vec<Vec<bool>>, Error> {
    (0..board.height())
        .map(|row| next_row(board, table, row))
        .collect()
}

fn next_row(board: &Board, table: &NeighborTable, row: isize) -> Result<Vec<bool>, Error> {
    (0..board.width())
        .map(|col| next_state(board, table, (row, col)))
        .collect()
}

fn next_state(board: &Board, table: &NeighborTable, coord: Coord) -> Result<bool, Error> {
    let mut count = 0u8;
    for direction in Direction::ALL {
        if neighbor(board, coord, table.get(coord, direction))? {
            count += 1;
        }
    }
    for (vertical, horizontal) in DIAGONALS {
        if neighbor(board, coord, table.diagonal(coord, vertical, horizontal))? {
            count += 1;
        }
    }
    // In bounds by the caller's loop.
    let alive = board.get(coord).unwrap();
    Ok(if alive { count == 2 || count == 3 } else { count == 3 })
}

/// A missing neighbor counts as dead; a destination off the board is a
/// defect in the table.
fn neighbor(board: &Board, cell: Coord, dest: Option<Coord>) -> Result<bool, Error> {
    match dest {
        None => Ok(false),
        Some(dest) => board.get(dest).ok_or(Error::InternalInvariant { cell, dest }),
    }
}

/// Progress of a simulation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// No generation has been computed yet.
    Initialized,
    /// Some generations have been computed, milestones remain.
    Stepping,
    /// Every requested milestone has been emitted.
    Done,
}

/// Drives repeated stepping toward the requested milestones.
///
/// The tunnel map and the neighbor table are frozen at construction;
/// the only state that evolves is the current board, the generation
/// counter, and the position in the milestone list.
pub struct Simulation {
    board: Board,
    table: NeighborTable,
    milestones: Vec<u64>,
    next_milestone: usize,
    generation: u64,
    status: Status,
}

impl Simulation {
    /// Validates the milestone list and freezes the inputs.
    pub(crate) fn new(board: Board, table: NeighborTable, milestones: Vec<u64>) -> Result<Self, Error> {
        if milestones.is_empty() {
            return Err(Error::InvalidMilestone("the list is empty".to_owned()));
        }
        if milestones.contains(&0) {
            return Err(Error::InvalidMilestone(
                "milestones must be positive".to_owned(),
            ));
        }
        if !milestones.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(Error::InvalidMilestone(
                "milestones must be strictly ascending".to_owned(),
            ));
        }
        Ok(Self {
            board,
            table,
            milestones,
            next_milestone: 0,
            generation: 0,
            status: Status::Initialized,
        })
    }

    /// The current board. Generation 0 is the initial board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current generation number.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Where the run stands.
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Computes one generation.
    ///
    /// Returns the new generation number and board when the generation
    /// is a requested milestone. After the last milestone the simulation
    /// is [`Status::Done`] and this is a no-op.
    pub fn advance(&mut self) -> Result<Option<(u64, &Board)>, Error> {
        if self.status == Status::Done {
            return Ok(None);
        }
        self.board = step(&self.board, &self.table)?;
        self.generation += 1;
        self.status = Status::Stepping;
        if self.milestones.get(self.next_milestone) == Some(&self.generation) {
            self.next_milestone += 1;
            if self.next_milestone == self.milestones.len() {
                self.status = Status::Done;
            }
            Ok(Some((self.generation, &self.board)))
        } else {
            Ok(None)
        }
    }

    /// Steps until every milestone has been emitted, calling `sink` with
    /// each milestone generation and its board.
    ///
    /// `max_step` bounds the number of generations computed by this
    /// call; the check runs between generations, never inside one, so a
    /// long run can be cancelled cleanly and resumed later. Returns
    /// [`Status::Done`] when the run is finished, [`Status::Stepping`]
    /// when the step budget ran out first.
    pub fn run<F>(&mut self, max_step: Option<u64>, mut sink: F) -> Result<Status, Error>
    where
        F: FnMut(u64, &Board),
    {
        let mut steps = 0;
        while self.status != Status::Done {
            if max_step.map_or(false, |max| steps >= max) {
                break;
            }
            if let Some((generation, board)) = self.advance()? {
                sink(generation, board);
            }
            steps += 1;
        }
        Ok(self.status)
    }
}
