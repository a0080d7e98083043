//! The guess board edited by the user
//!
//! The board is the UI-side state: which letters were typed in which rows and
//! what colour each cell is. It never filters anything itself; it only turns
//! its fixed rows into an `EvidenceSnapshot` for the solver.

mod grid;

pub use grid::{Board, Cell, MAX_YELLOW_LETTERS, ROWS, Row, RowState, SolutionSummary};

use thiserror::Error;

/// Error type for board edits
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("row {0} does not exist")]
    RowOutOfRange(usize),
    #[error("column {0} does not exist")]
    ColumnOutOfRange(usize),
    #[error("no row is being edited")]
    NotEditing,
    #[error("'{0}' is not a letter")]
    InvalidLetter(char),
    #[error("row needs 5 letters before it can be submitted")]
    IncompleteRow,
    #[error("'{0}' is not in the word list")]
    UnknownWord(String),
    #[error("row {0} has no fixed guess to colour")]
    NotFixed(usize),
    #[error("at most 5 distinct letters can be yellow")]
    TooManyYellows,
    #[error("every row already holds a guess")]
    BoardFull,
}
