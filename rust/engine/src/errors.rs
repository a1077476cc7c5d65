use thiserror::Error;

use crate::cards::Column;

/// Errors raised when rebuilding a card from a raw grid.
///
/// Marking has no error path: invalid or off-card input comes back as an
/// ordinary [`crate::game::MarkStatus`], and generation cannot fail at all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardError {
    #[error("value {value} is outside the {column} column's range")]
    ValueOutOfRange { value: u8, column: Column },
    #[error("value {value} appears more than once in the {column} column")]
    DuplicateInColumn { value: u8, column: Column },
    #[error("free cell at ({row},{col}), expected (2,2)")]
    MisplacedFree { row: usize, col: usize },
    #[error("card has no free cell at its center")]
    MissingFree,
}
