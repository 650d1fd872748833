use std::io;

use deduce_core::ProblemError;

/// Errors raised while turning puzzle input into a problem.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum PuzzleError {
    /// The puzzle text contains a character that is neither a digit nor a
    /// blank marker.
    #[display("invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Its character index in the input.
        position: usize,
    },
    /// The puzzle text does not describe exactly 81 cells.
    #[display("expected 81 cells, found {count}")]
    WrongCellCount {
        /// Number of cells found.
        count: usize,
    },
    /// The assembled problem was rejected.
    #[display("invalid problem: {_0}")]
    Problem(#[from] ProblemError),
}

/// Errors raised while reading a puzzle list.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum LoadError {
    /// Reading the underlying source failed.
    #[display("failed to read puzzle list: {_0}")]
    Io(#[from] io::Error),
}
