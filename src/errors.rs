//! Errors that may be encountered when reading or solving a sudoku
use std::fmt;

#[cfg(doc)]
use crate::Sudoku;

/// The sudoku (or one branch of the search) admits no valid completion.
///
/// This is an expected outcome of propagation and search, not a crash
/// condition. It is threaded back through the solver as a plain result
/// value and becomes "no solution" at the top level.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("sudoku is unsolvable")]
pub struct Unsolvable;

/// An invalid sudoku entry encountered during parsing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InvalidEntry {
    /// Cell number goes from 0..=80, 0..=8 for the first line, 9..=17 for the 2nd and so on
    pub cell: u8,
    /// The parsed invalid char
    pub ch: char,
}

impl InvalidEntry {
    /// Row index from 0..=8, topmost row is 0
    #[inline]
    pub fn row(self) -> u8 {
        self.cell / 9
    }

    /// Column index from 0..=8, leftmost col is 0
    #[inline]
    pub fn col(self) -> u8 {
        self.cell % 9
    }

    /// Block index from 0..=8, numbering from left to right, top to bottom
    #[inline]
    pub fn block(self) -> u8 {
        self.cell / 27 * 3 + self.cell % 9 / 3
    }
}

impl fmt::Display for InvalidEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "cell {} contains invalid character '{}'", self.cell, self.ch)
    }
}

/// Error for [`Sudoku::from_str_line`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LineParseError {
    /// Accepted values are the digits 1-9 and '.' or '0' for empty cells
    #[error("{0}")]
    InvalidEntry(InvalidEntry),
    /// Fewer than 81 cells supplied. Contains the number of cells found.
    #[error("sudoku contains {0} cells instead of required 81")]
    NotEnoughCells(u8),
    /// More than 81 cells supplied
    #[error("sudoku contains more than 81 cells")]
    TooManyCells,
}

/// Error for [`Sudoku::from_bytes`]
#[derive(Debug, thiserror::Error)]
#[error("byte array contains entries >9")]
pub struct FromBytesError(pub(crate) ());

/// Error for [`Sudoku::from_bytes_slice`]
#[derive(Debug, thiserror::Error)]
pub enum FromBytesSliceError {
    /// Slice is not 81 long
    #[error("byte slice should have length 81, found {0}")]
    WrongLength(usize),
    /// Slice contains invalid entries
    #[error(transparent)]
    FromBytesError(#[from] FromBytesError),
}
