use crate::bitset::Set;
use crate::board::{Digit, House};
use crate::consts::N_CELLS;
use crate::errors::{
    FromBytesError, FromBytesSliceError, InvalidEntry, LineParseError,
};
use crate::solver::Solver;
use crate::topology::Topology;

use std::fmt;

/// A 9x9 sudoku grid, possibly partially filled.
///
/// Cells are stored in row-major order, `0` marking an empty cell.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Sudoku(pub(crate) [u8; N_CELLS]);

impl Sudoku {
    /// Creates a sudoku from a line of exactly 81 characters in row-major
    /// order. Accepted are the digits 1-9 for givens and `'.'` or `'0'`
    /// for empty cells. Any other character or length is an error.
    pub fn from_str_line(s: &str) -> Result<Sudoku, LineParseError> {
        let mut grid = [0; N_CELLS];
        let mut n_cells = 0;
        for ch in s.chars() {
            if n_cells == N_CELLS {
                return Err(LineParseError::TooManyCells);
            }
            grid[n_cells] = match ch {
                '1'..='9' => ch as u8 - b'0',
                '.' | '0' => 0,
                _ => {
                    return Err(LineParseError::InvalidEntry(InvalidEntry {
                        cell: n_cells as u8,
                        ch,
                    }))
                }
            };
            n_cells += 1;
        }
        if n_cells < N_CELLS {
            return Err(LineParseError::NotEnoughCells(n_cells as u8));
        }
        Ok(Sudoku(grid))
    }

    /// Creates a sudoku from a byte array. `0` marks an empty cell,
    /// 1-9 are given digits.
    pub fn from_bytes(bytes: [u8; 81]) -> Result<Sudoku, FromBytesError> {
        match bytes.iter().all(|&byte| byte <= 9) {
            true => Ok(Sudoku(bytes)),
            false => Err(FromBytesError(())),
        }
    }

    /// Creates a sudoku from a byte slice. The slice must have length 81.
    pub fn from_bytes_slice(bytes: &[u8]) -> Result<Sudoku, FromBytesSliceError> {
        if bytes.len() != 81 {
            return Err(FromBytesSliceError::WrongLength(bytes.len()));
        }
        let mut array = [0; N_CELLS];
        array.copy_from_slice(bytes);
        Ok(Sudoku::from_bytes(array)?)
    }

    /// Returns the cell contents as a byte array, `0` for empty cells.
    pub fn to_bytes(self) -> [u8; 81] {
        self.0
    }

    /// Returns the sudoku in line format: 81 characters, `'.'` for empty cells.
    pub fn to_str_line(&self) -> String {
        self.0
            .iter()
            .map(|&num| match num {
                0 => '.',
                _ => (b'0' + num) as char,
            })
            .collect()
    }

    /// Returns an iterator over the cells in row-major order,
    /// `None` for empty ones.
    pub fn iter(&self) -> impl Iterator<Item = Option<u8>> + '_ {
        self.0
            .iter()
            .map(|&num| if num == 0 { None } else { Some(num) })
    }

    /// Finds a solution to the sudoku, if one exists. If multiple solutions
    /// exist, the first one in the solver's deterministic search order is
    /// returned.
    pub fn solve_one(self) -> Option<Sudoku> {
        let mut solutions = self.solve_at_most(1);
        solutions.pop()
    }

    /// Solves the sudoku and returns the solution, iff it is unique.
    pub fn solve_unique(self) -> Option<Sudoku> {
        let solutions = self.solve_at_most(2);
        match &solutions[..] {
            [solution] => Some(*solution),
            _ => None,
        }
    }

    /// Finds up to `limit` solutions and returns them. An empty vector
    /// means the sudoku (or its givens) admits no valid completion.
    pub fn solve_at_most(self, limit: usize) -> Vec<Sudoku> {
        let topology = Topology::new();
        match Solver::from_sudoku(&topology, self) {
            Ok(solver) => solver.solve_at_most(limit),
            Err(_) => vec![],
        }
    }

    /// Checks whether the grid is completely filled and every house
    /// contains each digit exactly once.
    pub fn is_solved(&self) -> bool {
        let topology = Topology::new();
        House::all().all(|house| {
            let mut seen = Set::NONE;
            for cell in topology.unit_cells(house) {
                match Digit::new_checked(self.0[cell.as_index()]) {
                    Some(digit) => seen |= digit,
                    None => return false,
                }
            }
            seen.is_full()
        })
    }
}

impl fmt::Display for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (index, &num) in self.0.iter().enumerate() {
            let (row, col) = (index / 9, index % 9);
            match (row, col) {
                (0, 0) => {}
                (_, 0) if row % 3 == 0 => write!(f, "\n\n")?, // separate bands
                (_, 0) => writeln!(f)?,
                (_, _) if col % 3 == 0 => write!(f, " ")?, // separate stacks
                _ => {}
            }
            match num {
                0 => write!(f, "_")?,
                _ => write!(f, "{}", num)?,
            }
        }
        Ok(())
    }
}
