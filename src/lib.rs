#![warn(missing_docs)]
//! A sudoku solving library built on constraint propagation.
//!
//! ## Overview
//!
//! Every cell of the grid tracks the set of digits it can still hold.
//! Entering a digit removes it from the candidates of the 20 peers of its
//! cell, and two local rules (naked and hidden singles) are propagated to
//! a fixed point. When propagation alone cannot finish a puzzle, the
//! solver guesses on the cell with the fewest remaining candidates and
//! backtracks over independent copies of the candidate state.
//!
//! ## Example
//!
//! ```
//! use pencilmark::Sudoku;
//!
//! let sudoku_line =
//!     "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
//!
//! let sudoku = Sudoku::from_str_line(sudoku_line).unwrap();
//! if let Some(solution) = sudoku.solve_unique() {
//!     println!("{}", solution);
//!     println!("{}", solution.to_str_line());
//!
//!     let cell_contents: [u8; 81] = solution.to_bytes();
//! }
//! ```

pub mod bitset;
pub mod board;
mod consts;
pub mod errors;
mod helper;
pub mod solver;
pub mod topology;

pub use crate::board::Sudoku;
pub use crate::errors::Unsolvable;
pub use crate::solver::Solver;
pub use crate::topology::Topology;
