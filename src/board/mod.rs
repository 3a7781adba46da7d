//! Types for cells, digits and grids of a sudoku board
mod digit;
mod positions;
mod sudoku;

pub use self::{
    digit::Digit,
    positions::{Block, Cell, Col, House, Row},
    sudoku::Sudoku,
};
