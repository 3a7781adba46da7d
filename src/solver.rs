//! Constraint propagation and backtracking search.
//!
//! The solver keeps one candidate set per cell and enforces two local
//! rules whenever a digit is eliminated:
//!
//! 1. a cell down to its last candidate assigns that digit, which in turn
//!    eliminates it from all 20 peers of the cell (naked single)
//! 2. a digit with only one possible cell left in a house is assigned
//!    there (hidden single)
//!
//! [`assign`](Solver::assign) and [`eliminate`](Solver::eliminate) are
//! mutually recursive; the recursion runs the two rules to a fixed point
//! before control returns, so no separate work queue is needed. When
//! propagation alone cannot finish a grid, [`solve_at_most`](Solver::solve_at_most)
//! guesses on the open cell with the fewest candidates and backtracks
//! over independent copies of the whole candidate state.

use crate::bitset::Set;
use crate::board::{Cell, Digit, Sudoku};
use crate::errors::Unsolvable;
use crate::helper::CellArray;
use crate::topology::Topology;

/// Tracks the set of digits still possible for every cell and keeps those
/// sets consistent under the sudoku rules.
///
/// The candidate sets only ever shrink. A cell is decided once a single
/// candidate remains; a grid where that holds for all 81 cells is solved.
/// Copying the solver snapshots the entire candidate state, which is how
/// the search tries a guess without any undo logic.
#[derive(Copy, Clone)]
pub struct Solver<'t> {
    topology: &'t Topology,
    candidates: CellArray<Set<Digit>>,
}

impl<'t> Solver<'t> {
    /// Seeds every cell with all nine digits, then enters the givens of
    /// `sudoku` via [`assign`](Self::assign) so that both propagation
    /// rules run immediately.
    ///
    /// Fails iff the givens contradict each other.
    pub fn from_sudoku(topology: &'t Topology, sudoku: Sudoku) -> Result<Self, Unsolvable> {
        let mut solver = Solver {
            topology,
            candidates: CellArray([Set::ALL; 81]),
        };
        for (cell, num) in Cell::all().zip(sudoku.iter()) {
            if let Some(num) = num {
                solver.assign(cell, Digit::new(num))?;
            }
        }
        Ok(solver)
    }

    /// The digits still possible for `cell`.
    pub fn candidates(&self, cell: Cell) -> Set<Digit> {
        self.candidates[cell]
    }

    /// Checks whether every cell is down to exactly one candidate.
    pub fn is_solved(&self) -> bool {
        Cell::all().all(|cell| self.candidates[cell].len() == 1)
    }

    /// Forces `cell` to contain `digit` by eliminating every other
    /// candidate of the cell.
    ///
    /// The solver is left partially updated on failure; callers that need
    /// to roll back must work on a copy.
    pub fn assign(&mut self, cell: Cell, digit: Digit) -> Result<(), Unsolvable> {
        for other in self.candidates[cell].without(digit.as_set()) {
            self.eliminate(cell, other)?;
        }
        Ok(())
    }

    /// Removes `digit` from the candidates of `cell` and propagates the
    /// consequences until nothing more follows.
    ///
    /// Eliminating a digit that is already gone is a no-op.
    pub fn eliminate(&mut self, cell: Cell, digit: Digit) -> Result<(), Unsolvable> {
        if !self.candidates[cell].contains(digit) {
            return Ok(());
        }
        let remaining = self.candidates[cell].without(digit.as_set());
        self.candidates[cell] = remaining;

        // naked single: the last candidate is this cell's value,
        // so no peer can hold it as well
        if let Some(last) = remaining.unique()? {
            for peer in self.topology.peers_of(cell) {
                self.eliminate(peer, last)?;
            }
        }

        // hidden single: a digit with a single place left in a house
        // must go there. A digit with no place left is a contradiction.
        let houses = self.topology.units_of(cell);
        for &house in &houses {
            let mut places = Set::NONE;
            for unit_cell in self.topology.unit_cells(house) {
                if self.candidates[unit_cell].contains(digit) {
                    places |= unit_cell;
                }
            }
            if let Some(sole_cell) = places.unique()? {
                self.assign(sole_cell, digit)?;
            }
        }
        Ok(())
    }

    /// Finds up to `limit` solutions by depth-first search and returns them.
    pub fn solve_at_most(self, limit: usize) -> Vec<Sudoku> {
        let mut solutions = vec![];
        self.search(limit, &mut solutions);
        solutions
    }

    // Branches on the open cell with the fewest candidates, trying its
    // digits in ascending order, each on an independent copy of self.
    // Stops as soon as `limit` solutions have been collected.
    fn search(self, limit: usize, solutions: &mut Vec<Sudoku>) {
        if solutions.len() == limit {
            return;
        }
        // propagation errors out before a candidate set can become empty,
        // so any state that reaches the search is free of empty cells
        debug_assert!(Cell::all().all(|cell| !self.candidates[cell].is_empty()));

        match self.branch_cell() {
            None => solutions.push(self.extract_solution()),
            Some(cell) => {
                for digit in self.candidates[cell] {
                    let mut branch = self;
                    if branch.assign(cell, digit).is_ok() {
                        branch.search(limit, solutions);
                    }
                }
            }
        }
    }

    // Minimum-remaining-values heuristic: the open cell with the fewest
    // candidates, ties broken by row-major cell order. `None` iff every
    // cell is decided.
    fn branch_cell(&self) -> Option<Cell> {
        let mut best: Option<(Cell, u8)> = None;
        for cell in Cell::all() {
            let n_candidates = self.candidates[cell].len();
            if n_candidates > 1 {
                match best {
                    Some((_, n_best)) if n_best <= n_candidates => {}
                    _ => best = Some((cell, n_candidates)),
                }
            }
        }
        best.map(|(cell, _)| cell)
    }

    fn extract_solution(&self) -> Sudoku {
        let mut grid = [0; 81];
        for cell in Cell::all() {
            grid[cell.as_index()] = self.candidates[cell].one_possibility().get();
        }
        Sudoku(grid)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn solver_from_line<'t>(topology: &'t Topology, line: &str) -> Solver<'t> {
        let sudoku = Sudoku::from_str_line(line).unwrap();
        Solver::from_sudoku(topology, sudoku).unwrap()
    }

    #[test]
    fn eliminate_absent_digit_is_a_noop() {
        let topology = Topology::new();
        let line =
            "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
        let mut solver = solver_from_line(&topology, line);

        // cell 2 is a given '3', so 1 is long gone from its candidates
        let cell = Cell::new(2);
        assert!(!solver.candidates(cell).contains(Digit::new(1)));

        let before: Vec<_> = Cell::all().map(|c| solver.candidates(c)).collect();
        solver.eliminate(cell, Digit::new(1)).unwrap();
        let after: Vec<_> = Cell::all().map(|c| solver.candidates(c)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn assigned_digit_disappears_from_peers() {
        let topology = Topology::new();
        let mut solver = Solver::from_sudoku(
            &topology,
            Sudoku::from_bytes([0; 81]).unwrap(),
        )
        .unwrap();

        let cell = Cell::new(40); // center cell
        solver.assign(cell, Digit::new(5)).unwrap();

        assert_eq!(solver.candidates(cell).unique(), Ok(Some(Digit::new(5))));
        for peer in topology.peers_of(cell) {
            assert!(!solver.candidates(peer).contains(Digit::new(5)));
        }
    }

    #[test]
    fn naked_single_triggers_on_last_candidate() {
        let topology = Topology::new();
        let mut solver = Solver::from_sudoku(
            &topology,
            Sudoku::from_bytes([0; 81]).unwrap(),
        )
        .unwrap();

        // strip digits 1-8 from a cell; 9 must be assigned and
        // eliminated from all peers
        let cell = Cell::new(0);
        for digit in Digit::all().take(8) {
            solver.eliminate(cell, digit).unwrap();
        }
        assert_eq!(solver.candidates(cell).unique(), Ok(Some(Digit::new(9))));
        for peer in topology.peers_of(cell) {
            assert!(!solver.candidates(peer).contains(Digit::new(9)));
        }
    }

    #[test]
    fn conflicting_givens_fail_before_search() {
        let topology = Topology::new();
        // two 5s in the first row
        let line =
            "5....5...........................................................................";
        let sudoku = Sudoku::from_str_line(line).unwrap();
        assert!(Solver::from_sudoku(&topology, sudoku).is_err());
    }

    #[test]
    fn contradiction_is_a_value_not_a_panic() {
        let topology = Topology::new();
        let mut solver = Solver::from_sudoku(
            &topology,
            Sudoku::from_bytes([0; 81]).unwrap(),
        )
        .unwrap();

        let cell = Cell::new(17);
        for digit in Digit::all().take(8) {
            solver.eliminate(cell, digit).unwrap();
        }
        // removing the forced last candidate empties the cell
        assert_eq!(solver.eliminate(cell, Digit::new(9)), Err(Unsolvable));
    }
}
