use std::io::{self, BufRead};

use pencilmark::Sudoku;

// Reads line-format sudokus from stdin, one per line, and prints each
// solution (or a diagnostic) in the same format.
fn main() -> io::Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match Sudoku::from_str_line(line) {
            Ok(sudoku) => match sudoku.solve_one() {
                Some(solution) => println!("{}", solution.to_str_line()),
                None => println!("no solution"),
            },
            Err(err) => eprintln!("invalid sudoku: {}", err),
        }
    }
    Ok(())
}
