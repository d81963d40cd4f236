// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

pub mod config;
pub mod data;
pub mod heuristic;
pub mod moves;
pub mod parser;
pub mod scramble;
pub mod solver;
pub mod state;

mod fs;
mod vec2d;

use std::error::Error;
use std::path::Path;

use crate::solver::{SolverErr, SolverOk};
use crate::state::State;

pub trait LoadPuzzle {
    fn load_puzzle(&self) -> Result<State, Box<dyn Error>>;
}

impl<P: AsRef<Path>> LoadPuzzle for P {
    fn load_puzzle(&self) -> Result<State, Box<dyn Error>> {
        let puzzle = fs::read_file(self)?;
        Ok(puzzle.parse()?)
    }
}

pub trait Solve {
    /// Searches for an optimal solution, giving up when the bound would exceed `bound_limit`.
    /// `None` means the board's known diameter, if there is one.
    fn solve_bounded(
        &self,
        bound_limit: Option<u32>,
        print_status: bool,
    ) -> Result<SolverOk, SolverErr>;

    fn solve(&self, print_status: bool) -> Result<SolverOk, SolverErr> {
        self.solve_bounded(None, print_status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_puzzles() {
        let state = "puzzles/4x4-one-move.txt".load_puzzle().unwrap();
        assert_eq!(state.dim(), 4);
        assert!(state.is_solvable());

        let unsolvable = "puzzles/4x4-unsolvable.txt".load_puzzle().unwrap();
        assert!(!unsolvable.is_solvable());

        assert!("puzzles/does-not-exist.txt".load_puzzle().is_err());
    }

    #[test]
    fn solving_puzzle_files() {
        let puzzles = [
            ("puzzles/2x2-solved.txt", 0),
            ("puzzles/3x3-easy.txt", 4),
            ("puzzles/4x4-one-move.txt", 1),
            ("puzzles/4x4-moderate.txt", 12),
        ];

        for &(path, cost) in &puzzles {
            let state = path.load_puzzle().unwrap();
            let solution = state.solve(false).unwrap();
            let moves = solution.moves().unwrap();
            assert_eq!(moves.move_cnt(), cost, "{}", path);

            let replayed = moves.apply(&state).unwrap();
            assert_eq!(replayed[replayed.len() - 1], State::goal(state.dim()));
        }
    }
}
