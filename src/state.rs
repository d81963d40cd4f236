use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use crate::data::{Dir, Pos, DIRECTIONS, MAX_DIM};
use crate::vec2d::Vec2d;

/// One board configuration.
///
/// `blank` always points at the cell holding 0 - every method that moves the blank
/// updates both together. Derived equality compares the whole board and the blank.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct State {
    grid: Vec2d<u8>,
    blank: Pos,
}

impl State {
    /// Tiles `1..dim*dim` in row-major order, blank in the last cell.
    ///
    /// Panics if `dim` is 0 or larger than `MAX_DIM`.
    pub fn goal(dim: u8) -> State {
        assert!(
            dim >= 1 && dim <= MAX_DIM,
            "Board dimension must be between 1 and {}, got {}",
            MAX_DIM,
            dim
        );
        let cells = u16::from(dim) * u16::from(dim);
        let tiles = (1..=cells).map(|v| if v == cells { 0 } else { v as u8 }).collect();
        State {
            grid: Vec2d::new(tiles, dim, dim),
            blank: Pos::new(dim - 1, dim - 1),
        }
    }

    /// The caller guarantees `grid` is square and a permutation of `0..dim*dim`.
    pub(crate) fn from_grid(grid: Vec2d<u8>) -> State {
        let blank = grid
            .positions()
            .find(|&pos| grid[pos] == 0)
            .expect("Grid must contain the blank");
        State { grid, blank }
    }

    pub fn dim(&self) -> u8 {
        self.grid.rows()
    }

    pub fn blank(&self) -> Pos {
        self.blank
    }

    pub fn tile(&self, pos: Pos) -> u8 {
        self.grid[pos]
    }

    /// Row-major.
    pub fn tiles(&self) -> &[u8] {
        self.grid.as_slice()
    }

    /// Where `tile` belongs in the goal configuration.
    pub fn goal_pos(&self, tile: u8) -> Pos {
        let dim = self.dim();
        if tile == 0 {
            Pos::new(dim - 1, dim - 1)
        } else {
            Pos::new((tile - 1) / dim, (tile - 1) % dim)
        }
    }

    /// Moves the blank one cell in `dir`, `None` if that would leave the board.
    pub fn moved(&self, dir: Dir) -> Option<State> {
        let new_blank = self.blank.step(dir, self.dim())?;
        let mut new_state = self.clone();
        new_state.grid.swap(self.blank, new_blank);
        new_state.blank = new_blank;
        Some(new_state)
    }

    /// All states one blank move away, in the order of `DIRECTIONS`.
    pub fn successors(&self) -> Vec<State> {
        DIRECTIONS.iter().filter_map(|&dir| self.moved(dir)).collect()
    }

    /// Each move is a transposition that also changes the blank's distance from its goal cell by one,
    /// so the two parities have to match for the goal (even permutation, distance 0) to be reachable.
    pub fn is_solvable(&self) -> bool {
        let mut visited = self.grid.scratchpad(false);
        let mut cycles = 0;
        for start in self.grid.positions() {
            if visited[start] {
                continue;
            }
            cycles += 1;
            let mut pos = start;
            while !visited[pos] {
                visited[pos] = true;
                pos = self.goal_pos(self.grid[pos]);
            }
        }
        let cells = self.tiles().len();
        let permutation_parity = (cells - cycles) % 2;
        let blank_parity = self.blank.dist(self.goal_pos(0)) % 2;
        permutation_parity as u32 == blank_parity
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
