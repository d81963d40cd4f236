use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::data::MAX_DIM;
use crate::state::State;
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Empty,
    TooSmall,
    TooLarge,
    NotSquare(usize),
    InvalidTile(usize, usize),
    OutOfRange(u32),
    Duplicate(u8),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Empty => write!(f, "No tiles"),
            ParserErr::TooSmall => write!(f, "Board must be at least 2x2"),
            ParserErr::TooLarge => {
                write!(f, "Board larger than {0}x{0}", MAX_DIM)
            }
            ParserErr::NotSquare(row) => {
                write!(f, "Row {} doesn't have the same length as the number of rows", row)
            }
            ParserErr::InvalidTile(r, c) => write!(f, "Invalid tile at pos: [{}, {}]", r, c),
            ParserErr::OutOfRange(tile) => write!(f, "Tile {} is too large for this board", tile),
            ParserErr::Duplicate(tile) => write!(f, "Tile {} is there more than once", tile),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for State {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// One row per line, tiles separated by whitespace, 0 is the blank.
///
/// Any permutation is accepted, even one that can't be solved.
pub(crate) fn parse(puzzle: &str) -> Result<State, ParserErr> {
    // blank lines are ignored so we can specify puzzles using raw strings more easily
    let rows: Vec<Vec<&str>> = puzzle
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.split_whitespace().collect())
        .collect();

    let dim = rows.len();
    if dim == 0 {
        return Err(ParserErr::Empty);
    }
    if dim < 2 {
        return Err(ParserErr::TooSmall);
    }
    if dim > usize::from(MAX_DIM) {
        return Err(ParserErr::TooLarge);
    }

    let cells = dim * dim;
    let mut seen = vec![false; cells];
    let mut tiles = Vec::with_capacity(cells);
    for (r, row) in rows.iter().enumerate() {
        if row.len() != dim {
            return Err(ParserErr::NotSquare(r));
        }
        for (c, text) in row.iter().enumerate() {
            let tile: u32 = text.parse().map_err(|_| ParserErr::InvalidTile(r, c))?;
            if tile as usize >= cells {
                return Err(ParserErr::OutOfRange(tile));
            }
            let tile = tile as u8;
            if seen[usize::from(tile)] {
                return Err(ParserErr::Duplicate(tile));
            }
            seen[usize::from(tile)] = true;
            tiles.push(tile);
        }
    }

    // all cells are distinct and in range so the blank is there too
    Ok(State::from_grid(Vec2d::new(tiles, dim as u8, dim as u8)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Dir, Pos};

    #[test]
    fn parsing_goal() {
        let puzzle = r"
 1  2  3  4
 5  6  7  8
 9 10 11 12
13 14 15  0
";
        let state: State = puzzle.parse().unwrap();
        assert_eq!(state, State::goal(4));
        assert_eq!(state.to_string(), puzzle.trim_start_matches('\n'));
    }

    #[test]
    fn parsing_scrambled() {
        let state: State = "1 2 3\n4 0 6\n7 5 8".parse().unwrap();
        assert_eq!(state.blank(), Pos::new(1, 1));
        let expected = State::goal(3).moved(Dir::Left).unwrap().moved(Dir::Up).unwrap();
        assert_eq!(state, expected);
    }

    #[test]
    fn unsolvable_is_accepted() {
        let state: State = "2 1\n3 0".parse().unwrap();
        assert!(!state.is_solvable());
    }

    #[test]
    fn errors() {
        assert_eq!("".parse::<State>().unwrap_err(), ParserErr::Empty);
        assert_eq!("\n  \n".parse::<State>().unwrap_err(), ParserErr::Empty);
        assert_eq!("0".parse::<State>().unwrap_err(), ParserErr::TooSmall);
        assert_eq!("1 2\n3 0 4".parse::<State>().unwrap_err(), ParserErr::NotSquare(1));
        assert_eq!("1 2\n3".parse::<State>().unwrap_err(), ParserErr::NotSquare(1));
        assert_eq!("1 2 3\n0 4 5".parse::<State>().unwrap_err(), ParserErr::NotSquare(0));
        assert_eq!("1 x\n3 0".parse::<State>().unwrap_err(), ParserErr::InvalidTile(0, 1));
        assert_eq!("1 -2\n3 0".parse::<State>().unwrap_err(), ParserErr::InvalidTile(0, 1));
        assert_eq!("1 4\n3 0".parse::<State>().unwrap_err(), ParserErr::OutOfRange(4));
        assert_eq!("1 1\n3 0".parse::<State>().unwrap_err(), ParserErr::Duplicate(1));

        let too_large = vec!["1 ".repeat(16); 16].join("\n");
        assert_eq!(too_large.parse::<State>().unwrap_err(), ParserErr::TooLarge);
    }

    #[test]
    fn error_messages() {
        assert_eq!(ParserErr::InvalidTile(2, 3).to_string(), "Invalid tile at pos: [2, 3]");
        assert_eq!(ParserErr::TooLarge.to_string(), "Board larger than 15x15");
    }
}
