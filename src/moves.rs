use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Dir;
use crate::state::State;

/// Directions the blank moved in, one per move.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Dir>);

impl Moves {
    pub fn new(moves: Vec<Dir>) -> Self {
        Moves(moves)
    }

    /// `None` if two consecutive states are not one blank move apart.
    pub fn from_path(path: &[State]) -> Option<Self> {
        let mut moves = Vec::with_capacity(path.len().saturating_sub(1));
        for pair in path.windows(2) {
            let dir = pair[0].blank().dir_to(pair[1].blank())?;
            if pair[0].moved(dir).as_ref() != Some(&pair[1]) {
                return None;
            }
            moves.push(dir);
        }
        Some(Moves(moves))
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Dir> {
        self.0.iter()
    }

    /// Replays the moves, `None` if one of them would leave the board.
    pub fn apply(&self, initial: &State) -> Option<Vec<State>> {
        let mut states = vec![initial.clone()];
        for &dir in self {
            let next = states[states.len() - 1].moved(dir)?;
            states.push(next);
        }
        Some(states)
    }
}

impl IntoIterator for Moves {
    type Item = Dir;
    type IntoIter = ::std::vec::IntoIter<Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Dir;
    type IntoIter = ::std::slice::Iter<'a, Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for mov in self {
            write!(f, "{}", mov)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
