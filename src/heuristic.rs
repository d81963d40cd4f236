use crate::data::Pos;
use crate::state::State;

/// Lower bound on the number of moves from a state to the goal.
///
/// The search is only optimal if the estimate never overestimates and changes by at most 1
/// per move. Any `Fn(&State) -> u32` is a heuristic so plain functions and closures can be passed
/// directly to the solver.
pub trait Heuristic {
    fn estimate(&self, state: &State) -> u32;
}

impl<F> Heuristic for F
where
    F: Fn(&State) -> u32,
{
    fn estimate(&self, state: &State) -> u32 {
        self(state)
    }
}

/// Sum of distances of all tiles (but not the blank) from their goal positions.
pub fn manhattan(state: &State) -> u32 {
    let dim = state.dim();
    let mut dist_sum = 0;
    for (i, &tile) in state.tiles().iter().enumerate() {
        if tile == 0 {
            continue;
        }
        let r = (i / usize::from(dim)) as u8;
        let c = (i % usize::from(dim)) as u8;
        dist_sum += Pos::new(r, c).dist(state.goal_pos(tile));
    }
    dist_sum
}
