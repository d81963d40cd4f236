use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::state::State;

/// Applies `depth` random moves to the goal.
///
/// Only ever moving the blank keeps the result solvable,
/// a random permutation would be unsolvable half of the time.
pub fn scramble<R: Rng>(dim: u8, depth: u32, rng: &mut R) -> State {
    let mut state = State::goal(dim);
    for _ in 0..depth {
        let mut successors = state.successors();
        let index = rng.gen_range(0..successors.len());
        state = successors.swap_remove(index);
    }
    state
}

/// Same seed, same puzzle. Without a seed, the OS provides the randomness.
pub fn scramble_seeded(dim: u8, depth: u32, seed: Option<u64>) -> State {
    let mut rng = match seed {
        Some(seed) => {
            debug!("Scrambling with seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    scramble(dim, depth, &mut rng)
}
