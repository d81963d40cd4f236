use crate::data::MAX_DIM;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub dimension: u8,
    /// Number of random moves applied to the goal when no puzzle file is given.
    pub scramble_depth: u32,
    /// `None` means seeding from the OS.
    pub seed: Option<u64>,
    /// The search gives up once the bound would grow past this.
    pub bound_limit: Option<u32>,
}

impl Config {
    pub fn new(dimension: u8) -> Self {
        Config {
            dimension,
            scramble_depth: 100,
            seed: None,
            bound_limit: known_diameter(dimension),
        }
    }

    pub fn is_valid_dimension(dimension: u8) -> bool {
        (2..=MAX_DIM).contains(&dimension)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(4)
    }
}

/// The most moves an optimal solution can need.
///
/// IDA* never raises the bound above the optimal cost so a bound larger than this
/// means the puzzle is unsolvable. Only known for small boards.
pub fn known_diameter(dimension: u8) -> Option<u32> {
    match dimension {
        2 => Some(6),
        3 => Some(31),
        4 => Some(80),
        _ => None,
    }
}
