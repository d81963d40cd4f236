use std::fmt::{self, Display, Formatter};

/// Tiles are stored as `u8` so `dim * dim - 1` has to fit.
pub const MAX_DIM: u8 = 15;

/// Order matters - it determines in which order the search explores successors.
pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: u8,
    pub c: u8,
}

impl Pos {
    pub fn new(r: u8, c: u8) -> Pos {
        Pos { r, c }
    }

    pub fn dist(self, other: Pos) -> u32 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dc = i32::from(self.c) - i32::from(other.c);
        (dr.abs() + dc.abs()) as u32
    }

    /// The neighbor in direction `dir` if it's still inside a `dim` x `dim` board.
    pub fn step(self, dir: Dir, dim: u8) -> Option<Pos> {
        match dir {
            Dir::Up if self.r > 0 => Some(Pos::new(self.r - 1, self.c)),
            Dir::Down if self.r + 1 < dim => Some(Pos::new(self.r + 1, self.c)),
            Dir::Left if self.c > 0 => Some(Pos::new(self.r, self.c - 1)),
            Dir::Right if self.c + 1 < dim => Some(Pos::new(self.r, self.c + 1)),
            _ => None,
        }
    }

    /// `None` if the positions are not neighbors.
    pub fn dir_to(self, other: Pos) -> Option<Dir> {
        DIRECTIONS
            .iter()
            .cloned()
            .find(|&dir| self.step(dir, u8::max_value()) == Some(other))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    pub fn inverse(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "u"),
            Dir::Down => write!(f, "d"),
            Dir::Left => write!(f, "l"),
            Dir::Right => write!(f, "r"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping_stays_on_board() {
        let corner = Pos::new(0, 0);
        assert_eq!(corner.step(Dir::Up, 4), None);
        assert_eq!(corner.step(Dir::Left, 4), None);
        assert_eq!(corner.step(Dir::Down, 4), Some(Pos::new(1, 0)));
        assert_eq!(corner.step(Dir::Right, 4), Some(Pos::new(0, 1)));

        let other_corner = Pos::new(3, 3);
        assert_eq!(other_corner.step(Dir::Down, 4), None);
        assert_eq!(other_corner.step(Dir::Right, 4), None);
    }

    #[test]
    fn directions_and_distances() {
        let pos = Pos::new(2, 2);
        for &dir in &DIRECTIONS {
            let next = pos.step(dir, 4).unwrap();
            assert_eq!(pos.dir_to(next), Some(dir));
            assert_eq!(next.dir_to(pos), Some(dir.inverse()));
            assert_eq!(pos.dist(next), 1);
        }
        assert_eq!(Pos::new(0, 3).dist(Pos::new(3, 0)), 6);
    }

    #[test]
    fn not_neighbors() {
        let pos = Pos::new(1, 1);
        assert_eq!(pos.dir_to(pos), None);
        assert_eq!(pos.dir_to(Pos::new(2, 2)), None);
        assert_eq!(pos.dir_to(Pos::new(1, 3)), None);
    }
}
