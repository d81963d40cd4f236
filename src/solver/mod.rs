mod stats;

use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use log::{debug, info, trace};

use crate::config::known_diameter;
use crate::heuristic::{manhattan, Heuristic};
use crate::moves::Moves;
use crate::state::State;
use crate::Solve;

pub use self::stats::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    Unsolvable,
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::Unsolvable => write!(
                f,
                "Unsolvable - the goal can't be reached from this configuration"
            ),
        }
    }
}

impl Error for SolverErr {}

pub struct SolverOk {
    /// Initial and final state included.
    pub path_states: Option<Vec<State>>,
    pub stats: Stats,
}

impl SolverOk {
    fn new(path_states: Option<Vec<State>>, stats: Stats) -> Self {
        Self { path_states, stats }
    }

    pub fn moves(&self) -> Option<Moves> {
        self.path_states
            .as_ref()
            .and_then(|states| Moves::from_path(states))
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.path_states {
            None => writeln!(f, "No solution")?,
            Some(ref states) => writeln!(f, "Cost: {}", states.len() - 1)?,
        }
        write!(f, "{}", self.stats)
    }
}

impl Solve for State {
    fn solve_bounded(
        &self,
        bound_limit: Option<u32>,
        print_status: bool,
    ) -> Result<SolverOk, SolverErr> {
        solve(self, bound_limit, print_status)
    }
}

fn solve(
    initial: &State,
    bound_limit: Option<u32>,
    print_status: bool,
) -> Result<SolverOk, SolverErr> {
    // reported as an error here, the engine itself would just return an empty path
    if !initial.is_solvable() {
        return Err(SolverErr::Unsolvable);
    }

    let mut ida = IdaStar::new(manhattan)
        .bound_limit(bound_limit)
        .print_status(print_status);
    let path = ida.run(initial);
    let path_states = if path.is_empty() { None } else { Some(path) };
    Ok(SolverOk::new(path_states, ida.into_stats()))
}

/// Result of searching one subtree.
#[derive(Debug)]
enum Outcome {
    /// Path from the goal back to the subtree's root.
    Found(Vec<State>),
    /// Smallest f of all pruned nodes, `None` if nothing was pruned.
    Pruned(Option<u32>),
}

/// Iterative deepening A*.
///
/// Keeps only the current path in memory, states reachable by multiple paths
/// are searched again each time.
#[derive(Debug)]
pub struct IdaStar<H> {
    heuristic: H,
    bound_limit: Option<u32>,
    print_status: bool,
    stats: Stats,
}

impl<H: Heuristic> IdaStar<H> {
    pub fn new(heuristic: H) -> Self {
        IdaStar {
            heuristic,
            bound_limit: None,
            print_status: false,
            stats: Stats::new(),
        }
    }

    /// Give up once the bound would exceed `limit`.
    ///
    /// `None` falls back to the board's known diameter. Boards without one are checked
    /// for solvability up front instead, otherwise an unsolvable input would never stop.
    pub fn bound_limit(mut self, limit: Option<u32>) -> Self {
        self.bound_limit = limit;
        self
    }

    pub fn print_status(mut self, print_status: bool) -> Self {
        self.print_status = print_status;
        self
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn into_stats(self) -> Stats {
        self.stats
    }

    /// Returns the states from `initial` to the goal (both included)
    /// or an empty `Vec` if there's no solution.
    pub fn run(&mut self, initial: &State) -> Vec<State> {
        debug!("Search called");

        let bound_limit = match self.bound_limit.or_else(|| known_diameter(initial.dim())) {
            None if !initial.is_solvable() => {
                info!("Unsolvable and no bound limit, not searching");
                return Vec::new();
            }
            limit => limit,
        };

        let mut bound = self.heuristic.estimate(initial);
        loop {
            if let Some(limit) = bound_limit {
                if bound > limit {
                    info!("Bound {} exceeds limit {}, giving up", bound, limit);
                    return Vec::new();
                }
            }

            self.stats.add_bound(bound);
            if self.print_status {
                println!("Bound: {}", bound);
            }
            debug!("Starting iteration {} with bound {}", self.stats.iterations(), bound);

            match self.search(initial.clone(), 0, bound) {
                Outcome::Found(mut path) => {
                    path.reverse();
                    info!("Solved with cost {}", path.len() - 1);
                    return path;
                }
                Outcome::Pruned(Some(next_bound)) => bound = next_bound,
                Outcome::Pruned(None) => {
                    info!("Searched everything reachable, no solution");
                    return Vec::new();
                }
            }
        }
    }

    fn search(&mut self, state: State, dist: u32, bound: u32) -> Outcome {
        if self.stats.add_visited(dist) {
            trace!("Visited new depth: {}", dist);
        }

        let h = self.heuristic.estimate(&state);
        let f = dist + h;
        if f > bound {
            return Outcome::Pruned(Some(f));
        }
        if h == 0 {
            return Outcome::Found(vec![state]);
        }

        self.stats.add_expanded(dist);
        let mut min_pruned = None;
        for next in state.successors() {
            if next == state {
                continue;
            }
            match self.search(next, dist + 1, bound) {
                Outcome::Found(mut path) => {
                    path.push(state);
                    return Outcome::Found(path);
                }
                Outcome::Pruned(pruned) => min_pruned = min_bound(min_pruned, pruned),
            }
        }
        Outcome::Pruned(min_pruned)
    }
}

fn min_bound(a: Option<u32>, b: Option<u32>) -> Option<u32> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}
