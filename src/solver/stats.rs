use std::fmt::{Debug, Display, Formatter, Result};

use separator::Separatable;

/// Node counts by depth, summed over all iterations.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    visited: Vec<u64>,
    expanded: Vec<u64>,
    bounds: Vec<u32>,
}

impl Stats {
    pub fn new() -> Self {
        Stats::default()
    }

    pub fn total_visited(&self) -> u64 {
        self.visited.iter().sum::<u64>()
    }

    pub fn total_expanded(&self) -> u64 {
        self.expanded.iter().sum::<u64>()
    }

    pub fn iterations(&self) -> usize {
        self.bounds.len()
    }

    /// Bounds in the order they were tried.
    pub fn bounds(&self) -> &[u32] {
        &self.bounds
    }

    pub fn visited_at(&self, depth: usize) -> u64 {
        self.visited.get(depth).cloned().unwrap_or(0)
    }

    pub fn expanded_at(&self, depth: usize) -> u64 {
        self.expanded.get(depth).cloned().unwrap_or(0)
    }

    pub(crate) fn add_bound(&mut self, bound: u32) {
        self.bounds.push(bound);
    }

    /// Returns true when `depth` is reached for the first time.
    pub(crate) fn add_visited(&mut self, depth: u32) -> bool {
        Self::add(&mut self.visited, depth)
    }

    pub(crate) fn add_expanded(&mut self, depth: u32) -> bool {
        Self::add(&mut self.expanded, depth)
    }

    fn add(counts: &mut Vec<u64>, depth: u32) -> bool {
        let depth = depth as usize;
        let mut ret = false;
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "bounds: {:?}", self.bounds)?;
        writeln!(f, "visited by depth: {:?}", self.visited)?;
        writeln!(f, "expanded by depth: {:?}", self.expanded)?;
        writeln!(f, "total visited: {}", self.total_visited().separated_string())?;
        writeln!(f, "total expanded: {}", self.total_expanded().separated_string())
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let bounds: Vec<_> = self.bounds.iter().map(|b| b.to_string()).collect();
        writeln!(f, "Iterations: {}", self.iterations())?;
        writeln!(f, "Bounds: {}", bounds.join(", "))?;
        writeln!(f, "Nodes visited total: {}", self.total_visited().separated_string())?;
        writeln!(f, "Nodes expanded total: {}", self.total_expanded().separated_string())?;
        writeln!(f)?;

        writeln!(f, "{:<15}{:<15}{}", "Depth", "Visited", "Expanded")?;
        // every expanded node was visited first so visited is the longest
        for depth in 0..self.visited.len() {
            writeln!(
                f,
                "{:<15}{:<15}{}",
                format!("{}:", depth),
                self.visited_at(depth).separated_string(),
                self.expanded_at(depth).separated_string()
            )?;
        }
        Ok(())
    }
}
