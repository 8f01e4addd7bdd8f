use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use separator::Separatable;

/// Per-depth search counters. Diagnostics only - they never influence the
/// traversal.
#[derive(Clone, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<u64>,
    visited_states: Vec<u64>,
    duplicate_states: Vec<u64>,
}

impl Stats {
    pub fn new() -> Self {
        Stats {
            created_states: vec![],
            visited_states: vec![],
            duplicate_states: vec![],
        }
    }

    pub fn total_created(&self) -> u64 {
        self.created_states.iter().sum()
    }

    pub fn total_unique_visited(&self) -> u64 {
        self.visited_states.iter().sum()
    }

    pub fn total_reached_duplicates(&self) -> u64 {
        self.duplicate_states.iter().sum()
    }

    pub fn add_created(&mut self, depth: u32) -> bool {
        Self::add(&mut self.created_states, depth)
    }

    pub fn add_unique_visited(&mut self, depth: u32) -> bool {
        Self::add(&mut self.visited_states, depth)
    }

    pub fn add_reached_duplicate(&mut self, depth: u32) -> bool {
        Self::add(&mut self.duplicate_states, depth)
    }

    /// Returns true when this is the first state counted at its depth.
    fn add(counts: &mut Vec<u64>, depth: u32) -> bool {
        let mut ret = false;

        // while because duplicates can show up at a depth before any unique
        // state does
        while depth as usize >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth as usize] += 1;
        ret
    }
}

impl Default for Stats {
    fn default() -> Self {
        Stats::new()
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "unique visited by depth: {:?}", self.visited_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(
            f,
            "total created: {}",
            self.total_created().separated_string()
        )?;
        writeln!(
            f,
            "total unique visited: {}",
            self.total_unique_visited().separated_string()
        )?;
        writeln!(
            f,
            "total reached duplicates: {}",
            self.total_reached_duplicates().separated_string()
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "States created total: {}",
            self.total_created().separated_string()
        )?;
        writeln!(
            f,
            "Unique visited total: {}",
            self.total_unique_visited().separated_string()
        )?;
        writeln!(
            f,
            "Reached duplicates total: {}",
            self.total_reached_duplicates().separated_string()
        )?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<8}{:<15}{:<15}{:<15}",
            "Depth", "Created", "Unique", "Duplicates"
        )?;
        // created_states is the longest vec
        for i in 0..self.created_states.len() {
            let created = self.created_states[i];
            let visited = self.visited_states.get(i).copied().unwrap_or(0);
            let duplicates = self.duplicate_states.get(i).copied().unwrap_or(0);
            writeln!(
                f,
                "{:<8}{:<15}{:<15}{:<15}",
                format!("{}:", i),
                created.separated_string(),
                visited.separated_string(),
                duplicates.separated_string(),
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skipped_depths_are_padded() {
        let mut stats = Stats::new();
        assert!(stats.add_created(0));
        assert!(!stats.add_created(0));
        assert!(stats.add_reached_duplicate(2));
        assert_eq!(stats.total_created(), 2);
        assert_eq!(stats.total_reached_duplicates(), 1);
        assert_eq!(stats.total_unique_visited(), 0);
    }

    #[test]
    fn first_state_at_depth_is_reported() {
        let mut stats = Stats::new();
        assert!(stats.add_unique_visited(0));
        assert!(stats.add_unique_visited(1));
        assert!(!stats.add_unique_visited(1));
    }
}
