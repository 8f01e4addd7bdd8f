use std::fmt;
use std::fmt::{Display, Formatter};

/// What the search should do once the first solved state is dequeued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Stop at the first (therefore minimal) solution.
    FirstSolution,
    /// Keep going until the whole reachable component is enumerated.
    Exhaustive,
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Mode::FirstSolution => write!(f, "first-solution"),
            Mode::Exhaustive => write!(f, "exhaustive"),
        }
    }
}
