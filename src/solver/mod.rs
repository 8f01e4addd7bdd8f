mod stats;

pub use self::stats::Stats;

use std::collections::VecDeque;
use std::fmt;
use std::fmt::{Debug, Formatter};

use fnv::FnvHashSet;
use log::{debug, info};

use crate::board::Board;
use crate::config::Mode;
use crate::Solve;

/// How often (in visited states) a progress snapshot is logged.
const STATUS_EVERY: u64 = 100;

pub struct SolverOk {
    /// Minimum number of single-step moves to a solved state, or None when
    /// the reachable component holds no solved state at all. `Some(0)` is a
    /// legitimate already-solved start.
    pub min_depth: Option<u32>,
    pub stats: Stats,
    mode: Mode,
}

impl SolverOk {
    fn new(min_depth: Option<u32>, stats: Stats, mode: Mode) -> Self {
        Self {
            min_depth,
            stats,
            mode,
        }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.min_depth {
            None => writeln!(f, "No solution")?,
            Some(depth) => writeln!(f, "{}: minimum depth {}", self.mode, depth)?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Board {
    fn solve(&self, mode: Mode, print_status: bool) -> SolverOk {
        search(self, mode, print_status)
    }
}

/// Level-order traversal of the implicit move graph.
///
/// The frontier is a FIFO queue of `(Board, depth)`; fingerprints are
/// deduplicated at enqueue time so no state is ever queued twice. The first
/// solved state dequeued is at minimal depth because every shallower state
/// was dequeued before it.
pub fn search(start: &Board, mode: Mode, print_status: bool) -> SolverOk {
    debug!("search started in {} mode", mode);

    let mut stats = Stats::new();
    let mut to_visit = VecDeque::new();
    let mut seen = FnvHashSet::default();

    seen.insert(start.fingerprint());
    stats.add_created(0);
    to_visit.push_back((start.clone(), 0));

    let mut min_depth = None;
    while let Some((board, depth)) = to_visit.pop_front() {
        if min_depth.is_none() && board.is_solved() {
            debug!("first solved state dequeued at depth {}", depth);
            min_depth = Some(depth);
            if mode == Mode::FirstSolution {
                return SolverOk::new(min_depth, stats, mode);
            }
        }

        if stats.add_unique_visited(depth) && print_status {
            println!("Visited new depth: {}", depth);
            println!("{:?}", stats);
        }
        if stats.total_unique_visited() % STATUS_EVERY == 0 {
            info!(
                "visited {}, depth {}, frontier {}, duplicates {}",
                stats.total_unique_visited(),
                depth,
                to_visit.len(),
                stats.total_reached_duplicates(),
            );
        }

        for (_, _, successor) in board.successors() {
            if seen.insert(successor.fingerprint()) {
                stats.add_created(depth + 1);
                to_visit.push_back((successor, depth + 1));
            } else {
                stats.add_reached_duplicate(depth + 1);
            }
        }
    }

    SolverOk::new(min_depth, stats, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Orientation;

    #[test]
    fn lone_delivery_first_solution() {
        let mut board = Board::new();
        board.add_delivery(2).unwrap();

        let result = search(&board, Mode::FirstSolution, false);
        assert_eq!(result.min_depth, Some(2));
        // the solved state terminates the search before being counted
        assert_eq!(result.stats.total_unique_visited(), 3);
    }

    #[test]
    fn lone_delivery_exhaustive() {
        let mut board = Board::new();
        board.add_delivery(2).unwrap();

        let result = search(&board, Mode::Exhaustive, false);
        assert_eq!(result.min_depth, Some(2));
        // columns 0 through 4 are all reachable
        assert_eq!(result.stats.total_unique_visited(), 5);
        assert_eq!(result.stats.total_created(), 5);
    }

    #[test]
    fn already_solved_start_is_depth_zero() {
        let mut board = Board::new();
        board.add_delivery(0).unwrap();

        let result = search(&board, Mode::FirstSolution, false);
        assert_eq!(result.min_depth, Some(0));
    }

    #[test]
    fn single_blocker_needs_one_extra_move() {
        // the car on (1,2)/(2,2) must step up (or down twice) before the
        // delivery vehicle can cross column 2, so the minimum is 4 + 1
        let mut board = Board::new();
        board.add_delivery(4).unwrap();
        board.add_car_b(1, 2).unwrap();

        let result = search(&board, Mode::FirstSolution, false);
        assert_eq!(result.min_depth, Some(5));
    }

    #[test]
    fn walled_exit_is_unsolvable() {
        let mut board = Board::new();
        board.add_delivery(3).unwrap();
        board.add_obstacle(2, 1).unwrap();

        let result = search(&board, Mode::Exhaustive, false);
        assert_eq!(result.min_depth, None);
        // delivery slides between columns 2, 3 and 4 and nothing else moves
        assert_eq!(result.stats.total_unique_visited(), 3);
        assert_eq!(result.stats.total_created(), 3);
    }

    #[test]
    fn tiny_board_with_stuck_block() {
        let mut board = Board::with_size(2);
        board
            .place(
                crate::block::Block::new(
                    0,
                    0,
                    2,
                    crate::data::BlockKind::CarB,
                    Orientation::Vertical,
                )
                .unwrap(),
            )
            .unwrap();

        let result = search(&board, Mode::Exhaustive, false);
        assert_eq!(result.min_depth, None);
        assert_eq!(result.stats.total_unique_visited(), 1);
    }

    #[test]
    fn tiny_board_component_counted_by_hand() {
        // a vertical car on a 3x3 grid slides between two positions
        let mut board = Board::with_size(3);
        board
            .place(
                crate::block::Block::new(
                    0,
                    0,
                    2,
                    crate::data::BlockKind::CarB,
                    Orientation::Vertical,
                )
                .unwrap(),
            )
            .unwrap();

        let result = search(&board, Mode::Exhaustive, false);
        assert_eq!(result.min_depth, None);
        assert_eq!(result.stats.total_unique_visited(), 2);
        assert_eq!(result.stats.total_created(), 2);
    }

    #[test]
    fn no_fingerprint_enqueued_twice() {
        let mut board = Board::new();
        board.add_delivery(4).unwrap();
        board.add_car_b(1, 2).unwrap();
        board.add_truck(3, 0, Orientation::Horizontal).unwrap();

        let result = search(&board, Mode::Exhaustive, false);
        // every enqueued state is visited exactly once when the component is
        // enumerated to the end, so enqueues equal distinct reachable states
        assert_eq!(
            result.stats.total_created(),
            result.stats.total_unique_visited()
        );
    }

    #[test]
    fn results_are_deterministic() {
        let mut board = Board::new();
        board.add_delivery(4).unwrap();
        board.add_car_b(1, 2).unwrap();
        board.add_car_a(4, 0).unwrap();

        let first = search(&board, Mode::Exhaustive, false);
        let second = search(&board, Mode::Exhaustive, false);
        assert_eq!(first.min_depth, second.min_depth);
        assert_eq!(first.stats, second.stats);
    }
}
