use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

use log::debug;
use rand::Rng;

use crate::block::Block;
use crate::board::Board;
use crate::config::Mode;
use crate::data::{BlockKind, Orientation, EXIT_ROW};
use crate::solver;

/// Board assembly and difficulty policy. The defaults mirror the classic
/// puzzle mix: mostly cars, some trucks, the odd fixed obstacle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// Minimum solution depth a candidate must reach to be accepted.
    pub min_depth: u32,
    /// Candidate budget before giving up.
    pub max_attempts: u32,
    /// Reserved delivery vehicle column.
    pub delivery_col: u8,
    pub min_blocks: usize,
    pub max_blocks: usize,
    /// Placement attempts per candidate before it is sent to the solver
    /// with however many blocks fit.
    pub max_placement_tries: u32,
    /// Kind distribution as fractions of 1; trucks take the remainder.
    pub obstacle_weight: f64,
    pub car_a_weight: f64,
    pub car_b_weight: f64,
    /// Fraction of trucks placed vertically.
    pub vertical_truck_weight: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            min_depth: 15,
            max_attempts: 10_000,
            delivery_col: 4,
            min_blocks: 9,
            max_blocks: 12,
            max_placement_tries: 200,
            obstacle_weight: 0.05,
            car_a_weight: 0.35,
            car_b_weight: 0.30,
            vertical_truck_weight: 0.70,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenError {
    /// The attempt budget ran out before any candidate met the difficulty
    /// threshold.
    GaveUp { attempts: u32 },
}

impl Display for GenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            GenError::GaveUp { attempts } => {
                write!(f, "gave up after {} candidate boards", attempts)
            }
        }
    }
}

impl Error for GenError {}

/// An accepted puzzle together with its difficulty.
#[derive(Debug, Clone)]
pub struct Generated {
    pub board: Board,
    pub min_depth: u32,
    pub attempts: u32,
}

/// Assembles random candidate boards and keeps the first one whose minimum
/// solution depth meets the threshold. Bounded by `max_attempts` - the
/// difficulty filter alone gives no termination guarantee.
pub fn generate<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Result<Generated, GenError> {
    for attempt in 1..=config.max_attempts {
        let board = assemble(config, rng);
        // level order makes the first solution minimal, so there is no need
        // to enumerate the rest of the component
        let result = solver::search(&board, Mode::FirstSolution, false);
        match result.min_depth {
            Some(depth) if depth >= config.min_depth => {
                debug!("accepted candidate {} with depth {}", attempt, depth);
                return Ok(Generated {
                    board,
                    min_depth: depth,
                    attempts: attempt,
                });
            }
            Some(depth) => debug!("candidate {} too easy: depth {}", attempt, depth),
            None => debug!("candidate {} unsolvable", attempt),
        }
    }
    Err(GenError::GaveUp {
        attempts: config.max_attempts,
    })
}

fn assemble<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Board {
    let mut board = Board::new();
    board
        .add_delivery(config.delivery_col)
        .expect("delivery fits an empty board");

    let target = rng.gen_range(config.min_blocks..=config.max_blocks);
    let mut tries = 0;
    while board.blocks().len() < target && tries < config.max_placement_tries {
        tries += 1;
        let r = rng.gen_range(0..board.size());
        let c = rng.gen_range(0..board.size());
        let block = random_block(config, rng, r, c);
        if corks_exit(block) {
            continue;
        }
        // overlaps are expected and silently retried
        let _ = board.place(block);
    }
    board
}

/// A block that can never leave the exit row would make the puzzle
/// unsolvable outright; reject it before wasting a search on it. Vertical
/// blocks crossing the row are fine - they can step out of the way.
fn corks_exit(block: Block) -> bool {
    let stuck =
        block.kind == BlockKind::Obstacle || block.orientation == Orientation::Horizontal;
    stuck && block.cells().any(|pos| pos.r == EXIT_ROW)
}

fn random_block<R: Rng>(config: &GeneratorConfig, rng: &mut R, r: u8, c: u8) -> Block {
    let num: f64 = rng.gen();
    let (kind, length, orientation) = if num < config.obstacle_weight {
        (BlockKind::Obstacle, 1, Orientation::Horizontal)
    } else if num < config.obstacle_weight + config.car_a_weight {
        (BlockKind::CarA, 2, Orientation::Horizontal)
    } else if num < config.obstacle_weight + config.car_a_weight + config.car_b_weight {
        (BlockKind::CarB, 2, Orientation::Vertical)
    } else if rng.gen::<f64>() < config.vertical_truck_weight {
        (BlockKind::Truck, 3, Orientation::Vertical)
    } else {
        (BlockKind::Truck, 3, Orientation::Horizontal)
    };
    Block::new(r, c, length, kind, orientation).expect("coordinates come from the grid")
}
