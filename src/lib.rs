// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

pub mod block;
pub mod board;
pub mod config;
pub mod data;
pub mod factory;
pub mod generator;
pub mod solver;

mod vec2d;

use crate::config::Mode;
use crate::solver::SolverOk;

pub trait Solve {
    fn solve(&self, mode: Mode, print_status: bool) -> SolverOk;
}
