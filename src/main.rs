// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]

use std::process;
use std::str::FromStr;

use clap::{App, Arg, ArgMatches};
use rand::rngs::StdRng;
use rand::SeedableRng;

use gridlock_solver::config::Mode;
use gridlock_solver::factory;
use gridlock_solver::generator::{self, GeneratorConfig};
use gridlock_solver::Solve;

fn main() {
    env_logger::init();

    let matches = App::new("gridlock-solver")
        .arg(
            Arg::with_name("puzzle")
                .possible_values(factory::NAMES)
                .required_unless("generate")
                .help("name of a built-in puzzle"),
        )
        .arg(
            Arg::with_name("exhaustive")
                .short("e")
                .long("exhaustive")
                .help("explore the whole state space instead of stopping at the first solution"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("don't print progress while solving"),
        )
        .arg(
            Arg::with_name("generate")
                .short("g")
                .long("generate")
                .conflicts_with("puzzle")
                .help("generate a random solvable puzzle instead of solving one"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .help("seed for the puzzle generator"),
        )
        .arg(
            Arg::with_name("min-depth")
                .long("min-depth")
                .takes_value(true)
                .help("minimum solution length a generated puzzle must have"),
        )
        .arg(
            Arg::with_name("max-attempts")
                .long("max-attempts")
                .takes_value(true)
                .help("how many candidate boards to try before giving up"),
        )
        .get_matches();

    if matches.is_present("generate") {
        run_generator(&matches);
        return;
    }

    let name = matches.value_of("puzzle").unwrap();
    let board = factory::by_name(name).unwrap();

    let mode = if matches.is_present("exhaustive") {
        Mode::Exhaustive
    } else {
        Mode::FirstSolution
    };
    let print_status = !matches.is_present("quiet");

    println!("Solving {}...", name);
    println!("{}", board);

    let result = board.solve(mode, print_status);
    println!("{}", result.stats);
    match result.min_depth {
        Some(depth) => println!("Minimum moves: {}", depth),
        None => println!("No solution"),
    }
}

fn run_generator(matches: &ArgMatches<'_>) {
    let mut config = GeneratorConfig::default();
    if let Some(value) = matches.value_of("min-depth") {
        config.min_depth = parse_arg("min-depth", value);
    }
    if let Some(value) = matches.value_of("max-attempts") {
        config.max_attempts = parse_arg("max-attempts", value);
    }

    let mut rng = match matches.value_of("seed") {
        Some(value) => StdRng::seed_from_u64(parse_arg("seed", value)),
        None => StdRng::from_entropy(),
    };

    match generator::generate(&config, &mut rng) {
        Ok(generated) => {
            println!(
                "Generated a puzzle solvable in {} moves ({} candidate boards tried):",
                generated.min_depth, generated.attempts
            );
            println!("{}", generated.board);
        }
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}

fn parse_arg<T: FromStr>(name: &str, value: &str) -> T {
    value.parse().unwrap_or_else(|_| {
        eprintln!("Invalid value for --{}: {}", name, value);
        process::exit(1);
    })
}
