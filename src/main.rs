use std::process;
use std::str::FromStr;

use clap::{App, Arg, ArgMatches};
use log::debug;

use sliding_puzzle_solver::config::{self, Config};
use sliding_puzzle_solver::scramble::scramble_seeded;
use sliding_puzzle_solver::{LoadPuzzle, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("sliding-puzzle-solver")
        .author("martin-t")
        .version("0.1")
        .about("Finds the shortest solution of a sliding tile puzzle using IDA*")
        .arg(
            Arg::with_name("dimension")
                .short("d")
                .long("dimension")
                .value_name("N")
                .takes_value(true)
                .help("board size when scrambling (default 4)"),
        )
        .arg(
            Arg::with_name("scramble")
                .short("s")
                .long("scramble")
                .value_name("DEPTH")
                .takes_value(true)
                .help("number of random moves applied to the goal (default 100)"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .takes_value(true)
                .help("seed for scrambling, random if missing"),
        )
        .arg(
            Arg::with_name("max-bound")
                .long("max-bound")
                .value_name("BOUND")
                .takes_value(true)
                .help("give up when the search bound exceeds this"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("don't print the bound of each iteration"),
        )
        .arg(
            Arg::with_name("file")
                .conflicts_with_all(&["dimension", "scramble", "seed"])
                .help("puzzle to solve - scrambles the goal if missing"),
        )
        .get_matches();

    let mut config = match parse_arg(&matches, "dimension") {
        Some(dimension) if !Config::is_valid_dimension(dimension) => {
            eprintln!("Dimension must be between 2 and {}", sliding_puzzle_solver::data::MAX_DIM);
            process::exit(1);
        }
        Some(dimension) => Config::new(dimension),
        None => Config::default(),
    };
    if let Some(depth) = parse_arg(&matches, "scramble") {
        config.scramble_depth = depth;
    }
    config.seed = parse_arg(&matches, "seed");

    let initial = match matches.value_of("file") {
        Some(path) => path.load_puzzle().unwrap_or_else(|err| {
            eprintln!("Can't load puzzle {}: {}", path, err);
            process::exit(1);
        }),
        None => scramble_seeded(config.dimension, config.scramble_depth, config.seed),
    };
    if initial.dim() != config.dimension {
        config.dimension = initial.dim();
        config.bound_limit = config::known_diameter(initial.dim());
    }
    if let Some(max_bound) = parse_arg(&matches, "max-bound") {
        config.bound_limit = Some(max_bound);
    }
    debug!("{:?}", config);

    println!("Initial board:");
    println!("{}", initial);
    println!("Solving...");

    let solver_ok = initial
        .solve_bounded(config.bound_limit, !matches.is_present("quiet"))
        .unwrap_or_else(|err| {
            eprintln!("Failed to solve: {}", err);
            process::exit(1);
        });
    println!("{}", solver_ok.stats);
    match (&solver_ok.path_states, solver_ok.moves()) {
        (Some(path), Some(moves)) => {
            println!("Found solution with cost {}:", moves.move_cnt());
            for state in path {
                println!("{}", state);
            }
            println!("Moves: {}", moves);
        }
        _ => println!("No solution"),
    }
}

fn parse_arg<T: FromStr>(matches: &ArgMatches<'_>, name: &str) -> Option<T> {
    matches.value_of(name).map(|value| {
        value.parse().unwrap_or_else(|_| {
            eprintln!("Invalid value for {}: {}", name, value);
            process::exit(1);
        })
    })
}
