use std::env;
use std::process;

use clap::{value_t, App, Arg, ArgGroup};

use rush_hour_solver::config::{Heuristic, Method};
use rush_hour_solver::{LoadBoard, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("rush-hour-solver")
        .version("0.1")
        .arg(
            Arg::with_name("dfs")
                .short("d")
                .long("dfs")
                .help("use depth-first search (fast, usually far from shortest)"),
        )
        .arg(
            Arg::with_name("a-star")
                .short("a")
                .long("a-star")
                .help("use A* search (shortest solution, default)"),
        )
        .group(ArgGroup::with_name("method").arg("dfs").arg("a-star"))
        .arg(
            Arg::with_name("heuristic")
                .short("H")
                .long("heuristic")
                .takes_value(true)
                .possible_values(&["zero", "blocking", "advanced"])
                .conflicts_with("dfs")
                .help("heuristic for A* [default: blocking]"),
        )
        .arg(
            Arg::with_name("max-expansions")
                .short("m")
                .long("max-expansions")
                .takes_value(true)
                .help("give up after visiting this many unique states"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    // no default_value in clap - it would conflict with --dfs
    let heuristic = if matches.is_present("heuristic") {
        value_t!(matches, "heuristic", Heuristic).unwrap_or_else(|e| e.exit())
    } else {
        Heuristic::Blocking
    };
    let method = if matches.is_present("dfs") {
        Method::Dfs
    } else {
        Method::AStar(heuristic)
    };

    let max_expansions = if matches.is_present("max-expansions") {
        Some(value_t!(matches, "max-expansions", usize).unwrap_or_else(|e| e.exit()))
    } else {
        None
    };

    // the only required arg
    let path = matches.value_of("file").unwrap_or_default();

    let board = path.load_board().unwrap_or_else(|err| {
        match env::current_dir() {
            Ok(dir) => println!("Can't load board {} in {}: {}", path, dir.display(), err),
            Err(_) => println!("Can't load board {}: {}", path, err),
        }
        process::exit(1);
    });

    println!("Solving {} using {}...", path, method);
    let solution = board.solve(method, max_expansions).unwrap_or_else(|err| {
        println!("Failed to solve: {}", err);
        process::exit(1);
    });
    println!("{}", solution.stats);

    if solution.is_solved() {
        println!("Found solution:");
        for state in &solution.path {
            println!("{}", state.board);
        }
        println!("Cost: {}", solution.cost);
    } else {
        println!("No solution");
    }
}
