// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

pub mod board;
pub mod config;
pub mod solver;

mod data;
mod fs;
mod parser;
mod state;
mod vec2d;
mod vehicle;

use std::error::Error;

use crate::board::Board;
use crate::config::Method;
use crate::solver::{SolverErr, Solution};

pub use crate::data::{Orientation, Pos};
pub use crate::parser::ParserErr;
pub use crate::state::{Identity, NodeId, State};
pub use crate::vec2d::Vec2d;
pub use crate::vehicle::Vehicle;

pub trait LoadBoard {
    fn load_board(&self) -> Result<Board, Box<dyn Error>>;
}

impl LoadBoard for str {
    fn load_board(&self) -> Result<Board, Box<dyn Error>> {
        fs::load_board(self)
    }
}

pub trait Solve {
    fn solve(&self, method: Method, max_expansions: Option<usize>) -> Result<Solution, SolverErr>;
}

#[cfg(test)]
mod tests {
    use crate::config::Heuristic::{Advanced, Blocking, Zero};
    use crate::config::Method::{self, AStar, Dfs};

    use super::*;

    #[test]
    fn test_boards() {
        // method, board, cost, created, unique visited, reached duplicates
        let boards = [
            (Dfs, "00-solved.txt", 0, 1, 1, 0),
            (AStar(Zero), "00-solved.txt", 0, 1, 1, 0),
            (AStar(Blocking), "00-solved.txt", 0, 1, 1, 0),
            (AStar(Advanced), "00-solved.txt", 0, 1, 1, 0),
            (Dfs, "01-one-blocker.txt", 17, 119, 18, 46),
            (AStar(Zero), "01-one-blocker.txt", 2, 123, 19, 28),
            (AStar(Blocking), "01-one-blocker.txt", 2, 31, 5, 0),
            (AStar(Advanced), "01-one-blocker.txt", 2, 31, 5, 0),
            (Dfs, "02-beginner.txt", 972, 10_864, 980, 4_538),
            (AStar(Zero), "02-beginner.txt", 8, 11_571, 1_058, 9_841),
            (AStar(Blocking), "02-beginner.txt", 8, 6_711, 599, 3_313),
            (AStar(Advanced), "02-beginner.txt", 8, 2_512, 221, 728),
            (Dfs, "03-expert.txt", 1_497, 13_432, 1_646, 5_033),
            (AStar(Zero), "03-expert.txt", 51, 25_127, 3_111, 20_223),
            (AStar(Blocking), "03-expert.txt", 51, 20_783, 2_597, 15_779),
            (AStar(Advanced), "03-expert.txt", 51, 16_190, 2_096, 11_202),
            (Dfs, "04-boxed-in.txt", -1, 17, 6, 11),
            (AStar(Zero), "04-boxed-in.txt", -1, 17, 6, 11),
            (AStar(Blocking), "04-boxed-in.txt", -1, 17, 6, 11),
            (AStar(Advanced), "04-boxed-in.txt", -1, 17, 6, 11),
            (Dfs, "05-no-moves.txt", -1, 1, 1, 0),
            (AStar(Zero), "05-no-moves.txt", -1, 1, 1, 0),
            (AStar(Blocking), "05-no-moves.txt", -1, 1, 1, 0),
            (AStar(Advanced), "05-no-moves.txt", -1, 1, 1, 0),
        ];

        let succeeded = boards
            .iter()
            .filter(|&&(method, name, cost, created, visited, duplicates)| {
                test_board(method, name, cost, created, visited, duplicates)
            })
            .count();
        assert_eq!(succeeded, boards.len());
    }

    fn test_board(
        method: Method,
        name: &str,
        cost: i32,
        created: i32,
        visited: i32,
        duplicates: i32,
    ) -> bool {
        let path = format!("boards/{}", name);
        println!("Solving {} using {}", path, method);

        let board = path.load_board().unwrap();
        assert_eq!(&*board.name, path.as_str());
        let solution = board.solve(method, None).unwrap();

        let ok = solution.cost == cost
            && solution.path.len() as i32 == cost + 1
            && solution.stats.total_created() == created
            && solution.stats.total_unique_visited() == visited
            && solution.stats.total_reached_duplicates() == duplicates;
        if !ok {
            println!("Expected cost {} created {} visited {} duplicates {}", cost, created, visited, duplicates);
            println!("Got:\n{:?}", solution);
        }
        ok
    }

    #[test]
    fn root_exports() {
        // what callers outside the crate build boards from
        let goal = crate::Vehicle::new(crate::Orientation::Horizontal, 2, 4, 2, true);
        let board = Board::new("exports", vec![goal]);
        assert_eq!(board.vehicles[0].cells().last(), Some(crate::Pos { r: 2, c: 5 }));
        let solution = board.solve(Method::Dfs, None).unwrap();
        let start: &crate::State = &solution.path[0];
        assert_eq!(start.id, crate::Identity::of(&board));
    }

    #[test]
    fn missing_file() {
        assert!("boards/does-not-exist.txt".load_board().is_err());
    }
}
