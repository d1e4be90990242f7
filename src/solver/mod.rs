mod a_star;
mod dfs;
mod expand;
mod heuristic;
mod stats;
mod tree;

use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use fnv::FnvHashSet;
use log::{debug, info};

use crate::board::{Board, BoardErr};
use crate::config::{Heuristic, Method};
use crate::state::{Identity, NodeId, State};
use crate::Solve;

use self::expand::expand;
use self::tree::SearchTree;

pub use self::stats::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    Board(BoardErr),
    /// More states would have to be expanded than allowed.
    ExpansionLimit(usize),
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::Board(ref err) => write!(f, "Invalid board - {}", err),
            SolverErr::ExpansionLimit(max) => {
                write!(f, "Gave up after expanding {} states", max)
            }
        }
    }
}

impl Error for SolverErr {}

impl From<BoardErr> for SolverErr {
    fn from(err: BoardErr) -> Self {
        SolverErr::Board(err)
    }
}

/// Result of a finished search.
///
/// `path` goes from the initial state to the goal state.
/// When there's no solution it's empty and `cost` is -1.
pub struct Solution {
    pub path: Vec<State>,
    pub cost: i32,
    pub stats: Stats,
    pub method: Method,
}

impl Solution {
    fn new(path: Vec<State>, stats: Stats, method: Method) -> Self {
        let cost = path.last().map_or(-1, |state| state.g);
        Solution {
            path,
            cost,
            stats,
            method,
        }
    }

    pub fn is_solved(&self) -> bool {
        !self.path.is_empty()
    }
}

impl Debug for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_solved() {
            writeln!(f, "{}: {}", self.method, self.cost)?;
        } else {
            writeln!(f, "No solution")?;
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Board {
    fn solve(&self, method: Method, max_expansions: Option<usize>) -> Result<Solution, SolverErr> {
        solve(self, method, max_expansions)
    }
}

/// First solution found by depth-first search, no expansion limit.
pub fn depth_first_search(board: &Board) -> Result<Solution, SolverErr> {
    dfs::search(board, None)
}

/// Shortest solution, no expansion limit.
pub fn a_star_search(board: &Board, heuristic: Heuristic) -> Result<Solution, SolverErr> {
    a_star::search(board, heuristic, None)
}

pub fn solve(
    board: &Board,
    method: Method,
    max_expansions: Option<usize>,
) -> Result<Solution, SolverErr> {
    debug!("Solving {} using {}", board.name, method);
    match method {
        Method::Dfs => dfs::search(board, max_expansions),
        Method::AStar(heuristic) => a_star::search(board, heuristic, max_expansions),
    }
}

/// Result of popping a state from the frontier.
enum Visit {
    Duplicate,
    Goal,
    Expanded(Vec<NodeId>),
}

/// Bookkeeping shared by both search strategies - they only differ in the frontier.
struct Search {
    tree: SearchTree,
    explored: FnvHashSet<Identity>,
    stats: Stats,
    max_expansions: Option<usize>,
}

impl Search {
    /// Rejects invalid boards before anything is searched.
    fn start(
        board: &Board,
        heuristic: Heuristic,
        max_expansions: Option<usize>,
    ) -> Result<(Search, NodeId), SolverErr> {
        debug!("Search called");
        board.validate()?;

        let mut search = Search {
            tree: SearchTree::new(),
            explored: FnvHashSet::default(),
            stats: Stats::new(),
            max_expansions,
        };

        let h = heuristic.evaluate(board);
        let start = State::new(board.clone(), heuristic, h, 0, None);
        search.stats.add_created(&start);
        let root = search.tree.add(start);
        Ok((search, root))
    }

    fn visit(&mut self, id: NodeId) -> Result<Visit, SolverErr> {
        let state = self.tree.get(id);
        if self.explored.contains(&state.id) {
            self.stats.add_reached_duplicate(state);
            return Ok(Visit::Duplicate);
        }

        self.explored.insert(state.id.clone());
        if self.stats.add_unique_visited(state) {
            info!("Visited new depth: {}", state.g);
            debug!("{:?}", self.stats);
        }

        if state.board.is_goal() {
            return Ok(Visit::Goal);
        }

        // every explored state except this one has been expanded
        if let Some(max) = self.max_expansions {
            if self.explored.len() > max {
                return Err(SolverErr::ExpansionLimit(max));
            }
        }

        let new_states = expand(id, state)?;
        let mut ids = Vec::with_capacity(new_states.len());
        for new_state in new_states {
            self.stats.add_created(&new_state);
            ids.push(self.tree.add(new_state));
        }
        Ok(Visit::Expanded(ids))
    }

    fn state(&self, id: NodeId) -> &State {
        self.tree.get(id)
    }

    fn solved(self, goal: NodeId, method: Method) -> Solution {
        debug!("Solved, backtracking path");
        let path = self.tree.path_to(goal);
        Solution::new(path, self.stats, method)
    }

    fn exhausted(self, method: Method) -> Solution {
        debug!("No solution, {} states created", self.tree.len());
        Solution::new(Vec::new(), self.stats, method)
    }
}
