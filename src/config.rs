use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Estimate of the remaining number of moves, chosen once per search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    Zero,
    Blocking,
    Advanced,
}

impl Display for Heuristic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Heuristic::Zero => write!(f, "zero"),
            Heuristic::Blocking => write!(f, "blocking"),
            Heuristic::Advanced => write!(f, "advanced"),
        }
    }
}

impl FromStr for Heuristic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zero" => Ok(Heuristic::Zero),
            "blocking" => Ok(Heuristic::Blocking),
            "advanced" => Ok(Heuristic::Advanced),
            _ => Err(format!("Unknown heuristic: {}", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// First solution found, not necessarily the shortest.
    Dfs,
    /// Shortest solution (the provided heuristics are all admissible).
    AStar(Heuristic),
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::Dfs => write!(f, "dfs"),
            Method::AStar(heuristic) => write!(f, "a-star-{}", heuristic),
        }
    }
}
