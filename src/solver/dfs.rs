use crate::board::Board;
use crate::config::{Heuristic, Method};

use super::{Search, SolverErr, Solution, Visit};

/// Stack based search, explores the smallest identity first among siblings.
pub(super) fn search(board: &Board, max_expansions: Option<usize>) -> Result<Solution, SolverErr> {
    let (mut search, root) = Search::start(board, Heuristic::Zero, max_expansions)?;

    let mut to_visit = vec![root];
    while let Some(cur) = to_visit.pop() {
        match search.visit(cur)? {
            Visit::Duplicate => continue,
            Visit::Goal => return Ok(search.solved(cur, Method::Dfs)),
            Visit::Expanded(mut new_ids) => {
                // descending so the smallest one is on top of the stack
                new_ids.sort_by(|&a, &b| search.state(b).id.cmp(&search.state(a).id));
                to_visit.extend(new_ids);
            }
        }
    }

    Ok(search.exhausted(Method::Dfs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smallest_identity_first() {
        // siblings are tried in identity order so A goes all the way up first,
        // then the search wanders through A's positions before X gets anywhere
        let board: Board = r"
......
......
XX..A.
....A.
......
......
"
        .parse()
        .unwrap();
        let solution = search(&board, None).unwrap();
        let positions: Vec<_> = solution
            .path
            .iter()
            .map(|s| (s.board.vehicles[0].var, s.board.vehicles[1].var))
            .collect();
        let expected = vec![
            (0, 2), (0, 0), (0, 1), (0, 3), (0, 4), (1, 4), (1, 0), (1, 1), (1, 2),
            (1, 3), (2, 3), (2, 0), (2, 1), (2, 2), (2, 4), (3, 4), (3, 3), (4, 3),
        ];
        assert_eq!(positions, expected);
        assert_eq!(solution.cost, 17);
        assert_eq!(solution.stats.total_created(), 119);
        assert_eq!(solution.stats.total_unique_visited(), 18);
        assert_eq!(solution.stats.total_reached_duplicates(), 46);
    }
}
