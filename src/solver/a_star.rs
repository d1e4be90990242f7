use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::board::Board;
use crate::config::{Heuristic, Method};
use crate::state::{Identity, NodeId};

use super::{Search, SolverErr, Solution, Visit};

/// Frontier order: lowest `f` first, then identity, then the parent's identity.
/// The initial state has no parent and goes before anything with one.
/// The node id is last only so the key is total - the first three never tie
/// since a parent can't produce the same board twice.
type Key = (i32, Identity, Option<Identity>, NodeId);

pub(super) fn search(
    board: &Board,
    heuristic: Heuristic,
    max_expansions: Option<usize>,
) -> Result<Solution, SolverErr> {
    let method = Method::AStar(heuristic);
    let (mut search, root) = Search::start(board, heuristic, max_expansions)?;

    // popping the minimum gives the same order as sorting the whole frontier before each pop
    let mut to_visit = BinaryHeap::new();
    to_visit.push(Reverse(key(&search, root)));

    while let Some(Reverse((_, _, _, cur))) = to_visit.pop() {
        match search.visit(cur)? {
            Visit::Duplicate => continue,
            Visit::Goal => return Ok(search.solved(cur, method)),
            Visit::Expanded(new_ids) => {
                for id in new_ids {
                    to_visit.push(Reverse(key(&search, id)));
                }
            }
        }
    }

    Ok(search.exhausted(method))
}

fn key(search: &Search, id: NodeId) -> Key {
    let state = search.state(id);
    let parent_id = state.parent.map(|parent| search.state(parent).id.clone());
    (state.f, state.id.clone(), parent_id, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_goes_first() {
        let board: Board = r"
......
......
XX....
......
......
......
"
        .parse()
        .unwrap();
        let (search, root) = Search::start(&board, Heuristic::Zero, None).unwrap();
        let root_key = key(&search, root);
        assert_eq!(root_key.2, None);

        let with_parent: Key = (root_key.0, root_key.1.clone(), Some(root_key.1.clone()), root);
        assert!(root_key < with_parent);
    }

    #[test]
    fn stats_by_heuristic() {
        let board: Board = r"
AA...B
C..D.B
CXXD.B
C..D..
E...FF
E.GGG.
"
        .parse()
        .unwrap();

        let expected = [
            (Heuristic::Zero, 11_571, 1_058, 9_841),
            (Heuristic::Blocking, 6_711, 599, 3_313),
            (Heuristic::Advanced, 2_512, 221, 728),
        ];
        for &(heuristic, created, visited, duplicates) in &expected {
            let solution = search(&board, heuristic, None).unwrap();
            assert_eq!(solution.cost, 8);
            assert_eq!(solution.stats.total_created(), created);
            assert_eq!(solution.stats.total_unique_visited(), visited);
            assert_eq!(solution.stats.total_reached_duplicates(), duplicates);
        }
    }
}
