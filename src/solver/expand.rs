use crate::board::{Board, BoardErr};
use crate::state::{NodeId, State};

/// All states reachable by sliding one vehicle any number of free cells in one direction.
///
/// Every distance is a separate successor one move deeper than the parent.
/// Vehicles can't jump over each other so scanning stops at the first occupied cell.
pub(crate) fn expand(parent_id: NodeId, parent: &State) -> Result<Vec<State>, BoardErr> {
    let board = &parent.board;
    let grid = board.render_grid()?;

    let mut new_states = Vec::new();
    for (i, vehicle) in board.vehicles.iter().enumerate() {
        // up or left
        for var in (0..vehicle.var).rev() {
            if grid[vehicle.pos_at(var)].is_some() {
                break;
            }
            new_states.push(child(parent_id, parent, board.with_moved(i, var)));
        }

        // down or right
        for front in vehicle.trailing() + 1..board.size {
            if grid[vehicle.pos_at(front)].is_some() {
                break;
            }
            let var = front + 1 - vehicle.length;
            new_states.push(child(parent_id, parent, board.with_moved(i, var)));
        }
    }

    Ok(new_states)
}

fn child(parent_id: NodeId, parent: &State, board: Board) -> State {
    let g = parent.g + 1;
    let f = g + parent.heuristic.evaluate(&board);
    State::new(board, parent.heuristic, f, g, Some(parent_id))
}
