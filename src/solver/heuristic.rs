use crate::board::Board;
use crate::config::Heuristic;
use crate::data::{Orientation, Pos};
use crate::vehicle::Vehicle;

impl Heuristic {
    /// Less is better, 0 on goal boards.
    pub fn evaluate(self, board: &Board) -> i32 {
        match self {
            Heuristic::Zero => 0,
            Heuristic::Blocking => blocking(board),
            Heuristic::Advanced => advanced(board),
        }
    }
}

/// 1 for the goal vehicle's own move plus 1 for every vehicle in its way.
pub(crate) fn blocking(board: &Board) -> i32 {
    if board.is_goal() {
        return 0;
    }
    1 + blockers(board).len() as i32
}

/// Blocking plus the vehicles which must move so a jammed blocker can leave the goal row.
///
/// A blocker is jammed if every way out of the goal row (up or down, as long as it fits
/// in the grid) is obstructed. Vehicles in the way on all of its ways out must move
/// at least once and they're never the goal vehicle or another blocker
/// since they are in the blocker's column but outside the goal row.
/// If the jammed blockers have no such common vehicle, at least one other move is still needed.
pub(crate) fn advanced(board: &Board) -> i32 {
    if board.is_goal() {
        return 0;
    }

    let goal = match board.goal_vehicle() {
        Some(goal) => goal,
        None => return 0,
    };

    let blockers = blockers(board);
    let mut must_move: Vec<usize> = Vec::new();
    let mut jammed = false;
    for &blocker in &blockers {
        let vehicle = &board.vehicles[blocker];
        // horizontal blockers can never leave the row - nothing to add
        if vehicle.orientation != Orientation::Vertical {
            continue;
        }

        let ways = ways_out(board, vehicle, goal.fixed);
        // a free way out means nothing else has to move first
        if ways.is_empty() || ways.iter().any(|way| way.is_empty()) {
            continue;
        }

        jammed = true;
        for &i in &ways[0] {
            if ways[1..].iter().all(|way| way.contains(&i)) && !must_move.contains(&i) {
                must_move.push(i);
            }
        }
    }

    let extra = if must_move.is_empty() && jammed {
        1
    } else {
        must_move.len() as i32
    };
    1 + blockers.len() as i32 + extra
}

/// Indices of vehicles between the goal vehicle and the exit.
pub(crate) fn blockers(board: &Board) -> Vec<usize> {
    let goal = match board.goal_vehicle() {
        Some(goal) => goal,
        None => return Vec::new(),
    };
    let row = goal.fixed;
    let front = goal.trailing();

    board
        .vehicles
        .iter()
        .enumerate()
        .filter(|(_, v)| !v.is_goal)
        .filter(|(_, v)| match v.orientation {
            Orientation::Horizontal => v.fixed == row && v.var > front,
            Orientation::Vertical => v.fixed > front && v.var <= row && row <= v.trailing(),
        })
        .map(|(i, _)| i)
        .collect()
}

/// For each direction in which a vertical blocker fits after clearing `row`,
/// the other vehicles occupying the cells it would have to sweep through.
/// Empty if there are no such directions.
fn ways_out(board: &Board, blocker: &Vehicle, row: u8) -> Vec<Vec<usize>> {
    let mut ways = Vec::new();

    // up - bottom cell ends just above the row
    if row >= blocker.length {
        let new_var = row - blocker.length;
        ways.push(vehicles_in(board, blocker, new_var..blocker.var));
    }

    // down - top cell ends just below the row
    let end = row
        .checked_add(1)
        .and_then(|new_var| new_var.checked_add(blocker.length));
    if let Some(end) = end.filter(|&end| end <= board.size) {
        ways.push(vehicles_in(board, blocker, blocker.trailing().saturating_add(1)..end));
    }

    ways
}

fn vehicles_in(board: &Board, blocker: &Vehicle, along: std::ops::Range<u8>) -> Vec<usize> {
    let mut found = Vec::new();
    for a in along {
        let pos: Pos = blocker.pos_at(a);
        if let Some(i) = board.vehicles.iter().position(|v| v.occupies(pos)) {
            if !found.contains(&i) {
                found.push(i);
            }
        }
    }
    found
}
