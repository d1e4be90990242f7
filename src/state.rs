use std::fmt::{self, Debug, Formatter};

use crate::board::Board;
use crate::config::Heuristic;

/// Canonical key of a board configuration - one byte per vehicle.
///
/// Collision-free so duplicate detection never prunes a different board.
/// The ordering is only used as a deterministic tie-break.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identity(Box<[u8]>);

impl Identity {
    pub fn of(board: &Board) -> Self {
        Identity(board.vehicles.iter().map(|v| v.key()).collect())
    }
}

impl Debug for Identity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// Index of a state in the search tree that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

/// A search node. Never changes after it's created.
#[derive(Clone)]
pub struct State {
    pub board: Board,
    pub heuristic: Heuristic,
    /// Estimated total cost.
    pub f: i32,
    /// Moves from the initial state.
    pub g: i32,
    pub parent: Option<NodeId>,
    pub id: Identity,
}

impl State {
    pub(crate) fn new(
        board: Board,
        heuristic: Heuristic,
        f: i32,
        g: i32,
        parent: Option<NodeId>,
    ) -> Self {
        let id = Identity::of(&board);
        State {
            board,
            heuristic,
            f,
            g,
            parent,
            id,
        }
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "id: {:?} f: {} g: {} parent: {:?}",
            self.id, self.f, self.g, self.parent
        )?;
        write!(f, "{}", self.board)
    }
}
