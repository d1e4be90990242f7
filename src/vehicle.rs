use crate::data::{Orientation, Pos};

/// A car (length 2) or truck (length 3).
///
/// `fixed` is the row of a horizontal vehicle or the column of a vertical one,
/// `var` is the position of its top/left cell along the axis it moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vehicle {
    pub orientation: Orientation,
    pub fixed: u8,
    pub var: u8,
    pub length: u8,
    pub is_goal: bool,
}

impl Vehicle {
    pub fn new(orientation: Orientation, fixed: u8, var: u8, length: u8, is_goal: bool) -> Self {
        Vehicle {
            orientation,
            fixed,
            var,
            length,
            is_goal,
        }
    }

    /// Coordinate of the bottom/right cell along the axis of motion.
    /// Saturates instead of overflowing for vehicles that don't fit any board.
    pub fn trailing(&self) -> u8 {
        self.var.saturating_add(self.length).saturating_sub(1)
    }

    /// The cell on this vehicle's line (row or column) at `along`.
    pub(crate) fn pos_at(&self, along: u8) -> Pos {
        match self.orientation {
            Orientation::Horizontal => Pos::new(self.fixed, along),
            Orientation::Vertical => Pos::new(along, self.fixed),
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (self.var..self.var.saturating_add(self.length)).map(move |along| self.pos_at(along))
    }

    pub fn occupies(&self, pos: Pos) -> bool {
        let (fixed, along) = match self.orientation {
            Orientation::Horizontal => (pos.r, pos.c),
            Orientation::Vertical => (pos.c, pos.r),
        };
        fixed == self.fixed && along >= self.var && along - self.var < self.length
    }

    /// Same vehicle slid to a new variable coordinate.
    /// Doesn't check the destination is free.
    pub fn moved_to(&self, var: u8) -> Vehicle {
        Vehicle { var, ..*self }
    }

    /// Canonical encoding of orientation and both coordinates.
    /// Coordinates are < 8 so this is injective.
    pub(crate) fn key(&self) -> u8 {
        let orientation = match self.orientation {
            Orientation::Horizontal => 0u8,
            Orientation::Vertical => 1u8,
        };
        orientation << 6 | self.fixed << 3 | self.var
    }
}
