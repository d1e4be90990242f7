use std::fmt::{self, Display, Formatter};

/// Rows and columns of the playing field - the puzzle only ever uses 6x6.
pub(crate) const GRID_SIZE: u8 = 6;

pub(crate) const MIN_VEHICLE_LEN: u8 = 2;
pub(crate) const MAX_VEHICLE_LEN: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: u8,
    pub c: u8,
}

impl Pos {
    pub(crate) fn new(r: u8, c: u8) -> Pos {
        Pos { r, c }
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.r, self.c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Orientation {
    /// Moves left and right, fixed coordinate is the row.
    Horizontal,
    /// Moves up and down, fixed coordinate is the column.
    Vertical,
}

impl Display for Orientation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}
