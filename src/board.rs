use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::rc::Rc;

use crate::data::{Orientation, Pos, GRID_SIZE, MAX_VEHICLE_LEN, MIN_VEHICLE_LEN};
use crate::vec2d::Vec2d;
use crate::vehicle::Vehicle;

/// Each cell holds the index of the vehicle covering it.
pub type Grid = Vec2d<Option<usize>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardErr {
    WrongSize(u8),
    BadLength(usize),
    OutOfBounds(usize),
    Overlap(Pos),
    NoGoal,
    MultipleGoals,
    VerticalGoal,
}

impl Display for BoardErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            BoardErr::WrongSize(size) => {
                write!(f, "Board is {0}x{0}, only {1}x{1} is supported", size, GRID_SIZE)
            }
            BoardErr::BadLength(i) => write!(
                f,
                "Vehicle {} must be {} or {} cells long",
                i, MIN_VEHICLE_LEN, MAX_VEHICLE_LEN
            ),
            BoardErr::OutOfBounds(i) => write!(f, "Vehicle {} is outside the board", i),
            BoardErr::Overlap(pos) => write!(f, "Vehicles overlap at pos: {}", pos),
            BoardErr::NoGoal => write!(f, "No goal vehicle"),
            BoardErr::MultipleGoals => write!(f, "More than one goal vehicle"),
            BoardErr::VerticalGoal => write!(f, "Goal vehicle must be horizontal"),
        }
    }
}

impl Error for BoardErr {}

/// Positions of all vehicles at one point of the search.
///
/// Vehicle order matters - it's kept by every successor
/// and both equality and identity compare vehicles position by position.
#[derive(Clone)]
pub struct Board {
    pub name: Rc<str>,
    pub size: u8,
    pub vehicles: Vec<Vehicle>,
}

impl Board {
    pub fn new(name: &str, vehicles: Vec<Vehicle>) -> Self {
        Board {
            name: name.into(),
            size: GRID_SIZE,
            vehicles,
        }
    }

    pub fn goal_vehicle(&self) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.is_goal)
    }

    /// The goal vehicle touches the right edge.
    pub fn is_goal(&self) -> bool {
        self.goal_vehicle().map_or(false, |goal| {
            goal.length > 0 && goal.var.checked_add(goal.length) == Some(self.size)
        })
    }

    /// Copy of the board with one vehicle slid to `var`.
    /// The caller is responsible for checking the cells in between are free.
    pub fn with_moved(&self, index: usize, var: u8) -> Board {
        let mut vehicles = self.vehicles.clone();
        vehicles[index] = vehicles[index].moved_to(var);
        Board {
            name: Rc::clone(&self.name),
            size: self.size,
            vehicles,
        }
    }

    pub fn render_grid(&self) -> Result<Grid, BoardErr> {
        let mut grid = Vec2d::new(self.size, self.size, None);
        for (i, vehicle) in self.vehicles.iter().enumerate() {
            // var < size first so the subtraction can't underflow
            if vehicle.fixed >= self.size
                || vehicle.var >= self.size
                || vehicle.length > self.size - vehicle.var
            {
                return Err(BoardErr::OutOfBounds(i));
            }
            for pos in vehicle.cells() {
                if grid[pos].is_some() {
                    return Err(BoardErr::Overlap(pos));
                }
                grid[pos] = Some(i);
            }
        }
        Ok(grid)
    }

    pub fn validate(&self) -> Result<(), BoardErr> {
        if self.size != GRID_SIZE {
            return Err(BoardErr::WrongSize(self.size));
        }
        for (i, vehicle) in self.vehicles.iter().enumerate() {
            if vehicle.length < MIN_VEHICLE_LEN || vehicle.length > MAX_VEHICLE_LEN {
                return Err(BoardErr::BadLength(i));
            }
        }

        let mut goals = self.vehicles.iter().filter(|v| v.is_goal);
        match (goals.next(), goals.next()) {
            (None, _) => return Err(BoardErr::NoGoal),
            (Some(_), Some(_)) => return Err(BoardErr::MultipleGoals),
            (Some(goal), None) => {
                if goal.orientation != Orientation::Horizontal {
                    return Err(BoardErr::VerticalGoal);
                }
            }
        }

        self.render_grid().map(|_| ())
    }

    /// `X` for the goal vehicle, then `A`, `B`, ... in board order skipping `X`.
    pub(crate) fn labels(&self) -> Vec<char> {
        let mut others = (b'A'..=b'Z')
            .chain(b'a'..=b'z')
            .chain(b'0'..=b'9')
            .filter(|&b| b != b'X')
            .map(char::from);
        self.vehicles
            .iter()
            .map(|v| {
                if v.is_goal {
                    'X'
                } else {
                    others.next().unwrap_or('?')
                }
            })
            .collect()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.vehicles.len() == other.vehicles.len()
            && self
                .vehicles
                .iter()
                .zip(&other.vehicles)
                .all(|(a, b)| a.key() == b.key())
    }
}

impl Eq for Board {}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let labels = self.labels();
        for r in 0..self.size {
            for c in 0..self.size {
                let pos = Pos::new(r, c);
                // don't go through render_grid - this should print even broken boards
                match self.vehicles.iter().position(|v| v.occupies(pos)) {
                    Some(i) => write!(f, "{}", labels[i])?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.name)?;
        write!(f, "{}", self)
    }
}
