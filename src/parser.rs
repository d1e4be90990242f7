use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::board::{Board, BoardErr};
use crate::data::{Orientation, Pos, GRID_SIZE, MAX_VEHICLE_LEN, MIN_VEHICLE_LEN};
use crate::vehicle::Vehicle;

const EMPTY: char = '.';
const GOAL: char = 'X';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Pos(usize, usize),
    Rows(usize),
    LineLength(usize),
    NotStraight(char),
    BadLength(char),
    Board(BoardErr),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::Rows(rows) => {
                write!(f, "Expected {} rows, found {}", GRID_SIZE, rows)
            }
            ParserErr::LineLength(l) => write!(f, "Wrong line length on line {}", l),
            ParserErr::NotStraight(label) => {
                write!(f, "Vehicle {} is not a straight line of cells", label)
            }
            ParserErr::BadLength(label) => write!(
                f,
                "Vehicle {} must be {} or {} cells long",
                label, MIN_VEHICLE_LEN, MAX_VEHICLE_LEN
            ),
            ParserErr::Board(ref err) => write!(f, "{}", err),
        }
    }
}

impl Error for ParserErr {}

impl From<BoardErr> for ParserErr {
    fn from(err: BoardErr) -> Self {
        ParserErr::Board(err)
    }
}

impl FromStr for Board {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse("board", s)
    }
}

/// Parses a 6x6 grid of `.` (empty) and vehicle labels, `X` is the goal vehicle.
pub(crate) fn parse(name: &str, text: &str) -> Result<Board, ParserErr> {
    // skip blank lines around the grid so we can specify boards using raw strings more easily
    // lines() also drops the \r of CRLF endings
    let mut lines: Vec<_> = text
        .lines()
        .map(str::trim_end)
        .skip_while(|line| line.is_empty())
        .collect();
    while lines.last().map_or(false, |line| line.is_empty()) {
        lines.pop();
    }
    if lines.len() != usize::from(GRID_SIZE) {
        return Err(ParserErr::Rows(lines.len()));
    }

    // labels in order of first occurrence with all their cells
    let mut labels: Vec<(char, Vec<Pos>)> = Vec::new();
    for (r, line) in lines.iter().enumerate() {
        if line.chars().count() != usize::from(GRID_SIZE) {
            return Err(ParserErr::LineLength(r));
        }
        for (c, label) in line.chars().enumerate() {
            if label == EMPTY {
                continue;
            }
            if !label.is_ascii_alphanumeric() {
                return Err(ParserErr::Pos(r, c));
            }
            let pos = Pos::new(r as u8, c as u8);
            match labels.iter_mut().find(|(l, _)| *l == label) {
                Some((_, cells)) => cells.push(pos),
                None => labels.push((label, vec![pos])),
            }
        }
    }

    let mut vehicles = Vec::with_capacity(labels.len());
    for (label, cells) in labels {
        vehicles.push(parse_vehicle(label, &cells)?);
    }

    let board = Board::new(name, vehicles);
    board.validate()?;
    Ok(board)
}

/// `cells` are in reading order so the first one is the top/left end.
fn parse_vehicle(label: char, cells: &[Pos]) -> Result<Vehicle, ParserErr> {
    let length = cells.len();
    if length < usize::from(MIN_VEHICLE_LEN) || length > usize::from(MAX_VEHICLE_LEN) {
        return Err(ParserErr::BadLength(label));
    }

    let first = cells[0];
    let orientation = if cells.iter().all(|p| p.r == first.r) {
        Orientation::Horizontal
    } else if cells.iter().all(|p| p.c == first.c) {
        Orientation::Vertical
    } else {
        return Err(ParserErr::NotStraight(label));
    };

    let vehicle = match orientation {
        Orientation::Horizontal => {
            Vehicle::new(orientation, first.r, first.c, length as u8, label == GOAL)
        }
        Orientation::Vertical => {
            Vehicle::new(orientation, first.c, first.r, length as u8, label == GOAL)
        }
    };

    // gaps between cells of the same label
    if !vehicle.cells().eq(cells.iter().cloned()) {
        return Err(ParserErr::NotStraight(label));
    }

    Ok(vehicle)
}
