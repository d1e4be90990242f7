use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use crate::board::Board;
use crate::parser;

pub(crate) fn read_file<P: AsRef<Path>>(path: P) -> Result<String, Box<dyn Error>> {
    let mut file = File::open(path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// The board is named after the path it was loaded from.
pub(crate) fn load_board<P: AsRef<Path>>(path: P) -> Result<Board, Box<dyn Error>> {
    let path = path.as_ref();
    let text = read_file(path)?;
    let board = parser::parse(&path.display().to_string(), &text)?;
    Ok(board)
}
