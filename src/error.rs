use std::io;

use thiserror::Error;

/// Failures the simulation can report to its caller.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum GameError {
    /// Every cell is covered by the snake, so food has nowhere to go.
    #[error("no free cell left for food on the {width}x{height} board")]
    BoardFull { width: u16, height: u16 },
}

impl From<GameError> for io::Error {
    fn from(error: GameError) -> Self {
        io::Error::other(error)
    }
}
