use rand::Rng;

use crate::config::MAX_RANDOM_PLACEMENT_ATTEMPTS;
use crate::error::GameError;
use crate::grid::{GridSize, Position, contains, random_cell};

/// Food pellet currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates food at a fixed `position`.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Spawns food on a cell not covered by `body`.
    pub fn spawn<'a, R, I>(rng: &mut R, grid: GridSize, body: I) -> Result<Self, GameError>
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = &'a Position>,
        I::IntoIter: Clone,
    {
        spawn_position(rng, grid, body).map(Self::at)
    }

    /// Moves the food to a fresh cell not covered by `body`.
    pub fn regenerate<'a, R, I>(
        &mut self,
        rng: &mut R,
        grid: GridSize,
        body: I,
    ) -> Result<(), GameError>
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = &'a Position>,
        I::IntoIter: Clone,
    {
        self.position = spawn_position(rng, grid, body)?;
        Ok(())
    }
}

/// Picks a free cell by redrawing random cells until one misses `body`.
///
/// A full board is reported as [`GameError::BoardFull`]. After
/// [`MAX_RANDOM_PLACEMENT_ATTEMPTS`] misses the free cells are enumerated and
/// one is chosen uniformly, so a nearly full board still terminates.
pub fn spawn_position<'a, R, I>(
    rng: &mut R,
    grid: GridSize,
    body: I,
) -> Result<Position, GameError>
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = &'a Position>,
    I::IntoIter: Clone,
{
    let body = body.into_iter();
    let board_full = || GameError::BoardFull {
        width: grid.width,
        height: grid.height,
    };

    if grid.total_cells() == 0 {
        return Err(board_full());
    }

    for _ in 0..MAX_RANDOM_PLACEMENT_ATTEMPTS {
        let candidate = random_cell(rng, grid);
        if !contains(body.clone(), candidate) {
            return Ok(candidate);
        }
    }

    let free: Vec<Position> = grid
        .cells()
        .filter(|cell| !contains(body.clone(), *cell))
        .collect();

    if free.is_empty() {
        return Err(board_full());
    }

    Ok(free[rng.gen_range(0..free.len())])
}
