use rand::Rng;

use crate::input::Direction;

/// Grid position in logical cell coordinates.
///
/// A coordinate may transiently be `-1` or equal to the grid extent right
/// after a step that left the field; the wall check relies on that.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns true when the position lies inside the grid.
    #[must_use]
    pub fn is_within_bounds(self, grid: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(grid.width)
            && self.y < i32::from(grid.height)
    }

    /// Returns true when the position sits exactly one step outside the grid.
    #[must_use]
    pub fn is_on_wall(self, grid: GridSize) -> bool {
        let width = i32::from(grid.width);
        let height = i32::from(grid.height);
        self.x == -1 || self.x == width || self.y == -1 || self.y == height
    }
}

/// Logical grid dimensions.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    #[must_use]
    pub const fn square(side: u16) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Iterates every cell row by row.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        (0..i32::from(self.height))
            .flat_map(move |y| (0..i32::from(self.width)).map(move |x| Position { x, y }))
    }
}

/// Returns true if `position` equals any element of `positions`.
#[must_use]
pub fn contains<'a, I>(positions: I, position: Position) -> bool
where
    I: IntoIterator<Item = &'a Position>,
{
    positions.into_iter().any(|candidate| *candidate == position)
}

/// Draws a cell with both coordinates uniform and independent over the grid.
#[must_use]
pub fn random_cell<R: Rng + ?Sized>(rng: &mut R, grid: GridSize) -> Position {
    debug_assert!(grid.width > 0 && grid.height > 0);

    Position {
        x: rng.gen_range(0..i32::from(grid.width)),
        y: rng.gen_range(0..i32::from(grid.height)),
    }
}
