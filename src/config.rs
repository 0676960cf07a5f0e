use std::time::Duration;

use ratatui::style::Color;
use ratatui::symbols::border;

use crate::grid::{GridSize, Position};
use crate::input::Direction;

/// Side length of the square playing field, in cells.
pub const GRID_SIZE: GridSize = GridSize::square(25);

/// Wall-clock interval between simulation ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// Pause between rendered frames (~60 fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Canonical spawn layout, head first.
pub const INITIAL_BODY: [Position; 3] = [
    Position { x: 6, y: 9 },
    Position { x: 5, y: 9 },
    Position { x: 4, y: 9 },
];

/// Heading the snake spawns (and respawns) with.
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Random draws tried before food placement falls back to scanning free cells.
pub const MAX_RANDOM_PLACEMENT_ATTEMPTS: usize = 1024;

/// Terminal columns used for one grid cell, so cells look roughly square.
pub const CELL_COLUMNS: u16 = 2;

/// Rows reserved for the title label above the field.
pub const TITLE_ROWS: u16 = 1;

/// Rows reserved for the score line below the field.
pub const SCORE_ROWS: u16 = 1;

pub const TITLE_TEXT: &str = "Snake";

pub const GLYPH_FOOD: &str = "()";
pub const GLYPH_SNAKE_SEGMENT: &str = "██";

/// Playing field background.
pub const COLOR_FIELD: Color = Color::Rgb(173, 204, 96);

/// Border, text, and snake colour.
pub const COLOR_INK: Color = Color::Rgb(43, 51, 24);

pub const COLOR_FOOD: Color = Color::Rgb(200, 40, 40);

/// Rounded border drawn around the playing field.
pub const BORDER_FIELD: border::Set = border::ROUNDED;
