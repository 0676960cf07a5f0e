use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::config::{
    BORDER_FIELD, CELL_COLUMNS, COLOR_FIELD, COLOR_FOOD, COLOR_INK, GLYPH_FOOD,
    GLYPH_SNAKE_SEGMENT, SCORE_ROWS, TITLE_ROWS,
};
use crate::game::Game;
use crate::grid::{GridSize, Position};
use crate::ui::hud::render_hud;
use crate::ui::overlay::render_stopped_hint;

/// Renders the full game frame from immutable state.
pub fn render<R>(frame: &mut Frame<'_>, game: &Game<R>) {
    let area = frame.area();
    frame.render_widget(Block::new().style(Style::new().bg(COLOR_FIELD)), area);

    let Some(board) = board_rect(area, game.grid()) else {
        render_too_small(frame, area, game.grid());
        return;
    };

    let block = Block::bordered()
        .border_set(BORDER_FIELD)
        .border_style(Style::new().fg(COLOR_INK).bg(COLOR_FIELD));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_hud(frame, board, game.score);
    render_food(frame, inner, game);
    render_snake(frame, inner, game);

    if !game.is_running() {
        render_stopped_hint(frame, inner);
    }
}

/// Returns the bordered board area centred in `area`, leaving room for the
/// title above and the score below, or `None` when it does not fit.
#[must_use]
pub fn board_rect(area: Rect, grid: GridSize) -> Option<Rect> {
    let width = grid.width.checked_mul(CELL_COLUMNS)?.checked_add(2)?;
    let height = grid.height.checked_add(2)?;
    let total_height = height.checked_add(TITLE_ROWS + SCORE_ROWS)?;

    if width > area.width || total_height > area.height {
        return None;
    }

    Some(Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - total_height) / 2 + TITLE_ROWS,
        width,
        height,
    })
}

fn render_food<R>(frame: &mut Frame<'_>, inner: Rect, game: &Game<R>) {
    let Some((x, y)) = cell_to_terminal(inner, game.grid(), game.food.position) else {
        return;
    };

    frame.buffer_mut().set_string(
        x,
        y,
        GLYPH_FOOD,
        Style::new()
            .fg(COLOR_FOOD)
            .bg(COLOR_FIELD)
            .add_modifier(Modifier::BOLD),
    );
}

fn render_snake<R>(frame: &mut Frame<'_>, inner: Rect, game: &Game<R>) {
    let head = game.snake.head();
    let buffer = frame.buffer_mut();

    // Tail first so the head is never painted over.
    for segment in game.snake.segments().rev() {
        let Some((x, y)) = cell_to_terminal(inner, game.grid(), *segment) else {
            continue;
        };

        let mut style = Style::new().fg(COLOR_INK).bg(COLOR_FIELD);
        if *segment == head {
            style = style.add_modifier(Modifier::BOLD);
        }
        buffer.set_string(x, y, GLYPH_SNAKE_SEGMENT, style);
    }
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, grid: GridSize) {
    let needed_width = u32::from(grid.width) * u32::from(CELL_COLUMNS) + 2;
    let needed_height = u32::from(grid.height) + 2 + u32::from(TITLE_ROWS + SCORE_ROWS);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from("Terminal too small"),
            Line::from(format!("need {needed_width}x{needed_height}")),
        ])
        .alignment(Alignment::Center)
        .style(Style::new().fg(COLOR_INK).bg(COLOR_FIELD)),
        area,
    );
}

/// Maps a grid cell to the terminal column/row of its left glyph.
#[must_use]
pub fn cell_to_terminal(inner: Rect, grid: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(grid) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_COLUMNS)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
