use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::config::{COLOR_FIELD, COLOR_INK, SCORE_ROWS, TITLE_ROWS, TITLE_TEXT};

/// Draws the title row above `board` and the score row below it.
///
/// The caller guarantees the rows fit; see [`crate::renderer::board_rect`].
pub fn render_hud(frame: &mut Frame<'_>, board: Rect, score: u32) {
    let style = Style::new()
        .fg(COLOR_INK)
        .bg(COLOR_FIELD)
        .add_modifier(Modifier::BOLD);

    let title_row = Rect {
        x: board.x,
        y: board.y.saturating_sub(TITLE_ROWS),
        width: board.width,
        height: TITLE_ROWS,
    };
    frame.render_widget(
        Paragraph::new(Line::from(TITLE_TEXT))
            .alignment(Alignment::Left)
            .style(style),
        title_row,
    );

    let score_row = Rect {
        x: board.x,
        y: board.bottom(),
        width: board.width,
        height: SCORE_ROWS,
    };
    frame.render_widget(
        Paragraph::new(Line::from(score.to_string()))
            .alignment(Alignment::Left)
            .style(style),
        score_row,
    );
}
