use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph};

use crate::config::{COLOR_FIELD, COLOR_INK};

const HINT: &str = "press an arrow key to play";

/// Draws a one-line restart hint centred in the playing field.
pub fn render_stopped_hint(frame: &mut Frame<'_>, inner: Rect) {
    let hint_width = u16::try_from(HINT.len() + 2).unwrap_or(u16::MAX);
    let row = centered_row(inner, hint_width);

    frame.render_widget(Clear, row);
    frame.render_widget(
        Paragraph::new(Line::from(HINT))
            .alignment(Alignment::Center)
            .style(
                Style::new()
                    .fg(COLOR_FIELD)
                    .bg(COLOR_INK)
                    .add_modifier(Modifier::BOLD),
            ),
        row,
    );
}

fn centered_row(area: Rect, width: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(mid);

    center
}
