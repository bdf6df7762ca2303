//! Fallback for locations no page claims

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::theme::ThemeColors;

pub fn render(app: &App, c: &ThemeColors, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Page not found",
            Style::default().fg(c.error).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::styled(
            format!("  Nothing lives at `{}`.", app.shell.location()),
            Style::default().fg(c.fg),
        ),
        Line::styled("  Press Esc to go back.", Style::default().fg(c.muted)),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}
