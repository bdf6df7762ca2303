//! Admin dashboard

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::theme::ThemeColors;

pub fn render(app: &App, c: &ThemeColors, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(1)])
        .split(area);

    let header = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Administration",
            Style::default().fg(c.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  Manage users and credit requests",
            Style::default().fg(c.muted),
        )),
    ];
    frame.render_widget(Paragraph::new(header), layout[0]);

    let stats = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[1]);

    let card = |title: &'static str, caption: &'static str| {
        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  -",
                Style::default().fg(c.success).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(format!("  {caption}"), Style::default().fg(c.muted))),
        ])
        .block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(c.border)),
        )
        .scroll((app.content_scroll, 0))
    };

    frame.render_widget(card("Users", "registered accounts"), stats[0]);
    frame.render_widget(card("Credit Requests", "awaiting review"), stats[1]);
}
