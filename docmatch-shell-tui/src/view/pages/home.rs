//! Landing page

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::icons::glyph;
use crate::view::theme::ThemeColors;

pub fn render(app: &App, c: &ThemeColors, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // welcome
            Constraint::Min(1),    // sections
        ])
        .split(area);

    let welcome = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Welcome to DocMatch",
            Style::default().fg(c.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Upload your documents and match them against each other",
            Style::default().fg(c.muted),
        )),
        Line::from(""),
    ];
    frame.render_widget(Paragraph::new(welcome), layout[0]);

    // Every section except the landing page itself
    let sections: Vec<Line> = app
        .shell
        .navigation()
        .iter()
        .skip(1)
        .map(|entry| {
            Line::from(vec![
                Span::styled(
                    format!("  {} {:<20}", glyph(entry.icon), entry.label),
                    Style::default().fg(c.fg),
                ),
                Span::styled(entry.target.to_string(), Style::default().fg(c.muted)),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" Sections ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));

    frame.render_widget(
        Paragraph::new(sections)
            .block(block)
            .scroll((app.content_scroll, 0)),
        layout[1],
    );
}
