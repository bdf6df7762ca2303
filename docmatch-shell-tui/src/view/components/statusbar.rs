//! Bottom status bar: key hints and the latest toast

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FocusPanel};
use crate::view::theme::{Styles, ThemeColors};

pub fn render(app: &App, c: &ThemeColors, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(36)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Styles::bar(c)),
        columns[0],
    );

    let toast = app.status_message().unwrap_or_default();
    frame.render_widget(
        Paragraph::new(Span::styled(format!("{toast} "), Style::default().fg(Color::Yellow)))
            .alignment(Alignment::Right)
            .style(Styles::bar(c)),
        columns[1],
    );
}

/// Key hints for the current state
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.shell.dialog().is_open() {
        return vec![
            ("Tab", "Next"),
            ("Enter", "Confirm"),
            ("F2", "Login/Sign Up"),
            ("Esc", "Close"),
        ];
    }

    let mut hints = vec![("Tab", "Switch Panels")];

    match app.focus {
        FocusPanel::Navigation => {
            hints.push(("↑↓", "Select"));
            hints.push(("Enter", "Open"));
        }
        FocusPanel::Content => {
            hints.push(("↑↓", "Scroll"));
        }
    }

    hints.push(("t", "Theme"));
    hints.push(("l", "Login"));
    hints.push(("Esc", "Back"));
    hints.push(("q", "Quit"));

    hints
}
