//! Main layout

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders},
    Frame,
};

use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::{colors, Styles, ThemeColors};

/// Draw one frame
pub fn render(app: &App, frame: &mut Frame) {
    let c = colors(app.theme());
    let shell_frame = app.shell.render();

    // Paint the whole screen first; widgets only override what they set
    frame.render_widget(
        Block::default().style(Style::default().bg(c.bg).fg(c.fg)),
        frame.area(),
    );

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title bar
            Constraint::Min(1),    // body
            Constraint::Length(1), // status bar
        ])
        .split(frame.area());

    components::topbar::render(&shell_frame.top_bar, &c, frame, main_layout[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(1)])
        .split(main_layout[1]);

    components::navigation::render(app, &shell_frame.side_panel, &c, frame, columns[0]);
    render_content(app, &c, frame, columns[1]);

    components::statusbar::render(app, &c, frame, main_layout[2]);

    if let Some(form) = shell_frame.dialog {
        components::dialog::render(form, &c, frame);
    }
}

/// Content slot: the page for the router's location
fn render_content(app: &App, c: &ThemeColors, frame: &mut Frame, area: Rect) {
    let page = app.current_page();

    let block = Block::default()
        .title(format!(" {} ", page.title()))
        .title_style(Styles::title(c))
        .borders(Borders::ALL)
        .border_style(Styles::border(c, app.focus.is_content()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match page {
        Page::Home => pages::home::render(app, c, frame, inner),
        Page::Upload | Page::Match | Page::Documents | Page::Credits => {
            pages::section::render(app, page, c, frame, inner);
        }
        Page::Admin => pages::admin::render(app, c, frame, inner),
        Page::NotFound => pages::not_found::render(app, c, frame, inner),
    }
}
