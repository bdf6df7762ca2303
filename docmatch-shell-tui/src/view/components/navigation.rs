//! Left side panel

use docmatch_shell_core::services::SidePanel;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::model::App;
use crate::view::icons::glyph;
use crate::view::theme::{Styles, ThemeColors};

/// Draw the side panel.
///
/// The filled row is the route-derived highlight; the `▶` marker is the
/// keyboard cursor, shown while the panel has focus.
pub fn render(app: &App, panel: &SidePanel, c: &ThemeColors, frame: &mut Frame, area: Rect) {
    let is_focused = app.focus.is_navigation();

    let block = Block::default()
        .title(format!(" {} {} ", glyph(panel.brand_icon), panel.brand))
        .title_style(Styles::title(c))
        .borders(Borders::ALL)
        .border_style(Styles::border(c, is_focused));

    let mut items = vec![ListItem::new(Line::from(Span::styled(
        format!(" {}", panel.group_label),
        Style::default().fg(c.muted).add_modifier(Modifier::ITALIC),
    )))];

    items.extend(panel.items.iter().enumerate().map(|(i, item)| {
        let prefix = if is_focused && i == app.cursor { "▶ " } else { "  " };
        let content = format!("{prefix}{} {}", glyph(item.icon), item.label);

        let style = if item.active {
            Styles::selected(c)
        } else {
            Style::default().fg(c.fg)
        };

        ListItem::new(Line::from(Span::styled(content, style)))
    }));

    let list = List::new(items).block(block);

    // Offset by one for the group label row
    let mut state = ListState::default();
    state.select(Some(app.cursor + 1));

    frame.render_stateful_widget(list, area, &mut state);
}
