//! Title bar: brand, theme toggle, authentication entry

use docmatch_shell_core::services::{TopBar, BRAND};
use docmatch_shell_core::IconId;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::view::icons::glyph;
use crate::view::theme::{Styles, ThemeColors};

pub fn render(top_bar: &TopBar, c: &ThemeColors, frame: &mut Frame, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Min(1)])
        .split(area);

    let brand = Paragraph::new(Line::from(Span::styled(
        format!(" {} {BRAND}", glyph(IconId::BarChart)),
        Styles::bar(c).add_modifier(Modifier::BOLD),
    )))
    .style(Styles::bar(c));
    frame.render_widget(brand, halves[0]);

    let mut spans = Vec::new();

    // No controller: the toggle is not offered at all
    if let Some(toggle) = &top_bar.theme_toggle {
        let mut style = Styles::bar(c);
        if toggle.pressed {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(
            format!(" {} {} ", glyph(toggle.icon), toggle.aria_label),
            style,
        ));
        spans.push(Span::styled("[t]", Styles::hint_key()));
        spans.push(Span::raw("  "));
    }

    spans.push(Span::styled(
        format!(
            "{} {} ",
            glyph(top_bar.auth_entry.icon),
            top_bar.auth_entry.label
        ),
        Styles::bar(c),
    ));
    spans.push(Span::styled("[l] ", Styles::hint_key()));

    let actions = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Right)
        .style(Styles::bar(c));
    frame.render_widget(actions, halves[1]);
}
