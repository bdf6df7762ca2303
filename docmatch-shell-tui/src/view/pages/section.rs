//! Sections of the landing page (`/#upload`, `/#match`, ...)

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::model::{App, Page};
use crate::view::theme::ThemeColors;

fn description(page: Page) -> &'static [&'static str] {
    match page {
        Page::Upload => &[
            "Add documents to your library.",
            "Plain text files are scanned and stored for matching.",
        ],
        Page::Match => &[
            "Pick a document and find the closest ones in your library.",
            "Each match costs one credit.",
        ],
        Page::Documents => &["Everything you have uploaded, newest first."],
        Page::Credits => &[
            "Your remaining match credits.",
            "Credits are reset daily; request more from an administrator.",
        ],
        Page::Home | Page::Admin | Page::NotFound => &[],
    }
}

pub fn render(app: &App, page: Page, c: &ThemeColors, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", page.title()),
            Style::default().fg(c.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    lines.extend(
        description(page)
            .iter()
            .map(|text| Line::styled(format!("  {text}"), Style::default().fg(c.fg))),
    );

    lines.push(Line::from(""));
    lines.push(Line::styled(
        "  Sign in to use this section.",
        Style::default().fg(c.muted),
    ));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((app.content_scroll, 0)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_has_a_description() {
        for page in [Page::Upload, Page::Match, Page::Documents, Page::Credits] {
            assert!(!description(page).is_empty(), "{page:?}");
        }
    }
}
