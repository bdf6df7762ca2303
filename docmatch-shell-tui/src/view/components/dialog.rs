//! Session dialog: the mounted login / sign-up form, centered on top

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::{AuthMode, FormField, LoginForm};
use crate::util::tail_fit;
use crate::view::theme::ThemeColors;

const WIDTH: u16 = 50;
const HEIGHT: u16 = 14;

/// Centered rectangle inside `area`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

pub fn render(form: &LoginForm, c: &ThemeColors, frame: &mut Frame) {
    let area = centered_rect(WIDTH, HEIGHT, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", form.mode.title()))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.accent))
        .style(Style::default().bg(c.bg).fg(c.fg));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Room for the two-space indent and the caret
    let field_width = usize::from(inner.width.saturating_sub(4));

    let mut lines = Vec::new();

    lines.extend(field_lines(
        "Email",
        &form.email,
        "you@example.com",
        form.focus == FormField::Email,
        field_width,
        c,
    ));
    lines.extend(field_lines(
        "Password",
        &form.masked_password(),
        "••••••••",
        form.focus == FormField::Password,
        field_width,
        c,
    ));

    match &form.error {
        Some(err) => lines.push(Line::styled(
            format!("  ⚠ {err}"),
            Style::default().fg(c.error),
        )),
        None => lines.push(Line::from("")),
    }

    let submit_label = match form.mode {
        AuthMode::SignIn => "Sign In",
        AuthMode::SignUp => "Create Account",
    };
    lines.push(Line::from(vec![
        Span::raw("  "),
        button(submit_label, form.focus == FormField::Submit, c),
        Span::raw("  "),
        button("Cancel", form.focus == FormField::Cancel, c),
    ]));

    lines.push(Line::from(""));
    let switch_hint = match form.mode {
        AuthMode::SignIn => " No account? Sign up",
        AuthMode::SignUp => " Have an account? Log in",
    };
    lines.push(Line::from(vec![
        Span::styled("  F2", Style::default().fg(c.warning)),
        Span::styled(switch_hint, Style::default().fg(c.muted)),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn field_lines(
    label: &'static str,
    value: &str,
    placeholder: &'static str,
    focused: bool,
    width: usize,
    c: &ThemeColors,
) -> [Line<'static>; 3] {
    let value_line = if value.is_empty() && !focused {
        Line::styled(format!("  {placeholder}"), Style::default().fg(c.muted))
    } else if focused {
        Line::styled(
            format!("  {}▎", tail_fit(value, width)),
            Style::default().fg(c.accent),
        )
    } else {
        Line::styled(format!("  {}", tail_fit(value, width)), Style::default().fg(c.fg))
    };

    [
        Line::from(Span::styled(label, Style::default().fg(c.muted))),
        value_line,
        Line::from(""),
    ]
}

fn button(label: &'static str, focused: bool, c: &ThemeColors) -> Span<'static> {
    let text = format!("[ {label} ]");
    if focused {
        Span::styled(
            text,
            Style::default()
                .fg(c.selected_fg)
                .bg(c.selected_bg)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(text, Style::default().fg(c.fg))
    }
}
