//! Event handler

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, DialogMessage, NavigationMessage};
use crate::model::{App, FocusPanel};

/// Poll for an event
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate an event into a message
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Resize needs nothing but a redraw
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Only Press; Release and Repeat would double keys on Windows terminals
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // An open dialog captures every key
    if app.shell.dialog().is_open() {
        return handle_dialog_keys(key);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    if DefaultKeymap::TOGGLE_THEME.matches(&key) {
        return AppMessage::ToggleTheme;
    }

    if DefaultKeymap::OPEN_AUTH.matches(&key) {
        return AppMessage::OpenAuth;
    }

    if DefaultKeymap::FOCUS_NEXT.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // ←/→ only move focus when it would actually change
    if DefaultKeymap::FOCUS_LEFT.matches(&key) && app.focus == FocusPanel::Content {
        return AppMessage::ToggleFocus;
    }
    if DefaultKeymap::FOCUS_RIGHT.matches(&key) && app.focus == FocusPanel::Navigation {
        return AppMessage::ToggleFocus;
    }

    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key)
    }
}

fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

fn handle_content_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::ScrollDown),
        KeyCode::Home => AppMessage::Content(ContentMessage::ScrollTop),
        _ => AppMessage::Noop,
    }
}

fn handle_dialog_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::DIALOG_DISMISS.matches(&key) || DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Dialog(DialogMessage::Dismiss);
    }

    if DefaultKeymap::DIALOG_TOGGLE_MODE.matches(&key)
        || DefaultKeymap::DIALOG_TOGGLE_MODE_ALT.matches(&key)
    {
        return AppMessage::Dialog(DialogMessage::ToggleMode);
    }

    let msg = match key.code {
        KeyCode::Tab | KeyCode::Down => DialogMessage::NextField,
        KeyCode::BackTab | KeyCode::Up => DialogMessage::PrevField,
        KeyCode::Enter => DialogMessage::Confirm,
        KeyCode::Backspace => DialogMessage::Backspace,
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            DialogMessage::Input(c)
        }
        _ => return AppMessage::Noop,
    };

    AppMessage::Dialog(msg)
}

#[cfg(test)]
mod tests {
    use docmatch_shell_core::{SharedTheme, ThemePreference};

    use super::*;

    fn app() -> App {
        App::with_theme(
            SharedTheme::new(ThemePreference::Dark),
            chrono::Duration::seconds(3),
        )
        .expect("app builds")
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn top_bar_shortcuts() {
        let app = app();
        assert!(matches!(handle_event(press(KeyCode::Char('t')), &app), AppMessage::ToggleTheme));
        assert!(matches!(handle_event(press(KeyCode::Char('l')), &app), AppMessage::OpenAuth));
        assert!(matches!(handle_event(press(KeyCode::Char('q')), &app), AppMessage::Quit));
        assert!(matches!(handle_event(press(KeyCode::Esc), &app), AppMessage::GoBack));
    }

    #[test]
    fn arrows_follow_focus() {
        let mut app = app();
        assert!(matches!(
            handle_event(press(KeyCode::Down), &app),
            AppMessage::Navigation(NavigationMessage::SelectNext)
        ));
        assert!(matches!(handle_event(press(KeyCode::Left), &app), AppMessage::Noop));

        app.focus = FocusPanel::Content;
        assert!(matches!(
            handle_event(press(KeyCode::Down), &app),
            AppMessage::Content(ContentMessage::ScrollDown)
        ));
        assert!(matches!(handle_event(press(KeyCode::Left), &app), AppMessage::ToggleFocus));
    }

    #[test]
    fn open_dialog_captures_keys() {
        let mut app = app();
        app.shell.open_dialog();

        // Letters that are shortcuts elsewhere become input
        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Dialog(DialogMessage::Input('q'))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('t')), &app),
            AppMessage::Dialog(DialogMessage::Input('t'))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Dialog(DialogMessage::Dismiss)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::F(2)), &app),
            AppMessage::Dialog(DialogMessage::ToggleMode)
        ));
    }

    #[test]
    fn release_events_are_ignored() {
        let app = app();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(matches!(handle_event(Event::Key(key), &app), AppMessage::Noop));
    }
}
