//!
//! src/update/mod.rs
//! Update layer: the only place that changes the Model
//!
//!     src/update/mod.rs
//!         mod content;        // routed page messages
//!         mod dialog;         // session dialog messages
//!         mod navigation;     // side panel messages
//!
//!         pub fn update(app: &mut App, msg: AppMessage) {...}
//!
//!     Exhaustive `match` over AppMessage; sub-messages are delegated.
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! Theme toggle
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     AppMessage::ToggleTheme
//!         ↓
//!     app.shell.toggle_theme()        // flips the process-wide preference
//!         ↓                           // and pushes "Switched to … mode"
//!     ToastQueue                      // into the status bar
//!         ↓
//!     next render reads the new theme through app.theme_rx
//!
//! After update returns, the main loop (app.rs) renders again.
//!

mod content;
mod dialog;
mod navigation;

use chrono::Utc;

use crate::message::AppMessage;
use crate::model::App;

/// Apply a message to the application state
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            if !app.shell.dialog().is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::ToggleTheme => {
            app.shell.toggle_theme();
        }

        AppMessage::OpenAuth => {
            app.shell.open_dialog();
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Dialog(dialog_msg) => {
            dialog::update(app, dialog_msg);
        }

        AppMessage::GoBack => {
            if app.router.back() {
                app.sync_cursor();
                app.content_scroll = 0;
            }
        }

        AppMessage::Tick => {
            app.toasts.prune(Utc::now(), app.toast_ttl);
        }

        AppMessage::Noop => {}
    }
}

#[cfg(test)]
mod tests {
    use docmatch_shell_core::{DialogVisibility, SharedTheme, ThemePreference};

    use super::*;
    use crate::message::{DialogMessage, NavigationMessage};
    use crate::model::{FocusPanel, FormField};

    fn app() -> App {
        App::with_theme(
            SharedTheme::new(ThemePreference::Dark),
            chrono::Duration::seconds(3),
        )
        .expect("app builds")
    }

    fn active(app: &App) -> Option<usize> {
        app.shell.render().side_panel.active_index()
    }

    #[test]
    fn starts_on_home_with_cursor_on_highlight() {
        let app = app();
        assert_eq!(active(&app), Some(0));
        assert_eq!(app.cursor, 0);
        assert_eq!(app.focus, FocusPanel::Navigation);
    }

    #[test]
    fn moving_cursor_does_not_move_highlight() {
        let mut app = app();
        update(&mut app, AppMessage::Navigation(NavigationMessage::SelectNext));
        update(&mut app, AppMessage::Navigation(NavigationMessage::SelectNext));
        assert_eq!(app.cursor, 2);
        assert_eq!(active(&app), Some(0));

        update(&mut app, AppMessage::Navigation(NavigationMessage::Confirm));
        assert_eq!(active(&app), Some(2));
        assert_eq!(app.current_page().title(), "Match Documents");
    }

    #[test]
    fn cursor_is_clamped() {
        let mut app = app();
        update(&mut app, AppMessage::Navigation(NavigationMessage::SelectPrevious));
        assert_eq!(app.cursor, 0);
        update(&mut app, AppMessage::Navigation(NavigationMessage::SelectLast));
        assert_eq!(app.cursor, 5);
        update(&mut app, AppMessage::Navigation(NavigationMessage::SelectNext));
        assert_eq!(app.cursor, 5);
    }

    #[test]
    fn go_back_restores_previous_highlight_and_cursor() {
        let mut app = app();
        update(&mut app, AppMessage::Navigation(NavigationMessage::SelectLast));
        update(&mut app, AppMessage::Navigation(NavigationMessage::Confirm));
        assert_eq!(active(&app), Some(5));

        update(&mut app, AppMessage::GoBack);
        assert_eq!(active(&app), Some(0));
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn toggle_theme_updates_subscription_and_status() {
        let mut app = app();
        update(&mut app, AppMessage::ToggleTheme);
        assert_eq!(app.theme(), ThemePreference::Light);
        assert_eq!(app.status_message().as_deref(), Some("Switched to light mode"));

        update(&mut app, AppMessage::Tick);
        assert_eq!(app.status_message().as_deref(), Some("Switched to light mode"));
    }

    #[test]
    fn expired_toast_leaves_status_bar() {
        let mut app = App::with_theme(
            SharedTheme::new(ThemePreference::Dark),
            chrono::Duration::zero(),
        )
        .expect("app builds");
        update(&mut app, AppMessage::ToggleTheme);
        update(&mut app, AppMessage::Tick);
        assert_eq!(app.status_message(), None);
    }

    #[test]
    fn auth_dialog_round_trip() {
        let mut app = app();
        update(&mut app, AppMessage::OpenAuth);
        assert_eq!(app.shell.dialog_visibility(), DialogVisibility::Open);

        for ch in "dee@example.com".chars() {
            update(&mut app, AppMessage::Dialog(DialogMessage::Input(ch)));
        }
        assert_eq!(
            app.shell.dialog().form().map(|f| f.email.as_str()),
            Some("dee@example.com")
        );

        // Tab to Cancel and press it: the form closes itself.
        for _ in 0..3 {
            update(&mut app, AppMessage::Dialog(DialogMessage::NextField));
        }
        assert_eq!(app.shell.dialog().form().map(|f| f.focus), Some(FormField::Cancel));
        update(&mut app, AppMessage::Dialog(DialogMessage::Confirm));
        assert_eq!(app.shell.dialog_visibility(), DialogVisibility::Closed);

        update(&mut app, AppMessage::OpenAuth);
        assert_eq!(app.shell.dialog().form().map(|f| f.email.as_str()), Some(""));
    }

    #[test]
    fn escape_dismisses_dialog() {
        let mut app = app();
        update(&mut app, AppMessage::OpenAuth);
        update(&mut app, AppMessage::Dialog(DialogMessage::Dismiss));
        assert!(!app.shell.dialog().is_open());
    }

    #[test]
    fn focus_is_locked_while_dialog_open() {
        let mut app = app();
        update(&mut app, AppMessage::OpenAuth);
        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.focus, FocusPanel::Navigation);

        update(&mut app, AppMessage::Dialog(DialogMessage::Dismiss));
        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.focus, FocusPanel::Content);
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = app();
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }
}
