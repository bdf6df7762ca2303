//! Shell composer
//!
//! Puts the navigation model, the router, the theme controller, the notifier
//! and the session dialog together, and turns their state into a
//! [`ShellFrame`] on every render.

use std::sync::Arc;

use tokio::sync::watch;

use super::route_matcher;
use super::session_dialog::{DialogVisibility, SessionDialog};
use crate::error::{ShellError, ShellResult};
use crate::traits::{AuthForm, Notifier, Router, ThemeController};
use crate::types::{CurrentLocation, IconId, Locator, NavigationEntry, NavigationModel, ThemePreference};

/// Application name shown in the side panel header
pub const BRAND: &str = "DocMatch";
/// Side panel group heading
pub const NAVIGATION_GROUP: &str = "Navigation";
/// Label of the authentication entry point
pub const AUTH_ENTRY_LABEL: &str = "Login / Sign Up";
/// Accessible name of the theme toggle
pub const THEME_TOGGLE_LABEL: &str = "Toggle theme";

/// One rendered navigation item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidePanelItem<'a> {
    pub label: &'a str,
    pub icon: IconId,
    pub target: &'a Locator,
    /// Highlighted because its target is the current location
    pub active: bool,
}

/// Rendered side panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidePanel<'a> {
    pub brand: &'static str,
    pub brand_icon: IconId,
    pub group_label: &'static str,
    pub items: Vec<SidePanelItem<'a>>,
}

impl SidePanel<'_> {
    /// Index of the highlighted item
    pub fn active_index(&self) -> Option<usize> {
        self.items.iter().position(|item| item.active)
    }
}

/// Theme toggle control, always derived from the controller's current value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeToggleView {
    pub mode: ThemePreference,
    pub icon: IconId,
    /// Pressed while the light theme is active
    pub pressed: bool,
    pub aria_label: &'static str,
}

impl ThemeToggleView {
    fn for_mode(mode: ThemePreference) -> Self {
        Self {
            mode,
            icon: mode.toggle_icon(),
            pressed: mode == ThemePreference::Light,
            aria_label: THEME_TOGGLE_LABEL,
        }
    }
}

/// Authentication entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthEntryView {
    pub icon: IconId,
    pub label: &'static str,
}

/// Rendered top bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopBar {
    /// `None` when no theme controller is available; the control is inert
    pub theme_toggle: Option<ThemeToggleView>,
    pub auth_entry: AuthEntryView,
}

/// Where the routed page goes. The shell only knows the location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSlot {
    pub location: CurrentLocation,
}

/// Everything a front end needs to draw one frame
pub struct ShellFrame<'a, F> {
    pub side_panel: SidePanel<'a>,
    pub top_bar: TopBar,
    pub content: ContentSlot,
    /// The mounted form, present only while the dialog is open
    pub dialog: Option<&'a F>,
}

/// Navigation-and-session shell
pub struct Shell<F: AuthForm> {
    navigation: NavigationModel,
    router: Arc<dyn Router>,
    theme: Option<Arc<dyn ThemeController>>,
    notifier: Option<Arc<dyn Notifier>>,
    dialog: SessionDialog<F>,
}

impl<F: AuthForm> Shell<F> {
    /// Build the frame for the current state. Never mutates, never notifies.
    pub fn render(&self) -> ShellFrame<'_, F> {
        let location = self.router.current();
        let active = route_matcher::active_index(self.navigation.entries(), &location);

        let items = self
            .navigation
            .iter()
            .enumerate()
            .map(|(i, entry)| SidePanelItem {
                label: &entry.label,
                icon: entry.icon,
                target: &entry.target,
                active: active == Some(i),
            })
            .collect();

        ShellFrame {
            side_panel: SidePanel {
                brand: BRAND,
                brand_icon: IconId::BarChart,
                group_label: NAVIGATION_GROUP,
                items,
            },
            top_bar: TopBar {
                theme_toggle: self
                    .theme
                    .as_ref()
                    .map(|theme| ThemeToggleView::for_mode(theme.current())),
                auth_entry: AuthEntryView {
                    icon: IconId::LogIn,
                    label: AUTH_ENTRY_LABEL,
                },
            },
            content: ContentSlot { location },
            dialog: self.dialog.form(),
        }
    }

    /// The entry matching the router's current location
    pub fn active_entry(&self) -> Option<&NavigationEntry> {
        route_matcher::match_active(self.navigation.entries(), &self.router.current())
    }

    pub fn navigation(&self) -> &NavigationModel {
        &self.navigation
    }

    pub fn location(&self) -> CurrentLocation {
        self.router.current()
    }

    /// Current theme, `None` when no controller is wired in
    pub fn theme(&self) -> Option<ThemePreference> {
        self.theme.as_ref().map(|theme| theme.current())
    }

    /// Subscription to theme changes, `None` when no controller is wired in
    pub fn subscribe_theme(&self) -> Option<watch::Receiver<ThemePreference>> {
        self.theme.as_ref().map(|theme| theme.subscribe())
    }

    /// Theme toggle interaction.
    ///
    /// On success emits exactly one confirmation naming the new mode and
    /// returns it. Inert (no state change, no message) when the controller is
    /// missing or refuses the change.
    pub fn toggle_theme(&self) -> Option<ThemePreference> {
        let Some(theme) = &self.theme else {
            log::debug!("theme toggle ignored: no theme controller");
            return None;
        };

        match theme.toggle() {
            Ok(next) => {
                self.notify(&format!("Switched to {next} mode"));
                Some(next)
            }
            Err(e) => {
                e.log("Theme toggle ignored");
                None
            }
        }
    }

    /// Navigate to the entry at `index`. Returns `false` for an unknown index.
    pub fn activate(&self, index: usize) -> bool {
        match self.navigation.get(index) {
            Some(entry) => {
                log::debug!("activate `{}` -> {}", entry.label, entry.target);
                self.router.navigate(&entry.target);
                true
            }
            None => false,
        }
    }

    /// Navigate to the entry with `label`. Returns `false` for an unknown label.
    pub fn activate_label(&self, label: &str) -> bool {
        self.navigation
            .position(label)
            .is_some_and(|index| self.activate(index))
    }

    pub fn open_dialog(&mut self) {
        self.dialog.open();
    }

    pub fn close_dialog(&mut self) {
        self.dialog.close();
    }

    /// Visibility change reported by the dialog itself
    pub fn set_dialog_visibility(&mut self, open: bool) {
        self.dialog.set_visibility(open);
    }

    pub fn dialog_visibility(&self) -> DialogVisibility {
        self.dialog.visibility()
    }

    pub fn dialog(&self) -> &SessionDialog<F> {
        &self.dialog
    }

    /// Deliver an interaction to the mounted form, then apply any close it requested.
    ///
    /// Returns `None` when the dialog is closed.
    pub fn with_form<R>(&mut self, f: impl FnOnce(&mut F) -> R) -> Option<R> {
        let result = self.dialog.form_mut().map(f);
        self.dialog.settle();
        result
    }

    fn notify(&self, message: &str) {
        match &self.notifier {
            Some(notifier) => notifier.notify(message),
            None => log::debug!("no notifier, dropped message: {message}"),
        }
    }
}

/// Builder for constructing a [`Shell`] with its collaborators.
///
/// # Required
/// - `router`
///
/// # Optional
/// - `navigation` — defaults to `NavigationModel::docmatch()`
/// - `theme` — without it the theme toggle is inert
/// - `notifier` — without it confirmations are dropped
#[derive(Default)]
pub struct ShellBuilder {
    navigation: Option<NavigationModel>,
    router: Option<Arc<dyn Router>>,
    theme: Option<Arc<dyn ThemeController>>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl ShellBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn navigation(mut self, navigation: NavigationModel) -> Self {
        self.navigation = Some(navigation);
        self
    }

    #[must_use]
    pub fn router(mut self, router: Arc<dyn Router>) -> Self {
        self.router = Some(router);
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: Arc<dyn ThemeController>) -> Self {
        self.theme = Some(theme);
        self
    }

    #[must_use]
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Build the shell.
    ///
    /// # Errors
    /// Returns `ShellError::Validation` if the router is missing.
    pub fn build<F: AuthForm>(self) -> ShellResult<Shell<F>> {
        let router = self
            .router
            .ok_or_else(|| ShellError::Validation("router is required".to_string()))?;

        Ok(Shell {
            navigation: self.navigation.unwrap_or_default(),
            router,
            theme: self.theme,
            notifier: self.notifier,
            dialog: SessionDialog::new(),
        })
    }
}
