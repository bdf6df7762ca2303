//! Main application state

use std::sync::Arc;

use docmatch_shell_core::adapters::{JsonPreferenceStore, ToastQueue};
use docmatch_shell_core::traits::MemoryRouter;
use docmatch_shell_core::{
    Shell, ShellBuilder, ShellConfig, ShellResult, SharedTheme, ThemePreference,
};
use tokio::sync::watch;

use super::{FocusPanel, LoginForm, Page};

/// Main application state
pub struct App {
    /// Whether the main loop should exit
    pub should_quit: bool,

    /// Current focus panel
    pub focus: FocusPanel,

    /// Keyboard selection in the side panel (independent of the route highlight)
    pub cursor: usize,

    /// Scroll offset of the routed page
    pub content_scroll: u16,

    /// The navigation-and-session shell
    pub shell: Shell<LoginForm>,

    /// Router, kept for history navigation
    pub router: Arc<MemoryRouter>,

    /// Theme subscription; `None` if the shell has no theme controller
    pub theme_rx: Option<watch::Receiver<ThemePreference>>,

    /// Confirmation toasts emitted by the shell
    pub toasts: Arc<ToastQueue>,

    /// How long a toast stays in the status bar
    pub toast_ttl: chrono::Duration,
}

impl App {
    /// Create the application from configuration
    pub fn new(config: &ShellConfig) -> ShellResult<Self> {
        let theme = if config.persist_theme {
            SharedTheme::initialize(
                Arc::new(JsonPreferenceStore::default_location()),
                config.default_theme,
            )
        } else {
            SharedTheme::new(config.default_theme)
        };
        Self::with_theme(theme, config.toast_ttl())
    }

    /// Create the application around an existing theme handle
    pub fn with_theme(theme: SharedTheme, toast_ttl: chrono::Duration) -> ShellResult<Self> {
        let router = Arc::new(MemoryRouter::default());
        let toasts = Arc::new(ToastQueue::new());

        let shell = ShellBuilder::new()
            .router(router.clone())
            .theme(Arc::new(theme))
            .notifier(toasts.clone())
            .build()?;
        let theme_rx = shell.subscribe_theme();

        let mut app = Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            cursor: 0,
            content_scroll: 0,
            shell,
            router,
            theme_rx,
            toasts,
            toast_ttl,
        };
        app.sync_cursor();
        Ok(app)
    }

    /// Theme as last published to our subscription
    pub fn theme(&self) -> ThemePreference {
        self.theme_rx
            .as_ref()
            .map(|rx| *rx.borrow())
            .unwrap_or_default()
    }

    /// Page for the router's current location
    pub fn current_page(&self) -> Page {
        Page::from_location(&self.shell.location())
    }

    /// Move the cursor onto the highlighted entry, if any
    pub fn sync_cursor(&mut self) {
        let location = self.shell.location();
        if let Some(index) =
            docmatch_shell_core::services::active_index(self.shell.navigation().entries(), &location)
        {
            self.cursor = index;
        }
    }

    /// Latest toast message still on screen
    pub fn status_message(&self) -> Option<String> {
        self.toasts.latest().map(|toast| toast.message)
    }
}
