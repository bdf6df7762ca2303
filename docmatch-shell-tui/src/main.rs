//! DocMatch Shell TUI
//!
//! ## Architecture
//!
//! Elm Architecture (TEA):
//! - **Model**: application state (`model/`)
//! - **Message**: messages (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: rendering (`view/`)
//! - **Event**: input handling (`event/`)
//! - **Util**: terminal plumbing (`util/`)
//!
//! Navigation, theme and session-dialog state live in `docmatch-shell-core`;
//! this binary draws its frames and feeds it keyboard input.
//!
//! main.rs
//!
//!     ShellConfig::load()     // config.json, defaults when absent or broken
//!     init_terminal()         // raw mode + alternate screen
//!     App::new()              // shell, router, shared theme, toast queue
//!     app::run()              // main loop in app.rs
//!     restore_terminal()      // always, even when run() failed

mod app;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;
use docmatch_shell_core::ShellConfig;

use util::{init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. Configuration; a broken file must not keep the shell from starting
    let config = ShellConfig::load().unwrap_or_else(|e| {
        e.log("Falling back to default configuration");
        ShellConfig::default()
    });

    // 2. Application state, before touching the terminal
    let mut app = model::App::new(&config)?;

    // 3. Terminal
    let mut terminal = init_terminal()?;

    // 4. Main loop
    let result = app::run(&mut terminal, &mut app);

    // 5. Restore the terminal whether or not the loop failed
    restore_terminal(&mut terminal)?;

    result
}
