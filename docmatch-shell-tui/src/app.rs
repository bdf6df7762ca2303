//!
//! app.rs
//! Main loop
//!
//!     loop {
//!         terminal.draw(|f| view::render(&app, f))     // draw
//!         if app.should_quit { break }
//!         match poll_event(100ms) {                     // wait up to 100 ms for input
//!             Some(event) => handle_event(event, &app)  // event → message
//!             None        => AppMessage::Tick            // idle: expire toasts
//!         }
//!         update::update(&mut app, msg)                  // message → state
//!     }
//!

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// Poll interval; also the granularity of toast expiry
const TICK: Duration = Duration::from_millis(100);

/// Run the main loop until the user quits
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        if app.should_quit {
            break;
        }

        let msg = match event::poll_event(TICK)? {
            Some(event) => event::handle_event(event, app),
            None => AppMessage::Tick,
        };

        update::update(app, msg);
    }

    Ok(())
}
