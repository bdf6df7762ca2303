//! Side panel update logic

use crate::message::NavigationMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: NavigationMessage) {
    let len = app.shell.navigation().len();

    match msg {
        NavigationMessage::SelectPrevious => {
            app.cursor = app.cursor.saturating_sub(1);
        }

        NavigationMessage::SelectNext => {
            if app.cursor < len.saturating_sub(1) {
                app.cursor += 1;
            }
        }

        NavigationMessage::Confirm => {
            if app.shell.activate(app.cursor) {
                app.content_scroll = 0;
            }
        }

        NavigationMessage::SelectFirst => {
            app.cursor = 0;
        }

        NavigationMessage::SelectLast => {
            app.cursor = len.saturating_sub(1);
        }
    }
}
