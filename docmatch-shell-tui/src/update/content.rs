//! Routed page update logic

use crate::message::ContentMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::ScrollUp => {
            app.content_scroll = app.content_scroll.saturating_sub(1);
        }
        ContentMessage::ScrollDown => {
            app.content_scroll = app.content_scroll.saturating_add(1);
        }
        ContentMessage::ScrollTop => {
            app.content_scroll = 0;
        }
    }
}
