//! Session dialog update logic
//!
//! Every interaction is delivered through `Shell::with_form`, which applies a
//! close requested by the form before returning.

use crate::message::DialogMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: DialogMessage) {
    match msg {
        DialogMessage::Dismiss => app.shell.set_dialog_visibility(false),
        DialogMessage::NextField => {
            app.shell.with_form(|form| form.next_field());
        }
        DialogMessage::PrevField => {
            app.shell.with_form(|form| form.prev_field());
        }
        DialogMessage::ToggleMode => {
            app.shell.with_form(|form| form.toggle_mode());
        }
        DialogMessage::Confirm => {
            app.shell.with_form(|form| form.confirm());
        }
        DialogMessage::Input(ch) => {
            app.shell.with_form(|form| form.input(ch));
        }
        DialogMessage::Backspace => {
            app.shell.with_form(|form| form.backspace());
        }
    }
}
