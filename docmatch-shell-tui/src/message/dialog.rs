//! Session dialog messages

#[derive(Debug, Clone)]
pub enum DialogMessage {
    /// Escape: the dialog's own dismissal gesture
    Dismiss,

    /// Next form field
    NextField,

    /// Previous form field
    PrevField,

    /// Switch between login and sign-up
    ToggleMode,

    /// Enter on the focused field or button
    Confirm,

    /// Type a character
    Input(char),

    /// Delete a character (Backspace)
    Backspace,
}
