//! Login / sign-up form mounted inside the session dialog

use docmatch_shell_core::{AuthForm, CloseHandle};

/// Minimum password length accepted on sign-up
const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn toggle(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Login",
            AuthMode::SignUp => "Sign Up",
        }
    }
}

/// Focusable parts of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Email,
    Password,
    Submit,
    Cancel,
}

impl FormField {
    const ORDER: [FormField; 4] = [
        FormField::Email,
        FormField::Password,
        FormField::Submit,
        FormField::Cancel,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Authentication form.
///
/// Only collects and checks input; signing in is not handled here. A valid
/// submit and the cancel button both ask the dialog to close.
#[derive(Debug)]
pub struct LoginForm {
    close: CloseHandle,
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub focus: FormField,
    pub error: Option<String>,
}

impl AuthForm for LoginForm {
    fn mount(close: CloseHandle) -> Self {
        Self {
            close,
            mode: AuthMode::default(),
            email: String::new(),
            password: String::new(),
            focus: FormField::default(),
            error: None,
        }
    }
}

impl LoginForm {
    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggle();
        self.error = None;
    }

    pub fn input(&mut self, ch: char) {
        match self.focus {
            FormField::Email => self.email.push(ch),
            FormField::Password => self.password.push(ch),
            FormField::Submit | FormField::Cancel => return,
        }
        self.error = None;
    }

    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Email => {
                self.email.pop();
            }
            FormField::Password => {
                self.password.pop();
            }
            FormField::Submit | FormField::Cancel => {}
        }
    }

    /// Enter: advance through text fields, press the focused button
    pub fn confirm(&mut self) {
        match self.focus {
            FormField::Email | FormField::Password => self.next_field(),
            FormField::Submit => self.submit(),
            FormField::Cancel => self.cancel(),
        }
    }

    pub fn submit(&mut self) {
        match self.validate() {
            Ok(()) => {
                log::info!("{} submitted for {}", self.mode.title(), self.email.trim());
                self.close.request();
            }
            Err(msg) => self.error = Some(msg),
        }
    }

    pub fn cancel(&self) {
        self.close.request();
    }

    /// Password rendered as bullets
    pub fn masked_password(&self) -> String {
        "•".repeat(self.password.chars().count())
    }

    fn validate(&self) -> Result<(), String> {
        let email = self.email.trim();
        let well_formed = email
            .split_once('@')
            .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.'));
        if !well_formed {
            return Err("Enter a valid email address".to_string());
        }

        match self.mode {
            AuthMode::SignIn if self.password.is_empty() => {
                Err("Enter your password".to_string())
            }
            AuthMode::SignUp if self.password.chars().count() < MIN_PASSWORD_LEN => Err(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use docmatch_shell_core::SessionDialog;

    use super::*;

    fn open_dialog() -> SessionDialog<LoginForm> {
        let mut dialog = SessionDialog::new();
        dialog.open();
        dialog
    }

    fn form(dialog: &mut SessionDialog<LoginForm>) -> &mut LoginForm {
        dialog.form_mut().expect("dialog is open")
    }

    fn type_str(form: &mut LoginForm, text: &str) {
        text.chars().for_each(|ch| form.input(ch));
    }

    #[test]
    fn tab_order_wraps() {
        assert_eq!(FormField::Cancel.next(), FormField::Email);
        assert_eq!(FormField::Email.prev(), FormField::Cancel);
        assert_eq!(FormField::Email.next(), FormField::Password);
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut dialog = open_dialog();
        let f = form(&mut dialog);
        type_str(f, "ann@example.com");
        f.next_field();
        type_str(f, "hunter22");
        f.backspace();
        assert_eq!(f.email, "ann@example.com");
        assert_eq!(f.password, "hunter2");
        assert_eq!(f.masked_password().chars().count(), 7);
    }

    #[test]
    fn invalid_submit_keeps_dialog_open() {
        let mut dialog = open_dialog();
        let f = form(&mut dialog);
        type_str(f, "not-an-email");
        f.submit();
        assert_eq!(f.error.as_deref(), Some("Enter a valid email address"));
        assert!(!dialog.settle());
        assert!(dialog.is_open());
    }

    #[test]
    fn sign_up_requires_longer_password() {
        let mut dialog = open_dialog();
        let f = form(&mut dialog);
        f.toggle_mode();
        type_str(f, "ann@example.com");
        f.next_field();
        type_str(f, "short");
        f.submit();
        assert!(f.error.as_deref().is_some_and(|e| e.contains("at least 8")));
    }

    #[test]
    fn valid_submit_closes_dialog() {
        let mut dialog = open_dialog();
        let f = form(&mut dialog);
        type_str(f, "ann@example.com");
        f.next_field();
        type_str(f, "secret");
        f.submit();
        assert!(dialog.settle());
        assert!(dialog.form().is_none());
    }

    #[test]
    fn cancel_closes_dialog() {
        let mut dialog = open_dialog();
        let f = form(&mut dialog);
        f.focus = FormField::Cancel;
        f.confirm();
        assert!(dialog.settle());
    }
}
