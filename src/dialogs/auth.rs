//! Mock sign-in dialog with email and password fields.
//!
//! The dialog only collects input. It hands the typed values to the
//! controller through [`DialogOutcome::SignIn`] / [`DialogOutcome::SignUp`]
//! and shows whatever status message the controller passes back in.

use super::{DialogContext, DialogOutcome, DialogView};
use crate::keymap::Action;
use crate::styles::theme;
use crate::utils::{InputKind, TextInput};
use crate::widgets::{ButtonRow, DialogFrame, TextInputWidget, TextInputWidgetExt};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

const BUTTONS: [&str; 3] = ["Cancel", "Sign in", "Sign up"];

/// Focusable parts of the auth dialog, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthFocus {
    #[default]
    Email,
    Password,
    Cancel,
    SignIn,
    SignUp,
}

impl AuthFocus {
    const ORDER: [AuthFocus; 5] = [
        AuthFocus::Email,
        AuthFocus::Password,
        AuthFocus::Cancel,
        AuthFocus::SignIn,
        AuthFocus::SignUp,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn is_text_field(self) -> bool {
        matches!(self, AuthFocus::Email | AuthFocus::Password)
    }

    /// Index into the button row, if this is a button
    fn button_index(self) -> Option<usize> {
        match self {
            AuthFocus::Cancel => Some(0),
            AuthFocus::SignIn => Some(1),
            AuthFocus::SignUp => Some(2),
            _ => None,
        }
    }
}

/// Form state of the auth dialog. Dropped when the dialog closes.
#[derive(Debug, Clone)]
pub struct AuthDialog {
    email: TextInput,
    password: TextInput,
    focus: AuthFocus,
}

impl AuthDialog {
    pub fn new() -> Self {
        Self {
            email: TextInput::of_kind(InputKind::Email),
            password: TextInput::of_kind(InputKind::Password),
            focus: AuthFocus::Email,
        }
    }

    pub fn email(&self) -> &str {
        self.email.text()
    }

    pub fn password(&self) -> &str {
        self.password.text()
    }

    pub fn focus(&self) -> AuthFocus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: AuthFocus) {
        self.focus = focus;
    }

    /// Replace both buffers, as if the user had typed them.
    pub fn fill(&mut self, email: &str, password: &str) {
        self.email.set_text(email);
        self.password.set_text(password);
    }

    fn sign_in(&self) -> DialogOutcome {
        DialogOutcome::SignIn {
            email: self.email.text().to_string(),
            password: self.password.text().to_string(),
        }
    }

    fn sign_up(&self) -> DialogOutcome {
        DialogOutcome::SignUp {
            email: self.email.text().to_string(),
            password: self.password.text().to_string(),
        }
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            AuthFocus::Email => Some(&mut self.email),
            AuthFocus::Password => Some(&mut self.password),
            _ => None,
        }
    }

    fn activate(&mut self) -> DialogOutcome {
        match self.focus {
            AuthFocus::Email => {
                self.focus = AuthFocus::Password;
                DialogOutcome::None
            }
            AuthFocus::Password | AuthFocus::SignIn => self.sign_in(),
            AuthFocus::Cancel => DialogOutcome::Dismiss,
            AuthFocus::SignUp => self.sign_up(),
        }
    }
}

impl Default for AuthDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogView for AuthDialog {
    fn render(&self, frame: &mut Frame, area: Rect, ctx: &DialogContext) {
        let dialog = DialogFrame::new(48, 14);
        let inner = dialog.inner(area);
        frame.render_widget(dialog, area);

        let [email_area, password_area, _, buttons_area, _, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(inner);

        frame.render_text_input_widget(
            TextInputWidget::new(&self.email)
                .label("Email")
                .focused(self.focus == AuthFocus::Email),
            email_area,
        );
        frame.render_text_input_widget(
            TextInputWidget::new(&self.password)
                .label("Password")
                .focused(self.focus == AuthFocus::Password),
            password_area,
        );
        frame.render_widget(
            ButtonRow::new(BUTTONS).focused(self.focus.button_index()),
            buttons_area,
        );
        frame.render_widget(
            Paragraph::new(ctx.status_message)
                .style(theme().error_style())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            status_area,
        );
    }

    fn handle_key(&mut self, key: KeyEvent, action: Option<Action>) -> DialogOutcome {
        // Text first: printable keys never reach the bindings below, Cancel included
        let printable = matches!(key.code, KeyCode::Char(_))
            && !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        if printable {
            if let Some(input) = self.focused_input() {
                input.handle_key(key.code, key.modifiers, action);
                return DialogOutcome::None;
            }
        }

        if action == Some(Action::Cancel) {
            return DialogOutcome::Dismiss;
        }

        match action {
            Some(Action::NextTab | Action::MoveDown) => {
                self.focus = self.focus.next();
                DialogOutcome::None
            }
            Some(Action::PrevTab | Action::MoveUp) => {
                self.focus = self.focus.prev();
                DialogOutcome::None
            }
            Some(Action::MoveRight) if !self.focus.is_text_field() => {
                self.focus = self.focus.next();
                DialogOutcome::None
            }
            Some(Action::MoveLeft) if !self.focus.is_text_field() => {
                self.focus = self.focus.prev();
                DialogOutcome::None
            }
            Some(Action::Confirm) => self.activate(),
            Some(action) => {
                if let Some(input) = self.focused_input() {
                    input.handle_action(action);
                }
                DialogOutcome::None
            }
            None => DialogOutcome::None,
        }
    }

    fn is_input_focused(&self) -> bool {
        self.focus.is_text_field()
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
