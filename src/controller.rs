//! Screen controller: the single screen of the app.
//!
//! Owns the four visibility flags, the status message and the dialog views,
//! renders the trigger row and whichever dialogs are visible, and turns
//! dialog outcomes into flag changes.

use crate::auth::{Authenticator, StaticCredentials};
use crate::components::{Footer, Header};
use crate::dialogs::{
    AlertDialog, AuthDialog, DialogContext, DialogKind, DialogOutcome, DialogView, ImageDialog,
    MinimalDialog,
};
use crate::keymap::{Action, Keymap};
use crate::widgets::ButtonRow;
use crossterm::event::KeyEvent;
use ratatui::prelude::*;
use tracing::debug;

/// Status shown after sign-up, which is not implemented
pub const SIGN_UP_NOT_IMPLEMENTED: &str = "Sign up not implemented";

/// Four independent visibility flags, one per dialog.
///
/// Nothing stops more than one flag from being true at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogVisibility {
    pub alert: bool,
    pub minimal: bool,
    pub image: bool,
    pub auth: bool,
}

impl DialogVisibility {
    pub fn get(&self, kind: DialogKind) -> bool {
        match kind {
            DialogKind::Alert => self.alert,
            DialogKind::Minimal => self.minimal,
            DialogKind::Image => self.image,
            DialogKind::Auth => self.auth,
        }
    }

    fn flag_mut(&mut self, kind: DialogKind) -> &mut bool {
        match kind {
            DialogKind::Alert => &mut self.alert,
            DialogKind::Minimal => &mut self.minimal,
            DialogKind::Image => &mut self.image,
            DialogKind::Auth => &mut self.auth,
        }
    }

    pub fn any(&self) -> bool {
        self.alert || self.minimal || self.image || self.auth
    }
}

/// What the app should do after the controller handled a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerAction {
    None,
    Quit,
    ShowHelp,
}

pub struct ScreenController {
    visibility: DialogVisibility,
    status_message: String,
    selected_trigger: usize,
    alert: AlertDialog,
    minimal: MinimalDialog,
    image: ImageDialog,
    /// Exists exactly while the auth dialog is visible
    auth_form: Option<AuthDialog>,
    authenticator: Box<dyn Authenticator>,
}

impl ScreenController {
    /// Controller with the demo dialogs and the hard-coded demo account
    pub fn new() -> Self {
        Self::with_authenticator(Box::new(StaticCredentials::demo()))
    }

    pub fn with_authenticator(authenticator: Box<dyn Authenticator>) -> Self {
        Self {
            visibility: DialogVisibility::default(),
            status_message: String::new(),
            selected_trigger: 0,
            alert: AlertDialog::default(),
            minimal: MinimalDialog::default(),
            image: ImageDialog::default(),
            auth_form: None,
            authenticator,
        }
    }

    pub fn visibility(&self) -> DialogVisibility {
        self.visibility
    }

    pub fn is_visible(&self, kind: DialogKind) -> bool {
        self.visibility.get(kind)
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// The auth dialog's form, while it is open
    pub fn auth_form(&self) -> Option<&AuthDialog> {
        self.auth_form.as_ref()
    }

    pub fn auth_form_mut(&mut self) -> Option<&mut AuthDialog> {
        self.auth_form.as_mut()
    }

    pub fn alert(&self) -> &AlertDialog {
        &self.alert
    }

    pub fn image(&self) -> &ImageDialog {
        &self.image
    }

    pub fn minimal(&self) -> &MinimalDialog {
        &self.minimal
    }

    /// Index into [`DialogKind::TRIGGER_ORDER`] of the selected trigger
    pub fn selected_trigger(&self) -> usize {
        self.selected_trigger
    }

    /// The visible dialog drawn last, which receives key input
    pub fn topmost(&self) -> Option<DialogKind> {
        DialogKind::Z_ORDER
            .into_iter()
            .rev()
            .find(|kind| self.is_visible(*kind))
    }

    /// Whether the topmost dialog has a text field focused
    pub fn is_input_focused(&self) -> bool {
        match self.topmost() {
            Some(kind) => self.view(kind).is_some_and(|view| view.is_input_focused()),
            None => false,
        }
    }

    /// Show a dialog. Showing a visible dialog changes nothing.
    pub fn toggle_dialog(&mut self, kind: DialogKind) {
        if kind == DialogKind::Auth && self.auth_form.is_none() {
            self.auth_form = Some(AuthDialog::new());
        }
        let flag = self.visibility.flag_mut(kind);
        if !*flag {
            *flag = true;
            debug!(dialog = %kind, "dialog opened");
        }
    }

    /// Hide a dialog and discard its view state. Idempotent.
    pub fn close_dialog(&mut self, kind: DialogKind) {
        match kind {
            DialogKind::Alert => self.alert.reset(),
            DialogKind::Minimal => self.minimal.reset(),
            DialogKind::Image => self.image.reset(),
            DialogKind::Auth => self.auth_form = None,
        }
        let flag = self.visibility.flag_mut(kind);
        if *flag {
            *flag = false;
            debug!(dialog = %kind, "dialog closed");
        }
    }

    /// Check credentials. Success closes the auth dialog and keeps the
    /// status message; failure keeps the dialog open and reports why.
    pub fn submit_sign_in(&mut self, email: &str, password: &str) {
        match self.authenticator.verify(email, password) {
            Ok(()) => self.close_dialog(DialogKind::Auth),
            Err(err) => self.status_message = err.to_string(),
        }
    }

    /// Sign-up is a stub: it always reports that it is not implemented and
    /// closes the auth dialog.
    pub fn submit_sign_up(&mut self, _email: &str, _password: &str) {
        self.status_message = SIGN_UP_NOT_IMPLEMENTED.to_string();
        self.close_dialog(DialogKind::Auth);
    }

    fn view(&self, kind: DialogKind) -> Option<&dyn DialogView> {
        match kind {
            DialogKind::Alert => Some(&self.alert),
            DialogKind::Minimal => Some(&self.minimal),
            DialogKind::Image => Some(&self.image),
            DialogKind::Auth => self.auth_form.as_ref().map(|form| form as &dyn DialogView),
        }
    }

    fn view_mut(&mut self, kind: DialogKind) -> Option<&mut dyn DialogView> {
        match kind {
            DialogKind::Alert => Some(&mut self.alert),
            DialogKind::Minimal => Some(&mut self.minimal),
            DialogKind::Image => Some(&mut self.image),
            DialogKind::Auth => self
                .auth_form
                .as_mut()
                .map(|form| form as &mut dyn DialogView),
        }
    }

    /// Apply what a dialog asked for.
    fn apply_outcome(&mut self, kind: DialogKind, outcome: DialogOutcome) {
        match outcome {
            DialogOutcome::None => {}
            DialogOutcome::Dismiss | DialogOutcome::Confirm => self.close_dialog(kind),
            DialogOutcome::SignIn { email, password } => self.submit_sign_in(&email, &password),
            DialogOutcome::SignUp { email, password } => self.submit_sign_up(&email, &password),
        }
    }

    /// Route one key press: to the topmost dialog if one is visible,
    /// otherwise to the trigger row.
    pub fn handle_key(&mut self, key: KeyEvent, keymap: &Keymap) -> ControllerAction {
        let action = keymap.get_action(key.code, key.modifiers);

        if let Some(kind) = self.topmost() {
            let outcome = match self.view_mut(kind) {
                Some(view) => view.handle_key(key, action),
                None => DialogOutcome::None,
            };
            self.apply_outcome(kind, outcome);
            return ControllerAction::None;
        }

        let count = DialogKind::TRIGGER_ORDER.len();
        match action {
            Some(Action::MoveLeft | Action::PrevTab | Action::MoveUp) => {
                self.selected_trigger = (self.selected_trigger + count - 1) % count;
            }
            Some(Action::MoveRight | Action::NextTab | Action::MoveDown) => {
                self.selected_trigger = (self.selected_trigger + 1) % count;
            }
            Some(Action::Home) => self.selected_trigger = 0,
            Some(Action::End) => self.selected_trigger = count - 1,
            Some(Action::Confirm) => {
                self.toggle_dialog(DialogKind::TRIGGER_ORDER[self.selected_trigger]);
            }
            Some(Action::Quit) => return ControllerAction::Quit,
            Some(Action::Help) => return ControllerAction::ShowHelp,
            Some(other) => {
                if let Some(kind) = DialogKind::from_open_action(other) {
                    self.selected_trigger = DialogKind::TRIGGER_ORDER
                        .iter()
                        .position(|k| *k == kind)
                        .unwrap_or(self.selected_trigger);
                    self.toggle_dialog(kind);
                }
            }
            None => {}
        }
        ControllerAction::None
    }

    /// Draw the screen and every visible dialog, bottom first.
    pub fn render(&self, frame: &mut Frame, area: Rect, keymap: &Keymap) {
        let triggers = ButtonRow::new(DialogKind::TRIGGER_ORDER.map(|k| k.trigger_label()))
            .focused((!self.visibility.any()).then_some(self.selected_trigger))
            .alignment(Alignment::Left);
        let trigger_height = triggers.required_height(area.width.saturating_sub(2)).max(1);

        let [header_area, _, trigger_area, _, footer_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(trigger_height),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .areas(area);

        Header::render(
            frame,
            header_area,
            "Dialogs",
            "Four ways to present a dialog. Pick one below.",
        );
        frame.render_widget(triggers, trigger_area.inner(Margin::new(1, 0)));

        let hints = if self.visibility.any() {
            keymap.footer_dialog()
        } else {
            keymap.footer_main()
        };
        Footer::render(frame, footer_area, &hints);

        let ctx = DialogContext {
            status_message: &self.status_message,
        };
        for kind in DialogKind::Z_ORDER {
            if !self.is_visible(kind) {
                continue;
            }
            if let Some(view) = self.view(kind) {
                view.render(frame, area, &ctx);
            }
        }
    }
}

impl Default for ScreenController {
    fn default() -> Self {
        Self::new()
    }
}
