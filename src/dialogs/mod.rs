//! The four dialog views.
//!
//! Each view owns only presentation state (button focus, and for the auth
//! dialog its two text buffers). Key handling returns a [`DialogOutcome`]
//! and the screen controller decides what the outcome does, so visibility
//! stays owned by the controller.
//!
//! ```text
//!  Hidden ──trigger──▶ Visible ──dismiss / confirm / cancel──▶ Hidden
//! ```

pub mod alert;
pub mod auth;
pub mod image;
pub mod minimal;

pub use alert::{AlertDialog, DialogIcon};
pub use auth::{AuthDialog, AuthFocus};
pub use image::ImageDialog;
pub use minimal::MinimalDialog;

use crate::keymap::Action;
use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Identifies one of the four dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogKind {
    Minimal,
    Alert,
    Image,
    Auth,
}

impl DialogKind {
    /// Trigger row order
    pub const TRIGGER_ORDER: [DialogKind; 4] = [
        DialogKind::Minimal,
        DialogKind::Alert,
        DialogKind::Image,
        DialogKind::Auth,
    ];

    /// Drawing order, bottom first. The last visible kind is on top and
    /// receives input.
    pub const Z_ORDER: [DialogKind; 4] = [
        DialogKind::Alert,
        DialogKind::Minimal,
        DialogKind::Image,
        DialogKind::Auth,
    ];

    /// Label on the trigger button
    pub fn trigger_label(&self) -> &'static str {
        match self {
            DialogKind::Minimal => "Minimal Dialog",
            DialogKind::Alert => "Alert Dialog",
            DialogKind::Image => "Dialog with Image",
            DialogKind::Auth => "Auth Dialog",
        }
    }

    /// The shortcut action that opens this dialog
    pub fn open_action(&self) -> Action {
        match self {
            DialogKind::Minimal => Action::OpenMinimal,
            DialogKind::Alert => Action::OpenAlert,
            DialogKind::Image => Action::OpenImage,
            DialogKind::Auth => Action::OpenAuth,
        }
    }

    /// Inverse of [`DialogKind::open_action`]
    pub fn from_open_action(action: Action) -> Option<Self> {
        Self::TRIGGER_ORDER
            .into_iter()
            .find(|kind| kind.open_action() == action)
    }
}

impl std::fmt::Display for DialogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DialogKind::Minimal => "minimal",
            DialogKind::Alert => "alert",
            DialogKind::Image => "image",
            DialogKind::Auth => "auth",
        };
        f.write_str(name)
    }
}

/// What a key press inside a dialog asks the controller to do.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DialogOutcome {
    /// Key consumed (or ignored), dialog stays as it is
    #[default]
    None,
    /// Dismiss / Cancel
    Dismiss,
    Confirm,
    SignIn { email: String, password: String },
    SignUp { email: String, password: String },
}

/// Read-only data dialogs need while rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogContext<'a> {
    /// Last authentication status message
    pub status_message: &'a str,
}

/// Trait for dialog views.
pub trait DialogView {
    /// Draw the dialog centered over `area`, dimming what is behind it.
    fn render(&self, frame: &mut Frame, area: Rect, ctx: &DialogContext);

    /// Handle one key press. `action` is the keymap's reading of the key.
    fn handle_key(&mut self, key: KeyEvent, action: Option<Action>) -> DialogOutcome;

    /// True while a text field has focus, so printable keys are text.
    fn is_input_focused(&self) -> bool {
        false
    }

    /// Return to the state the dialog opens in.
    fn reset(&mut self);
}

/// Focus over a fixed number of buttons, wrapping at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRing {
    index: usize,
    len: usize,
    initial: usize,
}

impl FocusRing {
    pub fn new(len: usize, initial: usize) -> Self {
        debug_assert!(initial < len);
        Self {
            index: initial,
            len,
            initial,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    pub fn reset(&mut self) {
        self.index = self.initial;
    }
}

/// Key handling shared by dialogs whose content is a row of buttons.
///
/// `outcomes` lists what each button does, in the same order as the row.
pub(crate) fn handle_button_row(
    focus: &mut FocusRing,
    outcomes: &[DialogOutcome],
    action: Option<Action>,
) -> DialogOutcome {
    match action {
        Some(Action::Cancel) => DialogOutcome::Dismiss,
        Some(Action::MoveLeft | Action::PrevTab | Action::MoveUp) => {
            focus.prev();
            DialogOutcome::None
        }
        Some(Action::MoveRight | Action::NextTab | Action::MoveDown) => {
            focus.next();
            DialogOutcome::None
        }
        Some(Action::Confirm) => outcomes.get(focus.index()).cloned().unwrap_or_default(),
        _ => DialogOutcome::None,
    }
}
