//! Action enum for all user-triggered actions
//!
//! These represent semantic actions that can be triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// All possible user actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Navigation ============
    /// Move focus up (previous field)
    MoveUp,
    /// Move focus down (next field)
    MoveDown,
    /// Previous button / cursor left
    MoveLeft,
    /// Next button / cursor right
    MoveRight,
    /// Jump to start of input
    Home,
    /// Jump to end of input
    End,

    // ============ Selection & Confirmation ============
    /// Activate the focused button (Enter)
    Confirm,
    /// Dismiss the topmost dialog (Esc)
    Cancel,

    // ============ Global ============
    /// Quit the application
    Quit,
    /// Show help overlay
    Help,

    // ============ Triggers ============
    /// Open the minimal dialog
    OpenMinimal,
    /// Open the alert dialog
    OpenAlert,
    /// Open the dialog with an image
    OpenImage,
    /// Open the auth dialog
    OpenAuth,

    // ============ Text editing ============
    /// Delete character before cursor
    Backspace,
    /// Delete character at cursor
    DeleteChar,

    // ============ Field navigation ============
    /// Move to next field or button
    NextTab,
    /// Move to previous field or button
    PrevTab,
}

impl Action {
    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::MoveLeft => "Move left",
            Action::MoveRight => "Move right",
            Action::Home => "Home",
            Action::End => "End",
            Action::Confirm => "Press focused button",
            Action::Cancel => "Dismiss dialog",
            Action::Quit => "Quit",
            Action::Help => "Show help",
            Action::OpenMinimal => "Open minimal dialog",
            Action::OpenAlert => "Open alert dialog",
            Action::OpenImage => "Open dialog with image",
            Action::OpenAuth => "Open auth dialog",
            Action::Backspace => "Backspace",
            Action::DeleteChar => "Delete character",
            Action::NextTab => "Next field",
            Action::PrevTab => "Previous field",
        }
    }

    /// Get action category for grouping in help display
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp
            | Action::MoveDown
            | Action::MoveLeft
            | Action::MoveRight
            | Action::Home
            | Action::End => "Navigation",

            Action::Confirm | Action::Cancel => "Selection",

            Action::Quit | Action::Help => "Global",

            Action::OpenMinimal | Action::OpenAlert | Action::OpenImage | Action::OpenAuth => {
                "Dialogs"
            }

            Action::Backspace | Action::DeleteChar => "Text Editing",

            Action::NextTab | Action::PrevTab => "Field Navigation",
        }
    }
}
