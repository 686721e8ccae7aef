//! Keymap configuration module
//!
//! Provides customizable keyboard shortcuts with preset keymaps (standard, vim, emacs).

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{format_key_display, parse_key_string, KeyBinding, ParsedKey};
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Keymap {
    /// Base preset keymap
    #[serde(default)]
    pub preset: KeymapPreset,

    /// User-defined overrides (checked before preset)
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    /// Get the action for a key event, checking overrides first then preset
    ///
    /// If an action is overridden, preset bindings for that action are ignored.
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// Get all bindings (overrides + preset) for display in help
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        for preset_binding in self.preset.bindings() {
            let is_overridden = self
                .overrides
                .iter()
                .any(|o| o.action == preset_binding.action);
            if !is_overridden {
                bindings.push(preset_binding);
            }
        }
        bindings
    }

    /// Get the display string for a specific action (e.g., Action::Quit -> "Q")
    pub fn get_key_display_for_action(&self, action: Action) -> String {
        self.all_bindings()
            .into_iter()
            .find(|b| b.action == action)
            .map(|b| b.display())
            .unwrap_or_else(|| format!("{:?}", action))
    }

    /// Footer hints for the trigger row
    pub fn footer_main(&self) -> String {
        let shortcuts = [
            Action::OpenMinimal,
            Action::OpenAlert,
            Action::OpenImage,
            Action::OpenAuth,
        ]
        .map(|action| self.get_key_display_for_action(action))
        .join("/");
        format!(
            "{}/{}: Select | {}: Open | {}: Shortcut | {}: Help | {}: Quit",
            self.get_key_display_for_action(Action::MoveLeft),
            self.get_key_display_for_action(Action::MoveRight),
            self.get_key_display_for_action(Action::Confirm),
            shortcuts,
            self.get_key_display_for_action(Action::Help),
            self.get_key_display_for_action(Action::Quit),
        )
    }

    /// Footer hints while a dialog is open
    pub fn footer_dialog(&self) -> String {
        format!(
            "{}: Next | {}: Press | {}: Dismiss",
            self.get_key_display_for_action(Action::NextTab),
            self.get_key_display_for_action(Action::Confirm),
            self.get_key_display_for_action(Action::Cancel),
        )
    }
}
