//! Preset keymaps: Standard, Vim, Emacs

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};

/// Available keymap presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Arrows, Enter, Esc
    #[default]
    Standard,
    /// hjkl on top of the arrows
    Vim,
    /// Ctrl+N/P/B/F on top of the arrows
    Emacs,
}

impl KeymapPreset {
    /// Get all key bindings for this preset
    pub fn bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = match self {
            KeymapPreset::Standard => standard_bindings(),
            KeymapPreset::Vim => vim_bindings(),
            KeymapPreset::Emacs => emacs_bindings(),
        };
        bindings.extend(shared_bindings());
        bindings
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Vim => "Vim",
            KeymapPreset::Emacs => "Emacs",
        }
    }
}

impl std::str::FromStr for KeymapPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(KeymapPreset::Standard),
            "vim" => Ok(KeymapPreset::Vim),
            "emacs" => Ok(KeymapPreset::Emacs),
            other => Err(format!("Unknown keymap preset: {}", other)),
        }
    }
}

/// Bindings every preset carries
fn shared_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
        KeyBinding::new("?", Action::Help),
        KeyBinding::new("1", Action::OpenMinimal),
        KeyBinding::new("2", Action::OpenAlert),
        KeyBinding::new("3", Action::OpenImage),
        KeyBinding::new("4", Action::OpenAuth),
        KeyBinding::new("backspace", Action::Backspace),
        KeyBinding::new("delete", Action::DeleteChar),
        KeyBinding::new("tab", Action::NextTab),
        KeyBinding::new("backtab", Action::PrevTab),
    ]
}

fn standard_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("home", Action::Home),
        KeyBinding::new("end", Action::End),
    ]
}

fn vim_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("k", Action::MoveUp),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("j", Action::MoveDown),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("h", Action::MoveLeft),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("l", Action::MoveRight),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("0", Action::Home),
        KeyBinding::new("home", Action::Home),
        KeyBinding::new("$", Action::End),
        KeyBinding::new("end", Action::End),
    ]
}

fn emacs_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("ctrl+p", Action::MoveUp),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("ctrl+n", Action::MoveDown),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("ctrl+b", Action::MoveLeft),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("ctrl+f", Action::MoveRight),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("ctrl+a", Action::Home),
        KeyBinding::new("home", Action::Home),
        KeyBinding::new("ctrl+e", Action::End),
        KeyBinding::new("end", Action::End),
        KeyBinding::new("ctrl+g", Action::Cancel),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_preset_binds_the_core_actions() {
        for preset in [KeymapPreset::Standard, KeymapPreset::Vim, KeymapPreset::Emacs] {
            let actions: HashSet<Action> = preset.bindings().iter().map(|b| b.action).collect();
            for action in [
                Action::Confirm,
                Action::Cancel,
                Action::Quit,
                Action::MoveLeft,
                Action::MoveRight,
                Action::NextTab,
                Action::OpenAuth,
            ] {
                assert!(actions.contains(&action), "{:?} missing {:?}", preset, action);
            }
        }
    }

    #[test]
    fn test_every_preset_binding_parses() {
        for preset in [KeymapPreset::Standard, KeymapPreset::Vim, KeymapPreset::Emacs] {
            for binding in preset.bindings() {
                assert!(binding.parse().is_ok(), "bad key {:?}", binding.key);
            }
        }
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("VIM".parse::<KeymapPreset>().unwrap(), KeymapPreset::Vim);
        assert!("helix".parse::<KeymapPreset>().is_err());
    }
}
