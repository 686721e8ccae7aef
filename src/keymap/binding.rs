//! KeyBinding struct for mapping keys to actions
//!
//! Parses key strings like "ctrl+c", "backtab", "1"

use super::Action;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// A single key binding mapping a key combination to an action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key string (e.g., "j", "down", "ctrl+c", "backtab")
    pub key: String,

    /// The action this key triggers
    pub action: Action,

    /// Optional description override (uses action description if None)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Parsed key representation for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(key: &str, action: Action) -> Self {
        Self {
            key: key.to_string(),
            action,
            description: None,
        }
    }

    /// Check if this binding matches the given key event
    ///
    /// Terminals report SHIFT alongside shifted characters and BackTab, so it
    /// is ignored for those codes.
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        let Ok(parsed) = self.parse() else {
            return false;
        };
        let modifiers = normalize_modifiers(code, modifiers);
        parsed.code == code && normalize_modifiers(parsed.code, parsed.modifiers) == modifiers
    }

    /// Parse the key string into KeyCode and KeyModifiers
    pub fn parse(&self) -> Result<ParsedKey, String> {
        parse_key_string(&self.key)
    }

    /// Get the display string for this binding (e.g., "Ctrl+C")
    pub fn display(&self) -> String {
        format_key_display(&self.key)
    }

    /// Get the description (custom or from action)
    pub fn get_description(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or_else(|| self.action.description())
    }
}

fn normalize_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyModifiers {
    match code {
        KeyCode::Char(_) | KeyCode::BackTab => modifiers.difference(KeyModifiers::SHIFT),
        _ => modifiers,
    }
}

/// Parse a key string like "ctrl+shift+n" into KeyCode and KeyModifiers
pub fn parse_key_string(key: &str) -> Result<ParsedKey, String> {
    let key = key.trim().to_lowercase();
    let parts: Vec<&str> = key.split('+').collect();

    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = "";

    for (i, part) in parts.iter().enumerate() {
        let part = part.trim();
        if i == parts.len() - 1 {
            key_part = part;
        } else {
            match part {
                "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
                "alt" | "option" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return Err(format!("Unknown modifier: {}", part)),
            }
        }
    }

    // "shift+tab" is how most people write BackTab
    if key_part == "tab" && modifiers.contains(KeyModifiers::SHIFT) {
        return Ok(ParsedKey {
            code: KeyCode::BackTab,
            modifiers: modifiers.difference(KeyModifiers::SHIFT),
        });
    }

    let code = parse_key_code(key_part)?;
    Ok(ParsedKey { code, modifiers })
}

/// Parse a single key name into KeyCode
fn parse_key_code(key: &str) -> Result<KeyCode, String> {
    let code = match key {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" | "bs" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => {
                    if let Some(n) = key.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                        if (1..=12).contains(&n) {
                            return Ok(KeyCode::F(n));
                        }
                    }
                    return Err(format!("Unknown key: {}", key));
                }
            }
        }
    };
    Ok(code)
}

/// Format a key string for display (e.g., "ctrl+c" -> "Ctrl+C")
pub fn format_key_display(key: &str) -> String {
    key.split('+')
        .map(|part| {
            let part = part.trim().to_lowercase();
            match part.as_str() {
                "ctrl" | "control" => "Ctrl".to_string(),
                "alt" | "option" => "Alt".to_string(),
                "shift" => "Shift".to_string(),
                "up" => "↑".to_string(),
                "down" => "↓".to_string(),
                "left" => "←".to_string(),
                "right" => "→".to_string(),
                "enter" | "return" => "Enter".to_string(),
                "esc" | "escape" => "Esc".to_string(),
                "space" => "Space".to_string(),
                "tab" => "Tab".to_string(),
                "backtab" => "Shift+Tab".to_string(),
                "backspace" | "bs" => "Backspace".to_string(),
                "delete" | "del" => "Del".to_string(),
                "home" => "Home".to_string(),
                "end" => "End".to_string(),
                _ if part.chars().count() == 1 => part.to_uppercase(),
                _ if part.starts_with('f') && part.len() <= 3 => part.to_uppercase(),
                _ => part,
            }
        })
        .collect::<Vec<_>>()
        .join("+")
}
