use crate::keymap::Action;
use crossterm::event::{KeyCode, KeyModifiers};

/// What a text field holds, used for the keyboard hint and masking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputKind {
    #[default]
    Text,
    /// Email-optimized field
    Email,
    /// Obscured field
    Password,
}

impl InputKind {
    /// Placeholder shown while the field is empty
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            InputKind::Text => None,
            InputKind::Email => Some("name@example.com"),
            InputKind::Password => None,
        }
    }

    pub fn is_masked(&self) -> bool {
        matches!(self, InputKind::Password)
    }
}

/// A single-line text buffer with a character cursor.
///
/// # Example
/// ```
/// use dialogdemo::utils::TextInput;
///
/// let mut input = TextInput::new();
/// input.insert_char('h');
/// input.insert_char('i');
/// assert_eq!(input.text(), "hi");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    /// Cursor position in characters, not bytes
    cursor: usize,
    kind: InputKind,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty input of the given kind
    pub fn of_kind(kind: InputKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Create a text input with initial text, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut input = Self::new();
        input.set_text(text);
        input
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    /// True when nothing has been typed. Whitespace counts as content.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Set the text and move cursor to end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.char_count();
    }

    /// The part of the text left of the cursor
    pub fn text_before_cursor(&self) -> &str {
        &self.text[..self.byte_index(self.cursor)]
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(i, _)| i)
    }

    /// Insert a character at the cursor position.
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
    }

    /// Delete the character at the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Apply an editing action from the keymap.
    ///
    /// Returns true if the action edited or moved within the field.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.move_left(),
            Action::MoveRight => self.move_right(),
            Action::Home => self.move_home(),
            Action::End => self.move_end(),
            Action::Backspace => self.backspace(),
            Action::DeleteChar => self.delete(),
            _ => return false,
        }
        true
    }

    /// Handle a key press while this field has focus.
    ///
    /// Plain printable characters are always inserted, even when a binding
    /// exists for them, so that typing "q" or "1" in a field never triggers
    /// a shortcut. Everything else goes through the mapped action.
    pub fn handle_key(
        &mut self,
        code: KeyCode,
        modifiers: KeyModifiers,
        action: Option<Action>,
    ) -> bool {
        if let KeyCode::Char(c) = code {
            if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
                self.insert_char(c);
                return true;
            }
        }
        action.is_some_and(|action| self.handle_action(action))
    }
}
