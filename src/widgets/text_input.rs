//! Labelled, bordered text field for [`TextInput`] buffers.
//!
//! Takes the placeholder and masking from the input's [`InputKind`], so an
//! email field shows its keyboard hint and a password field shows bullets.

use crate::styles::theme;
use crate::utils::TextInput;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Mask character for obscured fields
const MASK: char = '•';

pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    label: Option<&'a str>,
    focused: bool,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            label: None,
            focused: false,
        }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// The text drawn inside the field: masked, literal or the kind's hint.
    pub fn display_text(&self) -> String {
        let kind = self.input.kind();
        if self.input.is_empty() {
            kind.hint().unwrap_or_default().to_string()
        } else if kind.is_masked() {
            MASK.to_string().repeat(self.input.char_count())
        } else {
            self.input.text().to_string()
        }
    }

    fn block(&self) -> Block<'a> {
        let t = theme();
        let border_style = if self.focused {
            t.border_focused_style()
        } else {
            t.border_style()
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        if let Some(label) = self.label {
            block = block.title(format!(" {} ", label));
        }
        block
    }

    /// Columns between the start of the text and the cursor
    fn cursor_column(&self) -> usize {
        if self.input.kind().is_masked() {
            self.input.cursor()
        } else {
            Span::raw(self.input.text_before_cursor()).width()
        }
    }

    /// Terminal position of the cursor when this field is drawn in `area`.
    ///
    /// Text that overflows the field is scrolled so the cursor stays visible.
    pub fn cursor_position(&self, area: Rect) -> Position {
        let inner = self.block().inner(area);
        let max = inner.width.saturating_sub(1) as usize;
        let x = inner.x + self.cursor_column().min(max) as u16;
        Position::new(x, inner.y)
    }

    fn scroll_offset(&self, inner_width: u16) -> u16 {
        let max = inner_width.saturating_sub(1) as usize;
        self.cursor_column().saturating_sub(max) as u16
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let block = self.block();
        let inner = block.inner(area);
        let style = if self.input.is_empty() {
            t.muted_style()
        } else {
            t.text_style()
        };
        Paragraph::new(self.display_text())
            .style(style)
            .scroll((0, self.scroll_offset(inner.width)))
            .block(block)
            .render(area, buf);
    }
}

/// Extension trait so frames can render a field and place the cursor.
pub trait TextInputWidgetExt {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect);
}

impl TextInputWidgetExt for Frame<'_> {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect) {
        let cursor = widget.focused.then(|| widget.cursor_position(area));
        self.render_widget(widget, area);
        if let Some(position) = cursor {
            self.set_cursor_position(position);
        }
    }
}
