//! A card with one line of centered text and no buttons.

use super::{DialogContext, DialogOutcome, DialogView};
use crate::keymap::Action;
use crate::styles::theme;
use crate::widgets::DialogFrame;
use crossterm::event::KeyEvent;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

#[derive(Debug, Clone)]
pub struct MinimalDialog {
    text: String,
}

impl MinimalDialog {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Default for MinimalDialog {
    fn default() -> Self {
        Self::new("This is a minimal dialog")
    }
}

impl DialogView for MinimalDialog {
    fn render(&self, frame: &mut Frame, area: Rect, _ctx: &DialogContext) {
        let dialog = DialogFrame::new(40, 7);
        let inner = dialog.inner(area);
        frame.render_widget(dialog, area);

        let [_, text_area, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(inner);
        frame.render_widget(
            Paragraph::new(self.text.as_str())
                .style(theme().text_style())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            text_area,
        );
    }

    /// Esc or Enter closes the dialog; everything else is ignored.
    fn handle_key(&mut self, _key: KeyEvent, action: Option<Action>) -> DialogOutcome {
        match action {
            Some(Action::Cancel | Action::Confirm) => DialogOutcome::Dismiss,
            _ => DialogOutcome::None,
        }
    }

    fn reset(&mut self) {}
}
