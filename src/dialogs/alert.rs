//! Confirmation alert: icon, title, body text and Dismiss/Confirm buttons.

use super::{handle_button_row, DialogContext, DialogOutcome, DialogView, FocusRing};
use crate::keymap::Action;
use crate::styles::theme;
use crate::widgets::{ButtonRow, DialogFrame};
use crossterm::event::KeyEvent;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

const BUTTONS: [&str; 2] = ["Dismiss", "Confirm"];
const CONFIRM: usize = 1;

/// Icons an alert can show above its title
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum DialogIcon {
    /// A plus sign in a circle
    #[default]
    AddCircle,
}

impl DialogIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            DialogIcon::AddCircle => "⊕",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AlertDialog {
    icon: DialogIcon,
    icon_description: String,
    title: String,
    text: String,
    focus: FocusRing,
}

impl AlertDialog {
    pub fn new(title: impl Into<String>, text: impl Into<String>, icon: DialogIcon) -> Self {
        Self {
            icon,
            icon_description: "Example Icon".to_string(),
            title: title.into(),
            text: text.into(),
            focus: FocusRing::new(BUTTONS.len(), CONFIRM),
        }
    }

    pub fn icon(&self) -> DialogIcon {
        self.icon
    }

    pub fn icon_description(&self) -> &str {
        &self.icon_description
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Index of the focused button in `["Dismiss", "Confirm"]`
    pub fn focused_button(&self) -> usize {
        self.focus.index()
    }

    fn frame(&self) -> DialogFrame {
        let width = (self.title.chars().count().max(self.text.chars().count()) as u16 + 8)
            .clamp(36, 64);
        DialogFrame::new(width, 10)
    }
}

impl Default for AlertDialog {
    fn default() -> Self {
        Self::new("Dialog Title", "Dialog Text", DialogIcon::AddCircle)
    }
}

impl DialogView for AlertDialog {
    fn render(&self, frame: &mut Frame, area: Rect, _ctx: &DialogContext) {
        let t = theme();
        let dialog = self.frame();
        let inner = dialog.inner(area);
        frame.render_widget(dialog, area);

        let [icon_area, title_area, _, text_area, buttons_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        // Glyph with its content description beside it, muted
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(self.icon.glyph(), t.accent_style()),
                Span::styled(format!(" {}", self.icon_description), t.muted_style()),
            ]))
            .alignment(Alignment::Center),
            icon_area,
        );
        frame.render_widget(
            Paragraph::new(self.title.as_str())
                .style(t.title_style())
                .alignment(Alignment::Center),
            title_area,
        );
        frame.render_widget(
            Paragraph::new(self.text.as_str())
                .style(t.text_style())
                .wrap(Wrap { trim: true }),
            text_area,
        );
        frame.render_widget(
            ButtonRow::new(BUTTONS)
                .focused(Some(self.focus.index()))
                .alignment(Alignment::Right),
            buttons_area,
        );
    }

    fn handle_key(&mut self, _key: KeyEvent, action: Option<Action>) -> DialogOutcome {
        handle_button_row(
            &mut self.focus,
            &[DialogOutcome::Dismiss, DialogOutcome::Confirm],
            action,
        )
    }

    fn reset(&mut self) {
        self.focus.reset();
    }
}
