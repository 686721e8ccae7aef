//! Dialog with a picture, a caption and Dismiss/Confirm buttons.

use super::{handle_button_row, DialogContext, DialogOutcome, DialogView, FocusRing};
use crate::keymap::Action;
use crate::styles::theme;
use crate::widgets::{ButtonRow, DialogFrame, ImageResource, Picture};
use crossterm::event::KeyEvent;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

const BUTTONS: [&str; 2] = ["Dismiss", "Confirm"];
const CONFIRM: usize = 1;

#[derive(Debug, Clone)]
pub struct ImageDialog {
    resource: ImageResource,
    description: String,
    caption: String,
    focus: FocusRing,
}

impl ImageDialog {
    pub fn new(resource: ImageResource, description: impl Into<String>) -> Self {
        Self {
            resource,
            description: description.into(),
            caption: "This is a dialog with buttons and an image.".to_string(),
            focus: FocusRing::new(BUTTONS.len(), CONFIRM),
        }
    }

    pub fn resource(&self) -> ImageResource {
        self.resource
    }

    /// Content description of the picture
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn focused_button(&self) -> usize {
        self.focus.index()
    }
}

impl Default for ImageDialog {
    fn default() -> Self {
        Self::new(ImageResource::LauncherForeground, "Example Image")
    }
}

impl DialogView for ImageDialog {
    fn render(&self, frame: &mut Frame, area: Rect, _ctx: &DialogContext) {
        let picture = Picture::new(self.resource, &self.description);
        let picture_height = picture.height();
        // picture + gap + two caption rows + gap + buttons + borders
        let dialog = DialogFrame::new(52, picture_height + 8);
        let inner = dialog.inner(area);
        frame.render_widget(dialog, area);

        let [picture_area, _, caption_area, buttons_area] = Layout::vertical([
            Constraint::Min(picture_height),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .areas(inner);

        frame.render_widget(picture, picture_area);
        frame.render_widget(
            Paragraph::new(self.caption.as_str())
                .style(theme().text_style())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            caption_area,
        );
        frame.render_widget(
            ButtonRow::new(BUTTONS).focused(Some(self.focus.index())),
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
