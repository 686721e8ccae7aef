use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

/// Title block at the top of the screen
pub struct Header;

impl Header {
    /// Render a bordered header with a centered title and a description line.
    pub fn render(frame: &mut Frame, area: Rect, title: &str, description: &str) {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_focused_style())
            .title(format!(" {} ", title))
            .title_style(t.title_style())
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));

        let description = Paragraph::new(description)
            .style(t.text_style())
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(description, area);
    }
}
