//! Dialog frame widget shared by every dialog.
//!
//! Handles centering, background dimming, clearing and the rounded card
//! border. Dialog views render their own content into [`DialogFrame::inner`].

use crate::styles::theme;
use crate::utils::center_rect;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Widget};

/// A centered card drawn above a dimmed page.
#[derive(Debug, Clone, Copy)]
pub struct DialogFrame {
    /// Preferred width in columns
    pub width: u16,
    /// Preferred height in rows (borders included)
    pub height: u16,
}

impl DialogFrame {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// The card's outer rectangle, never wider or taller than `area`.
    pub fn card_area(&self, area: Rect) -> Rect {
        // Leave a margin so the dimmed page stays visible around the card
        let max_width = area.width.saturating_sub(4).max(area.width.min(10));
        let max_height = area.height.saturating_sub(2).max(area.height.min(3));
        center_rect(
            area,
            self.width.min(max_width),
            self.height.min(max_height),
        )
    }

    /// The area inside the card's border and padding.
    pub fn inner(&self, area: Rect) -> Rect {
        self.block().inner(self.card_area(area))
    }

    fn block(&self) -> Block<'static> {
        let t = theme();
        Block::default()
            .borders(Borders::ALL)
            .border_type(t.dialog_border_type)
            .border_style(t.border_focused_style())
            .padding(Padding::horizontal(1))
            .style(t.background_style())
    }
}

impl Widget for DialogFrame {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, theme().dim_style());
        let card = self.card_area(area);
        Clear.render(card, buf);
        self.block().render(card, buf);
    }
}
