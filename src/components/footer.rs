use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Key hint bar at the bottom of the screen
pub struct Footer;

impl Footer {
    /// Render hints written as `"Label: keys | Label: keys"`.
    ///
    /// Uses 2 lines: a top border and the hint text.
    pub fn render(frame: &mut Frame, area: Rect, text: &str) {
        let t = theme();
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(t.border_style())
            .border_type(BorderType::Rounded);
        let footer = Paragraph::new(Self::spans(text))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(footer, area);
    }

    fn spans(text: &str) -> Line<'_> {
        let t = theme();
        let mut spans = Vec::new();
        for (i, part) in text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", t.muted_style()));
            }
            // "keys: label"
            if let Some((keys, label)) = part.split_once(": ") {
                spans.push(Span::styled(
                    keys,
                    t.emphasis_style().add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::styled(format!(": {}", label), t.text_style()));
            } else {
                spans.push(Span::styled(part, t.text_style()));
            }
        }
        Line::from(spans)
    }
}
