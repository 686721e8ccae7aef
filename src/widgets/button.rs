//! Row of push buttons that wraps onto further lines when it runs out of
//! width, like a flow layout.

use crate::styles::theme;
use ratatui::prelude::*;

/// Columns between two buttons on the same line
const SPACING: u16 = 2;

/// A row of buttons with at most one focused.
#[derive(Debug, Clone)]
pub struct ButtonRow<'a> {
    labels: Vec<&'a str>,
    focused: Option<usize>,
    alignment: Alignment,
}

impl<'a> ButtonRow<'a> {
    pub fn new(labels: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            labels: labels.into_iter().collect(),
            focused: None,
            alignment: Alignment::Center,
        }
    }

    pub fn focused(mut self, index: Option<usize>) -> Self {
        self.focused = index;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    fn button_text(label: &str) -> String {
        format!("[ {} ]", label)
    }

    fn button_width(label: &str) -> u16 {
        Self::button_text(label).chars().count() as u16
    }

    /// Split the buttons into lines that fit `width`
    fn lines(&self, width: u16) -> Vec<Vec<usize>> {
        let mut lines: Vec<Vec<usize>> = Vec::new();
        let mut used = 0u16;
        for (i, label) in self.labels.iter().enumerate() {
            let w = Self::button_width(label);
            match lines.last_mut() {
                Some(line) if used + SPACING + w <= width => {
                    line.push(i);
                    used += SPACING + w;
                }
                _ => {
                    lines.push(vec![i]);
                    used = w;
                }
            }
        }
        lines
    }

    /// Number of rows the buttons need at the given width
    pub fn required_height(&self, width: u16) -> u16 {
        self.lines(width).len() as u16
    }

    /// Screen rectangle of every button, in label order
    pub fn layout(&self, area: Rect) -> Vec<Rect> {
        let mut rects = vec![Rect::default(); self.labels.len()];
        for (row, line) in self.lines(area.width).iter().enumerate() {
            let y = area.y + row as u16;
            if y >= area.bottom() {
                break;
            }
            let line_width: u16 = line
                .iter()
                .map(|&i| Self::button_width(self.labels[i]))
                .sum::<u16>()
                + SPACING * (line.len() as u16).saturating_sub(1);
            let mut x = match self.alignment {
                Alignment::Left => area.x,
                Alignment::Center => area.x + area.width.saturating_sub(line_width) / 2,
                Alignment::Right => area.x + area.width.saturating_sub(line_width),
            };
            for &i in line {
                let w = Self::button_width(self.labels[i]).min(area.right().saturating_sub(x));
                rects[i] = Rect::new(x, y, w, 1);
                x = x.saturating_add(w + SPACING);
            }
        }
        rects
    }
}

impl Widget for ButtonRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        for (i, rect) in self.layout(area).into_iter().enumerate() {
            if rect.is_empty() {
                continue;
            }
            let style = if self.focused == Some(i) {
                t.highlight_style()
            } else {
                t.text_style()
            };
            buf.set_stringn(
                rect.x,
                rect.y,
                Self::button_text(self.labels[i]),
                rect.width as usize,
                style,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_single_line_when_it_fits() {
        let row = ButtonRow::new(["Dismiss", "Confirm"]);
        assert_eq!(row.required_height(40), 1);
    }

    #[test]
    fn test_wraps_when_too_narrow() {
        let row = ButtonRow::new(["Minimal Dialog", "Alert Dialog", "Dialog with Image"]);
        assert_eq!(row.required_height(40), 2);
        let rects = row.layout(Rect::new(0, 0, 40, 2));
        assert_eq!(rects[0].y, 0);
        assert_eq!(rects[1].y, 0);
        assert_eq!(rects[2].y, 1);
    }

    #[test]
    fn test_left_alignment_starts_at_area_x() {
        let row = ButtonRow::new(["Ok"]).alignment(Alignment::Left);
        let rects = row.layout(Rect::new(3, 0, 20, 1));
        assert_eq!(rects[0], Rect::new(3, 0, 6, 1));
    }

    #[test]
    fn test_render_labels() {
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        ButtonRow::new(["Dismiss", "Confirm"])
            .focused(Some(1))
            .render(area, &mut buf);
        let text = row_text(&buf, 0);
        assert!(text.contains("[ Dismiss ]"));
        assert!(text.contains("[ Confirm ]"));
    }
}
