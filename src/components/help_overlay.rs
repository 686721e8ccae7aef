//! Help Overlay Component
//!
//! Displays current keybindings when the user presses '?'.

use crate::keymap::{Action, Keymap};
use crate::styles::theme;
use crate::utils::center_popup;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

/// Category order in the overlay
const CATEGORIES: [&str; 6] = [
    "Dialogs",
    "Navigation",
    "Field Navigation",
    "Selection",
    "Text Editing",
    "Global",
];

/// Renders the help overlay showing current keybindings
pub struct HelpOverlay;

impl HelpOverlay {
    /// Lines of the overlay body: one heading per category, then its bindings
    pub fn lines(keymap: &Keymap) -> Vec<Line<'static>> {
        let t = theme();
        let bindings = keymap.all_bindings();
        let mut lines = Vec::new();

        for category in CATEGORIES {
            let in_category: Vec<_> = bindings
                .iter()
                .filter(|b| b.action.category() == category)
                .collect();
            if in_category.is_empty() {
                continue;
            }
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                format!("  {} ", category),
                t.title_style(),
            )));
            for binding in in_category {
                lines.push(Line::from(vec![
                    Span::styled(format!("    {:12}", binding.display()), t.emphasis_style()),
                    Span::styled(binding.get_description().to_string(), t.text_style()),
                ]));
            }
        }
        lines
    }

    /// Whether a key action should close the overlay
    pub fn closes_on(action: Option<Action>) -> bool {
        matches!(
            action,
            Some(Action::Cancel | Action::Help | Action::Confirm | Action::Quit)
        )
    }

    /// Render the help overlay in the center of the screen
    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap, config_path: &str) {
        let t = theme();
        let popup_area = center_popup(area, 80, 85);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(t.dialog_border_type)
            .title(format!(" Keyboard Shortcuts - {} Preset ", keymap.preset.name()))
            .title_alignment(Alignment::Center)
            .border_style(t.border_focused_style());
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let [body_area, footer_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(2)]).areas(inner);

        frame.render_widget(
            Paragraph::new(Self::lines(keymap)).wrap(Wrap { trim: false }),
            body_area,
        );
        frame.render_widget(
            Paragraph::new(format!(
                "Edit keybindings in: {}\nPress Esc or ? to close",
                config_path
            ))
            .style(t.muted_style())
            .alignment(Alignment::Center),
            footer_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::KeymapPreset;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_lines_grouped_by_category() {
        let text = plain(&HelpOverlay::lines(&Keymap::default()));
        let dialogs = text.iter().position(|l| l.trim() == "Dialogs").unwrap();
        let global = text.iter().position(|l| l.trim() == "Global").unwrap();
        assert!(dialogs < global);
        assert!(text.iter().any(|l| l.contains("Open auth dialog")));
    }

    #[test]
    fn test_lines_follow_preset() {
        let vim = Keymap {
            preset: KeymapPreset::Vim,
            overrides: Vec::new(),
        };
        let text = plain(&HelpOverlay::lines(&vim));
        assert!(text.iter().any(|l| l.trim_start().starts_with('H') && l.contains("Move left")));
    }

    #[test]
    fn test_closes_on() {
        assert!(HelpOverlay::closes_on(Some(Action::Cancel)));
        assert!(HelpOverlay::closes_on(Some(Action::Help)));
        assert!(!HelpOverlay::closes_on(Some(Action::MoveDown)));
        assert!(!HelpOverlay::closes_on(None));
    }
}
