//! The [`Picture`] widget draws a bundled text-art image resource.
use crate::styles::theme;
use crate::utils::center_rect;
use indoc::indoc;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::Text;
use ratatui::widgets::{Paragraph, Widget};

/// Image resources bundled with the app
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ImageResource {
    /// The launcher icon foreground (a small robot head)
    ///
    /// ```text
    ///    \        /
    ///     .------.
    ///    /  o  o  \
    ///   |__________|
    /// ```
    #[default]
    LauncherForeground,
}

impl ImageResource {
    pub fn art(&self) -> &'static str {
        match self {
            ImageResource::LauncherForeground => indoc! {r"
                  \        /
                   .------.
                  /  o  o  \
                 |__________|
            "},
        }
    }

    /// Rows the art occupies
    pub fn height(&self) -> u16 {
        self.art().lines().count() as u16
    }

    /// Columns of the widest art line
    pub fn width(&self) -> u16 {
        self.art()
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or_default() as u16
    }
}

/// Centered, accent-colored rendering of an [`ImageResource`] with its
/// content description in a muted line underneath.
#[derive(Debug, Clone, Copy)]
pub struct Picture<'a> {
    resource: ImageResource,
    description: &'a str,
}

impl<'a> Picture<'a> {
    pub fn new(resource: ImageResource, description: &'a str) -> Self {
        Self {
            resource,
            description,
        }
    }

    pub fn description(&self) -> &'a str {
        self.description
    }
}

impl Picture<'_> {
    /// Rows needed for the art plus the description line
    pub fn height(&self) -> u16 {
        self.resource.height() + 1
    }
}

impl Widget for Picture<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let block = center_rect(area, area.width, self.height());
        let [art_area, description_area] = Layout::vertical([
            Constraint::Length(self.resource.height()),
            Constraint::Length(1),
        ])
        .areas(block);

        // Center the art as a whole so it keeps its shape
        let target = center_rect(art_area, self.resource.width(), self.resource.height());
        Paragraph::new(Text::raw(self.resource.art()))
            .style(t.accent_style())
            .render(target, buf);
        Paragraph::new(self.description)
            .style(t.muted_style())
            .alignment(Alignment::Center)
            .render(description_area, buf);
    }
}
