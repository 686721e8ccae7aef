use crate::components::HelpOverlay;
use crate::config::Config;
use crate::controller::{ControllerAction, ScreenController};
use crate::keymap::Keymap;
use crate::styles::theme;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::widgets::Block;
use ratatui::Frame;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Main application state
pub struct App {
    config_path: PathBuf,
    keymap: Keymap,
    controller: ScreenController,
    show_help: bool,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, config_path: PathBuf) -> Self {
        Self {
            config_path,
            keymap: config.keymap,
            controller: ScreenController::new(),
            show_help: false,
            should_quit: false,
        }
    }

    pub fn controller(&self) -> &ScreenController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ScreenController {
        &mut self.controller
    }

    pub fn is_help_visible(&self) -> bool {
        self.show_help
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        info!("Started with {} keymap", self.keymap.preset.name());

        // Main event loop
        let result = loop {
            if let Err(e) = tui.terminal_mut().draw(|frame| self.draw(frame)) {
                break Err(anyhow::Error::new(e).context("Failed to draw frame"));
            }
            if self.should_quit {
                break Ok(());
            }

            match tui.poll_event(Duration::from_millis(250)) {
                Ok(Some(event)) => self.handle_event(event),
                Ok(None) => {}
                Err(e) => break Err(e),
            }
        };

        tui.exit()?;
        info!("Exited");
        result
    }

    /// Draw the whole screen into a frame
    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme().background_style()), area);
        self.controller.render(frame, area, &self.keymap);
        if self.show_help {
            HelpOverlay::render(
                frame,
                area,
                &self.keymap,
                &self.config_path.display().to_string(),
            );
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                self.handle_key(key);
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C quits even while typing into a field
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.show_help {
            if HelpOverlay::closes_on(self.keymap.get_action(key.code, key.modifiers)) {
                self.show_help = false;
            }
            return;
        }

        match self.controller.handle_key(key, &self.keymap) {
            ControllerAction::Quit => self.should_quit = true,
            ControllerAction::ShowHelp => self.show_help = true,
            ControllerAction::None => {}
        }
    }
}
