//! dialogdemo - four ways to present a dialog in a terminal
//!
//! A single screen with a row of triggers. Each trigger opens one dialog:
//! a confirmation alert, a minimal text card, a picture with a caption,
//! and a mock sign-in form.

// Core modules
pub mod app;
pub mod auth;
pub mod cli;
pub mod components;
pub mod config;
pub mod controller;
pub mod dialogs;
pub mod keymap;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use auth::{AuthError, Authenticator, StaticCredentials};
pub use config::Config;
pub use controller::{ControllerAction, DialogVisibility, ScreenController};
pub use dialogs::{DialogKind, DialogOutcome, DialogView};

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
