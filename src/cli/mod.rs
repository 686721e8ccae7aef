//! Command-line interface.
//!
//! Without a subcommand the TUI is launched; the subcommands are small
//! helpers that print and exit.

mod completions;

use crate::config::Config;
use crate::keymap::KeymapPreset;
use crate::styles::ThemeType;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// A terminal demo of four ways to present a dialog
#[derive(Parser, Debug)]
#[command(name = "dialogdemo", version, about, long_about = None)]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Color theme for this run (dark, light, nocolor)
    #[arg(long, value_name = "THEME")]
    pub theme: Option<ThemeType>,

    /// Keymap preset for this run (standard, vim, emacs)
    #[arg(long, value_name = "PRESET")]
    pub keymap: Option<KeymapPreset>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a shell completion script to stdout
    Completions {
        /// Shell to generate for (detected from $SHELL if omitted)
        shell: Option<Shell>,
    },
    /// Show where the config file lives and what it contains
    Config,
}

impl Cli {
    /// Config file path for this run
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::utils::get_config_path)
    }

    /// Run a subcommand. Returns `false` when there is none and the TUI
    /// should start instead.
    pub fn execute(&self) -> Result<bool> {
        match &self.command {
            Some(Commands::Completions { shell }) => {
                completions::generate(*shell)?;
                Ok(true)
            }
            Some(Commands::Config) => {
                self.cmd_config()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn cmd_config(&self) -> Result<()> {
        let config_path = self.config_path();
        let config = Config::load_or_create(&config_path)
            .context("Failed to load configuration")?;
        let content = toml::to_string_pretty(&config).context("Failed to serialize config")?;

        println!("# {}", config_path.display());
        print!("{}", content);
        Ok(())
    }
}
