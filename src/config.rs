use crate::keymap::{Keymap, KeymapPreset};
use crate::styles::ThemeType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Application configuration.
///
/// Only look-and-feel lives here. Dialog state is never written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Color theme: "dark", "light" or "nocolor"
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Keyboard shortcuts (preset + overrides)
    #[serde(default)]
    pub keymap: Keymap,
}

fn default_theme() -> String {
    ThemeType::Dark.name().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            keymap: Keymap::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or write and return the defaults
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file with secure permissions
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        // 600: owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(config_path)
                .with_context(|| format!("Failed to get file metadata: {:?}", config_path))?
                .permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(config_path, perms)
                .with_context(|| format!("Failed to set file permissions: {:?}", config_path))?;
        }

        Ok(())
    }

    /// Parsed theme. Unknown names fall back to dark.
    pub fn theme_type(&self) -> ThemeType {
        self.theme.parse().unwrap_or_else(|_| {
            warn!("Unknown theme {:?} in config, using dark", self.theme);
            ThemeType::Dark
        })
    }

    /// Apply command-line overrides for this run only.
    pub fn with_overrides(mut self, theme: Option<ThemeType>, preset: Option<KeymapPreset>) -> Self {
        if let Some(theme) = theme {
            self.theme = theme.name().to_string();
        }
        if let Some(preset) = preset {
            self.keymap.preset = preset;
        }
        self
    }
}
